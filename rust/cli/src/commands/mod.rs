//! Command handler modules for the flopnuts CLI.
//!
//! Each subcommand lives in its own file and follows the same shape:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Output streams (`&mut dyn Write`) and, where needed, stdin are passed in
//! - Errors propagate as [`crate::error::CliError`]

mod cfg;
mod check;
mod deal;
mod nuts;
mod practice;
mod rng;

pub use cfg::handle_cfg_command;
pub use check::handle_check_command;
pub use deal::handle_deal_command;
pub use nuts::handle_nuts_command;
pub use practice::handle_practice_command;
pub use rng::handle_rng_command;

use crate::config::RngKind;
use flopnuts_engine::{DealRng, Lcg};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Build the dealing generator selected by configuration or flags.
pub(crate) fn make_dealer(kind: RngKind, seed: u64) -> Box<dyn DealRng> {
    match kind {
        RngKind::Lcg => Box::new(Lcg::new(seed)),
        RngKind::Chacha => Box::new(ChaCha20Rng::seed_from_u64(seed)),
    }
}
