use serde::{Deserialize, Serialize};
use std::fs;

pub const CONFIG_ENV: &str = "FLOPNUTS_CONFIG";
pub const SEED_ENV: &str = "FLOPNUTS_SEED";
pub const RNG_ENV: &str = "FLOPNUTS_RNG";
pub const ROUNDS_ENV: &str = "FLOPNUTS_ROUNDS";

/// Generator used to deal practice flops.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RngKind {
    /// Reproducible linear congruential generator
    #[default]
    Lcg,
    /// ChaCha20, for flops that should not be predictable
    Chacha,
}

impl RngKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RngKind::Lcg => "lcg",
            RngKind::Chacha => "chacha",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub seed: Option<u64>,
    pub rng: RngKind,
    /// Maximum number of flops per practice session
    pub rounds: Option<u32>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    #[default]
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigSources {
    pub seed: ValueSource,
    pub rng: ValueSource,
    pub rounds: ValueSource,
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

/// Defaults, then the TOML file named by `FLOPNUTS_CONFIG`, then the
/// individual `FLOPNUTS_*` variables.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(CONFIG_ENV)
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.rng {
            cfg.rng = v;
            sources.rng = ValueSource::File;
        }
        if let Some(v) = f.rounds {
            cfg.rounds = Some(v);
            sources.rounds = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var(SEED_ENV)
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid(format!("Invalid seed: {}", seed)))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(rng) = std::env::var(RNG_ENV)
        && !rng.is_empty()
    {
        cfg.rng = parse_rng_kind(&rng)
            .ok_or_else(|| ConfigError::Invalid(format!("Invalid rng: {}", rng)))?;
        sources.rng = ValueSource::Env;
    }
    if let Ok(rounds) = std::env::var(ROUNDS_ENV)
        && !rounds.is_empty()
    {
        cfg.rounds = Some(
            rounds
                .parse()
                .map_err(|_| ConfigError::Invalid(format!("Invalid rounds: {}", rounds)))?,
        );
        sources.rounds = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    rng: Option<RngKind>,
    #[serde(default)]
    rounds: Option<u32>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.rounds == Some(0) {
        return Err(ConfigError::Invalid(
            "Invalid configuration: rounds must be >=1".into(),
        ));
    }
    Ok(())
}

fn parse_rng_kind(s: &str) -> Option<RngKind> {
    match s.to_ascii_lowercase().as_str() {
        "lcg" => Some(RngKind::Lcg),
        "chacha" | "chacha20" => Some(RngKind::Chacha),
        _ => None,
    }
}
