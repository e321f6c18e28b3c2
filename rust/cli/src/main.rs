use std::io;

fn main() {
    flopnuts_cli::logging::init_logging();
    let code = flopnuts_cli::run(std::env::args(), &mut io::stdout(), &mut io::stderr());
    std::process::exit(code);
}
