use blockadjust::cli::Cli;
use blockadjust::{logging, run};
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.debug, cli.log_config.as_deref()) {
        eprintln!("ERROR {e}");
        return ExitCode::from(1);
    }
    log::debug!("#Start main() {cli:?}");

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}
