//! # numix
//!
//! Demo driver that exercises the numix mixers and writes a report.

use log::error;

mod cli;
mod demo;
mod error;
mod logging;
mod runner;

fn main() {
    let args = cli::args::build_cli().get_matches();
    let config = cli::config::RunConfig::from_matches(&args);
    logging::init(config.quiet);

    let code = match runner::run(&config) {
        Ok(code) => code,
        Err(err) => {
            error!("{}", err.to_string().to_lowercase());
            -1
        }
    };

    std::process::exit(code)
}
