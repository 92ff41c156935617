//! CLI argument definitions for `numix-cli`.

use clap::{value_parser, Arg, ArgAction, Command};

/// Build the CLI argument parser.
pub fn build_cli() -> Command {
    // Every argument is optional; a bare `numix` reproduces the classic log.txt run.
    Command::new("numix")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Adam Howard <adam.thomas.howard@gmail.com>")
        .about("Exercise the numix mixers and write a behavior report")
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .value_name("PATH")
                .default_value("log.txt")
                .help("Path of the report file to write"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_name("SEED")
                .value_parser(value_parser!(u64))
                .help("Seed the random source for a reproducible report"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .value_name("FORMAT")
                .value_parser(["text", "json"])
                .default_value("text")
                .help("Report format"),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .action(ArgAction::SetTrue)
                .help("Only log errors"),
        )
}
