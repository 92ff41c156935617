//! Typed run settings extracted from parsed arguments.

use std::path::PathBuf;

use clap::ArgMatches;
use numix_lib::RandomSource;

/// Output format of the demo report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
}

/// Settings for one demo run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub output: PathBuf,
    pub seed: Option<u64>,
    pub format: ReportFormat,
    pub quiet: bool,
}

impl RunConfig {
    pub fn from_matches(args: &ArgMatches) -> Self {
        let output = args
            .get_one::<String>("output")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("log.txt"));
        let format = match args.get_one::<String>("format").map(String::as_str) {
            Some("json") => ReportFormat::Json,
            _ => ReportFormat::Text,
        };

        Self {
            output,
            seed: args.get_one::<u64>("seed").copied(),
            format,
            quiet: args.get_flag("quiet"),
        }
    }

    /// Random source for the run: seeded when a seed was given.
    pub fn random_source(&self) -> RandomSource {
        match self.seed {
            Some(seed) => RandomSource::seeded(seed),
            None => RandomSource::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::build_cli;

    #[test]
    fn reads_all_settings() {
        let matches = build_cli()
            .try_get_matches_from(["numix", "-o", "out.json", "--seed", "42", "-f", "json", "-q"])
            .expect("parse");
        let config = RunConfig::from_matches(&matches);
        assert_eq!(config.output, PathBuf::from("out.json"));
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.format, ReportFormat::Json);
        assert!(config.quiet);
    }

    #[test]
    fn same_seed_same_stream() {
        let matches = build_cli()
            .try_get_matches_from(["numix", "--seed", "9"])
            .expect("parse");
        let config = RunConfig::from_matches(&matches);
        let mut a = config.random_source();
        let mut b = config.random_source();
        assert_eq!(a.dataset(8, 0, 99), b.dataset(8, 0, 99));
    }
}
