use std::fs::File;
use std::io::{BufWriter, Write};

use log::{debug, info};

use numix_lib::report;

use crate::cli::config::{ReportFormat, RunConfig};
use crate::demo::Scenario;
use crate::error::RunError;

/// Build the demo scenario and write its report to the configured path.
pub fn run(config: &RunConfig) -> Result<i32, RunError> {
    info!("Starting numix report -> {}", config.output.display());
    if let Some(seed) = config.seed {
        debug!("using seed {}", seed);
    }

    let mut rng = config.random_source();
    let scenario = Scenario::build(&mut rng)?;
    let mut writer = BufWriter::new(File::create(&config.output)?);

    match config.format {
        ReportFormat::Text => scenario.write_text(&mut writer, &mut rng)?,
        ReportFormat::Json => {
            let value = scenario.to_json(&mut rng)?;
            writeln!(writer, "{}", report::to_json(&value)?)?;
        }
    }
    writer.flush()?;

    info!("Report written to {}", config.output.display());
    Ok(0)
}
