//! The `build` command: publish repo.json.

use catalog::{CatalogConfig, run_build};

use crate::{cli::BuildArgs, error::Result};

/// Build the catalog described by `args` and report what was written.
pub fn run(args: BuildArgs) -> Result<()> {
    let config = CatalogConfig::from(args);
    let report = run_build(&config)?;

    println!(
        "wrote {} theme(s) to {} ({} scanned, {} without manifest, {} skipped as invalid)",
        report.catalog.len(),
        config.output.display(),
        report.scanned,
        report.without_manifest.len(),
        report.invalid.len()
    );
    Ok(())
}
