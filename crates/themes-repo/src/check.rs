//! The `check` command: validate theme files for the preview renderer.

use catalog::{CheckConfig, CheckReport, Finding, check_themes};

use crate::{
    cli::CheckArgs,
    error::{Error, Result},
};

/// Check the themes described by `args`, failing if any schema error is found.
pub fn run(args: CheckArgs) -> Result<()> {
    let report = check_themes(&CheckConfig::from(args))?;
    print!("{}", render(&report));

    match report.error_count() {
        0 => Ok(()),
        errors => Err(Error::CheckFailed { errors }),
    }
}

/// Render a report as one block per file with findings, plus a summary line.
fn render(report: &CheckReport) -> String {
    let mut out = String::new();
    for theme in report.themes.iter().filter(|t| !t.findings.is_empty()) {
        out.push_str(&format!("{}\n", theme.file.display()));
        for finding in &theme.findings {
            let tag = match finding {
                Finding::Schema(_) => "error",
                Finding::Warning(_) => "warning",
            };
            out.push_str(&format!("  {tag}: {}\n", finding.message()));
        }
    }
    out.push_str(&format!(
        "checked {} theme(s): {} error(s), {} warning(s)\n",
        report.themes.len(),
        report.error_count(),
        report.warning_count()
    ));
    out
}
