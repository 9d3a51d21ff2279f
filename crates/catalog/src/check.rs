//! Descriptor validation for the preview renderer.
//!
//! The renderer consumes the `palette`, `stylesheet` and
//! `background_image_base64` sections that the catalog ignores. Checking them
//! up front turns a broken screenshot run into a readable report, and flags
//! published themes whose preview image has not been produced yet.

use std::{
    path::{Path, PathBuf},
    result::Result as StdResult,
};

use base64::{DecodeError, Engine as _, engine::general_purpose::STANDARD};
use serde_json::Value;
use tracing::{debug, warn};

use crate::{
    Error, Result,
    builder::{DEFAULT_THEMES_DIR, file_stem, scan_candidates},
    descriptor::{BACKGROUND_KEY, PALETTE_KEY, STYLESHEET_KEY, ThemeDescriptor},
    urls::{DEFAULT_PREVIEW_SEGMENT, PREVIEW_EXTENSION},
};

/// Settings for a descriptor check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckConfig {
    /// Directory scanned for `*.json` theme files.
    pub themes_dir: PathBuf,
    /// Directory expected to hold `{stem}.png` previews.
    pub previews_dir: PathBuf,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            themes_dir: PathBuf::from(DEFAULT_THEMES_DIR),
            previews_dir: PathBuf::from(DEFAULT_PREVIEW_SEGMENT),
        }
    }
}

/// A single problem found in a theme file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finding {
    /// The renderer cannot use this theme.
    Schema(String),
    /// Informational; the theme is usable but incomplete.
    Warning(String),
}

impl Finding {
    /// Whether this finding is an error.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Schema(_))
    }

    /// The finding's message.
    pub fn message(&self) -> &str {
        match self {
            Self::Schema(msg) | Self::Warning(msg) => msg,
        }
    }
}

/// Findings for one theme file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeCheck {
    /// The checked file.
    pub file: PathBuf,
    /// Problems found, in discovery order.
    pub findings: Vec<Finding>,
}

/// Findings for a whole themes directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    /// One record per candidate file, in sorted path order.
    pub themes: Vec<ThemeCheck>,
}

impl CheckReport {
    /// Total number of schema errors.
    pub fn error_count(&self) -> usize {
        self.findings().filter(|f| f.is_error()).count()
    }

    /// Total number of warnings.
    pub fn warning_count(&self) -> usize {
        self.findings().filter(|f| !f.is_error()).count()
    }

    /// Iterate every finding across all files.
    fn findings(&self) -> impl Iterator<Item = &Finding> {
        self.themes.iter().flat_map(|t| t.findings.iter())
    }
}

/// Check every theme file in `config.themes_dir`.
///
/// Parse and schema problems become findings; only an unreadable directory
/// or file fails the call.
pub fn check_themes(config: &CheckConfig) -> Result<CheckReport> {
    let mut report = CheckReport::default();
    for path in scan_candidates(&config.themes_dir)? {
        let findings = check_file(&path, &config.previews_dir)?;
        for finding in &findings {
            match finding {
                Finding::Schema(msg) => warn!(file = %path.display(), "{msg}"),
                Finding::Warning(msg) => debug!(file = %path.display(), "{msg}"),
            }
        }
        report.themes.push(ThemeCheck {
            file: path,
            findings,
        });
    }
    Ok(report)
}

/// Check one theme file.
fn check_file(path: &Path, previews_dir: &Path) -> Result<Vec<Finding>> {
    let descriptor = match ThemeDescriptor::load(path) {
        Ok(descriptor) => descriptor,
        Err(err) if err.is_file_local() => return Ok(vec![Finding::Schema(err.to_string())]),
        Err(err) => return Err(err),
    };

    let mut findings = check_descriptor(&descriptor);
    if descriptor.has_manifest() {
        let preview = previews_dir.join(format!("{}.{PREVIEW_EXTENSION}", file_stem(path)?));
        if !preview.is_file() {
            findings.push(Finding::Warning(format!(
                "preview image {} is missing",
                preview.display()
            )));
        }
    }
    Ok(findings)
}

/// Validate the sections of a parsed descriptor.
pub fn check_descriptor(descriptor: &ThemeDescriptor) -> Vec<Finding> {
    if !descriptor.object_root {
        return vec![Finding::Schema(
            "theme document must be a JSON object".to_string(),
        )];
    }

    let mut findings = Vec::new();

    match descriptor.manifest() {
        Ok(Some(_)) => {}
        Ok(None) => findings.push(Finding::Warning(
            "no manifest; theme will not be published".to_string(),
        )),
        Err(Error::Schema { message, .. }) => findings.push(Finding::Schema(message)),
        Err(err) => findings.push(Finding::Schema(err.to_string())),
    }

    match &descriptor.palette {
        None => findings.push(Finding::Schema(format!("missing `{PALETTE_KEY}` section"))),
        Some(Value::Object(roles)) => {
            for (role, color) in roles {
                if !color.is_string() {
                    findings.push(Finding::Schema(format!(
                        "palette role `{role}` must map to a color string"
                    )));
                }
            }
        }
        Some(_) => findings.push(Finding::Schema(format!(
            "`{PALETTE_KEY}` must be an object"
        ))),
    }

    match &descriptor.stylesheet {
        None => findings.push(Finding::Warning(format!("no `{STYLESHEET_KEY}` section"))),
        Some(Value::String(_)) => {}
        Some(_) => findings.push(Finding::Schema(format!(
            "`{STYLESHEET_KEY}` must be a string"
        ))),
    }

    match &descriptor.background_image_base64 {
        None => findings.push(Finding::Warning("no background image".to_string())),
        Some(Value::String(data)) => {
            if let Err(err) = decode_background(data) {
                findings.push(Finding::Schema(format!(
                    "`{BACKGROUND_KEY}` is not valid base64: {err}"
                )));
            }
        }
        Some(_) => findings.push(Finding::Schema(format!(
            "`{BACKGROUND_KEY}` must be a string"
        ))),
    }

    for key in &descriptor.unrecognized {
        findings.push(Finding::Warning(format!("unrecognized key `{key}`")));
    }

    findings
}

/// Decode a background payload, ignoring embedded whitespace.
fn decode_background(data: &str) -> StdResult<Vec<u8>, DecodeError> {
    let compact: String = data.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    STANDARD.decode(compact)
}
