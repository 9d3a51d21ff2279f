//! Directory scan and catalog generation.

use std::{
    ffi::OsStr,
    fs, io,
    path::{Path, PathBuf},
};

use tracing::{debug, info, warn};

use crate::{
    Error, Result,
    descriptor::ThemeDescriptor,
    entry::{Catalog, CatalogEntry},
    urls::UrlTemplates,
};

/// Default directory scanned for theme files.
pub const DEFAULT_THEMES_DIR: &str = "themes";
/// Default catalog output path.
pub const DEFAULT_OUTPUT: &str = "repo.json";
/// Extension identifying theme files.
pub const THEME_EXTENSION: &str = "json";

/// What to do with a theme file that fails to parse or has a malformed manifest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InvalidFilePolicy {
    /// Fail the whole run without writing any output.
    #[default]
    Abort,
    /// Log a warning and leave the file out of the catalog.
    Skip,
}

/// Settings for a catalog build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Directory scanned for `*.json` theme files.
    pub themes_dir: PathBuf,
    /// Path the catalog is written to.
    pub output: PathBuf,
    /// URL templates for `link` and `preview`.
    pub urls: UrlTemplates,
    /// Whether entries carry a `preview` URL.
    pub previews: bool,
    /// Handling of malformed theme files.
    pub policy: InvalidFilePolicy,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            themes_dir: PathBuf::from(DEFAULT_THEMES_DIR),
            output: PathBuf::from(DEFAULT_OUTPUT),
            urls: UrlTemplates::default(),
            previews: true,
            policy: InvalidFilePolicy::default(),
        }
    }
}

/// Outcome of a catalog build.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// The sorted catalog.
    pub catalog: Catalog,
    /// Number of candidate files examined.
    pub scanned: usize,
    /// Files skipped because they carry no manifest.
    pub without_manifest: Vec<PathBuf>,
    /// Files skipped as malformed under [`InvalidFilePolicy::Skip`].
    pub invalid: Vec<PathBuf>,
}

/// List theme files directly inside `dir`, in sorted path order.
///
/// Only regular files whose name ends in `.json` are returned, including a
/// file named exactly `.json`; subdirectories are not descended into.
pub fn scan_candidates(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(Error::NotFound {
            path: dir.to_path_buf(),
        });
    }

    let read_err = |source: io::Error| Error::Read {
        path: dir.to_path_buf(),
        source,
    };
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_err)? {
        let path = entry.map_err(read_err)?.path();
        if is_theme_file_name(&path) && path.is_file() {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

/// Scan `config.themes_dir` and build the catalog in memory.
pub fn build_catalog(config: &CatalogConfig) -> Result<BuildReport> {
    let candidates = scan_candidates(&config.themes_dir)?;
    debug!(dir = %config.themes_dir.display(), count = candidates.len(), "scanning themes");

    let mut report = BuildReport {
        scanned: candidates.len(),
        ..BuildReport::default()
    };
    let mut entries = Vec::with_capacity(candidates.len());
    for path in candidates {
        match entry_for_file(&path, config) {
            Ok(Some(entry)) => {
                info!(
                    name = %entry.name,
                    author = %entry.author,
                    file = %path.display(),
                    "catalogued theme"
                );
                entries.push(entry);
            }
            Ok(None) => {
                debug!(file = %path.display(), "no manifest; skipping");
                report.without_manifest.push(path);
            }
            Err(err) if config.policy == InvalidFilePolicy::Skip && err.is_file_local() => {
                warn!("skipping invalid theme: {err}");
                report.invalid.push(path);
            }
            Err(err) => return Err(err),
        }
    }

    report.catalog = Catalog::from_entries(entries);
    Ok(report)
}

/// Build the catalog and write it to `config.output`.
///
/// Nothing is written unless every candidate was processed successfully.
pub fn run_build(config: &CatalogConfig) -> Result<BuildReport> {
    let report = build_catalog(config)?;
    report.catalog.write_to(&config.output)?;
    info!(
        output = %config.output.display(),
        themes = report.catalog.len(),
        "catalog written"
    );
    Ok(report)
}

/// Produce the catalog entry for one theme file, or `None` if it has no manifest.
fn entry_for_file(path: &Path, config: &CatalogConfig) -> Result<Option<CatalogEntry>> {
    let descriptor = ThemeDescriptor::load(path)?;
    if !descriptor.unrecognized.is_empty() {
        warn!(
            file = %path.display(),
            keys = ?descriptor.unrecognized,
            "ignoring unrecognized keys"
        );
    }
    let Some(manifest) = descriptor.manifest()? else {
        return Ok(None);
    };

    let link = config
        .urls
        .link(&relative_path(&config.themes_dir, path)?);
    let preview = if config.previews {
        Some(config.urls.preview(file_stem(path)?))
    } else {
        None
    };
    Ok(Some(CatalogEntry::new(manifest, link, preview)))
}

/// Whether the file name of `path` ends in `.json`.
fn is_theme_file_name(path: &Path) -> bool {
    path.file_name()
        .and_then(OsStr::to_str)
        .is_some_and(|name| name.ends_with(&format!(".{THEME_EXTENSION}")))
}

/// Path of `path` below `root`, as a `/`-separated string.
fn relative_path(root: &Path, path: &Path) -> Result<String> {
    let relative = path.strip_prefix(root).unwrap_or(path);
    let text = relative
        .to_str()
        .ok_or_else(|| Error::schema(path, "theme path must be valid UTF-8"))?;
    Ok(text.replace('\\', "/"))
}

/// File name of `path` without its extension.
pub(crate) fn file_stem(path: &Path) -> Result<&str> {
    path.file_stem()
        .and_then(OsStr::to_str)
        .ok_or_else(|| Error::schema(path, "theme filename must be valid UTF-8"))
}
