#![warn(missing_docs)]
//! Theme catalog generation for the picodulce themes repository.
//!
//! The crate scans a directory of JSON theme descriptors and produces the
//! `repo.json` catalog consumed by the launcher:
//! - [`descriptor`]: parse theme files and extract their manifest
//! - [`entry`]: catalog entries and the sorted [`Catalog`] document
//! - [`urls`]: download and preview URL templates
//! - [`builder`]: directory scan, catalog build, and output
//! - [`check`]: validate the sections the preview renderer consumes

pub mod builder;
pub mod check;
pub mod descriptor;
pub mod entry;
/// Error and result types for the catalog crate.
mod error;
pub mod urls;

pub use builder::{
    BuildReport, CatalogConfig, InvalidFilePolicy, build_catalog, run_build, scan_candidates,
};
pub use check::{CheckConfig, CheckReport, Finding, ThemeCheck, check_themes};
pub use descriptor::{Manifest, ThemeDescriptor};
pub use entry::{Catalog, CatalogEntry};
pub use error::{Error, Result};
pub use urls::UrlTemplates;
