//! Command-line interface definitions for themes-repo.

use std::path::PathBuf;

use catalog::{
    CatalogConfig, CheckConfig, InvalidFilePolicy, UrlTemplates,
    builder::{DEFAULT_OUTPUT, DEFAULT_THEMES_DIR},
    urls::{DEFAULT_BASE_URL, DEFAULT_LINK_SEGMENT, DEFAULT_PREVIEW_SEGMENT},
};
use clap::{Args, Parser, Subcommand};
use logging::LogArgs;

/// Command-line interface for the `themes-repo` binary.
#[derive(Parser, Debug)]
#[command(
    name = "themes-repo",
    about = "Publish and check the picodulce theme catalog",
    version
)]
pub struct Cli {
    /// Logging controls.
    #[command(flatten)]
    pub log: LogArgs,

    /// What to do.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan the themes directory and write repo.json.
    Build(BuildArgs),
    /// Validate theme files and report missing previews.
    Check(CheckArgs),
}

/// Arguments for the `build` subcommand.
#[derive(Args, Debug, Clone)]
pub struct BuildArgs {
    /// Directory holding `*.json` theme files.
    #[arg(long, value_name = "DIR", default_value = DEFAULT_THEMES_DIR)]
    pub themes_dir: PathBuf,

    /// Path the catalog is written to.
    #[arg(long, short, value_name = "FILE", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Base URL for download and preview links.
    #[arg(long, value_name = "URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Repository directory prefixed to theme file names in links.
    #[arg(long, value_name = "SEGMENT", default_value = DEFAULT_LINK_SEGMENT)]
    pub link_segment: String,

    /// Repository directory holding preview images.
    #[arg(long, value_name = "SEGMENT", default_value = DEFAULT_PREVIEW_SEGMENT)]
    pub preview_segment: String,

    /// Leave `preview` URLs out of the catalog.
    #[arg(long)]
    pub no_preview: bool,

    /// Warn about and skip malformed theme files instead of aborting.
    #[arg(long)]
    pub skip_invalid: bool,
}

impl From<BuildArgs> for CatalogConfig {
    fn from(args: BuildArgs) -> Self {
        Self {
            themes_dir: args.themes_dir,
            output: args.output,
            urls: UrlTemplates {
                base: args.base_url,
                link_segment: args.link_segment,
                preview_segment: args.preview_segment,
            },
            previews: !args.no_preview,
            policy: if args.skip_invalid {
                InvalidFilePolicy::Skip
            } else {
                InvalidFilePolicy::Abort
            },
        }
    }
}

/// Arguments for the `check` subcommand.
#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    /// Directory holding `*.json` theme files.
    #[arg(long, value_name = "DIR", default_value = DEFAULT_THEMES_DIR)]
    pub themes_dir: PathBuf,

    /// Directory holding rendered `{name}.png` previews.
    #[arg(long, value_name = "DIR", default_value = DEFAULT_PREVIEW_SEGMENT)]
    pub previews_dir: PathBuf,
}

impl From<CheckArgs> for CheckConfig {
    fn from(args: CheckArgs) -> Self {
        Self {
            themes_dir: args.themes_dir,
            previews_dir: args.previews_dir,
        }
    }
}
