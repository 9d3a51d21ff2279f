//! Download and preview URL construction.

/// Raw-content root of the published themes repository.
pub const DEFAULT_BASE_URL: &str =
    "https://raw.githubusercontent.com/nixietab/picodulce-themes/refs/heads/main";
/// Repository directory holding theme files.
pub const DEFAULT_LINK_SEGMENT: &str = "themes";
/// Repository directory holding rendered preview images.
pub const DEFAULT_PREVIEW_SEGMENT: &str = "previews";
/// Extension given to preview images.
pub const PREVIEW_EXTENSION: &str = "png";

/// URL templates used to derive `link` and `preview` for each catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlTemplates {
    /// Base URL shared by both templates.
    pub base: String,
    /// Repository-relative directory prefixed to theme file paths.
    pub link_segment: String,
    /// Repository-relative directory holding preview images.
    pub preview_segment: String,
}

impl Default for UrlTemplates {
    fn default() -> Self {
        Self {
            base: DEFAULT_BASE_URL.to_string(),
            link_segment: DEFAULT_LINK_SEGMENT.to_string(),
            preview_segment: DEFAULT_PREVIEW_SEGMENT.to_string(),
        }
    }
}

impl UrlTemplates {
    /// Download URL for a theme file at `relative_path` below the scan root.
    pub fn link(&self, relative_path: &str) -> String {
        join_url(&[&self.base, &self.link_segment, relative_path])
    }

    /// Preview image URL for a theme whose file stem is `stem`.
    pub fn preview(&self, stem: &str) -> String {
        let file = format!("{stem}.{PREVIEW_EXTENSION}");
        join_url(&[&self.base, &self.preview_segment, &file])
    }
}

/// Join URL parts with single slashes, normalizing backslash separators.
///
/// Empty parts are dropped so an empty segment does not produce `//`.
fn join_url(parts: &[&str]) -> String {
    let mut out = String::new();
    for part in parts {
        let part = part.replace('\\', "/");
        let part = if out.is_empty() {
            part.trim_end_matches('/')
        } else {
            part.trim_matches('/')
        };
        if part.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push('/');
        }
        out.push_str(part);
    }
    out
}
