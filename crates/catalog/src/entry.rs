//! Catalog entries and the aggregated `repo.json` document.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{Error, Result, descriptor::Manifest};

/// One published theme in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Display name from the manifest.
    pub name: String,
    /// Description from the manifest.
    pub description: String,
    /// Author from the manifest.
    pub author: String,
    /// License from the manifest.
    pub license: String,
    /// Download URL of the theme file.
    pub link: String,
    /// URL of the rendered preview image, when previews are enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,
}

impl CatalogEntry {
    /// Combine manifest metadata with the derived URLs.
    pub fn new(manifest: Manifest, link: String, preview: Option<String>) -> Self {
        let Manifest {
            name,
            description,
            author,
            license,
        } = manifest;
        Self {
            name,
            description,
            author,
            license,
            link,
            preview,
        }
    }
}

/// The aggregated catalog written to `repo.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Entries sorted ascending by name.
    pub themes: Vec<CatalogEntry>,
}

impl Catalog {
    /// Build a catalog, stable-sorting entries by name.
    ///
    /// Entries with equal names keep the order they were supplied in.
    pub fn from_entries(mut themes: Vec<CatalogEntry>) -> Self {
        themes.sort_by(|a, b| a.name.cmp(&b.name));
        Self { themes }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.themes.len()
    }

    /// Whether the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    /// Render as JSON with two-space indentation.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(Error::Serialize)
    }

    /// Serialize and write to `path`, replacing any existing file.
    ///
    /// Serialization happens before the file is touched, so a failure leaves
    /// the previous contents intact.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let json = self.to_json_pretty()?;
        fs::write(path, json).map_err(|source| Error::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Read a previously written catalog.
    pub fn load(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&source).map_err(|source| Error::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, author: &str) -> CatalogEntry {
        CatalogEntry {
            name: name.into(),
            description: String::new(),
            author: author.into(),
            license: "MIT".into(),
            link: format!("https://example.com/themes/{name}.json"),
            preview: None,
        }
    }

    #[test]
    fn sort_is_by_name_and_stable() {
        let catalog = Catalog::from_entries(vec![
            entry("Light", "a"),
            entry("Dark", "first"),
            entry("Amber", "a"),
            entry("Dark", "second"),
        ]);
        let order: Vec<_> = catalog
            .themes
            .iter()
            .map(|e| (e.name.as_str(), e.author.as_str()))
            .collect();
        assert_eq!(
            order,
            vec![
                ("Amber", "a"),
                ("Dark", "first"),
                ("Dark", "second"),
                ("Light", "a"),
            ]
        );
    }

    #[test]
    fn sort_is_case_sensitive() {
        let catalog = Catalog::from_entries(vec![entry("dark", "a"), entry("Light", "a")]);
        assert_eq!(catalog.themes[0].name, "Light");
        assert_eq!(catalog.themes[1].name, "dark");
    }

    #[test]
    fn empty_catalog_renders_empty_list() {
        let json = Catalog::default().to_json_pretty().unwrap();
        assert_eq!(json, "{\n  \"themes\": []\n}");
    }

    #[test]
    fn preview_is_omitted_when_absent() {
        let json = Catalog::from_entries(vec![entry("Dark", "nixietab")])
            .to_json_pretty()
            .unwrap();
        assert!(!json.contains("preview"));

        let mut with_preview = entry("Dark", "nixietab");
        with_preview.preview = Some("https://example.com/previews/Dark.png".into());
        let json = Catalog::from_entries(vec![with_preview])
            .to_json_pretty()
            .unwrap();
        assert!(json.contains("\"preview\": \"https://example.com/previews/Dark.png\""));
    }

    #[test]
    fn fields_serialize_in_published_order() {
        let json = Catalog::from_entries(vec![entry("Dark", "nixietab")])
            .to_json_pretty()
            .unwrap();
        let keys = ["\"name\"", "\"description\"", "\"author\"", "\"license\"", "\"link\""];
        let positions: Vec<_> = keys.iter().map(|k| json.find(k).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{json}");
    }

    #[test]
    fn json_round_trips() {
        let mut themed = entry("Dark", "nixietab");
        themed.description = "Ünïcødé and \"quotes\"".into();
        themed.preview = Some("https://example.com/previews/Dark.png".into());
        let catalog = Catalog::from_entries(vec![themed, entry("Light", "nixietab")]);
        let json = catalog.to_json_pretty().unwrap();
        let back: Catalog = serde_json::from_str(&json).unwrap();
        assert_eq!(back, catalog);
    }
}
