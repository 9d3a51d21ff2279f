//! On-disk theme descriptors.
//!
//! A descriptor is a JSON object with four recognized top-level sections:
//! `manifest`, `palette`, `stylesheet` and `background_image_base64`. Only the
//! manifest feeds the catalog; the remaining sections are inspected by
//! [`crate::check`]. Sections are kept as raw JSON values so that a present
//! `null` can be told apart from an absent key.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use crate::{Error, Result};

/// Top-level key holding theme metadata.
pub const MANIFEST_KEY: &str = "manifest";
/// Top-level key holding the role-to-color mapping.
pub const PALETTE_KEY: &str = "palette";
/// Top-level key holding the widget stylesheet.
pub const STYLESHEET_KEY: &str = "stylesheet";
/// Top-level key holding the base64-encoded background image.
pub const BACKGROUND_KEY: &str = "background_image_base64";

/// A parsed theme file.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeDescriptor {
    /// File the descriptor was read from.
    pub path: PathBuf,
    /// Raw `manifest` section, if the key was present.
    pub manifest: Option<Value>,
    /// Raw `palette` section, if the key was present.
    pub palette: Option<Value>,
    /// Raw `stylesheet` section, if the key was present.
    pub stylesheet: Option<Value>,
    /// Raw `background_image_base64` section, if the key was present.
    pub background_image_base64: Option<Value>,
    /// Top-level keys that are not part of the descriptor schema, in sorted order.
    pub unrecognized: Vec<String>,
    /// Whether the document root was a JSON object.
    ///
    /// Any other root carries no sections and is treated as having no manifest.
    pub object_root: bool,
}

impl ThemeDescriptor {
    /// Read and parse the descriptor at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_str(&source, path)
    }

    /// Parse descriptor `source`, attributing errors to `path`.
    pub fn from_str(source: &str, path: &Path) -> Result<Self> {
        let value: Value = serde_json::from_str(source).map_err(|source| Error::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        let Value::Object(mut root) = value else {
            debug!(file = %path.display(), "theme document is not a JSON object");
            return Ok(Self {
                path: path.to_path_buf(),
                manifest: None,
                palette: None,
                stylesheet: None,
                background_image_base64: None,
                unrecognized: Vec::new(),
                object_root: false,
            });
        };

        let manifest = root.remove(MANIFEST_KEY);
        let palette = root.remove(PALETTE_KEY);
        let stylesheet = root.remove(STYLESHEET_KEY);
        let background_image_base64 = root.remove(BACKGROUND_KEY);

        Ok(Self {
            path: path.to_path_buf(),
            manifest,
            palette,
            stylesheet,
            background_image_base64,
            unrecognized: root.keys().cloned().collect(),
            object_root: true,
        })
    }

    /// Whether the descriptor carries a `manifest` key and so belongs in the catalog.
    pub fn has_manifest(&self) -> bool {
        self.manifest.is_some()
    }

    /// Extract the typed manifest, or `None` when the key is absent.
    pub fn manifest(&self) -> Result<Option<Manifest>> {
        self.manifest
            .as_ref()
            .map(|value| Manifest::from_value(value, &self.path))
            .transpose()
    }
}

/// Theme metadata copied into catalog entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    /// Display name; also the catalog sort key.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Theme author.
    pub author: String,
    /// License identifier or text.
    pub license: String,
}

impl Manifest {
    /// Build a manifest from its raw JSON section.
    ///
    /// Absent or `null` fields become empty strings. Numbers and booleans are
    /// kept as their JSON text. Arrays and objects are rejected.
    pub fn from_value(value: &Value, path: &Path) -> Result<Self> {
        let Value::Object(map) = value else {
            return Err(Error::schema(path, "manifest must be an object"));
        };
        Ok(Self {
            name: text_field(map, "name", path)?,
            description: text_field(map, "description", path)?,
            author: text_field(map, "author", path)?,
            license: text_field(map, "license", path)?,
        })
    }
}

/// Read one free-text manifest field.
fn text_field(map: &Map<String, Value>, key: &str, path: &Path) -> Result<String> {
    match map.get(key) {
        None | Some(Value::Null) => {
            info!(file = %path.display(), field = key, "manifest field missing");
            Ok(String::new())
        }
        Some(Value::String(text)) => Ok(text.clone()),
        Some(value @ (Value::Number(_) | Value::Bool(_))) => {
            warn!(file = %path.display(), field = key, "manifest field is not a string");
            Ok(value.to_string())
        }
        Some(_) => Err(Error::schema(
            path,
            format!("manifest field `{key}` must be a string"),
        )),
    }
}
