pub mod args;
pub mod entry;
pub mod errors;

use std::fs;
use std::path::Path;

use entry::FileEntry;
use errors::ListingError;
use indexmap::IndexMap;
use serde::Deserialize;

/// A declarative listing of shared files, kept in declaration order.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Listing {
    /// Display name of the shared folder.
    #[serde(default)]
    pub folder: Option<String>,

    pub files: IndexMap<String, FileEntry>,
}

pub fn load_listing(path: &str) -> Result<Listing, ListingError> {
    let contents = fs::read_to_string(path)
        .map_err(|e| ListingError::FileError(format!("failed to read {}: {}", path, e)))?;

    let ext = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("");

    match ext {
        "toml" => toml::from_str(&contents)
            .map_err(|e| ListingError::ParseError(format!("{}: {}", path, e))),
        "yaml" | "yml" => serde_yaml::from_str(&contents)
            .map_err(|e| ListingError::ParseError(format!("{}: {}", path, e))),
        "json" => serde_json::from_str(&contents)
            .map_err(|e| ListingError::ParseError(format!("{}: {}", path, e))),
        _ => Err(ListingError::UnsupportedFormat(path.to_string())),
    }
}
