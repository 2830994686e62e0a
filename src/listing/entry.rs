use serde::Deserialize;

/// One shared file as declared in a listing.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileEntry {
    /// Number of 1024-byte segments the file occupies.
    pub segments: u64,

    /// Hex digest of the file content, when known.
    #[serde(default)]
    pub digest: Option<String>,
}
