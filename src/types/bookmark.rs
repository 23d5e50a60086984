use serde::{Deserialize, Serialize};

/// A saved bookmark, in the current wire schema.
///
/// Serialized field names are camelCase because the stored JSON documents are
/// shared with the extension build, which already writes `createdAt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub id: String,
    pub title: String,
    pub url: String,
    /// Folder ids this bookmark is tagged with. Order-irrelevant, may be
    /// empty, and may reference folders that no longer exist.
    pub tags: Vec<String>,
    /// Epoch milliseconds.
    pub created_at: i64,
}

/// A folder (colored tag) for organizing bookmarks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    pub id: String,
    pub name: String,
    /// `#RRGGBB` hex string.
    pub color: String,
    /// Epoch milliseconds.
    pub created_at: i64,
}
