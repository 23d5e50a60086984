//! Bookmark codec for Markd.
//!
//! The `bookmarks` key has carried two wire schemas over time: a bare array
//! of URL strings (legacy) and an array of structured records (current). The
//! two are distinguished purely by shape — if the first element is an object
//! with a `url` field the document is current-schema, otherwise every element
//! is treated as a legacy bare-URL entry and migrated. Migration is one-way;
//! the legacy shape is read, never written, by the app.
//!
//! Decoding never fails: malformed JSON, non-array documents, and
//! unexpected element shapes all degrade to an empty collection so that a
//! corrupt value can never take the app down.

use std::time::{SystemTime, UNIX_EPOCH};

use url::Url;
use uuid::Uuid;

use crate::types::bookmark::Bookmark;
use crate::types::errors::BookmarkError;

/// Generates a fresh opaque id token.
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

/// Returns the current UNIX timestamp in milliseconds.
pub fn now_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as i64
}

/// Whether `url` is a syntactically valid absolute URL.
pub fn is_valid_url(url: &str) -> bool {
    Url::parse(url).is_ok()
}

/// Derives a display title from a URL: the host name with a leading `www.`
/// stripped. Falls back to the raw string when it does not parse as a URL or
/// has no host.
pub fn extract_title_from_url(url: &str) -> String {
    match Url::parse(url) {
        Ok(parsed) => match parsed.host_str() {
            Some(host) => host.strip_prefix("www.").unwrap_or(host).to_string(),
            None => url.to_string(),
        },
        Err(_) => url.to_string(),
    }
}

/// Migrates one legacy bare-URL entry into a current-schema record.
///
/// The original save time is unrecoverable from the legacy shape, so
/// `created_at` is the migration instant.
pub fn migrate_legacy_url(url: &str) -> Bookmark {
    Bookmark {
        id: generate_id(),
        title: extract_title_from_url(url),
        url: url.to_string(),
        tags: Vec::new(),
        created_at: now_ms(),
    }
}

/// Decodes the raw stored value into a bookmark collection, in stored
/// (append) order. Never fails; see the module docs for the degradation
/// rules.
pub fn decode(raw: Option<&str>) -> Vec<Bookmark> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    if raw.trim().is_empty() {
        return Vec::new();
    }

    let value: serde_json::Value = match serde_json::from_str(raw) {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!(error = %e, "stored bookmarks are not valid JSON, treating as empty");
            return Vec::new();
        }
    };

    let Some(items) = value.as_array() else {
        tracing::warn!("stored bookmarks are not an array, treating as empty");
        return Vec::new();
    };

    match items.first() {
        // Current schema: first element is a structured record.
        Some(first) if first.get("url").is_some() => {
            match serde_json::from_value::<Vec<Bookmark>>(value.clone()) {
                Ok(bookmarks) => bookmarks,
                Err(e) => {
                    tracing::warn!(error = %e, "stored bookmarks failed to deserialize, treating as empty");
                    Vec::new()
                }
            }
        }
        // Legacy schema (or an empty array): every element must be a bare
        // URL string.
        _ => {
            let mut migrated = Vec::with_capacity(items.len());
            for item in items {
                match item.as_str() {
                    Some(url) => migrated.push(migrate_legacy_url(url)),
                    None => {
                        tracing::warn!("stored bookmarks have mixed shapes, treating as empty");
                        return Vec::new();
                    }
                }
            }
            migrated
        }
    }
}

/// Encodes a collection into the current wire schema. Round-trips losslessly
/// through [`decode`] for current-schema data.
pub fn encode(bookmarks: &[Bookmark]) -> Result<String, BookmarkError> {
    serde_json::to_string(bookmarks).map_err(|e| BookmarkError::Serialization(e.to_string()))
}
