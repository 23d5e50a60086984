//! Extension-side share writer for Markd.
//!
//! The producer half of the shared-store protocol: invoked exactly once per
//! share action, in an isolated short-lived process with a hard completion
//! deadline. It performs one read and one whole-value overwrite, appends at
//! the end of the stored array, and never dedups, never retries, and never
//! surfaces a failure to the user — the host UI is dismissed either way.
//!
//! Two historical extension builds spoke different wire schemas. They are
//! one module here, selected by [`WireSchema`]; the `legacy-wire` cargo
//! feature picks the legacy default for builds that still ship it.

use serde_json::Value;

use crate::codec::bookmark_codec;
use crate::config::BOOKMARKS_KEY;
use crate::storage::SharedStore;
use crate::types::errors::StoreError;

/// Wire schema the writer appends in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireSchema {
    /// Bare URL strings. Historical; still readable everywhere.
    Legacy,
    /// Structured bookmark records.
    Current,
}

impl Default for WireSchema {
    fn default() -> Self {
        #[cfg(feature = "legacy-wire")]
        {
            WireSchema::Legacy
        }
        #[cfg(not(feature = "legacy-wire"))]
        {
            WireSchema::Current
        }
    }
}

/// Append-only writer over a shared store handle.
pub struct ShareWriter<'a> {
    store: &'a dyn SharedStore,
    schema: WireSchema,
}

impl<'a> ShareWriter<'a> {
    /// Creates a writer using the build's default wire schema.
    pub fn new(store: &'a dyn SharedStore) -> Self {
        Self::with_schema(store, WireSchema::default())
    }

    pub fn with_schema(store: &'a dyn SharedStore, schema: WireSchema) -> Self {
        Self { store, schema }
    }

    pub fn schema(&self) -> WireSchema {
        self.schema
    }

    /// Handles one share action: appends `url` to the stored collection and
    /// overwrites it.
    ///
    /// Never panics and never blocks on retries. The return value records
    /// whether the save landed; callers dismiss the host UI regardless, so a
    /// `false` is only ever logged.
    pub fn handle_shared_url(&self, url: &str) -> bool {
        let raw = match self.store.get(BOOKMARKS_KEY) {
            Ok(raw) => raw,
            Err(StoreError::TransientUnavailable) => None,
            Err(e) => {
                tracing::warn!(error = %e, "share writer read failed, starting from empty");
                None
            }
        };

        let encoded = match self.schema {
            WireSchema::Current => self.append_current(raw.as_deref(), url),
            WireSchema::Legacy => self.append_legacy(raw.as_deref(), url),
        };

        let Some(encoded) = encoded else {
            tracing::error!(url, "share writer failed to encode collection");
            return false;
        };

        match self.store.set(BOOKMARKS_KEY, &encoded) {
            Ok(()) => true,
            Err(e) => {
                // Background path: logged and abandoned, never surfaced.
                tracing::error!(error = %e, url, "share writer failed to save");
                false
            }
        }
    }

    /// Current-schema append: decodes the full collection (migrating any
    /// legacy entries it finds, like the current extension build does) and
    /// appends a structured record.
    fn append_current(&self, raw: Option<&str>, url: &str) -> Option<String> {
        let mut bookmarks = bookmark_codec::decode(raw);
        bookmarks.push(bookmark_codec::migrate_legacy_url(url));
        bookmark_codec::encode(&bookmarks).ok()
    }

    /// Legacy-schema append: appends a bare URL string, preserving every
    /// existing array element verbatim whatever schema it is in. Entries are
    /// never dropped just because this build cannot decode them.
    fn append_legacy(&self, raw: Option<&str>, url: &str) -> Option<String> {
        let mut items: Vec<Value> = match raw {
            Some(raw) if !raw.trim().is_empty() => match serde_json::from_str::<Value>(raw) {
                Ok(Value::Array(items)) => items,
                Ok(_) | Err(_) => {
                    tracing::warn!("share writer found undecodable bookmarks, starting empty");
                    Vec::new()
                }
            },
            _ => Vec::new(),
        };

        items.push(Value::String(url.to_string()));
        serde_json::to_string(&Value::Array(items)).ok()
    }
}
