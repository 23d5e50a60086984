//! App-side bookmark synchronizer for Markd.
//!
//! Implements `BookmarkStoreTrait` — the consumer half of the shared-store
//! protocol. Holds an in-memory view of the collection, refreshed by `load`
//! (on mount and on every app-foreground transition) and persisted back by
//! whole-value overwrite on each user-initiated mutation.
//!
//! There is no cross-process locking: a mutation overwrites the store with
//! this process's view, so a producer append that lands between the last
//! `load` and the overwrite is lost wholesale (last write wins). Loads are
//! pure reads and idempotent, which is why overlapping foreground reloads
//! need no cancellation.

use std::collections::BTreeSet;

use crate::codec::bookmark_codec;
use crate::config::BOOKMARKS_KEY;
use crate::storage::SharedStore;
use crate::types::bookmark::Bookmark;
use crate::types::errors::{BookmarkError, StoreError};

/// Trait defining the app-side bookmark operations.
pub trait BookmarkStoreTrait {
    /// Refreshes the in-memory view from the shared store and returns it in
    /// display order (newest first). Never fails: unavailable or unreadable
    /// storage yields an empty view.
    fn load(&mut self) -> Vec<Bookmark>;
    /// Returns the current view in display order (newest first).
    fn list(&self) -> Vec<Bookmark>;
    /// Validates, appends, and persists a new bookmark. Returns the stored
    /// record.
    fn add(
        &mut self,
        url: &str,
        title: Option<&str>,
        tags: &[String],
    ) -> Result<Bookmark, BookmarkError>;
    /// Removes one bookmark by id and persists the shrunk collection.
    fn delete(&mut self, id: &str) -> Result<(), BookmarkError>;
    /// Replaces the tag set of one bookmark (duplicates dropped) and persists.
    fn set_tags(&mut self, id: &str, tags: &[String]) -> Result<Bookmark, BookmarkError>;
    /// Adds the folder id to the bookmark's tags, or removes it if already
    /// present, then persists.
    fn toggle_tag(&mut self, id: &str, folder_id: &str) -> Result<Bookmark, BookmarkError>;
    /// Bookmarks carrying `tag`, in display order.
    fn filter_by_tag(&self, tag: &str) -> Vec<Bookmark>;
    /// All distinct tags across the view, sorted.
    fn all_tags(&self) -> Vec<String>;
    /// Number of bookmarks carrying `tag`.
    fn count_by_tag(&self, tag: &str) -> usize;
}

/// Bookmark store backed by a shared store handle.
pub struct BookmarkStore<'a> {
    store: &'a dyn SharedStore,
    /// In-memory view, kept in stored (append) order; display order is
    /// produced by reversing at the read boundary.
    bookmarks: Vec<Bookmark>,
    loaded: bool,
}

impl<'a> BookmarkStore<'a> {
    /// Creates a store over the given shared store handle. The view is empty
    /// until the first `load` (mutations load lazily if needed).
    pub fn new(store: &'a dyn SharedStore) -> Self {
        Self {
            store,
            bookmarks: Vec::new(),
            loaded: false,
        }
    }

    fn ensure_loaded(&mut self) {
        if !self.loaded {
            self.load();
        }
    }

    /// Reads and decodes the stored collection, degrading every failure to
    /// an empty collection.
    fn read_stored(&self) -> Vec<Bookmark> {
        match self.store.get(BOOKMARKS_KEY) {
            Ok(raw) => bookmark_codec::decode(raw.as_deref()),
            Err(StoreError::TransientUnavailable) => {
                // Startup race: the container is not reachable yet.
                Vec::new()
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to read bookmarks, treating as empty");
                Vec::new()
            }
        }
    }

    /// Persists `next` and commits it as the new in-memory view.
    fn persist(&mut self, next: Vec<Bookmark>) -> Result<(), BookmarkError> {
        let encoded = bookmark_codec::encode(&next)?;
        self.store
            .set(BOOKMARKS_KEY, &encoded)
            .map_err(|e| BookmarkError::SaveFailed(e.to_string()))?;
        self.bookmarks = next;
        Ok(())
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.bookmarks.iter().position(|b| b.id == id)
    }
}

impl<'a> BookmarkStoreTrait for BookmarkStore<'a> {
    fn load(&mut self) -> Vec<Bookmark> {
        self.bookmarks = self.read_stored();
        self.loaded = true;
        self.list()
    }

    fn list(&self) -> Vec<Bookmark> {
        self.bookmarks.iter().rev().cloned().collect()
    }

    fn add(
        &mut self,
        url: &str,
        title: Option<&str>,
        tags: &[String],
    ) -> Result<Bookmark, BookmarkError> {
        // Validation happens before any store mutation.
        if !bookmark_codec::is_valid_url(url) {
            return Err(BookmarkError::InvalidUrl(url.to_string()));
        }
        self.ensure_loaded();

        let mut unique_tags = Vec::new();
        for tag in tags {
            if !unique_tags.contains(tag) {
                unique_tags.push(tag.clone());
            }
        }

        let bookmark = Bookmark {
            id: bookmark_codec::generate_id(),
            title: title
                .map(str::to_string)
                .unwrap_or_else(|| bookmark_codec::extract_title_from_url(url)),
            url: url.to_string(),
            tags: unique_tags,
            created_at: bookmark_codec::now_ms(),
        };

        let mut next = self.bookmarks.clone();
        next.push(bookmark.clone());
        self.persist(next)?;
        Ok(bookmark)
    }

    fn delete(&mut self, id: &str) -> Result<(), BookmarkError> {
        self.ensure_loaded();
        if self.position(id).is_none() {
            return Err(BookmarkError::NotFound(id.to_string()));
        }

        let mut next = self.bookmarks.clone();
        next.retain(|b| b.id != id);
        self.persist(next)
    }

    fn set_tags(&mut self, id: &str, tags: &[String]) -> Result<Bookmark, BookmarkError> {
        self.ensure_loaded();
        let idx = self
            .position(id)
            .ok_or_else(|| BookmarkError::NotFound(id.to_string()))?;

        let mut next = self.bookmarks.clone();
        let mut unique_tags = Vec::new();
        for tag in tags {
            if !unique_tags.contains(tag) {
                unique_tags.push(tag.clone());
            }
        }
        next[idx].tags = unique_tags;
        let updated = next[idx].clone();
        self.persist(next)?;
        Ok(updated)
    }

    fn toggle_tag(&mut self, id: &str, folder_id: &str) -> Result<Bookmark, BookmarkError> {
        self.ensure_loaded();
        let idx = self
            .position(id)
            .ok_or_else(|| BookmarkError::NotFound(id.to_string()))?;

        let mut next = self.bookmarks.clone();
        if next[idx].tags.iter().any(|t| t == folder_id) {
            next[idx].tags.retain(|t| t != folder_id);
        } else {
            next[idx].tags.push(folder_id.to_string());
        }
        let updated = next[idx].clone();
        self.persist(next)?;
        Ok(updated)
    }

    fn filter_by_tag(&self, tag: &str) -> Vec<Bookmark> {
        self.bookmarks
            .iter()
            .rev()
            .filter(|b| b.tags.iter().any(|t| t == tag))
            .cloned()
            .collect()
    }

    fn all_tags(&self) -> Vec<String> {
        let tags: BTreeSet<String> = self
            .bookmarks
            .iter()
            .flat_map(|b| b.tags.iter().cloned())
            .collect();
        tags.into_iter().collect()
    }

    fn count_by_tag(&self, tag: &str) -> usize {
        self.bookmarks
            .iter()
            .filter(|b| b.tags.iter().any(|t| t == tag))
            .count()
    }
}
