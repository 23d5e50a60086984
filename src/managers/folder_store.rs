//! Folder store for Markd.
//!
//! Folders are colored tags living under their own store key, with a single
//! wire schema and no legacy format. The collection is seeded with a fixed
//! default set on first access. Deleting a folder never touches bookmark
//! tags — dangling references are an accepted product decision, and the
//! bookmark and folder keys are never updated atomically together.

use crate::codec::bookmark_codec::{generate_id, now_ms};
use crate::config::FOLDERS_KEY;
use crate::storage::SharedStore;
use crate::types::bookmark::Folder;
use crate::types::errors::{FolderError, StoreError};

/// Colors offered by the folder editor. `create` accepts any hex string;
/// this palette is only the suggested set.
pub const COLOR_PALETTE: [&str; 15] = [
    "#007AFF", "#34C759", "#FF9500", "#FF3B30", "#AF52DE", "#FF2D92", "#5AC8FA", "#FFCC00",
    "#FF6B6B", "#4ECDC4", "#45B7D1", "#96CEB4", "#FFEAA7", "#DDA0DD", "#98D8C8",
];

/// The fixed default set seeded on first access.
pub fn default_folders() -> Vec<Folder> {
    let now = now_ms();
    [
        ("work", "Work", "#007AFF"),
        ("personal", "Personal", "#34C759"),
        ("reading", "Reading", "#FF9500"),
        ("shopping", "Shopping", "#FF3B30"),
    ]
    .into_iter()
    .map(|(id, name, color)| Folder {
        id: id.to_string(),
        name: name.to_string(),
        color: color.to_string(),
        created_at: now,
    })
    .collect()
}

/// Trait defining the folder store operations.
pub trait FolderStoreTrait {
    /// Loads the collection, seeding and persisting the defaults when the
    /// key is absent or holds an undecodable value. Never fails.
    fn load(&mut self) -> Vec<Folder>;
    /// Returns the current in-memory collection.
    fn list(&self) -> Vec<Folder>;
    /// Encodes and overwrites the stored collection with `folders` wholesale.
    /// The screens use this for edit flows that rebuild the list themselves.
    fn save(&mut self, folders: Vec<Folder>) -> Result<(), FolderError>;
    /// Creates a folder with a trimmed, non-empty name, persists, and
    /// returns it.
    fn create(&mut self, name: &str, color: &str) -> Result<Folder, FolderError>;
    /// Updates an existing folder's name and color, persists, and returns it.
    fn rename(&mut self, id: &str, name: &str, color: &str) -> Result<Folder, FolderError>;
    /// Removes a folder and persists. No cascade to bookmark tags.
    fn delete(&mut self, id: &str) -> Result<(), FolderError>;
}

/// Folder store backed by a shared store handle.
pub struct FolderStore<'a> {
    store: &'a dyn SharedStore,
    folders: Vec<Folder>,
    loaded: bool,
}

impl<'a> FolderStore<'a> {
    pub fn new(store: &'a dyn SharedStore) -> Self {
        Self {
            store,
            folders: Vec::new(),
            loaded: false,
        }
    }

    fn ensure_loaded(&mut self) {
        if !self.loaded {
            self.load();
        }
    }

    /// Persists `next` and commits it as the new in-memory collection.
    fn persist(&mut self, next: Vec<Folder>) -> Result<(), FolderError> {
        let encoded =
            serde_json::to_string(&next).map_err(|e| FolderError::Serialization(e.to_string()))?;
        self.store
            .set(FOLDERS_KEY, &encoded)
            .map_err(|e| FolderError::SaveFailed(e.to_string()))?;
        self.folders = next;
        Ok(())
    }

    fn validated_name(name: &str) -> Result<String, FolderError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(FolderError::EmptyName);
        }
        Ok(trimmed.to_string())
    }
}

impl<'a> FolderStoreTrait for FolderStore<'a> {
    fn load(&mut self) -> Vec<Folder> {
        self.loaded = true;
        match self.store.get(FOLDERS_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Folder>>(&raw) {
                Ok(folders) => {
                    self.folders = folders;
                }
                Err(e) => {
                    tracing::warn!(error = %e, "stored folders failed to decode, re-seeding defaults");
                    let defaults = default_folders();
                    if let Err(e) = self.persist(defaults.clone()) {
                        tracing::warn!(error = %e, "failed to persist default folders");
                        self.folders = defaults;
                    }
                }
            },
            Ok(None) => {
                // First access: seed the defaults so the second load reads
                // them back from storage instead of re-synthesizing.
                let defaults = default_folders();
                if let Err(e) = self.persist(defaults.clone()) {
                    tracing::warn!(error = %e, "failed to persist default folders");
                    self.folders = defaults;
                }
            }
            Err(StoreError::TransientUnavailable) => {
                // Startup race: fall back to defaults in memory only, so a
                // container that becomes reachable later is not overwritten.
                self.folders = default_folders();
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to read folders, falling back to defaults");
                self.folders = default_folders();
            }
        }
        self.folders.clone()
    }

    fn list(&self) -> Vec<Folder> {
        self.folders.clone()
    }

    fn save(&mut self, folders: Vec<Folder>) -> Result<(), FolderError> {
        self.loaded = true;
        self.persist(folders)
    }

    fn create(&mut self, name: &str, color: &str) -> Result<Folder, FolderError> {
        let name = Self::validated_name(name)?;
        self.ensure_loaded();

        let folder = Folder {
            id: generate_id(),
            name,
            color: color.to_string(),
            created_at: now_ms(),
        };

        let mut next = self.folders.clone();
        next.push(folder.clone());
        self.persist(next)?;
        Ok(folder)
    }

    fn rename(&mut self, id: &str, name: &str, color: &str) -> Result<Folder, FolderError> {
        let name = Self::validated_name(name)?;
        self.ensure_loaded();

        let idx = self
            .folders
            .iter()
            .position(|f| f.id == id)
            .ok_or_else(|| FolderError::NotFound(id.to_string()))?;

        let mut next = self.folders.clone();
        next[idx].name = name;
        next[idx].color = color.to_string();
        let updated = next[idx].clone();
        self.persist(next)?;
        Ok(updated)
    }

    fn delete(&mut self, id: &str) -> Result<(), FolderError> {
        self.ensure_loaded();
        if !self.folders.iter().any(|f| f.id == id) {
            return Err(FolderError::NotFound(id.to_string()));
        }

        let mut next = self.folders.clone();
        next.retain(|f| f.id != id);
        self.persist(next)
    }
}
