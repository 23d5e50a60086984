//! App core for Markd.
//!
//! Central struct wiring the shared store handle and the process-local
//! services, with explicit construction instead of module-level singletons.

use std::path::PathBuf;

use crate::config::SHARED_GROUP_ID;
use crate::managers::bookmark_store::BookmarkStore;
use crate::managers::folder_store::FolderStore;
use crate::managers::share_writer::ShareWriter;
use crate::services::subscription_service::SubscriptionService;
use crate::storage::SharedContainerStore;

/// Central application struct.
///
/// `BookmarkStore`, `FolderStore`, and `ShareWriter` borrow the store handle
/// with a lifetime parameter, so they are created on demand via the accessor
/// methods rather than stored here. The purchase and notification services
/// take platform backends and are constructed by whatever layer owns those
/// backends.
pub struct App {
    pub store: SharedContainerStore,
    pub subscription: SubscriptionService,
}

impl App {
    /// Creates an App addressing the production shared container and config
    /// paths.
    pub fn new() -> Self {
        Self {
            store: SharedContainerStore::open(SHARED_GROUP_ID),
            subscription: SubscriptionService::new(None),
        }
    }

    /// Creates an App over explicit paths. Used by tests and the demo binary
    /// to stay out of the real container.
    pub fn with_paths(container_dir: PathBuf, subscription_state_path: String) -> Self {
        Self {
            store: SharedContainerStore::with_dir(container_dir),
            subscription: SubscriptionService::new(Some(subscription_state_path)),
        }
    }

    /// Startup sequence: hydrate subscription state. Collection loads happen
    /// per-screen via the on-demand stores.
    pub fn startup(&mut self) {
        use crate::services::subscription_service::SubscriptionServiceTrait;
        if let Err(e) = self.subscription.load() {
            tracing::warn!(error = %e, "failed to load subscription state");
        }
    }

    /// App-side bookmark store over this App's shared store handle.
    pub fn bookmarks(&self) -> BookmarkStore<'_> {
        BookmarkStore::new(&self.store)
    }

    /// Folder store over this App's shared store handle.
    pub fn folders(&self) -> FolderStore<'_> {
        FolderStore::new(&self.store)
    }

    /// Extension-side writer over this App's shared store handle. In
    /// production the writer runs in its own process with its own handle;
    /// this accessor exists for the demo binary and integration tests.
    pub fn share_writer(&self) -> ShareWriter<'_> {
        ShareWriter::new(&self.store)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
