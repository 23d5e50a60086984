use std::fmt;

// === StoreError ===

/// Errors related to the shared record store.
#[derive(Debug)]
pub enum StoreError {
    /// The shared container is not reachable yet (observed right after
    /// process startup). Callers treat this as "no data yet".
    TransientUnavailable,
    /// Reading a value failed.
    ReadFailed(String),
    /// Overwriting a value failed.
    WriteFailed(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::TransientUnavailable => {
                write!(f, "Shared store temporarily unavailable")
            }
            StoreError::ReadFailed(msg) => write!(f, "Store read failed: {}", msg),
            StoreError::WriteFailed(msg) => write!(f, "Store write failed: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

// === BookmarkError ===

/// Errors related to bookmark store operations.
#[derive(Debug)]
pub enum BookmarkError {
    /// The supplied URL is not a syntactically valid absolute URL.
    InvalidUrl(String),
    /// Bookmark with the given ID was not found.
    NotFound(String),
    /// Failed to serialize the collection for storage.
    Serialization(String),
    /// The store rejected the overwrite.
    SaveFailed(String),
}

impl fmt::Display for BookmarkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookmarkError::InvalidUrl(url) => write!(f, "Invalid URL: {}", url),
            BookmarkError::NotFound(id) => write!(f, "Bookmark not found: {}", id),
            BookmarkError::Serialization(msg) => {
                write!(f, "Bookmark serialization error: {}", msg)
            }
            BookmarkError::SaveFailed(msg) => write!(f, "Failed to save bookmarks: {}", msg),
        }
    }
}

impl std::error::Error for BookmarkError {}

// === FolderError ===

/// Errors related to folder store operations.
#[derive(Debug)]
pub enum FolderError {
    /// The folder name is empty after trimming.
    EmptyName,
    /// Folder with the given ID was not found.
    NotFound(String),
    /// Failed to serialize the collection for storage.
    Serialization(String),
    /// The store rejected the overwrite.
    SaveFailed(String),
}

impl fmt::Display for FolderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FolderError::EmptyName => write!(f, "Folder name cannot be empty"),
            FolderError::NotFound(id) => write!(f, "Folder not found: {}", id),
            FolderError::Serialization(msg) => {
                write!(f, "Folder serialization error: {}", msg)
            }
            FolderError::SaveFailed(msg) => write!(f, "Failed to save folders: {}", msg),
        }
    }
}

impl std::error::Error for FolderError {}

// === SubscriptionError ===

/// Errors related to subscription state persistence.
#[derive(Debug)]
pub enum SubscriptionError {
    /// An I/O error occurred while reading or writing the state file.
    IoError(String),
    /// Failed to serialize or deserialize the state.
    SerializationError(String),
}

impl fmt::Display for SubscriptionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubscriptionError::IoError(msg) => {
                write!(f, "Subscription state I/O error: {}", msg)
            }
            SubscriptionError::SerializationError(msg) => {
                write!(f, "Subscription state serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for SubscriptionError {}

// === NotificationError ===

/// Errors related to notification scheduling.
#[derive(Debug)]
pub enum NotificationError {
    /// The requested local hour is outside 0..=23.
    InvalidHour(u32),
    /// The platform backend failed to register the trigger.
    Backend(String),
}

impl fmt::Display for NotificationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotificationError::InvalidHour(hour) => {
                write!(f, "Invalid notification hour: {}", hour)
            }
            NotificationError::Backend(msg) => {
                write!(f, "Notification backend error: {}", msg)
            }
        }
    }
}

impl std::error::Error for NotificationError {}

// === PurchaseError ===

/// Errors related to the purchase service.
#[derive(Debug)]
pub enum PurchaseError {
    /// The service has not been opened (or was closed).
    NotOpen,
    /// The requested product is not available from the store.
    ProductNotFound(String),
    /// The store backend reported a failure.
    Backend(String),
}

impl fmt::Display for PurchaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PurchaseError::NotOpen => write!(f, "Purchase service is not open"),
            PurchaseError::ProductNotFound(id) => {
                write!(f, "Product not found: {}", id)
            }
            PurchaseError::Backend(msg) => write!(f, "Purchase backend error: {}", msg),
        }
    }
}

impl std::error::Error for PurchaseError {}
