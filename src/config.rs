//! Application-wide constants.
//!
//! `SHARED_GROUP_ID` and the store keys are a cross-build contract: the share
//! extension and the main app must be built with identical values, or the two
//! processes address disjoint storage and synchronization silently fails.

/// Namespace identifier of the storage container shared by both processes.
pub const SHARED_GROUP_ID: &str = "group.com.markd.shared";

/// Store key holding the serialized bookmark collection.
pub const BOOKMARKS_KEY: &str = "bookmarks";

/// Store key holding the serialized folder collection.
pub const FOLDERS_KEY: &str = "folders";

/// Length of the free trial, in days.
pub const TRIAL_LENGTH_DAYS: u32 = 7;

/// Product identifier of the yearly premium subscription.
pub const SUBSCRIPTION_PRODUCT_ID: &str = "com.markd.premium.yearly";

/// Display price of the subscription.
pub const SUBSCRIPTION_PRICE: &str = "$9.99";

/// Default local hour for the daily random-bookmark reminder.
pub const DEFAULT_REMINDER_HOUR: u32 = 9;
