//! Daily reminder scheduling for Markd.
//!
//! Picks one saved bookmark uniformly at random and registers a recurring
//! daily notification for it at a requested local hour. The scheduler only
//! consumes the bookmark collection's read path — it never writes to the
//! shared store. Delivery mechanics live behind [`NotificationBackend`];
//! everything platform-specific (channels, permission prompts, trigger
//! registration) is the backend's problem.

use chrono::Local;
use rand::Rng;

use crate::codec::bookmark_codec;
use crate::config::BOOKMARKS_KEY;
use crate::storage::SharedStore;
use crate::types::errors::{NotificationError, StoreError};
use crate::types::notification::DailyNotification;

/// Platform notification boundary.
pub trait NotificationBackend {
    /// Requests (or re-checks) notification permission. `false` means denied.
    fn request_permission(&mut self) -> bool;
    /// Registers a daily-repeating trigger. Replaces nothing; callers cancel
    /// explicitly when they want a clean slate.
    fn schedule_daily(&mut self, notification: DailyNotification) -> Result<(), NotificationError>;
    /// Cancels every scheduled notification.
    fn cancel_all(&mut self);
}

/// Scheduler over a shared store handle and a platform backend.
pub struct NotificationScheduler<'a, B: NotificationBackend> {
    store: &'a dyn SharedStore,
    backend: B,
}

impl<'a, B: NotificationBackend> NotificationScheduler<'a, B> {
    pub fn new(store: &'a dyn SharedStore, backend: B) -> Self {
        Self { store, backend }
    }

    /// The injected backend, for callers that need to drive it directly.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Schedules the daily random-bookmark reminder at `hour_local` (0..=23).
    ///
    /// Returns `Ok(None)` without touching the backend when permission is
    /// denied or there are no bookmarks to surface; returns the scheduled
    /// notification otherwise. The first delivery is today at the given hour,
    /// rolling to tomorrow if that moment has already passed.
    pub fn schedule_daily_random_bookmark(
        &mut self,
        hour_local: u32,
    ) -> Result<Option<DailyNotification>, NotificationError> {
        if hour_local > 23 {
            return Err(NotificationError::InvalidHour(hour_local));
        }

        if !self.backend.request_permission() {
            return Ok(None);
        }

        let urls = self.read_urls();
        if urls.is_empty() {
            return Ok(None);
        }
        let url = urls[rand::thread_rng().gen_range(0..urls.len())].clone();

        let Some(first_trigger_at) = next_occurrence_ms(hour_local) else {
            return Err(NotificationError::Backend(
                "could not resolve a local trigger time".to_string(),
            ));
        };

        let notification = DailyNotification {
            title: "Your daily bookmark".to_string(),
            body: url,
            first_trigger_at,
        };
        self.backend.schedule_daily(notification.clone())?;
        Ok(Some(notification))
    }

    /// Reschedules after the user taps the delivered notification. Identical
    /// to scheduling afresh.
    pub fn reschedule_on_press(
        &mut self,
        hour_local: u32,
    ) -> Result<Option<DailyNotification>, NotificationError> {
        self.schedule_daily_random_bookmark(hour_local)
    }

    pub fn cancel_all(&mut self) {
        self.backend.cancel_all();
    }

    /// Read-only pass over the stored collection: every failure degrades to
    /// an empty list, exactly like the consumer's load path.
    fn read_urls(&self) -> Vec<String> {
        let raw = match self.store.get(BOOKMARKS_KEY) {
            Ok(raw) => raw,
            Err(StoreError::TransientUnavailable) => None,
            Err(e) => {
                tracing::warn!(error = %e, "scheduler failed to read bookmarks");
                None
            }
        };
        bookmark_codec::decode(raw.as_deref())
            .into_iter()
            .map(|b| b.url)
            .collect()
    }
}

/// Epoch ms of the next occurrence of `hour` local time, strictly in the
/// future. Skips forward a day when the hour has passed or does not exist
/// locally (DST gap).
fn next_occurrence_ms(hour: u32) -> Option<i64> {
    let now = Local::now();
    let mut date = now.date_naive();
    for _ in 0..2 {
        if let Some(naive) = date.and_hms_opt(hour, 0, 0) {
            if let Some(trigger) = naive.and_local_timezone(Local).earliest() {
                if trigger > now {
                    return Some(trigger.timestamp_millis());
                }
            }
        }
        date = date.succ_opt()?;
    }
    None
}
