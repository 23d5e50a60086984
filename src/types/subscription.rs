use serde::{Deserialize, Serialize};

use crate::config::TRIAL_LENGTH_DAYS;

const MS_PER_DAY: i64 = 1000 * 60 * 60 * 24;

/// Persisted onboarding / trial / subscription state.
///
/// Owned by the main app process only; never written from the extension, so
/// unlike the bookmark collection it has no concurrency concerns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SubscriptionState {
    pub onboarding_completed: bool,
    /// Epoch ms of the moment the trial was started. Absent = never started.
    pub trial_started_at: Option<i64>,
    pub subscription_active: bool,
    /// Product identifier of the purchased subscription, when known.
    pub product_id: Option<String>,
    /// Epoch ms expiry of the purchased subscription, when known.
    pub expires_at: Option<i64>,
}

impl SubscriptionState {
    /// Whole days of trial remaining at `now_ms`. 0 when the trial was never
    /// started or has elapsed.
    pub fn trial_remaining_days(&self, now_ms: i64) -> u32 {
        let Some(started_at) = self.trial_started_at else {
            return 0;
        };
        let days_elapsed = (now_ms - started_at).div_euclid(MS_PER_DAY);
        (TRIAL_LENGTH_DAYS as i64 - days_elapsed).max(0) as u32
    }

    pub fn is_trial_active(&self, now_ms: i64) -> bool {
        self.trial_remaining_days(now_ms) > 0
    }
}
