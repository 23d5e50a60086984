// Markd Subscription Service
// Owns the onboarding / trial / subscription gate. State is a JSON document
// in the app process's config directory — single process, single writer, so
// unlike the shared collections it needs no concurrency handling.

use std::fs;
use std::path::Path;

use crate::codec::bookmark_codec::now_ms;
use crate::platform;
use crate::types::errors::SubscriptionError;
use crate::types::subscription::SubscriptionState;

/// Trait defining the subscription state boundary.
pub trait SubscriptionServiceTrait {
    fn load(&mut self) -> Result<SubscriptionState, SubscriptionError>;
    fn state(&self) -> &SubscriptionState;
    fn is_onboarding_completed(&self) -> bool;
    fn mark_onboarding_completed(&mut self) -> Result<(), SubscriptionError>;
    /// Starts (or restarts) the trial clock at the current instant.
    fn start_trial(&mut self) -> Result<(), SubscriptionError>;
    fn trial_remaining_days(&self) -> u32;
    fn is_trial_active(&self) -> bool;
    fn is_subscribed(&self) -> bool;
    fn activate_subscription(&mut self) -> Result<(), SubscriptionError>;
    /// Extended activation carrying the purchased product and its expiry.
    fn activate_subscription_with_product(
        &mut self,
        product_id: &str,
        expires_at: Option<i64>,
    ) -> Result<(), SubscriptionError>;
    fn deactivate_subscription(&mut self) -> Result<(), SubscriptionError>;
    /// Clears every flag back to the never-onboarded state.
    fn reset(&mut self) -> Result<(), SubscriptionError>;
    fn state_path(&self) -> &str;
}

/// Subscription service persisting state as JSON on disk.
pub struct SubscriptionService {
    state_path: String,
    state: SubscriptionState,
}

impl SubscriptionService {
    /// Creates a new `SubscriptionService`.
    ///
    /// If `path_override` is `Some`, uses that path for the state file.
    /// Otherwise, uses the platform config directory with `subscription.json`.
    pub fn new(path_override: Option<String>) -> Self {
        let state_path = match path_override {
            Some(p) => p,
            None => platform::get_config_dir()
                .join("subscription.json")
                .to_string_lossy()
                .to_string(),
        };

        Self {
            state_path,
            state: SubscriptionState::default(),
        }
    }

    /// Saves the current state to the JSON file, creating parent directories
    /// if they don't exist.
    fn save(&self) -> Result<(), SubscriptionError> {
        let path = Path::new(&self.state_path);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                SubscriptionError::IoError(format!("Failed to create config directory: {}", e))
            })?;
        }

        let json = serde_json::to_string_pretty(&self.state).map_err(|e| {
            SubscriptionError::SerializationError(format!("Failed to serialize state: {}", e))
        })?;

        fs::write(path, json)
            .map_err(|e| SubscriptionError::IoError(format!("Failed to write state file: {}", e)))
    }
}

impl SubscriptionServiceTrait for SubscriptionService {
    /// Loads state from the JSON file. A missing file yields the default
    /// (never-onboarded) state; a malformed file is an error.
    fn load(&mut self) -> Result<SubscriptionState, SubscriptionError> {
        let path = Path::new(&self.state_path);

        if !path.exists() {
            self.state = SubscriptionState::default();
            return Ok(self.state.clone());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| SubscriptionError::IoError(format!("Failed to read state file: {}", e)))?;

        self.state = serde_json::from_str(&content).map_err(|e| {
            SubscriptionError::SerializationError(format!("Failed to parse state file: {}", e))
        })?;
        Ok(self.state.clone())
    }

    fn state(&self) -> &SubscriptionState {
        &self.state
    }

    fn is_onboarding_completed(&self) -> bool {
        self.state.onboarding_completed
    }

    fn mark_onboarding_completed(&mut self) -> Result<(), SubscriptionError> {
        self.state.onboarding_completed = true;
        self.save()
    }

    fn start_trial(&mut self) -> Result<(), SubscriptionError> {
        self.state.trial_started_at = Some(now_ms());
        self.save()
    }

    fn trial_remaining_days(&self) -> u32 {
        self.state.trial_remaining_days(now_ms())
    }

    fn is_trial_active(&self) -> bool {
        self.state.is_trial_active(now_ms())
    }

    fn is_subscribed(&self) -> bool {
        self.state.subscription_active
    }

    fn activate_subscription(&mut self) -> Result<(), SubscriptionError> {
        self.state.subscription_active = true;
        self.save()
    }

    fn activate_subscription_with_product(
        &mut self,
        product_id: &str,
        expires_at: Option<i64>,
    ) -> Result<(), SubscriptionError> {
        self.state.subscription_active = true;
        self.state.product_id = Some(product_id.to_string());
        self.state.expires_at = expires_at;
        self.save()
    }

    fn deactivate_subscription(&mut self) -> Result<(), SubscriptionError> {
        self.state.subscription_active = false;
        self.state.product_id = None;
        self.state.expires_at = None;
        self.save()
    }

    fn reset(&mut self) -> Result<(), SubscriptionError> {
        self.state = SubscriptionState::default();
        self.save()
    }

    fn state_path(&self) -> &str {
        &self.state_path
    }
}
