//! Settings builder

use chrono::{DateTime, Utc};

use super::{Settings, DEFAULT_EPOCH};

/// Builder for [`Settings`]
#[derive(Debug)]
pub struct SettingsBuilder {
    epoch_time: Option<DateTime<Utc>>,
    identity: String,
}

impl SettingsBuilder {
    /// Create a new builder starting from [`DEFAULT_EPOCH`] and an empty identity
    pub fn new() -> Self {
        Self {
            epoch_time: Some(*DEFAULT_EPOCH),
            identity: String::new(),
        }
    }

    /// Set the epoch that elapsed ticks are counted from
    pub fn epoch(mut self, epoch: DateTime<Utc>) -> Self {
        self.epoch_time = Some(epoch);
        self
    }

    /// Set the identity hashed into the machine ID
    pub fn identity(mut self, identity: impl Into<String>) -> Self {
        self.identity = identity.into();
        self
    }

    /// Build the final Settings. Validation happens when the generator is created.
    pub fn build(self) -> Settings {
        Settings {
            epoch_time: self.epoch_time,
            identity: self.identity,
        }
    }
}

impl Default for SettingsBuilder {
    fn default() -> Self {
        Self::new()
    }
}
