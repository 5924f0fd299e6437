// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Driver preferences.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// User preferences for one appliance.
///
/// Deserializes from the hub's preference JSON (`ipAddress`,
/// `pollIntervalSecs`, `logEnable`). Nothing is validated: the address is
/// free text and the poll interval is used as given.
///
/// # Examples
///
/// ```
/// use modernforms_lib::DriverConfig;
/// use std::time::Duration;
///
/// let config = DriverConfig::new("192.168.1.40")
///     .with_poll_interval_secs(60)
///     .with_log_enable(true);
/// assert_eq!(config.poll_interval(), Duration::from_secs(60));
///
/// let config = DriverConfig::from_json(r#"{"ipAddress": "192.168.1.40"}"#).unwrap();
/// assert_eq!(config.poll_interval_secs(), 30);
/// assert!(!config.log_enable());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverConfig {
    ip_address: String,
    #[serde(default = "default_poll_interval_secs")]
    poll_interval_secs: i64,
    #[serde(default)]
    log_enable: bool,
}

const fn default_poll_interval_secs() -> i64 {
    DriverConfig::DEFAULT_POLL_INTERVAL_SECS
}

impl DriverConfig {
    /// Default poll interval in seconds.
    pub const DEFAULT_POLL_INTERVAL_SECS: i64 = 30;

    /// Creates a configuration for the appliance at `ip_address`.
    #[must_use]
    pub fn new(ip_address: impl Into<String>) -> Self {
        Self {
            ip_address: ip_address.into(),
            poll_interval_secs: Self::DEFAULT_POLL_INTERVAL_SECS,
            log_enable: false,
        }
    }

    /// Parses the hub's preference JSON.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Json` if the JSON is malformed or `ipAddress` is
    /// missing.
    pub fn from_json(json: &str) -> Result<Self, ParseError> {
        serde_json::from_str(json).map_err(Into::into)
    }

    /// Sets the poll interval in seconds.
    #[must_use]
    pub fn with_poll_interval_secs(mut self, secs: i64) -> Self {
        self.poll_interval_secs = secs;
        self
    }

    /// Enables or disables debug logging.
    #[must_use]
    pub fn with_log_enable(mut self, enabled: bool) -> Self {
        self.log_enable = enabled;
        self
    }

    /// Returns the appliance address.
    #[must_use]
    pub fn ip_address(&self) -> &str {
        &self.ip_address
    }

    /// Returns the poll interval as configured.
    #[must_use]
    pub fn poll_interval_secs(&self) -> i64 {
        self.poll_interval_secs
    }

    /// Returns the poll interval as a duration.
    ///
    /// Negative intervals become zero.
    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(u64::try_from(self.poll_interval_secs).unwrap_or(0))
    }

    /// Returns whether debug logging is enabled.
    #[must_use]
    pub fn log_enable(&self) -> bool {
        self.log_enable
    }
}
