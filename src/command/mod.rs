// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Appliance command definitions.
//!
//! Every request to the appliance is a `POST /mf` carrying a JSON object with
//! a single key. Each request shape is one [`Command`] variant.
//!
//! | Variant | Body |
//! |---------|------|
//! | [`Command::QueryState`] | `{"queryDynamicShadowData": 1}` |
//! | [`Command::FanOn`] | `{"fanOn": true}` |
//! | [`Command::FanSpeed`] | `{"fanSpeed": 4}` |
//! | [`Command::FanDirection`] | `{"fanDirection": "reverse"}` |
//! | [`Command::LightOn`] | `{"lightOn": false}` |
//! | [`Command::LightBrightness`] | `{"lightBrightness": 60}` |
//! | [`Command::Reboot`] | `{"reboot": true}` |
//!
//! # Examples
//!
//! ```
//! use modernforms_lib::command::Command;
//!
//! let body = serde_json::to_value(Command::FanSpeed(5)).unwrap();
//! assert_eq!(body, serde_json::json!({ "fanSpeed": 5 }));
//! ```

use std::fmt;
use std::time::Duration;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::types::{FanDirection, LightLevel};

/// A request understood by the appliance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Full state fetch.
    QueryState,
    /// Switch the fan motor.
    FanOn(bool),
    /// Set the raw speed code (1-6).
    FanSpeed(u8),
    /// Set the rotation direction.
    FanDirection(FanDirection),
    /// Switch the light.
    LightOn(bool),
    /// Set the light brightness.
    LightBrightness(LightLevel),
    /// Reboot the appliance. It drops the connection without answering.
    Reboot,
}

impl Command {
    /// Timeout used for [`Command::Reboot`].
    ///
    /// The appliance never answers a reboot, so the request is given one
    /// second, the shortest timeout a hub HTTP call can be configured with
    /// (hub timeouts are whole seconds).
    pub const REBOOT_TIMEOUT: Duration = Duration::from_secs(1);

    /// Returns the JSON key of the request body.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::QueryState => "queryDynamicShadowData",
            Self::FanOn(_) => "fanOn",
            Self::FanSpeed(_) => "fanSpeed",
            Self::FanDirection(_) => "fanDirection",
            Self::LightOn(_) => "lightOn",
            Self::LightBrightness(_) => "lightBrightness",
            Self::Reboot => "reboot",
        }
    }

    /// Returns a per-request timeout overriding the client default.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        match self {
            Self::Reboot => Some(Self::REBOOT_TIMEOUT),
            _ => None,
        }
    }
}

impl Serialize for Command {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        let key = self.key();
        match self {
            Self::QueryState => map.serialize_entry(key, &1)?,
            Self::FanOn(on) | Self::LightOn(on) => map.serialize_entry(key, on)?,
            Self::FanSpeed(code) => map.serialize_entry(key, code)?,
            Self::FanDirection(direction) => map.serialize_entry(key, direction)?,
            Self::LightBrightness(level) => map.serialize_entry(key, level)?,
            Self::Reboot => map.serialize_entry(key, &true)?,
        }
        map.end()
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string(self) {
            Ok(body) => f.write_str(&body),
            Err(_) => f.write_str(self.key()),
        }
    }
}
