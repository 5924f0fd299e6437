// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! On/off state of the fan motor and of the light.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// Value of a hub `switch` attribute.
///
/// # Examples
///
/// ```
/// use modernforms_lib::types::SwitchState;
///
/// assert_eq!(SwitchState::from(true), SwitchState::On);
/// assert_eq!(SwitchState::Off.as_str(), "off");
/// assert_eq!("on".parse::<SwitchState>().unwrap(), SwitchState::On);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwitchState {
    /// Switched off.
    Off,
    /// Switched on.
    On,
}

impl SwitchState {
    /// Returns the hub attribute value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::On => "on",
        }
    }

    /// Returns `true` when switched on.
    #[must_use]
    pub const fn is_on(&self) -> bool {
        matches!(self, Self::On)
    }
}

impl fmt::Display for SwitchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SwitchState {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "off" | "false" | "0" => Ok(Self::Off),
            "on" | "true" | "1" => Ok(Self::On),
            _ => Err(ValueError::InvalidSwitchState(s.to_string())),
        }
    }
}

impl From<bool> for SwitchState {
    fn from(value: bool) -> Self {
        if value { Self::On } else { Self::Off }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_bool() {
        assert_eq!(SwitchState::from(true), SwitchState::On);
        assert_eq!(SwitchState::from(false), SwitchState::Off);
    }

    #[test]
    fn parse_accepts_hub_and_boolean_forms() {
        assert_eq!("ON".parse::<SwitchState>().unwrap(), SwitchState::On);
        assert_eq!("false".parse::<SwitchState>().unwrap(), SwitchState::Off);
        assert!(matches!(
            "dim".parse::<SwitchState>(),
            Err(ValueError::InvalidSwitchState(_))
        ));
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&SwitchState::On).unwrap(), "\"on\"");
    }
}
