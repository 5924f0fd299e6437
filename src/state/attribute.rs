// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Hub attribute values.
//!
//! An [`Attribute`] is one named value on a hub device. Applying one to an
//! [`AttributeCache`](super::AttributeCache) reports whether it changed, and
//! only changed attributes become events.
//!
//! | Attribute | Device | Hub value |
//! |-----------|--------|-----------|
//! | `switch` | fan, light | `on` / `off` |
//! | `speed` | fan | speed label |
//! | `direction` | fan | `forward` / `reverse` |
//! | `supportedFanSpeeds` | fan | JSON array text |
//! | `level` | light | 0-100 |

use serde::{Deserialize, Serialize};

use crate::types::{FanDirection, FanSpeed, LightLevel, SwitchState};

/// A single hub attribute value.
///
/// # Examples
///
/// ```
/// use modernforms_lib::state::Attribute;
/// use modernforms_lib::types::{FanSpeed, SwitchState};
///
/// let attr = Attribute::Switch(SwitchState::On);
/// assert_eq!(attr.name(), "switch");
/// assert_eq!(attr.value_string(), "on");
///
/// let attr = Attribute::SupportedFanSpeeds(vec![FanSpeed::Low, FanSpeed::High]);
/// assert_eq!(attr.value_string(), r#"["low","high"]"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Attribute {
    /// `switch` attribute.
    Switch(SwitchState),
    /// `speed` attribute.
    Speed(FanSpeed),
    /// `direction` attribute.
    Direction(FanDirection),
    /// `supportedFanSpeeds` attribute.
    SupportedFanSpeeds(Vec<FanSpeed>),
    /// `level` attribute.
    Level(LightLevel),
}

impl Attribute {
    /// Returns the hub attribute name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Switch(_) => "switch",
            Self::Speed(_) => "speed",
            Self::Direction(_) => "direction",
            Self::SupportedFanSpeeds(_) => "supportedFanSpeeds",
            Self::Level(_) => "level",
        }
    }

    /// Returns the attribute value as the hub stores it.
    ///
    /// `supportedFanSpeeds` is stored as a JSON-encoded array.
    #[must_use]
    pub fn value_string(&self) -> String {
        match self {
            Self::Switch(state) => state.to_string(),
            Self::Speed(speed) => speed.to_string(),
            Self::Direction(direction) => direction.to_string(),
            Self::SupportedFanSpeeds(speeds) => {
                serde_json::to_string(speeds).unwrap_or_else(|_| "[]".to_string())
            }
            Self::Level(level) => level.to_string(),
        }
    }
}
