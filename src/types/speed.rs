// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fan speed labels and their mapping to appliance speed codes.
//!
//! The hub speaks in labels (`low`, `medium-high`, ...) while the appliance
//! speaks in integer codes 1-6. The mapping is lossy: codes 3 and 4 both
//! read back as `medium`.
//!
//! | Label         | Encode | Decode from | Cycle to |
//! |---------------|--------|-------------|----------|
//! | `low`         | 1      | 1           | 2        |
//! | `medium-low`  | 2      | 2           | 3        |
//! | `medium`      | 4      | 3, 4        | 5        |
//! | `medium-high` | 5      | 5           | 6        |
//! | `high`        | 6      | 6           | 1        |
//!
//! The cycle column targets raw codes and is deliberately not derived from
//! the encode column.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// A fan speed as exposed on the hub `speed` attribute.
///
/// `Off` and `On` are pseudo-speeds: selecting them switches the fan rather
/// than changing its speed code.
///
/// # Examples
///
/// ```
/// use modernforms_lib::types::FanSpeed;
///
/// assert_eq!(FanSpeed::decode(3), Some(FanSpeed::Medium));
/// assert_eq!(FanSpeed::Medium.code(), Some(4));
/// assert_eq!(FanSpeed::High.next_code(), Some(1));
/// assert_eq!("medium-low".parse::<FanSpeed>().unwrap(), FanSpeed::MediumLow);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FanSpeed {
    /// Code 1.
    Low,
    /// Code 2.
    MediumLow,
    /// Codes 3 and 4.
    Medium,
    /// Code 5.
    MediumHigh,
    /// Code 6.
    High,
    /// Pseudo-speed that switches the fan off.
    Off,
    /// Pseudo-speed that switches the fan on.
    On,
}

impl FanSpeed {
    /// Speeds offered to the hub, in display order.
    pub const SELECTABLE: [Self; 7] = [
        Self::Low,
        Self::MediumLow,
        Self::Medium,
        Self::MediumHigh,
        Self::High,
        Self::Off,
        Self::On,
    ];

    /// Code sent when a label cannot be encoded.
    pub const FALLBACK_CODE: u8 = 4;

    /// Returns the hub label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::MediumLow => "medium-low",
            Self::Medium => "medium",
            Self::MediumHigh => "medium-high",
            Self::High => "high",
            Self::Off => "off",
            Self::On => "on",
        }
    }

    /// Returns the appliance code for this speed.
    ///
    /// Pseudo-speeds have no code.
    #[must_use]
    pub const fn code(&self) -> Option<u8> {
        match self {
            Self::Low => Some(1),
            Self::MediumLow => Some(2),
            Self::Medium => Some(4),
            Self::MediumHigh => Some(5),
            Self::High => Some(6),
            Self::Off | Self::On => None,
        }
    }

    /// Maps an appliance code back to a label.
    #[must_use]
    pub const fn decode(code: i64) -> Option<Self> {
        match code {
            1 => Some(Self::Low),
            2 => Some(Self::MediumLow),
            3 | 4 => Some(Self::Medium),
            5 => Some(Self::MediumHigh),
            6 => Some(Self::High),
            _ => None,
        }
    }

    /// Returns the raw code to send when cycling from this speed.
    #[must_use]
    pub const fn next_code(&self) -> Option<u8> {
        match self {
            Self::Low => Some(2),
            Self::MediumLow => Some(3),
            Self::Medium => Some(5),
            Self::MediumHigh => Some(6),
            Self::High => Some(1),
            Self::Off | Self::On => None,
        }
    }
}

impl fmt::Display for FanSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FanSpeed {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::SELECTABLE
            .into_iter()
            .find(|speed| speed.as_str() == s)
            .ok_or_else(|| ValueError::UnknownFanSpeed(s.to_string()))
    }
}

/// Encodes a hub label into an appliance speed code.
///
/// Unknown labels (and the `on`/`off` pseudo-speeds) are logged and fall back
/// to [`FanSpeed::FALLBACK_CODE`] so the command still goes out.
#[must_use]
pub fn encode(label: &str) -> u8 {
    match label.parse::<FanSpeed>().map(|speed| speed.code()) {
        Ok(Some(code)) => code,
        _ => {
            tracing::error!(label, "No speed code for label, using medium");
            FanSpeed::FALLBACK_CODE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CANONICAL: [FanSpeed; 5] = [
        FanSpeed::Low,
        FanSpeed::MediumLow,
        FanSpeed::Medium,
        FanSpeed::MediumHigh,
        FanSpeed::High,
    ];

    #[test]
    fn canonical_labels_survive_encode_decode() {
        for speed in CANONICAL {
            let code = encode(speed.as_str());
            assert_eq!(FanSpeed::decode(i64::from(code)), Some(speed));
        }
    }

    #[test]
    fn codes_three_and_four_both_read_as_medium() {
        let from_four = FanSpeed::decode(4).unwrap();
        let from_three = FanSpeed::decode(3).unwrap();
        assert_eq!(from_four, FanSpeed::Medium);
        assert_eq!(from_three, FanSpeed::Medium);
        assert_eq!(encode(from_three.as_str()), 4);
    }

    #[test]
    fn decode_rejects_codes_outside_table() {
        for code in [-1, 0, 7, 100] {
            assert_eq!(FanSpeed::decode(code), None);
        }
    }

    #[test]
    fn unknown_label_falls_back_to_medium() {
        assert_eq!(encode("turbo"), 4);
        assert_eq!(encode(""), 4);
    }

    #[test]
    fn cycle_table_targets_raw_codes() {
        let transitions: Vec<_> = CANONICAL.iter().map(FanSpeed::next_code).collect();
        assert_eq!(
            transitions,
            vec![Some(2), Some(3), Some(5), Some(6), Some(1)]
        );
        assert_eq!(FanSpeed::Off.next_code(), None);
    }

    #[test]
    fn selectable_list_order() {
        let labels: Vec<_> = FanSpeed::SELECTABLE.iter().map(FanSpeed::as_str).collect();
        assert_eq!(
            labels,
            ["low", "medium-low", "medium", "medium-high", "high", "off", "on"]
        );
    }

    #[test]
    fn serde_uses_hub_labels() {
        assert_eq!(
            serde_json::to_string(&FanSpeed::MediumHigh).unwrap(),
            "\"medium-high\""
        );
        let parsed: FanSpeed = serde_json::from_str("\"medium-low\"").unwrap();
        assert_eq!(parsed, FanSpeed::MediumLow);
    }
}
