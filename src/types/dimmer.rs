// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Light level type for the child dimmer.
//!
//! The appliance reports and accepts `lightBrightness` as a percentage, so
//! values are kept within 0-100.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// Light brightness as a percentage (0-100).
///
/// # Examples
///
/// ```
/// use modernforms_lib::types::LightLevel;
///
/// let level = LightLevel::new(75).unwrap();
/// assert_eq!(level.value(), 75);
///
/// assert!(LightLevel::new(101).is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "i64", into = "u8")]
pub struct LightLevel(u8);

impl LightLevel {
    /// Light off (0%).
    pub const MIN: Self = Self(0);

    /// Full brightness (100%).
    pub const MAX: Self = Self(100);

    /// Creates a new light level.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if value exceeds 100.
    pub fn new(value: u8) -> Result<Self, ValueError> {
        Self::from_raw(i64::from(value))
    }

    /// Creates a light level from an untrusted integer, as found in
    /// appliance responses.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if value is outside [0, 100].
    pub fn from_raw(value: i64) -> Result<Self, ValueError> {
        match u8::try_from(value) {
            Ok(v) if v <= Self::MAX.0 => Ok(Self(v)),
            _ => Err(ValueError::OutOfRange {
                min: 0,
                max: 100,
                actual: value,
            }),
        }
    }

    /// Returns the percentage.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl Default for LightLevel {
    fn default() -> Self {
        Self::MIN
    }
}

impl fmt::Display for LightLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for LightLevel {
    type Error = ValueError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::from_raw(value)
    }
}

impl From<LightLevel> for u8 {
    fn from(level: LightLevel) -> Self {
        level.0
    }
}
