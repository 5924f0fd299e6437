// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Last known attribute values of a hub device.

use crate::types::{FanDirection, FanSpeed, LightLevel, SwitchState};

use super::Attribute;

/// Cached attribute values of one hub device.
///
/// All fields start unknown. The fan uses `switch`, `speed`, `direction` and
/// `supportedFanSpeeds`; the light uses `switch` and `level`.
///
/// # Examples
///
/// ```
/// use modernforms_lib::state::{Attribute, AttributeCache};
/// use modernforms_lib::types::SwitchState;
///
/// let mut cache = AttributeCache::new();
/// assert!(cache.apply(&Attribute::Switch(SwitchState::On)));
/// assert!(!cache.apply(&Attribute::Switch(SwitchState::On)));
/// assert_eq!(cache.switch(), Some(SwitchState::On));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeCache {
    switch: Option<SwitchState>,
    speed: Option<FanSpeed>,
    direction: Option<FanDirection>,
    supported_fan_speeds: Option<Vec<FanSpeed>>,
    level: Option<LightLevel>,
}

impl AttributeCache {
    /// Creates a cache with every attribute unknown.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores an attribute value.
    ///
    /// Returns `true` if the value differs from the cached one (including
    /// when it was unknown).
    pub fn apply(&mut self, attribute: &Attribute) -> bool {
        match attribute {
            Attribute::Switch(state) => replace(&mut self.switch, *state),
            Attribute::Speed(speed) => replace(&mut self.speed, *speed),
            Attribute::Direction(direction) => replace(&mut self.direction, direction.clone()),
            Attribute::SupportedFanSpeeds(speeds) => {
                replace(&mut self.supported_fan_speeds, speeds.clone())
            }
            Attribute::Level(level) => replace(&mut self.level, *level),
        }
    }

    /// Gets the `switch` value.
    #[must_use]
    pub fn switch(&self) -> Option<SwitchState> {
        self.switch
    }

    /// Gets the `speed` value.
    #[must_use]
    pub fn speed(&self) -> Option<FanSpeed> {
        self.speed
    }

    /// Gets the `direction` value.
    #[must_use]
    pub fn direction(&self) -> Option<&FanDirection> {
        self.direction.as_ref()
    }

    /// Gets the `supportedFanSpeeds` value.
    #[must_use]
    pub fn supported_fan_speeds(&self) -> Option<&[FanSpeed]> {
        self.supported_fan_speeds.as_deref()
    }

    /// Gets the `level` value.
    #[must_use]
    pub fn level(&self) -> Option<LightLevel> {
        self.level
    }
}

fn replace<T: PartialEq>(slot: &mut Option<T>, value: T) -> bool {
    if slot.as_ref() == Some(&value) {
        false
    } else {
        *slot = Some(value);
        true
    }
}
