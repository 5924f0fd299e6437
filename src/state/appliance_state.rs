// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! State record returned by the appliance.

use serde::Deserialize;

use crate::error::ParseError;
use crate::types::FanDirection;

/// Appliance state as decoded from a `/mf` response.
///
/// Fields are optional because some responses only echo the value that was
/// changed. Unknown fields are ignored. Raw integers are kept as reported;
/// mapping to hub values happens during reconciliation.
///
/// # Examples
///
/// ```
/// use modernforms_lib::state::ApplianceState;
///
/// let state = ApplianceState::from_json(
///     r#"{"fanOn": true, "fanSpeed": 4, "fanDirection": "forward",
///         "lightOn": false, "lightBrightness": 0, "fanSleepTimer": 0}"#,
/// ).unwrap();
/// assert_eq!(state.fan_speed, Some(4));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplianceState {
    /// Fan motor running.
    pub fan_on: Option<bool>,
    /// Raw speed code, normally 1-6.
    pub fan_speed: Option<i64>,
    /// Rotation direction.
    pub fan_direction: Option<FanDirection>,
    /// Light on.
    pub light_on: Option<bool>,
    /// Raw brightness, normally 0-100.
    pub light_brightness: Option<i64>,
}

impl ApplianceState {
    /// Parses a response body.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Json` if the body is not a JSON object with
    /// correctly typed fields.
    pub fn from_json(body: &str) -> Result<Self, ParseError> {
        serde_json::from_str(body).map_err(Into::into)
    }
}
