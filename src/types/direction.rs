// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fan rotation direction.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Rotation direction reported in `fanDirection`.
///
/// The appliance value is passed through without validation; anything other
/// than `forward` or `reverse` is kept verbatim in [`FanDirection::Other`].
///
/// # Examples
///
/// ```
/// use modernforms_lib::types::FanDirection;
///
/// assert_eq!(FanDirection::from("reverse"), FanDirection::Reverse);
/// assert_eq!(FanDirection::Forward.reversed(), FanDirection::Reverse);
/// assert_eq!(FanDirection::from("sideways").as_str(), "sideways");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FanDirection {
    /// Downdraft.
    Forward,
    /// Updraft.
    Reverse,
    /// A value the driver does not recognise.
    Other(String),
}

impl FanDirection {
    /// Returns the wire and attribute value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Forward => "forward",
            Self::Reverse => "reverse",
            Self::Other(value) => value,
        }
    }

    /// Returns the opposite direction.
    ///
    /// An unrecognised direction reverses to `Forward`.
    #[must_use]
    pub fn reversed(&self) -> Self {
        match self {
            Self::Forward => Self::Reverse,
            Self::Reverse | Self::Other(_) => Self::Forward,
        }
    }
}

impl fmt::Display for FanDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for FanDirection {
    fn from(value: String) -> Self {
        match value.as_str() {
            "forward" => Self::Forward,
            "reverse" => Self::Reverse,
            _ => Self::Other(value),
        }
    }
}

impl From<&str> for FanDirection {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<FanDirection> for String {
    fn from(direction: FanDirection) -> Self {
        match direction {
            FanDirection::Other(value) => value,
            known => known.as_str().to_string(),
        }
    }
}
