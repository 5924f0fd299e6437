// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Transport to the appliance.
//!
//! The appliance exposes a single endpoint, `POST /mf`, taking a JSON body
//! and answering with its state. [`Transport`] abstracts that exchange;
//! [`HttpClient`] implements it over HTTP.

#[cfg(feature = "http")]
mod http;
#[cfg(test)]
pub(crate) mod mock;

#[cfg(feature = "http")]
pub use http::{HttpClient, HttpClientBuilder, HttpConfig};

use std::future::Future;

use crate::command::Command;
use crate::error::{ParseError, ProtocolError};

/// Response from the appliance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResponse {
    body: String,
}

impl CommandResponse {
    /// Creates a new command response with the given body.
    #[must_use]
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }

    /// Returns the raw response body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Parses the response as a specific type.
    ///
    /// # Errors
    ///
    /// Returns error if the JSON cannot be parsed into the target type.
    pub fn parse<T: serde::de::DeserializeOwned>(&self) -> Result<T, ParseError> {
        serde_json::from_str(&self.body).map_err(Into::into)
    }
}

/// Sends commands to an appliance.
///
/// The address is passed on every call because the user may change it at any
/// time through the driver preferences.
pub trait Transport: Send + Sync + 'static {
    /// Posts `command` to the appliance at `address`.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError::Timeout` when the appliance did not answer in
    /// time, and another `ProtocolError` for any other failure.
    fn post(
        &self,
        address: &str,
        command: &Command,
    ) -> impl Future<Output = Result<CommandResponse, ProtocolError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ApplianceState;

    #[test]
    fn parse_response_body() {
        let response = CommandResponse::new(r#"{"fanOn":true,"fanSpeed":2}"#);
        let state: ApplianceState = response.parse().unwrap();
        assert_eq!(state.fan_on, Some(true));
        assert_eq!(state.fan_speed, Some(2));
    }

    #[test]
    fn parse_empty_body_fails() {
        let response = CommandResponse::new("");
        assert!(response.parse::<ApplianceState>().is_err());
    }
}
