// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Command dispatch with the driver's failure policy.
//!
//! Failures end here: timeouts are logged at debug level, anything else at
//! error level, and the caller gets `None`. There is no retry.

use crate::command::Command;
use crate::protocol::{CommandResponse, Transport};
use crate::state::ApplianceState;

use super::DriverContext;

/// Sends commands to the appliance named in the driver preferences.
#[derive(Debug)]
pub struct Dispatcher<T> {
    transport: T,
}

impl<T: Transport> Dispatcher<T> {
    /// Creates a dispatcher over `transport`.
    #[must_use]
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Returns the underlying transport.
    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Sends `command` and returns the raw response.
    ///
    /// Returns `None` if the request failed or timed out.
    pub async fn send(
        &self,
        ctx: &DriverContext<'_>,
        command: &Command,
    ) -> Option<CommandResponse> {
        let address = ctx.config.ip_address();

        if ctx.debug_enabled() {
            tracing::debug!(address, body = %command, "Sending command");
        }

        match self.transport.post(address, command).await {
            Ok(response) => {
                if ctx.debug_enabled() {
                    tracing::debug!(body = response.body(), "Received response");
                }
                Some(response)
            }
            Err(err) if err.is_timeout() => {
                if ctx.debug_enabled() {
                    tracing::debug!(address, body = %command, error = %err, "Request timed out");
                }
                None
            }
            Err(err) => {
                tracing::error!(address, body = %command, error = %err, "Request failed");
                None
            }
        }
    }

    /// Sends `command` and decodes the appliance state it answers with.
    ///
    /// Returns `None` if the request failed or the body is not a state record.
    pub async fn fetch(
        &self,
        ctx: &DriverContext<'_>,
        command: &Command,
    ) -> Option<ApplianceState> {
        let response = self.send(ctx, command).await?;
        match response.parse::<ApplianceState>() {
            Ok(state) => Some(state),
            Err(err) => {
                tracing::error!(body = %command, error = %err, "Undecodable response");
                None
            }
        }
    }
}
