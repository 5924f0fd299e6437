// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the driver.
//!
//! Driver operations never surface these to the hub: failures stop at the
//! dispatcher or reconciler and end up in the log. They are returned by the
//! fallible constructors (values, configuration, HTTP client) and by the
//! [`Transport`](crate::protocol::Transport) seam.

use thiserror::Error;

use crate::event::DeviceId;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred while talking to the appliance.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Error occurred while parsing a response or configuration.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Error occurred during a device operation.
    #[error("device error: {0}")]
    Device(#[from] DeviceError),
}

/// Errors related to value validation and constraints.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A numeric value is outside the allowed range.
    #[error("value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Minimum allowed value.
        min: i64,
        /// Maximum allowed value.
        max: i64,
        /// The actual value that was provided.
        actual: i64,
    },

    /// An invalid switch state string was provided.
    #[error("invalid switch state: {0}")]
    InvalidSwitchState(String),

    /// A fan speed label that is not part of the selectable set.
    #[error("unknown fan speed: {0}")]
    UnknownFanSpeed(String),
}

/// Errors related to HTTP communication with the appliance.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// HTTP request failed.
    #[cfg(feature = "http")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The appliance answered with a non-success status.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Request timed out.
    #[error("request timed out after {0} ms")]
    Timeout(u64),

    /// Invalid URL or address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

impl ProtocolError {
    /// Returns `true` for a transport-level timeout.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout(_))
    }
}

/// Errors related to parsing appliance responses and configuration.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors related to hub device operations.
#[derive(Debug, Error)]
pub enum DeviceError {
    /// A device with this identifier already exists.
    #[error("device {0} already exists")]
    AlreadyExists(DeviceId),

    /// The host refused to create a child device.
    #[error("could not create child device {id}: {reason}")]
    ChildCreationFailed {
        /// Identifier of the child that was requested.
        id: DeviceId,
        /// Reason given by the host.
        reason: String,
    },
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
