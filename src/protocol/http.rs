// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP transport for Modern Forms appliances.

use std::time::Duration;

use reqwest::Client;

use crate::command::Command;
use crate::error::ProtocolError;
use crate::protocol::{CommandResponse, Transport};

/// Path of the appliance's command endpoint.
const ENDPOINT_PATH: &str = "/mf";

/// Configuration for the HTTP transport.
///
/// # Examples
///
/// ```
/// use modernforms_lib::protocol::HttpConfig;
/// use std::time::Duration;
///
/// let config = HttpConfig::new().with_timeout(Duration::from_secs(5));
/// assert_eq!(config.timeout(), Duration::from_secs(5));
/// ```
#[derive(Debug, Clone)]
pub struct HttpConfig {
    port: u16,
    timeout: Duration,
}

impl HttpConfig {
    /// Default HTTP port.
    pub const DEFAULT_PORT: u16 = 80;
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Creates a configuration with default port and timeout.
    #[must_use]
    pub fn new() -> Self {
        Self {
            port: Self::DEFAULT_PORT,
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Sets a custom port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Sets the default request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the port.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Returns the default request timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Creates an `HttpClient` from this configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn into_client(self) -> Result<HttpClient, ProtocolError> {
        let client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(ProtocolError::Http)?;

        Ok(HttpClient {
            client,
            port: self.port,
            timeout: self.timeout,
        })
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// HTTP client posting JSON commands to `http://{address}/mf`.
///
/// # Examples
///
/// ```no_run
/// use modernforms_lib::command::Command;
/// use modernforms_lib::protocol::{HttpClient, Transport};
///
/// # async fn example() -> Result<(), modernforms_lib::ProtocolError> {
/// let client = HttpClient::new()?;
/// let response = client.post("192.168.1.40", &Command::QueryState).await?;
/// println!("{}", response.body());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    port: u16,
    timeout: Duration,
}

impl HttpClient {
    /// Creates a client with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn new() -> Result<Self, ProtocolError> {
        HttpConfig::new().into_client()
    }

    /// Returns a builder.
    #[must_use]
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::new()
    }

    /// Builds the endpoint URL for an appliance address.
    ///
    /// The address may already carry a scheme and port.
    fn endpoint(&self, address: &str) -> String {
        let address = address.trim_end_matches('/');
        let base = if address.starts_with("http://") || address.starts_with("https://") {
            address.to_string()
        } else if self.port == HttpConfig::DEFAULT_PORT || address.contains(':') {
            format!("http://{address}")
        } else {
            format!("http://{address}:{}", self.port)
        };
        format!("{base}{ENDPOINT_PATH}")
    }

    fn classify(&self, command: &Command, err: reqwest::Error) -> ProtocolError {
        if err.is_timeout() {
            let timeout = command.timeout().unwrap_or(self.timeout);
            ProtocolError::Timeout(u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX))
        } else {
            ProtocolError::Http(err)
        }
    }
}

impl Transport for HttpClient {
    async fn post(
        &self,
        address: &str,
        command: &Command,
    ) -> Result<CommandResponse, ProtocolError> {
        if address.trim().is_empty() {
            return Err(ProtocolError::InvalidAddress(address.to_string()));
        }

        let url = self.endpoint(address);

        tracing::trace!(url = %url, body = %command, "Sending HTTP command");

        let mut request = self.client.post(&url).json(command);
        if let Some(timeout) = command.timeout() {
            request = request.timeout(timeout);
        }

        let response = request
            .send()
            .await
            .map_err(|e| self.classify(command, e))?;

        if !response.status().is_success() {
            return Err(ProtocolError::ConnectionFailed(format!(
                "HTTP {} - {}",
                response.status().as_u16(),
                response.status().canonical_reason().unwrap_or("Unknown")
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| self.classify(command, e))?;

        tracing::trace!(body = %body, "Received HTTP response");

        Ok(CommandResponse::new(body))
    }
}

/// Builder for creating an HTTP client with custom configuration.
#[derive(Debug, Default)]
pub struct HttpClientBuilder {
    port: Option<u16>,
    timeout: Option<Duration>,
}

impl HttpClientBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the port used when the address carries none.
    #[must_use]
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Sets the default request timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the HTTP client.
    ///
    /// # Errors
    ///
    /// Returns error if client creation fails.
    pub fn build(self) -> Result<HttpClient, ProtocolError> {
        let mut config = HttpConfig::new();
        if let Some(port) = self.port {
            config = config.with_port(port);
        }
        if let Some(timeout) = self.timeout {
            config = config.with_timeout(timeout);
        }
        config.into_client()
    }
}
