// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `ModernForms` Lib - A Rust hub driver for Modern Forms smart fans.
//!
//! A Modern Forms appliance is a ceiling fan with an integrated dimmable
//! light, controlled over the local network with JSON posted to `/mf`.
//! This library exposes the appliance to a home-automation hub as two
//! devices: a fan, and a child dimmable light.
//!
//! # Supported Features
//!
//! - **Fan control**: On/off, five speeds, speed cycling, direction reversal
//! - **Light control**: On/off and brightness through the child light
//! - **Polling**: Periodic state refresh with a configurable interval
//! - **Events**: Attribute changes published only when a value changes
//!
//! # Quick Start
//!
//! ```no_run
//! use modernforms_lib::device::{DeviceKind, HubDevice};
//! use modernforms_lib::event::EventBus;
//! use modernforms_lib::{DriverConfig, FanDriver};
//!
//! #[tokio::main]
//! async fn main() -> modernforms_lib::Result<()> {
//!     let bus = EventBus::new();
//!     let fan = HubDevice::new("mf-living", "Living Room Fan", DeviceKind::Fan, bus);
//!
//!     let config = DriverConfig::from_json(r#"{"ipAddress":"192.168.1.40","logEnable":true}"#)?;
//!     let driver = FanDriver::builder(fan, config).build_http()?;
//!
//!     let mut events = driver.subscribe();
//!     driver.installed().await;
//!     driver.set_speed("high").await;
//!     driver.component_on().await;
//!
//!     while let Ok(event) = events.try_recv() {
//!         println!("{event:?}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Custom Transport
//!
//! The driver is generic over [`protocol::Transport`], so it can run over
//! anything able to post a [`Command`] to an address:
//!
//! ```
//! use modernforms_lib::Command;
//! use modernforms_lib::protocol::{CommandResponse, Transport};
//! use modernforms_lib::ProtocolError;
//!
//! struct Offline;
//!
//! impl Transport for Offline {
//!     async fn post(&self, address: &str, _command: &Command) -> Result<CommandResponse, ProtocolError> {
//!         Err(ProtocolError::ConnectionFailed(format!("{address} is offline")))
//!     }
//! }
//! ```

pub mod command;
mod config;
pub mod device;
pub mod driver;
pub mod error;
pub mod event;
pub mod protocol;
pub mod state;
pub mod types;

pub use command::Command;
pub use config::DriverConfig;
pub use device::{ChildDevices, ChildRegistry, DeviceKind, HubDevice};
pub use driver::{DriverContext, FanDriver, FanDriverBuilder, PollState};
pub use error::{DeviceError, Error, ParseError, ProtocolError, Result, ValueError};
pub use event::{DeviceEvent, DeviceId, EventBus};
#[cfg(feature = "http")]
pub use protocol::{HttpClient, HttpClientBuilder, HttpConfig};
pub use state::{ApplianceState, Attribute};
pub use types::{FanDirection, FanSpeed, LightLevel, SwitchState};
