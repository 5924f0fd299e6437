// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Events emitted towards the hub.
//!
//! Hub devices publish a [`DeviceEvent`] on the shared [`EventBus`] each time
//! one of their attributes actually changes.
//!
//! # Examples
//!
//! ```
//! use modernforms_lib::device::{DeviceKind, HubDevice};
//! use modernforms_lib::event::EventBus;
//! use modernforms_lib::state::Attribute;
//! use modernforms_lib::types::SwitchState;
//!
//! let bus = EventBus::new();
//! let mut rx = bus.subscribe();
//!
//! let fan = HubDevice::new("fan-1", "Bedroom Fan", DeviceKind::Fan, bus.clone());
//! fan.send_event(Attribute::Switch(SwitchState::On));
//!
//! let event = rx.try_recv().unwrap();
//! assert_eq!(event.attribute(), Some(&Attribute::Switch(SwitchState::On)));
//! ```

mod device_event;
mod device_id;
mod event_bus;

pub use device_event::DeviceEvent;
pub use device_id::DeviceId;
pub use event_bus::EventBus;
