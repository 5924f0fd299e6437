// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device event types.

use chrono::{DateTime, Utc};

use crate::state::Attribute;

use super::DeviceId;

/// Events published to the hub.
///
/// # Examples
///
/// ```
/// use modernforms_lib::event::{DeviceEvent, DeviceId};
/// use modernforms_lib::state::Attribute;
/// use modernforms_lib::types::SwitchState;
///
/// let event = DeviceEvent::attribute_changed(
///     DeviceId::new("fan"),
///     Attribute::Switch(SwitchState::On),
/// );
/// assert_eq!(event.device_id().as_str(), "fan");
/// assert!(event.is_attribute_change());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum DeviceEvent {
    /// An attribute took a new value.
    AttributeChanged {
        /// The device whose attribute changed.
        device_id: DeviceId,
        /// The new value.
        attribute: Attribute,
        /// When the change was observed.
        timestamp: DateTime<Utc>,
    },

    /// A child device was created.
    ChildAdded {
        /// The new child.
        device_id: DeviceId,
        /// The owning device.
        parent_id: DeviceId,
    },
}

impl DeviceEvent {
    /// Returns the device ID associated with this event.
    #[must_use]
    pub fn device_id(&self) -> &DeviceId {
        match self {
            Self::AttributeChanged { device_id, .. } | Self::ChildAdded { device_id, .. } => {
                device_id
            }
        }
    }

    /// Returns the attribute for attribute change events.
    #[must_use]
    pub fn attribute(&self) -> Option<&Attribute> {
        match self {
            Self::AttributeChanged { attribute, .. } => Some(attribute),
            Self::ChildAdded { .. } => None,
        }
    }

    /// Returns `true` if this is an attribute change event.
    #[must_use]
    pub fn is_attribute_change(&self) -> bool {
        matches!(self, Self::AttributeChanged { .. })
    }

    /// Creates an attribute change event stamped with the current time.
    #[must_use]
    pub fn attribute_changed(device_id: DeviceId, attribute: Attribute) -> Self {
        Self::AttributeChanged {
            device_id,
            attribute,
            timestamp: Utc::now(),
        }
    }

    /// Creates a child added event.
    #[must_use]
    pub fn child_added(device_id: DeviceId, parent_id: DeviceId) -> Self {
        Self::ChildAdded {
            device_id,
            parent_id,
        }
    }
}
