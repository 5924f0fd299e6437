// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Hub-side device handles.
//!
//! A [`HubDevice`] is the hub's view of a device: an identity, a label, a
//! cache of attribute values and the event bus its changes go to. The driver
//! owns one for the fan and resolves a second one, the light, through
//! [`ChildDevices`].
//!
//! Handles are cheap to clone; clones share the same attribute cache.

mod registry;

pub use registry::{ChildDevices, ChildRegistry, ChildRequest};

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::event::{DeviceEvent, DeviceId, EventBus};
use crate::state::{Attribute, AttributeCache};

/// Capability type of a hub device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceKind {
    /// Fan with switch, speed and direction.
    Fan,
    /// Generic dimmable light with switch and level.
    DimmableLight,
}

impl DeviceKind {
    /// Returns the hub driver type name.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Fan => "Modern Forms Fan",
            Self::DimmableLight => "Generic Component Dimmer",
        }
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// Handle to a device registered with the hub.
///
/// # Examples
///
/// ```
/// use modernforms_lib::device::{DeviceKind, HubDevice};
/// use modernforms_lib::event::EventBus;
/// use modernforms_lib::state::Attribute;
/// use modernforms_lib::types::SwitchState;
///
/// let fan = HubDevice::new("fan-1", "Patio Fan", DeviceKind::Fan, EventBus::new());
///
/// assert!(fan.send_event(Attribute::Switch(SwitchState::Off)));
/// assert!(!fan.send_event(Attribute::Switch(SwitchState::Off)));
/// assert_eq!(fan.attributes().switch(), Some(SwitchState::Off));
/// ```
#[derive(Clone)]
pub struct HubDevice {
    inner: Arc<DeviceInner>,
}

struct DeviceInner {
    id: DeviceId,
    label: String,
    kind: DeviceKind,
    component: bool,
    attributes: RwLock<AttributeCache>,
    events: EventBus,
}

impl HubDevice {
    /// Creates a top-level device handle.
    #[must_use]
    pub fn new(
        id: impl Into<DeviceId>,
        label: impl Into<String>,
        kind: DeviceKind,
        events: EventBus,
    ) -> Self {
        Self::build(id.into(), label.into(), kind, false, events)
    }

    /// Creates a component child handle.
    ///
    /// Component children have no lifecycle of their own; the hub removes
    /// them together with their parent.
    #[must_use]
    pub fn component(
        id: impl Into<DeviceId>,
        label: impl Into<String>,
        kind: DeviceKind,
        events: EventBus,
    ) -> Self {
        Self::build(id.into(), label.into(), kind, true, events)
    }

    fn build(
        id: DeviceId,
        label: String,
        kind: DeviceKind,
        component: bool,
        events: EventBus,
    ) -> Self {
        Self {
            inner: Arc::new(DeviceInner {
                id,
                label,
                kind,
                component,
                attributes: RwLock::new(AttributeCache::new()),
                events,
            }),
        }
    }

    /// Returns the device identifier.
    #[must_use]
    pub fn id(&self) -> &DeviceId {
        &self.inner.id
    }

    /// Returns the display label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.inner.label
    }

    /// Returns the capability type.
    #[must_use]
    pub fn kind(&self) -> DeviceKind {
        self.inner.kind
    }

    /// Returns `true` for component children.
    #[must_use]
    pub fn is_component(&self) -> bool {
        self.inner.component
    }

    /// Returns a snapshot of the cached attributes.
    #[must_use]
    pub fn attributes(&self) -> AttributeCache {
        self.inner.attributes.read().clone()
    }

    /// Returns the event bus this device publishes to.
    #[must_use]
    pub fn events(&self) -> &EventBus {
        &self.inner.events
    }

    /// Returns `true` if both handles refer to the same device instance.
    #[must_use]
    pub fn same_device(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Records an attribute value, publishing an event only if it changed.
    ///
    /// Returns `true` if an event was emitted.
    pub fn send_event(&self, attribute: Attribute) -> bool {
        let changed = self.inner.attributes.write().apply(&attribute);
        if changed {
            self.inner
                .events
                .publish(DeviceEvent::attribute_changed(self.id().clone(), attribute));
        }
        changed
    }
}

impl fmt::Debug for HubDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HubDevice")
            .field("id", &self.inner.id)
            .field("label", &self.inner.label)
            .field("kind", &self.inner.kind)
            .field("component", &self.inner.component)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FanSpeed, LightLevel};

    #[test]
    fn send_event_publishes_only_changes() {
        let bus = EventBus::new();
        let mut rx = bus.subscribe();
        let fan = HubDevice::new("fan", "Fan", DeviceKind::Fan, bus);

        assert!(fan.send_event(Attribute::Speed(FanSpeed::Low)));
        assert!(!fan.send_event(Attribute::Speed(FanSpeed::Low)));
        assert!(fan.send_event(Attribute::Speed(FanSpeed::High)));

        let first = rx.try_recv().unwrap();
        let second = rx.try_recv().unwrap();
        assert_eq!(first.attribute(), Some(&Attribute::Speed(FanSpeed::Low)));
        assert_eq!(second.attribute(), Some(&Attribute::Speed(FanSpeed::High)));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn clones_share_attributes() {
        let light = HubDevice::component(
            "fan-light",
            "Fan Light",
            DeviceKind::DimmableLight,
            EventBus::new(),
        );
        let other = light.clone();

        light.send_event(Attribute::Level(LightLevel::MAX));
        assert_eq!(other.attributes().level(), Some(LightLevel::MAX));
        assert!(light.same_device(&other));
        assert!(other.is_component());
    }

    #[test]
    fn distinct_instances_are_not_the_same_device() {
        let a = HubDevice::new("fan", "Fan", DeviceKind::Fan, EventBus::new());
        let b = HubDevice::new("fan", "Fan", DeviceKind::Fan, EventBus::new());
        assert!(!a.same_device(&b));
    }
}
