// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Child device store.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::error::DeviceError;
use crate::event::{DeviceEvent, DeviceId, EventBus};

use super::{DeviceKind, HubDevice};

/// Everything the hub needs to create a child device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildRequest {
    /// Identifier of the new child.
    pub id: DeviceId,
    /// Display label of the new child.
    pub label: String,
    /// Capability type of the new child.
    pub kind: DeviceKind,
    /// Identifier of the owning device.
    pub parent: DeviceId,
}

/// The hub's store of child devices.
///
/// Hosts with their own device database implement this; [`ChildRegistry`]
/// is an in-memory implementation.
pub trait ChildDevices: Send + Sync {
    /// Looks up a child by identifier.
    fn find(&self, id: &DeviceId) -> Option<HubDevice>;

    /// Creates a component child.
    ///
    /// # Errors
    ///
    /// Returns `DeviceError` if the host cannot create the device.
    fn create(&self, request: ChildRequest) -> Result<HubDevice, DeviceError>;
}

/// In-memory child device store.
///
/// Created children publish on the registry's event bus, which is normally
/// the same bus the parent uses.
///
/// # Examples
///
/// ```
/// use modernforms_lib::device::{ChildDevices, ChildRegistry, ChildRequest, DeviceKind};
/// use modernforms_lib::event::{DeviceId, EventBus};
///
/// let registry = ChildRegistry::new(EventBus::new());
/// let parent = DeviceId::new("fan");
///
/// let light = registry
///     .create(ChildRequest {
///         id: parent.child("light"),
///         label: "Fan Light".to_string(),
///         kind: DeviceKind::DimmableLight,
///         parent,
///     })
///     .unwrap();
///
/// assert!(registry.find(light.id()).unwrap().same_device(&light));
/// ```
#[derive(Debug)]
pub struct ChildRegistry {
    devices: RwLock<HashMap<DeviceId, HubDevice>>,
    events: EventBus,
}

impl ChildRegistry {
    /// Creates an empty registry publishing on `events`.
    #[must_use]
    pub fn new(events: EventBus) -> Self {
        Self {
            devices: RwLock::new(HashMap::new()),
            events,
        }
    }

    /// Returns the number of children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.devices.read().len()
    }

    /// Returns `true` if there are no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.devices.read().is_empty()
    }
}

impl ChildDevices for ChildRegistry {
    fn find(&self, id: &DeviceId) -> Option<HubDevice> {
        self.devices.read().get(id).cloned()
    }

    fn create(&self, request: ChildRequest) -> Result<HubDevice, DeviceError> {
        let mut devices = self.devices.write();
        if devices.contains_key(&request.id) {
            return Err(DeviceError::AlreadyExists(request.id));
        }

        let device = HubDevice::component(
            request.id.clone(),
            request.label,
            request.kind,
            self.events.clone(),
        );
        devices.insert(request.id.clone(), device.clone());
        drop(devices);

        self.events
            .publish(DeviceEvent::child_added(request.id, request.parent));

        Ok(device)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn light_request(parent: &str) -> ChildRequest {
        let parent = DeviceId::new(parent);
        ChildRequest {
            id: parent.child("light"),
            label: "Light".to_string(),
            kind: DeviceKind::DimmableLight,
            parent,
        }
    }

    #[test]
    fn create_then_find() {
        let registry = ChildRegistry::new(EventBus::new());
        assert!(registry.is_empty());

        let created = registry.create(light_request("fan")).unwrap();
        let found = registry.find(&DeviceId::new("fan-light")).unwrap();

        assert!(created.same_device(&found));
        assert!(found.is_component());
        assert_eq!(found.kind(), DeviceKind::DimmableLight);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn duplicate_create_is_rejected() {
        let registry = ChildRegistry::new(EventBus::new());
        registry.create(light_request("fan")).unwrap();

        let err = registry.create(light_request("fan")).unwrap_err();
        assert!(matches!(err, DeviceError::AlreadyExists(id) if id.as_str() == "fan-light"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn create_publishes_child_added() {
        let bus = EventBus::new();
        let mut rx = bus.subscribe();
        let registry = ChildRegistry::new(bus);

        registry.create(light_request("fan")).unwrap();

        let event = rx.try_recv().unwrap();
        assert_eq!(
            event,
            DeviceEvent::child_added(DeviceId::new("fan-light"), DeviceId::new("fan"))
        );
    }
}
