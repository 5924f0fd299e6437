// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Per-operation driver context and child light resolution.

use crate::config::DriverConfig;
use crate::device::{ChildDevices, ChildRequest, DeviceKind, HubDevice};
use crate::error::DeviceError;

/// Suffix appended to the fan identifier to form the light identifier.
pub const LIGHT_ID_SUFFIX: &str = "light";

/// Suffix appended to the fan label to form the light label.
pub const LIGHT_LABEL_SUFFIX: &str = " Light";

/// Everything one driver operation works with.
///
/// A context is built at the start of every operation from the live
/// preferences, so a reconfiguration is picked up by the next operation.
pub struct DriverContext<'a> {
    /// Preferences snapshot for this operation.
    pub config: DriverConfig,
    /// The fan device.
    pub fan: &'a HubDevice,
    children: &'a dyn ChildDevices,
}

impl<'a> DriverContext<'a> {
    /// Creates a context.
    #[must_use]
    pub fn new(config: DriverConfig, fan: &'a HubDevice, children: &'a dyn ChildDevices) -> Self {
        Self {
            config,
            fan,
            children,
        }
    }

    /// Returns `true` if debug lines should be logged.
    #[must_use]
    pub fn debug_enabled(&self) -> bool {
        self.config.log_enable()
    }

    /// Returns the child light, creating it on first use.
    ///
    /// Failures are logged and yield `None`.
    pub fn light(&self) -> Option<HubDevice> {
        match child_light(self.fan, self.children) {
            Ok(light) => Some(light),
            Err(err) => {
                tracing::error!(fan = %self.fan.id(), error = %err, "Unable to resolve child light");
                None
            }
        }
    }
}

/// Looks up the child light of `fan`, creating it if absent.
///
/// # Errors
///
/// Returns `DeviceError` if the host refuses to create the child.
pub fn child_light(fan: &HubDevice, children: &dyn ChildDevices) -> Result<HubDevice, DeviceError> {
    let id = fan.id().child(LIGHT_ID_SUFFIX);
    if let Some(light) = children.find(&id) {
        return Ok(light);
    }

    tracing::info!(fan = %fan.id(), light = %id, "Creating child light device");

    children.create(ChildRequest {
        id,
        label: format!("{}{LIGHT_LABEL_SUFFIX}", fan.label()),
        kind: DeviceKind::DimmableLight,
        parent: fan.id().clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::ChildRegistry;
    use crate::event::{DeviceId, EventBus};

    #[test]
    fn light_is_created_once() {
        let bus = EventBus::new();
        let fan = HubDevice::new("mf-1", "Office Fan", DeviceKind::Fan, bus.clone());
        let registry = ChildRegistry::new(bus);

        let first = child_light(&fan, &registry).unwrap();
        let second = child_light(&fan, &registry).unwrap();

        assert!(first.same_device(&second));
        assert_eq!(first.id(), &DeviceId::new("mf-1-light"));
        assert_eq!(first.label(), "Office Fan Light");
        assert_eq!(first.kind(), DeviceKind::DimmableLight);
        assert!(first.is_component());
        assert_eq!(registry.len(), 1);
    }

    struct RefusingHost;

    impl ChildDevices for RefusingHost {
        fn find(&self, _id: &DeviceId) -> Option<HubDevice> {
            None
        }

        fn create(&self, request: ChildRequest) -> Result<HubDevice, DeviceError> {
            Err(DeviceError::ChildCreationFailed {
                id: request.id,
                reason: "driver not installed".to_string(),
            })
        }
    }

    #[test]
    fn creation_failure_yields_none() {
        let fan = HubDevice::new("mf-1", "Fan", DeviceKind::Fan, EventBus::new());
        let ctx = DriverContext::new(DriverConfig::new("10.0.0.2"), &fan, &RefusingHost);
        assert!(ctx.light().is_none());
    }
}
