// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Appliance state to hub attribute reconciliation.

use crate::device::HubDevice;
use crate::state::{ApplianceState, Attribute};
use crate::types::{FanSpeed, LightLevel, SwitchState};

use super::DriverContext;

/// Applies an appliance state record to the fan and its child light.
///
/// Every step stands alone: an event is emitted only for an attribute whose
/// value changed, a bad value skips its own attribute, and a field missing
/// from the record is left untouched.
///
/// Returns the number of events emitted.
pub fn reconcile(ctx: &DriverContext<'_>, state: &ApplianceState) -> usize {
    let fan = ctx.fan;
    let mut emitted = 0;

    if let Some(code) = state.fan_speed {
        match FanSpeed::decode(code) {
            Some(speed) => emitted += emit(ctx, fan, Attribute::Speed(speed)),
            None => tracing::error!(fan = %fan.id(), code, "Unknown fan speed code"),
        }
    }

    if let Some(on) = state.fan_on {
        emitted += emit(ctx, fan, Attribute::Switch(SwitchState::from(on)));
    }

    if let Some(direction) = &state.fan_direction {
        emitted += emit(ctx, fan, Attribute::Direction(direction.clone()));
    }

    if state.light_on.is_none() && state.light_brightness.is_none() {
        return emitted;
    }

    let Some(light) = ctx.light() else {
        return emitted;
    };

    if let Some(on) = state.light_on {
        emitted += emit(ctx, &light, Attribute::Switch(SwitchState::from(on)));
    }

    if let Some(raw) = state.light_brightness {
        match LightLevel::from_raw(raw) {
            Ok(level) => emitted += emit(ctx, &light, Attribute::Level(level)),
            Err(err) => {
                tracing::error!(light = %light.id(), error = %err, "Invalid light brightness");
            }
        }
    }

    emitted
}

fn emit(ctx: &DriverContext<'_>, device: &HubDevice, attribute: Attribute) -> usize {
    let name = attribute.name();
    let value = attribute.value_string();
    if device.send_event(attribute) {
        if ctx.debug_enabled() {
            tracing::debug!(device = %device.id(), name, value = %value, "Attribute changed");
        }
        1
    } else {
        0
    }
}
