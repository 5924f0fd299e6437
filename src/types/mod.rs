// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for fan and light control.
//!
//! # Types
//!
//! - [`SwitchState`] - `on`/`off` for the fan motor and the light
//! - [`FanSpeed`] - Speed labels and the code mapping tables
//! - [`FanDirection`] - Rotation direction, passed through verbatim
//! - [`LightLevel`] - Light brightness (0-100%)

mod dimmer;
mod direction;
mod power;
pub mod speed;

pub use dimmer::LightLevel;
pub use direction::FanDirection;
pub use power::SwitchState;
pub use speed::FanSpeed;
