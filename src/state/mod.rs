// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Appliance state and hub attribute types.
//!
//! [`ApplianceState`] is what the appliance reports; [`Attribute`] and
//! [`AttributeCache`] are what the hub devices hold.
//!
//! # Examples
//!
//! ```
//! use modernforms_lib::state::{Attribute, AttributeCache};
//! use modernforms_lib::types::FanSpeed;
//!
//! let mut cache = AttributeCache::new();
//!
//! // Apply returns true if the value actually changed
//! assert!(cache.apply(&Attribute::Speed(FanSpeed::Medium)));
//! assert!(!cache.apply(&Attribute::Speed(FanSpeed::Medium)));
//! ```

mod appliance_state;
mod attribute;
mod attribute_cache;

pub use appliance_state::ApplianceState;
pub use attribute::Attribute;
pub use attribute_cache::AttributeCache;
