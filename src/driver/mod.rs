// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The fan driver.
//!
//! [`FanDriver`] receives the hub's lifecycle calls and commands for one
//! appliance. Each operation sends at most one request at a time, reconciles
//! the answer into the fan and light attributes, and never reports failure
//! to the caller: problems are logged and simply produce no attribute change.
//!
//! # Lifecycle
//!
//! | Call | Effect |
//! |------|--------|
//! | [`installed`](FanDriver::installed) | Runs [`initialize`](FanDriver::initialize) |
//! | [`updated`](FanDriver::updated) | Stores new preferences, runs `initialize` |
//! | [`initialize`](FanDriver::initialize) | Publishes supported speeds, creates the light, arms polling, fetches state |
//! | [`uninstalled`](FanDriver::uninstalled) | Cancels polling |
//!
//! # Examples
//!
//! ```no_run
//! use modernforms_lib::device::{DeviceKind, HubDevice};
//! use modernforms_lib::event::EventBus;
//! use modernforms_lib::{DriverConfig, FanDriver};
//!
//! # async fn example() -> modernforms_lib::Result<()> {
//! let bus = EventBus::new();
//! let fan = HubDevice::new("mf-bedroom", "Bedroom Fan", DeviceKind::Fan, bus.clone());
//! let driver = FanDriver::builder(fan, DriverConfig::new("192.168.1.40")).build_http()?;
//!
//! let mut events = bus.subscribe();
//! driver.installed().await;
//! driver.set_speed("medium-high").await;
//!
//! while let Ok(event) = events.try_recv() {
//!     println!("{event:?}");
//! }
//! # Ok(())
//! # }
//! ```

mod context;
mod dispatcher;
mod poll;
mod reconcile;

pub use context::{DriverContext, LIGHT_ID_SUFFIX, LIGHT_LABEL_SUFFIX, child_light};
pub use dispatcher::Dispatcher;
pub use poll::{PollScheduler, PollState};
pub use reconcile::reconcile;

use std::fmt;
use std::sync::{Arc, Weak};
use std::time::Duration;

use parking_lot::{Mutex, RwLock};

use crate::command::Command;
use crate::config::DriverConfig;
use crate::device::{ChildDevices, ChildRegistry, HubDevice};
use crate::event::DeviceId;
use crate::protocol::Transport;
use crate::state::{ApplianceState, Attribute};
use crate::types::{FanSpeed, LightLevel, speed};

/// Driver for one Modern Forms fan+light appliance.
///
/// Clones share the same driver. Dropping the last clone stops polling.
pub struct FanDriver<T: Transport> {
    inner: Arc<Inner<T>>,
}

struct Inner<T> {
    fan: HubDevice,
    config: RwLock<DriverConfig>,
    dispatcher: Dispatcher<T>,
    children: Arc<dyn ChildDevices>,
    scheduler: PollScheduler,
    reconcile_lock: Mutex<()>,
}

impl<T: Transport> FanDriver<T> {
    /// Creates a driver.
    #[must_use]
    pub fn new(
        fan: HubDevice,
        config: DriverConfig,
        transport: T,
        children: Arc<dyn ChildDevices>,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                fan,
                config: RwLock::new(config),
                dispatcher: Dispatcher::new(transport),
                children,
                scheduler: PollScheduler::new(),
                reconcile_lock: Mutex::new(()),
            }),
        }
    }

    /// Returns the fan device.
    #[must_use]
    pub fn fan(&self) -> &HubDevice {
        &self.inner.fan
    }

    /// Returns the child light if it has been created.
    #[must_use]
    pub fn light(&self) -> Option<HubDevice> {
        self.inner.children.find(&light_id(self.inner.fan.id()))
    }

    /// Returns a copy of the current preferences.
    #[must_use]
    pub fn config(&self) -> DriverConfig {
        self.inner.config.read().clone()
    }

    /// Returns whether a poll is pending.
    #[must_use]
    pub fn poll_state(&self) -> PollState {
        self.inner.scheduler.state()
    }

    /// Subscribes to the events of the fan and its light.
    #[must_use]
    pub fn subscribe(&self) -> tokio::sync::broadcast::Receiver<crate::event::DeviceEvent> {
        self.inner.fan.events().subscribe()
    }

    /// Returns the transport.
    #[must_use]
    pub fn transport(&self) -> &T {
        self.inner.dispatcher.transport()
    }

    fn context(&self) -> DriverContext<'_> {
        DriverContext::new(self.config(), &self.inner.fan, self.inner.children.as_ref())
    }

    fn apply(&self, ctx: &DriverContext<'_>, state: &ApplianceState) {
        let _guard = self.inner.reconcile_lock.lock();
        reconcile(ctx, state);
    }

    /// Sends `command` and reconciles the answer.
    async fn execute(&self, command: Command) {
        let ctx = self.context();
        if let Some(state) = self.inner.dispatcher.fetch(&ctx, &command).await {
            self.apply(&ctx, &state);
        }
    }

    fn schedule_poll(&self) {
        let (interval, debug) = {
            let config = self.inner.config.read();
            (config.poll_interval(), config.log_enable())
        };
        if debug {
            tracing::debug!(fan = %self.inner.fan.id(), ?interval, "Scheduling poll");
        }
        self.inner
            .scheduler
            .arm(poll_loop(Arc::downgrade(&self.inner), interval));
    }

    // ========== Lifecycle ==========

    /// Called by the hub when the device is first added.
    pub async fn installed(&self) {
        tracing::info!(fan = %self.inner.fan.id(), "Installed");
        self.initialize().await;
    }

    /// Called by the hub when the user saves new preferences.
    pub async fn updated(&self, config: DriverConfig) {
        tracing::info!(fan = %self.inner.fan.id(), address = config.ip_address(), "Preferences updated");
        *self.inner.config.write() = config;
        self.initialize().await;
    }

    /// Called by the hub on startup and after any reconfiguration.
    pub async fn initialize(&self) {
        let ctx = self.context();
        if ctx.debug_enabled() {
            tracing::debug!(fan = %ctx.fan.id(), address = ctx.config.ip_address(), "Initializing");
        }

        ctx.fan
            .send_event(Attribute::SupportedFanSpeeds(FanSpeed::SELECTABLE.to_vec()));
        // Light must exist before the first state arrives
        ctx.light();

        self.schedule_poll();
        self.refresh().await;
    }

    /// Called by the hub before the device is removed.
    pub fn uninstalled(&self) {
        self.inner.scheduler.cancel();
        tracing::info!(fan = %self.inner.fan.id(), "Uninstalled");
    }

    // ========== Polling ==========

    /// Fetches state now and re-arms the poll timer.
    pub async fn poll(&self) {
        self.refresh().await;
        self.schedule_poll();
    }

    /// Fetches the full appliance state.
    pub async fn refresh(&self) {
        self.execute(Command::QueryState).await;
    }

    // ========== Fan ==========

    /// Switches the fan on.
    pub async fn on(&self) {
        self.execute(Command::FanOn(true)).await;
    }

    /// Switches the fan off.
    pub async fn off(&self) {
        self.execute(Command::FanOn(false)).await;
    }

    /// Sets the fan speed from a hub label.
    ///
    /// `on` and `off` switch the fan instead. Unknown labels are logged and
    /// sent as medium.
    pub async fn set_speed(&self, label: &str) {
        match label.parse::<FanSpeed>() {
            Ok(FanSpeed::On) => self.on().await,
            Ok(FanSpeed::Off) => self.off().await,
            _ => self.execute(Command::FanSpeed(speed::encode(label))).await,
        }
    }

    /// Moves the fan to the next speed.
    ///
    /// Does nothing if the current speed is unknown.
    pub async fn cycle_speed(&self) {
        let Some(current) = self.inner.fan.attributes().speed() else {
            tracing::error!(fan = %self.inner.fan.id(), "Cannot cycle speed, current speed unknown");
            return;
        };
        let Some(code) = current.next_code() else {
            tracing::error!(fan = %self.inner.fan.id(), speed = %current, "No speed to cycle to");
            return;
        };
        self.execute(Command::FanSpeed(code)).await;
    }

    /// Reverses the fan direction and then fetches the full state.
    ///
    /// The appliance's answer to a direction change is incomplete, so it is
    /// not reconciled. Does nothing if the current direction is unknown.
    pub async fn reverse_direction(&self) {
        let Some(current) = self.inner.fan.attributes().direction().cloned() else {
            tracing::error!(fan = %self.inner.fan.id(), "Cannot reverse, current direction unknown");
            return;
        };

        let ctx = self.context();
        let command = Command::FanDirection(current.reversed());
        if self.inner.dispatcher.send(&ctx, &command).await.is_some() {
            self.refresh().await;
        }
    }

    /// Reboots the appliance.
    ///
    /// The appliance drops the connection without answering, so the request
    /// ends in a timeout.
    pub async fn reboot(&self) {
        tracing::info!(fan = %self.inner.fan.id(), "Rebooting appliance");
        let ctx = self.context();
        self.inner.dispatcher.send(&ctx, &Command::Reboot).await;
    }

    // ========== Child light ==========

    /// Refresh requested from the light.
    pub async fn component_refresh(&self) {
        self.refresh().await;
    }

    /// Switches the light on.
    pub async fn component_on(&self) {
        self.execute(Command::LightOn(true)).await;
    }

    /// Switches the light off.
    pub async fn component_off(&self) {
        self.execute(Command::LightOn(false)).await;
    }

    /// Sets the light level. The appliance has no transitions, so
    /// `_transition` is ignored.
    pub async fn component_set_level(&self, level: LightLevel, _transition: Option<Duration>) {
        self.execute(Command::LightBrightness(level)).await;
    }

    /// Not supported by the appliance.
    pub fn component_start_level_change(&self, _direction: &str) {}

    /// Not supported by the appliance.
    pub fn component_stop_level_change(&self) {}
}

#[cfg(feature = "http")]
impl FanDriver<crate::protocol::HttpClient> {
    /// Creates a builder for a driver talking HTTP.
    #[must_use]
    pub fn builder(fan: HubDevice, config: DriverConfig) -> FanDriverBuilder {
        FanDriverBuilder::new(fan, config)
    }
}

impl<T: Transport> Clone for FanDriver<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Transport> fmt::Debug for FanDriver<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FanDriver")
            .field("fan", &self.inner.fan)
            .field("config", &*self.inner.config.read())
            .field("poll", &self.inner.scheduler.state())
            .finish_non_exhaustive()
    }
}

/// One poll per interval until the driver is dropped or the loop is
/// cancelled. The interval is re-read after each cycle.
async fn poll_loop<T: Transport>(inner: Weak<Inner<T>>, mut interval: Duration) {
    loop {
        tokio::time::sleep(interval).await;

        let Some(inner) = inner.upgrade() else {
            break;
        };
        let driver = FanDriver { inner };
        driver.refresh().await;
        interval = driver.inner.config.read().poll_interval();
    }
}

/// Builder for [`FanDriver`].
///
/// Without [`children`](Self::children), child devices live in an in-memory
/// [`ChildRegistry`] publishing on the fan's event bus.
pub struct FanDriverBuilder {
    fan: HubDevice,
    config: DriverConfig,
    children: Option<Arc<dyn ChildDevices>>,
}

impl FanDriverBuilder {
    /// Creates a builder.
    #[must_use]
    pub fn new(fan: HubDevice, config: DriverConfig) -> Self {
        Self {
            fan,
            config,
            children: None,
        }
    }

    /// Uses the host's child device store.
    #[must_use]
    pub fn children(mut self, children: Arc<dyn ChildDevices>) -> Self {
        self.children = Some(children);
        self
    }

    /// Builds a driver over `transport`.
    #[must_use]
    pub fn build<T: Transport>(self, transport: T) -> FanDriver<T> {
        let children = match self.children {
            Some(children) => children,
            None => Arc::new(ChildRegistry::new(self.fan.events().clone())),
        };
        FanDriver::new(self.fan, self.config, transport, children)
    }

    /// Builds a driver over a default [`HttpClient`](crate::protocol::HttpClient).
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    #[cfg(feature = "http")]
    pub fn build_http(self) -> crate::Result<FanDriver<crate::protocol::HttpClient>> {
        let client = crate::protocol::HttpClient::new()?;
        Ok(self.build(client))
    }
}

impl fmt::Debug for FanDriverBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FanDriverBuilder")
            .field("fan", &self.fan)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Identifier of the child light for a fan.
#[must_use]
pub fn light_id(fan: &DeviceId) -> DeviceId {
    fan.child(LIGHT_ID_SUFFIX)
}
