// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Poll timer.

use std::future::Future;

use parking_lot::Mutex;
use tokio::task::JoinHandle;

/// Whether a poll is pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollState {
    /// No poll is pending.
    Idle,
    /// A poll loop is armed.
    Scheduled,
}

/// Holds the single pending poll loop of a driver.
///
/// Arming always cancels the loop armed before it, so at most one is ever
/// pending. Dropping the scheduler cancels the pending loop.
#[derive(Debug, Default)]
pub struct PollScheduler {
    handle: Mutex<Option<JoinHandle<()>>>,
}

impl PollScheduler {
    /// Creates an idle scheduler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawns `task` as the pending poll loop, cancelling the previous one.
    ///
    /// Must be called from within a tokio runtime.
    pub fn arm<F>(&self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let handle = tokio::spawn(task);
        if let Some(previous) = self.handle.lock().replace(handle) {
            previous.abort();
        }
    }

    /// Cancels the pending poll loop.
    ///
    /// Returns `true` if one was pending.
    pub fn cancel(&self) -> bool {
        match self.handle.lock().take() {
            Some(handle) => {
                let pending = !handle.is_finished();
                handle.abort();
                pending
            }
            None => false,
        }
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> PollState {
        match self.handle.lock().as_ref() {
            Some(handle) if !handle.is_finished() => PollState::Scheduled,
            _ => PollState::Idle,
        }
    }
}

impl Drop for PollScheduler {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.get_mut().take() {
            handle.abort();
        }
    }
}
