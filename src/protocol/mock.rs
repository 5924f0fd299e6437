// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scripted transport for unit tests.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::command::Command;
use crate::error::ProtocolError;
use crate::protocol::{CommandResponse, Transport};

type Responder = dyn Fn(&Command) -> Result<CommandResponse, ProtocolError> + Send + Sync;

/// Records every command and answers through a closure.
#[derive(Clone)]
pub(crate) struct MockTransport {
    sent: Arc<Mutex<Vec<(String, Command)>>>,
    responder: Arc<Mutex<Arc<Responder>>>,
}

impl MockTransport {
    /// Answers every command with `body`.
    pub(crate) fn replying(body: &str) -> Self {
        let body = body.to_string();
        Self::with(move |_| Ok(CommandResponse::new(body.clone())))
    }

    /// Answers through `responder`.
    pub(crate) fn with<F>(responder: F) -> Self
    where
        F: Fn(&Command) -> Result<CommandResponse, ProtocolError> + Send + Sync + 'static,
    {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            responder: Arc::new(Mutex::new(Arc::new(responder))),
        }
    }

    /// Replaces the responder for subsequent commands.
    pub(crate) fn respond_with<F>(&self, responder: F)
    where
        F: Fn(&Command) -> Result<CommandResponse, ProtocolError> + Send + Sync + 'static,
    {
        *self.responder.lock() = Arc::new(responder);
    }

    /// Commands sent so far.
    pub(crate) fn commands(&self) -> Vec<Command> {
        self.sent.lock().iter().map(|(_, c)| c.clone()).collect()
    }

    /// Addresses used so far.
    pub(crate) fn addresses(&self) -> Vec<String> {
        self.sent.lock().iter().map(|(a, _)| a.clone()).collect()
    }

    /// Number of full state fetches sent so far.
    pub(crate) fn query_count(&self) -> usize {
        self.sent
            .lock()
            .iter()
            .filter(|(_, c)| *c == Command::QueryState)
            .count()
    }

    pub(crate) fn clear(&self) {
        self.sent.lock().clear();
    }
}

impl Transport for MockTransport {
    async fn post(
        &self,
        address: &str,
        command: &Command,
    ) -> Result<CommandResponse, ProtocolError> {
        self.sent
            .lock()
            .push((address.to_string(), command.clone()));
        let responder = Arc::clone(&self.responder.lock());
        responder(command)
    }
}
