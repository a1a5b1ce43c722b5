// SPDX-FileCopyrightText: 2026 The pressgate authors
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;

use crate::{error::Result, notify::Notifier, password::Prompt, remote::Remote, state::SessionStore};

pub(crate) mod list;
pub(crate) mod read;
pub(crate) mod sign_in;
pub(crate) mod sign_out;
pub(crate) mod sign_up;
pub(crate) mod status;
pub(crate) mod subscribe;
pub(crate) mod theme;
pub(crate) mod unlock;

/// The application shell handed to every command: the session store plus the
/// injected collaborators (remote services, notification surface, password
/// prompt).
pub(crate) struct App {
    pub(crate) store: SessionStore,
    pub(crate) remote: Box<dyn Remote>,
    pub(crate) notifier: Box<dyn Notifier>,
    pub(crate) prompt: Box<dyn Prompt>,
}

#[async_trait]
pub(crate) trait Command {
    async fn execute(self, app: &mut App) -> Result<()>;
}
