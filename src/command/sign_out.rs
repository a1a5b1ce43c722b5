// SPDX-FileCopyrightText: 2026 The pressgate authors
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use clap::Parser;

use crate::{
    error::Result,
    notify::{Event, Notifier},
};

use super::App;

/// Sign out of the current session.
#[derive(Debug, Parser)]
pub(crate) struct Command {}

#[async_trait]
impl super::Command for Command {
    async fn execute(self, app: &mut App) -> Result<()> {
        app.store.sign_out().await?;
        app.notifier.notify(Event::SignedOut);
        Ok(())
    }
}
