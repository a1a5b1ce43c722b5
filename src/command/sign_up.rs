// SPDX-FileCopyrightText: 2026 The pressgate authors
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use clap::Parser;

use crate::{
    error::{self, Result},
    forms,
    notify::{Event, Notifier},
    password::Prompt,
    remote::{Outcome, Remote},
};

use super::App;

/// Create a new account. The password and its confirmation are requested on
/// the terminal.
#[derive(Debug, Parser)]
pub(crate) struct Command {
    /// Your display name.
    #[clap()]
    name: String,

    /// The email address to register.
    #[arg(env = "PRESSGATE_EMAIL")]
    email: String,
}

#[async_trait]
impl super::Command for Command {
    async fn execute(self, app: &mut App) -> Result<()> {
        let password = app
            .prompt
            .prompt("Password")
            .await?
            .ok_or(error::Password::NoPrompt)?;
        let confirm = app
            .prompt
            .prompt("Confirm password")
            .await?
            .ok_or(error::Password::NoPrompt)?;

        forms::validate_sign_up(&self.name, &self.email, &password, &confirm)?;

        match app.remote.sign_up(&self.name, &self.email, &password).await? {
            Outcome::Granted(viewer) => {
                app.store.sign_in(viewer).await?;
                app.notifier.notify(Event::AccountCreated);
            }
            Outcome::Denied => {
                app.notifier.notify(Event::SignUpRejected);
            }
        }

        Ok(())
    }
}
