// SPDX-FileCopyrightText: 2026 The pressgate authors
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use clap::Parser;

use crate::{
    catalog,
    error::{self, Result},
    forms,
    notify::{Event, Notifier},
    password::Prompt,
    remote::{Outcome, Remote},
};

use super::App;

/// Sign in with an existing account. The password is requested on the
/// terminal.
#[derive(Debug, Parser)]
pub(crate) struct Command {
    /// The email address to sign in with.
    #[arg(env = "PRESSGATE_EMAIL")]
    email: String,

    /// An article to return to once signed in, as left by the paywall
    /// prompt.
    #[arg(long)]
    return_to: Option<String>,
}

#[async_trait]
impl super::Command for Command {
    async fn execute(self, app: &mut App) -> Result<()> {
        let password = app
            .prompt
            .prompt("Password")
            .await?
            .ok_or(error::Password::NoPrompt)?;

        forms::validate_sign_in(&self.email, &password)?;

        match app.remote.log_in(&self.email, &password).await? {
            Outcome::Granted(viewer) => {
                app.store.sign_in(viewer).await?;
                app.notifier.notify(Event::SignedIn);
            }
            Outcome::Denied => {
                app.notifier.notify(Event::InvalidCredentials);
                return Ok(());
            }
        }

        // Honor the original-destination memo from the paywall redirect.
        if let Some(id) = self.return_to {
            match catalog::find(&id) {
                Some(article) if app.store.is_unlocked(article) => {
                    println!();
                    super::read::print_article(article);
                }
                Some(article) => {
                    println!(
                        r#"Returning you to "{}", which is still locked. Subscribe with: pressgate subscribe {}"#,
                        article.title, article.id
                    );
                }
                None => {
                    return Err(error::Error::ArticleNotFound { id });
                }
            }
        }

        Ok(())
    }
}
