// SPDX-FileCopyrightText: 2026 The pressgate authors
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use clap::Parser;

use crate::{
    catalog,
    error::{self, Result},
    notify::{Event, Notifier},
    remote::{Outcome, Remote},
};

use super::App;

/// Unlock a single premium article without a subscription.
#[derive(Debug, Parser)]
pub(crate) struct Command {
    /// The ID of the article to unlock.
    #[clap()]
    id: String,
}

#[async_trait]
impl super::Command for Command {
    async fn execute(self, app: &mut App) -> Result<()> {
        let article = catalog::find(&self.id).ok_or(error::Error::ArticleNotFound {
            id: self.id.clone(),
        })?;

        if !app.store.auth().is_authenticated() {
            return Err(error::Error::SignInRequired);
        }

        if app.store.is_unlocked(article) {
            println!(r#""{}" is already readable."#, article.title);
            return Ok(());
        }

        println!("Processing...");
        match app.remote.unlock_article(article.id).await? {
            Outcome::Granted(()) => {
                app.store.unlock_article(article.id).await?;
                app.notifier.notify(Event::ArticleUnlocked {
                    id: article.id.to_owned(),
                });
                Ok(())
            }
            Outcome::Denied => Err(error::Error::Command),
        }
    }
}
