// SPDX-FileCopyrightText: 2026 The pressgate authors
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use clap::Parser;

use crate::{
    catalog::{self, Article},
    error::{self, Result},
    flow::{Access, Choice, PaywallFlow},
    notify::ConsoleNotifier,
};

use super::App;

/// Read an article, raising the paywall prompt when it is locked.
#[derive(Debug, Parser)]
pub(crate) struct Command {
    /// The ID of the article to read.
    #[clap()]
    id: String,
}

pub(crate) fn print_article(article: &Article) {
    println!("{}", article.title);
    println!(
        "{} · {} min read · {}",
        article.category, article.read_time, article.published_at
    );
    println!("Image: {}", article.image);
    println!();
    println!("{}", article.excerpt);
    println!();
    println!("{}", article.body);
}

#[async_trait]
impl super::Command for Command {
    async fn execute(self, app: &mut App) -> Result<()> {
        let article = catalog::find(&self.id).ok_or(error::Error::ArticleNotFound {
            id: self.id.clone(),
        })?;

        let mut flow = PaywallFlow::new(ConsoleNotifier);
        match flow.request_access(&app.store, article)? {
            Access::Readable => {
                print_article(article);
                Ok(())
            }
            Access::Prompted => {
                println!(
                    r#""{}" is premium content. {} to unlock this article and thousands more."#,
                    article.title,
                    if app.store.auth().is_authenticated() {
                        "Subscribe"
                    } else {
                        "Sign in or subscribe"
                    }
                );

                match flow.choose_subscribe(&app.store)? {
                    Choice::PaymentForm => {
                        println!(
                            "Subscribe for $9.99/month: pressgate subscribe {}",
                            article.id
                        );
                    }
                    Choice::SignInRequired => {
                        // The memo routes the viewer back here after the
                        // external auth flow finishes.
                        let memo = flow.take_return_memo().unwrap_or_else(|| article.id.to_owned());
                        println!(
                            "Sign in first: pressgate sign-in <email> --return-to {memo}"
                        );
                    }
                }
                Ok(())
            }
        }
    }
}
