// SPDX-FileCopyrightText: 2026 The pressgate authors
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use clap::Parser;
use log::error;

use crate::{
    card::{self, CardDetails},
    catalog,
    error::{self, Result},
    flow::{Access, Choice, PaywallFlow, Settled},
    notify::ConsoleNotifier,
};

use super::App;

/// Subscribe to premium through the simulated payment flow.
#[derive(Debug, Parser)]
pub(crate) struct Command {
    /// The locked article that prompted the subscription.
    #[clap()]
    article: String,

    /// Card number.
    #[arg(long)]
    number: String,

    /// Expiry date (MM/YY).
    #[arg(long)]
    expiry: String,

    /// Card verification value.
    #[arg(long)]
    cvv: String,

    /// Cardholder name.
    #[arg(long)]
    name: String,
}

#[async_trait]
impl super::Command for Command {
    async fn execute(self, app: &mut App) -> Result<()> {
        let article = catalog::find(&self.article).ok_or(error::Error::ArticleNotFound {
            id: self.article.clone(),
        })?;

        let article_id = article.id.to_owned();
        let mut flow = PaywallFlow::new(ConsoleNotifier).on_complete(move || async move {
            println!("You now have access to all premium content. Enjoy article {article_id}!");
        });

        match flow.request_access(&app.store, article)? {
            Access::Readable => {
                println!(
                    r#""{}" is already readable; nothing to subscribe for."#,
                    article.title
                );
                return Ok(());
            }
            Access::Prompted => {}
        }

        match flow.choose_subscribe(&app.store)? {
            Choice::SignInRequired => {
                let memo = flow.take_return_memo().unwrap_or_default();
                error!("You are not signed in; sign in and retry (article {memo} is waiting)");
                return Err(error::Error::SignInRequired);
            }
            Choice::PaymentForm => {}
        }

        // The same as-you-type normalization the payment form applies.
        let details = CardDetails {
            number: card::format_number(&self.number),
            expiry: card::format_expiry(&self.expiry),
            cvv: card::format_cvv(&self.cvv),
            name: self.name,
        };

        println!("Processing...");
        match flow
            .submit_payment(&mut app.store, &app.remote, &details)
            .await?
        {
            Settled::Success => Ok(()),
            Settled::Failure => Err(error::Error::Command),
        }
    }
}
