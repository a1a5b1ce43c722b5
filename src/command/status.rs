// SPDX-FileCopyrightText: 2026 The pressgate authors
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use clap::Parser;

use crate::{error::Result, session::Subscription};

use super::App;

/// Show the current session, subscription, and preferences.
#[derive(Debug, Parser)]
pub(crate) struct Command {}

#[async_trait]
impl super::Command for Command {
    async fn execute(self, app: &mut App) -> Result<()> {
        match app.store.auth().viewer() {
            Some(viewer) => {
                println!("Signed in as {}", viewer.email());
                println!(
                    "Subscription: {}",
                    match viewer.subscription() {
                        Subscription::Free => "free",
                        Subscription::Premium => "premium",
                    }
                );
            }
            None => println!("Not signed in"),
        }

        println!("Theme: {}", app.store.theme());

        if app.store.unlocked().is_empty() {
            println!("Individually unlocked articles: none");
        } else {
            let ids: Vec<&str> = app.store.unlocked().iter().map(String::as_str).collect();
            println!("Individually unlocked articles: {}", ids.join(", "));
        }

        Ok(())
    }
}
