// SPDX-FileCopyrightText: 2026 The pressgate authors
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use clap::Parser;

use crate::{error::Result, theme::Theme};

use super::App;

/// Show or change the display theme.
#[derive(Debug, Parser)]
pub(crate) struct Command {
    /// The theme to switch to. Prints the current theme when omitted.
    #[arg(value_enum)]
    theme: Option<Theme>,
}

#[async_trait]
impl super::Command for Command {
    async fn execute(self, app: &mut App) -> Result<()> {
        match self.theme {
            Some(theme) => {
                app.store.set_theme(theme).await?;
                println!(
                    "Theme set to {theme} (dark mode {})",
                    if theme.is_dark() { "on" } else { "off" }
                );
            }
            None => println!("{}", app.store.theme()),
        }
        Ok(())
    }
}
