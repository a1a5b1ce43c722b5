// SPDX-FileCopyrightText: 2026 The pressgate authors
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use clap::Parser;
use tabled::{
    settings::{object::Segment, Alignment, Modify, Style},
    Table, Tabled,
};

use crate::{catalog, error::Result};

use super::App;

/// List the article library, optionally filtered.
#[derive(Debug, Parser)]
pub(crate) struct Command {
    /// Free-text search over titles and excerpts.
    #[arg(long, short)]
    query: Option<String>,

    /// Only show articles in this category.
    #[arg(long, short)]
    category: Option<String>,
}

#[derive(Tabled)]
struct Row<'article> {
    #[tabled(rename = "ID")]
    id: &'article str,
    #[tabled(rename = "Title")]
    title: &'article str,
    #[tabled(rename = "Category")]
    category: &'article str,
    #[tabled(rename = "Minutes")]
    read_time: u32,
    #[tabled(rename = "Published")]
    published_at: &'article str,
    #[tabled(rename = "Access")]
    access: &'static str,
}

#[async_trait]
impl super::Command for Command {
    async fn execute(self, app: &mut App) -> Result<()> {
        let articles = catalog::filter(self.query.as_deref(), self.category.as_deref());

        if articles.is_empty() {
            println!("No articles match.");
            return Ok(());
        }

        let rows = articles.iter().map(|&article| Row {
            id: article.id,
            title: article.title,
            category: article.category,
            read_time: article.read_time,
            published_at: article.published_at,
            access: match (article.premium, app.store.is_unlocked(article)) {
                (false, _) => "free",
                (true, true) => "unlocked",
                (true, false) => "locked",
            },
        });

        println!(
            "{}",
            Table::new(rows)
                .with(Style::rounded())
                .with(Modify::new(Segment::new(1.., 1..=2)).with(Alignment::left()))
        );
        Ok(())
    }
}
