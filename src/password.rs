// SPDX-FileCopyrightText: 2026 The pressgate authors
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use secrecy::SecretString;
use tokio::task;

use crate::error::Result;

#[async_trait]
pub(crate) trait Prompt: Send + Sync {
    async fn prompt(&self, label: &str) -> Result<Option<SecretString>>;
}

#[async_trait]
impl<T: Prompt + ?Sized> Prompt for Box<T> {
    async fn prompt(&self, label: &str) -> Result<Option<SecretString>> {
        (**self).prompt(label).await
    }
}

pub(crate) struct RpasswordPrompt;

#[async_trait]
impl Prompt for RpasswordPrompt {
    async fn prompt(&self, label: &str) -> Result<Option<SecretString>> {
        let label = format!("{label}: ");
        Ok(Some(
            task::spawn_blocking(move || {
                rpassword::prompt_password(label).map(SecretString::new)
            })
            .await??,
        ))
    }
}
