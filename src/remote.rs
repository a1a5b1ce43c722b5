// SPDX-FileCopyrightText: 2026 The pressgate authors
//
// SPDX-License-Identifier: Apache-2.0

use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use tokio::time;

use crate::{
    card::CardDetails,
    error::Result,
    session::{Subscription, Viewer},
};

/// What a mock service call settles to. A denied request is an ordinary
/// outcome; `Err` is reserved for unexpected internal faults.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Outcome<T> {
    Granted(T),
    Denied,
}

impl<T> Outcome<T> {
    pub(crate) const fn is_granted(&self) -> bool {
        matches!(self, Self::Granted(_))
    }
}

/// The stand-in backend. Every call is single-shot with no retry; each
/// returned future is an independent suspension point the caller may drop.
#[async_trait]
pub(crate) trait Remote: Send + Sync {
    async fn log_in(&self, email: &str, password: &SecretString) -> Result<Outcome<Viewer>>;

    async fn sign_up(
        &self,
        name: &str,
        email: &str,
        password: &SecretString,
    ) -> Result<Outcome<Viewer>>;

    async fn pay(&self, card: &CardDetails) -> Result<Outcome<()>>;

    async fn unlock_article(&self, article_id: &str) -> Result<Outcome<()>>;
}

#[async_trait]
impl<T: Remote + ?Sized> Remote for Box<T> {
    async fn log_in(&self, email: &str, password: &SecretString) -> Result<Outcome<Viewer>> {
        (**self).log_in(email, password).await
    }

    async fn sign_up(
        &self,
        name: &str,
        email: &str,
        password: &SecretString,
    ) -> Result<Outcome<Viewer>> {
        (**self).sign_up(name, email, password).await
    }

    async fn pay(&self, card: &CardDetails) -> Result<Outcome<()>> {
        (**self).pay(card).await
    }

    async fn unlock_article(&self, article_id: &str) -> Result<Outcome<()>> {
        (**self).unlock_article(article_id).await
    }
}

#[derive(Copy, Clone, Debug)]
pub(crate) struct Latency {
    pub(crate) log_in: Duration,
    pub(crate) sign_up: Duration,
    pub(crate) pay: Duration,
    pub(crate) unlock: Duration,
}

impl Default for Latency {
    fn default() -> Self {
        Self {
            log_in: Duration::from_millis(1500),
            sign_up: Duration::from_millis(2000),
            pay: Duration::from_millis(3000),
            unlock: Duration::from_millis(1000),
        }
    }
}

impl Latency {
    pub(crate) const NONE: Self = Self {
        log_in: Duration::ZERO,
        sign_up: Duration::ZERO,
        pay: Duration::ZERO,
        unlock: Duration::ZERO,
    };
}

/// Simulated services: an artificial delay followed by a success criterion
/// of "every required field is non-empty". Fresh accounts always start on
/// the free tier.
pub(crate) struct Simulated {
    latency: Latency,
}

impl Simulated {
    pub(crate) fn new() -> Self {
        Self {
            latency: Latency::default(),
        }
    }

    pub(crate) const fn with_latency(latency: Latency) -> Self {
        Self { latency }
    }
}

impl Default for Simulated {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Remote for Simulated {
    async fn log_in(&self, email: &str, password: &SecretString) -> Result<Outcome<Viewer>> {
        time::sleep(self.latency.log_in).await;

        if !email.is_empty() && !password.expose_secret().is_empty() {
            Ok(Outcome::Granted(Viewer::new(email, Subscription::Free)))
        } else {
            Ok(Outcome::Denied)
        }
    }

    async fn sign_up(
        &self,
        name: &str,
        email: &str,
        password: &SecretString,
    ) -> Result<Outcome<Viewer>> {
        time::sleep(self.latency.sign_up).await;

        if !name.is_empty() && !email.is_empty() && !password.expose_secret().is_empty() {
            Ok(Outcome::Granted(Viewer::new(email, Subscription::Free)))
        } else {
            Ok(Outcome::Denied)
        }
    }

    async fn pay(&self, card: &CardDetails) -> Result<Outcome<()>> {
        time::sleep(self.latency.pay).await;

        if !card.number.is_empty()
            && !card.expiry.is_empty()
            && !card.cvv.is_empty()
            && !card.name.is_empty()
        {
            Ok(Outcome::Granted(()))
        } else {
            Ok(Outcome::Denied)
        }
    }

    async fn unlock_article(&self, _article_id: &str) -> Result<Outcome<()>> {
        time::sleep(self.latency.unlock).await;
        Ok(Outcome::Granted(()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant() -> Simulated {
        Simulated::with_latency(Latency::NONE)
    }

    fn secret(value: &str) -> SecretString {
        SecretString::new(value.to_owned())
    }

    #[tokio::test]
    async fn log_in_grants_free_tier_for_non_empty_credentials() {
        let outcome = instant()
            .log_in("jane@example.com", &secret("hunter22"))
            .await
            .unwrap();
        match outcome {
            Outcome::Granted(viewer) => {
                assert_eq!(viewer.email(), "jane@example.com");
                assert_eq!(viewer.subscription(), Subscription::Free);
            }
            Outcome::Denied => panic!("expected a granted login"),
        }
    }

    #[tokio::test]
    async fn log_in_denies_empty_password() {
        let outcome = instant()
            .log_in("jane@example.com", &secret(""))
            .await
            .unwrap();
        assert_eq!(outcome, Outcome::Denied);
    }

    #[tokio::test]
    async fn sign_up_requires_every_field() {
        let remote = instant();
        let denied = remote
            .sign_up("", "jane@example.com", &secret("hunter22"))
            .await
            .unwrap();
        assert_eq!(denied, Outcome::Denied);

        let granted = remote
            .sign_up("Jane Doe", "jane@example.com", &secret("hunter22"))
            .await
            .unwrap();
        assert!(granted.is_granted());
    }

    #[tokio::test]
    async fn pay_checks_non_empty_fields_only() {
        let remote = instant();

        // Format problems are the flow's job; the mock only wants something
        // in every field.
        let sloppy = crate::card::CardDetails {
            number: "1".to_owned(),
            expiry: "1229".to_owned(),
            cvv: "9".to_owned(),
            name: "J".to_owned(),
        };
        assert!(remote.pay(&sloppy).await.unwrap().is_granted());

        let missing = crate::card::CardDetails {
            number: String::new(),
            ..sloppy
        };
        assert_eq!(remote.pay(&missing).await.unwrap(), Outcome::Denied);
    }

    #[tokio::test]
    async fn unlock_always_succeeds() {
        assert!(instant().unlock_article("2").await.unwrap().is_granted());
    }
}
