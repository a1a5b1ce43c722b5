// SPDX-FileCopyrightText: 2026 The pressgate authors
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeSet;

use log::warn;
use tokio::sync::watch;

use crate::{
    access,
    catalog::Article,
    error::Result,
    session::{AuthState, Subscription, Viewer},
    storage::Storage,
    theme::Theme,
};

/// An immutable view of the current viewer state, published to subscribers
/// after every committed change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Snapshot {
    pub(crate) auth: AuthState,
    pub(crate) unlocked: BTreeSet<String>,
    pub(crate) theme: Theme,
}

/// Owns the viewer state for the process: authentication, the per-article
/// unlock set, and the theme preference. Every mutation is committed to the
/// injected storage backend before the in-memory value changes hands, so a
/// persisted read always reflects the last observed state.
pub(crate) struct SessionStore {
    auth: AuthState,
    unlocked: BTreeSet<String>,
    theme: Theme,
    auth_storage: Box<dyn Storage<AuthState>>,
    unlocked_storage: Box<dyn Storage<BTreeSet<String>>>,
    theme_storage: Box<dyn Storage<Theme>>,
    watch_tx: watch::Sender<Snapshot>,
}

fn get_or_default<T: Default>(stored: Result<Option<T>>, key: &str) -> T {
    match stored {
        Ok(Some(value)) => value,
        Ok(None) => T::default(),
        Err(e) => {
            warn!("Ignoring the saved {key} value because it could not be read: {e}");
            T::default()
        }
    }
}

impl SessionStore {
    /// Loads the persisted state, falling back to defaults for anything
    /// missing or malformed. Never fails.
    pub(crate) async fn hydrate(
        mut auth_storage: Box<dyn Storage<AuthState>>,
        mut unlocked_storage: Box<dyn Storage<BTreeSet<String>>>,
        mut theme_storage: Box<dyn Storage<Theme>>,
    ) -> Self {
        let mut auth: AuthState = get_or_default(auth_storage.get().await, "authState");
        if !auth.is_consistent() {
            warn!("Ignoring the saved authState value because it is inconsistent");
            auth = AuthState::default();
        }

        let unlocked = get_or_default(unlocked_storage.get().await, "unlockedArticles");
        let theme = get_or_default(theme_storage.get().await, "theme");

        let (watch_tx, _) = watch::channel(Snapshot {
            auth: auth.clone(),
            unlocked: unlocked.clone(),
            theme,
        });

        Self {
            auth,
            unlocked,
            theme,
            auth_storage,
            unlocked_storage,
            theme_storage,
            watch_tx,
        }
    }

    pub(crate) const fn auth(&self) -> &AuthState {
        &self.auth
    }

    pub(crate) const fn unlocked(&self) -> &BTreeSet<String> {
        &self.unlocked
    }

    pub(crate) const fn theme(&self) -> Theme {
        self.theme
    }

    /// Evaluates the access rules against the current state. Recomputed on
    /// every call; nothing is cached.
    pub(crate) fn is_unlocked(&self, article: &Article) -> bool {
        access::is_unlocked(article, &self.auth, &self.unlocked)
    }

    pub(crate) fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.watch_tx.subscribe()
    }

    fn publish(&self) {
        _ = self.watch_tx.send_replace(Snapshot {
            auth: self.auth.clone(),
            unlocked: self.unlocked.clone(),
            theme: self.theme,
        });
    }

    pub(crate) async fn sign_in(&mut self, viewer: Viewer) -> Result<()> {
        let auth = AuthState::signed_in(viewer);
        self.auth_storage.update(&auth).await?;
        self.auth = auth;
        self.publish();
        Ok(())
    }

    pub(crate) async fn sign_out(&mut self) -> Result<()> {
        let auth = AuthState::signed_out();
        self.auth_storage.update(&auth).await?;
        self.auth = auth;
        self.publish();
        Ok(())
    }

    /// Upgrades the signed-in viewer to the premium tier. A no-op while
    /// signed out, matching the payment flow's guard.
    pub(crate) async fn upgrade_to_premium(&mut self) -> Result<()> {
        let Some(viewer) = self.auth.viewer() else {
            return Ok(());
        };

        let auth = AuthState::signed_in(viewer.clone().with_subscription(Subscription::Premium));
        self.auth_storage.update(&auth).await?;
        self.auth = auth;
        self.publish();
        Ok(())
    }

    /// Adds one article to the unlock set. The set is append-only; there is
    /// no removal path.
    pub(crate) async fn unlock_article(&mut self, id: &str) -> Result<()> {
        if self.unlocked.contains(id) {
            return Ok(());
        }

        let mut unlocked = self.unlocked.clone();
        _ = unlocked.insert(id.to_owned());
        self.unlocked_storage.update(&unlocked).await?;
        self.unlocked = unlocked;
        self.publish();
        Ok(())
    }

    pub(crate) async fn set_theme(&mut self, theme: Theme) -> Result<()> {
        self.theme_storage.update(&theme).await?;
        self.theme = theme;
        self.publish();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use crate::storage::{IsPersistent, Memory};

    use super::*;

    fn memory_backends() -> (
        Memory<AuthState>,
        Memory<BTreeSet<String>>,
        Memory<Theme>,
    ) {
        (Memory::new(), Memory::new(), Memory::new())
    }

    async fn hydrated(
        auth: Memory<AuthState>,
        unlocked: Memory<BTreeSet<String>>,
        theme: Memory<Theme>,
    ) -> SessionStore {
        SessionStore::hydrate(Box::new(auth), Box::new(unlocked), Box::new(theme)).await
    }

    #[tokio::test]
    async fn premium_session_survives_rehydration() {
        let (auth, unlocked, theme) = memory_backends();

        let mut store = hydrated(auth.clone(), unlocked.clone(), theme.clone()).await;
        store
            .sign_in(Viewer::new("jane@example.com", Subscription::Free))
            .await
            .unwrap();
        store.upgrade_to_premium().await.unwrap();
        drop(store);

        // A fresh process loading the same backends needs no re-auth.
        let reloaded = hydrated(auth, unlocked, theme).await;
        assert!(reloaded.auth().is_authenticated());
        assert_eq!(
            reloaded.auth().viewer().map(Viewer::subscription),
            Some(Subscription::Premium)
        );
    }

    #[tokio::test]
    async fn mutations_write_through_before_returning() {
        let (auth, unlocked, theme) = memory_backends();
        let mut unlocked_reader = unlocked.clone();

        let mut store = hydrated(auth, unlocked, theme).await;
        store.unlock_article("2").await.unwrap();

        let persisted: BTreeSet<String> = unlocked_reader.get().await.unwrap().unwrap();
        assert!(persisted.contains("2"));
    }

    #[tokio::test]
    async fn unlock_set_is_append_only_and_deduplicated() {
        let (auth, unlocked, theme) = memory_backends();
        let mut store = hydrated(auth, unlocked, theme).await;

        store.unlock_article("2").await.unwrap();
        store.unlock_article("2").await.unwrap();
        store.unlock_article("3").await.unwrap();

        assert_eq!(store.unlocked().len(), 2);
    }

    #[tokio::test]
    async fn subscribers_observe_committed_changes() {
        let (auth, unlocked, theme) = memory_backends();
        let mut store = hydrated(auth, unlocked, theme).await;
        let mut rx = store.subscribe();

        store.set_theme(Theme::Dark).await.unwrap();
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().theme, Theme::Dark);
    }

    struct Corrupt;

    impl IsPersistent for Corrupt {
        fn is_persistent(&self) -> bool {
            true
        }
    }

    #[async_trait]
    impl<T: Send + Sync> crate::storage::Storage<T> for Corrupt {
        async fn get(&mut self) -> Result<Option<T>> {
            Err(serde_json::from_str::<()>("{").unwrap_err().into())
        }

        async fn update(&mut self, _data: &T) -> Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn malformed_stored_values_fall_back_to_defaults() {
        let store = SessionStore::hydrate(
            Box::new(Corrupt),
            Box::new(Corrupt),
            Box::new(Corrupt),
        )
        .await;

        assert!(!store.auth().is_authenticated());
        assert!(store.unlocked().is_empty());
        assert_eq!(store.theme(), Theme::Light);
    }

    #[tokio::test]
    async fn inconsistent_auth_state_is_discarded() {
        let (auth, unlocked, theme) = memory_backends();

        // Bypass the constructors with a raw record the way a tampered
        // store would look.
        let inconsistent: AuthState =
            serde_json::from_str(r#"{"isAuthenticated":true,"user":null}"#).unwrap();
        let mut writer = auth.clone();
        writer.update(&inconsistent).await.unwrap();

        let store = hydrated(auth, unlocked, theme).await;
        assert!(!store.auth().is_authenticated());
    }
}
