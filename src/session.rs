// SPDX-FileCopyrightText: 2026 The pressgate authors
//
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Subscription {
    Free,
    Premium,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Viewer {
    email: String,
    subscription: Subscription,
}

impl Viewer {
    pub(crate) fn new(email: &str, subscription: Subscription) -> Self {
        Self {
            email: email.to_owned(),
            subscription,
        }
    }

    pub(crate) fn email(&self) -> &str {
        &self.email
    }

    pub(crate) const fn subscription(&self) -> Subscription {
        self.subscription
    }

    pub(crate) fn with_subscription(mut self, subscription: Subscription) -> Self {
        self.subscription = subscription;
        self
    }
}

/// The viewer's authentication state as persisted under the `authState` key.
/// Constructors keep the flag and the identity in lockstep; data read back
/// from storage is checked with [`Self::is_consistent`] before use.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AuthState {
    is_authenticated: bool,
    user: Option<Viewer>,
}

impl AuthState {
    pub(crate) const fn signed_out() -> Self {
        Self {
            is_authenticated: false,
            user: None,
        }
    }

    pub(crate) const fn signed_in(viewer: Viewer) -> Self {
        Self {
            is_authenticated: true,
            user: Some(viewer),
        }
    }

    pub(crate) const fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }

    pub(crate) const fn viewer(&self) -> Option<&Viewer> {
        self.user.as_ref()
    }

    pub(crate) fn is_consistent(&self) -> bool {
        self.is_authenticated == self.user.is_some()
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::signed_out()
    }
}
