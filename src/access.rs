// SPDX-FileCopyrightText: 2026 The pressgate authors
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeSet;

use crate::{
    catalog::Article,
    session::{AuthState, Subscription},
};

/// Whether `article` is readable for the given viewer state. Pure and
/// re-evaluated per query; the rules short-circuit in precedence order:
///
/// 1. free articles are always readable,
/// 2. a premium subscription covers every article,
/// 3. an individually unlocked article is readable on the free tier.
pub(crate) fn is_unlocked(article: &Article, auth: &AuthState, unlocked: &BTreeSet<String>) -> bool {
    !article.premium
        || auth
            .viewer()
            .map_or(false, |viewer| viewer.subscription() == Subscription::Premium)
        || unlocked.contains(article.id)
}

#[cfg(test)]
mod tests {
    use crate::session::Viewer;

    use super::*;

    fn free_article() -> Article {
        crate::catalog::find("1").cloned().unwrap()
    }

    fn premium_article() -> Article {
        crate::catalog::find("2").cloned().unwrap()
    }

    fn unlocked_set(ids: &[&str]) -> BTreeSet<String> {
        ids.iter().map(|id| (*id).to_owned()).collect()
    }

    #[test]
    fn free_articles_are_always_unlocked() {
        let article = free_article();
        let sessions = [
            AuthState::signed_out(),
            AuthState::signed_in(Viewer::new("a@b.c", Subscription::Free)),
            AuthState::signed_in(Viewer::new("a@b.c", Subscription::Premium)),
        ];
        for auth in &sessions {
            assert!(is_unlocked(&article, auth, &BTreeSet::new()));
            assert!(is_unlocked(&article, auth, &unlocked_set(&["9"])));
        }
    }

    #[test]
    fn premium_subscription_unlocks_without_membership() {
        let auth = AuthState::signed_in(Viewer::new("a@b.c", Subscription::Premium));
        assert!(is_unlocked(&premium_article(), &auth, &BTreeSet::new()));
    }

    #[test]
    fn individual_unlock_covers_free_tier() {
        let auth = AuthState::signed_in(Viewer::new("a@b.c", Subscription::Free));
        assert!(is_unlocked(&premium_article(), &auth, &unlocked_set(&["2"])));
    }

    #[test]
    fn premium_article_stays_locked_otherwise() {
        let article = premium_article();
        assert!(!is_unlocked(&article, &AuthState::signed_out(), &BTreeSet::new()));

        let auth = AuthState::signed_in(Viewer::new("a@b.c", Subscription::Free));
        assert!(!is_unlocked(&article, &auth, &unlocked_set(&["1", "3"])));
    }

    #[test]
    fn evaluation_is_idempotent() {
        let article = premium_article();
        let auth = AuthState::signed_in(Viewer::new("a@b.c", Subscription::Free));
        let unlocked = unlocked_set(&["2"]);

        let first = is_unlocked(&article, &auth, &unlocked);
        let second = is_unlocked(&article, &auth, &unlocked);
        assert_eq!(first, second);
    }
}
