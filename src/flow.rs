// SPDX-FileCopyrightText: 2026 The pressgate authors
//
// SPDX-License-Identifier: Apache-2.0

use std::time::Duration;

use futures_util::{future::BoxFuture, FutureExt};
use log::debug;
use tokio::time;

use crate::{
    card::CardDetails,
    catalog::Article,
    error::{self, Result},
    notify::{Event, Notifier},
    remote::{Outcome, Remote},
    state::SessionStore,
};

/// Where the entitlement flow currently sits. At rest the machine is always
/// `Browsing`; the settled states are passed through while a submission
/// resolves and are reported through [`Settled`] and the notifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum State {
    Browsing,
    Prompted { article_id: String },
    RedirectToSignIn { article_id: String },
    PaymentForm { article_id: String },
    Processing { article_id: String },
}

/// The outcome of a locked-content request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Access {
    Readable,
    Prompted,
}

/// Which way the paywall prompt resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Choice {
    PaymentForm,
    SignInRequired,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Settled {
    Success,
    Failure,
}

type CompletionCallback = Box<dyn FnOnce() -> BoxFuture<'static, ()> + Send>;

/// The multi-step machine that turns a locked article into an unlocked one:
/// prompt, optional sign-in detour, payment simulation, entitlement commit.
/// Pure transition logic lives here; persistence is the session store's job
/// and the remote service is injected per call.
pub(crate) struct PaywallFlow<N> {
    state: State,
    notifier: N,
    success_display: Duration,
    on_complete: Option<CompletionCallback>,
}

impl<N: Notifier> PaywallFlow<N> {
    pub(crate) fn new(notifier: N) -> Self {
        Self {
            state: State::Browsing,
            notifier,
            // How long the original modal lingers on its confirmation
            // before closing itself.
            success_display: Duration::from_millis(1500),
            on_complete: None,
        }
    }

    pub(crate) fn with_success_display(mut self, display: Duration) -> Self {
        self.success_display = display;
        self
    }

    /// Registers a callback invoked once a successful payment has closed
    /// the flow.
    pub(crate) fn on_complete<F, Fut>(mut self, callback: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: std::future::Future<Output = ()> + Send + 'static,
    {
        self.on_complete = Some(Box::new(move || callback().boxed()));
        self
    }

    pub(crate) const fn state(&self) -> &State {
        &self.state
    }

    /// A viewer asked for `article`. Readable content leaves the machine in
    /// `Browsing`; locked content raises the paywall prompt and captures
    /// the target.
    pub(crate) fn request_access(
        &mut self,
        store: &SessionStore,
        article: &Article,
    ) -> Result<Access> {
        if matches!(self.state, State::Processing { .. }) {
            return Err(error::Flow::Processing.into());
        }

        if store.is_unlocked(article) {
            self.state = State::Browsing;
            return Ok(Access::Readable);
        }

        debug!("Raising the paywall prompt for article {}", article.id);
        self.state = State::Prompted {
            article_id: article.id.to_owned(),
        };
        Ok(Access::Prompted)
    }

    /// The viewer took the subscribe path from the prompt. Signed-in
    /// viewers proceed to the payment form; everyone else is redirected to
    /// sign-in carrying a memo of where they started.
    pub(crate) fn choose_subscribe(&mut self, store: &SessionStore) -> Result<Choice> {
        let State::Prompted { article_id } = &self.state else {
            return Err(error::Flow::NotPrompted.into());
        };
        let article_id = article_id.clone();

        if store.auth().is_authenticated() {
            self.state = State::PaymentForm { article_id };
            Ok(Choice::PaymentForm)
        } else {
            self.state = State::RedirectToSignIn { article_id };
            Ok(Choice::SignInRequired)
        }
    }

    /// Consumes the original-destination memo left by a sign-in redirect,
    /// resuming `Browsing`. The external auth flow is responsible for
    /// routing the viewer back.
    pub(crate) fn take_return_memo(&mut self) -> Option<String> {
        if let State::RedirectToSignIn { article_id } = &self.state {
            let memo = article_id.clone();
            self.state = State::Browsing;
            Some(memo)
        } else {
            None
        }
    }

    /// Submits the payment form. Local validation is the only gate before
    /// the remote call; a validation failure keeps the form open and never
    /// dispatches. A granted payment commits the premium upgrade, lingers
    /// on the confirmation, runs the completion callback, and closes the
    /// flow. A denied payment reopens the form for retry with nothing
    /// committed.
    pub(crate) async fn submit_payment<R: Remote + ?Sized>(
        &mut self,
        store: &mut SessionStore,
        remote: &R,
        card: &CardDetails,
    ) -> Result<Settled> {
        let State::PaymentForm { article_id } = &self.state else {
            return Err(error::Flow::NoPaymentForm.into());
        };
        let article_id = article_id.clone();

        card.validate()?;

        self.state = State::Processing {
            article_id: article_id.clone(),
        };

        let settled = async {
            match remote.pay(card).await? {
                Outcome::Granted(()) => {
                    store.upgrade_to_premium().await?;
                    Ok(Settled::Success)
                }
                Outcome::Denied => Ok(Settled::Failure),
            }
        }
        .await;

        match settled {
            Ok(Settled::Success) => {
                self.notifier.notify(Event::SubscriptionActivated);
                time::sleep(self.success_display).await;
                if let Some(on_complete) = self.on_complete.take() {
                    on_complete().await;
                }
                self.state = State::Browsing;
                Ok(Settled::Success)
            }
            Ok(Settled::Failure) => {
                self.notifier.notify(Event::PaymentFailed);
                self.state = State::PaymentForm { article_id };
                Ok(Settled::Failure)
            }
            Err(e) => {
                // Internal fault: nothing was committed, so the form
                // reopens for another attempt.
                self.state = State::PaymentForm { article_id };
                Err(e)
            }
        }
    }

    /// Dismisses the flow. Refused while a payment is in flight; there is
    /// no cancellation once a submission has been dispatched.
    pub(crate) fn close(&mut self) -> Result<()> {
        if matches!(self.state, State::Processing { .. }) {
            return Err(error::Flow::Processing.into());
        }

        self.state = State::Browsing;
        Ok(())
    }
}
