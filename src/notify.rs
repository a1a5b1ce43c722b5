// SPDX-FileCopyrightText: 2026 The pressgate authors
//
// SPDX-License-Identifier: Apache-2.0

/// Events surfaced to the viewer. Rendering them (toasts in the original
/// app, plain lines here) is the presentation layer's business.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Event {
    SignedIn,
    SignedOut,
    AccountCreated,
    InvalidCredentials,
    SignUpRejected,
    SubscriptionActivated,
    PaymentFailed,
    ArticleUnlocked { id: String },
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SignedIn => write!(f, "Signed in successfully!"),
            Self::SignedOut => write!(f, "Signed out successfully"),
            Self::AccountCreated => write!(f, "Account created successfully!"),
            Self::InvalidCredentials => write!(f, "Invalid credentials. Please try again."),
            Self::SignUpRejected => write!(f, "Failed to create account. Please try again."),
            Self::SubscriptionActivated => write!(f, "Subscription activated successfully!"),
            Self::PaymentFailed => write!(f, "Payment failed. Please try again."),
            Self::ArticleUnlocked { id } => {
                write!(f, r#"Article "{}" unlocked!"#, id.escape_default())
            }
        }
    }
}

pub(crate) trait Notifier: Send {
    fn notify(&mut self, event: Event);
}

impl<T: Notifier + ?Sized> Notifier for Box<T> {
    fn notify(&mut self, event: Event) {
        (**self).notify(event);
    }
}

/// Prints each event on its own line, standing in for the toast surface.
pub(crate) struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&mut self, event: Event) {
        println!("{event}");
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::{Event, Notifier};

    /// Captures events for assertions.
    #[derive(Default)]
    pub(crate) struct Recorder {
        pub(crate) events: Vec<Event>,
    }

    impl Notifier for Recorder {
        fn notify(&mut self, event: Event) {
            self.events.push(event);
        }
    }
}
