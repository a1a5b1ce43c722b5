// SPDX-FileCopyrightText: 2026 The pressgate authors
//
// SPDX-License-Identifier: Apache-2.0

use std::{io, result};

use thiserror::Error;

pub(crate) type Result<T, E = Error> = result::Result<T, E>;

#[derive(Error, Debug)]
pub(crate) enum Error {
    #[error("IO operation failed: {0}")]
    Io(#[from] io::Error),
    #[error("JSON format error: {0}")]
    Json(serde_json::Error),
    #[error("password retrieval error: {0}")]
    Password(#[from] Password),
    #[error("{0}")]
    InvalidFields(#[from] FieldErrors),
    #[error("paywall flow error: {0}")]
    Flow(#[from] Flow),
    #[error(r#"no article with ID "{}" in the catalog"#, .id.escape_default())]
    ArticleNotFound { id: String },
    #[error("you need to sign in before you can do that")]
    SignInRequired,
    #[error("command execution failed")]
    Command,
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        // LINT: Deliberate fall-through that should catch future cases added to
        // the enum.
        #[allow(clippy::wildcard_enum_match_arm)]
        match value.classify() {
            serde_json::error::Category::Io => Self::Io(value.into()),
            _ => Self::Json(value),
        }
    }
}

impl From<tokio::task::JoinError> for Error {
    fn from(value: tokio::task::JoinError) -> Self {
        Self::Io(value.into())
    }
}

/// A field-level validation failure, keyed the way the corresponding form
/// field is named.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct FieldError {
    pub(crate) field: &'static str,
    pub(crate) message: &'static str,
}

#[derive(Debug)]
pub(crate) struct FieldErrors(pub(crate) Vec<FieldError>);

impl std::error::Error for FieldErrors {}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "some fields failed validation: ")?;
        for (idx, err) in self.0.iter().enumerate() {
            if idx > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", err.field, err.message)?;
        }
        Ok(())
    }
}

impl FieldErrors {
    pub(crate) fn into_result(self) -> Result<(), Self> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

#[derive(Error, Debug)]
pub(crate) enum Flow {
    #[error("no paywall prompt is active")]
    NotPrompted,
    #[error("no payment form is open")]
    NoPaymentForm,
    #[error("a payment is still processing")]
    Processing,
}

#[derive(Error, Debug)]
pub(crate) enum Password {
    #[error("no password prompt available")]
    NoPrompt,
}
