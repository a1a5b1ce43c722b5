// SPDX-FileCopyrightText: 2026 The pressgate authors
//
// SPDX-License-Identifier: Apache-2.0

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Display theme, persisted under the `theme` key as a bare string.
#[derive(Serialize, Deserialize, ValueEnum, Copy, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The global display-mode flag mirrored by the presentation layer.
    pub(crate) const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_test::{assert_tokens, Token};

    use super::*;

    #[test]
    fn theme_format() {
        assert_tokens(
            &Theme::Dark,
            &[Token::UnitVariant {
                name: "Theme",
                variant: "dark",
            }],
        );
        assert!(Theme::Dark.is_dark());
        assert!(!Theme::default().is_dark());
    }
}
