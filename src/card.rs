// SPDX-FileCopyrightText: 2026 The pressgate authors
//
// SPDX-License-Identifier: Apache-2.0

use crate::error::{FieldError, FieldErrors};

/// Simulated payment form fields. Validation here is the only gate before
/// the payment service is contacted; the service itself only checks that the
/// fields are non-empty.
#[derive(Clone, Debug, Default)]
pub(crate) struct CardDetails {
    pub(crate) number: String,
    pub(crate) expiry: String,
    pub(crate) cvv: String,
    pub(crate) name: String,
}

impl CardDetails {
    pub(crate) fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = Vec::new();

        if self.number.is_empty() {
            errors.push(FieldError {
                field: "number",
                message: "Card number is required",
            });
        } else if self.number.chars().filter(|c| !c.is_whitespace()).count() < 16 {
            errors.push(FieldError {
                field: "number",
                message: "Please enter a valid card number",
            });
        }

        if self.expiry.is_empty() {
            errors.push(FieldError {
                field: "expiry",
                message: "Expiry date is required",
            });
        } else if !is_expiry_format(&self.expiry) {
            errors.push(FieldError {
                field: "expiry",
                message: "Please enter a valid expiry date (MM/YY)",
            });
        }

        if self.cvv.is_empty() {
            errors.push(FieldError {
                field: "cvv",
                message: "CVV is required",
            });
        } else if self.cvv.len() < 3 {
            errors.push(FieldError {
                field: "cvv",
                message: "Please enter a valid CVV",
            });
        }

        if self.name.trim().is_empty() {
            errors.push(FieldError {
                field: "name",
                message: "Cardholder name is required",
            });
        }

        FieldErrors(errors).into_result()
    }
}

// Exactly two digits, a slash, two digits.
fn is_expiry_format(expiry: &str) -> bool {
    let bytes = expiry.as_bytes();
    bytes.len() == 5
        && bytes[0].is_ascii_digit()
        && bytes[1].is_ascii_digit()
        && bytes[2] == b'/'
        && bytes[3].is_ascii_digit()
        && bytes[4].is_ascii_digit()
}

/// Normalizes a card number the way the payment form does as the user
/// types: digits grouped in fours, capped at 19 characters.
pub(crate) fn format_number(input: &str) -> String {
    let digits: String = input.chars().filter(char::is_ascii_digit).collect();
    let mut formatted = String::new();
    for (idx, digit) in digits.chars().enumerate() {
        if idx > 0 && idx % 4 == 0 {
            formatted.push(' ');
        }
        formatted.push(digit);
    }
    formatted.truncate(19);
    formatted
}

/// Normalizes an expiry: digits only, a slash inserted after the month,
/// capped at `MM/YY` length.
pub(crate) fn format_expiry(input: &str) -> String {
    let digits: String = input.chars().filter(char::is_ascii_digit).collect();
    let mut formatted = String::new();
    for (idx, digit) in digits.chars().enumerate() {
        if idx == 2 {
            formatted.push('/');
        }
        formatted.push(digit);
    }
    formatted.truncate(5);
    formatted
}

/// Normalizes a CVV: digits only, at most four.
pub(crate) fn format_cvv(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).take(4).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_card() -> CardDetails {
        CardDetails {
            number: "4111 1111 1111 1111".to_owned(),
            expiry: "12/29".to_owned(),
            cvv: "123".to_owned(),
            name: "Jane Doe".to_owned(),
        }
    }

    #[test]
    fn valid_card_passes() {
        assert!(valid_card().validate().is_ok());
    }

    #[test]
    fn missing_slash_in_expiry_is_rejected() {
        let card = CardDetails {
            expiry: "1229".to_owned(),
            ..valid_card()
        };
        let errors = card.validate().unwrap_err();
        assert_eq!(errors.0.len(), 1);
        assert_eq!(errors.0[0].field, "expiry");
        assert_eq!(errors.0[0].message, "Please enter a valid expiry date (MM/YY)");
    }

    #[test]
    fn separators_do_not_count_toward_card_length() {
        let card = CardDetails {
            number: "4111 1111 1111 111".to_owned(),
            ..valid_card()
        };
        let errors = card.validate().unwrap_err();
        assert_eq!(errors.0[0].field, "number");
    }

    #[test]
    fn all_failures_are_reported_together() {
        let errors = CardDetails::default().validate().unwrap_err();
        let fields: Vec<_> = errors.0.iter().map(|e| e.field).collect();
        assert_eq!(fields, ["number", "expiry", "cvv", "name"]);
    }

    #[test]
    fn short_cvv_and_blank_name_are_rejected() {
        let card = CardDetails {
            cvv: "12".to_owned(),
            name: "   ".to_owned(),
            ..valid_card()
        };
        let errors = card.validate().unwrap_err();
        let fields: Vec<_> = errors.0.iter().map(|e| e.field).collect();
        assert_eq!(fields, ["cvv", "name"]);
    }

    #[test]
    fn formatting_helpers_match_the_form() {
        assert_eq!(format_number("4111111111111111"), "4111 1111 1111 1111");
        assert_eq!(format_expiry("1229"), "12/29");
        assert_eq!(format_cvv("12a34"), "1234");
    }
}
