// SPDX-FileCopyrightText: 2026 The pressgate authors
//
// SPDX-License-Identifier: Apache-2.0

use secrecy::{ExposeSecret, SecretString};

use crate::error::{FieldError, FieldErrors};

fn looks_like_email(email: &str) -> bool {
    // Minimal x@y.z shape, the same sanity check the original forms apply.
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        _ => false,
    }
}

fn validate_email(email: &str, errors: &mut Vec<FieldError>) {
    if email.is_empty() {
        errors.push(FieldError {
            field: "email",
            message: "Email is required",
        });
    } else if !looks_like_email(email) {
        errors.push(FieldError {
            field: "email",
            message: "Please enter a valid email address",
        });
    }
}

fn validate_password(password: &SecretString, errors: &mut Vec<FieldError>) {
    if password.expose_secret().is_empty() {
        errors.push(FieldError {
            field: "password",
            message: "Password is required",
        });
    } else if password.expose_secret().len() < 6 {
        errors.push(FieldError {
            field: "password",
            message: "Password must be at least 6 characters",
        });
    }
}

/// Sign-in form: email and password.
pub(crate) fn validate_sign_in(email: &str, password: &SecretString) -> Result<(), FieldErrors> {
    let mut errors = Vec::new();
    validate_email(email, &mut errors);
    validate_password(password, &mut errors);
    FieldErrors(errors).into_result()
}

/// Sign-up form: display name, email, password, and confirmation.
pub(crate) fn validate_sign_up(
    name: &str,
    email: &str,
    password: &SecretString,
    confirm_password: &SecretString,
) -> Result<(), FieldErrors> {
    let mut errors = Vec::new();

    if name.trim().is_empty() {
        errors.push(FieldError {
            field: "name",
            message: "Name is required",
        });
    } else if name.trim().len() < 2 {
        errors.push(FieldError {
            field: "name",
            message: "Name must be at least 2 characters",
        });
    }

    validate_email(email, &mut errors);
    validate_password(password, &mut errors);

    if confirm_password.expose_secret().is_empty() {
        errors.push(FieldError {
            field: "confirmPassword",
            message: "Please confirm your password",
        });
    } else if confirm_password.expose_secret() != password.expose_secret() {
        errors.push(FieldError {
            field: "confirmPassword",
            message: "Passwords do not match",
        });
    }

    FieldErrors(errors).into_result()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(value: &str) -> SecretString {
        SecretString::new(value.to_owned())
    }

    #[test]
    fn sign_in_accepts_reasonable_credentials() {
        assert!(validate_sign_in("jane@example.com", &secret("hunter22")).is_ok());
    }

    #[test]
    fn sign_in_rejects_malformed_email() {
        let errors = validate_sign_in("jane@", &secret("hunter22")).unwrap_err();
        assert_eq!(errors.0[0].field, "email");
        assert_eq!(errors.0[0].message, "Please enter a valid email address");
    }

    #[test]
    fn sign_in_rejects_short_password() {
        let errors = validate_sign_in("jane@example.com", &secret("abc")).unwrap_err();
        assert_eq!(errors.0[0].field, "password");
    }

    #[test]
    fn sign_up_requires_matching_confirmation() {
        let errors = validate_sign_up(
            "Jane Doe",
            "jane@example.com",
            &secret("hunter22"),
            &secret("hunter23"),
        )
        .unwrap_err();
        assert_eq!(errors.0[0].field, "confirmPassword");
        assert_eq!(errors.0[0].message, "Passwords do not match");
    }

    #[test]
    fn sign_up_requires_a_name() {
        let errors = validate_sign_up(
            " ",
            "jane@example.com",
            &secret("hunter22"),
            &secret("hunter22"),
        )
        .unwrap_err();
        assert_eq!(errors.0[0].field, "name");
    }
}
