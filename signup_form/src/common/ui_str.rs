// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! All the user facing strings live here, so there is exactly one place to change them.

use std::fmt::Display;

/// Shown in place of the form once the server accepts the sign-up.
pub const SUCCESS_NOTICE: &str = "User Created!";

/// Stored in [`crate::FormState::process_error`] when the POST fails for any reason.
pub const NETWORK_ERROR_MESSAGE: &str = "Network Problems. Try again.";

pub const PASSWORD_CONFIRMATION_MISMATCH: &str =
    "Password confirmation does not match to password";

pub mod validation_msg {
    use super::Display;

    #[must_use]
    pub fn required(field: impl Display) -> String {
        format!("{field} is a required field")
    }

    #[must_use]
    pub fn email(field: impl Display) -> String {
        format!("{field} must be a valid email")
    }

    #[must_use]
    pub fn min_length(field: impl Display, min: usize) -> String {
        format!("{field} must be at least {min} characters")
    }
}

pub mod cli_msg {
    use super::Display;

    #[must_use]
    pub fn field_error(field: impl Display, message: impl Display) -> String {
        format!("❌ {field}: {message}")
    }

    #[must_use]
    pub fn form_is_valid() -> String { "✅ All fields are valid.".to_string() }

    #[must_use]
    pub fn not_submitting_invalid_form() -> String {
        "Submit is disabled while the form has errors. Nothing was sent.".to_string()
    }

    #[must_use]
    pub fn dry_run() -> String { "Dry run, nothing was sent.".to_string() }

    #[must_use]
    pub fn submitting(endpoint: impl Display) -> String {
        format!("📨 Submitting sign-up to {endpoint}")
    }

    #[must_use]
    pub fn process_state(state: impl Display) -> String {
        format!("Process state: {state}")
    }

    #[must_use]
    pub fn process_error(message: impl Display) -> String {
        format!("Process error: {message}")
    }

    #[must_use]
    pub fn document_heading() -> String { "Document:".to_string() }
}
