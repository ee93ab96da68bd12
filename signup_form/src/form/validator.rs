// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The sign-up schema, and [`validate`] which applies it.
//!
//! Every field is checked, but each field stops at its first failing rule. So the result
//! has at most one [`Violation`] per field, and fields that pass are absent.
//!
//! | field                  | rules (in order)                          |
//! |------------------------|-------------------------------------------|
//! | `name`                 | none                                      |
//! | `email`                | required, email shape                     |
//! | `password`             | required, at least 6 characters           |
//! | `passwordConfirmation` | required, equal to `password`             |

use crate::{FieldName, FieldValues, PASSWORD_CONFIRMATION_MISMATCH, validation_msg};
use regex::Regex;
use serde::Serialize;
use std::{collections::BTreeMap, sync::LazyLock};

pub mod validator_constants {
    pub const PASSWORD_MIN_LENGTH: usize = 6;

    /// Local part, `@`, then at least two dot separated domain labels.
    pub const EMAIL_PATTERN: &str = r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$";
}

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(validator_constants::EMAIL_PATTERN).expect("EMAIL_PATTERN is a valid regex")
});

/// The first failing rule for a field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Violation {
    pub path: FieldName,
    pub message: String,
}

/// At most one entry per field, ordered the same way as [`FieldName`].
pub type ErrorsByField = BTreeMap<FieldName, Violation>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// The value must not be empty.
    Required,
    /// The value must look like an email address.
    Email,
    /// The value must be at least this long, counted in UTF-16 code units the way a
    /// browser measures an input's value. A character outside the Basic Multilingual
    /// Plane, eg: an emoji, counts as two.
    MinLength(usize),
    /// The value must be exactly equal to the value of `other`.
    EqualsField {
        other: FieldName,
        message: &'static str,
    },
}

const NO_RULES: &[Rule] = &[];
const EMAIL_RULES: &[Rule] = &[Rule::Required, Rule::Email];
const PASSWORD_RULES: &[Rule] = &[
    Rule::Required,
    Rule::MinLength(validator_constants::PASSWORD_MIN_LENGTH),
];
const PASSWORD_CONFIRMATION_RULES: &[Rule] = &[
    Rule::Required,
    Rule::EqualsField {
        other: FieldName::Password,
        message: PASSWORD_CONFIRMATION_MISMATCH,
    },
];

/// The ordered rules for `field`.
#[must_use]
pub fn rules_for(field: FieldName) -> &'static [Rule] {
    match field {
        // No rule is wired up for `name`, it is only collected and sent.
        FieldName::Name => NO_RULES,
        FieldName::Email => EMAIL_RULES,
        FieldName::Password => PASSWORD_RULES,
        FieldName::PasswordConfirmation => PASSWORD_CONFIRMATION_RULES,
    }
}

impl Rule {
    /// Returns the violation message if `field`'s value in `values` breaks this rule.
    #[must_use]
    pub fn check(self, field: FieldName, values: &FieldValues) -> Option<String> {
        let value = values.get(field);
        let passes = match self {
            Rule::Required => !value.is_empty(),
            Rule::Email => EMAIL_REGEX.is_match(value),
            Rule::MinLength(min) => value.encode_utf16().count() >= min,
            Rule::EqualsField { other, .. } => value == values.get(other),
        };

        if passes {
            return None;
        }

        Some(match self {
            Rule::Required => validation_msg::required(field),
            Rule::Email => validation_msg::email(field),
            Rule::MinLength(min) => validation_msg::min_length(field, min),
            Rule::EqualsField { message, .. } => message.to_string(),
        })
    }
}

/// Apply the sign-up schema to a snapshot of the field values. Pure.
#[must_use]
pub fn validate(fields: &FieldValues) -> ErrorsByField {
    FieldName::all()
        .filter_map(|field| {
            rules_for(field)
                .iter()
                .find_map(|rule| rule.check(field, fields))
                .map(|message| {
                    (
                        field,
                        Violation {
                            path: field,
                            message,
                        },
                    )
                })
        })
        .collect()
}
