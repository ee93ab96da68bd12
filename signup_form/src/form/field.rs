// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// The four inputs of the sign-up form, in declaration order. The [`Ord`] impl follows
/// that order, which is what keeps [`crate::ErrorsByField`] ordered the same way the form
/// is laid out.
///
/// The string form (via [`Display`], [`EnumString`], and serde) is the camel case wire
/// name, eg: `passwordConfirmation`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    Name,
    Email,
    Password,
    PasswordConfirmation,
}

impl FieldName {
    /// The `id` attribute of the input element bound to this field.
    #[must_use]
    pub fn element_id(self) -> &'static str {
        match self {
            FieldName::Name => "sign-up-name",
            FieldName::Email => "sign-up-email",
            FieldName::Password => "sign-up-password",
            FieldName::PasswordConfirmation => "sign-up-password-confirmation",
        }
    }

    /// Human readable label, used by the headless page fixture.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            FieldName::Name => "Name",
            FieldName::Email => "Email",
            FieldName::Password => "Password",
            FieldName::PasswordConfirmation => "Password Confirmation",
        }
    }

    /// The dotted state path that a write to this field is reported under.
    #[must_use]
    pub fn state_path(self) -> &'static str {
        match self {
            FieldName::Name => "form.fields.name",
            FieldName::Email => "form.fields.email",
            FieldName::Password => "form.fields.password",
            FieldName::PasswordConfirmation => "form.fields.passwordConfirmation",
        }
    }

    pub fn all() -> impl Iterator<Item = FieldName> { FieldName::iter() }
}

/// Current value of every field. Serializes to the flat JSON object that is POSTed, eg:
/// `{"name":"","email":"","password":"","passwordConfirmation":""}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldValues {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

impl FieldValues {
    #[must_use]
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::Name => &self.name,
            FieldName::Email => &self.email,
            FieldName::Password => &self.password,
            FieldName::PasswordConfirmation => &self.password_confirmation,
        }
    }

    pub fn set(&mut self, field: FieldName, value: impl Into<String>) {
        let slot = match field {
            FieldName::Name => &mut self.name,
            FieldName::Email => &mut self.email,
            FieldName::Password => &mut self.password,
            FieldName::PasswordConfirmation => &mut self.password_confirmation,
        };
        *slot = value.into();
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> {
        FieldName::all().map(move |field| (field, self.get(field)))
    }
}
