// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ErrorsByField, FieldValues, ProcessState};
use serde::Serialize;

/// The whole state of one sign-up page. It is owned by [`crate::WatchedState`], which is
/// the only thing that writes to it.
///
/// `valid` is always equal to `errors.is_empty()`, since both are written together by
/// [`crate::WatchedState::set_validation`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    pub process_state: ProcessState,
    pub process_error: Option<String>,
    pub fields: FieldValues,
    pub valid: bool,
    pub errors: ErrorsByField,
}

impl Default for FormState {
    fn default() -> Self { Self::new() }
}

impl FormState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            process_state: ProcessState::Filling,
            process_error: None,
            fields: FieldValues::default(),
            valid: true,
            errors: ErrorsByField::new(),
        }
    }
}
