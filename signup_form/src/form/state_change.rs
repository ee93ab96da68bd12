// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ErrorsByField, FieldName, ProcessState};

/// One write to the [`crate::FormState`], carrying the new value. This is a closed set,
/// so a subscriber that `match`es on it is checked for exhaustiveness at compile time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateChange {
    Field { field: FieldName, value: String },
    ProcessState(ProcessState),
    ProcessError(Option<String>),
    Valid(bool),
    Errors(ErrorsByField),
}

pub mod state_paths {
    pub const PROCESS_STATE: &str = "form.processState";
    pub const PROCESS_ERROR: &str = "form.processError";
    pub const VALID: &str = "form.valid";
    pub const ERRORS: &str = "form.errors";
}

impl StateChange {
    /// Dotted address of the written property, eg: `form.processState` or
    /// `form.fields.email`.
    #[must_use]
    pub fn path(&self) -> &'static str {
        match self {
            StateChange::Field { field, .. } => field.state_path(),
            StateChange::ProcessState(_) => state_paths::PROCESS_STATE,
            StateChange::ProcessError(_) => state_paths::PROCESS_ERROR,
            StateChange::Valid(_) => state_paths::VALID,
            StateChange::Errors(_) => state_paths::ERRORS,
        }
    }
}
