// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::SignUpError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Submission lifecycle of the form.
///
/// ```text
/// filling ──▶ sending ──▶ finished
///               ▲  │
///               │  ▼
///              failed
/// ```
///
/// `finished` is terminal. `failed` goes back to `sending` when the user submits again.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ProcessState {
    #[default]
    Filling,
    Sending,
    Finished,
    Failed,
}

impl ProcessState {
    /// Parse a state name. Anything other than the four known names is a fatal
    /// configuration error that carries the offending name.
    ///
    /// # Errors
    ///
    /// Returns [`SignUpError::UnknownProcessState`] for an unknown name.
    pub fn try_from_name(name: &str) -> Result<Self, SignUpError> {
        ProcessState::from_str(name).map_err(|_| SignUpError::UnknownProcessState {
            name: name.to_string(),
        })
    }

    #[must_use]
    pub fn can_transition_to(self, next: ProcessState) -> bool {
        use ProcessState::{Failed, Filling, Finished, Sending};
        matches!(
            (self, next),
            (Filling | Failed, Sending) | (Sending, Finished | Failed)
        )
    }

    #[must_use]
    pub fn is_terminal(self) -> bool { matches!(self, ProcessState::Finished) }
}
