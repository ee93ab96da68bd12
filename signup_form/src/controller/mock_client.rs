// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{FieldValues, SignUpClient, SubmitError};
use async_trait::async_trait;
use std::{collections::VecDeque,
          sync::{Arc, Mutex, MutexGuard}};

/// What a [`MockSignUpClient`] answers to one POST.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockOutcome {
    Succeed,
    FailWithStatus(u16),
    FailWithMessage(String),
}

/// A [`SignUpClient`] that never touches the network. It records every body it is
/// asked to POST, and answers with scripted outcomes.
///
/// Outcomes are consumed in order, and the last one repeats forever. Clones share the
/// same script and the same request log, so a test can keep a clone around to inspect
/// what the page sent.
#[derive(Debug, Clone)]
pub struct MockSignUpClient {
    outcomes: Arc<Mutex<VecDeque<MockOutcome>>>,
    requests: Arc<Mutex<Vec<FieldValues>>>,
}

impl MockSignUpClient {
    /// An empty script behaves like [`MockOutcome::Succeed`].
    #[must_use]
    pub fn scripted(outcomes: impl IntoIterator<Item = MockOutcome>) -> Self {
        Self {
            outcomes: Arc::new(Mutex::new(outcomes.into_iter().collect())),
            requests: Arc::new(Mutex::new(vec![])),
        }
    }

    #[must_use]
    pub fn succeeding() -> Self { Self::scripted([MockOutcome::Succeed]) }

    #[must_use]
    pub fn failing_with_status(status: u16) -> Self {
        Self::scripted([MockOutcome::FailWithStatus(status)])
    }

    #[must_use]
    pub fn failing_with_message(message: impl Into<String>) -> Self {
        Self::scripted([MockOutcome::FailWithMessage(message.into())])
    }

    /// Every body posted so far, oldest first.
    #[must_use]
    pub fn requests(&self) -> Vec<FieldValues> { lock(&self.requests).clone() }

    fn next_outcome(&self) -> MockOutcome {
        let mut outcomes = lock(&self.outcomes);
        if outcomes.len() > 1 {
            outcomes.pop_front().unwrap_or(MockOutcome::Succeed)
        } else {
            outcomes.front().cloned().unwrap_or(MockOutcome::Succeed)
        }
    }
}

/// Poisoning is ignored, the log stays readable after a panic.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
}

#[async_trait]
impl SignUpClient for MockSignUpClient {
    async fn post_fields(&self, fields: &FieldValues) -> Result<(), SubmitError> {
        lock(&self.requests).push(fields.clone());
        match self.next_outcome() {
            MockOutcome::Succeed => Ok(()),
            MockOutcome::FailWithStatus(status) => Err(SubmitError::Status { status }),
            MockOutcome::FailWithMessage(message) => Err(SubmitError::Client { message }),
        }
    }
}
