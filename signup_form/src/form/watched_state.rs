// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! [`WatchedState`] owns the [`FormState`] and is the only way to write to it.
//!
//! Every setter does the write first, and then synchronously calls
//! [`StateSubscriber::on_change`] with a [`StateChange`] that describes it, before it
//! returns to the caller. There is no batching: two writes produce two notifications, in
//! the order the writes happened.
//!
//! To fan out to more than one subscriber, use a tuple `(A, B)`; `A` runs before `B`.

use crate::{ErrorsByField, FieldName, FormState, ProcessState, SignUpError, StateChange,
            validate};
use std::collections::VecDeque;

/// Receives every write to a [`WatchedState`].
pub trait StateSubscriber {
    /// Called after the write has been applied.
    ///
    /// # Errors
    ///
    /// An error aborts the notification and is returned from the setter that caused it.
    /// The write itself is not rolled back.
    fn on_change(&mut self, change: &StateChange) -> Result<(), SignUpError>;
}

impl<S: StateSubscriber + ?Sized> StateSubscriber for Box<S> {
    fn on_change(&mut self, change: &StateChange) -> Result<(), SignUpError> {
        (**self).on_change(change)
    }
}

impl<A: StateSubscriber, B: StateSubscriber> StateSubscriber for (A, B) {
    fn on_change(&mut self, change: &StateChange) -> Result<(), SignUpError> {
        self.0.on_change(change)?;
        self.1.on_change(change)
    }
}

/// No subscriber. Writes are still recorded in the history.
impl StateSubscriber for () {
    fn on_change(&mut self, _change: &StateChange) -> Result<(), SignUpError> { Ok(()) }
}

pub mod watched_state_constants {
    pub const DEFAULT_HISTORY_CAPACITY: usize = 64;
}

#[derive(Debug)]
pub struct WatchedState<S> {
    state: FormState,
    subscriber: S,
    history: VecDeque<StateChange>,
    history_capacity: usize,
}

impl<S: StateSubscriber> WatchedState<S> {
    pub fn new(subscriber: S) -> Self {
        Self {
            state: FormState::new(),
            subscriber,
            history: VecDeque::new(),
            history_capacity: watched_state_constants::DEFAULT_HISTORY_CAPACITY,
        }
    }

    /// Keep at most `capacity` of the most recent changes in [`Self::history`].
    #[must_use]
    pub fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        while self.history.len() > capacity {
            self.history.pop_front();
        }
        self
    }

    pub fn state(&self) -> &FormState { &self.state }

    pub fn subscriber(&self) -> &S { &self.subscriber }

    pub fn subscriber_mut(&mut self) -> &mut S { &mut self.subscriber }

    pub fn into_subscriber(self) -> S { self.subscriber }

    /// The most recent changes, oldest first.
    pub fn history(&self) -> impl Iterator<Item = &StateChange> { self.history.iter() }

    /// The process states that were written, oldest first.
    pub fn process_state_history(&self) -> Vec<ProcessState> {
        self.history
            .iter()
            .filter_map(|change| match change {
                StateChange::ProcessState(it) => Some(*it),
                _ => None,
            })
            .collect()
    }

    /// # Errors
    ///
    /// Returns the subscriber's error, if any.
    pub fn set_field(
        &mut self,
        field: FieldName,
        value: impl Into<String>,
    ) -> Result<(), SignUpError> {
        let value = value.into();
        self.state.fields.set(field, value.clone());
        self.notify(StateChange::Field { field, value })
    }

    /// # Errors
    ///
    /// Returns the subscriber's error, if any.
    pub fn set_process_error(
        &mut self,
        process_error: Option<String>,
    ) -> Result<(), SignUpError> {
        self.state.process_error.clone_from(&process_error);
        self.notify(StateChange::ProcessError(process_error))
    }

    /// Move along the lifecycle (see [`ProcessState`]).
    ///
    /// # Errors
    ///
    /// Returns [`SignUpError::InvalidTransition`] if the lifecycle does not allow going
    /// from the current state to `next`. Nothing is written in that case. Otherwise
    /// returns the subscriber's error, if any.
    pub fn transition_to(&mut self, next: ProcessState) -> Result<(), SignUpError> {
        let from = self.state.process_state;
        if !from.can_transition_to(next) {
            return Err(SignUpError::InvalidTransition { from, to: next });
        }
        self.state.process_state = next;
        self.notify(StateChange::ProcessState(next))
    }

    /// Same as [`Self::transition_to`], for a state that arrives by name.
    ///
    /// # Errors
    ///
    /// Returns [`SignUpError::UnknownProcessState`] for a name that is not one of the
    /// four states, in addition to the errors of [`Self::transition_to`].
    pub fn set_process_state_by_name(&mut self, name: &str) -> Result<(), SignUpError> {
        let next = ProcessState::try_from_name(name)?;
        self.transition_to(next)
    }

    /// Write `valid` and `errors` together, then notify `valid` followed by `errors`.
    /// Both fields are written before any subscriber runs, so they agree even when a
    /// subscriber fails.
    ///
    /// # Errors
    ///
    /// Returns the subscriber's error, if any. A failure on `valid` skips the `errors`
    /// notification.
    pub fn set_validation(&mut self, errors: ErrorsByField) -> Result<(), SignUpError> {
        let valid = errors.is_empty();
        self.state.valid = valid;
        self.state.errors.clone_from(&errors);
        self.notify(StateChange::Valid(valid))?;
        self.notify(StateChange::Errors(errors))
    }

    /// Re-run [`validate`] on the current field values and write the result.
    ///
    /// # Errors
    ///
    /// Returns the subscriber's error, if any.
    pub fn update_validation_state(&mut self) -> Result<(), SignUpError> {
        let errors = validate(&self.state.fields);
        self.set_validation(errors)
    }

    fn notify(&mut self, change: StateChange) -> Result<(), SignUpError> {
        // % is Display, ? is Debug.
        tracing::debug!(
            message = "state write",
            path = %change.path(),
            change = ?change
        );

        let result = self.subscriber.on_change(&change);

        if self.history_capacity > 0 {
            if self.history.len() == self.history_capacity {
                self.history.pop_front();
            }
            self.history.push_back(change);
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Violation;
    use pretty_assertions::assert_eq;

    #[derive(Debug, Default)]
    struct RecordingSubscriber {
        seen: Vec<(&'static str, StateChange)>,
    }

    impl StateSubscriber for RecordingSubscriber {
        fn on_change(&mut self, change: &StateChange) -> Result<(), SignUpError> {
            self.seen.push((change.path(), change.clone()));
            Ok(())
        }
    }

    #[derive(Debug)]
    struct FailOnErrors;

    impl StateSubscriber for FailOnErrors {
        fn on_change(&mut self, change: &StateChange) -> Result<(), SignUpError> {
            match change {
                StateChange::Errors(_) => Err(SignUpError::MissingElement {
                    selector: "#nowhere".to_string(),
                }),
                _ => Ok(()),
            }
        }
    }

    #[test]
    fn test_each_write_notifies_once_in_order() {
        let mut it = WatchedState::new(RecordingSubscriber::default());

        it.set_field(FieldName::Email, "a@b.com").unwrap();
        it.set_field(FieldName::Email, "a@b.com").unwrap();
        it.transition_to(ProcessState::Sending).unwrap();
        it.set_process_error(Some("boom".to_string())).unwrap();

        assert_eq!(
            it.subscriber().seen,
            vec![
                (
                    "form.fields.email",
                    StateChange::Field {
                        field: FieldName::Email,
                        value: "a@b.com".to_string()
                    }
                ),
                (
                    "form.fields.email",
                    StateChange::Field {
                        field: FieldName::Email,
                        value: "a@b.com".to_string()
                    }
                ),
                (
                    "form.processState",
                    StateChange::ProcessState(ProcessState::Sending)
                ),
                (
                    "form.processError",
                    StateChange::ProcessError(Some("boom".to_string()))
                ),
            ]
        );
        assert_eq!(it.state().fields.email, "a@b.com");
        assert_eq!(it.state().process_error.as_deref(), Some("boom"));
    }

    #[test]
    fn test_subscriber_sees_the_write_already_applied() {
        #[derive(Debug, Default)]
        struct Seen(Vec<bool>);
        impl StateSubscriber for Seen {
            fn on_change(&mut self, change: &StateChange) -> Result<(), SignUpError> {
                if let StateChange::Valid(valid) = change {
                    self.0.push(*valid);
                }
                Ok(())
            }
        }

        let mut it = WatchedState::new(Seen::default());
        it.update_validation_state().unwrap();
        assert_eq!(it.subscriber().0, vec![false]);
        assert!(!it.state().valid);
    }

    #[test]
    fn test_validation_writes_valid_then_errors() {
        let mut it = WatchedState::new(RecordingSubscriber::default());
        it.update_validation_state().unwrap();

        let paths = it
            .subscriber()
            .seen
            .iter()
            .map(|(path, _)| *path)
            .collect::<Vec<_>>();
        assert_eq!(paths, vec!["form.valid", "form.errors"]);
        assert_eq!(it.state().valid, it.state().errors.is_empty());
        assert_eq!(it.state().errors.len(), 3);
    }

    #[test]
    fn test_valid_tracks_errors() {
        let mut it = WatchedState::new(());
        it.set_field(FieldName::Email, "a@b.com").unwrap();
        it.set_field(FieldName::Password, "abcdef").unwrap();
        it.set_field(FieldName::PasswordConfirmation, "abcdef").unwrap();
        it.update_validation_state().unwrap();
        assert!(it.state().valid);
        assert!(it.state().errors.is_empty());

        let mut errors = ErrorsByField::new();
        errors.insert(
            FieldName::Email,
            Violation {
                path: FieldName::Email,
                message: "email must be a valid email".to_string(),
            },
        );
        it.set_validation(errors).unwrap();
        assert!(!it.state().valid);
    }

    #[test]
    fn test_invalid_transition_writes_nothing() {
        let mut it = WatchedState::new(RecordingSubscriber::default());
        let result = it.transition_to(ProcessState::Finished);
        assert!(matches!(
            result,
            Err(SignUpError::InvalidTransition {
                from: ProcessState::Filling,
                to: ProcessState::Finished
            })
        ));
        assert_eq!(it.state().process_state, ProcessState::Filling);
        assert!(it.subscriber().seen.is_empty());
    }

    #[test]
    fn test_unknown_state_name_is_fatal() {
        let mut it = WatchedState::new(());
        let result = it.set_process_state_by_name("archived");
        assert!(matches!(
            result,
            Err(SignUpError::UnknownProcessState { ref name }) if name == "archived"
        ));
        it.set_process_state_by_name("sending").unwrap();
        assert_eq!(it.state().process_state, ProcessState::Sending);
    }

    #[test]
    fn test_subscriber_error_is_returned_to_writer() {
        let mut it = WatchedState::new(FailOnErrors);
        let result = it.update_validation_state();
        assert!(matches!(result, Err(SignUpError::MissingElement { .. })));
        // The write was applied before the subscriber failed.
        assert_eq!(it.state().errors.len(), 3);
    }

    #[test]
    fn test_valid_and_errors_agree_when_subscriber_fails_on_valid() {
        #[derive(Debug)]
        struct FailOnValid;
        impl StateSubscriber for FailOnValid {
            fn on_change(&mut self, change: &StateChange) -> Result<(), SignUpError> {
                match change {
                    StateChange::Valid(_) => Err(SignUpError::MissingElement {
                        selector: "#submit".to_string(),
                    }),
                    _ => Ok(()),
                }
            }
        }

        let mut it = WatchedState::new(FailOnValid);
        let result = it.update_validation_state();

        assert!(matches!(result, Err(SignUpError::MissingElement { .. })));
        assert!(!it.state().valid);
        assert_eq!(it.state().errors.len(), 3);
        assert_eq!(it.state().valid, it.state().errors.is_empty());
        // The errors notification was skipped.
        assert_eq!(
            it.history().map(StateChange::path).collect::<Vec<_>>(),
            vec!["form.valid"]
        );
    }

    #[test]
    fn test_tuple_fans_out_in_order() {
        let mut it = WatchedState::new((
            RecordingSubscriber::default(),
            RecordingSubscriber::default(),
        ));
        it.set_field(FieldName::Name, "a").unwrap();
        assert_eq!(it.subscriber().0.seen.len(), 1);
        assert_eq!(it.subscriber().1.seen.len(), 1);
    }

    #[test]
    fn test_history_is_bounded() {
        let mut it = WatchedState::new(()).with_history_capacity(2);
        it.set_field(FieldName::Name, "a").unwrap();
        it.transition_to(ProcessState::Sending).unwrap();
        it.transition_to(ProcessState::Failed).unwrap();

        assert_eq!(
            it.history().cloned().collect::<Vec<_>>(),
            vec![
                StateChange::ProcessState(ProcessState::Sending),
                StateChange::ProcessState(ProcessState::Failed),
            ]
        );
        assert_eq!(
            it.process_state_history(),
            vec![ProcessState::Sending, ProcessState::Failed]
        );
    }
}
