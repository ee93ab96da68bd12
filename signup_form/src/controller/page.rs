// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! [`SignUpPage`] wires a [`Document`], a [`WatchedState`] and a [`SignUpClient`]
//! together. It is the Rust counterpart of the input and submit event handlers of a
//! browser page: call [`SignUpPage::handle_input`] for every input event and
//! [`SignUpPage::submit`] for the submit event.
//!
//! All methods take `&mut self`, so an input can't be handled while a submit is in
//! flight. The POST is the only `await` point.

use crate::{Document, DomDispatcher, FieldName, FormState, ProcessState, SignUpClient,
            SignUpConfig, SignUpElements, SignUpError, StateChange, WatchedState};
use tracing::{info, warn};

#[derive(Debug)]
pub struct SignUpPage<D, C> {
    watched: WatchedState<DomDispatcher<D>>,
    client: C,
    config: SignUpConfig,
}

impl<D: Document, C: SignUpClient> SignUpPage<D, C> {
    /// Look up the page elements in `document` and start in the `filling` state.
    ///
    /// # Errors
    ///
    /// Returns [`SignUpError::MissingElement`] if the document doesn't have the sign-up
    /// markup.
    pub fn try_new(
        document: D,
        client: C,
        config: SignUpConfig,
    ) -> Result<Self, SignUpError> {
        let elements = SignUpElements::try_lookup(&document)?;
        let dispatcher =
            DomDispatcher::new(document, elements, config.success_notice.clone());
        Ok(Self {
            watched: WatchedState::new(dispatcher),
            client,
            config,
        })
    }

    /// An input event on `field`: store the value, then re-validate every field.
    ///
    /// # Errors
    ///
    /// Propagates document errors raised while updating the page.
    pub fn handle_input(
        &mut self,
        field: FieldName,
        value: impl Into<String>,
    ) -> Result<(), SignUpError> {
        self.watched.set_field(field, value)?;
        self.watched.update_validation_state()
    }

    /// The submit event. Moves to `sending`, POSTs the current field values, then moves
    /// to `finished` on success.
    ///
    /// On failure the process error is set to the configured network message and the
    /// state moves to `failed` before the error is handed back. A later call retries.
    /// Document errors raised while reflecting the failure are logged, and the POST
    /// error is still the one returned.
    ///
    /// # Errors
    ///
    /// - [`SignUpError::Submit`] carrying the original [`crate::SubmitError`] when the
    ///   POST fails.
    /// - [`SignUpError::InvalidTransition`] if a submission is not allowed from the
    ///   current state (eg: after it has already `finished`).
    #[tracing::instrument(skip(self), fields(endpoint = %self.config.endpoint))]
    pub async fn submit(&mut self) -> Result<(), SignUpError> {
        self.watched.transition_to(ProcessState::Sending)?;

        let fields = self.watched.state().fields.clone();
        match self.client.post_fields(&fields).await {
            Ok(()) => {
                info!(message = "sign-up submitted");
                self.watched.transition_to(ProcessState::Finished)
            }
            Err(source) => {
                warn!(message = "sign-up failed", error = %source);
                let network_error = Some(self.config.network_error_message.clone());
                if let Err(error) = self.watched.set_process_error(network_error) {
                    warn!(message = "could not show the process error", %error);
                }
                if let Err(error) = self.watched.transition_to(ProcessState::Failed) {
                    warn!(message = "could not show the failed state", %error);
                }
                Err(SignUpError::Submit { source })
            }
        }
    }

    pub fn state(&self) -> &FormState { self.watched.state() }

    pub fn document(&self) -> &D { self.watched.subscriber().document() }

    pub fn elements(&self) -> &SignUpElements { self.watched.subscriber().elements() }

    pub fn config(&self) -> &SignUpConfig { &self.config }

    pub fn client(&self) -> &C { &self.client }

    /// Most recent state writes, oldest first.
    pub fn history(&self) -> impl Iterator<Item = &StateChange> { self.watched.history() }

    pub fn process_state_history(&self) -> Vec<ProcessState> {
        self.watched.process_state_history()
    }

    pub fn into_document(self) -> D { self.watched.into_subscriber().into_document() }
}
