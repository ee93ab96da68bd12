// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Document, ProcessState, SignUpElements, SignUpError, StateChange,
            StateSubscriber, render_errors};
use tracing::debug;

/// Turns [`StateChange`]s into [`Document`] side effects.
///
/// | change                | side effect                                      |
/// |-----------------------|--------------------------------------------------|
/// | `processState`        | see [`DomDispatcher::on_process_state`]          |
/// | `valid`               | submit control is disabled when not valid        |
/// | `errors`              | [`render_errors`]                                |
/// | fields, process error | nothing                                          |
#[derive(Debug)]
pub struct DomDispatcher<D> {
    document: D,
    elements: SignUpElements,
    success_notice: String,
}

impl<D: Document> DomDispatcher<D> {
    pub fn new(
        document: D,
        elements: SignUpElements,
        success_notice: impl Into<String>,
    ) -> Self {
        Self {
            document,
            elements,
            success_notice: success_notice.into(),
        }
    }

    pub fn document(&self) -> &D { &self.document }

    pub fn document_mut(&mut self) -> &mut D { &mut self.document }

    pub fn elements(&self) -> &SignUpElements { &self.elements }

    pub fn into_document(self) -> D { self.document }

    /// - `filling`, `failed`: submit control enabled.
    /// - `sending`: submit control disabled.
    /// - `finished`: the container's content is replaced by the success notice.
    ///
    /// # Errors
    ///
    /// Propagates any [`Document`] error.
    pub fn on_process_state(&mut self, state: ProcessState) -> Result<(), SignUpError> {
        match state {
            ProcessState::Filling | ProcessState::Failed => {
                self.document.set_disabled(self.elements.submit, false)
            }
            ProcessState::Sending => self.document.set_disabled(self.elements.submit, true),
            ProcessState::Finished => self
                .document
                .set_text_content(self.elements.container, &self.success_notice),
        }
    }
}

impl<D: Document> StateSubscriber for DomDispatcher<D> {
    fn on_change(&mut self, change: &StateChange) -> Result<(), SignUpError> {
        debug!(message = "dispatch", path = %change.path());
        match change {
            StateChange::ProcessState(state) => self.on_process_state(*state),
            StateChange::Valid(valid) => {
                self.document.set_disabled(self.elements.submit, !valid)
            }
            StateChange::Errors(errors) => {
                render_errors(&mut self.document, &self.elements, errors)
            }
            StateChange::Field { .. } | StateChange::ProcessError(_) => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ErrorsByField, FieldName, FieldValues, HeadlessDocument, validate};
    use pretty_assertions::assert_eq;

    fn dispatcher() -> DomDispatcher<HeadlessDocument> {
        let doc = HeadlessDocument::sign_up_page();
        let elements = SignUpElements::try_lookup(&doc).unwrap();
        DomDispatcher::new(doc, elements, "User Created!")
    }

    #[test]
    fn test_valid_toggles_submit() {
        let mut it = dispatcher();
        let submit = it.elements().submit;

        it.on_change(&StateChange::Valid(false)).unwrap();
        assert!(it.document().is_disabled(submit));
        it.on_change(&StateChange::Valid(true)).unwrap();
        assert!(!it.document().is_disabled(submit));
    }

    #[test]
    fn test_process_states() {
        let mut it = dispatcher();
        let submit = it.elements().submit;
        let container = it.elements().container;

        it.on_change(&StateChange::ProcessState(ProcessState::Sending))
            .unwrap();
        assert!(it.document().is_disabled(submit));

        it.on_change(&StateChange::ProcessState(ProcessState::Failed))
            .unwrap();
        assert!(!it.document().is_disabled(submit));

        it.on_change(&StateChange::ProcessState(ProcessState::Sending))
            .unwrap();
        it.on_change(&StateChange::ProcessState(ProcessState::Finished))
            .unwrap();
        assert_eq!(it.document().text_content(container), "User Created!");
        // Finished does not touch the (now detached) submit control.
        assert!(it.document().is_disabled(submit));
    }

    #[test]
    fn test_errors_render_and_fields_do_nothing() {
        let mut it = dispatcher();
        let before = it.document().to_html();

        it.on_change(&StateChange::Field {
            field: FieldName::Email,
            value: "x".to_string(),
        })
        .unwrap();
        it.on_change(&StateChange::ProcessError(Some("boom".to_string())))
            .unwrap();
        assert_eq!(it.document().to_html(), before);

        let errors = validate(&FieldValues::default());
        it.on_change(&StateChange::Errors(errors)).unwrap();
        let email = it.elements().email;
        assert!(it.document().has_class(email, "is-invalid"));

        it.on_change(&StateChange::Errors(ErrorsByField::new()))
            .unwrap();
        assert_eq!(it.into_document().to_html(), before);
    }
}
