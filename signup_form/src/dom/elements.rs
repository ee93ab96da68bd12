// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Document, FieldName, NodeId, Selector, SignUpError};

pub mod element_selectors {
    pub const DATA_CONTAINER: (&str, &str) = ("data-container", "sign-up");
    pub const DATA_FORM: (&str, &str) = ("data-form", "sign-up");
    pub const SUBMIT: (&str, &str) = ("type", "submit");
}

/// Handles to every element the controller touches. Looked up once, when the page is
/// created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignUpElements {
    pub container: NodeId,
    pub form: NodeId,
    /// Looked up inside `form`.
    pub submit: NodeId,
    pub name: NodeId,
    pub email: NodeId,
    pub password: NodeId,
    pub password_confirmation: NodeId,
}

impl SignUpElements {
    /// # Errors
    ///
    /// Returns [`SignUpError::MissingElement`] naming the first selector that did not
    /// match anything.
    pub fn try_lookup(doc: &impl Document) -> Result<Self, SignUpError> {
        let (name, value) = element_selectors::DATA_CONTAINER;
        let container = find(doc, None, &Selector::attribute(name, value))?;

        let (name, value) = element_selectors::DATA_FORM;
        let form = find(doc, None, &Selector::attribute(name, value))?;

        let (name, value) = element_selectors::SUBMIT;
        let submit = find(doc, Some(form), &Selector::attribute(name, value))?;

        let field = |field: FieldName| find(doc, None, &Selector::id(field.element_id()));

        Ok(Self {
            container,
            form,
            submit,
            name: field(FieldName::Name)?,
            email: field(FieldName::Email)?,
            password: field(FieldName::Password)?,
            password_confirmation: field(FieldName::PasswordConfirmation)?,
        })
    }

    #[must_use]
    pub fn field(&self, field: FieldName) -> NodeId {
        match field {
            FieldName::Name => self.name,
            FieldName::Email => self.email,
            FieldName::Password => self.password,
            FieldName::PasswordConfirmation => self.password_confirmation,
        }
    }

    /// Every field element, in form order.
    pub fn fields(&self) -> impl Iterator<Item = (FieldName, NodeId)> + '_ {
        FieldName::all().map(|field| (field, self.field(field)))
    }
}

fn find(
    doc: &impl Document,
    scope: Option<NodeId>,
    selector: &Selector,
) -> Result<NodeId, SignUpError> {
    let found = match scope {
        Some(scope) => doc.query_selector_within(scope, selector),
        None => doc.query_selector(selector),
    };
    found.ok_or_else(|| SignUpError::MissingElement {
        selector: selector.to_string(),
    })
}
