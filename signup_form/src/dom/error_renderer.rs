// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Document, ErrorsByField, SignUpElements, SignUpError};

pub mod error_renderer_constants {
    /// Added to a field element that has a violation.
    pub const INVALID_CLASS: &str = "is-invalid";
    /// The class of the message element injected right after the field element.
    pub const FEEDBACK_CLASS: &str = "invalid-feedback";
    pub const FEEDBACK_TAG: &str = "div";
}

/// Make the field decorations match `errors`.
///
/// For every field element, any decoration left by a previous call is removed first
/// (the `is-invalid` class, and the feedback element right after the field). Then, if
/// the field has a violation, a fresh feedback element carrying the message is inserted
/// after the field and the field gets `is-invalid`.
///
/// Only a sibling with the feedback class is treated as a decoration, so unrelated
/// markup that happens to follow a field is left alone. Calling this twice with the same
/// `errors` leaves the document exactly as one call would.
///
/// # Errors
///
/// Propagates any [`Document`] error, eg: when a field element was detached.
pub fn render_errors(
    doc: &mut impl Document,
    elements: &SignUpElements,
    errors: &ErrorsByField,
) -> Result<(), SignUpError> {
    use error_renderer_constants::{FEEDBACK_CLASS, FEEDBACK_TAG, INVALID_CLASS};

    for (field, element) in elements.fields() {
        if let Some(previous) = doc.next_element_sibling(element)
            && doc.has_class(previous, FEEDBACK_CLASS)
        {
            doc.remove(previous)?;
        }
        doc.remove_class(element, INVALID_CLASS)?;

        let Some(violation) = errors.get(&field) else {
            continue;
        };

        let feedback = doc.create_element(FEEDBACK_TAG);
        doc.add_class(feedback, FEEDBACK_CLASS)?;
        doc.set_text_content(feedback, &violation.message)?;
        doc.add_class(element, INVALID_CLASS)?;
        doc.insert_after(element, feedback)?;
    }

    Ok(())
}
