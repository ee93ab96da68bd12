// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The [`Document`] trait is everything the controller needs from a DOM. Nodes are
//! addressed by [`NodeId`] handles, which are cheap to copy and do not own anything.

use crate::SignUpError;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Handle to an element in a [`Document`]. Only meaningful for the document that handed
/// it out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub usize);

impl Display for NodeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult { write!(f, "#{}", self.0) }
}

/// The two selector shapes the sign-up page needs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selector {
    /// `#id`
    Id(String),
    /// `[name="value"]`
    Attribute { name: String, value: String },
}

impl Selector {
    pub fn id(id: impl Into<String>) -> Self { Selector::Id(id.into()) }

    pub fn attribute(name: impl Into<String>, value: impl Into<String>) -> Self {
        Selector::Attribute {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl Display for Selector {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Selector::Id(id) => write!(f, "#{id}"),
            Selector::Attribute { name, value } => write!(f, "[{name}=\"{value}\"]"),
        }
    }
}

/// A mutable element tree.
///
/// Lookups return [`Option`], since "not found" is an expected answer. Mutators return
/// [`Result`], since handing in a node that this document does not know about is a bug
/// in the caller.
pub trait Document {
    /// First element in document order that matches `selector`.
    fn query_selector(&self, selector: &Selector) -> Option<NodeId>;

    /// First descendant of `scope` in document order that matches `selector`.
    fn query_selector_within(&self, scope: NodeId, selector: &Selector)
    -> Option<NodeId>;

    /// The element that immediately follows `node` under the same parent.
    fn next_element_sibling(&self, node: NodeId) -> Option<NodeId>;

    /// A new element that is not attached anywhere yet.
    fn create_element(&mut self, tag: &str) -> NodeId;

    /// # Errors
    ///
    /// Fails if either node is unknown, or if `anchor` has no parent.
    fn insert_after(&mut self, anchor: NodeId, node: NodeId) -> Result<(), SignUpError>;

    /// Detach `node` from its parent. Removing a detached node is a no-op.
    ///
    /// # Errors
    ///
    /// Fails if `node` is unknown.
    fn remove(&mut self, node: NodeId) -> Result<(), SignUpError>;

    /// # Errors
    ///
    /// Fails if `node` is unknown.
    fn add_class(&mut self, node: NodeId, class: &str) -> Result<(), SignUpError>;

    /// # Errors
    ///
    /// Fails if `node` is unknown.
    fn remove_class(&mut self, node: NodeId, class: &str) -> Result<(), SignUpError>;

    fn has_class(&self, node: NodeId, class: &str) -> bool;

    /// # Errors
    ///
    /// Fails if `node` is unknown.
    fn set_disabled(&mut self, node: NodeId, disabled: bool) -> Result<(), SignUpError>;

    fn is_disabled(&self, node: NodeId) -> bool;

    /// Replace all children of `node` with a single text node.
    ///
    /// # Errors
    ///
    /// Fails if `node` is unknown.
    fn set_text_content(&mut self, node: NodeId, text: &str) -> Result<(), SignUpError>;

    /// Concatenated text of `node` and all its descendants.
    fn text_content(&self, node: NodeId) -> String;
}
