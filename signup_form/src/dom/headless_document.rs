// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! [`HeadlessDocument`] is an in memory [`Document`]. Nodes live in an arena ([`Vec`])
//! and refer to each other by [`NodeId`], which is the index into that arena.
//!
//! Removing a node only detaches it from its parent; the node stays in the arena, so a
//! handle to it keeps working (eg: asking whether a button that was wiped out of the
//! page is still disabled). Only nodes reachable from [`HeadlessDocument::root`] take
//! part in selector queries and in [`HeadlessDocument::to_html`].

use crate::{Document, FieldName, NodeId, Selector, SignUpError};

pub mod headless_document_constants {
    pub const ROOT_TAG: &str = "body";
    pub const VOID_TAGS: &[&str] = &["input", "br", "hr", "img", "meta", "link"];
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Payload {
    Element {
        tag: String,
        /// Insertion order is kept, so [`HeadlessDocument::to_html`] is deterministic.
        attributes: Vec<(String, String)>,
        classes: Vec<String>,
        disabled: bool,
    },
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Node {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    payload: Payload,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlessDocument {
    nodes: Vec<Node>,
}

impl Default for HeadlessDocument {
    fn default() -> Self { Self::new() }
}

impl HeadlessDocument {
    /// An empty document with only a `<body>` root.
    #[must_use]
    pub fn new() -> Self {
        let mut it = Self { nodes: vec![] };
        it.push(None, Self::element_payload(headless_document_constants::ROOT_TAG));
        it
    }

    /// The sign-up page markup:
    ///
    /// ```html
    /// <div data-container="sign-up">
    ///   <form data-form="sign-up">
    ///     <div class="form-group">
    ///       <label for="sign-up-name">Name</label>
    ///       <input id="sign-up-name" type="text" name="name" class="form-control">
    ///     </div>
    ///     <!-- same for email, password and passwordConfirmation -->
    ///     <input type="submit" value="Submit" class="btn btn-primary">
    ///   </form>
    /// </div>
    /// ```
    #[must_use]
    pub fn sign_up_page() -> Self {
        let mut it = Self::new();
        let root = it.root();

        let container = it.push_element(root, "div", &[("data-container", "sign-up")], &[]);
        let form = it.push_element(container, "form", &[("data-form", "sign-up")], &[]);

        for field in FieldName::all() {
            let group = it.push_element(form, "div", &[], &["form-group"]);
            let label = it.push_element(group, "label", &[("for", field.element_id())], &[]);
            it.push(Some(label), Payload::Text(field.label().to_string()));
            let input_type = match field {
                FieldName::Name => "text",
                FieldName::Email => "email",
                FieldName::Password | FieldName::PasswordConfirmation => "password",
            };
            it.push_element(
                group,
                "input",
                &[
                    ("id", field.element_id()),
                    ("type", input_type),
                    ("name", field.as_ref()),
                ],
                &["form-control"],
            );
        }

        it.push_element(
            form,
            "input",
            &[("type", "submit"), ("value", "Submit")],
            &["btn", "btn-primary"],
        );

        it
    }

    #[must_use]
    pub fn root(&self) -> NodeId { NodeId(0) }

    #[must_use]
    pub fn contains(&self, node: NodeId) -> bool { node.0 < self.nodes.len() }

    #[must_use]
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(node.0).and_then(|it| it.parent)
    }

    #[must_use]
    pub fn tag_name(&self, node: NodeId) -> Option<&str> {
        match &self.nodes.get(node.0)?.payload {
            Payload::Element { tag, .. } => Some(tag.as_str()),
            Payload::Text(_) => None,
        }
    }

    #[must_use]
    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        match &self.nodes.get(node.0)?.payload {
            Payload::Element { attributes, .. } => attributes
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.as_str()),
            Payload::Text(_) => None,
        }
    }

    /// Whether `node` is reachable from [`Self::root`].
    #[must_use]
    pub fn is_attached(&self, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(it) = current {
            if it == self.root() {
                return true;
            }
            current = self.parent(it);
        }
        false
    }

    /// Append a new element under `parent` and return it.
    ///
    /// # Errors
    ///
    /// Fails if `parent` is unknown.
    pub fn append_element(
        &mut self,
        parent: NodeId,
        tag: &str,
    ) -> Result<NodeId, SignUpError> {
        self.try_node(parent)?;
        Ok(self.push(Some(parent), Self::element_payload(tag)))
    }

    /// Append a text node under `parent`.
    ///
    /// # Errors
    ///
    /// Fails if `parent` is unknown.
    pub fn append_text(&mut self, parent: NodeId, text: &str) -> Result<(), SignUpError> {
        self.try_node(parent)?;
        self.push(Some(parent), Payload::Text(text.to_string()));
        Ok(())
    }

    /// Set (or overwrite) an attribute. `class` and `disabled` are routed to the class
    /// list and the disabled flag, so they round trip through [`Self::to_html`].
    ///
    /// # Errors
    ///
    /// Fails if `node` is unknown.
    pub fn set_attribute(
        &mut self,
        node: NodeId,
        name: &str,
        value: &str,
    ) -> Result<(), SignUpError> {
        match name {
            "class" => {
                for class in value.split_whitespace() {
                    self.add_class(node, class)?;
                }
                Ok(())
            }
            "disabled" => self.set_disabled(node, true),
            _ => {
                if let Payload::Element { attributes, .. } =
                    &mut self.try_node_mut(node)?.payload
                {
                    match attributes.iter_mut().find(|(key, _)| key == name) {
                        Some((_, it)) => *it = value.to_string(),
                        None => attributes.push((name.to_string(), value.to_string())),
                    }
                }
                Ok(())
            }
        }
    }

    /// Serialize everything under the root, eg: `<body><div ...>...</div></body>`.
    #[must_use]
    pub fn to_html(&self) -> String { self.node_to_html(self.root()) }

    #[must_use]
    pub fn node_to_html(&self, node: NodeId) -> String {
        let mut acc = String::new();
        self.write_html(node, &mut acc);
        acc
    }

    fn write_html(&self, node: NodeId, acc: &mut String) {
        let Some(it) = self.nodes.get(node.0) else {
            return;
        };
        match &it.payload {
            Payload::Text(text) => acc.push_str(&escape_html(text)),
            Payload::Element {
                tag,
                attributes,
                classes,
                disabled,
            } => {
                acc.push('<');
                acc.push_str(tag);
                for (key, value) in attributes {
                    acc.push_str(&format!(" {key}=\"{}\"", escape_html(value)));
                }
                if !classes.is_empty() {
                    acc.push_str(&format!(" class=\"{}\"", escape_html(&classes.join(" "))));
                }
                if *disabled {
                    acc.push_str(" disabled");
                }
                acc.push('>');

                if headless_document_constants::VOID_TAGS.contains(&tag.as_str()) {
                    return;
                }

                for child in &it.children {
                    self.write_html(*child, acc);
                }
                acc.push_str(&format!("</{tag}>"));
            }
        }
    }

    /// Descendants of `scope` (not including `scope`) in document order.
    fn descendants(&self, scope: NodeId) -> Vec<NodeId> {
        let mut collected = vec![];
        let Some(it) = self.nodes.get(scope.0) else {
            return collected;
        };
        let mut stack = it.children.iter().rev().copied().collect::<Vec<_>>();
        while let Some(node_id) = stack.pop() {
            collected.push(node_id);
            if let Some(node) = self.nodes.get(node_id.0) {
                stack.extend(node.children.iter().rev().copied());
            }
        }
        collected
    }

    fn matches(&self, node: NodeId, selector: &Selector) -> bool {
        match selector {
            Selector::Id(id) => self.attribute(node, "id") == Some(id.as_str()),
            Selector::Attribute { name, value } => {
                self.attribute(node, name) == Some(value.as_str())
            }
        }
    }

    fn element_payload(tag: &str) -> Payload {
        Payload::Element {
            tag: tag.to_string(),
            attributes: vec![],
            classes: vec![],
            disabled: false,
        }
    }

    /// `parent` must already be in the arena.
    fn push(&mut self, parent: Option<NodeId>, payload: Payload) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            parent,
            children: vec![],
            payload,
        });
        if let Some(parent_node) = parent.and_then(|it| self.nodes.get_mut(it.0)) {
            parent_node.children.push(id);
        }
        id
    }

    fn push_element(
        &mut self,
        parent: NodeId,
        tag: &str,
        attributes: &[(&str, &str)],
        classes: &[&str],
    ) -> NodeId {
        self.push(
            Some(parent),
            Payload::Element {
                tag: tag.to_string(),
                attributes: attributes
                    .iter()
                    .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
                    .collect(),
                classes: classes.iter().map(|it| (*it).to_string()).collect(),
                disabled: false,
            },
        )
    }

    fn try_node(&self, node: NodeId) -> Result<&Node, SignUpError> {
        self.nodes.get(node.0).ok_or(SignUpError::StaleNode { node })
    }

    fn try_node_mut(&mut self, node: NodeId) -> Result<&mut Node, SignUpError> {
        self.nodes
            .get_mut(node.0)
            .ok_or(SignUpError::StaleNode { node })
    }

    fn detach(&mut self, node: NodeId) -> Result<(), SignUpError> {
        let parent = self.try_node_mut(node)?.parent.take();
        if let Some(parent_node) = parent.and_then(|it| self.nodes.get_mut(it.0)) {
            parent_node.children.retain(|child| *child != node);
        }
        Ok(())
    }
}

impl Document for HeadlessDocument {
    fn query_selector(&self, selector: &Selector) -> Option<NodeId> {
        self.query_selector_within(self.root(), selector)
    }

    fn query_selector_within(
        &self,
        scope: NodeId,
        selector: &Selector,
    ) -> Option<NodeId> {
        self.descendants(scope)
            .into_iter()
            .find(|node| self.matches(*node, selector))
    }

    fn next_element_sibling(&self, node: NodeId) -> Option<NodeId> {
        let parent = self.nodes.get(self.parent(node)?.0)?;
        let position = parent.children.iter().position(|it| *it == node)?;
        parent.children[position + 1..]
            .iter()
            .copied()
            .find(|it| self.tag_name(*it).is_some())
    }

    fn create_element(&mut self, tag: &str) -> NodeId {
        self.push(None, Self::element_payload(tag))
    }

    fn insert_after(&mut self, anchor: NodeId, node: NodeId) -> Result<(), SignUpError> {
        let parent = self
            .try_node(anchor)?
            .parent
            .ok_or(SignUpError::DetachedNode { node: anchor })?;
        self.detach(node)?;

        let siblings = &mut self.try_node_mut(parent)?.children;
        let position = siblings
            .iter()
            .position(|it| *it == anchor)
            .ok_or(SignUpError::DetachedNode { node: anchor })?;
        siblings.insert(position + 1, node);

        self.try_node_mut(node)?.parent = Some(parent);
        Ok(())
    }

    fn remove(&mut self, node: NodeId) -> Result<(), SignUpError> { self.detach(node) }

    fn add_class(&mut self, node: NodeId, class: &str) -> Result<(), SignUpError> {
        if let Payload::Element { classes, .. } = &mut self.try_node_mut(node)?.payload
            && !classes.iter().any(|it| it == class)
        {
            classes.push(class.to_string());
        }
        Ok(())
    }

    fn remove_class(&mut self, node: NodeId, class: &str) -> Result<(), SignUpError> {
        if let Payload::Element { classes, .. } = &mut self.try_node_mut(node)?.payload {
            classes.retain(|it| it != class);
        }
        Ok(())
    }

    fn has_class(&self, node: NodeId, class: &str) -> bool {
        matches!(
            self.nodes.get(node.0).map(|it| &it.payload),
            Some(Payload::Element { classes, .. }) if classes.iter().any(|it| it == class)
        )
    }

    fn set_disabled(&mut self, node: NodeId, disabled: bool) -> Result<(), SignUpError> {
        if let Payload::Element { disabled: it, .. } = &mut self.try_node_mut(node)?.payload
        {
            *it = disabled;
        }
        Ok(())
    }

    fn is_disabled(&self, node: NodeId) -> bool {
        matches!(
            self.nodes.get(node.0).map(|it| &it.payload),
            Some(Payload::Element { disabled: true, .. })
        )
    }

    fn set_text_content(&mut self, node: NodeId, text: &str) -> Result<(), SignUpError> {
        let children = std::mem::take(&mut self.try_node_mut(node)?.children);
        for child in children {
            self.try_node_mut(child)?.parent = None;
        }
        if !text.is_empty() {
            self.push(Some(node), Payload::Text(text.to_string()));
        }
        Ok(())
    }

    fn text_content(&self, node: NodeId) -> String {
        let mut acc = String::new();
        if let Some(Payload::Text(text)) = self.nodes.get(node.0).map(|it| &it.payload) {
            acc.push_str(text);
        }
        for it in self.descendants(node) {
            if let Some(Payload::Text(text)) = self.nodes.get(it.0).map(|it| &it.payload) {
                acc.push_str(text);
            }
        }
        acc
    }
}

fn escape_html(text: &str) -> String {
    let mut acc = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => acc.push_str("&amp;"),
            '<' => acc.push_str("&lt;"),
            '>' => acc.push_str("&gt;"),
            '"' => acc.push_str("&quot;"),
            _ => acc.push(ch),
        }
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sign_up_page_has_every_required_element() {
        let doc = HeadlessDocument::sign_up_page();
        let form = doc
            .query_selector(&Selector::attribute("data-form", "sign-up"))
            .unwrap();

        assert!(
            doc.query_selector(&Selector::attribute("data-container", "sign-up"))
                .is_some()
        );
        for field in FieldName::all() {
            let input = doc.query_selector(&Selector::id(field.element_id())).unwrap();
            assert_eq!(doc.tag_name(input), Some("input"));
            assert!(doc.has_class(input, "form-control"));
        }

        let submit = doc
            .query_selector_within(form, &Selector::attribute("type", "submit"))
            .unwrap();
        assert!(!doc.is_disabled(submit));
    }

    #[test]
    fn test_query_selector_is_document_order() {
        let mut doc = HeadlessDocument::new();
        let root = doc.root();
        let first = doc.append_element(root, "div").unwrap();
        let nested = doc.append_element(first, "span").unwrap();
        let second = doc.append_element(root, "span").unwrap();
        doc.set_attribute(nested, "data-x", "1").unwrap();
        doc.set_attribute(second, "data-x", "1").unwrap();

        assert_eq!(
            doc.query_selector(&Selector::attribute("data-x", "1")),
            Some(nested)
        );
        assert_eq!(
            doc.query_selector_within(first, &Selector::attribute("data-x", "1")),
            Some(nested)
        );
        assert_eq!(doc.query_selector(&Selector::id("nope")), None);
    }

    #[test]
    fn test_insert_after_and_remove() {
        let mut doc = HeadlessDocument::new();
        let root = doc.root();
        let a = doc.append_element(root, "p").unwrap();
        let c = doc.append_element(root, "p").unwrap();
        let b = doc.create_element("div");
        assert!(!doc.is_attached(b));

        doc.insert_after(a, b).unwrap();
        assert_eq!(doc.next_element_sibling(a), Some(b));
        assert_eq!(doc.next_element_sibling(b), Some(c));
        assert_eq!(doc.to_html(), "<body><p></p><div></div><p></p></body>");

        doc.remove(b).unwrap();
        assert_eq!(doc.next_element_sibling(a), Some(c));
        assert!(!doc.is_attached(b));
        // Removing twice is a no-op.
        doc.remove(b).unwrap();
    }

    #[test]
    fn test_next_element_sibling_skips_text() {
        let mut doc = HeadlessDocument::new();
        let root = doc.root();
        let a = doc.append_element(root, "p").unwrap();
        doc.append_text(root, "between").unwrap();
        let b = doc.append_element(root, "p").unwrap();
        assert_eq!(doc.next_element_sibling(a), Some(b));
        assert_eq!(doc.next_element_sibling(b), None);
    }

    #[test]
    fn test_insert_after_detached_anchor_fails() {
        let mut doc = HeadlessDocument::new();
        let anchor = doc.create_element("p");
        let node = doc.create_element("div");
        let result = doc.insert_after(anchor, node);
        assert!(matches!(result, Err(SignUpError::DetachedNode { node }) if node == anchor));
    }

    #[test]
    fn test_unknown_node_is_stale() {
        let mut doc = HeadlessDocument::new();
        let result = doc.add_class(NodeId(99), "x");
        assert!(matches!(
            result,
            Err(SignUpError::StaleNode { node: NodeId(99) })
        ));
        assert!(!doc.has_class(NodeId(99), "x"));
        assert!(!doc.is_disabled(NodeId(99)));
    }

    #[test]
    fn test_classes_and_disabled_render() {
        let mut doc = HeadlessDocument::new();
        let root = doc.root();
        let input = doc.append_element(root, "input").unwrap();
        doc.set_attribute(input, "id", "x").unwrap();
        doc.set_attribute(input, "class", "a b").unwrap();
        doc.add_class(input, "a").unwrap();
        doc.set_disabled(input, true).unwrap();
        assert_eq!(
            doc.to_html(),
            "<body><input id=\"x\" class=\"a b\" disabled></body>"
        );

        doc.remove_class(input, "a").unwrap();
        doc.set_disabled(input, false).unwrap();
        assert_eq!(doc.to_html(), "<body><input id=\"x\" class=\"b\"></body>");
    }

    #[test]
    fn test_set_text_content_replaces_children() {
        let mut doc = HeadlessDocument::sign_up_page();
        let container = doc
            .query_selector(&Selector::attribute("data-container", "sign-up"))
            .unwrap();
        let email = doc.query_selector(&Selector::id("sign-up-email")).unwrap();

        doc.set_text_content(container, "<done> & dusted").unwrap();
        assert_eq!(doc.text_content(container), "<done> & dusted");
        assert_eq!(
            doc.to_html(),
            "<body><div data-container=\"sign-up\">&lt;done&gt; &amp; dusted</div></body>"
        );
        assert!(!doc.is_attached(email));
        assert_eq!(doc.query_selector(&Selector::id("sign-up-email")), None);
    }
}
