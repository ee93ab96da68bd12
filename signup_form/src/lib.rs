// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # Sign-up form controller
//!
//! This crate binds the four inputs of a sign-up form (name, email, password, password
//! confirmation) to a small piece of observable state, validates that state against a
//! fixed schema, reflects the validation result and the submission lifecycle into a
//! document, and submits the field values with a single HTTP POST.
//!
//! The moving parts:
//!
//! 1. [`validate`] is a pure function from [`FieldValues`] to [`ErrorsByField`]. It keeps
//!    only the first violated rule per field.
//! 2. [`WatchedState`] owns the [`FormState`]. Every write goes through an explicit
//!    setter, which synchronously notifies the [`StateSubscriber`] with a typed
//!    [`StateChange`] before it returns.
//! 3. [`DomDispatcher`] is the subscriber that turns changes into [`Document`] side
//!    effects: submit button enablement, field error decorations
//!    ([`render_errors`]), and the terminal success notice.
//! 4. [`SignUpPage`] is the page controller. It owns all of the above plus a
//!    [`SignUpClient`], and exposes [`SignUpPage::handle_input`] and
//!    [`SignUpPage::submit`].
//!
//! The document is a trait so the controller does not care what it is driving. The
//! [`HeadlessDocument`] is an arena backed, in memory implementation that is used by the
//! tests and by the `signup` binary.
//!
//! ```
//! use signup_form::{FieldName, HeadlessDocument, MockSignUpClient, SignUpConfig,
//!                   SignUpPage};
//!
//! let mut page = SignUpPage::try_new(
//!     HeadlessDocument::sign_up_page(),
//!     MockSignUpClient::succeeding(),
//!     SignUpConfig::default(),
//! )
//! .unwrap();
//!
//! page.handle_input(FieldName::Email, "not an email").unwrap();
//! assert!(!page.state().valid);
//! assert!(page.state().errors.contains_key(&FieldName::Email));
//! ```

// Enforce strict error handling in production library code only. Tests are allowed to use
// .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules (re-exported below to provide clean public API).
pub mod cli;
pub mod common;
pub mod controller;
pub mod dom;
pub mod form;

// Re-export.
pub use cli::*;
pub use common::*;
pub use controller::*;
pub use dom::*;
pub use form::*;
