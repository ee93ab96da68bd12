// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{NodeId, ProcessState};

/// Errors that the page controller surfaces. Validation failures are never reported
/// here, those are data (see [`crate::ErrorsByField`]).
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum SignUpError {
    #[error("Unknown state: {name}")]
    #[diagnostic(
        code(signup_form::unknown_process_state),
        help("Valid states are: filling, sending, finished, failed")
    )]
    UnknownProcessState { name: String },

    #[error("Can't move the process state from '{from}' to '{to}'")]
    #[diagnostic(
        code(signup_form::invalid_transition),
        help("filling -> sending -> (finished | failed), and failed -> sending")
    )]
    InvalidTransition { from: ProcessState, to: ProcessState },

    #[error("🔍 Could not find element matching '{selector}'")]
    #[diagnostic(code(signup_form::missing_element))]
    MissingElement { selector: String },

    #[error("Node {node} does not exist in this document")]
    #[diagnostic(code(signup_form::stale_node))]
    StaleNode { node: NodeId },

    #[error("Node {node} has no parent to insert next to")]
    #[diagnostic(code(signup_form::detached_node))]
    DetachedNode { node: NodeId },

    #[error("Could not build the HTTP client")]
    #[diagnostic(code(signup_form::http_client_setup))]
    HttpClientSetup(#[source] reqwest::Error),

    #[error("📨 Sign-up submission failed")]
    #[diagnostic(code(signup_form::submit))]
    Submit {
        #[source]
        #[diagnostic_source]
        source: SubmitError,
    },
}

/// Why the POST did not succeed. The page collapses all of these into the one user
/// facing network message, but keeps the original around for the caller.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum SubmitError {
    #[error("Network request failed: {0}")]
    #[diagnostic(code(signup_form::submit::network))]
    Network(#[source] reqwest::Error),

    #[error("Server responded with status {status}")]
    #[diagnostic(code(signup_form::submit::status))]
    Status { status: u16 },

    #[error("{message}")]
    #[diagnostic(code(signup_form::submit::client))]
    Client { message: String },
}
