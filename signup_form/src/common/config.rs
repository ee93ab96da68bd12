// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{NETWORK_ERROR_MESSAGE, SUCCESS_NOTICE};

pub mod config_constants {
    pub const DEFAULT_ENDPOINT: &str =
        "https://web-js-frontend-architecture-forms-2164340.evaluator5-2.hexlet.io/users";
    pub const DEFAULT_USER_AGENT: &str = "signup_form/0.1";
}

/// Everything about a sign-up page that is not part of the form state itself.
///
/// The [`Default`] impl carries the fixed endpoint and the fixed user facing messages.
/// Use the `with_*` methods to override individual settings, eg: to point the page at a
/// local server in tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpConfig {
    /// Absolute URL that receives the POST.
    pub endpoint: String,
    /// Falls back to [`config_constants::DEFAULT_USER_AGENT`] when [None].
    pub user_agent: Option<String>,
    pub network_error_message: String,
    pub success_notice: String,
}

impl Default for SignUpConfig {
    fn default() -> Self {
        Self {
            endpoint: config_constants::DEFAULT_ENDPOINT.to_string(),
            user_agent: None,
            network_error_message: NETWORK_ERROR_MESSAGE.to_string(),
            success_notice: SUCCESS_NOTICE.to_string(),
        }
    }
}

impl SignUpConfig {
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    #[must_use]
    pub fn get_user_agent(&self) -> &str {
        self.user_agent
            .as_deref()
            .unwrap_or(config_constants::DEFAULT_USER_AGENT)
    }
}
