// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{FieldValues, SignUpConfig, SignUpError, SubmitError};
use async_trait::async_trait;
use tracing::{debug, warn};

/// Sends the field values to the sign-up endpoint. One call is one POST.
#[async_trait]
pub trait SignUpClient: Send + Sync {
    /// # Errors
    ///
    /// Any transport failure, or any response status outside of `2xx`.
    async fn post_fields(&self, fields: &FieldValues) -> Result<(), SubmitError>;
}

/// POSTs the fields as a JSON object to [`SignUpConfig::endpoint`]. There is no request
/// timeout and no retry.
#[derive(Debug, Clone)]
pub struct ReqwestSignUpClient {
    client: reqwest::Client,
    endpoint: String,
}

impl ReqwestSignUpClient {
    /// # Errors
    ///
    /// Returns [`SignUpError::HttpClientSetup`] if the TLS backend can't be initialized.
    pub fn try_new(config: &SignUpConfig) -> Result<Self, SignUpError> {
        let client = reqwest::Client::builder()
            .user_agent(config.get_user_agent())
            .build()
            .map_err(SignUpError::HttpClientSetup)?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str { &self.endpoint }
}

#[async_trait]
impl SignUpClient for ReqwestSignUpClient {
    async fn post_fields(&self, fields: &FieldValues) -> Result<(), SubmitError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(fields)
            .send()
            .await
            .map_err(SubmitError::Network)?;

        let status = response.status();
        if status.is_success() {
            debug!(message = "sign-up accepted", endpoint = %self.endpoint, %status);
            Ok(())
        } else {
            warn!(message = "sign-up rejected", endpoint = %self.endpoint, %status);
            Err(SubmitError::Status {
                status: status.as_u16(),
            })
        }
    }
}
