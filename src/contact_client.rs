use std::fmt::Formatter;
use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde_aux::field_attributes::deserialize_string_from_number;

use crate::domain::{ContactRequest, SubmissionId};
use crate::utility::error_chain_fmt;

/// Shown when the contact endpoint rejects a message without saying why.
pub const GENERIC_FAILURE_MESSAGE: &str =
    "Something went wrong while sending your message. Please try again later.";

const CONTACT_PATH: &str = "/api/contact";

#[derive(Clone)]
pub struct ContactClient {
    http_client: Client,
    base_url: String,
}

#[derive(serde::Deserialize)]
struct Acknowledgement {
    #[serde(deserialize_with = "deserialize_string_from_number")]
    id: String,
}

#[derive(serde::Deserialize)]
struct Rejection {
    detail: Option<String>,
}

#[derive(thiserror::Error)]
pub enum ContactClientError {
    #[error("{}", .detail.as_deref().unwrap_or(GENERIC_FAILURE_MESSAGE))]
    Rejected {
        status: StatusCode,
        detail: Option<String>,
    },
    #[error("{0}")]
    Transport(#[source] reqwest::Error),
    #[error("The contact service accepted the message but did not return a reference id.")]
    UnexpectedAcknowledgement(#[source] reqwest::Error),
}

impl std::fmt::Debug for ContactClientError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ContactClient {
    pub fn new(base_url: String, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http_client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http_client,
            base_url,
        })
    }

    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), CONTACT_PATH)
    }

    #[tracing::instrument(
        name = "Post a contact request",
        skip_all,
        fields(status = tracing::field::Empty)
    )]
    pub async fn send_contact_request(
        &self,
        request: &ContactRequest,
    ) -> Result<SubmissionId, ContactClientError> {
        // `json` serialises the body and sets `Content-Type: application/json`
        let response = self
            .http_client
            .post(self.endpoint())
            .json(request)
            .send()
            .await
            .map_err(ContactClientError::Transport)?;
        let status = response.status();
        tracing::Span::current().record("status", status.as_u16());

        if status.is_success() {
            let acknowledgement = response
                .json::<Acknowledgement>()
                .await
                .map_err(ContactClientError::UnexpectedAcknowledgement)?;
            Ok(acknowledgement.id.into())
        } else {
            // An unreadable error body or a blank `detail` is not worth a
            // second error: fall back to the generic message.
            let detail = response
                .json::<Rejection>()
                .await
                .ok()
                .and_then(|rejection| rejection.detail)
                .filter(|detail| !detail.trim().is_empty());
            Err(ContactClientError::Rejected { status, detail })
        }
    }
}
