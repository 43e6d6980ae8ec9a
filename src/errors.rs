use reqwest::{StatusCode, blocking::Response};
use thiserror::Error;

/// Error answer from the remote API.
///
/// Carries the HTTP status and the raw response body, unmodified.
#[derive(Error, Debug)]
#[error("DNSimple API error: {status} - {body}")]
pub struct ApiError {
    status: StatusCode,
    body: String,
}

impl ApiError {
    pub(crate) fn from_response(resp: Response) -> Self {
        let status = resp.status();
        let body = resp
            .text()
            .unwrap_or_else(|e| format!("unable to read response body: {e}"));

        Self { status, body }
    }

    /// The HTTP status the API answered with.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// The raw response body.
    pub fn body(&self) -> &str {
        &self.body
    }
}

#[derive(Error, Debug)]
pub enum ClientError {
    /// A write verb was dispatched without a body. Raised before anything
    /// is sent.
    #[error("refusing to send a {0} request without a body")]
    MissingBody(&'static str),
    /// `change_name_servers` takes a nameserver map or the reset flag,
    /// never both and never neither.
    #[error("name servers and reset are mutually exclusive; supply exactly one")]
    NameServerConflict,
    #[error("expected between {min} and {max} name servers, got {count}")]
    NameServerCount {
        min: usize,
        max: usize,
        count: usize,
    },
    /// Registrant inference found no domains in the account.
    #[error("account has no domains to infer a registrant from")]
    MissingRegistrant,
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
    #[error(transparent)]
    UrlParse(#[from] url::ParseError),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum ClientBuilderError {
    #[error("missing field: {0}")]
    MissingField(String),
    #[error(transparent)]
    UrlParse(#[from] url::ParseError),
}
