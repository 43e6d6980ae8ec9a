use reqwest::{StatusCode, header};
use serde_json::Value as JsonValue;
use strum_macros::IntoStaticStr;
use tracing::debug;
use url::Url;

use crate::{ApiError, ClientBuilderError, ClientError, Payload};

mod certificates;
mod contacts;
mod domains;
mod memberships;
mod nameservers;
mod records;
mod services;
mod templates;
#[cfg(test)]
mod tests;

pub use nameservers::VanityNameServers;

const DEFAULT_ENDPOINT: &str = "https://api.dnsimple.com/v1/";
const USER_AGENT: &str = "zonelet/0.1.0";

/// The closed set of HTTP verbs the API uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr)]
#[strum(serialize_all = "UPPERCASE")]
pub(crate) enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

impl Verb {
    /// Gets the string representation of the verb.
    pub(crate) fn as_str(&self) -> &'static str {
        self.into()
    }
}

/// Builder for a [Client] that handles default values.
pub struct ClientBuilder {
    endpoint: Option<Url>,
    username: Option<String>,
    password: Option<String>,
}

impl ClientBuilder {
    fn new() -> Self {
        Self {
            endpoint: None,
            username: None,
            password: None,
        }
    }

    /// Sets the API endpoint to the one given.
    ///
    /// The endpoint should have a trailing slash, as per [Url]'s semantics.
    pub fn endpoint(mut self, endpoint: &Url) -> Self {
        self.endpoint = Some(endpoint.clone());
        self
    }

    /// In the case that `endpoint` is the Some variant, sets the API endpoint to it.
    ///
    /// The endpoint should have a trailing slash, as per [Url]'s semantics.
    pub fn endpoint_if_some(mut self, endpoint: Option<&Url>) -> Self {
        if let Some(endpoint) = endpoint {
            self.endpoint = Some(endpoint.clone());
        }
        self
    }

    /// Sets the account username to the one given.
    pub fn username(mut self, username: &str) -> Self {
        self.username = Some(username.to_string());
        self
    }

    /// Sets the account password to the one given.
    pub fn password(mut self, password: &str) -> Self {
        self.password = Some(password.to_string());
        self
    }

    /// Builds a [Client] from the builder.
    ///
    /// In the case that no API endpoint is set, the default endpoint of
    /// `https://api.dnsimple.com/v1/` is used.
    ///
    /// # Errors
    /// - `MissingField` if a required field isn't added to the builder.
    /// - `UrlParse` if the default API endpoint fails to parse. This shouldn't happen.
    pub fn build(self) -> Result<Client, ClientBuilderError> {
        let endpoint = match self.endpoint {
            Some(endpoint) => endpoint,
            None => DEFAULT_ENDPOINT.parse()?,
        };
        let username = self
            .username
            .ok_or_else(|| ClientBuilderError::MissingField("username".to_string()))?;
        let password = self
            .password
            .ok_or_else(|| ClientBuilderError::MissingField("password".to_string()))?;

        Ok(Client::new(&endpoint, &username, &password))
    }
}

/// API client.
///
/// Holds the endpoint, the basic-auth credential pair and one HTTP client;
/// immutable after construction. Every operation is a single stateless
/// round trip whose decoded JSON answer is returned unchanged.
#[derive(Debug)]
pub struct Client {
    endpoint: Url,
    username: String,
    password: String,
    client: reqwest::blocking::Client,
}

impl Client {
    /// Creates a new Client. No request is sent until the first operation.
    pub fn new(endpoint: &Url, username: &str, password: &str) -> Self {
        Self {
            endpoint: endpoint.clone(),
            username: username.to_string(),
            password: password.to_string(),
            client: reqwest::blocking::Client::new(),
        }
    }

    /// Returns a builder for a Client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Creates a [Url] from the endpoint and the path sections.
    ///
    /// Empty sections are skipped, so optional trailing identifiers can be
    /// passed through unconditionally.
    fn build_url(&self, path: &[&str]) -> Result<Url, url::ParseError> {
        let joined = path
            .iter()
            .filter(|p| !p.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join("/");
        self.endpoint.join(&joined)
    }

    /// Sends a request and decodes the JSON answer.
    ///
    /// A write verb without a body is refused before anything is sent.
    /// With `expect_not_found`, a 404 answer is decoded and returned like a
    /// success; the availability check is the one endpoint where the API
    /// overloads not-found to mean "available". Every other status of 400
    /// and above becomes an [ApiError].
    fn request(
        &self,
        verb: Verb,
        path: &[&str],
        body: Option<Payload>,
        expect_not_found: bool,
    ) -> Result<JsonValue, ClientError> {
        let url = self.build_url(path)?;

        let req = match verb {
            Verb::Get => self.client.get(url.clone()),
            Verb::Delete => self.client.delete(url.clone()),
            Verb::Post | Verb::Put => {
                let body = body.ok_or(ClientError::MissingBody(verb.as_str()))?;
                let req = if verb == Verb::Post {
                    self.client.post(url.clone())
                } else {
                    self.client.put(url.clone())
                };
                req.json(&JsonValue::from(body))
            }
        };

        debug!(verb = verb.as_str(), url = %url, "sending request");

        let resp = req
            .basic_auth(&self.username, Some(&self.password))
            .header(header::ACCEPT, "application/json")
            .header(header::USER_AGENT, USER_AGENT)
            .send()?;

        let status = resp.status();
        debug!(verb = verb.as_str(), url = %url, status = %status, "answer received");

        if expect_not_found && status == StatusCode::NOT_FOUND {
            return decode(resp);
        }
        if status.is_client_error() || status.is_server_error() {
            return Err(ClientError::Api(ApiError::from_response(resp)));
        }

        decode(resp)
    }

    /// Creates a new account with the provider.
    ///
    /// `password_confirmation` is passed through as-is; keeping it in sync
    /// with `password` is the caller's responsibility.
    pub fn create_user(
        &self,
        email: &str,
        password: &str,
        password_confirmation: &str,
    ) -> Result<JsonValue, ClientError> {
        let user = Payload::new()
            .add("email", email)
            .add("password", password)
            .add("password_confirmation", password_confirmation);
        let body = Payload::new().add("user", user);

        self.request(Verb::Post, &["users"], Some(body), false)
    }
}

/// Decodes a response body as JSON. A few delete endpoints answer with an
/// empty body, which decodes to null.
fn decode(resp: reqwest::blocking::Response) -> Result<JsonValue, ClientError> {
    let text = resp.text()?;
    if text.is_empty() {
        return Ok(JsonValue::Null);
    }

    Ok(serde_json::from_str(&text)?)
}
