use serde_json::Value as JsonValue;

use super::{Client, Verb};
use crate::{ClientError, Payload};

impl Client {
    /// Lists the SSL certificates purchased for the domain.
    pub fn list_certificates(&self, domain: &str) -> Result<JsonValue, ClientError> {
        self.request(Verb::Get, &["domains", domain, "certificates"], None, false)
    }

    pub fn retrieve_certificate(
        &self,
        domain: &str,
        certificate: &str,
    ) -> Result<JsonValue, ClientError> {
        self.request(
            Verb::Get,
            &["domains", domain, "certificates", certificate],
            None,
            false,
        )
    }

    /// Purchases a certificate for a name under the domain.
    ///
    /// Without a `csr` the API generates the signing request itself.
    pub fn purchase_certificate(
        &self,
        domain: &str,
        name: &str,
        contact_id: i64,
        csr: Option<&str>,
    ) -> Result<JsonValue, ClientError> {
        let certificate = Payload::new()
            .add("name", name)
            .add("contact_id", contact_id)
            .add_if_some("csr", csr);
        let body = Payload::new().add("certificate", certificate);

        self.request(
            Verb::Post,
            &["domains", domain, "certificates"],
            Some(body),
            false,
        )
    }

    /// Submits a purchased certificate to the authority for signing.
    pub fn submit_certificate(
        &self,
        domain: &str,
        certificate: &str,
    ) -> Result<JsonValue, ClientError> {
        self.request(
            Verb::Put,
            &["domains", domain, "certificates", certificate, "submit"],
            Some(Payload::new()),
            false,
        )
    }
}
