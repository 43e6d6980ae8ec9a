use serde_json::Value as JsonValue;

use super::{Client, Verb};
use crate::{ClientError, Payload};

impl Client {
    /// Lists all domains in the account.
    pub fn list_domains(&self) -> Result<JsonValue, ClientError> {
        self.request(Verb::Get, &["domains"], None, false)
    }

    pub fn retrieve_domain(&self, domain: &str) -> Result<JsonValue, ClientError> {
        self.request(Verb::Get, &["domains", domain], None, false)
    }

    /// Creates a domain in the account, without registering it.
    pub fn create_domain(&self, name: &str) -> Result<JsonValue, ClientError> {
        let body = Payload::new().add("domain", Payload::new().add("name", name));

        self.request(Verb::Post, &["domains"], Some(body), false)
    }

    /// Deletes the given domain from the account.
    pub fn delete_domain(&self, domain: &str) -> Result<JsonValue, ClientError> {
        self.request(Verb::Delete, &["domains", domain], None, false)
    }

    /// Checks whether a domain name is available for registration.
    ///
    /// The API answers 404 for a name it doesn't host; that answer still
    /// carries a JSON body and is returned like any other.
    pub fn check_availability(&self, name: &str) -> Result<JsonValue, ClientError> {
        self.request(Verb::Get, &["domains", name, "check"], None, true)
    }

    /// Looks up the registrant of the account's first domain.
    ///
    /// [`register_domain`](Client::register_domain) falls back to this when
    /// no registrant is given. It is public so callers can perform the
    /// lookup once and reuse the result across registrations.
    ///
    /// # Errors
    /// - `MissingRegistrant` if the account holds no domains.
    pub fn default_registrant_id(&self) -> Result<i64, ClientError> {
        let domains = self.list_domains()?;

        domains
            .get(0)
            .and_then(|d| d.get("domain"))
            .and_then(|d| d.get("registrant_id"))
            .and_then(JsonValue::as_i64)
            .ok_or(ClientError::MissingRegistrant)
    }

    /// Registers a domain name with the appropriate registry.
    ///
    /// When `registrant_id` is `None`, the registrant of the account's
    /// first domain is looked up first. `extended_attribute` carries the
    /// TLD-specific metadata some registries require; see
    /// [`extended_attributes`](Client::extended_attributes) for the schema.
    pub fn register_domain(
        &self,
        name: &str,
        registrant_id: Option<i64>,
        extended_attribute: Option<&JsonValue>,
    ) -> Result<JsonValue, ClientError> {
        let registrant_id = match registrant_id {
            Some(id) => id,
            None => self.default_registrant_id()?,
        };

        let domain = Payload::new()
            .add("name", name)
            .add("registrant_id", registrant_id)
            .add_if_some("extended_attribute", extended_attribute.cloned());
        let body = Payload::new().add("domain", domain);

        self.request(Verb::Post, &["domain_registrations"], Some(body), false)
    }

    /// Transfers a domain name in from another registrar.
    ///
    /// `authinfo` is the transfer authorization code, included only when
    /// the losing registrar requires one.
    pub fn transfer_domain(
        &self,
        name: &str,
        registrant_id: i64,
        authinfo: Option<&str>,
    ) -> Result<JsonValue, ClientError> {
        let domain = Payload::new()
            .add("name", name)
            .add("registrant_id", registrant_id);
        let body = Payload::new().add("domain", domain).add_if_some(
            "transfer_order",
            authinfo.map(|a| Payload::new().add("authinfo", a)),
        );

        self.request(Verb::Post, &["domain_transfers"], Some(body), false)
    }

    /// Renews a domain, optionally renewing its WHOIS privacy with it.
    pub fn renew_domain(
        &self,
        name: &str,
        renew_whois_privacy: bool,
    ) -> Result<JsonValue, ClientError> {
        let domain = Payload::new()
            .add("name", name)
            .add_if_some("renew_whois_privacy", renew_whois_privacy.then_some(true));
        let body = Payload::new().add("domain", domain);

        self.request(Verb::Post, &["domain_renewal"], Some(body), false)
    }

    /// Turns on automatic renewal for the domain.
    pub fn enable_auto_renewal(&self, domain: &str) -> Result<JsonValue, ClientError> {
        self.request(
            Verb::Post,
            &["domains", domain, "auto_renewal"],
            Some(Payload::new()),
            false,
        )
    }

    pub fn disable_auto_renewal(&self, domain: &str) -> Result<JsonValue, ClientError> {
        self.request(Verb::Delete, &["domains", domain, "auto_renewal"], None, false)
    }

    /// Enables WHOIS privacy protection for the domain.
    pub fn enable_whois_privacy(&self, domain: &str) -> Result<JsonValue, ClientError> {
        self.request(
            Verb::Post,
            &["domains", domain, "whois_privacy"],
            Some(Payload::new()),
            false,
        )
    }

    pub fn disable_whois_privacy(&self, domain: &str) -> Result<JsonValue, ClientError> {
        self.request(Verb::Delete, &["domains", domain, "whois_privacy"], None, false)
    }

    /// Retrieves the extended attributes registrations under the given TLD
    /// must supply.
    pub fn extended_attributes(&self, tld: &str) -> Result<JsonValue, ClientError> {
        self.request(Verb::Get, &["extended_attributes", tld], None, false)
    }
}
