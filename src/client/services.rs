use serde_json::Value as JsonValue;

use super::{Client, Verb};
use crate::{ClientError, Payload};

impl Client {
    /// Lists every service the provider offers.
    pub fn list_services(&self) -> Result<JsonValue, ClientError> {
        self.request(Verb::Get, &["services"], None, false)
    }

    pub fn retrieve_service(&self, service: &str) -> Result<JsonValue, ClientError> {
        self.request(Verb::Get, &["services", service], None, false)
    }

    /// Lists the services currently applied to the domain.
    pub fn applied_services(&self, domain: &str) -> Result<JsonValue, ClientError> {
        self.request(
            Verb::Get,
            &["domains", domain, "applied_services"],
            None,
            false,
        )
    }

    /// Lists the services that could still be applied to the domain.
    pub fn available_services(&self, domain: &str) -> Result<JsonValue, ClientError> {
        self.request(
            Verb::Get,
            &["domains", domain, "available_services"],
            None,
            false,
        )
    }

    /// Applies a service to the domain. `service` is the numeric id or the
    /// short name.
    pub fn apply_service(&self, domain: &str, service: &str) -> Result<JsonValue, ClientError> {
        let body = Payload::new().add("service", Payload::new().add("id", service));

        self.request(
            Verb::Post,
            &["domains", domain, "applied_services"],
            Some(body),
            false,
        )
    }

    /// Removes an applied service from the domain.
    pub fn remove_service(&self, domain: &str, service: &str) -> Result<JsonValue, ClientError> {
        self.request(
            Verb::Delete,
            &["domains", domain, "applied_services", service],
            None,
            false,
        )
    }
}
