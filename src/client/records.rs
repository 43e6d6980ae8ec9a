use serde_json::Value as JsonValue;

use super::{Client, Verb};
use crate::record::Type;
use crate::{ClientError, Payload};

impl Client {
    /// Lists all DNS records for the domain.
    pub fn list_records(&self, domain: &str) -> Result<JsonValue, ClientError> {
        self.request(Verb::Get, &["domains", domain, "records"], None, false)
    }

    pub fn retrieve_record(&self, domain: &str, record: &str) -> Result<JsonValue, ClientError> {
        self.request(Verb::Get, &["domains", domain, "records", record], None, false)
    }

    /// Creates a DNS record in the domain's zone.
    ///
    /// `name` is relative to the domain; pass `""` for the apex. Absent
    /// `ttl`/`prio` leave the server defaults in place.
    pub fn create_record(
        &self,
        domain: &str,
        name: &str,
        record_type: Type,
        content: &str,
        ttl: Option<i64>,
        prio: Option<i64>,
    ) -> Result<JsonValue, ClientError> {
        let record = Payload::new()
            .add("name", name)
            .add("record_type", record_type.as_str())
            .add("content", content)
            .add_if_some("ttl", ttl)
            .add_if_some("prio", prio);
        let body = Payload::new().add("record", record);

        self.request(Verb::Post, &["domains", domain, "records"], Some(body), false)
    }

    /// Updates a DNS record, sending only the supplied fields.
    pub fn update_record(
        &self,
        domain: &str,
        record: &str,
        name: Option<&str>,
        record_type: Option<Type>,
        content: Option<&str>,
        ttl: Option<i64>,
        prio: Option<i64>,
    ) -> Result<JsonValue, ClientError> {
        let changes = Payload::new()
            .add_if_some("name", name)
            .add_if_some("record_type", record_type.map(|t| t.as_str()))
            .add_if_some("content", content)
            .add_if_some("ttl", ttl)
            .add_if_some("prio", prio);
        let body = Payload::new().add("record", changes);

        self.request(
            Verb::Put,
            &["domains", domain, "records", record],
            Some(body),
            false,
        )
    }

    pub fn delete_record(&self, domain: &str, record: &str) -> Result<JsonValue, ClientError> {
        self.request(
            Verb::Delete,
            &["domains", domain, "records", record],
            None,
            false,
        )
    }
}
