use serde_json::Value as JsonValue;

use super::{Client, Verb};
use crate::record::Type;
use crate::{ClientError, Payload};

impl Client {
    /// Lists all DNS templates in the account.
    pub fn list_templates(&self) -> Result<JsonValue, ClientError> {
        self.request(Verb::Get, &["templates"], None, false)
    }

    pub fn retrieve_template(&self, template: &str) -> Result<JsonValue, ClientError> {
        self.request(Verb::Get, &["templates", template], None, false)
    }

    /// Creates a DNS template.
    pub fn create_template(
        &self,
        name: &str,
        short_name: &str,
        description: Option<&str>,
    ) -> Result<JsonValue, ClientError> {
        let template = Payload::new()
            .add("name", name)
            .add("short_name", short_name)
            .add_if_some("description", description);
        let body = Payload::new().add("dns_template", template);

        self.request(Verb::Post, &["templates"], Some(body), false)
    }

    pub fn delete_template(&self, template: &str) -> Result<JsonValue, ClientError> {
        self.request(Verb::Delete, &["templates", template], None, false)
    }

    /// Applies a template's records to the given domain.
    pub fn apply_template(&self, domain: &str, template: &str) -> Result<JsonValue, ClientError> {
        self.request(
            Verb::Post,
            &["domains", domain, "templates", template, "apply"],
            Some(Payload::new()),
            false,
        )
    }

    /// Lists the records a template holds.
    pub fn list_template_records(&self, template: &str) -> Result<JsonValue, ClientError> {
        self.request(
            Verb::Get,
            &["templates", template, "template_records"],
            None,
            false,
        )
    }

    pub fn retrieve_template_record(
        &self,
        template: &str,
        record: &str,
    ) -> Result<JsonValue, ClientError> {
        self.request(
            Verb::Get,
            &["templates", template, "template_records", record],
            None,
            false,
        )
    }

    /// Adds a record to a template.
    pub fn create_template_record(
        &self,
        template: &str,
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
        let body = Payload::new().add("dns_template_record", record);

        self.request(
            Verb::Post,
            &["templates", template, "template_records"],
            Some(body),
            false,
        )
    }

    pub fn delete_template_record(
        &self,
        template: &str,
        record: &str,
    ) -> Result<JsonValue, ClientError> {
        self.request(
            Verb::Delete,
            &["templates", template, "template_records", record],
            None,
            false,
        )
    }
}
