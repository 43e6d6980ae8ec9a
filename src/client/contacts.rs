use serde_json::Value as JsonValue;

use super::{Client, Verb};
use crate::{ClientError, Contact, Payload};

impl Client {
    /// Lists all contacts in the account.
    pub fn list_contacts(&self) -> Result<JsonValue, ClientError> {
        self.request(Verb::Get, &["contacts"], None, false)
    }

    pub fn retrieve_contact(&self, contact: &str) -> Result<JsonValue, ClientError> {
        self.request(Verb::Get, &["contacts", contact], None, false)
    }

    /// Creates a contact in the account.
    pub fn create_contact(&self, contact: &Contact) -> Result<JsonValue, ClientError> {
        let body = Payload::new().add("contact", serde_json::to_value(contact)?);

        self.request(Verb::Post, &["contacts"], Some(body), false)
    }

    /// Updates an existing contact. Unset optional fields are left out of
    /// the body rather than cleared.
    pub fn update_contact(&self, id: &str, contact: &Contact) -> Result<JsonValue, ClientError> {
        let body = Payload::new().add("contact", serde_json::to_value(contact)?);

        self.request(Verb::Put, &["contacts", id], Some(body), false)
    }

    pub fn delete_contact(&self, contact: &str) -> Result<JsonValue, ClientError> {
        self.request(Verb::Delete, &["contacts", contact], None, false)
    }
}
