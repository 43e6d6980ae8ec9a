use serde_json::Value as JsonValue;

use super::{Client, Verb};
use crate::{ClientError, Payload};

impl Client {
    /// Lists the accounts with access to the domain.
    pub fn list_memberships(&self, domain: &str) -> Result<JsonValue, ClientError> {
        self.request(Verb::Get, &["domains", domain, "memberships"], None, false)
    }

    /// Grants another account, by email, access to the domain.
    pub fn add_membership(&self, domain: &str, email: &str) -> Result<JsonValue, ClientError> {
        let body = Payload::new().add("membership", Payload::new().add("email", email));

        self.request(
            Verb::Post,
            &["domains", domain, "memberships"],
            Some(body),
            false,
        )
    }

    /// Revokes an account's access to the domain.
    pub fn remove_membership(&self, domain: &str, email: &str) -> Result<JsonValue, ClientError> {
        self.request(
            Verb::Delete,
            &["domains", domain, "memberships", email],
            None,
            false,
        )
    }
}

#[cfg(test)]
mod tests {
    use mockito::{Matcher, Server};
    use serde_json::json;

    use crate::client::tests::client_for;

    #[test]
    fn add_membership_wraps_the_email() {
        let mut server = Server::new();
        let mock = server
            .mock("POST", "/domains/example.com/memberships")
            .match_body(Matcher::Json(json!({"membership": {"email": "ops@example.com"}})))
            .with_status(201)
            .with_body("{}")
            .create();

        let client = client_for(&server);
        client.add_membership("example.com", "ops@example.com").unwrap();

        mock.assert();
    }

    #[test]
    fn remove_membership_embeds_the_email_in_the_path() {
        let mut server = Server::new();
        let mock = server
            .mock("DELETE", "/domains/example.com/memberships/ops@example.com")
            .with_status(200)
            .with_body("{}")
            .create();

        let client = client_for(&server);
        client
            .remove_membership("example.com", "ops@example.com")
            .unwrap();

        mock.assert();
    }
}
