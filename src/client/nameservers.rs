use serde_json::Value as JsonValue;

use super::{Client, Verb};
use crate::{ClientError, Payload};

const MAX_NAME_SERVERS: usize = 6;
const MAX_VANITY_NAME_SERVERS: usize = 4;

/// Where a domain's vanity nameservers are hosted.
#[derive(Debug)]
pub enum VanityNameServers<'a> {
    /// Branded names backed by the provider's own nameservers.
    Dnsimple,
    /// Externally hosted nameservers, between one and four of them.
    External(&'a [&'a str]),
}

impl VanityNameServers<'_> {
    /// The `server_source` value the API expects for this configuration.
    fn server_source(&self) -> &'static str {
        match self {
            VanityNameServers::Dnsimple => "dnsimple",
            VanityNameServers::External(_) => "external",
        }
    }
}

/// Adds `ns1`..`nsN` keys for the given servers.
fn add_numbered(mut payload: Payload, servers: &[&str]) -> Payload {
    for (i, server) in servers.iter().enumerate() {
        payload = payload.add(&format!("ns{}", i + 1), *server);
    }
    payload
}

impl Client {
    /// Replaces the domain's delegation, or resets it to the provider's
    /// default nameservers.
    ///
    /// Exactly one of `name_servers` and `reset` must be given; the reset
    /// target is the provider's own delegation, which the client cannot
    /// enumerate, so it is sent as a marker value.
    ///
    /// # Errors
    /// - `NameServerConflict` if both or neither option is given.
    /// - `NameServerCount` for an empty map or more than six entries.
    pub fn change_name_servers(
        &self,
        domain: &str,
        name_servers: Option<&[&str]>,
        reset: bool,
    ) -> Result<JsonValue, ClientError> {
        let body = match (name_servers, reset) {
            (Some(_), true) | (None, false) => return Err(ClientError::NameServerConflict),
            (Some(servers), false) => {
                if servers.is_empty() || servers.len() > MAX_NAME_SERVERS {
                    return Err(ClientError::NameServerCount {
                        min: 1,
                        max: MAX_NAME_SERVERS,
                        count: servers.len(),
                    });
                }
                Payload::new().add("name_servers", add_numbered(Payload::new(), servers))
            }
            (None, true) => Payload::new().add("name_servers", "default"),
        };

        self.request(Verb::Post, &["domains", domain, "name_servers"], Some(body), false)
    }

    /// Enables vanity nameservers for the domain.
    ///
    /// # Errors
    /// - `NameServerCount` for an external configuration with no entries or
    ///   more than four.
    pub fn enable_vanity_name_servers(
        &self,
        domain: &str,
        config: &VanityNameServers<'_>,
    ) -> Result<JsonValue, ClientError> {
        let configuration = Payload::new().add("server_source", config.server_source());
        let configuration = match config {
            VanityNameServers::Dnsimple => configuration,
            VanityNameServers::External(servers) => {
                if servers.is_empty() || servers.len() > MAX_VANITY_NAME_SERVERS {
                    return Err(ClientError::NameServerCount {
                        min: 1,
                        max: MAX_VANITY_NAME_SERVERS,
                        count: servers.len(),
                    });
                }
                add_numbered(configuration, servers)
            }
        };

        let body = Payload::new().add("vanity_nameserver_configuration", configuration);

        self.request(
            Verb::Post,
            &["domains", domain, "vanity_name_servers"],
            Some(body),
            false,
        )
    }

    /// Disables vanity nameservers, returning the domain to the provider's
    /// default delegation.
    pub fn disable_vanity_name_servers(&self, domain: &str) -> Result<JsonValue, ClientError> {
        self.request(
            Verb::Delete,
            &["domains", domain, "vanity_name_servers"],
            None,
            false,
        )
    }
}
