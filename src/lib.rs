//! # Simple and type-safe client for the DNSimple v1 API.
//!
//! Implements an easy-to-use client for interfacing with the hosted
//! [DNSimple API]. Authenticates with the account's HTTP basic credentials;
//! every operation is a single stateless round trip whose decoded JSON
//! answer is returned as-is, leaving retry and backoff policy to the
//! caller.
//!
//! ## Examples
//!
//! ```no_run
//! use zonelet::{Client, record::Type};
//!
//! let client = Client::builder()
//!     .username("<EMAIL>")
//!     .password("<PASSWORD>")
//!     .build()
//!     .unwrap();
//!
//! let domains = client.list_domains().unwrap();
//! println!("{domains}");
//!
//! client
//!     .create_record("example.com", "www", Type::A, "1.2.3.4", Some(3600), None)
//!     .unwrap();
//! ```
//!
//! [DNSimple API]: https://developer.dnsimple.com/

mod client;
mod contact;
mod errors;
mod payload;
pub mod record;

pub use client::*;
pub use contact::*;
pub use errors::*;
pub(crate) use payload::*;
