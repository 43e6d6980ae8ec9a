use mockito::{Matcher, Server};
use reqwest::StatusCode;
use serde_json::json;

use super::*;

/// Builds a client pointed at the given mock server.
pub(crate) fn client_for(server: &Server) -> Client {
    Client::builder()
        .endpoint(&server.url().parse().unwrap())
        .username("user")
        .password("pass")
        .build()
        .unwrap()
}

#[test]
fn get_returns_the_decoded_answer_unchanged() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/domains")
        .with_status(200)
        .with_body(r#"{"k":"v"}"#)
        .create();

    let client = client_for(&server);
    let resp = client.request(Verb::Get, &["domains"], None, false).unwrap();

    assert_eq!(resp, json!({"k": "v"}));
    mock.assert();
}

#[test]
fn delete_returns_the_decoded_answer_unchanged() {
    let mut server = Server::new();
    let mock = server
        .mock("DELETE", "/domains/example.com")
        .with_status(200)
        .with_body(r#"{"k":"v"}"#)
        .create();

    let client = client_for(&server);
    let resp = client
        .request(Verb::Delete, &["domains", "example.com"], None, false)
        .unwrap();

    assert_eq!(resp, json!({"k": "v"}));
    mock.assert();
}

#[test]
fn empty_answer_bodies_decode_to_null() {
    let mut server = Server::new();
    let mock = server
        .mock("DELETE", "/contacts/5")
        .with_status(204)
        .create();

    let client = client_for(&server);
    let resp = client
        .request(Verb::Delete, &["contacts", "5"], None, false)
        .unwrap();

    assert!(resp.is_null());
    mock.assert();
}

#[test]
fn post_without_a_body_is_refused_before_sending() {
    let mut server = Server::new();
    let mock = server.mock("POST", "/domains").expect(0).create();

    let client = client_for(&server);
    let err = client
        .request(Verb::Post, &["domains"], None, false)
        .unwrap_err();

    assert!(matches!(err, ClientError::MissingBody("POST")));
    mock.assert();
}

#[test]
fn put_without_a_body_is_refused_before_sending() {
    let mut server = Server::new();
    let mock = server.mock("PUT", "/contacts/5").expect(0).create();

    let client = client_for(&server);
    let err = client
        .request(Verb::Put, &["contacts", "5"], None, false)
        .unwrap_err();

    assert!(matches!(err, ClientError::MissingBody("PUT")));
    mock.assert();
}

#[test]
fn expected_not_found_is_decoded_as_a_success() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/domains/nonexistent/check")
        .with_status(404)
        .with_body(r#"{"available":true}"#)
        .create();

    let client = client_for(&server);
    let resp = client
        .request(Verb::Get, &["domains", "nonexistent", "check"], None, true)
        .unwrap();

    assert_eq!(resp, json!({"available": true}));
    mock.assert();
}

#[test]
fn unexpected_not_found_is_an_api_error() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/domains/nonexistent")
        .with_status(404)
        .with_body(r#"{"error":"domain not found"}"#)
        .create();

    let client = client_for(&server);
    let err = client
        .request(Verb::Get, &["domains", "nonexistent"], None, false)
        .unwrap_err();

    match err {
        ClientError::Api(e) => {
            assert_eq!(e.status(), StatusCode::NOT_FOUND);
            assert!(e.body().contains("domain not found"));
        }
        other => panic!("expected an API error, got {other:?}"),
    }
    mock.assert();
}

#[test]
fn failed_posts_raise_instead_of_being_swallowed() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/domains")
        .with_status(400)
        .with_body(r#"{"error":"name already taken"}"#)
        .create();

    let client = client_for(&server);
    let body = Payload::new().add("domain", Payload::new().add("name", "example.com"));
    let err = client
        .request(Verb::Post, &["domains"], Some(body), false)
        .unwrap_err();

    match err {
        ClientError::Api(e) => assert_eq!(e.status(), StatusCode::BAD_REQUEST),
        other => panic!("expected an API error, got {other:?}"),
    }
    mock.assert();
}

#[test]
fn requests_carry_basic_auth_and_accept_headers() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/domains")
        .match_header("authorization", "Basic dXNlcjpwYXNz")
        .match_header("accept", "application/json")
        .match_header("user-agent", USER_AGENT)
        .with_status(200)
        .with_body("[]")
        .create();

    let client = client_for(&server);
    let resp = client.request(Verb::Get, &["domains"], None, false).unwrap();

    assert_eq!(resp, json!([]));
    mock.assert();
}

#[test]
fn writes_send_a_json_content_type() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/users")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "user": {
                "email": "jane@example.com",
                "password": "hunter2",
                "password_confirmation": "hunter2"
            }
        })))
        .with_status(201)
        .with_body(r#"{"user":{"id":1}}"#)
        .create();

    let client = client_for(&server);
    client
        .create_user("jane@example.com", "hunter2", "hunter2")
        .unwrap();

    mock.assert();
}

#[test]
fn empty_path_sections_are_skipped() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/domains")
        .with_status(200)
        .with_body("[]")
        .create();

    let client = client_for(&server);
    client
        .request(Verb::Get, &["domains", ""], None, false)
        .unwrap();

    mock.assert();
}

#[test]
fn builder_requires_both_credentials() {
    let err = Client::builder().username("user").build().unwrap_err();
    assert!(matches!(err, ClientBuilderError::MissingField(f) if f == "password"));

    let err = Client::builder().password("pass").build().unwrap_err();
    assert!(matches!(err, ClientBuilderError::MissingField(f) if f == "username"));
}

#[test]
fn builder_defaults_the_endpoint() {
    let client = Client::builder()
        .username("user")
        .password("pass")
        .build()
        .unwrap();

    assert_eq!(client.endpoint.as_str(), DEFAULT_ENDPOINT);
}
