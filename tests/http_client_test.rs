//! HttpNetworkClient against a mock gateway.

use httpmock::prelude::*;
use linkedin_connect::clients::{ClientError, HttpNetworkClient, NetworkClient};
use linkedin_connect::domain::SearchQuery;
use serde_json::json;

/// Starts a gateway that accepts any login and hands back a session cookie.
async fn signed_in(server: &MockServer) -> HttpNetworkClient {
    server
        .mock_async(|when, then| {
            when.method(POST).path("/auth/login");
            then.status(200)
                .header("set-cookie", "li_at=session-1; Path=/")
                .json_body(json!({"ok": true}));
        })
        .await;

    let client = HttpNetworkClient::new(&server.base_url()).unwrap();
    client.authenticate("me@example.com", "secret", false).await.unwrap();
    client
}

#[tokio::test]
async fn test_full_session_against_gateway() {
    let server = MockServer::start_async().await;

    let login = server
        .mock_async(|when, then| {
            when.method(POST).path("/auth/login").json_body(json!({
                "email": "me@example.com",
                "password": "secret",
                "refresh_cookies": true,
            }));
            then.status(200)
                .header("set-cookie", "li_at=session-1; Path=/")
                .json_body(json!({"ok": true}));
        })
        .await;
    let search = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/search/people")
                .header("cookie", "li_at=session-1")
                .json_body(json!({
                    "keywords": "Software Engineer",
                    "limit": 10,
                    "network_depths": ["S", "O"],
                    "include_private_profiles": false,
                }));
            then.status(200).json_body(json!({"results": [
                {"name": "Jane Doe", "public_id": "jane-doe", "urn_id": "ACoAA1", "jobtitle": "SDE", "location": "Pune"},
                {"name": "No Id"}
            ]}));
        })
        .await;
    let connect = server
        .mock_async(|when, then| {
            when.method(POST).path("/connections").json_body(json!({
                "public_id": "jane-doe",
                "message": "Hello!",
                "profile_urn": "ACoAA1",
            }));
            then.status(200).json_body(json!({"success": true}));
        })
        .await;
    let unfollow = server
        .mock_async(|when, then| {
            when.method(DELETE).path("/connections/ACoAA1/follow");
            then.status(200).json_body(json!({"success": true}));
        })
        .await;

    let client = HttpNetworkClient::new(&server.base_url()).unwrap();
    client.authenticate("me@example.com", "secret", true).await.unwrap();

    let profiles = client
        .search_people(&SearchQuery::not_connected("Software Engineer", 10))
        .await
        .unwrap();
    assert_eq!(profiles.len(), 2);
    assert_eq!(profiles[0].job_title, "SDE");
    assert_eq!(profiles[1].connect_id(), None);

    let sent = client
        .add_connection("jane-doe", "Hello!", Some("ACoAA1"))
        .await
        .unwrap();
    assert!(sent);

    let unfollowed = client.unfollow_connection("ACoAA1").await.unwrap();
    assert!(unfollowed);

    login.assert_async().await;
    search.assert_async().await;
    connect.assert_async().await;
    unfollow.assert_async().await;
}

#[tokio::test]
async fn test_rejected_login_maps_to_authentication_error() {
    let server = MockServer::start_async().await;
    let login = server
        .mock_async(|when, then| {
            when.method(POST).path("/auth/login");
            then.status(401).body("bad credentials");
        })
        .await;
    let search = server
        .mock_async(|when, then| {
            when.method(POST).path("/search/people");
            then.status(200).json_body(json!([]));
        })
        .await;

    let client = HttpNetworkClient::new(&server.base_url()).unwrap();
    let result = client.authenticate("me@example.com", "wrong", false).await;
    assert_eq!(
        result,
        Err(ClientError::Authentication("bad credentials".into()))
    );

    // Still signed out, so nothing else goes over the wire.
    let result = client
        .search_people(&SearchQuery::not_connected("Rust", 5))
        .await;
    assert_eq!(result, Err(ClientError::NotAuthenticated));

    login.assert_async().await;
    search.assert_hits_async(0).await;
}

#[tokio::test]
async fn test_rejected_login_without_body_reports_status() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/auth/login");
            then.status(403);
        })
        .await;

    let client = HttpNetworkClient::new(&server.base_url()).unwrap();
    let result = client.authenticate("me@example.com", "secret", false).await;
    assert_eq!(
        result,
        Err(ClientError::Authentication("403 Forbidden".into()))
    );
}

#[tokio::test]
async fn test_server_error_maps_to_status() {
    let server = MockServer::start_async().await;
    let client = signed_in(&server).await;
    let connect = server
        .mock_async(|when, then| {
            when.method(POST).path("/connections").json_body(json!({
                "public_id": "jane-doe",
                "message": "Hi",
                "profile_urn": null,
            }));
            then.status(500).body("upstream exploded");
        })
        .await;

    let result = client.add_connection("jane-doe", "Hi", None).await;
    assert_eq!(
        result,
        Err(ClientError::Status {
            status: 500,
            body: "upstream exploded".into(),
        })
    );
    connect.assert_async().await;
}

#[tokio::test]
async fn test_search_results_are_capped_at_limit() {
    let server = MockServer::start_async().await;
    let client = signed_in(&server).await;
    let search = server
        .mock_async(|when, then| {
            when.method(POST).path("/search/people");
            then.status(200).json_body(json!([
                {"name": "A", "public_id": "a"},
                {"name": "B", "public_id": "b"},
                {"name": "C", "public_id": "c"}
            ]));
        })
        .await;

    let profiles = client
        .search_people(&SearchQuery::not_connected("Rust", 2))
        .await
        .unwrap();
    assert_eq!(profiles.len(), 2);
    assert_eq!(profiles[1].name, "B");
    search.assert_async().await;
}

#[tokio::test]
async fn test_undecodable_body_maps_to_decode_error() {
    let server = MockServer::start_async().await;
    let client = signed_in(&server).await;
    server
        .mock_async(|when, then| {
            when.method(DELETE).path("/connections/ACoAA1/follow");
            then.status(200).body("not json");
        })
        .await;

    let result = client.unfollow_connection("ACoAA1").await;
    assert!(matches!(result, Err(ClientError::Decode(_))), "{:?}", result);
}

/// Reserved characters in a URN stay inside its path segment, so the
/// request still targets `/follow`.
#[tokio::test]
async fn test_unfollow_urn_is_encoded_as_one_segment() {
    let server = MockServer::start_async().await;
    let client = signed_in(&server).await;
    let unfollow = server
        .mock_async(|when, then| {
            when.method(DELETE)
                .path("/connections/urn:li:member%2F123%3Fx=1%23frag/follow");
            then.status(200).json_body(json!({"success": true}));
        })
        .await;
    let truncated = server
        .mock_async(|when, then| {
            when.method(DELETE).path("/connections/urn:li:member/123");
            then.status(200).json_body(json!({"success": true}));
        })
        .await;

    let unfollowed = client
        .unfollow_connection("urn:li:member/123?x=1#frag")
        .await
        .unwrap();
    assert!(unfollowed);

    unfollow.assert_async().await;
    truncated.assert_hits_async(0).await;
}
