use crate::integration::helpers::{client::TestClient, stub_canister::StubCanister};
use axum::http::StatusCode;
use serde_json::json;

/// Blank ids are rejected before the canister is called.
#[tokio::test]
async fn test_get_likes_blank_ids() {
    let client = TestClient::new(StubCanister::replying(json!(0)));

    for uri in ["/likes/", "/likes/%20", "/likes/%20%09%20"] {
        let (status, body) = client.get(uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "uri: {}", uri);
        assert_eq!(body["detail"], "Post ID cannot be empty");
    }

    assert!(client.canister.calls().is_empty());
}

#[tokio::test]
async fn test_like_post_blank_ids() {
    let client = TestClient::new(StubCanister::replying(json!(1)));

    for uri in ["/like/", "/like/%20%20"] {
        let (status, body) = client.post_empty(uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "uri: {}", uri);
        assert!(body["detail"].as_str().unwrap().contains("cannot be empty"));
    }

    assert!(client.canister.calls().is_empty());
}

#[tokio::test]
async fn test_get_likes_success() {
    let client = TestClient::new(StubCanister::replying(json!(5)));

    let (status, body) = client.get("/likes/abc123").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "post_id": "abc123",
            "result": 5,
            "message": "Likes retrieved from ICP canister"
        })
    );
    assert_eq!(
        client.canister.calls(),
        vec![("get_likes".to_string(), vec!["abc123".to_string()])]
    );
}

/// The canister's own error variant is a successful call and is relayed as-is.
#[tokio::test]
async fn test_get_likes_relays_canister_variant() {
    let reply = json!({ "Err": "Post ID cannot be empty" });
    let client = TestClient::new(StubCanister::replying(reply.clone()));

    let (status, body) = client.get("/likes/post-1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], reply);
}

#[tokio::test]
async fn test_like_post_success() {
    let client = TestClient::new(StubCanister::replying(json!({ "Ok": 3 })));

    let (status, body) = client.post_empty("/like/post-1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["post_id"], "post-1");
    assert_eq!(body["result"], json!({ "Ok": 3 }));
    assert_eq!(body["message"], "Post liked successfully on ICP canister");
    assert_eq!(
        client.canister.calls(),
        vec![("like".to_string(), vec!["post-1".to_string()])]
    );
}

#[tokio::test]
async fn test_likes_canister_failure() {
    let client = TestClient::new(StubCanister::failing("replica unreachable"));

    let (status, body) = client.get("/likes/post-1").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["detail"], "Failed to get likes: replica unreachable");

    let (status, body) = client.post_empty("/like/post-1").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["detail"], "Failed to like post: replica unreachable");
}

/// Likes on the same post are forwarded one call each, nothing is coalesced.
#[tokio::test]
async fn test_concurrent_likes_are_all_forwarded() {
    let client = TestClient::new(StubCanister::replying(json!({ "Ok": 1 })));

    let (a, b, c) = tokio::join!(
        client.post_empty("/like/post-1"),
        client.post_empty("/like/post-1"),
        client.post_empty("/like/post-1"),
    );

    assert_eq!(a.0, StatusCode::OK);
    assert_eq!(b.0, StatusCode::OK);
    assert_eq!(c.0, StatusCode::OK);
    assert_eq!(client.canister.calls().len(), 3);
}
