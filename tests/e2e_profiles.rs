//! E2E tests for profile operations (follow/unfollow, per-user feed)

mod common;

use common::TestServer;
use serde_json::Value;

#[tokio::test]
async fn test_follow_requires_auth() {
    let server = TestServer::new().await;
    server.create_user("alice").await;

    let response = server
        .client
        .post(server.url("/api/profiles/alice/follow"))
        .json(&serde_json::json!({"action": "follow"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 401);
}

#[tokio::test]
async fn test_follow_unknown_user_is_not_found() {
    let server = TestServer::new().await;
    let bob = server.create_user("bob").await;

    let response = server
        .client
        .post(server.url("/api/profiles/nobody/follow"))
        .header("Authorization", format!("Bearer {}", server.token_for(&bob)))
        .json(&serde_json::json!({"action": "follow"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn test_follow_returns_count() {
    let server = TestServer::new().await;
    server.create_user("alice").await;
    let bob = server.create_user("bob").await;

    let response = server
        .client
        .post(server.url("/api/profiles/alice/follow"))
        .header("Authorization", format!("Bearer {}", server.token_for(&bob)))
        .json(&serde_json::json!({"action": "follow"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let json: Value = response.json().await.unwrap();
    assert_eq!(json["count"], 1);
}

#[tokio::test]
async fn test_follow_twice_is_idempotent() {
    let server = TestServer::new().await;
    server.create_user("alice").await;
    let bob = server.create_user("bob").await;
    let token = server.token_for(&bob);

    let mut last_count = 0;
    for _ in 0..2 {
        let json: Value = server
            .client
            .post(server.url("/api/profiles/alice/follow"))
            .header("Authorization", format!("Bearer {}", token))
            .json(&serde_json::json!({"action": "follow"}))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        last_count = json["count"].as_i64().unwrap();
    }

    assert_eq!(last_count, 1);
}

#[tokio::test]
async fn test_unfollow_after_follow() {
    let server = TestServer::new().await;
    server.create_user("alice").await;
    let bob = server.create_user("bob").await;
    let token = server.token_for(&bob);

    server
        .client
        .post(server.url("/api/profiles/alice/follow"))
        .header("Authorization", format!("Bearer {}", token))
        .json(&serde_json::json!({"action": "follow"}))
        .send()
        .await
        .unwrap();

    let json: Value = server
        .client
        .post(server.url("/api/profiles/alice/follow"))
        .header("Authorization", format!("Bearer {}", token))
        .json(&serde_json::json!({"action": "unfollow"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(json["count"], 0);
}

#[tokio::test]
async fn test_unfollow_non_follower_is_noop() {
    let server = TestServer::new().await;
    server.create_user("alice").await;
    let bob = server.create_user("bob").await;

    let response = server
        .client
        .post(server.url("/api/profiles/alice/follow"))
        .header("Authorization", format!("Bearer {}", server.token_for(&bob)))
        .json(&serde_json::json!({"action": "unfollow"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let json: Value = response.json().await.unwrap();
    assert_eq!(json["count"], 0);
}

#[tokio::test]
async fn test_unrecognized_action_still_returns_count() {
    let server = TestServer::new().await;
    server.create_user("alice").await;
    let bob = server.create_user("bob").await;
    let carol = server.create_user("carol").await;

    // carol follows alice first
    server
        .client
        .post(server.url("/api/profiles/alice/follow"))
        .header("Authorization", format!("Bearer {}", server.token_for(&carol)))
        .json(&serde_json::json!({"action": "follow"}))
        .send()
        .await
        .unwrap();

    // bob sends an unrecognized action: no mutation, count still reported
    let json: Value = server
        .client
        .post(server.url("/api/profiles/alice/follow"))
        .header("Authorization", format!("Bearer {}", server.token_for(&bob)))
        .json(&serde_json::json!({"action": "block"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(json["count"], 1);
}

#[tokio::test]
async fn test_missing_body_returns_count() {
    let server = TestServer::new().await;
    server.create_user("alice").await;
    let bob = server.create_user("bob").await;

    let response = server
        .client
        .post(server.url("/api/profiles/alice/follow"))
        .header("Authorization", format!("Bearer {}", server.token_for(&bob)))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let json: Value = response.json().await.unwrap();
    assert_eq!(json["count"], 0);
}

#[tokio::test]
async fn test_self_follow_is_permitted() {
    let server = TestServer::new().await;
    let alice = server.create_user("alice").await;

    let json: Value = server
        .client
        .post(server.url("/api/profiles/alice/follow"))
        .header("Authorization", format!("Bearer {}", server.token_for(&alice)))
        .json(&serde_json::json!({"action": "follow"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(json["count"], 1);
}

#[tokio::test]
async fn test_user_feed_lists_only_their_tweets() {
    let server = TestServer::new().await;
    let alice = server.create_user("alice").await;
    let bob = server.create_user("bob").await;

    for (user, content) in [(&alice, "from alice"), (&bob, "from bob")] {
        server
            .client
            .post(server.url("/api/tweets"))
            .header("Authorization", format!("Bearer {}", server.token_for(user)))
            .json(&serde_json::json!({"content": content}))
            .send()
            .await
            .unwrap();
    }

    let response = server
        .client
        .get(server.url("/api/profiles/alice/tweets"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let list: Vec<Value> = response.json().await.unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["user"], "alice");
    assert_eq!(list[0]["content"], "from alice");
}

#[tokio::test]
async fn test_user_feed_unknown_user_is_not_found() {
    let server = TestServer::new().await;

    let response = server
        .client
        .get(server.url("/api/profiles/nobody/tweets"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 404);
}
