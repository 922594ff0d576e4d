//! `HttpRemote` against a mock json-server

use serde_json::json;
use todos_core::{
    Config, Dispatcher, HttpRemote, RemoteError, RemoteStore, TodoDraft, TodoId, TodoItem,
};
use todos_core::dispatch::drain;
use todos_core::operations;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn remote_for(server: &MockServer) -> HttpRemote {
    HttpRemote::new(Config::new(&server.uri()).unwrap())
}

#[tokio::test]
async fn list_gets_collection() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/todos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "text": "test", "isCompleted": false },
            { "id": "abc", "text": "test2", "isCompleted": true }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let todos = remote_for(&server).await.list().await.unwrap();

    assert_eq!(
        todos,
        vec![
            TodoItem::new(1, "test", false),
            TodoItem::new("abc", "test2", true),
        ]
    );
}

#[tokio::test]
async fn create_posts_draft_without_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/todos"))
        .and(body_json(json!({ "text": "test", "isCompleted": false })))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!({ "id": 7, "text": "test", "isCompleted": false })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let item = remote_for(&server)
        .await
        .create(&TodoDraft::new("test"))
        .await
        .unwrap();

    assert_eq!(item, TodoItem::new(7, "test", false));
}

#[tokio::test]
async fn update_puts_to_item_url() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/todos/3"))
        .and(body_json(json!({ "text": "renamed", "isCompleted": true })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "id": 3, "text": "renamed", "isCompleted": true })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let item = remote_for(&server)
        .await
        .update(&TodoId::Number(3), &TodoDraft::new("renamed").with_completed(true))
        .await
        .unwrap();

    assert_eq!(item, TodoItem::new(3, "renamed", true));
}

#[tokio::test]
async fn delete_ignores_response_body() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/todos/abc"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&server)
        .await;

    remote_for(&server)
        .await
        .delete(&TodoId::from("abc"))
        .await
        .unwrap();
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/todos"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = remote_for(&server).await.list().await.unwrap_err();

    match err {
        RemoteError::Status { status, .. } => assert_eq!(status.as_u16(), 500),
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn wrong_shape_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/todos"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "ok": true })))
        .mount(&server)
        .await;

    let err = remote_for(&server)
        .await
        .create(&TodoDraft::new("test"))
        .await
        .unwrap_err();

    assert!(matches!(err, RemoteError::Decode { .. }));
}

#[tokio::test]
async fn unreachable_store_is_a_request_error() {
    let remote = HttpRemote::new(Config::new("http://127.0.0.1:9").unwrap());

    let err = remote.list().await.unwrap_err();

    assert!(matches!(err, RemoteError::Request(_)));
}

#[tokio::test]
async fn failed_create_dispatches_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    let remote = remote_for(&server).await;
    let (dispatcher, mut rx) = Dispatcher::channel();

    let result = operations::create(&remote, &dispatcher, TodoDraft::new("test")).await;

    assert!(result.is_err());
    assert!(drain(&mut rx).is_empty());
}

#[tokio::test]
async fn base_url_with_path_prefix() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/todos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;
    let remote = HttpRemote::new(Config::new(&format!("{}/api/", server.uri())).unwrap());

    assert!(remote.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn text_id_with_reserved_chars_stays_one_segment() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/todos/a%2Fb%3Fc"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/todos/to%20do%20%231"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "id": "to do #1", "text": "x", "isCompleted": false })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let remote = remote_for(&server).await;
    remote.delete(&TodoId::from("a/b?c")).await.unwrap();
    let item = remote
        .update(&TodoId::from("to do #1"), &TodoDraft::new("x"))
        .await
        .unwrap();

    assert_eq!(item, TodoItem::new("to do #1", "x", false));
}
