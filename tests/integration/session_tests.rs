//! Session guard wired to the real API client

use library_admin::{session::route, storage::TokenStore};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::test_app;

#[tokio::test]
async fn test_restore_without_token_makes_no_call() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/validate-token"))
        .respond_with(ResponseTemplate::new(200).set_body_string("true"))
        .expect(0)
        .mount(&server)
        .await;

    let (app, _) = test_app(&server);
    let view = app.session.restore().await.unwrap();

    assert!(!view.is_authenticated);
    assert!(!view.loading);
    assert_eq!(route::protected(view), route::RouteDecision::Redirect("/"));
}

#[tokio::test]
async fn test_restore_valid_token() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/validate-token"))
        .and(header("authorization", "Bearer stored-token"))
        .respond_with(ResponseTemplate::new(200).set_body_string("true"))
        .expect(1)
        .mount(&server)
        .await;

    let (app, store) = test_app(&server);
    store.set("jwtToken", "stored-token").unwrap();

    let view = app.session.restore().await.unwrap();
    assert!(view.is_authenticated);
    assert!(!view.loading);
    assert_eq!(route::protected(view), route::RouteDecision::Allow);
    assert_eq!(route::public(view), route::RouteDecision::Redirect("/in/books"));
}

#[tokio::test]
async fn test_restore_rejected_token_clears_storage() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/validate-token"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let (app, store) = test_app(&server);
    store.set("jwtToken", "expired").unwrap();

    let view = app.session.restore().await.unwrap();
    assert!(!view.is_authenticated);
    assert!(!view.loading);
    assert_eq!(store.get("jwtToken").unwrap(), None);
    assert_eq!(app.session.token(), None);
}

#[tokio::test]
async fn test_restore_falsy_answer_clears_storage() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/validate-token"))
        .respond_with(ResponseTemplate::new(200).set_body_string("false"))
        .mount(&server)
        .await;

    let (app, store) = test_app(&server);
    store.set("jwtToken", "revoked").unwrap();

    let view = app.session.restore().await.unwrap();
    assert!(!view.is_authenticated);
    assert_eq!(store.get("jwtToken").unwrap(), None);
}

#[tokio::test]
async fn test_restore_unreachable_api_clears_storage() {
    let server = MockServer::start().await;
    let (app, store) = test_app(&server);
    store.set("jwtToken", "tok").unwrap();
    drop(server);

    let view = app.session.restore().await.unwrap();
    assert!(!view.is_authenticated);
    assert!(!view.loading);
    assert_eq!(store.get("jwtToken").unwrap(), None);
}
