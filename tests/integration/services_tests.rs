//! Page-level flows: forms, session token, forced logout

use std::time::Duration;

use library_admin::{
    forms::{BookForm, LoginForm},
    storage::TokenStore,
    AppError,
};
use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::test_app;

fn book_form() -> BookForm {
    BookForm {
        title: "Dom Casmurro".into(),
        author: "Machado de Assis".into(),
        publisher: "Garnier".into(),
        genre: "ROMANCE".into(),
        price_per_day: "R$ 2,50".into(),
        available_stock: "3".into(),
        publish_year: "1899".into(),
        purchase_cost: "R$ 1.234,56".into(),
        ..BookForm::default()
    }
}

#[tokio::test]
async fn test_sign_in_opens_session() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": "jwt-1" })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/auth/validate-token"))
        .and(header("authorization", "Bearer jwt-1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("true"))
        .expect(1)
        .mount(&server)
        .await;

    let (app, store) = test_app(&server);
    let view = app
        .services
        .auth
        .sign_in(&LoginForm::new("librarian@library.org", "secret"))
        .await
        .unwrap();

    assert!(view.is_authenticated);
    assert_eq!(store.get("jwtToken").unwrap(), Some("jwt-1".to_string()));

    app.services.auth.sign_out().unwrap();
    assert!(!app.session.is_authenticated());
    assert_eq!(store.get("jwtToken").unwrap(), None);
}

#[tokio::test]
async fn test_sign_in_with_refused_token_ends_session() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": "jwt-bad" })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/auth/validate-token"))
        .and(header("authorization", "Bearer jwt-bad"))
        .respond_with(ResponseTemplate::new(200).set_body_string("false"))
        .expect(1)
        .mount(&server)
        .await;

    let (app, store) = test_app(&server);
    let view = app
        .services
        .auth
        .sign_in(&LoginForm::new("librarian@library.org", "secret"))
        .await
        .unwrap();

    assert!(!view.is_authenticated);
    assert!(!view.loading);
    assert_eq!(app.session.token(), None);
    assert_eq!(store.get("jwtToken").unwrap(), None);
}

#[tokio::test]
async fn test_invalid_login_form_is_not_sent() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": "x" })))
        .expect(0)
        .mount(&server)
        .await;

    let (app, _) = test_app(&server);
    let result = app
        .services
        .auth
        .sign_in(&LoginForm::new("", ""))
        .await;

    match result {
        Err(AppError::Validation(errors)) => {
            assert!(errors.get("email").is_some());
            assert!(errors.get("password").is_some());
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_save_book_sends_normalized_multipart() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/books"))
        .and(header("authorization", "Bearer jwt-1"))
        .and(body_string_contains("name=\"data\""))
        .and(body_string_contains("\"pricePerDay\":2.5"))
        .and(body_string_contains("\"purchaseCost\":1234.56"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "bookId": 42,
            "title": "Dom Casmurro"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (app, _) = test_app(&server);
    app.session.login("jwt-1").unwrap();

    let saved = app
        .services
        .catalog
        .save_book(None, &book_form())
        .await
        .unwrap()
        .expect("created book");
    assert_eq!(saved.book_id, 42);
}

#[tokio::test]
async fn test_invalid_book_blocks_submission() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/books"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let (app, _) = test_app(&server);
    app.session.login("jwt-1").unwrap();

    let form = BookForm {
        price_per_day: "R$ 0,00".into(),
        ..book_form()
    };
    let result = app.services.catalog.save_book(None, &form).await;

    match result {
        Err(AppError::Validation(errors)) => {
            assert_eq!(errors.len(), 1);
            assert!(errors.get("pricePerDay").is_some());
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_rejected_token_forces_logout() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/clients/get/id/5"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let (app, store) = test_app(&server);
    app.session.login("expired").unwrap();

    let result = app.services.clients.get_client(5).await;
    assert!(matches!(result, Err(AppError::AuthRejected(_))));
    assert!(!app.session.is_authenticated());
    assert_eq!(store.get("jwtToken").unwrap(), None);
}

#[tokio::test]
async fn test_late_rejection_of_previous_token_keeps_new_session() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/books"))
        .and(header("authorization", "Bearer first"))
        .respond_with(ResponseTemplate::new(401).set_delay(Duration::from_millis(300)))
        .expect(1)
        .mount(&server)
        .await;

    let (app, store) = test_app(&server);
    app.session.login("first").unwrap();

    let pending = tokio::spawn({
        let app = app.clone();
        async move { app.services.catalog.list_books(&Default::default()).await }
    });

    tokio::time::sleep(Duration::from_millis(100)).await;
    app.session.login("second").unwrap();

    let result = pending.await.unwrap();
    assert!(matches!(result, Err(AppError::AuthRejected(_))));
    assert!(app.session.is_authenticated());
    assert_eq!(app.session.token().as_deref(), Some("second"));
    assert_eq!(store.get("jwtToken").unwrap(), Some("second".to_string()));
}

#[tokio::test]
async fn test_protected_call_without_session() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/loans/view/all"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let (app, _) = test_app(&server);
    let result = app
        .services
        .loans
        .list_loans(&Default::default())
        .await;
    assert!(matches!(result, Err(AppError::AuthRejected(_))));
}

#[tokio::test]
async fn test_not_found_keeps_session() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/loans/del/3/11"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let (app, _) = test_app(&server);
    app.session.login("jwt-1").unwrap();

    let result = app.services.loans.delete_loan(3, 11).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert!(app.session.is_authenticated());
}
