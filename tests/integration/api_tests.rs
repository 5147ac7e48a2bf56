//! ApiClient request shapes and status mapping

use library_admin::{
    api::ApiClient,
    forms::{LoginForm, LoanForm},
    models::PageRequest,
    AppError,
};
use serde_json::json;
use wiremock::matchers::{body_json, body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::test_config;

fn client(server: &MockServer) -> ApiClient {
    ApiClient::new(&test_config(server).api).expect("failed to create client")
}

#[tokio::test]
async fn test_login_returns_token() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({
            "email": "librarian@library.org",
            "password": "secret"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": "jwt-123" })))
        .expect(1)
        .mount(&server)
        .await;

    let token = client(&server)
        .login(&LoginForm::new("librarian@library.org", "secret"))
        .await
        .expect("login failed");
    assert_eq!(token, "jwt-123");
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let result = client(&server)
        .login(&LoginForm::new("librarian@library.org", "wrong"))
        .await;
    assert!(matches!(result, Err(AppError::AuthRejected(_))));
}

#[tokio::test]
async fn test_validate_token_sends_bearer() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/validate-token"))
        .and(header("authorization", "Bearer good"))
        .respond_with(ResponseTemplate::new(200).set_body_string("true"))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/auth/validate-token"))
        .and(header("authorization", "Bearer stale"))
        .respond_with(ResponseTemplate::new(200).set_body_string("false"))
        .mount(&server)
        .await;

    let client = client(&server);
    assert!(client.validate_token("good").await.unwrap());
    assert!(!client.validate_token("stale").await.unwrap());
}

#[tokio::test]
async fn test_list_books_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/books"))
        .and(query_param("page", "1"))
        .and(query_param("size", "10"))
        .and(query_param("title", "Dom"))
        .and(header("authorization", "Bearer tok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": [
                { "bookId": 1, "title": "Dom Casmurro", "author": "Machado de Assis", "availableStock": 2 }
            ],
            "number": 1,
            "size": 10,
            "totalPages": 3,
            "totalElements": 21
        })))
        .mount(&server)
        .await;

    let request = PageRequest::default().with_search("Dom").next();
    let page = client(&server)
        .list_books(&request, Some("tok"))
        .await
        .expect("list failed");

    assert_eq!(page.content.len(), 1);
    assert_eq!(page.content[0].title, "Dom Casmurro");
    assert!(page.has_next());
    assert!(page.has_previous());
}

#[tokio::test]
async fn test_get_book_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/books/99"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({ "message": "Book not found" })),
        )
        .mount(&server)
        .await;

    let result = client(&server).get_book(99, Some("tok")).await;
    match result {
        Err(AppError::NotFound(message)) => assert_eq!(message, "Book not found"),
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn test_delete_book_gone_is_success() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/books/7"))
        .respond_with(ResponseTemplate::new(410))
        .expect(1)
        .mount(&server)
        .await;

    client(&server)
        .delete_book(7, Some("tok"))
        .await
        .expect("410 should count as deleted");
}

#[tokio::test]
async fn test_delete_book_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/books/7"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let result = client(&server).delete_book(7, Some("tok")).await;
    assert!(matches!(result, Err(AppError::Api { status: 500, .. })));
}

#[tokio::test]
async fn test_find_client_by_document() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/clients/get/document/12345678900"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "clientId": 5,
            "document": "12345678900",
            "name": "Ana Souza",
            "loans": []
        })))
        .mount(&server)
        .await;

    let found = client(&server)
        .find_client_by_document(" 12345678900 ", Some("tok"))
        .await
        .expect("lookup failed");
    assert_eq!(found.client_id, 5);
    assert_eq!(found.name, "Ana Souza");
}

#[tokio::test]
async fn test_create_loan_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/loans"))
        .and(body_json(json!({
            "book": { "bookId": 3 },
            "client": { "clientId": 5 },
            "estimateLoanReturnDate": "2024-06-01",
            "interestRatePerDay": 0.5
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let payload = LoanForm {
        book_id: Some(3),
        client_id: Some(5),
        estimate_loan_return_date: "2024-06-01".into(),
        interest_rate_per_day: "0,5".into(),
    }
    .to_payload()
    .unwrap();

    let created = client(&server)
        .create_loan(&payload, Some("tok"))
        .await
        .expect("create failed");
    assert!(created.is_none());
}

#[tokio::test]
async fn test_return_loan() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/loans/edit/3/11"))
        .and(header("authorization", "Bearer tok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "loanId": 11,
            "loanReturnDate": "2024-06-02T09:00:00",
            "totalLoanCost": 7.5,
            "loanStatus": "FINALIZADO"
        })))
        .mount(&server)
        .await;

    let loan = client(&server)
        .return_loan(3, 11, Some("tok"))
        .await
        .expect("return failed")
        .expect("loan body");
    assert!(loan.is_returned());
    assert_eq!(loan.total_loan_cost, Some(7.5));
}

#[tokio::test]
async fn test_update_client_accepted() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/clients/edit/5"))
        .and(body_string_contains("\"name\":\"Ana Lima\""))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&server)
        .await;

    let payload = library_admin::forms::ClientForm {
        document: "123".into(),
        name: "Ana Lima".into(),
    }
    .to_payload()
    .unwrap();

    client(&server)
        .update_client(5, &payload, Some("tok"))
        .await
        .expect("update failed");
}
