//! Book endpoints

use reqwest::multipart::Form;
use reqwest::{Method, StatusCode};
use tracing::debug;

use super::{decode_optional, ApiClient};
use crate::error::{AppError, AppResult};
use crate::forms::BookPayload;
use crate::models::{Book, Page, PageRequest};

impl ApiClient {
    /// List books, optionally filtered by title.
    pub async fn list_books(&self, page: &PageRequest, token: Option<&str>) -> AppResult<Page<Book>> {
        let builder = self
            .request(Method::GET, "/books", token)
            .query(&page.query("title"));
        self.send_json(builder).await
    }

    pub async fn get_book(&self, book_id: i64, token: Option<&str>) -> AppResult<Book> {
        let builder = self.request(Method::GET, &format!("/books/{}", book_id), token);
        self.send_json(builder).await
    }

    /// Create a book; the payload travels as the JSON `data` part of a multipart form.
    pub async fn create_book(&self, payload: &BookPayload, token: Option<&str>) -> AppResult<Option<Book>> {
        let builder = self
            .request(Method::POST, "/books", token)
            .multipart(book_form(payload)?);
        let response = self.send(builder).await?;
        decode_optional(response).await
    }

    pub async fn update_book(
        &self,
        book_id: i64,
        payload: &BookPayload,
        token: Option<&str>,
    ) -> AppResult<Option<Book>> {
        let builder = self
            .request(Method::PUT, &format!("/books/{}", book_id), token)
            .multipart(book_form(payload)?);
        let response = self.send(builder).await?;
        decode_optional(response).await
    }

    /// Delete a book. The API answers `410 Gone` once the book is removed,
    /// which counts as success.
    pub async fn delete_book(&self, book_id: i64, token: Option<&str>) -> AppResult<()> {
        let builder = self.request(Method::DELETE, &format!("/books/{}", book_id), token);
        match self.send(builder).await {
            Ok(_) => Ok(()),
            Err(AppError::Api { status, .. }) if status == StatusCode::GONE.as_u16() => {
                debug!(book_id, "book deleted (410)");
                Ok(())
            }
            Err(e) => Err(e),
        }
    }
}

fn book_form(payload: &BookPayload) -> AppResult<Form> {
    Ok(Form::new().text("data", serde_json::to_string(payload)?))
}
