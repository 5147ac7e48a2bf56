//! Book catalog operations

use tracing::info;

use super::ServiceContext;
use crate::error::{AppError, AppResult};
use crate::forms::BookForm;
use crate::models::{Book, Page, PageRequest};

#[derive(Clone)]
pub struct CatalogService {
    ctx: ServiceContext,
}

impl CatalogService {
    pub(crate) fn new(ctx: ServiceContext) -> Self {
        Self { ctx }
    }

    pub async fn list_books(&self, page: &PageRequest) -> AppResult<Page<Book>> {
        let credentials = self.ctx.credentials()?;
        let result = self.ctx.api.list_books(page, Some(&credentials.token)).await;
        self.ctx.settle(&credentials, result)
    }

    pub async fn get_book(&self, book_id: i64) -> AppResult<Book> {
        let credentials = self.ctx.credentials()?;
        let result = self.ctx.api.get_book(book_id, Some(&credentials.token)).await;
        self.ctx.settle(&credentials, result)
    }

    /// Create (`book_id == None`) or update a book. Nothing is sent while any
    /// field fails validation.
    pub async fn save_book(&self, book_id: Option<i64>, form: &BookForm) -> AppResult<Option<Book>> {
        let payload = form.to_payload().map_err(AppError::Validation)?;
        let credentials = self.ctx.credentials()?;
        let token = Some(credentials.token.as_str());

        let result = match book_id {
            Some(id) => self.ctx.api.update_book(id, &payload, token).await,
            None => self.ctx.api.create_book(&payload, token).await,
        };
        let saved = self.ctx.settle(&credentials, result)?;
        info!(book_id = ?book_id, title = %payload.title, "book saved");
        Ok(saved)
    }

    pub async fn delete_book(&self, book_id: i64) -> AppResult<()> {
        let credentials = self.ctx.credentials()?;
        let result = self.ctx.api.delete_book(book_id, Some(&credentials.token)).await;
        self.ctx.settle(&credentials, result)?;
        info!(book_id, "book deleted");
        Ok(())
    }
}
