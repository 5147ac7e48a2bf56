//! Loan management operations

use tracing::info;

use super::ServiceContext;
use crate::error::{AppError, AppResult};
use crate::forms::LoanForm;
use crate::models::{Loan, Page, PageRequest};

#[derive(Clone)]
pub struct LoansService {
    ctx: ServiceContext,
}

impl LoansService {
    pub(crate) fn new(ctx: ServiceContext) -> Self {
        Self { ctx }
    }

    pub async fn list_loans(&self, page: &PageRequest) -> AppResult<Page<Loan>> {
        let credentials = self.ctx.credentials()?;
        let result = self.ctx.api.list_loans(page, Some(&credentials.token)).await;
        self.ctx.settle(&credentials, result)
    }

    pub async fn get_loan(&self, book_id: i64, loan_id: i64) -> AppResult<Loan> {
        let credentials = self.ctx.credentials()?;
        let result = self
            .ctx
            .api
            .get_loan(book_id, loan_id, Some(&credentials.token))
            .await;
        self.ctx.settle(&credentials, result)
    }

    /// Open a new loan (`loan_id == None`) or edit an existing one.
    pub async fn save_loan(&self, loan_id: Option<i64>, form: &LoanForm) -> AppResult<Option<Loan>> {
        let payload = form.to_payload().map_err(AppError::Validation)?;
        let credentials = self.ctx.credentials()?;
        let token = Some(credentials.token.as_str());

        let result = match loan_id {
            Some(id) => self.ctx.api.update_loan(id, &payload, token).await,
            None => self.ctx.api.create_loan(&payload, token).await,
        };
        let saved = self.ctx.settle(&credentials, result)?;
        info!(loan_id = ?loan_id, book_id = payload.book.book_id, "loan saved");
        Ok(saved)
    }

    /// Mark the borrowed book as returned.
    pub async fn return_loan(&self, book_id: i64, loan_id: i64) -> AppResult<Option<Loan>> {
        let credentials = self.ctx.credentials()?;
        let result = self
            .ctx
            .api
            .return_loan(book_id, loan_id, Some(&credentials.token))
            .await;
        let returned = self.ctx.settle(&credentials, result)?;
        info!(book_id, loan_id, "book returned");
        Ok(returned)
    }

    pub async fn delete_loan(&self, book_id: i64, loan_id: i64) -> AppResult<()> {
        let credentials = self.ctx.credentials()?;
        let result = self
            .ctx
            .api
            .delete_loan(book_id, loan_id, Some(&credentials.token))
            .await;
        self.ctx.settle(&credentials, result)?;
        info!(book_id, loan_id, "loan deleted");
        Ok(())
    }
}
