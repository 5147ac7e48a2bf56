//! Loan endpoints

use reqwest::Method;

use super::{decode_optional, ApiClient};
use crate::error::AppResult;
use crate::forms::LoanPayload;
use crate::models::{Loan, Page, PageRequest};

impl ApiClient {
    pub async fn list_loans(&self, page: &PageRequest, token: Option<&str>) -> AppResult<Page<Loan>> {
        let builder = self
            .request(Method::GET, "/loans/view/all", token)
            .query(&page.query("bookTitle"));
        self.send_json(builder).await
    }

    pub async fn get_loan(&self, book_id: i64, loan_id: i64, token: Option<&str>) -> AppResult<Loan> {
        let builder = self.request(
            Method::GET,
            &format!("/loans/view/{}/{}", book_id, loan_id),
            token,
        );
        self.send_json(builder).await
    }

    pub async fn create_loan(
        &self,
        payload: &LoanPayload,
        token: Option<&str>,
    ) -> AppResult<Option<Loan>> {
        let builder = self.request(Method::POST, "/loans", token).json(payload);
        let response = self.send(builder).await?;
        decode_optional(response).await
    }

    pub async fn update_loan(
        &self,
        loan_id: i64,
        payload: &LoanPayload,
        token: Option<&str>,
    ) -> AppResult<Option<Loan>> {
        let builder = self
            .request(Method::PUT, &format!("/loans/edit/{}", loan_id), token)
            .json(payload);
        let response = self.send(builder).await?;
        decode_optional(response).await
    }

    /// Record the return of the borrowed book; the API closes the loan and
    /// computes its final cost.
    pub async fn return_loan(
        &self,
        book_id: i64,
        loan_id: i64,
        token: Option<&str>,
    ) -> AppResult<Option<Loan>> {
        let builder = self.request(
            Method::PUT,
            &format!("/loans/edit/{}/{}", book_id, loan_id),
            token,
        );
        let response = self.send(builder).await?;
        decode_optional(response).await
    }

    pub async fn delete_loan(&self, book_id: i64, loan_id: i64, token: Option<&str>) -> AppResult<()> {
        let builder = self.request(
            Method::DELETE,
            &format!("/loans/del/{}/{}", book_id, loan_id),
            token,
        );
        self.send(builder).await?;
        Ok(())
    }
}
