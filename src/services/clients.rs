//! Client (borrower) operations

use tracing::info;

use super::ServiceContext;
use crate::error::{AppError, AppResult};
use crate::forms::ClientForm;
use crate::models::{Client, Page, PageRequest};

#[derive(Clone)]
pub struct ClientsService {
    ctx: ServiceContext,
}

impl ClientsService {
    pub(crate) fn new(ctx: ServiceContext) -> Self {
        Self { ctx }
    }

    pub async fn list_clients(&self, page: &PageRequest) -> AppResult<Page<Client>> {
        let credentials = self.ctx.credentials()?;
        let result = self.ctx.api.list_clients(page, Some(&credentials.token)).await;
        self.ctx.settle(&credentials, result)
    }

    pub async fn get_client(&self, client_id: i64) -> AppResult<Client> {
        let credentials = self.ctx.credentials()?;
        let result = self.ctx.api.get_client(client_id, Some(&credentials.token)).await;
        self.ctx.settle(&credentials, result)
    }

    pub async fn find_by_document(&self, document: &str) -> AppResult<Client> {
        let credentials = self.ctx.credentials()?;
        let result = self
            .ctx
            .api
            .find_client_by_document(document, Some(&credentials.token))
            .await;
        self.ctx.settle(&credentials, result)
    }

    pub async fn save_client(
        &self,
        client_id: Option<i64>,
        form: &ClientForm,
    ) -> AppResult<Option<Client>> {
        let payload = form.to_payload().map_err(AppError::Validation)?;
        let credentials = self.ctx.credentials()?;
        let token = Some(credentials.token.as_str());

        let result = match client_id {
            Some(id) => self.ctx.api.update_client(id, &payload, token).await,
            None => self.ctx.api.create_client(&payload, token).await,
        };
        let saved = self.ctx.settle(&credentials, result)?;
        info!(client_id = ?client_id, "client saved");
        Ok(saved)
    }

    pub async fn delete_client(&self, client_id: i64) -> AppResult<()> {
        let credentials = self.ctx.credentials()?;
        let result = self.ctx.api.delete_client(client_id, Some(&credentials.token)).await;
        self.ctx.settle(&credentials, result)?;
        info!(client_id, "client deleted");
        Ok(())
    }
}
