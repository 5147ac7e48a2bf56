//! Client endpoints

use reqwest::Method;

use super::{decode_optional, ApiClient};
use crate::error::AppResult;
use crate::forms::ClientPayload;
use crate::models::{Client, Page, PageRequest};

impl ApiClient {
    pub async fn list_clients(
        &self,
        page: &PageRequest,
        token: Option<&str>,
    ) -> AppResult<Page<Client>> {
        let builder = self
            .request(Method::GET, "/clients/get/all", token)
            .query(&page.query("name"));
        self.send_json(builder).await
    }

    /// Fetch a client with its loans.
    pub async fn get_client(&self, client_id: i64, token: Option<&str>) -> AppResult<Client> {
        let builder = self.request(Method::GET, &format!("/clients/get/id/{}", client_id), token);
        self.send_json(builder).await
    }

    /// Look a client up by identity document, as done before opening a loan.
    pub async fn find_client_by_document(
        &self,
        document: &str,
        token: Option<&str>,
    ) -> AppResult<Client> {
        let builder = self.request(
            Method::GET,
            &format!("/clients/get/document/{}", document.trim()),
            token,
        );
        self.send_json(builder).await
    }

    pub async fn create_client(
        &self,
        payload: &ClientPayload,
        token: Option<&str>,
    ) -> AppResult<Option<Client>> {
        let builder = self.request(Method::POST, "/clients", token).json(payload);
        let response = self.send(builder).await?;
        decode_optional(response).await
    }

    pub async fn update_client(
        &self,
        client_id: i64,
        payload: &ClientPayload,
        token: Option<&str>,
    ) -> AppResult<Option<Client>> {
        let builder = self
            .request(Method::PUT, &format!("/clients/edit/{}", client_id), token)
            .json(payload);
        let response = self.send(builder).await?;
        decode_optional(response).await
    }

    /// Delete a client; the API also drops the client's loans.
    pub async fn delete_client(&self, client_id: i64, token: Option<&str>) -> AppResult<()> {
        let builder = self.request(Method::DELETE, &format!("/clients/del/{}", client_id), token);
        self.send(builder).await?;
        Ok(())
    }
}
