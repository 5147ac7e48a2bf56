//! Client form

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::FieldErrors;
use crate::models::Client;

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct ClientForm {
    #[validate(length(min = 1, message = "Identity document is required"))]
    pub document: String,
    #[validate(length(min = 1, message = "Client name is required"))]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientPayload {
    pub document: String,
    pub name: String,
}

impl ClientForm {
    pub fn to_payload(&self) -> Result<ClientPayload, FieldErrors> {
        FieldErrors::from_validation(self.validate()).into_result(|| ClientPayload {
            document: self.document.trim().to_string(),
            name: self.name.trim().to_string(),
        })
    }
}

impl From<&Client> for ClientForm {
    fn from(client: &Client) -> Self {
        Self {
            document: client.document.clone(),
            name: client.name.clone(),
        }
    }
}
