//! Client (borrower) model

use serde::{Deserialize, Serialize};

use super::loan::Loan;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Client {
    pub client_id: i64,
    /// Identity document number
    pub document: String,
    pub name: String,
    pub loans: Vec<Loan>,
}
