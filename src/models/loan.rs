//! Loan model and references to the borrowed book and the borrower

use serde::{Deserialize, Serialize};

/// Reference to a book inside a loan
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookRef {
    pub book_id: i64,
}

/// Reference to a client inside a loan
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientRef {
    pub client_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document: Option<String>,
}

/// Loan with the figures computed by the API (cost, status, days)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Loan {
    pub loan_id: i64,
    pub book: Option<BookRef>,
    pub client: Option<ClientRef>,
    pub book_title: Option<String>,
    pub loan_start_date: Option<String>,
    pub estimate_loan_return_date: Option<String>,
    pub loan_return_date: Option<String>,
    pub interest_rate_per_day: Option<f64>,
    pub total_loan_cost: Option<f64>,
    pub loan_status: Option<String>,
    pub loan_days: Option<i64>,
}

impl Loan {
    /// A loan is open until the API records a return date.
    pub fn is_returned(&self) -> bool {
        self.loan_return_date.is_some()
    }
}
