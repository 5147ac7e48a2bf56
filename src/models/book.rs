//! Book (catalog entry) model

use serde::{Deserialize, Serialize};

use super::loan::Loan;

/// Book as returned by the API, both in list pages and detail views
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Book {
    pub book_id: i64,
    pub title: String,
    pub author: String,
    pub publisher: String,
    pub genre: Option<String>,
    pub language: Option<String>,
    pub synopsis: Option<String>,
    pub edition: Option<String>,
    pub price_per_day: Option<f64>,
    pub available_stock: Option<i64>,
    pub publish_year: Option<i64>,
    pub purchase_cost: Option<f64>,
    pub cover_book_image: Option<String>,
    // Server-managed fields
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub availability_status: Option<bool>,
    pub total_profit: Option<f64>,
    pub loans: Vec<Loan>,
}
