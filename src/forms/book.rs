//! Book form: required text fields plus normalized monetary/numeric fields

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::normalize::{normalize_field, FieldValue};
use super::FieldErrors;
use crate::models::{Book, Genre};

/// Raw book form input
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct BookForm {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Author name is required"))]
    pub author: String,
    #[validate(length(min = 1, message = "Publisher name is required"))]
    pub publisher: String,
    pub genre: String,
    pub language: String,
    pub synopsis: String,
    pub edition: String,
    pub price_per_day: FieldValue,
    pub available_stock: FieldValue,
    pub publish_year: FieldValue,
    pub purchase_cost: FieldValue,
}

/// Book body sent on create and update; server-managed fields are left out
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookPayload {
    pub title: String,
    pub author: String,
    pub publisher: String,
    pub genre: String,
    pub language: String,
    pub synopsis: String,
    pub edition: String,
    pub price_per_day: f64,
    pub available_stock: f64,
    pub publish_year: f64,
    pub purchase_cost: f64,
}

struct NumericField {
    name: &'static str,
    required: &'static str,
    invalid: &'static str,
}

const PRICE_PER_DAY: NumericField = NumericField {
    name: "pricePerDay",
    required: "Price per day is required",
    invalid: "Price per day must be a valid number in the expected format",
};

const AVAILABLE_STOCK: NumericField = NumericField {
    name: "availableStock",
    required: "Stock is required",
    invalid: "Stock must be a valid number in the expected format",
};

const PUBLISH_YEAR: NumericField = NumericField {
    name: "publishYear",
    required: "Publication year is required",
    invalid: "Publication year must be a valid number in the expected format",
};

const PURCHASE_COST: NumericField = NumericField {
    name: "purchaseCost",
    required: "Purchase cost is required",
    invalid: "Purchase cost must be a valid number in the expected format",
};

impl BookForm {
    /// Validate every field and build the payload, or report all failing fields.
    pub fn to_payload(&self) -> Result<BookPayload, FieldErrors> {
        let mut errors = FieldErrors::from_validation(self.validate());

        if !self.genre.is_empty() && self.genre.parse::<Genre>().is_err() {
            errors.add("genre", "Unknown genre");
        }

        let mut numeric = |field: &NumericField, value: &FieldValue| -> f64 {
            match normalize_field(value, field.required, field.invalid) {
                Ok(n) => n,
                Err(message) => {
                    errors.add(field.name, message);
                    0.0
                }
            }
        };

        let price_per_day = numeric(&PRICE_PER_DAY, &self.price_per_day);
        let available_stock = numeric(&AVAILABLE_STOCK, &self.available_stock);
        let publish_year = numeric(&PUBLISH_YEAR, &self.publish_year);
        let purchase_cost = numeric(&PURCHASE_COST, &self.purchase_cost);

        errors.into_result(|| BookPayload {
            title: self.title.clone(),
            author: self.author.clone(),
            publisher: self.publisher.clone(),
            genre: self.genre.clone(),
            language: self.language.clone(),
            synopsis: self.synopsis.clone(),
            edition: self.edition.clone(),
            price_per_day,
            available_stock,
            publish_year,
            purchase_cost,
        })
    }
}

/// Prefill the form from a book fetched for editing.
impl From<&Book> for BookForm {
    fn from(book: &Book) -> Self {
        let number = |v: Option<f64>| v.map(FieldValue::Number).unwrap_or_default();
        Self {
            title: book.title.clone(),
            author: book.author.clone(),
            publisher: book.publisher.clone(),
            genre: book.genre.clone().unwrap_or_default(),
            language: book.language.clone().unwrap_or_default(),
            synopsis: book.synopsis.clone().unwrap_or_default(),
            edition: book.edition.clone().unwrap_or_default(),
            price_per_day: number(book.price_per_day),
            available_stock: number(book.available_stock.map(|v| v as f64)),
            publish_year: number(book.publish_year.map(|v| v as f64)),
            purchase_cost: number(book.purchase_cost),
        }
    }
}
