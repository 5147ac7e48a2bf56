//! Loan form

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::normalize::{normalize_field, FieldValue};
use super::FieldErrors;
use crate::models::{BookRef, ClientRef};

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoanForm {
    pub book_id: Option<i64>,
    /// Borrower, usually found by identity document first
    pub client_id: Option<i64>,
    /// `YYYY-MM-DD`
    pub estimate_loan_return_date: String,
    pub interest_rate_per_day: FieldValue,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanPayload {
    pub book: BookRef,
    pub client: ClientRef,
    pub estimate_loan_return_date: NaiveDate,
    pub interest_rate_per_day: f64,
}

impl LoanForm {
    pub fn to_payload(&self) -> Result<LoanPayload, FieldErrors> {
        let mut errors = FieldErrors::new();

        if self.book_id.is_none() {
            errors.add("bookId", "A book must be selected");
        }
        if self.client_id.is_none() {
            errors.add("clientId", "A client must be selected");
        }

        let return_date = self.estimate_loan_return_date.trim();
        let estimate_loan_return_date = if return_date.is_empty() {
            errors.add("estimateLoanReturnDate", "Estimated return date is required");
            None
        } else {
            match NaiveDate::parse_from_str(return_date, DATE_FORMAT) {
                Ok(date) => Some(date),
                Err(_) => {
                    errors.add(
                        "estimateLoanReturnDate",
                        "Estimated return date must use the YYYY-MM-DD format",
                    );
                    None
                }
            }
        };

        let interest_rate_per_day = normalize_field(
            &self.interest_rate_per_day,
            "Interest rate per day is required",
            "Interest rate per day must be a valid number in the expected format",
        )
        .map_err(|message| errors.add("interestRatePerDay", message))
        .ok();

        match (
            self.book_id,
            self.client_id,
            estimate_loan_return_date,
            interest_rate_per_day,
        ) {
            (Some(book_id), Some(client_id), Some(date), Some(rate)) if errors.is_empty() => {
                Ok(LoanPayload {
                    book: BookRef { book_id },
                    client: ClientRef {
                        client_id,
                        ..ClientRef::default()
                    },
                    estimate_loan_return_date: date,
                    interest_rate_per_day: rate,
                })
            }
            _ => Err(errors),
        }
    }
}
