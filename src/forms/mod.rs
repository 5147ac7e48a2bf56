//! Form schemas validated before anything is sent to the API
//!
//! Each form turns raw user input into the payload the API expects, or into a
//! [`FieldErrors`] map with one message per failing input. Submission is
//! blocked while any field fails.

pub mod book;
pub mod client;
pub mod loan;
pub mod login;
pub mod normalize;

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;
use validator::ValidationErrors;

pub use book::{BookForm, BookPayload};
pub use client::{ClientForm, ClientPayload};
pub use loan::{LoanForm, LoanPayload};
pub use login::LoginForm;
pub use normalize::{format_brl, normalize_amount, normalize_field, FieldValue};

/// Field-level error messages, keyed by the input's wire name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(IndexMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message; the first message recorded for a field wins.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// `Ok(value)` when no field failed.
    pub fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, FieldErrors> {
        if self.is_empty() {
            Ok(value())
        } else {
            Err(self)
        }
    }

    /// Collect the messages of a `validator` run, in field-name order.
    pub fn from_validation(result: Result<(), ValidationErrors>) -> Self {
        let mut errors = Self::new();
        if let Err(e) = result {
            let mut fields: Vec<_> = e
                .field_errors()
                .into_iter()
                .map(|(field, errs)| (field.to_string(), errs))
                .collect();
            fields.sort_by(|a, b| a.0.cmp(&b.0));

            for (field, errs) in fields {
                if let Some(first) = errs.first() {
                    let message = first
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| first.code.to_string());
                    errors.add(field, message);
                }
            }
        }
        errors
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|(field, message)| format!("{}: {}", field, message))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}
