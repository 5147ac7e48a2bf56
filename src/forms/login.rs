//! Login form

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::FieldErrors;

/// Credentials posted to `/auth/login`
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct LoginForm {
    #[validate(email(message = "E-mail is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn check(&self) -> Result<(), FieldErrors> {
        FieldErrors::from_validation(self.validate()).into_result(|| ())
    }
}
