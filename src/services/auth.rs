//! Login, logout and session restore

use tracing::info;

use super::ServiceContext;
use crate::error::{AppError, AppResult};
use crate::forms::LoginForm;
use crate::session::SessionView;

#[derive(Clone)]
pub struct AuthService {
    ctx: ServiceContext,
}

impl AuthService {
    pub(crate) fn new(ctx: ServiceContext) -> Self {
        Self { ctx }
    }

    /// Validate the credentials, exchange them for a token and open the session.
    ///
    /// The session is open as soon as the token arrives; the new token is then
    /// confirmed with the API like any other token change, and the returned
    /// view carries the outcome of that check.
    pub async fn sign_in(&self, form: &LoginForm) -> AppResult<SessionView> {
        form.check().map_err(AppError::Validation)?;

        let token = self.ctx.api.login(form).await?;
        self.ctx.session.login(token)?;
        info!(email = %form.email, "signed in");
        Ok(self.ctx.session.validate().await)
    }

    pub fn sign_out(&self) -> AppResult<()> {
        self.ctx.session.logout()
    }

    /// Reload the persisted token and confirm it with the API.
    pub async fn restore(&self) -> AppResult<SessionView> {
        self.ctx.session.restore().await
    }
}
