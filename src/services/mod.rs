//! Page-level operations: validate forms, call the API with the session token

pub mod auth;
pub mod catalog;
pub mod clients;
pub mod loans;

use std::sync::Arc;

use crate::{
    api::ApiClient,
    error::{AppError, AppResult},
    session::{route, Credentials, SessionGuard},
};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub auth: auth::AuthService,
    pub catalog: catalog::CatalogService,
    pub clients: clients::ClientsService,
    pub loans: loans::LoansService,
}

impl Services {
    pub fn new(api: ApiClient, session: Arc<SessionGuard>) -> Self {
        let ctx = ServiceContext { api, session };
        Self {
            auth: auth::AuthService::new(ctx.clone()),
            catalog: catalog::CatalogService::new(ctx.clone()),
            clients: clients::ClientsService::new(ctx.clone()),
            loans: loans::LoansService::new(ctx),
        }
    }
}

/// API client and session shared by every service
#[derive(Clone)]
pub(crate) struct ServiceContext {
    pub(crate) api: ApiClient,
    pub(crate) session: Arc<SessionGuard>,
}

impl ServiceContext {
    /// Credentials of a session allowed past protected routes.
    pub(crate) fn credentials(&self) -> AppResult<Credentials> {
        match route::protected(self.session.view()) {
            route::RouteDecision::Allow => self
                .session
                .credentials()
                .ok_or_else(|| AppError::AuthRejected("No session token".to_string())),
            route::RouteDecision::Loading => Err(AppError::AuthRejected(
                "Session is still being validated".to_string(),
            )),
            route::RouteDecision::Redirect(_) => {
                Err(AppError::AuthRejected("Not logged in".to_string()))
            }
        }
    }

    /// Log out when the API refused the token the call was made with, then
    /// pass the result on.
    pub(crate) fn settle<T>(&self, credentials: &Credentials, result: AppResult<T>) -> AppResult<T> {
        if let Err(e) = &result {
            self.session.recover_from(e, credentials);
        }
        result
    }
}
