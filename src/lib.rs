//! Library Admin
//!
//! Librarian-facing administration client for the library management REST
//! API: books, clients and loans, behind a bearer-token session.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod forms;
pub mod models;
pub mod services;
pub mod session;
pub mod storage;

pub use crate::config::AppConfig;
pub use error::{AppError, AppResult};

use api::ApiClient;
use session::SessionGuard;
use storage::{FileStore, TokenStore};

/// Application root: owns the session and hands it to collaborators
#[derive(Clone)]
pub struct AdminApp {
    pub config: Arc<AppConfig>,
    pub session: Arc<SessionGuard>,
    pub services: Arc<services::Services>,
}

impl AdminApp {
    /// Build the application with the session persisted under `config.session.dir`.
    pub fn new(config: AppConfig) -> AppResult<Self> {
        let store = Arc::new(FileStore::new(config.session.dir.clone()));
        Self::with_store(config, store)
    }

    pub fn with_store(config: AppConfig, store: Arc<dyn TokenStore>) -> AppResult<Self> {
        let api = ApiClient::new(&config.api)?;
        let session = Arc::new(SessionGuard::with_key(
            store,
            Arc::new(api.clone()),
            config.session.key.clone(),
        ));
        let services = services::Services::new(api, session.clone());

        Ok(Self {
            config: Arc::new(config),
            session,
            services: Arc::new(services),
        })
    }
}
