//! Integration tests against a mocked library API

mod api_tests;
mod services_tests;
mod session_tests;

use std::sync::Arc;

use library_admin::{
    config::{ApiConfig, AppConfig},
    storage::{MemoryStore, TokenStore},
    AdminApp,
};
use wiremock::MockServer;

pub fn test_config(server: &MockServer) -> AppConfig {
    AppConfig {
        api: ApiConfig {
            base_url: server.uri(),
            timeout_secs: 5,
        },
        ..AppConfig::default()
    }
}

/// Application wired to the mock server, with an in-memory session store.
pub fn test_app(server: &MockServer) -> (AdminApp, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let app = AdminApp::with_store(test_config(server), store.clone() as Arc<dyn TokenStore>)
        .expect("failed to build app");
    (app, store)
}
