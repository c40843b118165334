use std::sync::Arc;

use axum_test::TestServer;
use galleria_api::setup::build_router;
use galleria_api::AppState;
use galleria_core::{Config, UploadPolicy};
use galleria_store::InMemoryStore;

/// Test server over the real router and a seeded in-memory store, with a
/// custom upload policy.
pub fn test_server_with_policy(upload_policy: UploadPolicy) -> TestServer {
    let config = Config::from_env().expect("test configuration");
    let state = AppState {
        store: Arc::new(InMemoryStore::seeded()),
        upload_policy,
    };
    TestServer::new(build_router(&config, state)).expect("test server")
}

pub fn test_server() -> TestServer {
    test_server_with_policy(UploadPolicy::default())
}
