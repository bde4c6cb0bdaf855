//! Test app state builder for HTTP-level integration testing.

use std::sync::Arc;

use axum::http::HeaderValue;

use crate::{
    adapters::{http::app_state::AppState, persistence::memory::InMemoryPersistence},
    application::use_cases::{
        user::UserRepoTrait,
        waitlist::{WaitlistRepoTrait, WaitlistUseCases},
    },
    infra::config::{AppConfig, StoreBackend},
};

/// Fixed RNG seed so baseline timestamps are identical between runs.
const TEST_RNG_SEED: u64 = 42;

/// Builder for creating `AppState` backed by an in-memory store.
///
/// # Example
///
/// ```ignore
/// let app_state = TestAppStateBuilder::new().with_seed_count(0).build();
/// ```
pub struct TestAppStateBuilder {
    seed_count: i64,
    waitlist_repo: Option<Arc<dyn WaitlistRepoTrait>>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestAppStateBuilder {
    /// Builder with the production baseline of 1947 registrations.
    pub fn new() -> Self {
        Self {
            seed_count: crate::adapters::persistence::memory::BASELINE_REGISTRATIONS,
            waitlist_repo: None,
        }
    }

    pub fn with_seed_count(mut self, seed_count: i64) -> Self {
        self.seed_count = seed_count;
        self
    }

    /// Replace the waitlist store (e.g. with a failing stub).
    pub fn with_waitlist_repo(mut self, repo: impl WaitlistRepoTrait + 'static) -> Self {
        self.waitlist_repo = Some(Arc::new(repo));
        self
    }

    /// Build the state and also hand back the in-memory store for assertions.
    pub fn build_with_store(self) -> (AppState, Arc<InMemoryPersistence>) {
        let store = Arc::new(InMemoryPersistence::seeded(
            self.seed_count,
            Some(TEST_RNG_SEED),
        ));
        let waitlist_repo = self
            .waitlist_repo
            .unwrap_or_else(|| store.clone() as Arc<dyn WaitlistRepoTrait>);

        let app_state = AppState {
            config: Arc::new(test_config(self.seed_count)),
            waitlist_use_cases: Arc::new(WaitlistUseCases::new(waitlist_repo)),
            user_repo: store.clone() as Arc<dyn UserRepoTrait>,
        };

        (app_state, store)
    }

    pub fn build(self) -> AppState {
        self.build_with_store().0
    }
}

fn test_config(seed_count: i64) -> AppConfig {
    AppConfig {
        bind_addr: "127.0.0.1:0".parse().unwrap(),
        cors_origin: HeaderValue::from_static("http://localhost:5173"),
        store_backend: StoreBackend::Memory,
        database_url: None,
        seed_count,
        seed_rng: Some(TEST_RNG_SEED),
        log_file: None,
    }
}
