use std::sync::Arc;

use axum::extract::FromRef;

use crate::{
    infra::config::AppConfig,
    use_cases::{user::UserRepoTrait, waitlist::WaitlistUseCases},
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub waitlist_use_cases: Arc<WaitlistUseCases>,
    /// Not routed yet; held so the account store shares the waitlist's lifecycle.
    pub user_repo: Arc<dyn UserRepoTrait>,
}

impl FromRef<AppState> for Arc<WaitlistUseCases> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.waitlist_use_cases.clone()
    }
}
