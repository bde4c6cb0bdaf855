//! Stub repositories for error-path tests.

use async_trait::async_trait;

use crate::{
    app_error::{AppError, AppResult},
    application::use_cases::waitlist::WaitlistRepoTrait,
    domain::entities::waitlist_registration::WaitlistRegistration,
};

/// Waitlist repo whose every call fails as if the database connection dropped.
#[derive(Default)]
pub struct FailingWaitlistRepo;

fn connection_lost() -> AppError {
    AppError::Database("connection reset by peer".into())
}

#[async_trait]
impl WaitlistRepoTrait for FailingWaitlistRepo {
    async fn create(&self, _email: &str) -> AppResult<WaitlistRegistration> {
        Err(connection_lost())
    }

    async fn get_by_email(&self, _email: &str) -> AppResult<Option<WaitlistRegistration>> {
        Err(connection_lost())
    }

    async fn count(&self) -> AppResult<i64> {
        Err(connection_lost())
    }
}
