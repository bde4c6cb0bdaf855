use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, instrument};

use crate::{
    app_error::{AppError, AppResult},
    application::validators::RegisterWaitlistInput,
    domain::entities::waitlist_registration::WaitlistRegistration,
};

// ============================================================================
// Repository Trait
// ============================================================================

#[async_trait]
pub trait WaitlistRepoTrait: Send + Sync {
    /// Store a new registration with the next id and the current time.
    /// Fails with `AppError::AlreadyRegistered` if the email is already present;
    /// the check and the insert happen as one step.
    async fn create(&self, email: &str) -> AppResult<WaitlistRegistration>;

    async fn get_by_email(&self, email: &str) -> AppResult<Option<WaitlistRegistration>>;

    async fn count(&self) -> AppResult<i64>;
}

// ============================================================================
// Use Cases
// ============================================================================

/// Outcome of a successful signup.
#[derive(Debug, Clone)]
pub struct RegistrationReceipt {
    pub registration: WaitlistRegistration,
    /// Waitlist size right after the insert.
    pub count: i64,
}

#[derive(Clone)]
pub struct WaitlistUseCases {
    repo: Arc<dyn WaitlistRepoTrait>,
}

impl WaitlistUseCases {
    pub fn new(repo: Arc<dyn WaitlistRepoTrait>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn count(&self) -> AppResult<i64> {
        self.repo.count().await
    }

    /// Add a validated email to the waitlist and report the new total.
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn register(&self, input: RegisterWaitlistInput) -> AppResult<RegistrationReceipt> {
        // Fast path; `create` still rejects a duplicate that races past this check.
        if self.repo.get_by_email(&input.email).await?.is_some() {
            debug!("Email already on waitlist");
            return Err(AppError::AlreadyRegistered);
        }

        let registration = self.repo.create(&input.email).await.inspect_err(|err| {
            if matches!(err, AppError::AlreadyRegistered) {
                debug!("Concurrent registration won the insert");
            }
        })?;
        let count = self.repo.count().await?;

        info!(id = registration.id, count, "Waitlist registration created");

        Ok(RegistrationReceipt {
            registration,
            count,
        })
    }
}
