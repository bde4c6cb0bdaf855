use async_trait::async_trait;
use sqlx::Row;

use crate::{
    adapters::persistence::{PostgresPersistence, is_unique_violation},
    app_error::{AppError, AppResult},
    application::use_cases::waitlist::WaitlistRepoTrait,
    domain::entities::waitlist_registration::WaitlistRegistration,
};

fn row_to_registration(row: sqlx::postgres::PgRow) -> WaitlistRegistration {
    WaitlistRegistration {
        id: row.get("id"),
        email: row.get("email"),
        registered_at: row.get("registered_at"),
    }
}

#[async_trait]
impl WaitlistRepoTrait for PostgresPersistence {
    async fn create(&self, email: &str) -> AppResult<WaitlistRegistration> {
        let row = sqlx::query(
            r#"
            INSERT INTO waitlist_registrations (email)
            VALUES ($1)
            RETURNING id, email, registered_at
            "#,
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| {
            // The UNIQUE constraint is what makes check-and-insert atomic here.
            if is_unique_violation(&err) {
                AppError::AlreadyRegistered
            } else {
                AppError::from(err)
            }
        })?;

        Ok(row_to_registration(row))
    }

    async fn get_by_email(&self, email: &str) -> AppResult<Option<WaitlistRegistration>> {
        let row = sqlx::query(
            "SELECT id, email, registered_at FROM waitlist_registrations WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok(row.map(row_to_registration))
    }

    async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM waitlist_registrations")
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::from)?;

        Ok(count)
    }
}
