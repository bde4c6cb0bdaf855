use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use sqlx::Row;

use crate::{
    adapters::persistence::{PostgresPersistence, is_unique_violation},
    app_error::{AppError, AppResult},
    application::use_cases::user::UserRepoTrait,
    domain::entities::user::User,
};

// Passwords are stored as given; hashing belongs to whatever auth flow adopts this table.
fn row_to_user(row: sqlx::postgres::PgRow) -> User {
    let password: String = row.get("password");
    User {
        id: row.get("id"),
        username: row.get("username"),
        password: SecretString::new(password.into()),
    }
}

#[async_trait]
impl UserRepoTrait for PostgresPersistence {
    async fn create(&self, username: &str, password: &SecretString) -> AppResult<User> {
        let row = sqlx::query(
            r#"
            INSERT INTO users (username, password)
            VALUES ($1, $2)
            RETURNING id, username, password
            "#,
        )
        .bind(username)
        .bind(password.expose_secret())
        .fetch_one(&self.pool)
        .await
        .map_err(|err| {
            if is_unique_violation(&err) {
                AppError::UsernameTaken
            } else {
                AppError::from(err)
            }
        })?;

        Ok(row_to_user(row))
    }

    async fn get_by_id(&self, id: i64) -> AppResult<Option<User>> {
        let row = sqlx::query("SELECT id, username, password FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::from)?;

        Ok(row.map(row_to_user))
    }

    async fn get_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let row = sqlx::query("SELECT id, username, password FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::from)?;

        Ok(row.map(row_to_user))
    }
}
