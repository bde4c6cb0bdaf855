use async_trait::async_trait;
use secrecy::SecretString;

use crate::{app_error::AppResult, domain::entities::user::User};

/// Storage port for accounts. Usernames are unique; `create` reports a clash
/// with `AppError::UsernameTaken`.
#[async_trait]
pub trait UserRepoTrait: Send + Sync {
    async fn create(&self, username: &str, password: &SecretString) -> AppResult<User>;

    async fn get_by_id(&self, id: i64) -> AppResult<Option<User>>;

    async fn get_by_username(&self, username: &str) -> AppResult<Option<User>>;
}
