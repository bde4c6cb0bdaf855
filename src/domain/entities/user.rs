use secrecy::{ExposeSecret, SecretString};

/// Account record reserved for future authentication. No endpoint exposes it yet.
#[derive(Debug)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password: SecretString,
}

impl Clone for User {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            username: self.username.clone(),
            password: SecretString::new(self.password.expose_secret().into()),
        }
    }
}
