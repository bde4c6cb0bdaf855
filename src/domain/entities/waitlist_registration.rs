use chrono::{DateTime, Utc};

/// A single email signup. Never updated or deleted once stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitlistRegistration {
    pub id: i64,
    pub email: String,
    pub registered_at: DateTime<Utc>,
}
