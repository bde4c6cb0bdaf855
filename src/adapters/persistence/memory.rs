//! Process-local store. The default backend; nothing survives a restart.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{Duration, Utc};
use rand::{Rng, SeedableRng, rngs::StdRng};
use secrecy::{ExposeSecret, SecretString};

use crate::{
    app_error::{AppError, AppResult},
    application::use_cases::{user::UserRepoTrait, waitlist::WaitlistRepoTrait},
    domain::entities::{user::User, waitlist_registration::WaitlistRegistration},
};

/// Synthetic signups loaded at startup so the public counter never starts at zero.
pub const BASELINE_REGISTRATIONS: i64 = 1947;

/// Baseline signups are spread over this many days before startup.
const BASELINE_WINDOW_DAYS: i64 = 30;

struct MemoryState {
    users: BTreeMap<i64, User>,
    user_ids_by_username: HashMap<String, i64>,
    next_user_id: i64,
    registrations: BTreeMap<i64, WaitlistRegistration>,
    registration_ids_by_email: HashMap<String, i64>,
    next_registration_id: i64,
}

impl MemoryState {
    fn empty() -> Self {
        Self {
            users: BTreeMap::new(),
            user_ids_by_username: HashMap::new(),
            next_user_id: 1,
            registrations: BTreeMap::new(),
            registration_ids_by_email: HashMap::new(),
            next_registration_id: 1,
        }
    }

    fn insert_registration(&mut self, registration: WaitlistRegistration) {
        self.registration_ids_by_email
            .insert(registration.email.clone(), registration.id);
        self.next_registration_id = self.next_registration_id.max(registration.id + 1);
        self.registrations.insert(registration.id, registration);
    }
}

/// In-memory implementation of both storage ports.
///
/// All state sits behind one mutex, so every operation (including the
/// duplicate check inside `create`) is a single critical section.
pub struct InMemoryPersistence {
    state: Mutex<MemoryState>,
}

impl Default for InMemoryPersistence {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryPersistence {
    /// Empty store; ids start at 1.
    pub fn new() -> Self {
        Self {
            state: Mutex::new(MemoryState::empty()),
        }
    }

    /// Store pre-populated with `count` registrations `existing{i}@example.com`
    /// (ids `1..=count`) with timestamps drawn from the last 30 days.
    pub fn with_baseline<R: Rng>(count: i64, rng: &mut R) -> Self {
        let mut state = MemoryState::empty();
        let now = Utc::now();
        let window_ms = Duration::days(BASELINE_WINDOW_DAYS).num_milliseconds();

        for id in 1..=count {
            let age = Duration::milliseconds(rng.gen_range(0..window_ms));
            state.insert_registration(WaitlistRegistration {
                id,
                email: format!("existing{id}@example.com"),
                registered_at: now - age,
            });
        }

        Self {
            state: Mutex::new(state),
        }
    }

    /// Baseline store; a fixed `seed` makes the timestamps reproducible.
    pub fn seeded(count: i64, seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::with_baseline(count, &mut StdRng::seed_from_u64(seed)),
            None => Self::with_baseline(count, &mut rand::thread_rng()),
        }
    }

    fn lock(&self) -> AppResult<MutexGuard<'_, MemoryState>> {
        self.state
            .lock()
            .map_err(|_| AppError::Internal("in-memory store lock poisoned".into()))
    }
}

#[async_trait]
impl WaitlistRepoTrait for InMemoryPersistence {
    async fn create(&self, email: &str) -> AppResult<WaitlistRegistration> {
        let mut state = self.lock()?;

        if state.registration_ids_by_email.contains_key(email) {
            return Err(AppError::AlreadyRegistered);
        }

        let registration = WaitlistRegistration {
            id: state.next_registration_id,
            email: email.to_string(),
            registered_at: Utc::now(),
        };
        state.insert_registration(registration.clone());

        Ok(registration)
    }

    async fn get_by_email(&self, email: &str) -> AppResult<Option<WaitlistRegistration>> {
        let state = self.lock()?;
        Ok(state
            .registration_ids_by_email
            .get(email)
            .and_then(|id| state.registrations.get(id))
            .cloned())
    }

    async fn count(&self) -> AppResult<i64> {
        Ok(self.lock()?.registrations.len() as i64)
    }
}

#[async_trait]
impl UserRepoTrait for InMemoryPersistence {
    async fn create(&self, username: &str, password: &SecretString) -> AppResult<User> {
        let mut state = self.lock()?;

        if state.user_ids_by_username.contains_key(username) {
            return Err(AppError::UsernameTaken);
        }

        let id = state.next_user_id;
        state.next_user_id += 1;

        let user = User {
            id,
            username: username.to_string(),
            password: SecretString::new(password.expose_secret().into()),
        };
        state.user_ids_by_username.insert(user.username.clone(), id);
        state.users.insert(id, user.clone());

        Ok(user)
    }

    async fn get_by_id(&self, id: i64) -> AppResult<Option<User>> {
        Ok(self.lock()?.users.get(&id).cloned())
    }

    async fn get_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let state = self.lock()?;
        Ok(state
            .user_ids_by_username
            .get(username)
            .and_then(|id| state.users.get(id))
            .cloned())
    }
}
