use std::{net::SocketAddr, path::PathBuf};

use axum::http::HeaderValue;
use env_helpers::get_env_default;
use strum::{Display, EnumString};

use crate::adapters::persistence::memory::BASELINE_REGISTRATIONS;

/// Where registrations and users live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum StoreBackend {
    /// Process memory, pre-seeded with a synthetic baseline.
    Memory,
    /// PostgreSQL via `DATABASE_URL`.
    Postgres,
}

pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub cors_origin: HeaderValue,
    pub store_backend: StoreBackend,
    /// Required when `store_backend` is `Postgres`.
    pub database_url: Option<String>,
    /// Number of synthetic registrations the in-memory store starts with.
    pub seed_count: i64,
    /// Fixed RNG seed for the synthetic timestamps; random when unset.
    pub seed_rng: Option<u64>,
    /// Also write JSON logs to this file when set.
    pub log_file: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let bind_addr: SocketAddr = get_env_default("BIND_ADDR", "127.0.0.1:5000".parse().unwrap());
        let cors_origin: HeaderValue =
            get_env_default("CORS_ORIGIN", String::from("http://localhost:5173"))
                .parse()
                .expect("CORS_ORIGIN must be a valid header value");
        let store_backend: StoreBackend = get_env_default("STORE_BACKEND", StoreBackend::Memory);
        let database_url: Option<String> = std::env::var("DATABASE_URL").ok();
        let seed_count: i64 = get_env_default("WAITLIST_SEED_COUNT", BASELINE_REGISTRATIONS);
        let seed_rng: Option<u64> = std::env::var("WAITLIST_SEED_RNG")
            .ok()
            .and_then(|s| s.parse().ok());
        let log_file: Option<PathBuf> = std::env::var("LOG_FILE").ok().map(PathBuf::from);

        Self {
            bind_addr,
            cors_origin,
            store_backend,
            database_url,
            seed_count,
            seed_rng,
            log_file,
        }
    }
}
