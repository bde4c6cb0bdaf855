use crate::{
    adapters::{http::app_state::AppState, persistence::memory::InMemoryPersistence},
    infra::{
        InfraError,
        config::{AppConfig, StoreBackend},
        postgres_persistence,
    },
    use_cases::{
        user::UserRepoTrait,
        waitlist::{WaitlistRepoTrait, WaitlistUseCases},
    },
};
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub async fn init_app_state(config: AppConfig) -> anyhow::Result<AppState> {
    let (waitlist_repo, user_repo) = match config.store_backend {
        StoreBackend::Memory => {
            let store = Arc::new(InMemoryPersistence::seeded(
                config.seed_count,
                config.seed_rng,
            ));
            info!(baseline = config.seed_count, "Using in-memory store");
            (
                store.clone() as Arc<dyn WaitlistRepoTrait>,
                store as Arc<dyn UserRepoTrait>,
            )
        }
        StoreBackend::Postgres => {
            let database_url = config
                .database_url
                .as_deref()
                .ok_or(InfraError::ConfigMissing { var: "DATABASE_URL" })?;
            let postgres_arc = Arc::new(postgres_persistence(database_url).await?);
            info!("Using PostgreSQL store");
            (
                postgres_arc.clone() as Arc<dyn WaitlistRepoTrait>,
                postgres_arc as Arc<dyn UserRepoTrait>,
            )
        }
    };

    let waitlist_use_cases = WaitlistUseCases::new(waitlist_repo);

    Ok(AppState {
        config: Arc::new(config),
        waitlist_use_cases: Arc::new(waitlist_use_cases),
        user_repo,
    })
}

pub fn init_tracing(log_file: Option<&Path>) -> Result<(), InfraError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "waitlist=debug,tower_http=debug".into());

    // Console (pretty logs)
    let console_layer = fmt::layer()
        .with_target(false) // don't show target (module path)
        .with_level(true)
        .pretty();

    // File (structured JSON logs), only when configured
    let json_layer = match log_file {
        Some(path) => {
            let file = std::fs::File::create(path).map_err(InfraError::LogFile)?;
            Some(
                fmt::layer()
                    .json()
                    .with_writer(Mutex::new(file))
                    .with_current_span(true)
                    .with_span_list(true),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(json_layer)
        .try_init()
        .ok();

    Ok(())
}
