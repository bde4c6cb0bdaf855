use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde::Serialize;
use serde_json::Value;

use crate::{
    adapters::http::app_state::AppState,
    app_error::{AppError, AppResult},
    application::validators::RegisterWaitlistInput,
    use_cases::waitlist::WaitlistUseCases,
};

const COUNT_FAILED: &str = "Failed to get waitlist count";
const REGISTER_FAILED: &str = "Failed to register for waitlist";

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/count", get(count))
        .route("/register", post(register))
}

#[derive(Serialize)]
struct CountResponse {
    count: i64,
}

#[derive(Serialize)]
struct RegistrationSummary {
    id: i64,
    email: String,
}

#[derive(Serialize)]
struct RegisterResponse {
    message: &'static str,
    registration: RegistrationSummary,
    count: i64,
}

async fn count(State(waitlist): State<Arc<WaitlistUseCases>>) -> AppResult<impl IntoResponse> {
    let count = waitlist.count().await.map_err(|e| e.context(COUNT_FAILED))?;
    Ok(Json(CountResponse { count }))
}

async fn register(
    State(app_state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    // Unparseable bodies are reported like any other schema failure.
    let Json(body) = payload.map_err(|rejection| AppError::InvalidInput(rejection.body_text()))?;
    let input = RegisterWaitlistInput::parse(&body)?;

    let receipt = app_state
        .waitlist_use_cases
        .register(input)
        .await
        .map_err(|e| e.context(REGISTER_FAILED))?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "Successfully registered for waitlist",
            registration: RegistrationSummary {
                id: receipt.registration.id,
                email: receipt.registration.email,
            },
            count: receipt.count,
        }),
    ))
}
