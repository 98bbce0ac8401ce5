use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use tokio::sync::Mutex;
use tracing::info;

use crate::bank::UserDirectory;
use crate::models::{Credentials, LoginResponse, TransferRequest, TransferResponse};

pub type SharedDirectory = Arc<Mutex<UserDirectory>>;

/// The full mock API surface: liveness probe, login, accounts, transfer.
pub fn router(directory: SharedDirectory) -> Router {
    Router::new()
        .route("/", get(|| async { "OK" }))
        .route("/login", post(handler_login))
        .route("/accounts/:id", get(handler_accounts))
        .route("/transfer", post(handler_transfer))
        .with_state(directory)
}

pub async fn handler_login(
    State(directory): State<SharedDirectory>,
    body: Option<Json<Credentials>>,
) -> Response {
    let Some(Json(credentials)) = body else {
        return (StatusCode::UNPROCESSABLE_ENTITY, "Invalid request body").into_response();
    };

    let granted = directory.lock().await.login(&credentials);
    info!("login attempt for user {}: granted={granted}", credentials.id);

    Json(LoginResponse { granted }).into_response()
}

pub async fn handler_accounts(
    Path(user_id): Path<String>,
    State(directory): State<SharedDirectory>,
) -> Response {
    let accounts = directory.lock().await.accounts(&user_id);

    Json(accounts).into_response()
}

pub async fn handler_transfer(
    State(directory): State<SharedDirectory>,
    body: Option<Json<TransferRequest>>,
) -> Response {
    let Some(Json(request)) = body else {
        return (StatusCode::UNPROCESSABLE_ENTITY, "Invalid request body").into_response();
    };

    match directory.lock().await.transfer(&request) {
        Ok(executed) => {
            info!(
                "transfer of {} from {} to {}: executed={executed}",
                request.amount, request.sender, request.recipient
            );
            Json(TransferResponse { result: executed }).into_response()
        }
        Err(error) => (StatusCode::INTERNAL_SERVER_ERROR, error.to_string()).into_response(),
    }
}
