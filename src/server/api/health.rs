// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};

use crate::server::{with_store, AppState};

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Round trip to the database.
async fn health_db(State(state): State<Arc<AppState>>) -> Response {
    match with_store(&state, |store| store.ping()).await {
        Ok(()) => Json(json!({ "database": "ok" })).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "database health check failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "database": "error" })),
            )
                .into_response()
        }
    }
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health))
        .route("/health/db", get(health_db))
}
