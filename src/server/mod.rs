// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! JSON REST API over a [`FinanceStore`].

mod api;
mod error;
mod extract;

pub use error::{ApiError, ApiResult};
pub use extract::{ApiJson, ApiQuery};

use anyhow::Context;
use axum::{http::HeaderValue, Router};
use chrono::NaiveDate;
use serde::Deserialize;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::errors::{Result, ValidationError};
use crate::storage::FinanceStore;
use crate::utils::{parse_date, today};

pub struct AppState {
    pub store: Arc<dyn FinanceStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn FinanceStore>) -> Self {
        Self { store }
    }
}

/// Run a store operation on the blocking pool.
pub(crate) async fn with_store<T, F>(state: &AppState, f: F) -> ApiResult<T>
where
    F: FnOnce(&dyn FinanceStore) -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    let store = Arc::clone(&state.store);
    tokio::task::spawn_blocking(move || f(store.as_ref()))
        .await
        .map_err(|e| ApiError::Internal(format!("store task failed: {e}")))?
        .map_err(ApiError::from)
}

/// `?asOf=YYYY-MM-DD`; defaults to the local date.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AsOfQuery {
    pub as_of: Option<String>,
}

impl AsOfQuery {
    pub fn resolve(&self) -> std::result::Result<NaiveDate, ValidationError> {
        match self.as_of.as_deref().map(str::trim) {
            None | Some("") => Ok(today()),
            Some(s) => parse_date(s),
        }
    }
}

pub fn app_router(state: Arc<AppState>) -> Router {
    let user_scoped = Router::new()
        .merge(api::transactions::router())
        .merge(api::reports::router())
        .merge(api::profile::router())
        .merge(api::goals::router());

    Router::new()
        .merge(api::health::router())
        .nest("/api", api::users::router().merge(user_scoped))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(config: &Config) -> anyhow::Result<CorsLayer> {
    Ok(match &config.cors_origin {
        Some(origin) => CorsLayer::new()
            .allow_origin(
                origin
                    .parse::<HeaderValue>()
                    .with_context(|| format!("Invalid CORS origin '{}'", origin))?,
            )
            .allow_methods(Any)
            .allow_headers(Any),
        None => CorsLayer::permissive(),
    })
}

pub async fn run(config: &Config, store: Arc<dyn FinanceStore>) -> anyhow::Result<()> {
    let state = Arc::new(AppState::new(store));
    let router = app_router(state).layer(cors_layer(config)?);

    info!("Listening on http://{}", config.listen_addr);
    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.listen_addr))?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "could not listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
