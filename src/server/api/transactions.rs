// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use tracing::info;

use crate::errors::Error;
use crate::inputs::TransactionInput;
use crate::models::Transaction;
use crate::server::{with_store, ApiJson, ApiResult, AppState};
use crate::utils::today;

async fn list_transactions(
    Path(user_id): Path<i64>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Transaction>>> {
    let txs = with_store(&state, move |store| {
        store.require_user(user_id)?;
        store.list_transactions(user_id)
    })
    .await?;
    Ok(Json(txs))
}

async fn create_transaction(
    Path(user_id): Path<i64>,
    State(state): State<Arc<AppState>>,
    ApiJson(input): ApiJson<TransactionInput>,
) -> ApiResult<(StatusCode, Json<Transaction>)> {
    let new_tx = input.validate(today())?;
    let tx = with_store(&state, move |store| {
        store.require_user(user_id)?;
        store.create_transaction(user_id, &new_tx)
    })
    .await?;
    info!(user_id, tx_id = tx.id, kind = %tx.kind, "created transaction");
    Ok((StatusCode::CREATED, Json(tx)))
}

async fn delete_transaction(
    Path((user_id, id)): Path<(i64, i64)>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    with_store(&state, move |store| {
        store.require_user(user_id)?;
        if store.delete_transaction(user_id, id)? {
            Ok(())
        } else {
            Err(Error::NotFound(format!("Transaction {}", id)))
        }
    })
    .await?;
    info!(user_id, tx_id = id, "deleted transaction");
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/users/{user_id}/transactions",
            get(list_transactions).post(create_transaction),
        )
        .route(
            "/users/{user_id}/transactions/{id}",
            delete(delete_transaction),
        )
}
