// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::auth;
use crate::inputs::{LoginInput, RegisterInput};
use crate::models::User;
use crate::server::{with_store, ApiJson, ApiResult, AppState};

async fn register(
    State(state): State<Arc<AppState>>,
    ApiJson(input): ApiJson<RegisterInput>,
) -> ApiResult<(StatusCode, Json<User>)> {
    let user = with_store(&state, move |store| auth::register(store, &input)).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

async fn login(
    State(state): State<Arc<AppState>>,
    ApiJson(input): ApiJson<LoginInput>,
) -> ApiResult<Json<User>> {
    let user = with_store(&state, move |store| auth::login(store, &input)).await?;
    Ok(Json(user))
}

async fn list_users(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<User>>> {
    let users = with_store(&state, |store| store.list_users()).await?;
    Ok(Json(users))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users", get(list_users))
        .route("/users/register", post(register))
        .route("/users/login", post(login))
}
