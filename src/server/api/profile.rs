// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use tracing::info;

use crate::inputs::ProfileInput;
use crate::models::Profile;
use crate::server::{with_store, ApiJson, ApiResult, AppState};

/// Stored profile, or one seeded from the account when none was saved yet.
async fn get_profile(
    Path(user_id): Path<i64>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Profile>> {
    let profile = with_store(&state, move |store| {
        let user = store.require_user(user_id)?;
        Ok(store.get_profile(user_id)?.unwrap_or_else(|| Profile {
            name: user.username,
            email: user.email,
            ..Profile::default()
        }))
    })
    .await?;
    Ok(Json(profile))
}

async fn update_profile(
    Path(user_id): Path<i64>,
    State(state): State<Arc<AppState>>,
    ApiJson(input): ApiJson<ProfileInput>,
) -> ApiResult<Json<Profile>> {
    let profile = input.validate()?;
    let saved = with_store(&state, move |store| {
        store.require_user(user_id)?;
        store.save_profile(user_id, &profile)
    })
    .await?;
    info!(user_id, "updated profile");
    Ok(Json(saved))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route(
        "/users/{user_id}/profile",
        get(get_profile).put(update_profile),
    )
}
