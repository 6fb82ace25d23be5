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
use serde::Serialize;
use tracing::info;

use crate::goals::project_goal;
use crate::inputs::GoalInput;
use crate::models::{Goal, GoalMetrics};
use crate::server::{with_store, ApiJson, ApiQuery, ApiResult, AppState, AsOfQuery};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GoalWithMetrics {
    goal: Goal,
    metrics: GoalMetrics,
}

async fn load_goal(state: &AppState, user_id: i64) -> ApiResult<Goal> {
    with_store(state, move |store| {
        store.require_user(user_id)?;
        Ok(store.get_goal(user_id)?.unwrap_or_default())
    })
    .await
}

async fn get_goal(
    Path(user_id): Path<i64>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Goal>> {
    Ok(Json(load_goal(&state, user_id).await?))
}

async fn update_goal(
    Path(user_id): Path<i64>,
    State(state): State<Arc<AppState>>,
    ApiJson(input): ApiJson<GoalInput>,
) -> ApiResult<Json<Goal>> {
    let goal = input.validate()?;
    let saved = with_store(&state, move |store| {
        store.require_user(user_id)?;
        store.save_goal(user_id, &goal)
    })
    .await?;
    info!(user_id, title = %saved.title, "replaced goal");
    Ok(Json(saved))
}

async fn get_goal_metrics(
    Path(user_id): Path<i64>,
    ApiQuery(q): ApiQuery<AsOfQuery>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<GoalWithMetrics>> {
    let today = q.resolve()?;
    let goal = load_goal(&state, user_id).await?;
    let metrics = project_goal(&goal, today);
    Ok(Json(GoalWithMetrics { goal, metrics }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users/{user_id}/goal", get(get_goal).put(update_goal))
        .route("/users/{user_id}/goal/metrics", get(get_goal_metrics))
}
