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
use serde::{Deserialize, Serialize};

use crate::models::{MonthlyTotals, SpendingAlert, Summary};
use crate::server::{with_store, ApiQuery, ApiResult, AppState, AsOfQuery};
use crate::summary::{aggregate_summary, monthly_totals, spending_alert};

const DASHBOARD_MONTHS: usize = 6;

#[derive(Debug, Default, Deserialize)]
struct MonthsQuery {
    months: Option<usize>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Dashboard {
    display_name: String,
    summary: Summary,
    monthly: Vec<MonthlyTotals>,
    spending_alert: Option<SpendingAlert>,
}

async fn get_summary(
    Path(user_id): Path<i64>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Summary>> {
    let txs = with_store(&state, move |store| {
        store.require_user(user_id)?;
        store.list_transactions(user_id)
    })
    .await?;
    Ok(Json(aggregate_summary(&txs)))
}

async fn get_monthly(
    Path(user_id): Path<i64>,
    ApiQuery(q): ApiQuery<MonthsQuery>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<MonthlyTotals>>> {
    let txs = with_store(&state, move |store| {
        store.require_user(user_id)?;
        store.list_transactions(user_id)
    })
    .await?;
    Ok(Json(monthly_totals(&txs, q.months)))
}

/// Everything the dashboard screen renders in one call.
async fn get_dashboard(
    Path(user_id): Path<i64>,
    ApiQuery(q): ApiQuery<AsOfQuery>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Dashboard>> {
    let as_of = q.resolve()?;
    let (user, profile, txs) = with_store(&state, move |store| {
        let user = store.require_user(user_id)?;
        let profile = store.get_profile(user_id)?;
        let txs = store.list_transactions(user_id)?;
        Ok((user, profile, txs))
    })
    .await?;

    let profile = profile.unwrap_or_default();
    let display_name = if profile.name.is_empty() {
        user.username
    } else {
        profile.name
    };
    Ok(Json(Dashboard {
        display_name,
        summary: aggregate_summary(&txs),
        monthly: monthly_totals(&txs, Some(DASHBOARD_MONTHS)),
        spending_alert: spending_alert(&txs, profile.alert_limit, as_of),
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users/{user_id}/summary", get(get_summary))
        .route("/users/{user_id}/summary/monthly", get(get_monthly))
        .route("/users/{user_id}/dashboard", get(get_dashboard))
}
