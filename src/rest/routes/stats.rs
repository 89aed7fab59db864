// rest/routes/stats.rs — aggregate statistics routes.

use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::AppContext;

pub async fn success_rate(State(ctx): State<Arc<AppContext>>) -> Json<Value> {
    match ctx.store.success_rate().await {
        Some(rate) => Json(json!(rate)),
        None => Json(json!(0)),
    }
}

pub async fn current_streak(State(ctx): State<Arc<AppContext>>) -> Json<u64> {
    Json(ctx.store.max_streak().await)
}

/// Identical to current-streak today — both report the maximum streak.
/// The split is deliberate; a distinction between an active unbroken streak
/// and a historical maximum would land here.
pub async fn longest_streak(State(ctx): State<Arc<AppContext>>) -> Json<u64> {
    Json(ctx.store.max_streak().await)
}
