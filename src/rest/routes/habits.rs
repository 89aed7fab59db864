// rest/routes/habits.rs — habit CRUD routes.

use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::model::{Habit, HabitCategory, HabitSchedule};
use crate::rest::error::ApiError;
use crate::AppContext;

pub async fn root() -> Json<Value> {
    Json(json!({ "message": "Habit Tracker API" }))
}

pub async fn list_habits(State(ctx): State<Arc<AppContext>>) -> Json<Vec<Habit>> {
    Json(ctx.store.list().await)
}

/// Category and schedule arrive as raw strings and are validated explicitly,
/// so a bad value yields a 422 before the store is touched. A missing
/// required field is rejected earlier by the Json extractor.
#[derive(Deserialize)]
pub struct CreateHabitRequest {
    pub name: String,
    pub category: String,
    pub schedule: String,
    pub reminder_time: Option<String>,
}

pub async fn create_habit(
    State(ctx): State<Arc<AppContext>>,
    Json(body): Json<CreateHabitRequest>,
) -> Result<Json<Habit>, ApiError> {
    let category = HabitCategory::from_str(&body.category)
        .ok_or_else(|| ApiError::Validation(format!("unknown category '{}'", body.category)))?;
    let schedule = HabitSchedule::from_str(&body.schedule)
        .ok_or_else(|| ApiError::Validation(format!("unknown schedule '{}'", body.schedule)))?;

    let habit = ctx
        .store
        .create(body.name, category, schedule, body.reminder_time)
        .await;
    Ok(Json(habit))
}

pub async fn complete_habit(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let streak = ctx.store.complete(&id).await?;
    Ok(Json(json!({ "message": "Habit completed", "streak": streak })))
}

pub async fn delete_habit(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    ctx.store.delete(&id).await?;
    Ok(Json(json!({ "message": "Habit deleted" })))
}
