//! HTTP routes.

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use hptrackr_domain::{
    AbilityScores, CharacterClass, CharacterName, CharacterSheet, DefenseEntry, HitPointState,
    Item,
};

use crate::app::App;
use crate::use_cases::hit_points::HitPointError;
use crate::use_cases::info::InfoError;

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(health))
        .route("/api/health", get(health))
        .route("/damage", post(deal_damage))
        .route("/heal", post(heal))
        .route("/temporary-hp", post(grant_temporary_hp))
        .route("/info/{name}", get(character_info))
        .route("/info/{name}/hp", get(character_hit_points))
        .route("/info/{name}/classes", get(character_classes))
        .route("/info/{name}/stats", get(character_stats))
        .route("/info/{name}/items", get(character_items))
        .route("/info/{name}/defenses", get(character_defenses))
}

async fn health() -> &'static str {
    "OK"
}

// =============================================================================
// Hit-point mutations
// =============================================================================

#[derive(Debug, Deserialize)]
struct DamageRequest {
    name: String,
    damage: f64,
    #[serde(rename = "type")]
    damage_type: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DamageResponse {
    damage_received: f64,
    updated_hit_points: HitPointState,
    original_hit_points: HitPointState,
}

async fn deal_damage(
    State(app): State<Arc<App>>,
    Json(request): Json<DamageRequest>,
) -> Result<Json<DamageResponse>, ApiError> {
    let name = parse_name(&request.name)?;
    let outcome = app
        .hit_points
        .deal_damage
        .execute(&name, request.damage, &request.damage_type)
        .await?;

    Ok(Json(DamageResponse {
        damage_received: outcome.damage_received,
        updated_hit_points: outcome.updated,
        original_hit_points: outcome.original,
    }))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HealRequest {
    name: String,
    hit_points: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct HealResponse {
    hit_points: i64,
}

async fn heal(
    State(app): State<Arc<App>>,
    Json(request): Json<HealRequest>,
) -> Result<Json<HealResponse>, ApiError> {
    let name = parse_name(&request.name)?;
    let updated = app
        .hit_points
        .heal
        .execute(&name, request.hit_points)
        .await?;

    Ok(Json(HealResponse {
        hit_points: updated.hit_points,
    }))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TempHpRequest {
    name: String,
    hit_points: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TempHpResponse {
    message: &'static str,
    temp_hit_points: i64,
}

async fn grant_temporary_hp(
    State(app): State<Arc<App>>,
    Json(request): Json<TempHpRequest>,
) -> Result<Json<TempHpResponse>, ApiError> {
    let name = parse_name(&request.name)?;
    let grant = app
        .hit_points
        .grant_temp_hp
        .execute(&name, request.hit_points)
        .await?;

    let message = if grant.applied {
        "tempHitPoints updated successfully."
    } else {
        "tempHitPoints not updated as the new value is not greater than the existing value."
    };
    Ok(Json(TempHpResponse {
        message,
        temp_hit_points: grant.temp_hit_points,
    }))
}

// =============================================================================
// Character info
// =============================================================================

async fn character_info(
    State(app): State<Arc<App>>,
    Path(name): Path<String>,
) -> Result<Json<CharacterSheet>, ApiError> {
    let name = parse_name(&name)?;
    Ok(Json(app.info.full_sheet(&name).await?))
}

async fn character_hit_points(
    State(app): State<Arc<App>>,
    Path(name): Path<String>,
) -> Result<Json<HitPointState>, ApiError> {
    let name = parse_name(&name)?;
    Ok(Json(app.info.hit_points(&name).await?))
}

async fn character_classes(
    State(app): State<Arc<App>>,
    Path(name): Path<String>,
) -> Result<Json<Vec<CharacterClass>>, ApiError> {
    let name = parse_name(&name)?;
    Ok(Json(app.info.classes(&name).await?))
}

async fn character_stats(
    State(app): State<Arc<App>>,
    Path(name): Path<String>,
) -> Result<Json<Option<AbilityScores>>, ApiError> {
    let name = parse_name(&name)?;
    Ok(Json(app.info.stats(&name).await?))
}

async fn character_items(
    State(app): State<Arc<App>>,
    Path(name): Path<String>,
) -> Result<Json<Vec<Item>>, ApiError> {
    let name = parse_name(&name)?;
    Ok(Json(app.info.items(&name).await?))
}

async fn character_defenses(
    State(app): State<Arc<App>>,
    Path(name): Path<String>,
) -> Result<Json<Vec<DefenseEntry>>, ApiError> {
    let name = parse_name(&name)?;
    Ok(Json(app.info.defenses(&name).await?))
}

fn parse_name(raw: &str) -> Result<CharacterName, ApiError> {
    CharacterName::new(raw).map_err(|e| ApiError::BadRequest(e.to_string()))
}

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Internal(String),
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (axum::http::StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (axum::http::StatusCode::BAD_REQUEST, msg),
            ApiError::Internal(msg) => {
                // Log the detail, hide it from the client.
                tracing::error!(error = %msg, "request failed");
                (
                    axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to perform operation".to_string(),
                )
            }
        };
        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

impl From<HitPointError> for ApiError {
    fn from(e: HitPointError) -> Self {
        match e {
            HitPointError::CharacterNotFound(_) => ApiError::NotFound(e.to_string()),
            HitPointError::UnknownDamageType(_) | HitPointError::Validation(_) => {
                ApiError::BadRequest(e.to_string())
            }
            HitPointError::Store(ref store_err) if store_err.is_not_found() => {
                ApiError::NotFound(e.to_string())
            }
            HitPointError::Store(_) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<InfoError> for ApiError {
    fn from(e: InfoError) -> Self {
        match e {
            InfoError::CharacterNotFound(_) => ApiError::NotFound(e.to_string()),
            InfoError::Store(_) => ApiError::Internal(e.to_string()),
        }
    }
}
