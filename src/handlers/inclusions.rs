use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde_json::{Value, json};

use crate::db::DbPool;
use crate::domain::{Inclusion, InclusionPatch, NewInclusion};
use crate::error::ServiceError;
use crate::services::inclusions;

/// The package's inclusion, or JSON null when none exists yet
pub async fn get_inclusion(
    State(pool): State<DbPool>,
    Path(package_id): Path<i64>,
) -> Result<Json<Option<Inclusion>>, ServiceError> {
    Ok(Json(inclusions::fetch_by_package(&pool, package_id)?))
}

pub async fn create_inclusion(
    State(pool): State<DbPool>,
    Path(package_id): Path<i64>,
    Json(fields): Json<NewInclusion>,
) -> Result<(StatusCode, Json<Value>), ServiceError> {
    let id = inclusions::create(&pool, package_id, &fields)?;
    Ok((StatusCode::CREATED, Json(json!({ "id": id }))))
}

pub async fn update_inclusion(
    State(pool): State<DbPool>,
    Path(package_id): Path<i64>,
    Json(patch): Json<InclusionPatch>,
) -> Result<StatusCode, ServiceError> {
    inclusions::update(&pool, package_id, &patch)?;
    Ok(StatusCode::NO_CONTENT)
}
