use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde_json::{Value, json};

use crate::db::DbPool;
use crate::domain::{NewPackage, Package, PackagePatch};
use crate::error::ServiceError;
use crate::services::packages;

pub async fn create_package(
    State(pool): State<DbPool>,
    Json(fields): Json<NewPackage>,
) -> Result<(StatusCode, Json<Value>), ServiceError> {
    let id = packages::create(&pool, &fields)?;
    Ok((StatusCode::CREATED, Json(json!({ "id": id }))))
}

pub async fn list_packages(
    State(pool): State<DbPool>,
) -> Result<Json<Vec<Package>>, ServiceError> {
    Ok(Json(packages::fetch_all(&pool)?))
}

pub async fn get_package(
    State(pool): State<DbPool>,
    Path(id): Path<i64>,
) -> Result<Json<Package>, ServiceError> {
    Ok(Json(packages::fetch_one(&pool, id)?))
}

pub async fn update_package(
    State(pool): State<DbPool>,
    Path(id): Path<i64>,
    Json(patch): Json<PackagePatch>,
) -> Result<StatusCode, ServiceError> {
    packages::update(&pool, id, &patch)?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_package(
    State(pool): State<DbPool>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ServiceError> {
    packages::delete(&pool, id)?;
    Ok(StatusCode::NO_CONTENT)
}
