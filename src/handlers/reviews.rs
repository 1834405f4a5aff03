use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde_json::{Value, json};

use crate::db::DbPool;
use crate::domain::{NewReview, Review};
use crate::error::ServiceError;
use crate::services::reviews;

pub async fn create_review(
    State(pool): State<DbPool>,
    Path(package_id): Path<i64>,
    Json(fields): Json<NewReview>,
) -> Result<(StatusCode, Json<Value>), ServiceError> {
    let id = reviews::create(&pool, package_id, &fields)?;
    Ok((StatusCode::CREATED, Json(json!({ "id": id }))))
}

pub async fn list_reviews(
    State(pool): State<DbPool>,
    Path(package_id): Path<i64>,
) -> Result<Json<Vec<Review>>, ServiceError> {
    Ok(Json(reviews::fetch_by_package(&pool, package_id)?))
}
