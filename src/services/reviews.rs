//! Review service: many reviews per package, append-only.

use crate::db::{self, DbPool};
use crate::domain::{NewReview, Review};
use crate::error::ServiceResult;
use crate::validation;

pub fn create(pool: &DbPool, package_id: i64, fields: &NewReview) -> ServiceResult<i64> {
    validation::validate_new_review(fields)?;
    let conn = db::try_lock(pool)?;
    Ok(db::insert_review(&conn, package_id, fields)?)
}

pub fn fetch_by_package(pool: &DbPool, package_id: i64) -> ServiceResult<Vec<Review>> {
    let conn = db::try_lock(pool)?;
    Ok(db::list_reviews_by_package(&conn, package_id)?)
}
