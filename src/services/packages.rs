//! Package service: create, fetch-one, fetch-all, update, delete.

use crate::db::{self, DbPool};
use crate::domain::{NewPackage, Package, PackagePatch};
use crate::error::{ServiceError, ServiceResult};
use crate::validation;

/// Validate and insert a new package, returning its store-assigned id.
pub fn create(pool: &DbPool, fields: &NewPackage) -> ServiceResult<i64> {
    validation::validate_new_package(fields)?;
    let conn = db::try_lock(pool)?;
    let id = db::insert_package(&conn, fields)?;
    tracing::debug!(package_id = id, "package created");
    Ok(id)
}

/// Every package, in insertion order as the store exposes it.
pub fn fetch_all(pool: &DbPool) -> ServiceResult<Vec<Package>> {
    let conn = db::try_lock(pool)?;
    Ok(db::list_packages(&conn)?)
}

pub fn fetch_one(pool: &DbPool, id: i64) -> ServiceResult<Package> {
    let conn = db::try_lock(pool)?;
    db::get_package_by_id(&conn, id)?.ok_or(ServiceError::NotFound("package"))
}

/// Partial patch: provided fields overwrite, omitted fields stay untouched.
pub fn update(pool: &DbPool, id: i64, patch: &PackagePatch) -> ServiceResult<()> {
    validation::validate_package_patch(patch)?;
    let conn = db::try_lock(pool)?;
    if !db::patch_package(&conn, id, patch)? {
        return Err(ServiceError::NotFound("package"));
    }
    Ok(())
}

/// Remove the package permanently. Its inclusion and reviews are not
/// cascaded; they remain fetchable by the dead identifier.
pub fn delete(pool: &DbPool, id: i64) -> ServiceResult<()> {
    let conn = db::try_lock(pool)?;
    if !db::delete_package(&conn, id)? {
        return Err(ServiceError::NotFound("package"));
    }
    tracing::debug!(package_id = id, "package deleted");
    Ok(())
}
