//! Inclusion service: the 1:1 perks record attached to a package.
//!
//! Per package the record moves ABSENT -> PRESENT on create and stays
//! PRESENT thereafter; there is no delete, so it never goes back.

use crate::db::{self, DbPool};
use crate::domain::{Inclusion, InclusionPatch, NewInclusion};
use crate::error::{ServiceError, ServiceResult};
use crate::validation;

/// The inclusion for a package, or None if none exists yet (not an error).
pub fn fetch_by_package(pool: &DbPool, package_id: i64) -> ServiceResult<Option<Inclusion>> {
    let conn = db::try_lock(pool)?;
    Ok(db::get_inclusion_by_package(&conn, package_id)?)
}

/// Create the single inclusion for a package. The at-most-one invariant is
/// enforced by the store's unique index, so two concurrent creates cannot
/// both succeed; the loser surfaces as AlreadyExists.
pub fn create(pool: &DbPool, package_id: i64, fields: &NewInclusion) -> ServiceResult<i64> {
    validation::validate_new_inclusion(fields)?;
    let conn = db::try_lock(pool)?;
    match db::insert_inclusion(&conn, package_id, fields) {
        Ok(id) => {
            tracing::debug!(package_id, "inclusion created");
            Ok(id)
        }
        Err(rusqlite::Error::SqliteFailure(e, _))
            if e.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            Err(ServiceError::AlreadyExists("inclusion"))
        }
        Err(e) => Err(e.into()),
    }
}

/// Patch the existing inclusion; only the six inclusion fields are touched.
pub fn update(pool: &DbPool, package_id: i64, patch: &InclusionPatch) -> ServiceResult<()> {
    validation::validate_inclusion_patch(patch)?;
    let conn = db::try_lock(pool)?;
    if !db::patch_inclusion_by_package(&conn, package_id, patch)? {
        return Err(ServiceError::NotFound("inclusion"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NewPackage;
    use crate::services::packages;
    use crate::testing::test_pool;

    fn sample_package() -> NewPackage {
        NewPackage {
            name: "Diani Package".to_string(),
            price: Some(500.0),
            location: None,
            description: None,
            kind: None,
            number_of_adults: None,
            number_of_children: None,
            image_urls: Vec::new(),
            features: Vec::new(),
        }
    }

    fn sample_inclusion() -> NewInclusion {
        NewInclusion {
            days: 3,
            nights: 2.0,
            flight_ticket: true,
            train_ticket: false,
            bed_and_breakfast: true,
            tour_guide: false,
        }
    }

    #[test]
    fn test_absent_then_create_then_present() {
        let pool = test_pool();
        let package_id = packages::create(&pool, &sample_package()).unwrap();

        assert!(fetch_by_package(&pool, package_id).unwrap().is_none());

        create(&pool, package_id, &sample_inclusion()).unwrap();
        let inc = fetch_by_package(&pool, package_id).unwrap().unwrap();
        assert_eq!(inc.days, 3);
        assert!(inc.bed_and_breakfast);
    }

    #[test]
    fn test_second_create_already_exists() {
        let pool = test_pool();
        let package_id = packages::create(&pool, &sample_package()).unwrap();
        create(&pool, package_id, &sample_inclusion()).unwrap();

        let err = create(&pool, package_id, &sample_inclusion()).unwrap_err();
        assert!(matches!(err, ServiceError::AlreadyExists("inclusion")));
    }

    #[test]
    fn test_create_rejects_zero_days() {
        let pool = test_pool();
        let mut fields = sample_inclusion();
        fields.days = 0;

        let err = create(&pool, 1, &fields).unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        assert!(fetch_by_package(&pool, 1).unwrap().is_none());
    }

    #[test]
    fn test_update_absent_not_found_and_store_unchanged() {
        let pool = test_pool();
        let patch = InclusionPatch {
            days: Some(7),
            ..Default::default()
        };

        let err = update(&pool, 1, &patch).unwrap_err();
        assert!(matches!(err, ServiceError::NotFound("inclusion")));
        assert!(fetch_by_package(&pool, 1).unwrap().is_none());
    }

    #[test]
    fn test_update_present_patches_fields() {
        let pool = test_pool();
        let package_id = packages::create(&pool, &sample_package()).unwrap();
        create(&pool, package_id, &sample_inclusion()).unwrap();

        let patch = InclusionPatch {
            nights: Some(4.0),
            train_ticket: Some(true),
            ..Default::default()
        };
        update(&pool, package_id, &patch).unwrap();

        let inc = fetch_by_package(&pool, package_id).unwrap().unwrap();
        assert_eq!(inc.nights, 4.0);
        assert!(inc.train_ticket);
        assert_eq!(inc.days, 3);
    }

    #[test]
    fn test_inclusion_survives_package_delete() {
        let pool = test_pool();
        let package_id = packages::create(&pool, &sample_package()).unwrap();
        create(&pool, package_id, &sample_inclusion()).unwrap();

        packages::delete(&pool, package_id).unwrap();

        // The orphan stays fetchable by the dead package id
        let inc = fetch_by_package(&pool, package_id).unwrap().unwrap();
        assert_eq!(inc.package_id, package_id);
    }
}
