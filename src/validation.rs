//! Field validation for caller-supplied input.
//!
//! Runs before any store interaction; a failure here means the store was
//! never touched. Enum membership and integer shape are already enforced
//! by serde at the HTTP boundary, so only value constraints live here.

use crate::domain::{InclusionPatch, NewInclusion, NewPackage, NewReview, PackagePatch};
use crate::error::ServiceError;

fn invalid(msg: &str) -> ServiceError {
    ServiceError::Validation(msg.to_string())
}

pub fn validate_new_package(pkg: &NewPackage) -> Result<(), ServiceError> {
    if pkg.name.trim().is_empty() {
        return Err(invalid("Name is required"));
    }
    if let Some(price) = pkg.price {
        validate_price(price)?;
    }
    Ok(())
}

pub fn validate_package_patch(patch: &PackagePatch) -> Result<(), ServiceError> {
    if let Some(name) = &patch.name {
        if name.trim().is_empty() {
            return Err(invalid("Name is required"));
        }
    }
    if let Some(price) = patch.price {
        validate_price(price)?;
    }
    Ok(())
}

pub fn validate_new_inclusion(inc: &NewInclusion) -> Result<(), ServiceError> {
    validate_days(inc.days)?;
    validate_nights(inc.nights)
}

pub fn validate_inclusion_patch(patch: &InclusionPatch) -> Result<(), ServiceError> {
    if let Some(days) = patch.days {
        validate_days(days)?;
    }
    if let Some(nights) = patch.nights {
        validate_nights(nights)?;
    }
    Ok(())
}

pub fn validate_new_review(review: &NewReview) -> Result<(), ServiceError> {
    if !(0.0..=5.0).contains(&review.rating) {
        return Err(invalid("Rating must be between 0 and 5"));
    }
    Ok(())
}

fn validate_price(price: f64) -> Result<(), ServiceError> {
    if !price.is_finite() || price <= 0.0 {
        return Err(invalid("Price must be positive"));
    }
    Ok(())
}

fn validate_days(days: u32) -> Result<(), ServiceError> {
    if days < 1 {
        return Err(invalid("Days must be at least 1"));
    }
    Ok(())
}

fn validate_nights(nights: f64) -> Result<(), ServiceError> {
    if !nights.is_finite() || nights <= 0.0 {
        return Err(invalid("Nights must be positive"));
    }
    Ok(())
}
