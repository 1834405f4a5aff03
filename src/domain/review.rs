use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A guest review of a package. Many may exist per package; reviews are
/// never updated or deleted once submitted.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
  pub id: i64,
  pub package_id: i64,
  pub rating: f64,
  pub experience: String,
  pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReview {
  pub rating: f64,
  pub experience: String,
}
