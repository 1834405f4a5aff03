use serde::{Deserialize, Serialize};

/// Bundled perks attached to a package. At most one exists per package.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Inclusion {
  pub id: i64,
  pub package_id: i64,
  pub days: u32,
  pub nights: f64,
  pub flight_ticket: bool,
  pub train_ticket: bool,
  pub bed_and_breakfast: bool,
  pub tour_guide: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInclusion {
  pub days: u32,
  pub nights: f64,
  pub flight_ticket: bool,
  pub train_ticket: bool,
  pub bed_and_breakfast: bool,
  pub tour_guide: bool,
}

/// Partial patch over the fixed inclusion field list. Unlike the package
/// patch, nothing outside these six fields is ever merged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InclusionPatch {
  pub days: Option<u32>,
  pub nights: Option<f64>,
  pub flight_ticket: Option<bool>,
  pub train_ticket: Option<bool>,
  pub bed_and_breakfast: Option<bool>,
  pub tour_guide: Option<bool>,
}
