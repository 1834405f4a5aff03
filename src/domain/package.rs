use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Package audience, `individual` or `corporate` on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageKind {
  Individual,
  Corporate,
}

impl PackageKind {
  pub fn from_str(s: &str) -> Option<Self> {
    match s {
      "individual" => Some(Self::Individual),
      "corporate" => Some(Self::Corporate),
      _ => None,
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Individual => "individual",
      Self::Corporate => "corporate",
    }
  }
}

/// A named perk a package advertises, optionally billed on top of the price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
  pub name: String,
  pub additional_charge: bool,
}

/// A travel offering. The identifier is assigned by the store on creation
/// and never reused after deletion.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
  pub id: i64,
  pub name: String,
  pub price: Option<f64>,
  pub location: Option<String>,
  pub description: Option<String>,
  #[serde(rename = "type")]
  pub kind: Option<PackageKind>,
  pub number_of_adults: Option<u32>,
  pub number_of_children: Option<u32>,
  pub image_urls: Vec<String>,
  pub features: Vec<Feature>,
  pub created_at: DateTime<Utc>,
}

/// Fields accepted by package creation; only `name` is mandatory.
/// Image URLs come from the external upload pipeline and are opaque here.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPackage {
  pub name: String,
  pub price: Option<f64>,
  pub location: Option<String>,
  pub description: Option<String>,
  #[serde(rename = "type")]
  pub kind: Option<PackageKind>,
  pub number_of_adults: Option<u32>,
  pub number_of_children: Option<u32>,
  #[serde(default)]
  pub image_urls: Vec<String>,
  #[serde(default)]
  pub features: Vec<Feature>,
}

/// Partial patch over the full package attribute set.
/// `None` means leave the stored value unchanged; patches never clear a field.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackagePatch {
  pub name: Option<String>,
  pub price: Option<f64>,
  pub location: Option<String>,
  pub description: Option<String>,
  #[serde(rename = "type")]
  pub kind: Option<PackageKind>,
  pub number_of_adults: Option<u32>,
  pub number_of_children: Option<u32>,
  pub image_urls: Option<Vec<String>>,
  pub features: Option<Vec<Feature>>,
}
