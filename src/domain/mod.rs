pub mod inclusion;
pub mod package;
pub mod review;

pub use inclusion::{Inclusion, InclusionPatch, NewInclusion};
pub use package::{Feature, NewPackage, Package, PackageKind, PackagePatch};
pub use review::{NewReview, Review};
