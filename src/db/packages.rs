use chrono::{DateTime, Utc};
use rusqlite::{Connection, Result, params};

use crate::domain::{NewPackage, Package, PackageKind, PackagePatch};

pub fn insert_package(conn: &Connection, pkg: &NewPackage) -> Result<i64> {
  conn.execute(
    r#"
    INSERT INTO package (name, price, location, description, kind, number_of_adults,
                         number_of_children, image_urls, features, created_at)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
    "#,
    params![
      pkg.name,
      pkg.price,
      pkg.location,
      pkg.description,
      pkg.kind.map(|k| k.as_str()),
      pkg.number_of_adults,
      pkg.number_of_children,
      serde_json::to_string(&pkg.image_urls).unwrap_or_else(|_| "[]".to_string()),
      serde_json::to_string(&pkg.features).unwrap_or_else(|_| "[]".to_string()),
      Utc::now().to_rfc3339(),
    ],
  )?;
  Ok(conn.last_insert_rowid())
}

pub fn get_package_by_id(conn: &Connection, id: i64) -> Result<Option<Package>> {
  let mut stmt = conn.prepare(
    r#"
    SELECT id, name, price, location, description, kind, number_of_adults,
           number_of_children, image_urls, features, created_at
    FROM package WHERE id = ?1
    "#,
  )?;

  let mut rows = stmt.query(params![id])?;
  if let Some(row) = rows.next()? {
    Ok(Some(row_to_package(row)?))
  } else {
    Ok(None)
  }
}

/// All packages in rowid order (insertion order as the store exposes it)
pub fn list_packages(conn: &Connection) -> Result<Vec<Package>> {
  let mut stmt = conn.prepare(
    r#"
    SELECT id, name, price, location, description, kind, number_of_adults,
           number_of_children, image_urls, features, created_at
    FROM package ORDER BY id ASC
    "#,
  )?;

  let packages = stmt
    .query_map([], |row| row_to_package(row))?
    .collect::<Result<Vec<_>>>()?;
  Ok(packages)
}

/// Overlay `patch` on the stored record and write it back. Fields absent
/// from the patch keep their stored value. Returns false if `id` is absent.
pub fn patch_package(conn: &Connection, id: i64, patch: &PackagePatch) -> Result<bool> {
  let Some(existing) = get_package_by_id(conn, id)? else {
    return Ok(false);
  };

  let name = patch.name.as_ref().unwrap_or(&existing.name);
  let price = patch.price.or(existing.price);
  let location = patch.location.as_ref().or(existing.location.as_ref());
  let description = patch.description.as_ref().or(existing.description.as_ref());
  let kind = patch.kind.or(existing.kind);
  let number_of_adults = patch.number_of_adults.or(existing.number_of_adults);
  let number_of_children = patch.number_of_children.or(existing.number_of_children);
  let image_urls = patch.image_urls.as_ref().unwrap_or(&existing.image_urls);
  let features = patch.features.as_ref().unwrap_or(&existing.features);

  conn.execute(
    r#"
    UPDATE package
    SET name = ?1, price = ?2, location = ?3, description = ?4, kind = ?5,
        number_of_adults = ?6, number_of_children = ?7, image_urls = ?8, features = ?9
    WHERE id = ?10
    "#,
    params![
      name,
      price,
      location,
      description,
      kind.map(|k| k.as_str()),
      number_of_adults,
      number_of_children,
      serde_json::to_string(image_urls).unwrap_or_else(|_| "[]".to_string()),
      serde_json::to_string(features).unwrap_or_else(|_| "[]".to_string()),
      id,
    ],
  )?;
  Ok(true)
}

/// Remove the record permanently. Dependent inclusions and reviews are
/// left in place. Returns false if `id` is absent.
pub fn delete_package(conn: &Connection, id: i64) -> Result<bool> {
  let affected = conn.execute("DELETE FROM package WHERE id = ?1", params![id])?;
  Ok(affected > 0)
}

fn row_to_package(row: &rusqlite::Row) -> Result<Package> {
  let kind: Option<String> = row.get(5)?;
  let image_urls: String = row.get(8)?;
  let features: String = row.get(9)?;
  let created_at: String = row.get(10)?;

  Ok(Package {
    id: row.get(0)?,
    name: row.get(1)?,
    price: row.get(2)?,
    location: row.get(3)?,
    description: row.get(4)?,
    kind: kind.as_deref().and_then(PackageKind::from_str),
    number_of_adults: row.get(6)?,
    number_of_children: row.get(7)?,
    image_urls: serde_json::from_str(&image_urls).unwrap_or_default(),
    features: serde_json::from_str(&features).unwrap_or_default(),
    created_at: DateTime::parse_from_rfc3339(&created_at)
      .map(|dt| dt.with_timezone(&Utc))
      .unwrap_or_else(|_| Utc::now()),
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::Feature;
  use crate::testing::TestEnv;

  fn sample_package() -> NewPackage {
    NewPackage {
      name: "Diani Package".to_string(),
      price: Some(500.0),
      location: Some("Diani Beach".to_string()),
      description: None,
      kind: Some(PackageKind::Individual),
      number_of_adults: Some(2),
      number_of_children: Some(0),
      image_urls: vec!["https://cdn.example/diani.jpg".to_string()],
      features: vec![Feature {
        name: "Snorkeling".to_string(),
        additional_charge: true,
      }],
    }
  }

  #[test]
  fn test_insert_then_get_roundtrip() {
    let env = TestEnv::new().unwrap();
    let id = insert_package(&env.conn, &sample_package()).unwrap();

    let pkg = get_package_by_id(&env.conn, id).unwrap().unwrap();
    assert_eq!(pkg.id, id);
    assert_eq!(pkg.name, "Diani Package");
    assert_eq!(pkg.price, Some(500.0));
    assert_eq!(pkg.kind, Some(PackageKind::Individual));
    assert_eq!(pkg.image_urls, vec!["https://cdn.example/diani.jpg"]);
    assert_eq!(pkg.features.len(), 1);
    assert_eq!(pkg.description, None);
  }

  #[test]
  fn test_list_in_insertion_order() {
    let env = TestEnv::new().unwrap();
    let mut first = sample_package();
    first.name = "First".to_string();
    let mut second = sample_package();
    second.name = "Second".to_string();

    insert_package(&env.conn, &first).unwrap();
    insert_package(&env.conn, &second).unwrap();

    let all = list_packages(&env.conn).unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].name, "First");
    assert_eq!(all[1].name, "Second");
  }

  #[test]
  fn test_patch_only_touches_supplied_fields() {
    let env = TestEnv::new().unwrap();
    let id = insert_package(&env.conn, &sample_package()).unwrap();

    let patch = PackagePatch {
      price: Some(750.0),
      ..Default::default()
    };
    assert!(patch_package(&env.conn, id, &patch).unwrap());

    let pkg = get_package_by_id(&env.conn, id).unwrap().unwrap();
    assert_eq!(pkg.price, Some(750.0));
    assert_eq!(pkg.name, "Diani Package");
    assert_eq!(pkg.location, Some("Diani Beach".to_string()));
    assert_eq!(pkg.image_urls.len(), 1);
  }

  #[test]
  fn test_empty_patch_is_noop() {
    let env = TestEnv::new().unwrap();
    let id = insert_package(&env.conn, &sample_package()).unwrap();
    let before = get_package_by_id(&env.conn, id).unwrap().unwrap();

    assert!(patch_package(&env.conn, id, &PackagePatch::default()).unwrap());

    let after = get_package_by_id(&env.conn, id).unwrap().unwrap();
    assert_eq!(after.name, before.name);
    assert_eq!(after.price, before.price);
    assert_eq!(after.kind, before.kind);
    assert_eq!(after.image_urls, before.image_urls);
    assert_eq!(after.features, before.features);
  }

  #[test]
  fn test_patch_missing_package() {
    let env = TestEnv::new().unwrap();
    assert!(!patch_package(&env.conn, 42, &PackagePatch::default()).unwrap());
  }

  #[test]
  fn test_delete_then_get_none() {
    let env = TestEnv::new().unwrap();
    let id = insert_package(&env.conn, &sample_package()).unwrap();

    assert!(delete_package(&env.conn, id).unwrap());
    assert!(get_package_by_id(&env.conn, id).unwrap().is_none());
    assert!(!delete_package(&env.conn, id).unwrap());
  }

  #[test]
  fn test_ids_not_reused_after_delete() {
    let env = TestEnv::new().unwrap();
    let first = insert_package(&env.conn, &sample_package()).unwrap();
    delete_package(&env.conn, first).unwrap();

    let second = insert_package(&env.conn, &sample_package()).unwrap();
    assert!(second > first);
  }
}
