use chrono::{DateTime, Utc};
use rusqlite::{Connection, Result, params};

use crate::domain::{NewReview, Review};

pub fn insert_review(conn: &Connection, package_id: i64, review: &NewReview) -> Result<i64> {
  conn.execute(
    "INSERT INTO reviews (package_id, rating, experience, created_at) VALUES (?1, ?2, ?3, ?4)",
    params![
      package_id,
      review.rating,
      review.experience,
      Utc::now().to_rfc3339(),
    ],
  )?;
  Ok(conn.last_insert_rowid())
}

pub fn list_reviews_by_package(conn: &Connection, package_id: i64) -> Result<Vec<Review>> {
  let mut stmt = conn.prepare(
    r#"
    SELECT id, package_id, rating, experience, created_at
    FROM reviews WHERE package_id = ?1 ORDER BY id ASC
    "#,
  )?;

  let reviews = stmt
    .query_map(params![package_id], |row| {
      let created_at: String = row.get(4)?;
      Ok(Review {
        id: row.get(0)?,
        package_id: row.get(1)?,
        rating: row.get(2)?,
        experience: row.get(3)?,
        created_at: DateTime::parse_from_rfc3339(&created_at)
          .map(|dt| dt.with_timezone(&Utc))
          .unwrap_or_else(|_| Utc::now()),
      })
    })?
    .collect::<Result<Vec<_>>>()?;
  Ok(reviews)
}
