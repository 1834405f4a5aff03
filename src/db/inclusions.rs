use chrono::Utc;
use rusqlite::{Connection, Result, params};

use crate::domain::{Inclusion, InclusionPatch, NewInclusion};

/// Insert the inclusion for a package. The unique index on package_id makes
/// this fail with a constraint violation when one already exists, including
/// under concurrent callers.
pub fn insert_inclusion(conn: &Connection, package_id: i64, inc: &NewInclusion) -> Result<i64> {
  conn.execute(
    r#"
    INSERT INTO inclusions (package_id, days, nights, flight_ticket, train_ticket,
                            bed_and_breakfast, tour_guide, created_at)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
    "#,
    params![
      package_id,
      inc.days,
      inc.nights,
      inc.flight_ticket,
      inc.train_ticket,
      inc.bed_and_breakfast,
      inc.tour_guide,
      Utc::now().to_rfc3339(),
    ],
  )?;
  Ok(conn.last_insert_rowid())
}

pub fn get_inclusion_by_package(conn: &Connection, package_id: i64) -> Result<Option<Inclusion>> {
  let mut stmt = conn.prepare(
    r#"
    SELECT id, package_id, days, nights, flight_ticket, train_ticket,
           bed_and_breakfast, tour_guide
    FROM inclusions WHERE package_id = ?1
    "#,
  )?;

  let mut rows = stmt.query(params![package_id])?;
  if let Some(row) = rows.next()? {
    Ok(Some(row_to_inclusion(row)?))
  } else {
    Ok(None)
  }
}

/// Overlay `patch` on the inclusion owned by `package_id`. Only the six
/// inclusion fields are ever written. Returns false if no record exists.
pub fn patch_inclusion_by_package(
  conn: &Connection,
  package_id: i64,
  patch: &InclusionPatch,
) -> Result<bool> {
  let Some(existing) = get_inclusion_by_package(conn, package_id)? else {
    return Ok(false);
  };

  conn.execute(
    r#"
    UPDATE inclusions
    SET days = ?1, nights = ?2, flight_ticket = ?3, train_ticket = ?4,
        bed_and_breakfast = ?5, tour_guide = ?6
    WHERE id = ?7
    "#,
    params![
      patch.days.unwrap_or(existing.days),
      patch.nights.unwrap_or(existing.nights),
      patch.flight_ticket.unwrap_or(existing.flight_ticket),
      patch.train_ticket.unwrap_or(existing.train_ticket),
      patch.bed_and_breakfast.unwrap_or(existing.bed_and_breakfast),
      patch.tour_guide.unwrap_or(existing.tour_guide),
      existing.id,
    ],
  )?;
  Ok(true)
}

fn row_to_inclusion(row: &rusqlite::Row) -> Result<Inclusion> {
  Ok(Inclusion {
    id: row.get(0)?,
    package_id: row.get(1)?,
    days: row.get(2)?,
    nights: row.get(3)?,
    flight_ticket: row.get(4)?,
    train_ticket: row.get(5)?,
    bed_and_breakfast: row.get(6)?,
    tour_guide: row.get(7)?,
  })
}
