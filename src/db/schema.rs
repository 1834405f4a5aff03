use rusqlite::{Connection, Result};

pub fn run_migrations(conn: &Connection) -> Result<()> {
  // AUTOINCREMENT keeps rowids monotonic so an identifier is never reused
  // after its record is deleted.
  //
  // package_id columns carry no foreign key on purpose: inclusions and
  // reviews outlive a deleted package (the orphan is part of the contract,
  // see DESIGN.md).
  conn.execute_batch(
    r#"
    CREATE TABLE IF NOT EXISTS package (
      id INTEGER PRIMARY KEY AUTOINCREMENT,
      name TEXT NOT NULL,
      price REAL,
      location TEXT,
      description TEXT,
      kind TEXT,
      number_of_adults INTEGER,
      number_of_children INTEGER,
      image_urls TEXT NOT NULL DEFAULT '[]',
      features TEXT NOT NULL DEFAULT '[]',
      created_at TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS inclusions (
      id INTEGER PRIMARY KEY AUTOINCREMENT,
      package_id INTEGER NOT NULL,
      days INTEGER NOT NULL,
      nights REAL NOT NULL,
      flight_ticket INTEGER NOT NULL DEFAULT 0,
      train_ticket INTEGER NOT NULL DEFAULT 0,
      bed_and_breakfast INTEGER NOT NULL DEFAULT 0,
      tour_guide INTEGER NOT NULL DEFAULT 0,
      created_at TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS reviews (
      id INTEGER PRIMARY KEY AUTOINCREMENT,
      package_id INTEGER NOT NULL,
      rating REAL NOT NULL,
      experience TEXT NOT NULL,
      created_at TEXT NOT NULL
    );

    -- Indexes
    -- The unique index enforces at-most-one inclusion per package at the
    -- store level; concurrent create calls cannot both succeed.
    CREATE UNIQUE INDEX IF NOT EXISTS idx_inclusions_package_id ON inclusions(package_id);
    CREATE INDEX IF NOT EXISTS idx_reviews_package_id ON reviews(package_id);
    "#,
  )?;

  Ok(())
}
