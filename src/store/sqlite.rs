//! SQLite-backed link store.
//!
//! Wraps a `rusqlite::Connection` and runs idempotent schema migrations on
//! open. Links are stored with an explicit `position` column so `get_all`
//! returns exactly the order that was written (newest first); tags are
//! stored as a JSON array string.

use rusqlite::{params, Connection};
use std::path::Path;

use super::LinkStore;
use crate::types::errors::StoreError;
use crate::types::link::Link;

/// Link store backed by a SQLite database.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens (or creates) a SQLite database at the given path and runs
    /// migrations.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(path).map_err(db_err)?;
        let store = Self { conn };
        store.run_migrations()?;
        log::debug!("opened sqlite link store");
        Ok(store)
    }

    /// Opens an in-memory database and runs migrations.
    ///
    /// Useful for testing — the store is discarded when dropped.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory().map_err(db_err)?;
        let store = Self { conn };
        store.run_migrations()?;
        Ok(store)
    }

    /// Creates tables and indexes if they do not exist. Uses `IF NOT EXISTS`
    /// so the method is idempotent and safe to call on every open.
    ///
    /// `url` deliberately has no UNIQUE constraint: uniqueness is enforced
    /// at the point of insertion and import, not by the store.
    fn run_migrations(&self) -> Result<(), StoreError> {
        self.conn
            .execute(
                "CREATE TABLE IF NOT EXISTS links (
                    id TEXT PRIMARY KEY,
                    url TEXT NOT NULL,
                    title TEXT NOT NULL,
                    tags TEXT NOT NULL,
                    saved_at TEXT NOT NULL,
                    position INTEGER NOT NULL
                )",
                [],
            )
            .map_err(db_err)?;
        self.conn
            .execute(
                "CREATE INDEX IF NOT EXISTS idx_links_position ON links (position)",
                [],
            )
            .map_err(db_err)?;
        Ok(())
    }

    /// Reads a single link row into a struct.
    fn row_to_link(row: &rusqlite::Row) -> rusqlite::Result<(Link, String)> {
        let tags_json: String = row.get(3)?;
        Ok((
            Link {
                id: row.get(0)?,
                url: row.get(1)?,
                title: row.get(2)?,
                tags: Vec::new(),
                saved_at: row.get(4)?,
            },
            tags_json,
        ))
    }
}

impl LinkStore for SqliteStore {
    fn get_all(&self) -> Result<Vec<Link>, StoreError> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT id, url, title, tags, saved_at FROM links ORDER BY position",
            )
            .map_err(db_err)?;

        let rows = stmt.query_map([], Self::row_to_link).map_err(db_err)?;

        let mut links = Vec::new();
        for row in rows {
            let (mut link, tags_json) = row.map_err(db_err)?;
            link.tags = serde_json::from_str(&tags_json)
                .map_err(|e| StoreError::Serialization(e.to_string()))?;
            links.push(link);
        }
        Ok(links)
    }

    fn delete_by_id(&mut self, id: &str) -> Result<(), StoreError> {
        // Zero rows affected is not an error; the id is absent either way.
        self.conn
            .execute("DELETE FROM links WHERE id = ?1", params![id])
            .map_err(db_err)?;
        Ok(())
    }

    fn replace_all(&mut self, links: &[Link]) -> Result<(), StoreError> {
        let tx = self.conn.transaction().map_err(db_err)?;
        tx.execute("DELETE FROM links", []).map_err(db_err)?;
        for (position, link) in links.iter().enumerate() {
            let tags_json = serde_json::to_string(&link.tags)
                .map_err(|e| StoreError::Serialization(e.to_string()))?;
            tx.execute(
                "INSERT INTO links (id, url, title, tags, saved_at, position) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    link.id,
                    link.url,
                    link.title,
                    tags_json,
                    link.saved_at,
                    position as i64
                ],
            )
            .map_err(db_err)?;
        }
        tx.commit().map_err(db_err)
    }
}

fn db_err(e: rusqlite::Error) -> StoreError {
    StoreError::DatabaseError(e.to_string())
}
