use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;

// NOTE: Preference store
//
// - One kv table; values are JSON strings, so typed accessors share a
//   single get/set pair and new keys need no migration
// - Reads fall back to None on any failure (missing row, unreadable
//   value); every preference has a usable default
// - Writes return errors; a failed set must be visible to the caller

pub struct Store {
    conn: Connection,
}

impl Store {
    pub fn open(db_path: &Path) -> Result<Self> {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create data dir: {}", parent.display()))?;
        }
        let conn = Connection::open(db_path)
            .with_context(|| format!("Failed to open store: {}", db_path.display()))?;

        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> Result<()> {
        self.conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );
            "#,
        )?;

        Ok(())
    }

    /// Read and decode a value. Any failure reads as `None`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw: Option<String> = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()
            .ok()
            .flatten();

        raw.and_then(|value| serde_json::from_str(&value).ok())
    }

    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value)?;
        self.conn.execute(
            r#"
            INSERT INTO kv (key, value)
            VALUES (?1, ?2)
            ON CONFLICT(key) DO UPDATE SET
                value = ?2
            "#,
            params![key, raw],
        )?;

        Ok(())
    }

    pub fn remove(&self, key: &str) -> Result<()> {
        self.conn.execute("DELETE FROM kv WHERE key = ?1", [key])?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_reads_as_none() {
        let store = Store::open_in_memory().unwrap();

        assert_eq!(store.get::<String>("absent"), None);
    }

    #[test]
    fn test_set_then_get_round_trips() {
        let store = Store::open_in_memory().unwrap();

        store.set("greeting", &"hello".to_string()).unwrap();

        assert_eq!(store.get::<String>("greeting"), Some("hello".to_string()));
    }

    #[test]
    fn test_set_overwrites_existing_value() {
        let store = Store::open_in_memory().unwrap();

        store.set("count", &1u32).unwrap();
        store.set("count", &2u32).unwrap();

        assert_eq!(store.get::<u32>("count"), Some(2));
    }

    #[test]
    fn test_remove_deletes_key() {
        let store = Store::open_in_memory().unwrap();

        store.set("temp", &"value".to_string()).unwrap();
        store.remove("temp").unwrap();

        assert_eq!(store.get::<String>("temp"), None);
    }

    #[test]
    fn test_remove_missing_key_is_ok() {
        let store = Store::open_in_memory().unwrap();

        assert!(store.remove("never-set").is_ok());
    }

    #[test]
    fn test_undecodable_value_reads_as_none() {
        let store = Store::open_in_memory().unwrap();

        store
            .conn
            .execute(
                "INSERT INTO kv (key, value) VALUES (?1, ?2)",
                params!["broken", "not json"],
            )
            .unwrap();

        assert_eq!(store.get::<String>("broken"), None);
    }

    #[test]
    fn test_store_persists_across_opens() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("folio.db");

        {
            let store = Store::open(&db_path).unwrap();
            store.set("kept", &"still here".to_string()).unwrap();
        }

        let reopened = Store::open(&db_path).unwrap();
        assert_eq!(
            reopened.get::<String>("kept"),
            Some("still here".to_string())
        );
    }

    #[test]
    fn test_open_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("nested").join("dirs").join("folio.db");

        let store = Store::open(&db_path).unwrap();
        store.set("key", &"value".to_string()).unwrap();

        assert!(db_path.exists());
    }
}
