//! Database connection and key-value operations

use chrono::Utc;
use parking_lot::Mutex;
use rusqlite::{Connection, OptionalExtension};
use std::path::Path;
use std::sync::Arc;

use crate::migrations::run_migrations;
use crate::Result;

pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;

        // WAL mode for better concurrent performance
        let _: String =
            conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))?;

        run_migrations(&conn)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        run_migrations(&conn)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn with_connection<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T>,
    {
        let conn = self.conn.lock();
        f(&conn)
    }

    /// Run `f` inside a transaction. Rolls back if `f` returns an error,
    /// so multi-key writes are all-or-nothing.
    pub fn transaction<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T>,
    {
        let mut conn = self.conn.lock();
        let tx = conn.transaction()?;
        let result = f(&tx)?;
        tx.commit()?;
        Ok(result)
    }

    pub fn get(&self, key: &str) -> Result<Option<String>> {
        self.with_connection(|conn| {
            let value = conn
                .query_row("SELECT value FROM store WHERE key = ?1", [key], |row| {
                    row.get(0)
                })
                .optional()?;
            Ok(value)
        })
    }

    pub fn put(&self, key: &str, value: &str) -> Result<()> {
        self.with_connection(|conn| put_entry(conn, key, value))
    }

    pub fn delete(&self, key: &str) -> Result<()> {
        self.with_connection(|conn| delete_entry(conn, key))
    }

    /// Write several keys in a single transaction.
    pub fn put_many(&self, entries: &[(&str, &str)]) -> Result<()> {
        self.transaction(|conn| {
            for (key, value) in entries {
                put_entry(conn, key, value)?;
            }
            Ok(())
        })
    }

    /// Delete several keys in a single transaction.
    pub fn delete_many(&self, keys: &[&str]) -> Result<()> {
        self.transaction(|conn| {
            for key in keys {
                delete_entry(conn, key)?;
            }
            Ok(())
        })
    }
}

fn put_entry(conn: &Connection, key: &str, value: &str) -> Result<()> {
    let updated_at = Utc::now().to_rfc3339();
    conn.execute(
        "INSERT OR REPLACE INTO store (key, value, updated_at) VALUES (?1, ?2, ?3)",
        rusqlite::params![key, value, updated_at],
    )?;
    Ok(())
}

fn delete_entry(conn: &Connection, key: &str) -> Result<()> {
    conn.execute("DELETE FROM store WHERE key = ?1", [key])?;
    Ok(())
}

impl Clone for Database {
    fn clone(&self) -> Self {
        Self {
            conn: Arc::clone(&self.conn),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StorageError;

    #[test]
    fn test_put_get_delete() {
        let db = Database::open_in_memory().unwrap();

        assert_eq!(db.get("missing").unwrap(), None);

        db.put("token", "t1").unwrap();
        assert_eq!(db.get("token").unwrap(), Some("t1".to_string()));

        // Overwrite
        db.put("token", "t2").unwrap();
        assert_eq!(db.get("token").unwrap(), Some("t2".to_string()));

        db.delete("token").unwrap();
        assert_eq!(db.get("token").unwrap(), None);

        // Deleting an absent key is a no-op
        db.delete("token").unwrap();
        assert_eq!(db.get("token").unwrap(), None);
    }

    #[test]
    fn test_put_many_and_delete_many() {
        let db = Database::open_in_memory().unwrap();

        db.put_many(&[("a", "1"), ("b", "2")]).unwrap();
        assert_eq!(db.get("a").unwrap(), Some("1".to_string()));
        assert_eq!(db.get("b").unwrap(), Some("2".to_string()));

        db.delete_many(&["a", "b"]).unwrap();
        assert_eq!(db.get("a").unwrap(), None);
        assert_eq!(db.get("b").unwrap(), None);
    }

    #[test]
    fn test_transaction_rolls_back_on_error() {
        let db = Database::open_in_memory().unwrap();

        let result: Result<()> = db.transaction(|conn| {
            conn.execute(
                "INSERT INTO store (key, value, updated_at) VALUES ('a', '1', '')",
                [],
            )?;
            Err(StorageError::Migration("forced failure".to_string()))
        });
        assert!(result.is_err());

        // First write must not be visible
        assert_eq!(db.get("a").unwrap(), None);
    }
}
