use std::fs;

use anyhow::{Context, Result};
use async_trait::async_trait;
use rusqlite::OptionalExtension;
use serde_json::Value;
use tokio_rusqlite::Connection;

use super::{Collection, Repository, coerce_records};
use crate::core::db::{async_db, initialize_db};

/// Collections stored as serialized JSON in the `kv` table
#[derive(Clone)]
pub struct SqliteStore {
    db: Connection,
}

impl SqliteStore {
    pub fn new(db: Connection) -> Self {
        Self { db }
    }

    /// Open the database in `db_path`, creating the directory and the
    /// `kv` table when they don't exist yet.
    pub async fn open(db_path: &str) -> Result<Self> {
        fs::create_dir_all(db_path)
            .with_context(|| format!("Failed to create db directory {}", db_path))?;
        let db = async_db(db_path)
            .await
            .with_context(|| format!("Failed to open db in {}", db_path))?;
        db.call(|conn| {
            initialize_db(conn)?;
            Ok(())
        })
        .await?;
        Ok(Self::new(db))
    }
}

#[async_trait]
impl Repository for SqliteStore {
    async fn get(&self, collection: Collection) -> Result<Vec<Value>> {
        let key = collection.key();
        let raw: Option<String> = self
            .db
            .call(move |conn| {
                let value = conn
                    .prepare("SELECT value FROM kv WHERE key = ?1")?
                    .query_row([key], |row| row.get(0))
                    .optional()?;
                Ok(value)
            })
            .await?;

        let stored = raw.and_then(|text| match serde_json::from_str::<Value>(&text) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!("Stored value for {} is not valid JSON: {}", collection, err);
                None
            }
        });

        Ok(coerce_records(collection, stored))
    }

    async fn put(&self, collection: Collection, records: Vec<Value>) -> Result<()> {
        let key = collection.key();
        let text = serde_json::to_string(&Value::Array(records))?;
        self.db
            .call(move |conn| {
                conn.execute(
                    "REPLACE INTO kv(key, value, updated_at) VALUES (?1, ?2, datetime('now'))",
                    tokio_rusqlite::params![key, text],
                )?;
                Ok(())
            })
            .await?;
        Ok(())
    }
}
