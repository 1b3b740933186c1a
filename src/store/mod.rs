//! Collection storage.
//!
//! Everything the dashboard persists is a JSON array stored under one of
//! a handful of fixed keys. Callers only ever see the [`Repository`]
//! trait so the SQLite backed store can be swapped for the in-memory
//! one in tests.
pub mod decode;
mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use std::fmt;
use std::str::FromStr;

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Rendezvous,
    Beneficiaires,
    Auxiliaires,
    Taches,
}

impl Collection {
    pub const ALL: [Collection; 4] = [
        Collection::Rendezvous,
        Collection::Beneficiaires,
        Collection::Auxiliaires,
        Collection::Taches,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Collection::Rendezvous => "rendezvous",
            Collection::Beneficiaires => "beneficiaires",
            Collection::Auxiliaires => "auxiliaires",
            Collection::Taches => "taches",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Collection {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Collection::ALL
            .into_iter()
            .find(|c| c.key() == s)
            .ok_or_else(|| anyhow!("Unknown collection {}", s))
    }
}

/// Key-value persistence surface. `get` never fails on missing or
/// corrupt data, it returns an empty list instead. `put` replaces the
/// whole collection.
#[async_trait]
pub trait Repository: Send + Sync {
    async fn get(&self, collection: Collection) -> Result<Vec<Value>>;
    async fn put(&self, collection: Collection, records: Vec<Value>) -> Result<()>;
}

/// Turn whatever was stored under a key into a list of records.
pub(crate) fn coerce_records(collection: Collection, stored: Option<Value>) -> Vec<Value> {
    match stored {
        None => vec![],
        Some(Value::Array(records)) => records,
        Some(other) => {
            tracing::warn!(
                "Ignoring non-array value stored under {}: {}",
                collection,
                other
            );
            vec![]
        }
    }
}

/// Read a collection and decode each record, skipping the ones that
/// don't fit `T`.
pub async fn load<T: DeserializeOwned>(
    repo: &dyn Repository,
    collection: Collection,
) -> Result<Vec<T>> {
    let records = repo.get(collection).await?;
    let decoded = records
        .into_iter()
        .filter_map(|record| match serde_json::from_value::<T>(record) {
            Ok(item) => Some(item),
            Err(err) => {
                tracing::debug!("Skipping malformed record in {}: {}", collection, err);
                None
            }
        })
        .collect();
    Ok(decoded)
}

/// Append one record and write the full collection back.
pub async fn append(repo: &dyn Repository, collection: Collection, record: Value) -> Result<()> {
    let mut records = repo.get(collection).await?;
    records.push(record);
    repo.put(collection, records).await
}
