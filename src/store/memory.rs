use std::collections::HashMap;
use std::sync::RwLock;

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use serde_json::Value;

use super::{Collection, Repository, coerce_records};

/// In-memory store, mostly useful for tests.
#[derive(Default)]
pub struct MemoryStore {
    values: RwLock<HashMap<Collection, Value>>,
}

impl MemoryStore {
    /// Store an arbitrary value under a key, bypassing the array shape
    /// that `put` enforces.
    pub fn insert_raw(&self, collection: Collection, value: Value) {
        self.values
            .write()
            .expect("Unable to write memory store")
            .insert(collection, value);
    }
}

#[async_trait]
impl Repository for MemoryStore {
    async fn get(&self, collection: Collection) -> Result<Vec<Value>> {
        let stored = self
            .values
            .read()
            .map_err(|_| anyhow!("Memory store lock poisoned"))?
            .get(&collection)
            .cloned();
        Ok(coerce_records(collection, stored))
    }

    async fn put(&self, collection: Collection, records: Vec<Value>) -> Result<()> {
        self.values
            .write()
            .map_err(|_| anyhow!("Memory store lock poisoned"))?
            .insert(collection, Value::Array(records));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn it_treats_tampered_values_as_empty() -> Result<()> {
        let store = MemoryStore::default();
        store.insert_raw(Collection::Rendezvous, json!({"not": "an array"}));
        assert!(store.get(Collection::Rendezvous).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn it_overwrites_on_put() -> Result<()> {
        let store = MemoryStore::default();
        store.put(Collection::Auxiliaires, vec![json!(1)]).await?;
        store.put(Collection::Auxiliaires, vec![json!(2)]).await?;
        assert_eq!(store.get(Collection::Auxiliaires).await?, vec![json!(2)]);
        Ok(())
    }
}
