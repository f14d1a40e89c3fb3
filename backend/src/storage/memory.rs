//! In-memory example store. All state lives for the lifetime of the process.

use std::sync::{Arc, RwLock};

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::debug;

use crate::domain::models::example::Example;
use crate::storage::ExampleStorage;

#[derive(Debug, Default)]
struct Inner {
    examples: Vec<Example>,
    /// Highest ID handed out so far; never decreases, so deleted IDs are not reused
    last_id: u64,
}

/// Example store backed by a `Vec` behind a lock
#[derive(Clone, Default)]
pub struct InMemoryExampleStore {
    inner: Arc<RwLock<Inner>>,
}

impl InMemoryExampleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `examples`.
    /// New IDs continue after the largest numeric ID among them.
    pub fn with_examples(examples: Vec<Example>) -> Self {
        let last_id = examples
            .iter()
            .filter_map(|e| e.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0)
            .max(examples.len() as u64);

        Self {
            inner: Arc::new(RwLock::new(Inner { examples, last_id })),
        }
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, Inner>> {
        self.inner.read().map_err(|_| anyhow!("example store lock poisoned"))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, Inner>> {
        self.inner.write().map_err(|_| anyhow!("example store lock poisoned"))
    }
}

#[async_trait]
impl ExampleStorage for InMemoryExampleStore {
    async fn list_examples(&self) -> Result<Vec<Example>> {
        Ok(self.read()?.examples.clone())
    }

    async fn get_example(&self, id: &str) -> Result<Option<Example>> {
        Ok(self.read()?.examples.iter().find(|e| e.id == id).cloned())
    }

    async fn insert_example(&self, name: String, description: String, now: DateTime<Utc>) -> Result<Example> {
        let mut inner = self.write()?;
        inner.last_id += 1;
        let example = Example::new(Example::generate_id(inner.last_id), name, description, now);
        inner.examples.push(example.clone());
        debug!("Stored example {} ({} total)", example.id, inner.examples.len());
        Ok(example)
    }

    async fn update_example(
        &self,
        id: &str,
        name: Option<String>,
        description: Option<String>,
        now: DateTime<Utc>,
    ) -> Result<Option<Example>> {
        let mut inner = self.write()?;
        let Some(example) = inner.examples.iter_mut().find(|e| e.id == id) else {
            return Ok(None);
        };
        example.apply_update(name, description, now);
        Ok(Some(example.clone()))
    }

    async fn delete_example(&self, id: &str) -> Result<bool> {
        let mut inner = self.write()?;
        match inner.examples.iter().position(|e| e.id == id) {
            Some(index) => {
                inner.examples.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_store() -> InMemoryExampleStore {
        let now = Utc::now();
        InMemoryExampleStore::with_examples(vec![
            Example::new("1".to_string(), "First".to_string(), "one".to_string(), now),
            Example::new("2".to_string(), "Second".to_string(), "two".to_string(), now),
        ])
    }

    #[tokio::test]
    async fn test_insert_assigns_next_id() {
        let store = seeded_store();

        let example = store
            .insert_example("Third".to_string(), "three".to_string(), Utc::now())
            .await
            .unwrap();

        assert_eq!(example.id, "3");
        assert_eq!(example.created_at, example.updated_at);
        assert_eq!(store.list_examples().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_empty_store_starts_at_one() {
        let store = InMemoryExampleStore::new();
        let example = store
            .insert_example("a".to_string(), "b".to_string(), Utc::now())
            .await
            .unwrap();
        assert_eq!(example.id, "1");
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_delete() {
        let store = seeded_store();

        assert!(store.delete_example("2").await.unwrap());
        let example = store
            .insert_example("New".to_string(), "new".to_string(), Utc::now())
            .await
            .unwrap();

        assert_eq!(example.id, "3");
        let ids: Vec<String> = store.list_examples().await.unwrap().into_iter().map(|e| e.id).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[tokio::test]
    async fn test_update_missing_returns_none() {
        let store = seeded_store();
        let before = store.list_examples().await.unwrap();

        let result = store
            .update_example("99", Some("x".to_string()), None, Utc::now())
            .await
            .unwrap();

        assert!(result.is_none());
        assert_eq!(store.list_examples().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_returned_values_are_copies() {
        let store = seeded_store();

        let mut fetched = store.get_example("1").await.unwrap().unwrap();
        fetched.name = "Mutated outside".to_string();

        let stored = store.get_example("1").await.unwrap().unwrap();
        assert_eq!(stored.name, "First");
    }

    #[tokio::test]
    async fn test_delete_missing_returns_false() {
        let store = seeded_store();
        assert!(!store.delete_example("nope").await.unwrap());
        assert_eq!(store.list_examples().await.unwrap().len(), 2);
    }
}
