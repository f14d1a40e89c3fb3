//! # Storage Traits
//!
//! Storage abstraction used by the domain layer, so the in-memory store can
//! be swapped for a real database without touching the services.

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::models::example::Example;

/// Trait defining the interface for example storage operations
#[async_trait]
pub trait ExampleStorage: Send + Sync {
    /// All examples in insertion order
    async fn list_examples(&self) -> Result<Vec<Example>>;

    /// Retrieve a specific example by ID
    async fn get_example(&self, id: &str) -> Result<Option<Example>>;

    /// Assign the next ID, append the example and return it
    async fn insert_example(&self, name: String, description: String, now: DateTime<Utc>) -> Result<Example>;

    /// Merge the given fields into an existing example.
    /// Returns `None` when no example has the given ID.
    async fn update_example(
        &self,
        id: &str,
        name: Option<String>,
        description: Option<String>,
        now: DateTime<Utc>,
    ) -> Result<Option<Example>>;

    /// Returns true if the example was found and deleted, false otherwise
    async fn delete_example(&self, id: &str) -> Result<bool>;
}
