//! Example service domain logic.
//!
//! Owns the record-store operations: list, get, create, update, delete and
//! search with pagination. Every operation is a single pass over the stored
//! sequence; a missing ID is a normal outcome (`None` / `false`), never an
//! error. Errors only come from the storage backend.

use std::sync::Arc;

use anyhow::Result;
use chrono::Utc;
use tracing::info;

use crate::domain::commands::example::{
    CreateExampleCommand, SearchExamplesCommand, SearchExamplesResult, UpdateExampleCommand,
};
use crate::domain::models::example::Example;
use crate::storage::{ExampleStorage, InMemoryExampleStore};
use crate::utils::paginate;

/// The two records every fresh process starts with
pub fn fixtures() -> Vec<Example> {
    let now = Utc::now();
    vec![
        Example::new(
            "1".to_string(),
            "Example 1".to_string(),
            "This is an example".to_string(),
            now,
        ),
        Example::new(
            "2".to_string(),
            "Example 2".to_string(),
            "This is another example".to_string(),
            now,
        ),
    ]
}

/// Service for managing example records
#[derive(Clone)]
pub struct ExampleService {
    storage: Arc<dyn ExampleStorage>,
}

impl ExampleService {
    pub fn new(storage: Arc<dyn ExampleStorage>) -> Self {
        Self { storage }
    }

    /// Service over an in-memory store seeded with [`fixtures`]
    pub fn with_fixtures() -> Self {
        info!("Initializing ExampleService...");
        let examples = fixtures();
        info!("Loaded {} examples", examples.len());
        Self::new(Arc::new(InMemoryExampleStore::with_examples(examples)))
    }

    /// All examples in insertion order
    pub async fn list_examples(&self) -> Result<Vec<Example>> {
        self.storage.list_examples().await
    }

    pub async fn get_example(&self, id: &str) -> Result<Option<Example>> {
        self.storage.get_example(id).await
    }

    pub async fn create_example(&self, command: CreateExampleCommand) -> Result<Example> {
        info!("Creating example: {:?}", command);
        let example = self
            .storage
            .insert_example(command.name, command.description, Utc::now())
            .await?;
        info!("Created example {}", example.id);
        Ok(example)
    }

    /// Returns `None` and leaves the store untouched when the ID is unknown
    pub async fn update_example(&self, command: UpdateExampleCommand) -> Result<Option<Example>> {
        info!("Updating example: {:?}", command);
        self.storage
            .update_example(&command.id, command.name, command.description, Utc::now())
            .await
    }

    pub async fn delete_example(&self, id: &str) -> Result<bool> {
        info!("Deleting example {}", id);
        self.storage.delete_example(id).await
    }

    /// Filter by search term (case-insensitive substring of name or
    /// description), then cut out the requested page
    pub async fn search_examples(&self, command: SearchExamplesCommand) -> Result<SearchExamplesResult> {
        info!("Searching examples: {:?}", command);

        let mut examples = self.storage.list_examples().await?;

        if let Some(term) = command.search_term.as_deref().filter(|t| !t.is_empty()) {
            let term_lower = term.to_lowercase();
            examples.retain(|e| e.matches(&term_lower));
        }

        let page = paginate(&examples, command.page, command.limit);
        info!("Search returned {} results", page.total);

        Ok(SearchExamplesResult {
            results: page.items,
            total: page.total,
            page: page.page,
            limit: page.limit,
            total_pages: page.total_pages,
        })
    }
}
