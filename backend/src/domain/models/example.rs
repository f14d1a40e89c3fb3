//! Domain model for an example record.
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct Example {
    pub id: String,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Example {
    /// Build a fresh record with both timestamps set to `now`
    pub fn new(id: String, name: String, description: String, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name,
            description,
            created_at: now,
            updated_at: now,
        }
    }

    /// Render a counter value as a record ID
    pub fn generate_id(counter: u64) -> String {
        counter.to_string()
    }

    /// Case-insensitive substring match against name and description.
    /// `term_lower` must already be lowercased.
    pub fn matches(&self, term_lower: &str) -> bool {
        self.name.to_lowercase().contains(term_lower)
            || self.description.to_lowercase().contains(term_lower)
    }

    /// Merge the provided fields and refresh `updated_at`
    pub fn apply_update(&mut self, name: Option<String>, description: Option<String>, now: DateTime<Utc>) {
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(description) = description {
            self.description = description;
        }
        self.updated_at = now;
    }
}
