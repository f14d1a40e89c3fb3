//! Domain-level command and query types.
//! These structs are used by services inside the domain layer and are **not**
//! exposed over the public API. The REST layer maps the DTOs from the
//! `shared` crate onto them.

pub mod example {
    use crate::domain::models::example::Example;

    /// Input for creating a new example.
    #[derive(Debug, Clone)]
    pub struct CreateExampleCommand {
        pub name: String,
        pub description: String,
    }

    /// Input for a partial update. `None` fields are left as they are.
    #[derive(Debug, Clone)]
    pub struct UpdateExampleCommand {
        pub id: String,
        pub name: Option<String>,
        pub description: Option<String>,
    }

    /// Filter and page selection for a search.
    #[derive(Debug, Clone)]
    pub struct SearchExamplesCommand {
        pub search_term: Option<String>,
        pub page: u32,
        pub limit: u32,
    }

    impl Default for SearchExamplesCommand {
        fn default() -> Self {
            Self {
                search_term: None,
                page: shared::DEFAULT_PAGE,
                limit: shared::DEFAULT_LIMIT,
            }
        }
    }

    /// One page of search results.
    #[derive(Debug, Clone)]
    pub struct SearchExamplesResult {
        pub results: Vec<Example>,
        pub total: usize,
        pub page: u32,
        pub limit: u32,
        pub total_pages: u32,
    }
}
