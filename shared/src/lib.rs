use serde::{Deserialize, Deserializer, Serialize};

/// Page used when a search request does not name one
pub const DEFAULT_PAGE: u32 = 1;
/// Page size used when a search request does not name one
pub const DEFAULT_LIMIT: u32 = 10;

/// An example record as exposed over the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Example {
    /// Unique identifier, a decimal counter rendered as a string
    pub id: String,
    pub name: String,
    pub description: String,
    /// Creation timestamp (RFC 3339)
    pub created_at: String,
    /// Last update timestamp (RFC 3339)
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateExampleRequest {
    pub name: String,
    pub description: String,
}

/// Partial update; absent fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateExampleRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchExampleRequest {
    /// Case-insensitive substring matched against name and description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_term: Option<String>,
    /// 1-based page number. Accepts a JSON number or a numeric string.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_lenient_integer"
    )]
    pub page: Option<i64>,
    /// Number of items per page. Accepts a JSON number or a numeric string.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_lenient_integer"
    )]
    pub limit: Option<i64>,
}

impl SearchExampleRequest {
    pub fn page_or_default(&self) -> i64 {
        self.page.unwrap_or(DEFAULT_PAGE as i64)
    }

    pub fn limit_or_default(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_LIMIT as i64)
    }
}

/// Read an optional integer sent either as a JSON number or as a string such as `"2"`.
/// Range checks are left to the caller, so negative values come through intact.
fn deserialize_lenient_integer<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IntegerOrString {
        Integer(i64),
        Text(String),
    }

    match Option::<IntegerOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(IntegerOrString::Integer(value)) => Ok(Some(value)),
        Some(IntegerOrString::Text(text)) => text
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("expected an integer, got \"{}\"", text))),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchExampleResponse {
    pub results: Vec<Example>,
    /// Number of records matching the search term, across all pages
    pub total: usize,
    pub page: u32,
    pub limit: u32,
    pub total_pages: u32,
}

/// Process memory figures, each formatted as "<megabytes> MB"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryUsage {
    pub rss: String,
    pub virtual_size: String,
    pub peak_rss: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub memory_usage: MemoryUsage,
}

/// Error body returned by every failing endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_example_serializes_camel_case() {
        let example = Example {
            id: "1".to_string(),
            name: "Example 1".to_string(),
            description: "This is an example".to_string(),
            created_at: "2025-01-01T00:00:00+00:00".to_string(),
            updated_at: "2025-01-02T00:00:00+00:00".to_string(),
        };

        let value = serde_json::to_value(&example).unwrap();
        assert_eq!(value["createdAt"], "2025-01-01T00:00:00+00:00");
        assert_eq!(value["updatedAt"], "2025-01-02T00:00:00+00:00");
        assert!(value.get("created_at").is_none());
    }

    #[test]
    fn test_search_request_defaults() {
        let request: SearchExampleRequest = serde_json::from_value(json!({})).unwrap();
        assert_eq!(request.search_term, None);
        assert_eq!(request.page_or_default(), 1);
        assert_eq!(request.limit_or_default(), 10);

        let request: SearchExampleRequest =
            serde_json::from_value(json!({"searchTerm": "abc", "page": 3, "limit": 5})).unwrap();
        assert_eq!(request.search_term.as_deref(), Some("abc"));
        assert_eq!(request.page_or_default(), 3);
        assert_eq!(request.limit_or_default(), 5);
    }

    #[test]
    fn test_search_request_accepts_numeric_strings_and_negatives() {
        let request: SearchExampleRequest =
            serde_json::from_value(json!({"page": "2", "limit": " 5 "})).unwrap();
        assert_eq!(request.page, Some(2));
        assert_eq!(request.limit, Some(5));

        let request: SearchExampleRequest =
            serde_json::from_value(json!({"page": -1, "limit": null})).unwrap();
        assert_eq!(request.page, Some(-1));
        assert_eq!(request.limit, None);

        assert!(serde_json::from_value::<SearchExampleRequest>(json!({"page": "two"})).is_err());
    }

    #[test]
    fn test_update_request_accepts_partial_body() {
        let request: UpdateExampleRequest =
            serde_json::from_value(json!({"description": "only this"})).unwrap();
        assert_eq!(request.name, None);
        assert_eq!(request.description.as_deref(), Some("only this"));
    }
}
