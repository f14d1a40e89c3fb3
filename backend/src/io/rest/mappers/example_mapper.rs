use shared::{
    CreateExampleRequest, Example, SearchExampleRequest, SearchExampleResponse, UpdateExampleRequest,
};

use crate::domain::commands::example::{
    CreateExampleCommand, SearchExamplesCommand, SearchExamplesResult, UpdateExampleCommand,
};
use crate::domain::models::example::Example as DomainExample;

pub struct ExampleMapper;

impl ExampleMapper {
    /// Convert domain Example to shared Example DTO
    pub fn to_dto(domain: DomainExample) -> Example {
        Example {
            id: domain.id,
            name: domain.name,
            description: domain.description,
            created_at: domain.created_at.to_rfc3339(),
            updated_at: domain.updated_at.to_rfc3339(),
        }
    }

    pub fn to_dto_list(domain_examples: Vec<DomainExample>) -> Vec<Example> {
        domain_examples.into_iter().map(Self::to_dto).collect()
    }

    pub fn to_create_command(request: CreateExampleRequest) -> CreateExampleCommand {
        CreateExampleCommand {
            name: request.name,
            description: request.description,
        }
    }

    pub fn to_update_command(id: String, request: UpdateExampleRequest) -> UpdateExampleCommand {
        UpdateExampleCommand {
            id,
            name: request.name,
            description: request.description,
        }
    }

    /// Fill in default page and limit. Values must already be checked to be at least 1;
    /// anything beyond `u32::MAX` is clamped.
    pub fn to_search_command(request: SearchExampleRequest) -> SearchExamplesCommand {
        let clamp = |value: i64| u32::try_from(value.max(1)).unwrap_or(u32::MAX);
        SearchExamplesCommand {
            page: clamp(request.page_or_default()),
            limit: clamp(request.limit_or_default()),
            search_term: request.search_term,
        }
    }

    pub fn to_search_response(result: SearchExamplesResult) -> SearchExampleResponse {
        SearchExampleResponse {
            results: Self::to_dto_list(result.results),
            total: result.total,
            page: result.page,
            limit: result.limit,
            total_pages: result.total_pages,
        }
    }
}
