//! OpenAPI fragment describing the movie endpoints.

use modkit::api::problem::{Problem, APPLICATION_PROBLEM_JSON};
use modkit::api::query::{FILTER_PARAM, PAGE_PARAM, PAGE_SIZE_PARAM, SORT_PARAM};
use query_core::PageDescriptor;
use utoipa::openapi::path::{
    HttpMethod, OperationBuilder, Parameter, ParameterBuilder, ParameterIn, PathItem,
};
use utoipa::openapi::schema::{ObjectBuilder, Type};
use utoipa::openapi::{
    ComponentsBuilder, Content, InfoBuilder, OpenApi, OpenApiBuilder, PathsBuilder, Ref, Required,
    Response, ResponseBuilder,
};

use crate::api::rest::dto::{AwardsDto, MovieDto};
use crate::api::rest::routes::{MOVIES_PATH, MOVIE_PATH};

const TAG: &str = "movies";

fn param(
    name: &str,
    location: ParameterIn,
    ty: Type,
    required: bool,
    description: &str,
) -> Parameter {
    ParameterBuilder::new()
        .name(name)
        .parameter_in(location)
        .required(if required { Required::True } else { Required::False })
        .description(Some(description))
        .schema(Some(ObjectBuilder::new().schema_type(ty).build()))
        .build()
}

fn problem(description: &str) -> Response {
    ResponseBuilder::new()
        .description(description)
        .content(
            APPLICATION_PROBLEM_JSON,
            Content::new(Some(Ref::from_schema_name("Problem"))),
        )
        .build()
}

pub fn openapi_doc() -> OpenApi {
    let list = OperationBuilder::new()
        .operation_id(Some("movies.list_movies"))
        .summary(Some("List movies"))
        .tag(TAG)
        .parameter(param(
            FILTER_PARAM,
            ParameterIn::Query,
            Type::String,
            false,
            "Comma-separated `field:value` clauses, AND-combined. Array fields take `a|b` (all must be present).",
        ))
        .parameter(param(
            SORT_PARAM,
            ParameterIn::Query,
            Type::String,
            false,
            "Comma-separated `field:asc|desc` keys, most significant first",
        ))
        .parameter(param(
            PAGE_PARAM,
            ParameterIn::Query,
            Type::Integer,
            false,
            "1-based page number",
        ))
        .parameter(param(
            PAGE_SIZE_PARAM,
            ParameterIn::Query,
            Type::Integer,
            false,
            "Items per page",
        ))
        .response(
            "200",
            ResponseBuilder::new()
                .description("One page of movies with navigation links")
                .build(),
        )
        .response("400", problem("Invalid filter or sort"))
        .response("422", problem("Invalid page or pageSize"))
        .build();

    let get = OperationBuilder::new()
        .operation_id(Some("movies.get_movie"))
        .summary(Some("Get movie by id"))
        .tag(TAG)
        .parameter(param("id", ParameterIn::Path, Type::String, true, "Movie id"))
        .response(
            "200",
            ResponseBuilder::new()
                .description("Movie found")
                .content(
                    "application/json",
                    Content::new(Some(Ref::from_schema_name("MovieDto"))),
                )
                .build(),
        )
        .response("404", problem("Not Found"))
        .build();

    let paths = PathsBuilder::new()
        .path(MOVIES_PATH, PathItem::new(HttpMethod::Get, list))
        .path(MOVIE_PATH, PathItem::new(HttpMethod::Get, get));

    let components = ComponentsBuilder::new()
        .schema_from::<MovieDto>()
        .schema_from::<AwardsDto>()
        .schema_from::<PageDescriptor>()
        .schema_from::<Problem>();

    OpenApiBuilder::new()
        .info(
            InfoBuilder::new()
                .title("Movie catalog")
                .version(env!("CARGO_PKG_VERSION"))
                .build(),
        )
        .paths(paths.build())
        .components(Some(components.build()))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_movie_paths_and_schemas() {
        let doc = serde_json::to_value(openapi_doc()).unwrap();
        assert!(doc["paths"]["/movies"]["get"].is_object());
        assert!(doc["paths"]["/movies/{id}"]["get"].is_object());
        assert!(doc["components"]["schemas"]["MovieDto"].is_object());
        assert!(doc["components"]["schemas"]["Problem"].is_object());

        let params = doc["paths"]["/movies"]["get"]["parameters"].as_array().unwrap();
        let names: Vec<_> = params.iter().map(|p| p["name"].as_str().unwrap()).collect();
        assert_eq!(names, ["filter", "sort", "page", "pageSize"]);
    }
}
