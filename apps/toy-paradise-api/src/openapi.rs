//! OpenAPI documentation configuration

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Toy Paradise API",
        version = "0.1.0",
        description = "Catalog API for toy listings and toy categories backed by MongoDB"
    ),
    servers(
        (url = "http://localhost:5000", description = "Local development server")
    ),
    paths(crate::api::root, crate::api::health::readiness_check),
    tags(
        (name = "Service", description = "Liveness and readiness")
    )
)]
struct ServiceDoc;

/// Combined OpenAPI documentation for all routes.
///
/// Domain routes are mounted at their absolute paths, so their documents
/// are merged rather than nested.
pub struct ApiDoc;

impl OpenApi for ApiDoc {
    fn openapi() -> utoipa::openapi::OpenApi {
        let mut doc = ServiceDoc::openapi();
        doc.merge(domain_toys::ApiDoc::openapi());
        doc.merge(domain_categories::ApiDoc::openapi());
        doc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merged_document_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();

        for expected in [
            "/",
            "/ready",
            "/allToys",
            "/allToys/{id}",
            "/update/{id}",
            "/searchByToy/{text}",
            "/myToys",
            "/action_figure/{category}",
            "/category/{id}",
        ] {
            assert!(paths.contains(&expected), "missing {expected} in {paths:?}");
        }
    }
}
