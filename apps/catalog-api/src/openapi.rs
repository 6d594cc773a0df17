use utoipa::OpenApi;

/// Combined OpenAPI documentation for the catalog API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Catalog API",
        version = "0.1.0",
        description = "Brand and product catalog over PostgreSQL"
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/api/v1/brands", api = domain_brands::handlers::ApiDoc),
        (path = "/api/v1/products", api = domain_products::handlers::ApiDoc)
    )
)]
pub struct ApiDoc;
