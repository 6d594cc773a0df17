use axum::{Router, extract::State, response::IntoResponse, routing::get};
use axum_helpers::{
    IdPath, LIST_SUCCESS, MessageResponse, PaginatedResponse, SuccessResponse, ValidatedJson,
    ValidatedQuery,
    errors::responses::{
        BadRequestIdResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse, UnprocessableEntityResponse,
    },
};
use domain_brands::{BrandRepository, BrandResponse};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ProductResult;
use crate::models::{CreateProduct, ProductListQuery, ProductResponse, UpdateProduct};
use crate::repository::ProductRepository;
use crate::service::ProductService;

pub const TAG: &str = "products";

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(list_products, get_product, create_product, update_product, delete_product),
    components(
        schemas(ProductResponse, BrandResponse, CreateProduct, UpdateProduct, MessageResponse),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestIdResponse,
            UnprocessableEntityResponse,
            InternalServerErrorResponse
        )
    ),
    tags((name = TAG, description = "Product management endpoints"))
)]
pub struct ApiDoc;

type SharedService<P, B> = State<Arc<ProductService<P, B>>>;

/// Create the product router. Mount it at `/products`.
pub fn router<P, B>(service: ProductService<P, B>) -> Router
where
    P: ProductRepository + 'static,
    B: BrandRepository + 'static,
{
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/{id}",
            get(get_product).patch(update_product).delete(delete_product),
        )
        .with_state(Arc::new(service))
}

/// List products page by page, each with its brand
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    params(ProductListQuery),
    responses(
        (status = 200, description = "One page of products", body = PaginatedResponse<ProductResponse>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<P: ProductRepository, B: BrandRepository>(
    State(service): SharedService<P, B>,
    ValidatedQuery(query): ValidatedQuery<ProductListQuery>,
) -> ProductResult<PaginatedResponse<ProductResponse>> {
    let page = service.find_all(&query).await?;

    Ok(PaginatedResponse {
        message: LIST_SUCCESS.to_string(),
        total_page: page.total_pages,
        items_per_page: page.per_page,
        current_page: page.page,
        total_items: page.total_items,
        data: page.items,
    })
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = SuccessResponse<ProductResponse>),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<P: ProductRepository, B: BrandRepository>(
    State(service): SharedService<P, B>,
    IdPath(id): IdPath,
) -> ProductResult<SuccessResponse<ProductResponse>> {
    let product = service.find_by_id(id).await?;
    Ok(SuccessResponse::new("Get product success", product))
}

/// Create a product under an existing brand
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = CreateProduct,
    responses(
        (status = 201, description = "Product created", body = MessageResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 422, response = UnprocessableEntityResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<P: ProductRepository, B: BrandRepository>(
    State(service): SharedService<P, B>,
    ValidatedJson(input): ValidatedJson<CreateProduct>,
) -> ProductResult<impl IntoResponse> {
    service.create_product(input).await?;
    Ok(MessageResponse::created("Product created"))
}

/// Update a product
#[utoipa::path(
    patch,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    request_body = UpdateProduct,
    responses(
        (status = 200, description = "Product updated", body = MessageResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 422, response = UnprocessableEntityResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_product<P: ProductRepository, B: BrandRepository>(
    State(service): SharedService<P, B>,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<UpdateProduct>,
) -> ProductResult<MessageResponse> {
    service.update_product(id, input).await?;
    Ok(MessageResponse::new("Product updated"))
}

/// Soft-delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product deleted", body = MessageResponse),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<P: ProductRepository, B: BrandRepository>(
    State(service): SharedService<P, B>,
    IdPath(id): IdPath,
) -> ProductResult<MessageResponse> {
    service.delete_product(id).await?;
    Ok(MessageResponse::new("Product deleted"))
}
