use axum::{
    Router,
    extract::State,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    IdPath, LIST_SUCCESS, MessageResponse, PaginatedResponse, SuccessResponse, ValidatedJson,
    ValidatedQuery,
    errors::responses::{
        BadRequestIdResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::BrandResult;
use crate::models::{BrandListQuery, BrandResponse, CreateBrand, UpdateBrand};
use crate::repository::BrandRepository;
use crate::service::BrandService;

pub const TAG: &str = "brands";

/// OpenAPI documentation for Brands API
#[derive(OpenApi)]
#[openapi(
    paths(list_brands, get_brand, create_brand, update_brand, delete_brand),
    components(
        schemas(BrandResponse, CreateBrand, UpdateBrand, MessageResponse),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestIdResponse,
            InternalServerErrorResponse
        )
    ),
    tags((name = TAG, description = "Brand management endpoints"))
)]
pub struct ApiDoc;

/// Create the brand router. Mount it at `/brands`.
pub fn router<R: BrandRepository + 'static>(service: BrandService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_brands).post(create_brand))
        .route(
            "/{id}",
            get(get_brand).patch(update_brand).delete(delete_brand),
        )
        .with_state(shared_service)
}

/// List brands page by page
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    params(BrandListQuery),
    responses(
        (status = 200, description = "One page of brands", body = PaginatedResponse<BrandResponse>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_brands<R: BrandRepository>(
    State(service): State<Arc<BrandService<R>>>,
    ValidatedQuery(query): ValidatedQuery<BrandListQuery>,
) -> BrandResult<PaginatedResponse<BrandResponse>> {
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

/// Get a brand by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i64, Path, description = "Brand ID")
    ),
    responses(
        (status = 200, description = "Brand found", body = SuccessResponse<BrandResponse>),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_brand<R: BrandRepository>(
    State(service): State<Arc<BrandService<R>>>,
    IdPath(id): IdPath,
) -> BrandResult<SuccessResponse<BrandResponse>> {
    let brand = service.find_by_id(id).await?;
    Ok(SuccessResponse::new("Get brand success", brand))
}

/// Create a brand
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = CreateBrand,
    responses(
        (status = 201, description = "Brand created", body = MessageResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_brand<R: BrandRepository>(
    State(service): State<Arc<BrandService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateBrand>,
) -> BrandResult<impl IntoResponse> {
    service.create_brand(input).await?;
    Ok(MessageResponse::created("Brand created"))
}

/// Update a brand
#[utoipa::path(
    patch,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i64, Path, description = "Brand ID")
    ),
    request_body = UpdateBrand,
    responses(
        (status = 200, description = "Brand updated", body = MessageResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_brand<R: BrandRepository>(
    State(service): State<Arc<BrandService<R>>>,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<UpdateBrand>,
) -> BrandResult<MessageResponse> {
    service.update_brand(id, input).await?;
    Ok(MessageResponse::new("Brand updated"))
}

/// Soft-delete a brand
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i64, Path, description = "Brand ID")
    ),
    responses(
        (status = 200, description = "Brand deleted", body = MessageResponse),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_brand<R: BrandRepository>(
    State(service): State<Arc<BrandService<R>>>,
    IdPath(id): IdPath,
) -> BrandResult<MessageResponse> {
    service.delete_brand(id).await?;
    Ok(MessageResponse::new("Brand deleted"))
}
