//! Category CRUD request handlers.

use axum::extract::{Path, Query, State};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;
use uuid::Uuid;

use crate::api::doc::CATEGORY_TAG;
use crate::api::dto::{
    ApiResponse, CategoryListResponse, CategoryResponse, CreateCategoryRequest, ErrorResponse,
    ListParams, UpdateCategoryRequest,
};
use crate::error::AppResult;
use crate::state::AppState;
use crate::utils::ValidatedJson;

pub fn category_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(create_category, list_categories, update_category))
        .routes(routes!(get_category, delete_category))
}

#[utoipa::path(
    post,
    path = "/categories",
    tag = CATEGORY_TAG,
    request_body = CreateCategoryRequest,
    responses(
        (status = 201, description = "Category created", body = ApiResponse<CategoryResponse>),
        (status = 400, description = "Invalid request data", body = ErrorResponse)
    )
)]
async fn create_category(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateCategoryRequest>,
) -> AppResult<ApiResponse<CategoryResponse>> {
    let category = state
        .services
        .categories
        .create(payload.into_new_category())
        .await?;
    Ok(ApiResponse::created(
        "Category successfully created",
        category.into(),
    ))
}

#[utoipa::path(
    get,
    path = "/categories",
    tag = CATEGORY_TAG,
    params(ListParams),
    responses(
        (status = 200, description = "Page of categories", body = ApiResponse<CategoryListResponse>),
        (status = 400, description = "Invalid offset or limit", body = ErrorResponse)
    )
)]
async fn list_categories(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<ApiResponse<CategoryListResponse>> {
    let page = params.resolve(&state.pagination)?;
    let page = state.services.categories.list(page).await?;
    Ok(ApiResponse::ok(
        "Categories",
        CategoryListResponse {
            count: page.count,
            categories: page.items.into_iter().map(CategoryResponse::from).collect(),
        },
    ))
}

#[utoipa::path(
    get,
    path = "/categories/{id}",
    tag = CATEGORY_TAG,
    params(("id" = Uuid, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category found", body = ApiResponse<CategoryResponse>),
        (status = 404, description = "Category not found", body = ErrorResponse)
    )
)]
async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<ApiResponse<CategoryResponse>> {
    let category = state.services.categories.get(id).await?;
    Ok(ApiResponse::ok("Category", category.into()))
}

#[utoipa::path(
    put,
    path = "/categories",
    tag = CATEGORY_TAG,
    request_body = UpdateCategoryRequest,
    responses(
        (status = 200, description = "Category updated", body = ApiResponse<CategoryResponse>),
        (status = 404, description = "Category not found", body = ErrorResponse)
    )
)]
async fn update_category(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UpdateCategoryRequest>,
) -> AppResult<ApiResponse<CategoryResponse>> {
    let (id, changes) = payload.into_changes();
    let category = state.services.categories.update(id, changes).await?;
    Ok(ApiResponse::ok(
        "Category successfully updated",
        category.into(),
    ))
}

#[utoipa::path(
    delete,
    path = "/categories/{id}",
    tag = CATEGORY_TAG,
    params(("id" = Uuid, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category deleted"),
        (status = 404, description = "Category not found", body = ErrorResponse)
    )
)]
async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<ApiResponse<()>> {
    state.services.categories.delete(id).await?;
    Ok(ApiResponse::empty("Category successfully deleted"))
}
