//! Book CRUD request handlers.

use axum::extract::{Path, Query, State};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;
use uuid::Uuid;

use crate::api::doc::BOOK_TAG;
use crate::api::dto::{
    ApiResponse, BookListResponse, BookResponse, CreateBookRequest, ErrorResponse, ListParams,
    UpdateBookRequest,
};
use crate::error::AppResult;
use crate::state::AppState;
use crate::utils::ValidatedJson;

pub fn book_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(create_book, list_books, update_book))
        .routes(routes!(get_book, delete_book))
}

#[utoipa::path(
    post,
    path = "/books",
    tag = BOOK_TAG,
    request_body = CreateBookRequest,
    responses(
        (status = 201, description = "Book created", body = ApiResponse<BookResponse>),
        (status = 400, description = "Invalid request data", body = ErrorResponse)
    )
)]
async fn create_book(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateBookRequest>,
) -> AppResult<ApiResponse<BookResponse>> {
    let book = state.services.books.create(payload.into_new_book()).await?;
    Ok(ApiResponse::created("Book successfully created", book.into()))
}

#[utoipa::path(
    get,
    path = "/books",
    tag = BOOK_TAG,
    params(ListParams),
    responses(
        (status = 200, description = "Page of books", body = ApiResponse<BookListResponse>),
        (status = 400, description = "Invalid offset or limit", body = ErrorResponse)
    )
)]
async fn list_books(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<ApiResponse<BookListResponse>> {
    let page = params.resolve(&state.pagination)?;
    let page = state.services.books.list(page).await?;
    Ok(ApiResponse::ok(
        "Books",
        BookListResponse {
            count: page.count,
            books: page.items.into_iter().map(BookResponse::from).collect(),
        },
    ))
}

#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = BOOK_TAG,
    params(("id" = Uuid, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book found", body = ApiResponse<BookResponse>),
        (status = 404, description = "Book not found", body = ErrorResponse)
    )
)]
async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<ApiResponse<BookResponse>> {
    let book = state.services.books.get(id).await?;
    Ok(ApiResponse::ok("Book", book.into()))
}

#[utoipa::path(
    put,
    path = "/books",
    tag = BOOK_TAG,
    request_body = UpdateBookRequest,
    responses(
        (status = 200, description = "Book updated", body = ApiResponse<BookResponse>),
        (status = 404, description = "Book not found", body = ErrorResponse)
    )
)]
async fn update_book(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UpdateBookRequest>,
) -> AppResult<ApiResponse<BookResponse>> {
    let (id, changes) = payload.into_changes();
    let book = state.services.books.update(id, changes).await?;
    Ok(ApiResponse::ok("Book successfully updated", book.into()))
}

#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = BOOK_TAG,
    params(("id" = Uuid, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book deleted"),
        (status = 404, description = "Book not found", body = ErrorResponse)
    )
)]
async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<ApiResponse<()>> {
    state.services.books.delete(id).await?;
    Ok(ApiResponse::empty("Book successfully deleted"))
}
