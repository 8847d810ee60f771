//! Order and order item request handlers.

use axum::extract::{Path, Query, State};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;
use uuid::Uuid;

use crate::api::doc::ORDER_TAG;
use crate::api::dto::{
    ApiResponse, CreateOrderItemRequest, CreateOrderRequest, ErrorResponse, ListParams,
    OrderItemListResponse, OrderItemResponse, OrderListResponse, OrderResponse,
    UpdateOrderItemRequest, UpdateOrderRequest,
};
use crate::error::AppResult;
use crate::state::AppState;
use crate::utils::ValidatedJson;

/// Routes:
/// - `/orders`, `/orders/{order_id}`
/// - `/order_items`, `/order_items/{item_id}`
pub fn order_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(create_order, list_orders, update_order))
        .routes(routes!(get_order, delete_order))
        .routes(routes!(create_order_item, list_order_items, update_order_item))
        .routes(routes!(get_order_item, delete_order_item))
}

// ============================================================================
// Orders
// ============================================================================

#[utoipa::path(
    post,
    path = "/orders",
    tag = ORDER_TAG,
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order created", body = ApiResponse<OrderResponse>),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
async fn create_order(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateOrderRequest>,
) -> AppResult<ApiResponse<OrderResponse>> {
    let order = state
        .services
        .orders
        .create(payload.into_new_order())
        .await?;
    Ok(ApiResponse::created("Order successfully created", order.into()))
}

#[utoipa::path(
    get,
    path = "/orders",
    tag = ORDER_TAG,
    params(ListParams),
    responses(
        (status = 200, description = "Page of orders", body = ApiResponse<OrderListResponse>),
        (status = 400, description = "Invalid offset or limit", body = ErrorResponse)
    )
)]
async fn list_orders(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<ApiResponse<OrderListResponse>> {
    let page = params.resolve(&state.pagination)?;
    let page = state.services.orders.list(page).await?;
    Ok(ApiResponse::ok(
        "Orders",
        OrderListResponse {
            count: page.count,
            orders: page.items.into_iter().map(OrderResponse::from).collect(),
        },
    ))
}

#[utoipa::path(
    get,
    path = "/orders/{order_id}",
    tag = ORDER_TAG,
    params(("order_id" = Uuid, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order found", body = ApiResponse<OrderResponse>),
        (status = 404, description = "Order not found", body = ErrorResponse)
    )
)]
async fn get_order(
    State(state): State<AppState>,
    Path(order_id): Path<Uuid>,
) -> AppResult<ApiResponse<OrderResponse>> {
    let order = state.services.orders.get(order_id).await?;
    Ok(ApiResponse::ok("Order", order.into()))
}

#[utoipa::path(
    put,
    path = "/orders",
    tag = ORDER_TAG,
    request_body = UpdateOrderRequest,
    responses(
        (status = 200, description = "Order updated", body = ApiResponse<OrderResponse>),
        (status = 404, description = "Order or user not found", body = ErrorResponse)
    )
)]
async fn update_order(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UpdateOrderRequest>,
) -> AppResult<ApiResponse<OrderResponse>> {
    let (id, changes) = payload.into_changes();
    let order = state.services.orders.update(id, changes).await?;
    Ok(ApiResponse::ok("Order successfully updated", order.into()))
}

#[utoipa::path(
    delete,
    path = "/orders/{order_id}",
    tag = ORDER_TAG,
    params(("order_id" = Uuid, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order deleted"),
        (status = 404, description = "Order not found", body = ErrorResponse)
    )
)]
async fn delete_order(
    State(state): State<AppState>,
    Path(order_id): Path<Uuid>,
) -> AppResult<ApiResponse<()>> {
    state.services.orders.delete(order_id).await?;
    Ok(ApiResponse::empty("Order successfully deleted"))
}

// ============================================================================
// Order items
// ============================================================================

#[utoipa::path(
    post,
    path = "/order_items",
    tag = ORDER_TAG,
    request_body = CreateOrderItemRequest,
    responses(
        (status = 201, description = "Order item created", body = ApiResponse<OrderItemResponse>),
        (status = 404, description = "Order or book not found", body = ErrorResponse)
    )
)]
async fn create_order_item(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateOrderItemRequest>,
) -> AppResult<ApiResponse<OrderItemResponse>> {
    let item = state
        .services
        .order_items
        .create(payload.into_new_item())
        .await?;
    Ok(ApiResponse::created(
        "Order item successfully created",
        item.into(),
    ))
}

#[utoipa::path(
    get,
    path = "/order_items",
    tag = ORDER_TAG,
    params(ListParams),
    responses(
        (status = 200, description = "Page of order items", body = ApiResponse<OrderItemListResponse>),
        (status = 400, description = "Invalid offset or limit", body = ErrorResponse)
    )
)]
async fn list_order_items(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<ApiResponse<OrderItemListResponse>> {
    let page = params.resolve(&state.pagination)?;
    let page = state.services.order_items.list(page).await?;
    Ok(ApiResponse::ok(
        "Order items",
        OrderItemListResponse {
            count: page.count,
            order_items: page.items.into_iter().map(OrderItemResponse::from).collect(),
        },
    ))
}

#[utoipa::path(
    get,
    path = "/order_items/{item_id}",
    tag = ORDER_TAG,
    params(("item_id" = Uuid, Path, description = "Order item ID")),
    responses(
        (status = 200, description = "Order item found", body = ApiResponse<OrderItemResponse>),
        (status = 404, description = "Order item not found", body = ErrorResponse)
    )
)]
async fn get_order_item(
    State(state): State<AppState>,
    Path(item_id): Path<Uuid>,
) -> AppResult<ApiResponse<OrderItemResponse>> {
    let item = state.services.order_items.get(item_id).await?;
    Ok(ApiResponse::ok("Order item", item.into()))
}

#[utoipa::path(
    put,
    path = "/order_items",
    tag = ORDER_TAG,
    request_body = UpdateOrderItemRequest,
    responses(
        (status = 200, description = "Order item updated", body = ApiResponse<OrderItemResponse>),
        (status = 404, description = "Order item, order or book not found", body = ErrorResponse)
    )
)]
async fn update_order_item(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UpdateOrderItemRequest>,
) -> AppResult<ApiResponse<OrderItemResponse>> {
    let (id, changes) = payload.into_changes();
    let item = state.services.order_items.update(id, changes).await?;
    Ok(ApiResponse::ok(
        "Order item successfully updated",
        item.into(),
    ))
}

#[utoipa::path(
    delete,
    path = "/order_items/{item_id}",
    tag = ORDER_TAG,
    params(("item_id" = Uuid, Path, description = "Order item ID")),
    responses(
        (status = 200, description = "Order item deleted"),
        (status = 404, description = "Order item not found", body = ErrorResponse)
    )
)]
async fn delete_order_item(
    State(state): State<AppState>,
    Path(item_id): Path<Uuid>,
) -> AppResult<ApiResponse<()>> {
    state.services.order_items.delete(item_id).await?;
    Ok(ApiResponse::empty("Order item successfully deleted"))
}
