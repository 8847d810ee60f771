use utoipa::openapi::security::{ApiKey, ApiKeyValue, HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::middleware::AUTH_COOKIE;

pub const AUTH_TAG: &str = "Auth";
pub const USER_TAG: &str = "User";
pub const BOOK_TAG: &str = "Book";
pub const CATEGORY_TAG: &str = "Category";
pub const ORDER_TAG: &str = "Order";
pub const UPLOAD_TAG: &str = "Upload";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bookstore",
        description = "REST API for users, books, categories and orders",
    ),
    modifiers(&SecurityAddon),
    components(
        schemas(
            crate::api::dto::ErrorData,
        )
    ),
    tags(
        (name = AUTH_TAG, description = "Login, registration and session endpoints"),
        (name = USER_TAG, description = "User management endpoints"),
        (name = BOOK_TAG, description = "Book catalogue endpoints"),
        (name = CATEGORY_TAG, description = "Book category endpoints"),
        (name = ORDER_TAG, description = "Order and order item endpoints"),
        (name = UPLOAD_TAG, description = "Image upload endpoint"),
    )
)]
pub struct ApiDoc;

pub struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "cookieAuth",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                    AUTH_COOKIE,
                    "Session token set by POST /login",
                ))),
            );
            components.add_security_scheme(
                "bearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Session token for clients without cookies"))
                        .build(),
                ),
            )
        }
    }
}
