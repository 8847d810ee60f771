//! Image upload handler.

use std::path::Path;

use axum::extract::{DefaultBodyLimit, Multipart, State, multipart::MultipartRejection};
use utoipa::ToSchema;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::UPLOAD_TAG;
use crate::api::dto::{ApiResponse, ErrorResponse};
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Multipart field carrying the file
const FILE_FIELD: &str = "image";

/// Multipart form accepted by `POST /upload`
#[derive(ToSchema)]
#[allow(dead_code)]
struct UploadForm {
    #[schema(format = Binary, content_media_type = "application/octet-stream")]
    image: String,
}

/// Creates the upload route with its own body limit.
pub fn upload_routes(max_size: usize) -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(upload_image))
        .layer(DefaultBodyLimit::max(max_size))
}

/// Reduces a client-supplied name to its final path component.
fn sanitize_file_name(raw: &str) -> AppResult<String> {
    let name = raw.rsplit(['/', '\\']).next().unwrap_or_default().trim();
    if name.is_empty() || name == "." || name == ".." {
        return Err(AppError::bad_request(format!("Invalid file name '{raw}'")));
    }
    Ok(name.to_string())
}

fn io_error(operation: &str, path: &Path, error: std::io::Error) -> AppError {
    AppError::Internal {
        source: anyhow::anyhow!("Failed to {} {}: {}", operation, path.display(), error),
    }
}

/// POST /upload - Store an image under the upload directory
///
/// Returns the stored path relative to the working directory.
#[utoipa::path(
    post,
    path = "/upload",
    tag = UPLOAD_TAG,
    request_body(content = UploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "File stored", body = ApiResponse<String>),
        (status = 400, description = "Missing file or invalid file name", body = ErrorResponse),
        (status = 401, description = "Not logged in", body = ErrorResponse)
    ),
    security(("cookieAuth" = []), ("bearerAuth" = []))
)]
async fn upload_image(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<ApiResponse<String>> {
    let mut multipart = multipart?;

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = sanitize_file_name(field.file_name().unwrap_or_default())?;
        let bytes = field.bytes().await?;

        let directory = Path::new(&state.upload.directory);
        tokio::fs::create_dir_all(directory)
            .await
            .map_err(|e| io_error("create", directory, e))?;

        let path = directory.join(&file_name);
        tokio::fs::write(&path, &bytes)
            .await
            .map_err(|e| io_error("write", &path, e))?;

        let stored = format!(
            "{}/{}",
            state.upload.directory.trim_end_matches('/'),
            file_name
        );
        tracing::info!(file = %stored, size = bytes.len(), "File uploaded");

        return Ok(ApiResponse::created("File successfully uploaded", stored));
    }

    Err(AppError::bad_request(format!(
        "Missing '{FILE_FIELD}' file field"
    )))
}
