//! `offset`/`limit` query parameters shared by every list endpoint.

use serde::Deserialize;
use utoipa::IntoParams;

use crate::config::PaginationConfig;
use crate::error::{AppError, AppResult};
use crate::models::PageRequest;

/// Raw query parameters for list endpoints.
///
/// Kept as strings so an empty value (`?offset=`) falls back to the
/// configured default while a non-numeric one is rejected.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ListParams {
    /// Number of rows to skip
    #[param(value_type = Option<i64>, minimum = 0, example = 0)]
    pub offset: Option<String>,

    /// Maximum number of rows to return
    #[param(value_type = Option<i64>, minimum = 1, example = 10)]
    pub limit: Option<String>,
}

impl ListParams {
    /// Resolves the raw parameters against configured defaults.
    ///
    /// Absent or empty values take the default. Anything else must be a
    /// non-negative integer, and `limit` must fall within `1..=max_limit`.
    pub fn resolve(&self, config: &PaginationConfig) -> AppResult<PageRequest> {
        let offset = parse_param("offset", self.offset.as_deref(), config.default_offset)?;
        let limit = parse_param("limit", self.limit.as_deref(), config.default_limit)?;

        if limit == 0 || limit > config.max_limit {
            return Err(AppError::validation(
                "limit",
                format!("must be between 1 and {}", config.max_limit),
            ));
        }

        Ok(PageRequest::new(offset, limit))
    }
}

fn parse_param(name: &str, raw: Option<&str>, default: i64) -> AppResult<i64> {
    let raw = match raw.map(str::trim) {
        None | Some("") => return Ok(default),
        Some(raw) => raw,
    };

    match raw.parse::<i64>() {
        Ok(value) if value >= 0 => Ok(value),
        _ => Err(AppError::validation(
            name,
            format!("must be a non-negative integer, got '{raw}'"),
        )),
    }
}
