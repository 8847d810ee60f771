use crate::error::{AppError, ConstraintParser};
use diesel::result::{DatabaseErrorInformation, DatabaseErrorKind, Error as DieselError};

/// Utility for converting Diesel errors into structured AppError variants.
///
/// Classification is done on the typed error kind reported by the driver,
/// never on the text of the message; the text is only mined for the field
/// and value to report back.
pub struct DatabaseErrorConverter;

impl DatabaseErrorConverter {
    /// Converts a Diesel error to an appropriate AppError variant.
    pub fn convert_diesel_error(error: DieselError, operation: &str) -> AppError {
        match error {
            DieselError::DatabaseError(kind, info) => {
                Self::convert_database_error(kind, info.as_ref(), operation)
            }
            DieselError::NotFound => AppError::not_found("resource", "id", "unknown"),
            other => AppError::Database {
                operation: operation.to_string(),
                source: anyhow::Error::from(other),
            },
        }
    }

    fn convert_database_error(
        kind: DatabaseErrorKind,
        info: &(dyn DatabaseErrorInformation + Send + Sync),
        operation: &str,
    ) -> AppError {
        let detail = info.details().unwrap_or(info.message());
        let table = info.table_name();
        let from_constraint = info
            .constraint_name()
            .and_then(|c| ConstraintParser::parse_constraint_name(c, table));

        match kind {
            DatabaseErrorKind::UniqueViolation => {
                let key_value = ConstraintParser::extract_key_value(detail);
                match (from_constraint, key_value) {
                    (Some((entity, field)), Some((_, value))) => AppError::Duplicate {
                        entity,
                        field,
                        value,
                    },
                    (Some((entity, field)), None) => AppError::Duplicate {
                        entity,
                        field,
                        value: "duplicate_value".to_string(),
                    },
                    (None, Some((field, value))) => AppError::Duplicate {
                        entity: table.unwrap_or("resource").to_string(),
                        field,
                        value,
                    },
                    (None, None) => Self::generic(operation, "Unique constraint violation", info),
                }
            }
            DatabaseErrorKind::NotNullViolation => {
                let field = info
                    .column_name()
                    .map(str::to_string)
                    .or_else(|| ConstraintParser::extract_column(info.message()));
                match field {
                    Some(field) => AppError::Validation {
                        field,
                        reason: format!("Field is required for {}", table.unwrap_or("resource")),
                    },
                    None => Self::generic(operation, "Not null constraint violation", info),
                }
            }
            DatabaseErrorKind::ForeignKeyViolation => {
                let value = ConstraintParser::extract_key_value(detail).map(|(_, value)| value);
                match from_constraint {
                    Some((_, field)) => AppError::Validation {
                        reason: format!(
                            "Invalid reference with value '{}'",
                            value.as_deref().unwrap_or("unknown")
                        ),
                        field,
                    },
                    None => Self::generic(operation, "Foreign key constraint violation", info),
                }
            }
            DatabaseErrorKind::CheckViolation => match from_constraint {
                Some((entity, field)) => AppError::Validation {
                    field,
                    reason: format!("Check constraint failed for {}", entity),
                },
                None => Self::generic(operation, "Check constraint violation", info),
            },
            _ => Self::generic(operation, "Database error", info),
        }
    }

    fn generic(
        operation: &str,
        label: &str,
        info: &(dyn DatabaseErrorInformation + Send + Sync),
    ) -> AppError {
        AppError::Database {
            operation: operation.to_string(),
            source: anyhow::Error::msg(format!("{}: {}", label, info.message())),
        }
    }
}
