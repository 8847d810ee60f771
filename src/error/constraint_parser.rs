use regex::Regex;
use std::sync::OnceLock;

/// Utility for parsing PostgreSQL constraint violation details.
///
/// PostgreSQL reports the offending key in the `DETAIL` line
/// (`Key (username)=(alice1) already exists.`) and names the constraint
/// after the `{table}_{column}_{suffix}` convention, which is what the
/// migrations in this crate follow.
pub struct ConstraintParser;

struct RegexPatterns {
    key_value: Regex,
    column_name: Regex,
}

static REGEX_PATTERNS: OnceLock<Option<RegexPatterns>> = OnceLock::new();

const CONSTRAINT_SUFFIXES: [&str; 5] = ["_fkey", "_pkey", "_key", "_check", "_idx"];

impl ConstraintParser {
    fn patterns() -> Option<&'static RegexPatterns> {
        REGEX_PATTERNS
            .get_or_init(|| {
                Some(RegexPatterns {
                    key_value: Regex::new(r"Key \(([^)]+)\)=\(([^)]*)\)").ok()?,
                    column_name: Regex::new(r#"column "([^"]+)""#).ok()?,
                })
            })
            .as_ref()
    }

    /// Extracts `(field, value)` from a `Key (field)=(value)` fragment.
    pub fn extract_key_value(text: &str) -> Option<(String, String)> {
        let captures = Self::patterns()?.key_value.captures(text)?;
        Some((captures[1].to_string(), captures[2].to_string()))
    }

    /// Extracts a quoted column name, as found in not-null violations.
    pub fn extract_column(text: &str) -> Option<String> {
        let captures = Self::patterns()?.column_name.captures(text)?;
        Some(captures[1].to_string())
    }

    /// Splits a constraint name into `(table, column)`.
    ///
    /// When the table is known it is stripped as a prefix, which keeps
    /// underscores inside table names intact (`order_items_book_id_fkey`).
    pub fn parse_constraint_name(
        constraint: &str,
        table: Option<&str>,
    ) -> Option<(String, String)> {
        let stem = CONSTRAINT_SUFFIXES
            .iter()
            .find_map(|suffix| constraint.strip_suffix(suffix))?;

        if let Some(table) = table {
            let column = stem.strip_prefix(table)?.strip_prefix('_')?;
            if column.is_empty() {
                return None;
            }
            return Some((table.to_string(), column.to_string()));
        }

        let (table, column) = stem.split_once('_')?;
        if table.is_empty() || column.is_empty() {
            return None;
        }
        Some((table.to_string(), column.to_string()))
    }
}
