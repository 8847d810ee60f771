//! Configuration validation logic
//!
//! Each section checks its own ranges; `Settings::validate` runs them all
//! and reports the first failure.

use crate::config::error::ConfigError;
use crate::config::settings::{
    DatabaseConfig, PaginationConfig, PasswordConfig, ServerConfig, Settings, UploadConfig,
};
use crate::logger::LoggerConfig;

/// Valid log levels
const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

impl ServerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::validation(
                "server.port",
                "Port must be between 1 and 65535. Please specify a valid port number.",
            ));
        }

        if self.request_timeout == 0 {
            return Err(ConfigError::validation(
                "server.request_timeout",
                "Request timeout must be greater than 0 seconds.",
            ));
        }

        Ok(())
    }
}

impl DatabaseConfig {
    /// # Validation Rules
    /// - An explicit URL must use the `postgres://` or `postgresql://` scheme
    /// - Without a URL, host, user and database name are required
    /// - Pool bounds must be positive with min <= max
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.url.is_empty() {
            if !(self.url.starts_with("postgres://") || self.url.starts_with("postgresql://")) {
                return Err(ConfigError::validation(
                    "database.url",
                    "Invalid database URL format. Expected format: postgres://[user:password@]host[:port]/database",
                ));
            }
        } else {
            for (field, value) in [
                ("database.host", &self.host),
                ("database.user", &self.user),
                ("database.name", &self.name),
            ] {
                if value.trim().is_empty() {
                    return Err(ConfigError::ValidationError {
                        field: field.to_string(),
                        message: "Required when database.url is not set.".to_string(),
                    });
                }
            }
        }

        if self.max_connections == 0 {
            return Err(ConfigError::validation(
                "database.max_connections",
                "Max connections must be greater than 0.",
            ));
        }

        if self.min_connections == 0 {
            return Err(ConfigError::validation(
                "database.min_connections",
                "Min connections must be greater than 0.",
            ));
        }

        if self.min_connections > self.max_connections {
            return Err(ConfigError::ValidationError {
                field: "database.min_connections".to_string(),
                message: format!(
                    "Min connections ({}) cannot exceed max connections ({}).",
                    self.min_connections, self.max_connections
                ),
            });
        }

        Ok(())
    }
}

impl PasswordConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        // Argon2 floor: memory must cover 8 KiB per lane
        if self.memory_cost_kib < 8 * self.parallelism.max(1) {
            return Err(ConfigError::validation(
                "password.memory_cost_kib",
                "Memory cost must be at least 8 KiB per lane.",
            ));
        }
        if self.iterations == 0 {
            return Err(ConfigError::validation(
                "password.iterations",
                "Iterations must be greater than 0.",
            ));
        }
        if self.parallelism == 0 {
            return Err(ConfigError::validation(
                "password.parallelism",
                "Parallelism must be greater than 0.",
            ));
        }
        Ok(())
    }
}

impl PaginationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_offset < 0 {
            return Err(ConfigError::validation(
                "pagination.default_offset",
                "Default offset cannot be negative.",
            ));
        }
        if self.default_limit <= 0 {
            return Err(ConfigError::validation(
                "pagination.default_limit",
                "Default limit must be greater than 0.",
            ));
        }
        if self.max_limit < self.default_limit {
            return Err(ConfigError::ValidationError {
                field: "pagination.max_limit".to_string(),
                message: format!(
                    "Max limit ({}) cannot be lower than the default limit ({}).",
                    self.max_limit, self.default_limit
                ),
            });
        }
        Ok(())
    }
}

impl UploadConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.directory.trim().is_empty() {
            return Err(ConfigError::validation(
                "upload.directory",
                "Upload directory cannot be empty.",
            ));
        }
        if self.max_size == 0 {
            return Err(ConfigError::validation(
                "upload.max_size",
                "Upload size limit must be greater than 0.",
            ));
        }
        Ok(())
    }
}

impl LoggerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !VALID_LOG_LEVELS.contains(&self.level.to_lowercase().as_str()) {
            return Err(ConfigError::ValidationError {
                field: "logger.level".to_string(),
                message: format!(
                    "Invalid log level '{}'. Valid levels are: {}",
                    self.level,
                    VALID_LOG_LEVELS.join(", ")
                ),
            });
        }

        if self.file.enabled && self.file.path.as_os_str().is_empty() {
            return Err(ConfigError::validation(
                "logger.file.path",
                "File path is required when file logging is enabled.",
            ));
        }

        if !self.console.enabled && !self.file.enabled {
            return Err(ConfigError::validation(
                "logger",
                "At least one output (console or file) must be enabled.",
            ));
        }

        Ok(())
    }
}

impl Settings {
    /// Validate all configuration settings, returning the first failure.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.server.validate()?;
        self.database.validate()?;
        self.jwt.validate()?;
        self.password.validate()?;
        self.pagination.validate()?;
        self.upload.validate()?;
        self.logger.validate()?;
        Ok(())
    }
}
