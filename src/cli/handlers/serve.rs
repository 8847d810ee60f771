//! Serve command handler

use crate::config::Settings;
use crate::server::Server;

pub struct ServeCommandHandler {
    config: Settings,
}

impl ServeCommandHandler {
    pub fn new(config: Settings) -> Self {
        Self { config }
    }

    /// Starts the server, or only reports the effective configuration on a dry run.
    pub async fn execute(self, dry_run: bool) -> anyhow::Result<()> {
        if dry_run {
            for line in self.summary() {
                println!("{line}");
            }
            println!("Dry run completed - configuration is valid");
            return Ok(());
        }

        Server::new(self.config).run().await
    }

    /// Human-readable configuration summary; secrets are masked.
    fn summary(&self) -> Vec<String> {
        let config = &self.config;
        vec![
            format!("Server address:   {}", config.server.address()),
            format!("Request timeout:  {}s", config.server.request_timeout),
            format!("Database:         {}", config.database.redacted_url()),
            format!("Auto migrate:     {}", config.database.auto_migrate),
            format!("Token lifetime:   {}h", config.jwt.expiration_hours),
            format!("Page size:        {} (max {})", config.pagination.default_limit, config.pagination.max_limit),
            format!("Upload directory: {}", config.upload.directory),
            format!("Log level:        {}", config.logger.level),
        ]
    }
}
