//! Migrate command handler

use crate::config::Settings;
use crate::db::{pending_migrations, revert_migrations, run_pending_migrations};

pub struct MigrateCommandHandler {
    config: Settings,
}

impl MigrateCommandHandler {
    pub fn new(config: Settings) -> Self {
        Self { config }
    }

    /// Applies pending migrations, lists them (`dry_run`) or reverts `rollback` steps.
    pub async fn execute(&self, dry_run: bool, rollback: Option<u32>) -> anyhow::Result<()> {
        self.config.database.validate()?;
        let database_url = self.config.database.connection_url();
        tracing::info!(database = %self.config.database.redacted_url(), "Running migration command");

        if dry_run {
            let pending = pending_migrations(database_url).await?;
            if pending.is_empty() {
                println!("No pending migrations - database is up to date");
            } else {
                println!("{} pending migration(s):", pending.len());
                for name in &pending {
                    println!("  {name}");
                }
            }
            return Ok(());
        }

        match rollback {
            Some(steps) => {
                let reverted = revert_migrations(database_url, steps).await?;
                for version in &reverted {
                    println!("Reverted {version}");
                }
                println!("Rolled back {} migration(s)", reverted.len());
            }
            None => {
                let applied = run_pending_migrations(database_url).await?;
                for version in &applied {
                    println!("Applied {version}");
                }
                println!("Applied {} migration(s)", applied.len());
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_invalid_database_config_fails_before_connecting() {
        let mut config = Settings::default();
        config.database.url = "mysql://localhost/bookstore".to_string();

        let result = MigrateCommandHandler::new(config).execute(true, None).await;
        let message = result.unwrap_err().to_string();
        assert!(message.contains("database.url"));
    }
}
