use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment};
use serde::Deserialize;

use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub export: ExportConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    /// JSON dump of people records.
    pub people_path: String,
    /// JSON dump of contact groups used to resolve memberships.
    pub groups_path: String,
    /// Destination `.vcf` file.
    pub output_path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// ## Summary
    /// Returns a configuration builder holding only the built-in defaults.
    ///
    /// ## Errors
    /// Returns an error if a default value cannot be registered.
    pub fn defaults() -> CoreResult<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("export.people_path", "people.json")?
            .set_default("export.groups_path", "groups.json")?
            .set_default("export.output_path", "cards.vcf")?
            .set_default("logging.level", "info")?)
    }

    /// ## Summary
    /// Loads configuration from environment variables and `config.toml` into a `Settings`.
    /// Environment variables take precedence over file values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> CoreResult<Self> {
        let settings = Self::defaults()?
            // TOML file
            .add_source(config::File::with_name("config.toml").required(false))
            // Env, e.g. CARDEX_EXPORT__OUTPUT_PATH
            .add_source(environment())
            .build()?
            .try_deserialize::<Self>()?;

        settings.validate()?;
        Ok(settings)
    }

    /// ## Summary
    /// Rejects settings that cannot drive an export.
    ///
    /// ## Errors
    /// Returns `InvalidConfiguration` when any export path is blank.
    pub fn validate(&self) -> CoreResult<()> {
        let paths = [
            ("export.people_path", &self.export.people_path),
            ("export.groups_path", &self.export.groups_path),
            ("export.output_path", &self.export.output_path),
        ];

        for (key, value) in paths {
            if value.trim().is_empty() {
                return Err(CoreError::InvalidConfiguration(format!("{key} is empty")));
            }
        }

        Ok(())
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> CoreResult<Settings> {
    if let Err(e) = dotenvy::dotenv() {
        tracing::trace!(error = %e, "No .env file loaded");
    }

    Settings::load()
}

/// `CARDEX_` prefixed variables; `__` separates nesting levels so keys may
/// keep their single underscores.
fn environment() -> Environment {
    Environment::with_prefix("CARDEX")
        .prefix_separator("_")
        .separator("__")
        .ignore_empty(true)
        .try_parsing(true)
}
