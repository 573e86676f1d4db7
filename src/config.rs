use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::Path;
use thiserror::Error;
use tracing::{error, info};
use validator::{Validate, ValidationError, ValidationErrors};

const CONFIG_DIR: &str = "config";
const DEFAULT_ENV: &str = "development";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DATABASE_URL: &str = "sqlite://warehouse.db?mode=rwc";
const DEFAULT_LOG_LEVEL: &str = "info";
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

// Pool tuning
const POOL_MAX: u32 = 16;
const POOL_MIN: u32 = 2;
const POOL_CONNECT_SECS: u64 = 30;
const POOL_IDLE_SECS: u64 = 600;
const POOL_ACQUIRE_SECS: u64 = 8;

/// Runtime settings for the warehouse service.
///
/// Populated by [`load_config`]; every field can be overridden with an
/// `APP__<FIELD>` environment variable.
#[derive(Clone, Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// sea-orm connection string, `sqlite://...` or `postgres://...`
    pub database_url: String,

    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// `development`, `test`, `production`, ...
    pub environment: String,

    #[serde(default = "default_log_level")]
    #[validate(custom = "validate_log_level")]
    pub log_level: String,

    /// Emit logs as JSON lines
    #[serde(default)]
    pub log_json: bool,

    /// Apply pending migrations before serving
    #[serde(default)]
    pub auto_migrate: bool,

    /// Comma-separated origins allowed by CORS
    #[serde(default)]
    pub cors_allowed_origins: Option<String>,

    /// Opt into `CorsLayer::permissive()` outside development
    #[serde(default)]
    pub cors_allow_any_origin: bool,

    #[serde(default)]
    pub cors_allow_credentials: bool,

    #[serde(default = "default_db_max_connections")]
    #[validate(range(min = 1))]
    pub db_max_connections: u32,

    #[serde(default = "default_db_min_connections")]
    pub db_min_connections: u32,

    #[serde(default = "default_db_connect_timeout_secs")]
    pub db_connect_timeout_secs: u64,
    #[serde(default = "default_db_idle_timeout_secs")]
    pub db_idle_timeout_secs: u64,
    #[serde(default = "default_db_acquire_timeout_secs")]
    pub db_acquire_timeout_secs: u64,
}

impl AppConfig {
    /// Builds a config with the stock pool and logging settings.
    pub fn new(database_url: String, host: String, port: u16, environment: String) -> Self {
        Self {
            database_url,
            host,
            port,
            environment,
            log_level: default_log_level(),
            log_json: false,
            auto_migrate: false,
            cors_allowed_origins: None,
            cors_allow_any_origin: false,
            cors_allow_credentials: false,
            db_max_connections: POOL_MAX,
            db_min_connections: POOL_MIN,
            db_connect_timeout_secs: POOL_CONNECT_SECS,
            db_idle_timeout_secs: POOL_IDLE_SECS,
            db_acquire_timeout_secs: POOL_ACQUIRE_SECS,
        }
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn log_level(&self) -> &str {
        &self.log_level
    }

    pub fn is_production(&self) -> bool {
        self.environment.eq_ignore_ascii_case("production")
    }

    pub fn is_development(&self) -> bool {
        self.environment.eq_ignore_ascii_case("development")
    }

    /// Configured CORS origins with blanks dropped.
    pub fn cors_origins(&self) -> Vec<&str> {
        self.cors_allowed_origins
            .as_deref()
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn has_cors_allowed_origins(&self) -> bool {
        !self.cors_origins().is_empty()
    }

    /// Development always gets permissive CORS; elsewhere it must be requested.
    pub fn should_allow_permissive_cors(&self) -> bool {
        self.is_development() || self.cors_allow_any_origin
    }

    /// Cross-field rules the derive cannot express.
    fn check_consistency(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if !self.should_allow_permissive_cors() && !self.has_cors_allowed_origins() {
            let mut err = ValidationError::new("cors_allowed_origins_required");
            err.message = Some(
                "outside development set APP__CORS_ALLOWED_ORIGINS or APP__CORS_ALLOW_ANY_ORIGIN=true"
                    .into(),
            );
            errors.add("cors_allowed_origins", err);
        }

        if self.db_min_connections > self.db_max_connections {
            let mut err = ValidationError::new("db_min_connections");
            err.message = Some("db_min_connections must not exceed db_max_connections".into());
            errors.add("db_min_connections", err);
        }

        if errors.errors().is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[derive(Debug, Error)]
pub enum AppConfigError {
    #[error("Configuration loading failed: {0}")]
    Load(#[from] ConfigError),

    #[error("Configuration validation failed: {0}")]
    Validation(#[from] ValidationErrors),
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_db_max_connections() -> u32 {
    POOL_MAX
}

fn default_db_min_connections() -> u32 {
    POOL_MIN
}

fn default_db_connect_timeout_secs() -> u64 {
    POOL_CONNECT_SECS
}

fn default_db_idle_timeout_secs() -> u64 {
    POOL_IDLE_SECS
}

fn default_db_acquire_timeout_secs() -> u64 {
    POOL_ACQUIRE_SECS
}

fn validate_log_level(level: &str) -> Result<(), ValidationError> {
    if LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
        return Ok(());
    }
    let mut err = ValidationError::new("log_level");
    err.message = Some(format!("expected one of {}", LOG_LEVELS.join(", ")).into());
    Err(err)
}

/// Installs the global subscriber. `RUST_LOG` wins over `level` when set.
pub fn init_tracing(level: &str, json: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = match env::var("RUST_LOG") {
        Ok(directive) if !directive.trim().is_empty() => EnvFilter::new(directive),
        _ => EnvFilter::new(format!("warehouse_api={level},tower_http=debug")),
    };

    let builder = fmt().with_env_filter(filter);
    // A subscriber may already be installed (tests, embedding); keep it.
    let _ = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}

/// Reads settings from built-in defaults, then `config/default`, then
/// `config/{RUN_ENV}`, then `APP__*` variables, and validates the result.
pub fn load_config() -> Result<AppConfig, AppConfigError> {
    let run_env = env::var("RUN_ENV")
        .or_else(|_| env::var("APP_ENV"))
        .unwrap_or_else(|_| DEFAULT_ENV.to_string());
    info!(environment = %run_env, "loading configuration");

    if !Path::new(CONFIG_DIR).is_dir() {
        info!(dir = CONFIG_DIR, "no config directory, using defaults and environment");
    }

    let app_config: AppConfig = Config::builder()
        .set_default("database_url", DEFAULT_DATABASE_URL)?
        .set_default("host", DEFAULT_HOST)?
        .set_default("port", i64::from(DEFAULT_PORT))?
        .set_default("environment", run_env.as_str())?
        .set_default("log_level", DEFAULT_LOG_LEVEL)?
        .set_default("log_json", false)?
        .set_default("auto_migrate", true)?
        .add_source(File::with_name(&format!("{CONFIG_DIR}/default")).required(false))
        .add_source(File::with_name(&format!("{CONFIG_DIR}/{run_env}")).required(false))
        .add_source(Environment::with_prefix("APP").separator("__"))
        .build()?
        .try_deserialize()?;

    if let Err(e) = app_config
        .validate()
        .and_then(|()| app_config.check_consistency())
    {
        error!(error = %e, "invalid configuration");
        return Err(AppConfigError::Validation(e));
    }

    Ok(app_config)
}
