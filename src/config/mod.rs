// src/config/mod.rs
// Service configuration, loaded once from the environment (and .env when present)

use once_cell::sync::Lazy;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct MotorConfig {
    // ── Database Configuration
    pub database_url: String,
    pub sqlite_max_connections: u32,
    pub migrations_dir: String,

    // ── Server Configuration
    pub host: String,
    pub port: u16,
    pub cors_origin: String,
    pub request_timeout: u64,

    // ── Ranking & Listing
    pub default_page_size: i64,
    pub saw_legacy_cc_weight: bool,

    // ── Logging Configuration
    pub log_level: String,
}

/// Parse a raw environment value, ignoring trailing `# comments` and whitespace.
/// Falls back to `default` when the value is absent or unparsable.
fn parse_or<T>(key: &str, raw: Option<String>, default: T) -> T
where
    T: FromStr,
{
    let Some(val) = raw else {
        return default;
    };

    let clean_val = val.split('#').next().unwrap_or("").trim();
    match clean_val.parse::<T>() {
        Ok(parsed) => parsed,
        Err(_) => {
            eprintln!("Config: {} = '{}' (parse failed, using default)", key, val);
            default
        }
    }
}

/// Like `parse_or`, but values below 1 also fall back to `default`
fn positive_or(key: &str, raw: Option<String>, default: i64) -> i64 {
    let parsed = parse_or(key, raw, default);
    if parsed < 1 {
        eprintln!("Config: {} = {} (must be at least 1, using default)", key, parsed);
        return default;
    }
    parsed
}

fn env_var_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    parse_or(key, std::env::var(key).ok(), default)
}

impl MotorConfig {
    pub fn from_env() -> Self {
        // A missing .env is normal in containers
        let _ = dotenvy::dotenv();

        Self {
            database_url: env_var_or("DATABASE_URL", "sqlite:./pilihanmotor.db?mode=rwc".to_string()),
            sqlite_max_connections: env_var_or("SQLITE_MAX_CONNECTIONS", 5),
            migrations_dir: env_var_or("MOTOR_MIGRATIONS_DIR", "./migrations".to_string()),
            host: env_var_or("MOTOR_HOST", "0.0.0.0".to_string()),
            port: env_var_or("MOTOR_PORT", 5005),
            cors_origin: env_var_or("MOTOR_CORS_ORIGIN", "http://localhost:3000".to_string()),
            request_timeout: env_var_or("MOTOR_REQUEST_TIMEOUT", 30),
            default_page_size: positive_or(
                "MOTOR_DEFAULT_PAGE_SIZE",
                std::env::var("MOTOR_DEFAULT_PAGE_SIZE").ok(),
                crate::core::primitives::DEFAULT_PAGE_SIZE,
            ),
            saw_legacy_cc_weight: env_var_or("MOTOR_SAW_LEGACY_CC_WEIGHT", false),
            log_level: env_var_or("MOTOR_LOG_LEVEL", "info".to_string()),
        }
    }

    /// Get server bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }

    /// Parsed log level, defaulting to INFO on anything unrecognised
    pub fn tracing_level(&self) -> tracing::Level {
        self.log_level.parse().unwrap_or(tracing::Level::INFO)
    }
}

// Global config instance - loaded once at startup
pub static CONFIG: Lazy<MotorConfig> = Lazy::new(MotorConfig::from_env);
