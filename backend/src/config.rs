//! Configuration settings, read from environment variables.
//!
//! Every value has a default, so the server starts with no environment at
//! all. A `.env` file in the working directory is read first when present.
//! The database, JWT, Redis, email, AWS, Supabase and API key sections are
//! placeholders for future integrations; nothing in the server connects to
//! them yet.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use serde::Serialize;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Main application settings
#[derive(Debug, Clone, Serialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    pub jwt: JwtSettings,
    pub redis: RedisSettings,
    pub email: EmailSettings,
    pub aws: AwsSettings,
    pub supabase: SupabaseSettings,
    pub api_keys: ApiKeySettings,
    pub features: FeatureSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Serialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// Maximum accepted request body size in megabytes
    pub body_limit_mb: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct DatabaseSettings {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: SecretString,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct JwtSettings {
    pub secret: SecretString,
    pub expires_in: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RedisSettings {
    pub host: String,
    pub port: u16,
    pub password: Option<SecretString>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmailSettings {
    pub host: Option<String>,
    pub port: u16,
    pub user: Option<String>,
    pub password: Option<SecretString>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AwsSettings {
    pub access_key_id: Option<SecretString>,
    pub secret_access_key: Option<SecretString>,
    pub region: String,
    pub s3_bucket: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SupabaseSettings {
    pub url: Option<String>,
    pub anon_key: Option<SecretString>,
    pub service_key: Option<SecretString>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ApiKeySettings {
    pub openai: Option<SecretString>,
    pub stripe: Option<SecretString>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FeatureSettings {
    /// Per-request tracing
    pub enable_logging: bool,
    pub enable_cors: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoggingSettings {
    /// Default filter directive, overridden by `RUST_LOG`
    pub level: String,
}

/// String whose value never shows up in `Debug`, `Display` or serialized output.
/// The backing memory is wiped on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SecretString(String);

impl SecretString {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    pub fn expose_secret(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretString([REDACTED])")
    }
}

impl fmt::Display for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl Serialize for SecretString {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str("[REDACTED]")
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl Settings {
    /// Read `.env` into the process environment if one exists, then load
    /// settings from the environment. Variables already set take precedence.
    pub fn load() -> Self {
        dotenvy::dotenv().ok();
        Self::from_env()
    }

    /// Load settings from a dotenv-formatted file without touching the
    /// process environment
    pub fn from_env_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let vars = dotenvy::from_path_iter(path.as_ref())?
            .collect::<Result<HashMap<String, String>, _>>()?;
        Ok(Self::from_lookup(|key| vars.get(key).cloned()))
    }

    /// Load settings from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load settings through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let string = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());
        let port = |key: &str, default: u16| {
            lookup(key)
                .and_then(|v| v.trim().parse::<u16>().ok())
                .unwrap_or(default)
        };
        let secret = |key: &str| lookup(key).map(SecretString::new);
        // Features are on unless explicitly disabled
        let flag = |key: &str| lookup(key).map_or(true, |v| v.trim() != "false");

        Self {
            server: ServerSettings {
                host: string("HOST", "0.0.0.0"),
                port: port("PORT", 4000),
                body_limit_mb: lookup("BODY_LIMIT_MB")
                    .and_then(|v| v.trim().parse::<usize>().ok())
                    .unwrap_or(200),
            },
            database: DatabaseSettings {
                host: string("DB_HOST", "localhost"),
                port: port("DB_PORT", 5432),
                username: string("DB_USERNAME", "postgres"),
                password: SecretString::new(string("DB_PASSWORD", "password")),
                name: string("DB_NAME", "template_db"),
            },
            jwt: JwtSettings {
                secret: SecretString::new(string("JWT_SECRET", "your-secret-key")),
                expires_in: string("JWT_EXPIRES_IN", "1d"),
            },
            redis: RedisSettings {
                host: string("REDIS_HOST", "localhost"),
                port: port("REDIS_PORT", 6379),
                password: secret("REDIS_PASSWORD"),
            },
            email: EmailSettings {
                host: lookup("EMAIL_HOST"),
                port: port("EMAIL_PORT", 587),
                user: lookup("EMAIL_USER"),
                password: secret("EMAIL_PASSWORD"),
            },
            aws: AwsSettings {
                access_key_id: secret("AWS_ACCESS_KEY_ID"),
                secret_access_key: secret("AWS_SECRET_ACCESS_KEY"),
                region: string("AWS_REGION", "us-east-1"),
                s3_bucket: lookup("AWS_S3_BUCKET"),
            },
            supabase: SupabaseSettings {
                url: lookup("SUPABASE_URL"),
                anon_key: secret("SUPABASE_ANON_KEY"),
                service_key: secret("SUPABASE_SERVICE_KEY"),
            },
            api_keys: ApiKeySettings {
                openai: secret("OPENAI_API_KEY"),
                stripe: secret("STRIPE_SECRET_KEY"),
            },
            features: FeatureSettings {
                enable_logging: flag("ENABLE_LOGGING"),
                enable_cors: flag("ENABLE_CORS"),
            },
            logging: LoggingSettings {
                level: string("LOG_LEVEL", "info"),
            },
        }
    }

    /// Get server bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn body_limit_bytes(&self) -> usize {
        self.server.body_limit_mb.saturating_mul(1024 * 1024)
    }
}
