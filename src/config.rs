//! Configuration management for the extraction server

use std::env;

/// Default listen port for local development.
const DEFAULT_PORT: u16 = 5000;

/// Browser origins allowed to call the API.
const DEFAULT_ALLOWED_ORIGINS: &[&str] = &[
    "https://vision-text-six.vercel.app",
    "http://localhost:3000",
];

/// Immutable runtime configuration, read once at startup and passed to the
/// server bootstrap.
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub cors: CorsConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: DEFAULT_PORT,
            },
            cors: CorsConfig {
                allowed_origins: DEFAULT_ALLOWED_ORIGINS
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            server: ServerConfig {
                host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("PORT")
                    .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                    .parse()
                    .unwrap_or(DEFAULT_PORT),
            },
            cors: CorsConfig {
                allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                    .map(|list| parse_origins(&list))
                    .unwrap_or_else(|_| {
                        DEFAULT_ALLOWED_ORIGINS.iter().map(|s| s.to_string()).collect()
                    }),
            },
        }
    }
}

/// Split a comma-separated origin list, dropping empty entries.
fn parse_origins(list: &str) -> Vec<String> {
    list.split(',')
        .map(|origin| origin.trim().to_string())
        .filter(|origin| !origin.is_empty())
        .collect()
}
