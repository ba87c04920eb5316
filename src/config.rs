use std::env;

use leptos::logging::log;

/// The facade always listens here; it exposes no port flag.
pub const API_PORT: u16 = 8080;

pub const DEFAULT_DATABASE_PATH: &str = "storefront.db";

pub const IDENTITY_SCRIPT_URL: &str = "https://accounts.google.com/gsi/client";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub port: u16,
    pub database_path: String,
}

impl ApiConfig {
    pub fn load() -> Self {
        Self {
            port: API_PORT,
            database_path: env::var("STOREFRONT_DB").unwrap_or_else(|_| {
                log!("[CONFIG] STOREFRONT_DB not set, using default: {DEFAULT_DATABASE_PATH}");
                DEFAULT_DATABASE_PATH.to_string()
            }),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

/// Identity-service settings, fixed at build time so the server render and
/// the hydrated client see the same value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IdentityConfig {
    pub client_id: Option<String>,
}

impl IdentityConfig {
    pub fn from_build_env() -> Self {
        Self::from_value(option_env!("GOOGLE_CLIENT_ID"))
    }

    pub fn from_value(client_id: Option<&str>) -> Self {
        Self {
            client_id: client_id
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .map(str::to_string),
        }
    }
}
