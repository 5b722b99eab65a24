// src/config.rs
use crate::auth::token::generate_secret_default;
use std::env;
use tracing::{info, warn};

/// Runtime configuration, loaded once at startup and passed down explicitly.
pub struct Config {
    pub port: u16,
    pub db_path: String,
    pub cron_secret: String,
}

impl Config {
    pub fn load() -> Self {
        Self {
            port: env_or("PORT", "3000")
                .parse()
                .expect("PORT must be a number"),
            db_path: env_or("DATABASE_PATH", "camboconnect.sqlite3"),
            cron_secret: env::var("CRON_SECRET").unwrap_or_else(|_| {
                let secret = generate_secret_default();
                warn!("CRON_SECRET not set; generated ephemeral secret: {secret}");
                secret
            }),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    })
}
