// src/auth/guard.rs
use crate::auth::token::{hash_secret, hashes_equal};
use crate::config::Config;
use crate::errors::ServerError;
use astra::Request;

/// Guard for the scheduler-facing trigger endpoint. The caller must present
/// `Authorization: Bearer <secret>` matching the configured cron secret.
/// Secrets are compared as SHA-256 digests in constant time.
pub fn require_cron_secret(req: &Request, config: &Config) -> Result<(), ServerError> {
    let provided = bearer_token(req)
        .ok_or_else(|| ServerError::Unauthorized("missing bearer token".into()))?;

    if !hashes_equal(&hash_secret(provided), &hash_secret(&config.cron_secret)) {
        return Err(ServerError::Unauthorized("cron secret mismatch".into()));
    }
    Ok(())
}

fn bearer_token(req: &Request) -> Option<&str> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
}
