use std::env;

use crate::services::keys::ss58::{GENERIC_SUBSTRATE_PREFIX, MAX_PREFIX};

/// Environment configuration
/// Loads and validates environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    /// Network prefix used when a request doesn't name one.
    pub ss58_prefix: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:3000".to_string(),
            ss58_prefix: GENERIC_SUBSTRATE_PREFIX,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        dotenvy::dotenv().ok();

        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        let ss58_prefix = match env::var("SS58_PREFIX") {
            Ok(raw) => parse_prefix(&raw)?,
            Err(_) => GENERIC_SUBSTRATE_PREFIX,
        };

        Ok(Self {
            bind_addr,
            ss58_prefix,
        })
    }

    pub fn with_prefix(mut self, ss58_prefix: u16) -> Self {
        self.ss58_prefix = ss58_prefix;
        self
    }
}

fn parse_prefix(raw: &str) -> Result<u16, String> {
    let prefix: u16 = raw
        .trim()
        .parse()
        .map_err(|_| format!("SS58_PREFIX must be an integer, got '{}'", raw))?;

    if prefix > MAX_PREFIX {
        return Err(format!(
            "SS58_PREFIX must be at most {}, got {}",
            MAX_PREFIX, prefix
        ));
    }

    Ok(prefix)
}
