use crate::error::{Result, RuntimeError};
use std::path::PathBuf;

/// Address a service binds its HTTP listener to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Load a `.env` file from the working directory (or a parent) if present.
///
/// Returns the path that was loaded. A missing file is not an error.
pub fn load_dotenv() -> Option<PathBuf> {
    dotenv::dotenv().ok()
}

/// Validate a base URL for an HTTP dependency and strip trailing slashes,
/// so callers can append absolute paths with `format!("{}/path", base)`.
pub fn normalize_base_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    let parsed = url::Url::parse(trimmed)?;

    match parsed.scheme() {
        "http" | "https" => {}
        other => {
            return Err(RuntimeError::Config(format!(
                "unsupported scheme '{}' in {}",
                other, trimmed
            )))
        }
    }

    if parsed.host_str().is_none() {
        return Err(RuntimeError::Config(format!("missing host in {}", trimmed)));
    }

    if parsed.query().is_some() || parsed.fragment().is_some() {
        return Err(RuntimeError::Config(format!(
            "base url must not carry a query or fragment: {}",
            trimmed
        )));
    }

    Ok(trimmed.trim_end_matches('/').to_string())
}
