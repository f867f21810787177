//! Server configuration parsed from environment variables.

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_ARTIC_BASE_URL: &str = "https://api.artic.edu/api/v1";
pub const DEFAULT_ARTIC_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_ARTIC_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArticTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub artic_base_url: String,
    pub timeouts: ArticTimeouts,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `ARTIC_API_BASE_URL`: collection API root, default `https://api.artic.edu/api/v1`
    /// - `ARTIC_REQUEST_TIMEOUT_SECS`: default 30
    /// - `ARTIC_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// Unparseable numbers fall back to their defaults.
    #[must_use]
    pub fn from_env() -> Self {
        let artic_base_url = std::env::var("ARTIC_API_BASE_URL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ARTIC_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Self {
            port: env_parse("PORT", DEFAULT_PORT),
            artic_base_url,
            timeouts: ArticTimeouts {
                request_secs: env_parse("ARTIC_REQUEST_TIMEOUT_SECS", DEFAULT_ARTIC_REQUEST_TIMEOUT_SECS),
                connect_secs: env_parse("ARTIC_CONNECT_TIMEOUT_SECS", DEFAULT_ARTIC_CONNECT_TIMEOUT_SECS),
            },
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            artic_base_url: DEFAULT_ARTIC_BASE_URL.to_string(),
            timeouts: ArticTimeouts {
                request_secs: DEFAULT_ARTIC_REQUEST_TIMEOUT_SECS,
                connect_secs: DEFAULT_ARTIC_CONNECT_TIMEOUT_SECS,
            },
        }
    }
}

fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
