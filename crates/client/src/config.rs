use std::path::PathBuf;

pub const DEFAULT_API_URL: &str = "http://localhost:3000/api/v1";
pub const DEFAULT_SESSION_FILE: &str = ".logistica-session.json";

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL including the `/api/v1` prefix.
    pub api_url: String,
    /// Where [`crate::session::FileSessionStore`] keeps the token.
    pub session_file: PathBuf,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env var                  | Default                          |
    /// |--------------------------|----------------------------------|
    /// | `LOGISTICA_API_URL`      | `http://localhost:3000/api/v1`   |
    /// | `LOGISTICA_SESSION_FILE` | `.logistica-session.json`        |
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_url = lookup("LOGISTICA_API_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let session_file = lookup("LOGISTICA_SESSION_FILE")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SESSION_FILE.to_string());

        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            session_file: PathBuf::from(session_file),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
