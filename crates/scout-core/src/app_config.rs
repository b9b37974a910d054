use std::net::SocketAddr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Which route group a server process exposes.
///
/// The scraping and places endpoints are separate deployments of the same
/// service; exactly one group is mounted per process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceMode {
    Scrape,
    Places,
}

impl std::fmt::Display for ServiceMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceMode::Scrape => write!(f, "scrape"),
            ServiceMode::Places => write!(f, "places"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub mode: ServiceMode,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Always `Some` in [`ServiceMode::Places`].
    pub places_api_key: Option<String>,
    pub places_base_url: String,
    pub scraper_request_timeout_secs: u64,
    pub scraper_user_agent: String,
}

impl AppConfig {
    /// Returns the places API key, or the error a places-backed entry point
    /// should fail startup with.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ConfigError::MissingEnvVar`] when no key was configured.
    pub fn require_places_api_key(&self) -> Result<&str, crate::ConfigError> {
        self.places_api_key
            .as_deref()
            .ok_or_else(|| crate::ConfigError::MissingEnvVar("GOOGLE_PLACES_API_KEY".to_string()))
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("mode", &self.mode)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field(
                "places_api_key",
                &self.places_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("places_base_url", &self.places_base_url)
            .field(
                "scraper_request_timeout_secs",
                &self.scraper_request_timeout_secs,
            )
            .field("scraper_user_agent", &self.scraper_user_agent)
            .finish()
    }
}
