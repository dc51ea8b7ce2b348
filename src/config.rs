use std::env;

/// Backend API settings, read once at startup and injected into the client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Read the backend base URL from the API_URL environment variable.
    pub fn from_env() -> Result<Self, env::VarError> {
        let base_url = env::var("API_URL")?;
        Ok(Self::new(base_url))
    }

    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            // Paths are joined as "{base}/{path}", so strip any trailing slash here.
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_stripped() {
        let config = ApiConfig::new("http://localhost:8080/");
        assert_eq!(config.base_url, "http://localhost:8080");
    }

    #[test]
    fn plain_url_is_kept() {
        let config = ApiConfig::new("http://api.internal:3001");
        assert_eq!(config.base_url, "http://api.internal:3001");
    }
}
