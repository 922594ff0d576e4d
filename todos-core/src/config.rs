//! Remote store configuration, read once at startup

use reqwest::Url;

use crate::error::ConfigError;
use crate::model::TodoId;

/// Environment variable holding the base URL of the todo API
pub const API_URL_ENV: &str = "TODOS_API_URL";

/// Where the remote todo collection lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    base_url: Url,
}

impl Config {
    /// Validate `base_url` (must be an absolute http(s) URL)
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidApiUrl {
            url: base_url.to_string(),
            reason,
        };

        let url = Url::parse(base_url.trim()).map_err(|e| invalid(e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme {:?}", url.scheme())));
        }
        if url.cannot_be_a_base() {
            return Err(invalid("not a base URL".to_string()));
        }

        Ok(Self { base_url: url })
    }

    /// Read the base URL from [`API_URL_ENV`]
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var(API_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::new(&url),
            _ => Err(ConfigError::MissingApiUrl(API_URL_ENV)),
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `{base}/todos`
    pub fn collection_url(&self) -> String {
        self.endpoint(None).into()
    }

    /// `{base}/todos/{id}`, with the id percent-encoded as one path segment
    pub fn item_url(&self, id: &TodoId) -> String {
        self.endpoint(Some(id)).into()
    }

    fn endpoint(&self, id: Option<&TodoId>) -> Url {
        let mut url = self.base_url.clone();
        // `new` rejects cannot-be-a-base URLs, so segments are always available
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("todos");
            if let Some(id) = id {
                segments.push(&id.to_string());
            }
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_urls() {
        let config = Config::new("http://localhost:3000").unwrap();
        assert_eq!(config.collection_url(), "http://localhost:3000/todos");
        assert_eq!(
            config.item_url(&TodoId::Number(4)),
            "http://localhost:3000/todos/4"
        );
    }

    #[test]
    fn test_base_path_is_kept() {
        let config = Config::new("https://api.example.com/v1/").unwrap();
        assert_eq!(config.collection_url(), "https://api.example.com/v1/todos");
        assert_eq!(
            config.item_url(&"a1b2".into()),
            "https://api.example.com/v1/todos/a1b2"
        );
    }

    #[test]
    fn test_text_id_is_one_segment() {
        let config = Config::new("http://localhost:3000").unwrap();

        let url = config.item_url(&"a/b?c".into());
        assert_eq!(url, "http://localhost:3000/todos/a%2Fb%3Fc");

        let parsed = Url::parse(&url).unwrap();
        assert_eq!(parsed.path_segments().unwrap().count(), 2);
        assert_eq!(parsed.query(), None);

        assert_eq!(
            config.item_url(&"to do #1".into()),
            "http://localhost:3000/todos/to%20do%20%231"
        );
    }

    #[test]
    fn test_rejects_bad_urls() {
        assert!(matches!(
            Config::new("localhost:3000"),
            Err(ConfigError::InvalidApiUrl { .. })
        ));
        assert!(matches!(
            Config::new("ftp://example.com"),
            Err(ConfigError::InvalidApiUrl { .. })
        ));
        assert!(Config::new("not a url").is_err());
    }
}
