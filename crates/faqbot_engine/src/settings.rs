use std::time::Duration;

use url::Url;

use crate::{BackendError, FailureKind};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone)]
pub struct BackendSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(10),
            // Answers are generated server-side and can be slow.
            request_timeout: Duration::from_secs(120),
        }
    }
}

impl BackendSettings {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Resolves an API path such as `/api/v1/query` against the base URL.
    pub fn endpoint(&self, path: &str) -> Result<Url, BackendError> {
        let base = Url::parse(&self.base_url)
            .map_err(|err| BackendError::new(FailureKind::InvalidUrl, err.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(BackendError::new(
                FailureKind::InvalidUrl,
                format!("{} cannot be a base url", self.base_url),
            ));
        }
        let mut joined = base.as_str().trim_end_matches('/').to_string();
        joined.push_str(path);
        Url::parse(&joined).map_err(|err| BackendError::new(FailureKind::InvalidUrl, err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_with_or_without_trailing_slash() {
        let plain = BackendSettings::with_base_url("http://localhost:8000");
        let slashed = BackendSettings::with_base_url("http://localhost:8000/");
        assert_eq!(
            plain.endpoint("/api/v1/health").unwrap().as_str(),
            "http://localhost:8000/api/v1/health"
        );
        assert_eq!(
            plain.endpoint("/api/v1/health").unwrap(),
            slashed.endpoint("/api/v1/health").unwrap()
        );
    }

    #[test]
    fn endpoint_keeps_base_path_prefix() {
        let settings = BackendSettings::with_base_url("https://example.com/faq");
        assert_eq!(
            settings.endpoint("/api/v1/query").unwrap().as_str(),
            "https://example.com/faq/api/v1/query"
        );
    }

    #[test]
    fn invalid_base_url_is_reported() {
        let settings = BackendSettings::with_base_url("not a url");
        let err = settings.endpoint("/api/v1/health").unwrap_err();
        assert_eq!(err.kind, FailureKind::InvalidUrl);
    }
}
