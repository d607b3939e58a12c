use super::config::HttpConfig;
use super::error::{EngineError, FetchError};
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use tracing::{debug, warn};

/// Anything that can answer a GET with a text body.
pub trait RemoteSource {
    /// Fetches `url` and returns the body of a successful response.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Transport`] when no response arrives and
    /// [`FetchError::Status`] for any non-2xx status.
    fn get_text(&self, url: &str) -> Result<String, FetchError>;
}

/// Blocking HTTP client shared by every request of a session.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    pub fn new(config: &HttpConfig) -> Result<Self, EngineError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("text/plain, */*"));
        let agent = HeaderValue::from_str(&config.user_agent).map_err(|e| {
            EngineError::Initialization(format!(
                "invalid user agent '{}': {}",
                config.user_agent, e
            ))
        })?;
        headers.insert(USER_AGENT, agent);

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|e| EngineError::Initialization(format!("HTTP client: {e}")))?;

        Ok(Self { client })
    }
}

impl RemoteSource for HttpSource {
    fn get_text(&self, url: &str) -> Result<String, FetchError> {
        debug!(url, "GET");
        let transport = |e: reqwest::Error| FetchError::Transport {
            url: url.to_string(),
            message: e.to_string(),
        };

        let response = self.client.get(url).send().map_err(transport)?;
        let status = response.status();
        if !status.is_success() {
            warn!(url, status = status.as_u16(), "Request rejected");
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        response.text().map_err(transport)
    }
}
