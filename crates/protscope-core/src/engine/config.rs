use crate::core::alignment::{DEFAULT_MAX_ALIGNMENTS, Scoring};
use crate::core::network::{LayoutConfig, RenderConfig};
use std::time::Duration;
use thiserror::Error;

pub const IDENTIFIER_PLACEHOLDER: &str = "{identifier}";
pub const DEFAULT_RECORD_URL: &str = "https://www.uniprot.org/uniprot/{identifier}.txt";
pub const DEFAULT_NETWORK_URL: &str =
    "https://string-db.org/api/tsv/network?identifiers={identifier}";
pub const DEFAULT_USER_AGENT: &str = concat!("protscope/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Invalid value for {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointConfig {
    pub record_url: String,
    pub network_url: String,
}

impl EndpointConfig {
    pub fn record_url_for(&self, identifier: &str) -> String {
        expand(&self.record_url, identifier)
    }

    pub fn network_url_for(&self, identifier: &str) -> String {
        expand(&self.network_url, identifier)
    }
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            record_url: DEFAULT_RECORD_URL.to_string(),
            network_url: DEFAULT_NETWORK_URL.to_string(),
        }
    }
}

fn expand(template: &str, identifier: &str) -> String {
    template.replace(IDENTIFIER_PLACEHOLDER, &urlencoding::encode(identifier))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpConfig {
    pub user_agent: String,
    /// `None` waits for as long as the server takes.
    pub timeout: Option<Duration>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignmentConfig {
    pub scoring: Scoring,
    pub max_alignments: usize,
}

impl Default for AlignmentConfig {
    fn default() -> Self {
        Self {
            scoring: Scoring::default(),
            max_alignments: DEFAULT_MAX_ALIGNMENTS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExplorerConfig {
    pub endpoints: EndpointConfig,
    pub http: HttpConfig,
    pub alignment: AlignmentConfig,
    pub layout: LayoutConfig,
    pub render: RenderConfig,
}

#[derive(Default)]
pub struct ExplorerConfigBuilder {
    record_url: Option<String>,
    network_url: Option<String>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
    max_alignments: Option<usize>,
    match_score: Option<i32>,
    mismatch_score: Option<i32>,
    layout: Option<LayoutConfig>,
    render: Option<RenderConfig>,
}

impl ExplorerConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_url(mut self, template: impl Into<String>) -> Self {
        self.record_url = Some(template.into());
        self
    }
    pub fn network_url(mut self, template: impl Into<String>) -> Self {
        self.network_url = Some(template.into());
        self
    }
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }
    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
    pub fn max_alignments(mut self, n: usize) -> Self {
        self.max_alignments = Some(n);
        self
    }
    pub fn match_score(mut self, score: i32) -> Self {
        self.match_score = Some(score);
        self
    }
    pub fn mismatch_score(mut self, score: i32) -> Self {
        self.mismatch_score = Some(score);
        self
    }
    pub fn layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = Some(layout);
        self
    }
    pub fn render(mut self, render: RenderConfig) -> Self {
        self.render = Some(render);
        self
    }

    pub fn build(self) -> Result<ExplorerConfig, ConfigError> {
        let endpoints = EndpointConfig {
            record_url: template(self.record_url, "record_url")?,
            network_url: template(self.network_url, "network_url")?,
        };

        let http = HttpConfig {
            user_agent: self
                .user_agent
                .ok_or(ConfigError::MissingParameter("user_agent"))?,
            timeout: self.timeout,
        };

        let max_alignments = self
            .max_alignments
            .ok_or(ConfigError::MissingParameter("max_alignments"))?;
        if max_alignments == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "max_alignments",
                reason: "must be at least 1".to_string(),
            });
        }
        let alignment = AlignmentConfig {
            scoring: Scoring::new(
                self.match_score
                    .ok_or(ConfigError::MissingParameter("match_score"))?,
                self.mismatch_score
                    .ok_or(ConfigError::MissingParameter("mismatch_score"))?,
            ),
            max_alignments,
        };

        let layout = self.layout.ok_or(ConfigError::MissingParameter("layout"))?;
        let render = self.render.ok_or(ConfigError::MissingParameter("render"))?;
        let positive = |side: f64| side.is_finite() && side > 0.0;
        if !(positive(render.width) && positive(render.height)) {
            return Err(ConfigError::InvalidParameter {
                name: "render",
                reason: format!(
                    "canvas must have a positive finite size, got {}x{}",
                    render.width, render.height
                ),
            });
        }

        Ok(ExplorerConfig {
            endpoints,
            http,
            alignment,
            layout,
            render,
        })
    }
}

fn template(value: Option<String>, name: &'static str) -> Result<String, ConfigError> {
    let value = value.ok_or(ConfigError::MissingParameter(name))?;
    if !value.contains(IDENTIFIER_PLACEHOLDER) {
        return Err(ConfigError::InvalidParameter {
            name,
            reason: format!("URL template must contain {IDENTIFIER_PLACEHOLDER}"),
        });
    }
    Ok(value)
}
