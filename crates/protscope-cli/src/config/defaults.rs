use protscope::core::alignment::{DEFAULT_MAX_ALIGNMENTS, Scoring};
use protscope::core::network::{LayoutConfig, RenderConfig};
use protscope::engine::config::{DEFAULT_NETWORK_URL, DEFAULT_RECORD_URL, DEFAULT_USER_AGENT};

pub struct DefaultsConfig {
    pub record_url: String,
    pub network_url: String,
    pub user_agent: String,
    pub timeout_secs: Option<u64>,
    pub max_alignments: usize,
    pub match_score: i32,
    pub mismatch_score: i32,
    pub layout: LayoutConfig,
    pub render: RenderConfig,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        let scoring = Scoring::match_counting();
        Self {
            record_url: DEFAULT_RECORD_URL.to_string(),
            network_url: DEFAULT_NETWORK_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: None,
            max_alignments: DEFAULT_MAX_ALIGNMENTS,
            match_score: scoring.match_score,
            mismatch_score: scoring.mismatch_score,
            layout: LayoutConfig::default(),
            render: RenderConfig::default(),
        }
    }
}
