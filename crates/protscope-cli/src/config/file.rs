use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileEndpointsConfig {
    pub record_url: Option<String>,
    pub network_url: Option<String>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileHttpConfig {
    pub user_agent: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileAlignmentConfig {
    pub max_alignments: Option<usize>,
    pub match_score: Option<i32>,
    pub mismatch_score: Option<i32>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileLayoutConfig {
    pub iterations: Option<usize>,
    pub seed: Option<u64>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileRenderConfig {
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub node_radius: Option<f64>,
    pub font_size: Option<f64>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileConfig {
    pub endpoints: Option<FileEndpointsConfig>,
    pub http: Option<FileHttpConfig>,
    pub alignment: Option<FileAlignmentConfig>,
    pub layout: Option<FileLayoutConfig>,
    pub render: Option<FileRenderConfig>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn parses_every_section() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
            [endpoints]
            record-url = "http://localhost/{identifier}.txt"

            [http]
            timeout-secs = 12

            [alignment]
            max-alignments = 20
            mismatch-score = -1

            [layout]
            seed = 7

            [render]
            node-radius = 20.0
            "#,
        )
        .unwrap();

        let config = FileConfig::from_file(&path).unwrap();
        assert_eq!(
            config.endpoints.unwrap().record_url.as_deref(),
            Some("http://localhost/{identifier}.txt")
        );
        assert_eq!(config.http.unwrap().timeout_secs, Some(12));
        let alignment = config.alignment.unwrap();
        assert_eq!(alignment.max_alignments, Some(20));
        assert_eq!(alignment.mismatch_score, Some(-1));
        assert_eq!(alignment.match_score, None);
        assert_eq!(config.layout.unwrap().seed, Some(7));
        assert_eq!(config.render.unwrap().node_radius, Some(20.0));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[alignment]\ngap-penalty = 2\n").unwrap();

        assert!(matches!(
            FileConfig::from_file(&path),
            Err(CliError::FileParsing { .. })
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            FileConfig::from_file(&dir.path().join("absent.toml")),
            Err(CliError::Io(_))
        ));
    }
}
