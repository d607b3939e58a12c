use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use crate::cli::AlignmentOverrides;
use crate::error::{CliError, Result};
use directories::ProjectDirs;
use protscope::core::network::{LayoutConfig, RenderConfig};
use protscope::engine::config::{ExplorerConfig, ExplorerConfigBuilder};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use tracing::debug;

const CONFIG_FILE_NAME: &str = "config.toml";

/// Picks the configuration file to load: the explicit path if one was given,
/// otherwise the per-user file when it exists.
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    let default_path = ProjectDirs::from("org", "protscope", "protscope")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))?;
    if default_path.is_file() {
        debug!("Using configuration file at default location {:?}", default_path);
        Some(default_path)
    } else {
        None
    }
}

/// Merges command-line flags, `--set` overrides, the configuration file and
/// built-in defaults, in that order of precedence.
pub fn build_config(
    config_path: Option<&Path>,
    set_values: &[String],
    overrides: &AlignmentOverrides,
) -> Result<ExplorerConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = if let Some(path) = config_path {
        FileConfig::from_file(path)?
    } else {
        FileConfig::default()
    };

    let mut file_config = apply_set_values(file_config, set_values)?;

    let endpoints_file = file_config.endpoints.take().unwrap_or_default();
    let http_file = file_config.http.take().unwrap_or_default();
    let alignment_file = file_config.alignment.take().unwrap_or_default();
    let layout_file = file_config.layout.take().unwrap_or_default();
    let render_file = file_config.render.take().unwrap_or_default();

    let timeout = http_file
        .timeout_secs
        .or(defaults.timeout_secs)
        .map(Duration::from_secs);

    let max_alignments = overrides
        .max_alignments
        .or(alignment_file.max_alignments)
        .unwrap_or(defaults.max_alignments);
    let match_score = overrides
        .match_score
        .or(alignment_file.match_score)
        .unwrap_or(defaults.match_score);
    let mismatch_score = overrides
        .mismatch_score
        .or(alignment_file.mismatch_score)
        .unwrap_or(defaults.mismatch_score);

    let layout = LayoutConfig {
        iterations: layout_file.iterations.unwrap_or(defaults.layout.iterations),
        seed: layout_file.seed.unwrap_or(defaults.layout.seed),
        ..defaults.layout
    };

    let render = RenderConfig {
        width: render_file.width.unwrap_or(defaults.render.width),
        height: render_file.height.unwrap_or(defaults.render.height),
        node_radius: render_file
            .node_radius
            .unwrap_or(defaults.render.node_radius),
        font_size: render_file.font_size.unwrap_or(defaults.render.font_size),
        ..defaults.render
    };

    ExplorerConfigBuilder::new()
        .record_url(endpoints_file.record_url.unwrap_or(defaults.record_url))
        .network_url(endpoints_file.network_url.unwrap_or(defaults.network_url))
        .user_agent(http_file.user_agent.unwrap_or(defaults.user_agent))
        .timeout(timeout)
        .max_alignments(max_alignments)
        .match_score(match_score)
        .mismatch_score(mismatch_score)
        .layout(layout)
        .render(render)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

fn parse_value<T: FromStr>(key: &str, value: &str, kind: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| CliError::Config(format!("Invalid {} value for {}: {}", kind, key, value)))
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let Some((key, value_str)) = kv_pair.split_once('=') else {
            return Err(CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            )));
        };
        let key = key.trim();

        match key {
            "endpoints.record-url" => {
                config
                    .endpoints
                    .get_or_insert_with(Default::default)
                    .record_url = Some(value_str.to_string());
            }
            "endpoints.network-url" => {
                config
                    .endpoints
                    .get_or_insert_with(Default::default)
                    .network_url = Some(value_str.to_string());
            }
            "http.user-agent" => {
                config.http.get_or_insert_with(Default::default).user_agent =
                    Some(value_str.to_string());
            }
            "http.timeout-secs" => {
                config.http.get_or_insert_with(Default::default).timeout_secs =
                    Some(parse_value(key, value_str, "integer")?);
            }
            "alignment.max-alignments" => {
                config
                    .alignment
                    .get_or_insert_with(Default::default)
                    .max_alignments = Some(parse_value(key, value_str, "integer")?);
            }
            "alignment.match-score" => {
                config
                    .alignment
                    .get_or_insert_with(Default::default)
                    .match_score = Some(parse_value(key, value_str, "integer")?);
            }
            "alignment.mismatch-score" => {
                config
                    .alignment
                    .get_or_insert_with(Default::default)
                    .mismatch_score = Some(parse_value(key, value_str, "integer")?);
            }
            "layout.iterations" => {
                config.layout.get_or_insert_with(Default::default).iterations =
                    Some(parse_value(key, value_str, "integer")?);
            }
            "layout.seed" => {
                config.layout.get_or_insert_with(Default::default).seed =
                    Some(parse_value(key, value_str, "integer")?);
            }
            "render.width" => {
                config.render.get_or_insert_with(Default::default).width =
                    Some(parse_value(key, value_str, "float")?);
            }
            "render.height" => {
                config.render.get_or_insert_with(Default::default).height =
                    Some(parse_value(key, value_str, "float")?);
            }
            "render.node-radius" => {
                config.render.get_or_insert_with(Default::default).node_radius =
                    Some(parse_value(key, value_str, "float")?);
            }
            "render.font-size" => {
                config.render.get_or_insert_with(Default::default).font_size =
                    Some(parse_value(key, value_str, "float")?);
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}
