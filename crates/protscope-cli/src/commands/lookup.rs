use crate::cli::{LookupArgs, OutputFormat};
use crate::error::{CliError, Result};
use crate::output::{write_analysis, write_summary};
use crate::utils::progress::CliProgressHandler;
use protscope::{
    core::io::{traits::TabularFile, tsv::InteractionTsv},
    core::network::save_svg,
    engine::{config::ExplorerConfig, explorer::Explorer, progress::ProgressReporter},
    workflows::lookup::{self, LookupOptions, LookupReport, NetworkSource},
};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

const GRAPH_SUFFIX: &str = "network.svg";
const TABLE_SUFFIX: &str = "network.tsv";

/// Where the per-identifier files of a lookup go.
#[derive(Debug, Default, Clone)]
pub struct OutputTargets {
    /// Explicit graph path; `<ID>_network.svg` when absent.
    pub graph: Option<PathBuf>,
    /// Interaction tables are only saved when a path is given.
    pub table: Option<PathBuf>,
    /// Several identifiers share one explicit path, so each gets its own suffix.
    pub multiple: bool,
}

pub fn run(args: LookupArgs, config: ExplorerConfig, show_progress: bool) -> Result<()> {
    info!("Opening retrieval session...");
    let mut explorer = Explorer::connect(config)?;

    let network = match &args.network_file {
        Some(path) => {
            info!("Loading interaction table from {:?}", path);
            let table =
                InteractionTsv::read_from_path(path).map_err(|e| CliError::FileParsing {
                    path: path.clone(),
                    source: e.into(),
                })?;
            NetworkSource::Local(table)
        }
        None if args.no_network => NetworkSource::Skip,
        None => NetworkSource::Remote,
    };
    let options = LookupOptions {
        network,
        analyze: args.analyze,
    };
    let targets = OutputTargets {
        graph: args.graph_output,
        table: args.save_network,
        multiple: args.identifiers.len() > 1,
    };

    let progress_handler = CliProgressHandler::new(show_progress);
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut failures = 0;
    for identifier in &args.identifiers {
        let report = lookup::run(&mut explorer, identifier, &options, &reporter);
        write_report(&mut out, &report, &targets)?;
        if report.is_complete_failure() {
            warn!("Nothing could be retrieved for '{}'", report.identifier);
            failures += 1;
        }
    }

    if failures > 0 {
        return Err(CliError::Other(anyhow::anyhow!(
            "{} of {} lookups failed",
            failures,
            args.identifiers.len()
        )));
    }
    Ok(())
}

/// Prints one report and writes its graph (and table, if requested) to disk.
pub fn write_report(
    out: &mut impl Write,
    report: &LookupReport,
    targets: &OutputTargets,
) -> Result<()> {
    writeln!(out, "=== {} ===", report.identifier)?;
    match &report.record {
        Ok(record) => {
            if let Some(summary) = &report.summary {
                write_summary(out, summary)?;
                writeln!(out)?;
            }
            write!(out, "{}", record.text)?;
            if !record.text.ends_with('\n') {
                writeln!(out)?;
            }
        }
        Err(e) => writeln!(out, "Record unavailable: {}", e)?,
    }

    if let Some(analysis) = &report.analysis {
        writeln!(out, "--- Sequence statistics ---")?;
        match analysis {
            Ok(result) => write_analysis(out, result, OutputFormat::Text)?,
            Err(e) => writeln!(out, "Analysis failed: {}", e)?,
        }
    }

    match &report.network {
        None => {}
        Some(Err(e)) => writeln!(out, "Interaction network unavailable: {}", e)?,
        Some(Ok(view)) => {
            writeln!(
                out,
                "--- Interaction network: {} interactions among {} proteins ---",
                view.table.len(),
                view.graph.node_count()
            )?;
            if view.table.is_empty() {
                writeln!(out, "No interactions reported.")?;
            } else {
                InteractionTsv::write_to(&view.table, out)
                    .map_err(|e| CliError::Other(e.into()))?;
            }

            if let Some(explicit) = targets.table.as_deref() {
                let path = target_path(
                    Some(explicit),
                    &report.identifier,
                    targets.multiple,
                    TABLE_SUFFIX,
                );
                InteractionTsv::write_to_path(&view.table, &path).map_err(|e| {
                    CliError::FileParsing {
                        path: path.clone(),
                        source: e.into(),
                    }
                })?;
                writeln!(out, "Interaction table written to: {}", path.display())?;
            }

            let path = target_path(
                targets.graph.as_deref(),
                &report.identifier,
                targets.multiple,
                GRAPH_SUFFIX,
            );
            save_svg(&view.svg, &path)?;
            info!("Graph for '{}' written to {:?}", report.identifier, path);
            writeln!(out, "Graph written to: {}", path.display())?;
        }
    }
    writeln!(out)?;
    Ok(())
}

/// Resolves the output file for one identifier.
///
/// Without an explicit path the file is `<ID>_<suffix>` in the working
/// directory. An explicit path shared by several identifiers gets the
/// identifier inserted before its extension.
pub fn target_path(
    explicit: Option<&Path>,
    identifier: &str,
    multiple: bool,
    suffix: &str,
) -> PathBuf {
    let tag = file_tag(identifier);
    let Some(path) = explicit else {
        return PathBuf::from(format!("{}_{}", tag, suffix));
    };
    if !multiple {
        return path.to_path_buf();
    }

    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let file_name = match path.extension() {
        Some(ext) => format!("{}_{}.{}", stem, tag, ext.to_string_lossy()),
        None => format!("{}_{}", stem, tag),
    };
    path.with_file_name(file_name)
}

fn file_tag(identifier: &str) -> String {
    identifier
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
        .collect()
}
