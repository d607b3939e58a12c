use crate::cli::AnalyzeArgs;
use crate::error::{CliError, Result};
use crate::output::write_analysis;
use crate::utils::progress::CliProgressHandler;
use protscope::engine::error::EngineError;
use protscope::engine::progress::{PHASE_ANALYZE, ProgressReporter};
use protscope::workflows;
use std::io::{self, Read};
use std::path::Path;
use tracing::{debug, info};

pub fn run(args: AnalyzeArgs, show_progress: bool) -> Result<()> {
    let raw = match (args.sequence, args.file.as_deref()) {
        (Some(sequence), _) => sequence,
        (None, Some(path)) => read_sequence_file(path)?,
        (None, None) => {
            info!("Reading sequence from standard input...");
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            strip_fasta_headers(&buf)
        }
    };
    debug!("Raw input holds {} characters", raw.len());

    let progress_handler = CliProgressHandler::new(show_progress);
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());
    let result = reporter
        .phase(PHASE_ANALYZE, || {
            workflows::analyze::run(&raw, args.monoisotopic)
        })
        .map_err(EngineError::from)?;

    write_analysis(&mut io::stdout().lock(), &result, args.format)
}

fn read_sequence_file(path: &Path) -> Result<String> {
    info!("Reading sequence from {:?}", path);
    let content = std::fs::read_to_string(path)?;
    let sequence = strip_fasta_headers(&content);
    if sequence.trim().is_empty() {
        return Err(CliError::FileParsing {
            path: path.to_path_buf(),
            source: anyhow::anyhow!("no sequence lines found"),
        });
    }
    Ok(sequence)
}

/// Drops FASTA header and comment lines, keeping only the first record.
fn strip_fasta_headers(text: &str) -> String {
    let mut sequence = String::new();
    let mut seen_header = false;
    for line in text.lines() {
        if line.starts_with('>') {
            if seen_header {
                break;
            }
            seen_header = true;
            continue;
        }
        if line.starts_with(';') {
            continue;
        }
        sequence.push_str(line.trim());
    }
    sequence
}
