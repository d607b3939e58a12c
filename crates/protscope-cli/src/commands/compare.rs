use crate::cli::CompareArgs;
use crate::error::Result;
use crate::output::write_alignment;
use crate::utils::progress::CliProgressHandler;
use protscope::engine::config::ExplorerConfig;
use protscope::engine::error::EngineError;
use protscope::engine::progress::{PHASE_ALIGN, ProgressReporter};
use protscope::workflows;
use std::io;
use tracing::info;

pub fn run(args: CompareArgs, config: ExplorerConfig, show_progress: bool) -> Result<()> {
    info!(
        "Aligning sequences of length {} and {} (limit {} alignments)",
        args.first.len(),
        args.second.len(),
        config.alignment.max_alignments
    );

    let progress_handler = CliProgressHandler::new(show_progress);
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());
    let set = reporter
        .phase(PHASE_ALIGN, || {
            workflows::compare::run(&args.first, &args.second, &config.alignment)
        })
        .map_err(EngineError::from)?;

    write_alignment(&mut io::stdout().lock(), &set, args.format)
}
