use crate::core::models::interaction::InteractionTable;
use crate::core::models::record::{ProteinRecord, RecordSummary};
use crate::core::network::{InteractionGraph, Layout, spring_layout, render_svg};
use crate::core::protparam::{AnalysisError, AnalysisResult, ProteinAnalysis};
use crate::engine::config::ExplorerConfig;
use crate::engine::error::EngineError;
use crate::engine::explorer::Explorer;
use crate::engine::progress::{
    PHASE_ANALYZE, PHASE_FETCH_NETWORK, PHASE_FETCH_RECORD, PHASE_LAYOUT, ProgressReporter,
};
use crate::engine::source::RemoteSource;
use svg::Document;
use tracing::{info, instrument, warn};

/// Where the interaction table of a lookup comes from.
#[derive(Debug, Clone, Default)]
pub enum NetworkSource {
    #[default]
    Remote,
    /// A table loaded beforehand, e.g. from a local TSV file.
    Local(InteractionTable),
    Skip,
}

#[derive(Debug, Clone, Default)]
pub struct LookupOptions {
    pub network: NetworkSource,
    /// Also run the sequence statistics on the record's sequence block.
    pub analyze: bool,
}

/// An interaction table together with its graph, layout and drawing.
pub struct NetworkView {
    pub table: InteractionTable,
    pub graph: InteractionGraph,
    pub layout: Layout,
    pub svg: Document,
}

/// Outcome of one lookup. Record and network are retrieved independently, so
/// either may fail while the other succeeds.
pub struct LookupReport {
    pub identifier: String,
    pub record: Result<ProteinRecord, EngineError>,
    pub summary: Option<RecordSummary>,
    pub analysis: Option<Result<AnalysisResult, AnalysisError>>,
    pub network: Option<Result<NetworkView, EngineError>>,
}

impl LookupReport {
    pub fn is_complete_failure(&self) -> bool {
        self.record.is_err() && !matches!(self.network, Some(Ok(_)))
    }
}

/// Builds graph, layout and drawing for an already retrieved table.
pub fn network_view(
    table: InteractionTable,
    config: &ExplorerConfig,
    reporter: &ProgressReporter,
) -> NetworkView {
    let graph = InteractionGraph::from_records(table.records());
    let layout = reporter.phase(PHASE_LAYOUT, || spring_layout(&graph, &config.layout));
    let svg = render_svg(&graph, &layout, &config.render);
    NetworkView {
        table,
        graph,
        layout,
        svg,
    }
}

#[instrument(skip_all, name = "lookup_workflow", fields(identifier = identifier.trim()))]
pub fn run<S: RemoteSource>(
    explorer: &mut Explorer<S>,
    identifier: &str,
    options: &LookupOptions,
    reporter: &ProgressReporter,
) -> LookupReport {
    let record = reporter.phase(PHASE_FETCH_RECORD, || {
        explorer.fetch_record(identifier).cloned()
    });
    if let Err(e) = &record {
        warn!("{}", e);
    }

    let summary = record.as_ref().ok().map(ProteinRecord::summary);
    let analysis = if options.analyze {
        summary.as_ref().map(|summary| {
            reporter.phase(PHASE_ANALYZE, || {
                let sequence = summary.sequence.as_ref().map(|s| s.as_str()).unwrap_or("");
                ProteinAnalysis::new(sequence).map(|analysis| analysis.summarize(false))
            })
        })
    } else {
        None
    };

    let table = match &options.network {
        NetworkSource::Skip => None,
        NetworkSource::Local(table) => Some(Ok(table.clone())),
        NetworkSource::Remote => Some(reporter.phase(PHASE_FETCH_NETWORK, || {
            explorer.fetch_network(identifier).cloned()
        })),
    };
    if let Some(Err(e)) = &table {
        warn!("{}", e);
    }

    let config = explorer.config();
    let network = table.map(|result| result.map(|table| network_view(table, config, reporter)));

    info!(
        record = record.is_ok(),
        network = matches!(network, Some(Ok(_))),
        "Lookup finished"
    );

    LookupReport {
        identifier: identifier.trim().to_string(),
        record,
        summary,
        analysis,
        network,
    }
}
