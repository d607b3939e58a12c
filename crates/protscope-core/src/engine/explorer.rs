use super::cache::RetrievalCache;
use super::config::ExplorerConfig;
use super::error::EngineError;
use super::source::{HttpSource, RemoteSource};
use crate::core::io::traits::TabularFile;
use crate::core::io::tsv::InteractionTsv;
use crate::core::models::interaction::InteractionTable;
use crate::core::models::record::ProteinRecord;
use tracing::{debug, info};

/// A retrieval session: one remote source plus one cache per resource kind.
///
/// Every public operation takes `&mut self`, so a session is used from one
/// thread at a time and never issues two requests for the same key at once.
pub struct Explorer<S: RemoteSource = HttpSource> {
    source: S,
    config: ExplorerConfig,
    records: RetrievalCache<ProteinRecord>,
    networks: RetrievalCache<InteractionTable>,
}

impl Explorer<HttpSource> {
    /// Opens a session backed by a real HTTP client.
    pub fn connect(config: ExplorerConfig) -> Result<Self, EngineError> {
        let source = HttpSource::new(&config.http)?;
        Ok(Self::with_source(source, config))
    }
}

impl<S: RemoteSource> Explorer<S> {
    pub fn with_source(source: S, config: ExplorerConfig) -> Self {
        Self {
            source,
            config,
            records: RetrievalCache::new(),
            networks: RetrievalCache::new(),
        }
    }

    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Retrieves the registry record for `identifier`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidInput`] for a blank identifier and
    /// [`EngineError::RecordFetch`] when the request fails.
    pub fn fetch_record(&mut self, identifier: &str) -> Result<&ProteinRecord, EngineError> {
        let key = normalize(identifier)?;
        if self.records.contains(key) {
            debug!(identifier = key, "Record served from cache");
        }

        let url = self.config.endpoints.record_url_for(key);
        let source = &self.source;
        self.records.get_or_try_insert_with(key, || {
            info!(identifier = key, "Fetching record");
            let text = source
                .get_text(&url)
                .map_err(|source| EngineError::RecordFetch {
                    identifier: key.to_string(),
                    source,
                })?;
            Ok(ProteinRecord::new(key, text))
        })
    }

    /// Retrieves and parses the interaction table for `identifier`.
    ///
    /// A response that holds only a header is a successful, empty table.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidInput`] for a blank identifier,
    /// [`EngineError::NetworkFetch`] when the request fails and
    /// [`EngineError::NetworkTable`] when the body is not a valid table.
    pub fn fetch_network(&mut self, identifier: &str) -> Result<&InteractionTable, EngineError> {
        let key = normalize(identifier)?;
        if self.networks.contains(key) {
            debug!(identifier = key, "Interaction network served from cache");
        }

        let url = self.config.endpoints.network_url_for(key);
        let source = &self.source;
        self.networks.get_or_try_insert_with(key, || {
            info!(identifier = key, "Fetching interaction network");
            let text = source
                .get_text(&url)
                .map_err(|source| EngineError::NetworkFetch {
                    identifier: key.to_string(),
                    source,
                })?;
            let table = InteractionTsv::read_from_str(&text).map_err(|source| {
                EngineError::NetworkTable {
                    identifier: key.to_string(),
                    source,
                }
            })?;
            debug!(identifier = key, rows = table.len(), "Parsed interaction network");
            Ok(table)
        })
    }

    pub fn cached_records(&self) -> &RetrievalCache<ProteinRecord> {
        &self.records
    }

    pub fn cached_networks(&self) -> &RetrievalCache<InteractionTable> {
        &self.networks
    }

    pub fn clear_caches(&mut self) {
        self.records.clear();
        self.networks.clear();
    }
}

fn normalize(identifier: &str) -> Result<&str, EngineError> {
    let trimmed = identifier.trim();
    if trimmed.is_empty() {
        return Err(EngineError::InvalidInput(
            "identifier must not be empty".to_string(),
        ));
    }
    Ok(trimmed)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::engine::error::FetchError;
    use std::cell::RefCell;
    use std::collections::HashMap;

    pub(crate) const RECORD_TEXT: &str = "\
ID   P53_HUMAN               Reviewed;         393 AA.
AC   P04637;
DE   RecName: Full=Cellular tumor antigen p53;
GN   Name=TP53;
OS   Homo sapiens (Human).
SQ   SEQUENCE   20 AA;  2200 MW;  0000000000000000 CRC64;
     MEEPQSDPSV EPPLSQETFS
//
";

    pub(crate) const NETWORK_TEXT: &str = "\
stringId_A\tstringId_B\tpreferredName_A\tpreferredName_B\tncbiTaxonId\tscore
9606.A\t9606.B\tTP53\tMDM2\t9606\t0.999
9606.A\t9606.C\tTP53\tEP300\t9606\t0.999
9606.B\t9606.C\tMDM2\tEP300\t9606\t0.977
";

    /// Canned responses keyed by URL, with a log of every request made.
    #[derive(Default)]
    pub(crate) struct MockSource {
        responses: HashMap<String, Result<String, FetchError>>,
        pub requests: RefCell<Vec<String>>,
    }

    impl MockSource {
        pub fn respond(mut self, url: &str, body: Result<&str, u16>) -> Self {
            let response = body.map(str::to_string).map_err(|status| FetchError::Status {
                url: url.to_string(),
                status,
            });
            self.responses.insert(url.to_string(), response);
            self
        }

        pub fn request_count(&self) -> usize {
            self.requests.borrow().len()
        }
    }

    impl RemoteSource for MockSource {
        fn get_text(&self, url: &str) -> Result<String, FetchError> {
            self.requests.borrow_mut().push(url.to_string());
            self.responses.get(url).cloned().unwrap_or_else(|| {
                Err(FetchError::Transport {
                    url: url.to_string(),
                    message: "connection refused".to_string(),
                })
            })
        }
    }

    pub(crate) fn record_url(id: &str) -> String {
        format!("https://www.uniprot.org/uniprot/{id}.txt")
    }

    pub(crate) fn network_url(id: &str) -> String {
        format!("https://string-db.org/api/tsv/network?identifiers={id}")
    }

    pub(crate) fn tp53_source() -> MockSource {
        MockSource::default()
            .respond(&record_url("P04637"), Ok(RECORD_TEXT))
            .respond(&network_url("P04637"), Ok(NETWORK_TEXT))
    }

    #[test]
    fn fetch_record_returns_body_and_caches_it() {
        let mut explorer = Explorer::with_source(tp53_source(), ExplorerConfig::default());

        let record = explorer.fetch_record("P04637").unwrap();
        assert_eq!(record.identifier, "P04637");
        assert!(record.text.starts_with("ID   P53_HUMAN"));

        explorer.fetch_record(" P04637 ").unwrap();
        assert_eq!(explorer.source().request_count(), 1);
        assert_eq!(explorer.cached_records().len(), 1);
    }

    #[test]
    fn failed_fetch_is_not_cached_and_is_retried() {
        let source = MockSource::default().respond(&record_url("NOPE"), Err(404));
        let mut explorer = Explorer::with_source(source, ExplorerConfig::default());

        for _ in 0..2 {
            let err = explorer.fetch_record("NOPE").unwrap_err();
            assert!(matches!(
                err,
                EngineError::RecordFetch {
                    source: FetchError::Status { status: 404, .. },
                    ..
                }
            ));
        }
        assert_eq!(explorer.source().request_count(), 2);
        assert!(explorer.cached_records().is_empty());
    }

    #[test]
    fn transport_failure_is_distinguished_from_status() {
        let mut explorer = Explorer::with_source(MockSource::default(), ExplorerConfig::default());
        let err = explorer.fetch_network("P04637").unwrap_err();
        assert!(matches!(
            err,
            EngineError::NetworkFetch {
                source: FetchError::Transport { .. },
                ..
            }
        ));
        assert!(err.to_string().starts_with("Failed to fetch interaction network"));
    }

    #[test]
    fn fetch_network_parses_and_caches_table() {
        let mut explorer = Explorer::with_source(tp53_source(), ExplorerConfig::default());
        let table = explorer.fetch_network("P04637").unwrap();
        assert_eq!(table.len(), 3);

        explorer.fetch_network("P04637").unwrap();
        assert_eq!(explorer.source().request_count(), 1);
        assert!(explorer.cached_networks().contains("P04637"));
    }

    #[test]
    fn header_only_network_is_empty_not_an_error() {
        let header = NETWORK_TEXT.lines().next().unwrap();
        let source = MockSource::default().respond(&network_url("LONELY"), Ok(header));
        let mut explorer = Explorer::with_source(source, ExplorerConfig::default());
        assert!(explorer.fetch_network("LONELY").unwrap().is_empty());
    }

    #[test]
    fn malformed_network_is_a_table_error() {
        let source = MockSource::default().respond(&network_url("BAD"), Ok("<html>oops</html>"));
        let mut explorer = Explorer::with_source(source, ExplorerConfig::default());
        assert!(matches!(
            explorer.fetch_network("BAD"),
            Err(EngineError::NetworkTable { .. })
        ));
        assert!(explorer.cached_networks().is_empty());
    }

    #[test]
    fn blank_identifier_is_invalid_input() {
        let mut explorer = Explorer::with_source(MockSource::default(), ExplorerConfig::default());
        assert!(matches!(
            explorer.fetch_record("   "),
            Err(EngineError::InvalidInput(_))
        ));
        assert_eq!(explorer.source().request_count(), 0);
    }

    #[test]
    fn identifiers_are_percent_encoded() {
        let mut explorer = Explorer::with_source(MockSource::default(), ExplorerConfig::default());
        let _ = explorer.fetch_record("a b");
        assert_eq!(
            explorer.source().requests.borrow()[0],
            "https://www.uniprot.org/uniprot/a%20b.txt"
        );
    }

    #[test]
    fn clear_caches_forces_refetch() {
        let mut explorer = Explorer::with_source(tp53_source(), ExplorerConfig::default());
        explorer.fetch_record("P04637").unwrap();
        explorer.clear_caches();
        explorer.fetch_record("P04637").unwrap();
        assert_eq!(explorer.source().request_count(), 2);
    }
}
