use super::lookup::{OutputTargets, write_report};
use crate::cli::OutputFormat;
use crate::error::Result;
use crate::output::{write_alignment, write_analysis};
use crate::utils::progress::CliProgressHandler;
use protscope::{
    engine::{
        config::ExplorerConfig, explorer::Explorer, progress::ProgressReporter,
        source::RemoteSource,
    },
    workflows::{self, lookup::LookupOptions, lookup::NetworkSource},
};
use std::io::{self, BufRead, Write};
use tracing::{debug, info, warn};

const PROMPT: &str = "protscope> ";

const HELP: &str = "\
Commands:
  lookup <ID>... [--no-network] [--analyze]   Retrieve records and interaction networks
  analyze <SEQUENCE>                          Compute sequence statistics
  compare <SEQ1> <SEQ2>                       Globally align two sequences
  cache                                       List cached identifiers
  clear                                       Empty the retrieval caches
  help                                        Show this message
  quit                                        Leave the session";

pub fn run(config: ExplorerConfig, show_progress: bool) -> Result<()> {
    info!("Opening interactive session...");
    let mut explorer = Explorer::connect(config)?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(&mut explorer, stdin.lock(), stdout.lock(), show_progress)
}

/// Reads commands line by line until `quit` or end of input.
///
/// A failing command prints its error and the session carries on; only I/O
/// errors on `out` end it early.
pub fn run_session<S: RemoteSource>(
    explorer: &mut Explorer<S>,
    input: impl BufRead,
    mut out: impl Write,
    show_progress: bool,
) -> Result<()> {
    let progress_handler = CliProgressHandler::new(show_progress);
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    writeln!(
        out,
        "protscope {} interactive session. Type 'help' for commands.",
        env!("CARGO_PKG_VERSION")
    )?;
    write!(out, "{}", PROMPT)?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            write!(out, "{}", PROMPT)?;
            out.flush()?;
            continue;
        };
        let rest: Vec<&str> = words.collect();
        debug!(command, args = rest.len(), "Shell command");

        match command {
            "quit" | "exit" => break,
            "help" => writeln!(out, "{}", HELP)?,
            "lookup" => lookup(explorer, &rest, &reporter, &mut out)?,
            "analyze" => {
                if rest.is_empty() {
                    writeln!(out, "Usage: analyze <SEQUENCE>")?;
                } else {
                    match workflows::analyze::run(&rest.concat(), false) {
                        Ok(result) => write_analysis(&mut out, &result, OutputFormat::Text)?,
                        Err(e) => writeln!(out, "Error: {}", e)?,
                    }
                }
            }
            "compare" => {
                if let [first, second] = rest.as_slice() {
                    match workflows::compare::run(first, second, &explorer.config().alignment) {
                        Ok(set) => write_alignment(&mut out, &set, OutputFormat::Text)?,
                        Err(e) => writeln!(out, "Error: {}", e)?,
                    }
                } else {
                    writeln!(out, "Usage: compare <SEQ1> <SEQ2>")?;
                }
            }
            "cache" => {
                let mut records: Vec<&str> = explorer.cached_records().keys().collect();
                let mut networks: Vec<&str> = explorer.cached_networks().keys().collect();
                records.sort_unstable();
                networks.sort_unstable();
                writeln!(out, "Records:  {}", records.join(" "))?;
                writeln!(out, "Networks: {}", networks.join(" "))?;
            }
            "clear" => {
                explorer.clear_caches();
                writeln!(out, "Caches cleared.")?;
            }
            other => writeln!(out, "Unknown command '{}'. Type 'help' for commands.", other)?,
        }

        write!(out, "{}", PROMPT)?;
        out.flush()?;
    }

    writeln!(out)?;
    info!("Interactive session closed.");
    Ok(())
}

fn lookup<S: RemoteSource>(
    explorer: &mut Explorer<S>,
    args: &[&str],
    reporter: &ProgressReporter,
    out: &mut impl Write,
) -> Result<()> {
    let mut options = LookupOptions::default();
    let mut identifiers = Vec::new();
    for arg in args {
        match *arg {
            "--no-network" => options.network = NetworkSource::Skip,
            "--analyze" => options.analyze = true,
            flag if flag.starts_with("--") => {
                writeln!(out, "Unknown option '{}'", flag)?;
                return Ok(());
            }
            id => identifiers.push(id),
        }
    }
    if identifiers.is_empty() {
        writeln!(out, "Usage: lookup <ID>... [--no-network] [--analyze]")?;
        return Ok(());
    }

    let targets = OutputTargets::default();
    for identifier in identifiers {
        let report = workflows::lookup::run(explorer, identifier, &options, reporter);
        if report.is_complete_failure() {
            warn!("Nothing could be retrieved for '{}'", report.identifier);
        }
        if let Err(e) = write_report(out, &report, &targets) {
            writeln!(out, "Error: {}", e)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use protscope::engine::error::FetchError;
    use std::cell::Cell;

    #[derive(Default)]
    struct CountingSource {
        calls: Cell<usize>,
    }

    impl RemoteSource for CountingSource {
        fn get_text(&self, url: &str) -> std::result::Result<String, FetchError> {
            self.calls.set(self.calls.get() + 1);
            if url.contains("MISSING") {
                return Err(FetchError::Status {
                    url: url.to_string(),
                    status: 404,
                });
            }
            Ok("ID   TEST_HUMAN   Reviewed;   4 AA.\nSQ   SEQUENCE   4 AA;\n     MKWV\n//\n".to_string())
        }
    }

    fn session(script: &str) -> (String, Explorer<CountingSource>) {
        let mut explorer = Explorer::with_source(CountingSource::default(), ExplorerConfig::default());
        let mut out = Vec::new();
        run_session(&mut explorer, script.as_bytes(), &mut out, false).unwrap();
        (String::from_utf8(out).unwrap(), explorer)
    }

    #[test]
    fn repeated_lookup_hits_the_cache() {
        let (text, explorer) = session("lookup P1 --no-network\nlookup P1 --no-network\ncache\nquit\n");
        assert_eq!(explorer.source().calls.get(), 1);
        assert_eq!(text.matches("=== P1 ===").count(), 2);
        assert!(text.contains("Records:  P1\n"));
    }

    #[test]
    fn failures_do_not_end_the_session() {
        let (text, _) = session(
            "lookup MISSING --no-network\nanalyze MEEPXQ\ncompare ACGT\nbogus\nanalyze GAV\n",
        );
        assert!(text.contains("Record unavailable: Failed to fetch record for 'MISSING'"));
        assert!(text.contains("Error: "));
        assert!(text.contains("Usage: compare <SEQ1> <SEQ2>"));
        assert!(text.contains("Unknown command 'bogus'"));
        assert!(text.contains("Molecular weight:"));
    }

    #[test]
    fn compare_uses_session_alignment_settings() {
        let (text, _) = session("compare MEEPQSDPSV MEEPQSDLSV\n");
        assert!(text.contains("Score: 9"));
    }

    #[test]
    fn clear_empties_caches_and_quit_stops_reading() {
        let (text, explorer) =
            session("lookup P1 --no-network\nclear\nquit\nlookup P2 --no-network\n");
        assert!(text.contains("Caches cleared."));
        assert!(!text.contains("=== P2 ==="));
        assert!(explorer.cached_records().is_empty());
        assert_eq!(explorer.source().calls.get(), 1);
    }

    #[test]
    fn help_lists_commands() {
        let (text, _) = session("help\n");
        for command in ["lookup", "analyze", "compare", "quit"] {
            assert!(text.contains(command));
        }
    }
}
