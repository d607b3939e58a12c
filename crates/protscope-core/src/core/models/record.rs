use super::sequence::ProteinSequence;
use serde::Serialize;

/// A plain-text protein record as returned by the registry, keyed by the
/// identifier it was requested with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProteinRecord {
    pub identifier: String,
    pub text: String,
}

/// Fields picked out of a UniProt flat-file entry.
///
/// Parsing is lenient: anything that cannot be recognised is left empty rather
/// than reported as an error, so arbitrary text always yields a summary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RecordSummary {
    pub entry_name: Option<String>,
    pub accessions: Vec<String>,
    pub protein_name: Option<String>,
    pub gene_name: Option<String>,
    pub organism: Option<String>,
    pub declared_length: Option<usize>,
    pub sequence: Option<ProteinSequence>,
}

impl ProteinRecord {
    pub fn new(identifier: &str, text: String) -> Self {
        Self {
            identifier: identifier.to_string(),
            text,
        }
    }

    pub fn summary(&self) -> RecordSummary {
        parse_flat_file(&self.text)
    }
}

fn strip_evidence(value: &str) -> &str {
    let value = value.split(" {").next().unwrap_or(value);
    value.trim().trim_end_matches(';').trim()
}

fn parse_flat_file(text: &str) -> RecordSummary {
    let mut summary = RecordSummary::default();
    let mut organism_parts: Vec<&str> = Vec::new();
    let mut sequence = String::new();
    let mut in_sequence = false;

    for line in text.lines() {
        if in_sequence {
            if line.starts_with("//") {
                in_sequence = false;
                continue;
            }
            sequence.extend(line.chars().filter(|c| c.is_alphabetic()));
            continue;
        }

        let (tag, body) = match (line.get(..2), line.get(5..)) {
            (Some(tag), Some(body)) => (tag, body),
            (Some(tag), None) => (tag, ""),
            _ => continue,
        };

        match tag {
            "ID" if summary.entry_name.is_none() => {
                let mut tokens = body.split_whitespace();
                summary.entry_name = tokens.next().map(str::to_string);
                let tokens: Vec<&str> = body.split_whitespace().collect();
                summary.declared_length = tokens
                    .windows(2)
                    .find(|w| w[1].starts_with("AA"))
                    .and_then(|w| w[0].parse().ok());
            }
            "AC" => {
                summary.accessions.extend(
                    body.split(';')
                        .map(str::trim)
                        .filter(|s| !s.is_empty())
                        .map(str::to_string),
                );
            }
            "DE" if summary.protein_name.is_none() => {
                if let Some(rest) = body.trim_start().strip_prefix("RecName: Full=") {
                    summary.protein_name = Some(strip_evidence(rest).to_string());
                } else if let Some(rest) = body.trim_start().strip_prefix("SubName: Full=") {
                    summary.protein_name = Some(strip_evidence(rest).to_string());
                }
            }
            "GN" if summary.gene_name.is_none() => {
                summary.gene_name = body
                    .split(';')
                    .map(str::trim)
                    .find_map(|field| field.strip_prefix("Name="))
                    .map(|name| strip_evidence(name).to_string());
            }
            "OS" => organism_parts.push(body.trim()),
            "SQ" => in_sequence = true,
            _ => {}
        }
    }

    if !organism_parts.is_empty() {
        let joined = organism_parts.join(" ");
        summary.organism = Some(joined.trim_end_matches('.').to_string());
    }
    if !sequence.is_empty() {
        summary.sequence = Some(ProteinSequence::clean(&sequence));
    }
    summary
}
