use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One row of a STRING `network` table.
///
/// Only the two partner-name columns are required. Evidence channels are kept
/// when present and left as `None` otherwise.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct InteractionRecord {
    #[serde(rename = "stringId_A", default)]
    pub string_id_a: Option<String>,
    #[serde(rename = "stringId_B", default)]
    pub string_id_b: Option<String>,
    #[serde(rename = "preferredName_A")]
    pub partner_a: String,
    #[serde(rename = "preferredName_B")]
    pub partner_b: String,
    #[serde(rename = "ncbiTaxonId", default)]
    pub taxon_id: Option<u32>,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub nscore: Option<f64>,
    #[serde(default)]
    pub fscore: Option<f64>,
    #[serde(default)]
    pub pscore: Option<f64>,
    #[serde(default)]
    pub ascore: Option<f64>,
    #[serde(default)]
    pub escore: Option<f64>,
    #[serde(default)]
    pub dscore: Option<f64>,
    #[serde(default)]
    pub tscore: Option<f64>,
}

impl InteractionRecord {
    pub fn new(partner_a: &str, partner_b: &str) -> Self {
        Self {
            string_id_a: None,
            string_id_b: None,
            partner_a: partner_a.to_string(),
            partner_b: partner_b.to_string(),
            taxon_id: None,
            score: None,
            nscore: None,
            fscore: None,
            pscore: None,
            ascore: None,
            escore: None,
            dscore: None,
            tscore: None,
        }
    }

    pub fn with_score(mut self, score: f64) -> Self {
        self.score = Some(score);
        self
    }
}

/// A parsed interaction table. An empty table is a valid, successful result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InteractionTable {
    records: Vec<InteractionRecord>,
}

impl InteractionTable {
    pub fn new(records: Vec<InteractionRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[InteractionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &InteractionRecord> {
        self.records.iter()
    }

    /// Distinct partner names in first-seen order.
    pub fn partner_names(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .flat_map(|r| [r.partner_a.as_str(), r.partner_b.as_str()])
            .filter(|name| seen.insert(*name))
            .collect()
    }
}

impl From<Vec<InteractionRecord>> for InteractionTable {
    fn from(records: Vec<InteractionRecord>) -> Self {
        Self::new(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partner_names_are_distinct_and_in_first_seen_order() {
        let table = InteractionTable::new(vec![
            InteractionRecord::new("TP53", "MDM2"),
            InteractionRecord::new("TP53", "EP300"),
            InteractionRecord::new("MDM2", "EP300"),
        ]);
        assert_eq!(table.partner_names(), vec!["TP53", "MDM2", "EP300"]);
    }

    #[test]
    fn empty_table_reports_empty() {
        let table = InteractionTable::default();
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
        assert!(table.partner_names().is_empty());
    }

    #[test]
    fn with_score_sets_combined_score_only() {
        let record = InteractionRecord::new("A", "B").with_score(0.9);
        assert_eq!(record.score, Some(0.9));
        assert_eq!(record.escore, None);
    }
}
