use crate::core::io::traits::TabularFile;
use crate::core::models::interaction::{InteractionRecord, InteractionTable};
use std::io::{self, BufRead, Write};
use thiserror::Error;
use tracing::trace;

pub const PARTNER_A_COLUMN: &str = "preferredName_A";
pub const PARTNER_B_COLUMN: &str = "preferredName_B";

const HEADER: [&str; 13] = [
    "stringId_A",
    "stringId_B",
    PARTNER_A_COLUMN,
    PARTNER_B_COLUMN,
    "ncbiTaxonId",
    "score",
    "nscore",
    "fscore",
    "pscore",
    "ascore",
    "escore",
    "dscore",
    "tscore",
];

#[derive(Debug, Error)]
pub enum TableError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Malformed table: {0}")]
    Csv(#[from] csv::Error),
    #[error("Required column '{0}' is missing from the header")]
    MissingColumn(&'static str),
    #[error("Row {row} has an empty partner name")]
    EmptyPartner { row: usize },
}

/// Tab-separated STRING network tables.
pub struct InteractionTsv;

impl InteractionTsv {
    fn reader_builder() -> csv::ReaderBuilder {
        let mut builder = csv::ReaderBuilder::new();
        builder
            .delimiter(b'\t')
            .quoting(false)
            .trim(csv::Trim::All);
        builder
    }
}

impl TabularFile for InteractionTsv {
    type Table = InteractionTable;
    type Error = TableError;

    fn read_from(reader: &mut impl BufRead) -> Result<Self::Table, Self::Error> {
        let mut csv_reader = Self::reader_builder().from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        if headers.is_empty() {
            return Ok(InteractionTable::default());
        }
        for column in [PARTNER_A_COLUMN, PARTNER_B_COLUMN] {
            if !headers.iter().any(|h| h == column) {
                return Err(TableError::MissingColumn(column));
            }
        }

        let mut records = Vec::new();
        for (index, row) in csv_reader.deserialize::<InteractionRecord>().enumerate() {
            let record = row?;
            if record.partner_a.is_empty() || record.partner_b.is_empty() {
                return Err(TableError::EmptyPartner { row: index + 1 });
            }
            records.push(record);
        }
        trace!(rows = records.len(), "Parsed interaction table");
        Ok(InteractionTable::new(records))
    }

    fn write_to(table: &Self::Table, writer: &mut impl Write) -> Result<(), Self::Error> {
        let mut csv_writer = csv::WriterBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .from_writer(writer);
        csv_writer.write_record(HEADER)?;
        for record in table.iter() {
            csv_writer.serialize(record)?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STRING_SAMPLE: &str = "\
stringId_A\tstringId_B\tpreferredName_A\tpreferredName_B\tncbiTaxonId\tscore\tnscore\tfscore\tpscore\tascore\tescore\tdscore\ttscore
9606.ENSP00000269305\t9606.ENSP00000258149\tTP53\tMDM2\t9606\t0.999\t0\t0\t0\t0.292\t0.999\t0.9\t0.999
9606.ENSP00000269305\t9606.ENSP00000263253\tTP53\tEP300\t9606\t0.999\t0\t0\t0\t0.181\t0.998\t0.9\t0.997
9606.ENSP00000258149\t9606.ENSP00000263253\tMDM2\tEP300\t9606\t0.977\t0\t0\t0\t0.061\t0.703\t0.5\t0.818
";

    #[test]
    fn parses_string_network_rows() {
        let table = InteractionTsv::read_from_str(STRING_SAMPLE).unwrap();
        assert_eq!(table.len(), 3);
        let first = &table.records()[0];
        assert_eq!(first.partner_a, "TP53");
        assert_eq!(first.partner_b, "MDM2");
        assert_eq!(first.taxon_id, Some(9606));
        assert_eq!(first.score, Some(0.999));
        assert_eq!(first.ascore, Some(0.292));
        assert_eq!(table.partner_names(), vec!["TP53", "MDM2", "EP300"]);
    }

    #[test]
    fn empty_body_is_an_empty_table() {
        let table = InteractionTsv::read_from_str("").unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn header_only_is_an_empty_table() {
        let table = InteractionTsv::read_from_str(STRING_SAMPLE.lines().next().unwrap()).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn missing_partner_column_is_reported() {
        let err = InteractionTsv::read_from_str("preferredName_A\tscore\nTP53\t0.9\n").unwrap_err();
        assert!(matches!(err, TableError::MissingColumn(PARTNER_B_COLUMN)));
    }

    #[test]
    fn minimal_columns_and_unknown_columns_are_accepted() {
        let text = "preferredName_A\tpreferredName_B\textra\nA\tB\tx\nA\tC\ty\n";
        let table = InteractionTsv::read_from_str(text).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.records()[1].partner_b, "C");
        assert_eq!(table.records()[1].score, None);
    }

    #[test]
    fn short_row_is_a_csv_error() {
        let text = "preferredName_A\tpreferredName_B\nA\n";
        assert!(matches!(
            InteractionTsv::read_from_str(text),
            Err(TableError::Csv(_))
        ));
    }

    #[test]
    fn blank_partner_is_rejected() {
        let text = "preferredName_A\tpreferredName_B\nA\tB\n \tC\n";
        assert!(matches!(
            InteractionTsv::read_from_str(text),
            Err(TableError::EmptyPartner { row: 2 })
        ));
    }

    #[test]
    fn written_table_reads_back_identically() {
        let table = InteractionTsv::read_from_str(STRING_SAMPLE).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("network.tsv");

        InteractionTsv::write_to_path(&table, &path).unwrap();
        let reread = InteractionTsv::read_from_path(&path).unwrap();
        assert_eq!(reread, table);
    }

    #[test]
    fn empty_table_still_writes_a_header() {
        let mut buffer = Vec::new();
        InteractionTsv::write_to(&InteractionTable::default(), &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.starts_with("stringId_A\tstringId_B\tpreferredName_A"));
        assert!(InteractionTsv::read_from_str(&text).unwrap().is_empty());
    }
}
