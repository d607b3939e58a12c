use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Defines the interface for reading and writing delimited table formats.
///
/// Implementors handle format-specific parsing and serialization of a whole
/// table; the provided methods add string and file-path conveniences.
pub trait TabularFile {
    /// The in-memory table type.
    type Table;

    /// The error type for I/O operations.
    type Error: Error + From<io::Error>;

    /// Reads a table from a buffered reader.
    ///
    /// # Arguments
    ///
    /// * `reader` - The buffered reader to read from.
    ///
    /// # Return
    ///
    /// Returns the parsed table. Input without any header line yields an
    /// empty table.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails or I/O operations encounter issues.
    fn read_from(reader: &mut impl BufRead) -> Result<Self::Table, Self::Error>;

    /// Writes a table, header line included, to a writer.
    ///
    /// # Arguments
    ///
    /// * `table` - The table to write.
    /// * `writer` - The writer to output to.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    fn write_to(table: &Self::Table, writer: &mut impl Write) -> Result<(), Self::Error>;

    /// Parses a table held entirely in memory, such as an HTTP response body.
    fn read_from_str(text: &str) -> Result<Self::Table, Self::Error> {
        let mut reader = text.as_bytes();
        Self::read_from(&mut reader)
    }

    /// Reads a table from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Self::Table, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }

    /// Writes a table to a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or writing fails.
    fn write_to_path<P: AsRef<Path>>(table: &Self::Table, path: P) -> Result<(), Self::Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(table, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
