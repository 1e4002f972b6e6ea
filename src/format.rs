//! Formatting utilities for the pivnet CLI.
//!
//! Every value printed by the CLI goes through [`Formattable`]. JSON and YAML
//! are produced from the same serde shapes that travel on the wire, while the
//! text and CSV renderings are built from the rows a [`RecordProducer`] yields.

use csv::Writer;
use serde::Serialize;
use std::str::FromStr;
use strum::{EnumIter, IntoEnumIterator};

pub const TEXT: &str = "text";
pub const JSON: &str = "json";
pub const YAML: &str = "yaml";
pub const CSV: &str = "csv";

/// Error types that can occur during formatting operations
#[derive(Debug, thiserror::Error)]
pub enum FormattingError {
    /// Error when an unsupported output format is requested
    #[error("invalid output format {0}")]
    UnsupportedOutputFormat(String),
    /// Error specific to CSV operations
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    /// Error when converting bytes to UTF-8 string
    #[error("UTF-8 conversion error: {0}")]
    Utf8Error(#[from] std::string::FromUtf8Error),

    #[error("CSV writer into inner error: {0}")]
    CsvIntoInnerError(#[from] csv::IntoInnerError<csv::Writer<Vec<u8>>>),

    #[error("JSON serialization error: {0}")]
    JsonSerializationError(#[from] serde_json::Error),

    #[error("YAML serialization error: {0}")]
    YamlSerializationError(#[from] serde_yaml::Error),
}

/// Enum representing the supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter)]
pub enum OutputFormat {
    /// Column-aligned table for humans
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
    /// YAML document
    Yaml,
    /// CSV with a header row
    Csv,
}

impl OutputFormat {
    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Text => TEXT,
            OutputFormat::Json => JSON,
            OutputFormat::Yaml => YAML,
            OutputFormat::Csv => CSV,
        }
    }

    /// Returns a vector of all supported format names as strings
    pub fn names() -> Vec<&'static str> {
        OutputFormat::iter().map(|format| format.name()).collect()
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for OutputFormat {
    type Err = FormattingError;

    fn from_str(format_str: &str) -> Result<OutputFormat, FormattingError> {
        let normalized_format = format_str.to_lowercase();
        OutputFormat::iter()
            .find(|format| format.name() == normalized_format)
            .ok_or(FormattingError::UnsupportedOutputFormat(normalized_format))
    }
}

/// Trait for producing tabular rows from data
///
/// The same header and rows feed both the text table and the CSV output.
pub trait RecordProducer {
    /// Returns the header row
    fn header() -> Vec<String>;

    /// Converts the data into rows, one per entity
    fn records(&self) -> Vec<Vec<String>>;

    /// Produces CSV output with a header row
    fn to_csv(&self) -> Result<String, FormattingError> {
        let mut wtr = Writer::from_writer(vec![]);
        wtr.write_record(Self::header())?;
        for record in self.records() {
            wtr.write_record(&record)?;
        }
        let data = wtr.into_inner()?;
        Ok(String::from_utf8(data)?)
    }

    /// Produces a column-aligned table with a header row
    fn to_table(&self) -> String {
        render_table(&Self::header(), &self.records())
    }
}

impl<T: RecordProducer> RecordProducer for Vec<T> {
    fn header() -> Vec<String> {
        T::header()
    }

    fn records(&self) -> Vec<Vec<String>> {
        self.iter().flat_map(|item| item.records()).collect()
    }
}

/// Release types are bare strings on the wire.
impl RecordProducer for String {
    fn header() -> Vec<String> {
        vec!["RELEASE TYPE".to_string()]
    }

    fn records(&self) -> Vec<Vec<String>> {
        vec![vec![self.clone()]]
    }
}

/// Anything that can be printed by the CLI in any [`OutputFormat`]
pub trait Formattable {
    fn format(&self, format: &OutputFormat) -> Result<String, FormattingError>;
}

impl<T: Serialize + RecordProducer> Formattable for T {
    fn format(&self, format: &OutputFormat) -> Result<String, FormattingError> {
        match format {
            OutputFormat::Text => Ok(self.to_table()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(self)?),
            OutputFormat::Csv => self.to_csv(),
        }
    }
}

/// Pads every column but the last to its widest cell.
fn render_table(header: &[String], records: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = header.iter().map(|cell| cell.chars().count()).collect();
    for record in records {
        for (index, cell) in record.iter().enumerate() {
            if let Some(width) = widths.get_mut(index) {
                *width = (*width).max(cell.chars().count());
            }
        }
    }

    let render_row = |row: &[String]| -> String {
        let last = row.len().saturating_sub(1);
        let mut line = String::new();
        for (index, cell) in row.iter().enumerate() {
            if index == last {
                line.push_str(cell);
            } else {
                let width = widths.get(index).copied().unwrap_or(0);
                line.push_str(&format!("{:<width$}  ", cell, width = width));
            }
        }
        line.trim_end().to_string()
    };

    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(render_row(header));
    for record in records {
        lines.push(render_row(record));
    }
    lines.join("\n")
}
