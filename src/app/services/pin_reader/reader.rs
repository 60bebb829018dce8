//! PIN file access and record iteration
//!
//! Handles gzip-aware file opening, header resolution and per-line record
//! parsing. The grouping field may itself contain tab characters; any unkeyed
//! trailing fields are reattached to it so the multi-valued protein string
//! survives the round trip.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::StringRecord;
use flate2::read::GzDecoder;
use tracing::debug;

use super::schema::ColumnRoles;
use crate::app::models::Record;
use crate::constants::GZIP_EXTENSION;
use crate::{Error, Result};

/// Reader for one PIN file
///
/// Cheap to construct; every traversal re-opens the file so the output pass
/// can make its own independent pass over the original bytes.
#[derive(Debug, Clone)]
pub struct PinReader {
    path: PathBuf,
}

impl PinReader {
    /// Create a reader for the given PIN file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the underlying file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Resolve the header's column roles without reading any data rows
    pub fn read_roles(&self) -> Result<ColumnRoles> {
        let mut csv_reader = self.open_csv()?;
        self.resolve_roles(&mut csv_reader)
    }

    /// Start a streaming pass over the file's records
    pub fn records(&self) -> Result<RecordIter> {
        let mut csv_reader = self.open_csv()?;
        let roles = self.resolve_roles(&mut csv_reader)?;
        Ok(RecordIter {
            csv_reader,
            roles,
            file: self.path.display().to_string(),
            line: 0,
        })
    }

    /// Read the whole file: resolved roles plus all records in file order
    pub fn read_all(&self) -> Result<(ColumnRoles, Vec<Record>)> {
        let mut iter = self.records()?;
        let roles = iter.roles.clone();
        let mut records = Vec::new();
        for record in &mut iter {
            records.push(record?);
        }
        debug!(
            "Read {} records ({} feature columns) from {}",
            records.len(),
            roles.feature_count(),
            self.path.display()
        );
        Ok((roles, records))
    }

    /// Open the file, decoding through gzip when the extension says so
    fn open_csv(&self) -> Result<csv::Reader<Box<dyn Read>>> {
        let file = File::open(&self.path)
            .map_err(|e| Error::io(format!("Failed to open {}", self.path.display()), e))?;

        let input: Box<dyn Read> = if self
            .path
            .extension()
            .map(|ext| ext == GZIP_EXTENSION)
            .unwrap_or(false)
        {
            Box::new(GzDecoder::new(file))
        } else {
            Box::new(file)
        };

        Ok(csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(input))
    }

    fn resolve_roles(&self, csv_reader: &mut csv::Reader<Box<dyn Read>>) -> Result<ColumnRoles> {
        let file = self.path.display().to_string();
        let headers = csv_reader
            .headers()
            .map_err(|e| Error::csv_parsing(&file, "failed to read header row", Some(e)))?;
        let header: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
        ColumnRoles::resolve(&header, &file)
    }
}

/// Streaming iterator over parsed PIN records
pub struct RecordIter {
    csv_reader: csv::Reader<Box<dyn Read>>,
    roles: ColumnRoles,
    file: String,
    line: usize,
}

impl RecordIter {
    /// Column roles resolved from the header
    pub fn roles(&self) -> &ColumnRoles {
        &self.roles
    }
}

impl Iterator for RecordIter {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut raw = StringRecord::new();
        match self.csv_reader.read_record(&mut raw) {
            Ok(false) => None,
            Ok(true) => {
                self.line += 1;
                Some(parse_record(&raw, &self.roles, self.line, &self.file))
            }
            Err(e) => {
                self.line += 1;
                Some(Err(Error::csv_parsing(
                    &self.file,
                    format!("failed to read record on line {}", self.line),
                    Some(e),
                )))
            }
        }
    }
}

/// Parse one delimited row into a [`Record`]
///
/// `line` is the 1-based data line number (header excluded) used in error
/// messages. Fields beyond the header width are unkeyed spillover from a
/// grouping string that contained tabs; they are joined back onto it.
fn parse_record(
    raw: &StringRecord,
    roles: &ColumnRoles,
    line: usize,
    file: &str,
) -> Result<Record> {
    let width = roles.header.len();
    if raw.len() < width {
        return Err(Error::csv_parsing(
            file,
            format!(
                "line {}: expected at least {} fields, found {}",
                line,
                width,
                raw.len()
            ),
            None,
        ));
    }

    let field = |index: usize| raw.get(index).unwrap_or("").to_string();

    let psm_id = field(roles.id_index);
    let label_raw = field(roles.label_index);
    let label: i32 = label_raw
        .parse()
        .map_err(|_| Error::invalid_label(line, &label_raw))?;
    if label != 1 && label != -1 {
        return Err(Error::invalid_label(line, &label_raw));
    }

    let mut proteins = field(roles.grouping_index);
    for extra in raw.iter().skip(width) {
        proteins.push('\t');
        proteins.push_str(extra);
    }

    let features: Vec<String> = roles
        .feature_indices
        .iter()
        .map(|&index| field(index))
        .collect();
    let scan = roles
        .scan_feature_index
        .map(|position| features[position].clone());

    Ok(Record {
        line,
        psm_id,
        label,
        label_raw,
        scan,
        features,
        sequence: field(roles.sequence_index),
        proteins,
    })
}
