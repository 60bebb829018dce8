//! Test fixtures for the PIN reader
//!
//! Fixture files are written to a [`tempfile::TempDir`] so the gzip and
//! plain-text paths exercise the real open logic.

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use flate2::Compression;
use flate2::write::GzEncoder;
use tempfile::TempDir;

// Test modules
mod reader_tests;

/// A small well-formed PIN file: four feature columns, one value per field
pub const BASIC_PIN: &str = "\
SpecId\tLabel\tScanNr\tfeatA\tfeatB\tfeatC\tPeptide\tProteins
psm_1\t1\t101\t0.5\t1.5\t2.5\tK.AAAK.R\tprot_1
psm_2\t-1\t102\t0.6\tNA\t2.6\tR.CCCR.K\tprot_2
psm_3\t1\t103\t0.7\t1.7\t2.7\tK.DDDK.R\tprot_3
";

/// Same records, but the last row's protein string contains embedded tabs
pub const TABBED_PROTEINS_PIN: &str = "\
SpecId\tLabel\tScanNr\tfeatA\tPeptide\tProteins
psm_1\t1\t101\t0.5\tK.AAAK.R\tprot_1
psm_2\t-1\t102\t0.6\tR.CCCR.K\tprot_2\tprot_3\tprot_4
";

/// Write `content` to `name` inside `dir` and return the full path
pub fn write_fixture(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    path
}

/// Write `content` gzip-compressed to `name` inside `dir`
pub fn write_gzipped_fixture(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    let file = File::create(&path).unwrap();
    let mut encoder = GzEncoder::new(file, Compression::default());
    encoder.write_all(content.as_bytes()).unwrap();
    encoder.finish().unwrap();
    path
}
