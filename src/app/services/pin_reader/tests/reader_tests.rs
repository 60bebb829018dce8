//! Tests for file access and record parsing

use tempfile::TempDir;

use super::{BASIC_PIN, TABBED_PROTEINS_PIN, write_fixture, write_gzipped_fixture};
use crate::Error;
use crate::app::services::pin_reader::PinReader;

#[test]
fn test_reads_all_records_in_file_order() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "basic.pin", BASIC_PIN);

    let (roles, records) = PinReader::new(&path).read_all().unwrap();

    assert_eq!(roles.feature_columns, vec!["ScanNr", "featA", "featB", "featC"]);
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].psm_id, "psm_1");
    assert_eq!(records[0].label, 1);
    assert_eq!(records[1].label, -1);
    assert_eq!(records[1].features, vec!["102", "0.6", "NA", "2.6"]);
    assert_eq!(records[2].sequence, "K.DDDK.R");
    assert_eq!(records[2].proteins, "prot_3");
}

#[test]
fn test_scan_field_mirrors_scan_feature() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "basic.pin", BASIC_PIN);

    let (_, records) = PinReader::new(&path).read_all().unwrap();
    assert_eq!(records[0].scan.as_deref(), Some("101"));
    assert_eq!(records[2].scan.as_deref(), Some("103"));
}

#[test]
fn test_gzip_input_is_transparent() {
    let dir = TempDir::new().unwrap();
    let plain = write_fixture(&dir, "basic.pin", BASIC_PIN);
    let gzipped = write_gzipped_fixture(&dir, "basic.pin.gz", BASIC_PIN);

    let (_, from_plain) = PinReader::new(&plain).read_all().unwrap();
    let (_, from_gzip) = PinReader::new(&gzipped).read_all().unwrap();

    assert_eq!(from_plain, from_gzip);
}

#[test]
fn test_tabbed_protein_strings_are_reattached() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "tabbed.pin", TABBED_PROTEINS_PIN);

    let (_, records) = PinReader::new(&path).read_all().unwrap();

    assert_eq!(records[0].proteins, "prot_1");
    assert_eq!(records[1].proteins, "prot_2\tprot_3\tprot_4");
    // the spillover never contaminates the feature fields
    assert_eq!(records[1].features, vec!["102", "0.6"]);
}

#[test]
fn test_invalid_label_value_is_rejected() {
    let dir = TempDir::new().unwrap();
    let content = "\
SpecId\tLabel\tfeatA\tPeptide\tProteins
psm_1\t1\t0.5\tK.AAAK.R\tprot_1
psm_2\t0\t0.6\tR.CCCR.K\tprot_2
";
    let path = write_fixture(&dir, "bad_label.pin", content);

    let err = PinReader::new(&path).read_all().unwrap_err();
    assert!(matches!(err, Error::InvalidLabel { line: 2, .. }));
    assert_eq!(err.exit_code(), 3);
}

#[test]
fn test_unparsable_label_is_rejected() {
    let dir = TempDir::new().unwrap();
    let content = "\
SpecId\tLabel\tfeatA\tPeptide\tProteins
psm_1\ttrue\t0.5\tK.AAAK.R\tprot_1
";
    let path = write_fixture(&dir, "bad_label.pin", content);

    let err = PinReader::new(&path).read_all().unwrap_err();
    assert!(matches!(err, Error::InvalidLabel { line: 1, .. }));
}

#[test]
fn test_short_row_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let content = "\
SpecId\tLabel\tfeatA\tPeptide\tProteins
psm_1\t1\t0.5\tK.AAAK.R
";
    let path = write_fixture(&dir, "short.pin", content);

    let err = PinReader::new(&path).read_all().unwrap_err();
    assert!(matches!(err, Error::CsvParsing { .. }));
}

#[test]
fn test_schema_error_reported_before_rows() {
    let dir = TempDir::new().unwrap();
    let content = "\
SpecId\tfeatA\tPeptide\tProteins
psm_1\t0.5\tK.AAAK.R\tprot_1
";
    let path = write_fixture(&dir, "no_label.pin", content);

    let err = PinReader::new(&path).read_roles().unwrap_err();
    assert!(matches!(err, Error::Schema { .. }));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = PinReader::new("/nonexistent/path.pin").read_all().unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
    assert_eq!(err.exit_code(), 1);
}
