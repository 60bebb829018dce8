//! Test fixtures for the output pass
//!
//! The writer tests run the full detect/build/impute pipeline against small
//! fixture files so substitution, formatting and compression are exercised
//! exactly as a real run would.

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;
use tempfile::TempDir;

use super::ResultWriter;
use super::diagnostics::ImputationDiagnostics;
use crate::app::services::feature_matrix::FeatureMatrixBuilder;
use crate::app::services::imputation::ImputationEngine;
use crate::app::services::missing_values::MissingValueTracker;
use crate::app::services::pin_reader::PinReader;
use crate::config::{DiagnosticsConfig, RegressorKind, RegressorParams};


/// Six-record fixture where featB is an exact linear function of featA
/// (featB = 2 * featA + 0.5) and the fourth row has featB missing, so OLS
/// recovers the expected value 6.5 exactly.
pub const LINEAR_PIN: &str = "\
SpecId\tLabel\tScanNr\tfeatA\tfeatB\tfeatC\tPeptide\tProteins
psm_1\t1\t101\t1\t2.5\t0.2\tK.AAA.R\tprot_1
psm_2\t-1\t102\t2\t4.5\t-0.4\tR.CCC.K\tprot_2
psm_3\t1\t103\t1.5\t3.5\t0.6\tK.DDD.R\tprot_3
psm_4\t1\t104\t3\tNA\t0.1\tK.EEE.R\tprot_4
psm_5\t-1\t105\t2.5\t5.5\t-0.2\tR.FFF.K\tprot_5
psm_6\t1\t106\t0.5\t1.5\t0.3\tK.GGG.R\tprot_6
";

pub fn write_fixture(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    path
}

/// Run the full pipeline against `input` and write through `writer`
///
/// Returns the rows written and the diagnostics, when collected.
pub fn run_pipeline(
    input: &Path,
    writer: &ResultWriter,
) -> (usize, Option<ImputationDiagnostics>) {
    let reader = PinReader::new(input);
    let (roles, records) = reader.read_all().unwrap();
    let tracker = MissingValueTracker::new().detect(&records, &roles).unwrap();
    let matrix = FeatureMatrixBuilder::new()
        .build(&records, &tracker, &roles)
        .unwrap();

    let engine = ImputationEngine::new(
        RegressorKind::OrdinaryLeastSquares,
        RegressorParams::default(),
    );
    let imputed = engine
        .impute(
            &matrix.values,
            &tracker.missing_rows(),
            &tracker.missing_columns(),
        )
        .unwrap();

    writer.write(&reader, &tracker, &imputed).unwrap()
}

/// Read an output file back as text, decoding gzip by extension
pub fn read_output(path: &Path) -> String {
    if path.extension().map(|ext| ext == "gz").unwrap_or(false) {
        let mut content = String::new();
        GzDecoder::new(File::open(path).unwrap())
            .read_to_string(&mut content)
            .unwrap();
        content
    } else {
        fs::read_to_string(path).unwrap()
    }
}
