//! Data models for PIN records.
//!
//! A PIN file carries one row per peptide-spectrum match (PSM): an identifier,
//! a binary target/decoy label, numeric feature columns, and trailing
//! descriptive fields (peptide sequence and protein grouping) that must be
//! preserved verbatim on output.

/// One parsed PIN row.
///
/// All emitted fields are kept as raw strings so the output pass can
/// round-trip them byte-for-byte; the label is additionally parsed because it
/// is validated up front and drives the target/decoy split in diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// 1-based data line number (header excluded), used in error reporting
    pub line: usize,

    /// PSM identifier (from the resolved SpecId/PSMId column)
    pub psm_id: String,

    /// Validated label: +1 (target) or -1 (decoy)
    pub label: i32,

    /// Original label field text, preserved for output
    pub label_raw: String,

    /// Scan/run number field, when the header carries one
    pub scan: Option<String>,

    /// Raw feature values, aligned with the resolved feature-column order
    pub features: Vec<String>,

    /// Original sequence field text (may include flanking residues)
    pub sequence: String,

    /// Protein grouping string, tab-joined when the field spanned columns
    pub proteins: String,
}

impl Record {
    /// Derive the descriptive metadata carried alongside the feature matrix
    pub fn meta(&self) -> RecordMeta {
        let (left_flank, peptide, right_flank) = split_flanks(&self.sequence);
        RecordMeta {
            psm_id: self.psm_id.clone(),
            peptide,
            left_flank,
            right_flank,
            proteins: self.proteins.clone(),
        }
    }
}

/// Identifying metadata for one matrix row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordMeta {
    pub psm_id: String,

    /// Canonical (core) peptide sequence with flanks stripped
    pub peptide: String,

    /// Left flanking residue(s), when the sequence was dot-delimited
    pub left_flank: Option<String>,

    /// Right flanking residue(s), when the sequence was dot-delimited
    pub right_flank: Option<String>,

    /// Protein grouping string preserved verbatim
    pub proteins: String,
}

/// Split a `<left>.<core>.<right>` sequence into flanks and core.
///
/// Sequences without dots are returned unchanged with no flanks. When dots
/// are present the first part is the left flank, the second the core, and the
/// last the right flank.
fn split_flanks(sequence: &str) -> (Option<String>, String, Option<String>) {
    let parts: Vec<&str> = sequence.split('.').collect();
    if parts.len() > 1 {
        (
            Some(parts[0].to_string()),
            parts[1].to_string(),
            Some(parts[parts.len() - 1].to_string()),
        )
    } else {
        (None, sequence.to_string(), None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with_sequence(sequence: &str) -> Record {
        Record {
            line: 1,
            psm_id: "psm_1".to_string(),
            label: 1,
            label_raw: "1".to_string(),
            scan: Some("17".to_string()),
            features: vec!["1.5".to_string(), "-0.2".to_string()],
            sequence: sequence.to_string(),
            proteins: "sp|P01234".to_string(),
        }
    }

    #[test]
    fn test_flanked_sequence_is_split() {
        let meta = record_with_sequence("K.ELVISLIVESK.R").meta();
        assert_eq!(meta.peptide, "ELVISLIVESK");
        assert_eq!(meta.left_flank.as_deref(), Some("K"));
        assert_eq!(meta.right_flank.as_deref(), Some("R"));
    }

    #[test]
    fn test_bare_sequence_has_no_flanks() {
        let meta = record_with_sequence("ELVISLIVESK").meta();
        assert_eq!(meta.peptide, "ELVISLIVESK");
        assert!(meta.left_flank.is_none());
        assert!(meta.right_flank.is_none());
    }

    #[test]
    fn test_terminal_flanks_may_be_empty() {
        // N-terminal peptides are written "-.PEPTIDE.K" or ".PEPTIDE.K"
        let meta = record_with_sequence("-.PEPTIDE.K").meta();
        assert_eq!(meta.peptide, "PEPTIDE");
        assert_eq!(meta.left_flank.as_deref(), Some("-"));
        assert_eq!(meta.right_flank.as_deref(), Some("K"));
    }
}
