/*
    Build a supermatrix from a set of per-locus alignments
        check_locus: read a locus alignment in fasta format
            parse accession and OTU from every record description
            check that every record has the aligned width of the first record
        Supermatrix: discover OTUs, concatenate loci, fill gaps, write fasta
        MatrixStatistics: gap content of the written supermatrix
*/


use std::path::Path;
use log::{debug, error, info, trace};
pub mod lib_utils;
use lib_utils::description::parse_description;
use lib_utils::struct_helper::FileBufferHelper;

pub use lib_utils::error::SupermatrixError;
pub use lib_utils::otu::{ungapped_length, Otu, GAP, MISSING_ACCESSION};
pub use lib_utils::statistics::{MatrixStatistics, OtuGapContent};
pub use lib_utils::supermatrix::{LocusSummary, Supermatrix, DEFAULT_LINE_WIDTH, DEFAULT_OUTPUT};

// a record of a locus alignment with its parsed description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocusRecord {
    pub accession: String,
    pub otu: String,
    pub sequence: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocusAlignment {
    pub records: Vec<LocusRecord>,
    // aligned width shared by all records, 0 for a locus without records
    pub width: usize,
}

pub fn check_locus(infile: &Path) -> Result<LocusAlignment, SupermatrixError> {
    let mut alignment_file = FileBufferHelper::new(infile)?;
    info!("File opened successfully - {:?}", infile);
    let mut records = Vec::new();
    let mut width: Option<usize> = None;

    while let Some(record) = alignment_file.next_record()? {
        let label = match parse_description(&record.description) {
            Some(label) => label,
            None => {
                error!("Unable to extract OTU from '{}'", record.description);
                return Err(SupermatrixError::MalformedDescription {
                    path: infile.to_path_buf(),
                    description: record.description,
                });
            }
        };
        let length = record.sequence.chars().count();
        match width {
            None => {
                info!("Alignment length set as {}", length);
                width = Some(length);
            }
            Some(expected) if expected == length => {
                trace!("{} matches alignment length of {}", record.description, expected);
            }
            Some(expected) => {
                error!("{} does not match alignment length.", record.description);
                return Err(SupermatrixError::LocusWidthMismatch {
                    path: infile.to_path_buf(),
                    description: record.description,
                    expected,
                    found: length,
                });
            }
        }
        records.push(LocusRecord {
            accession: label.accession,
            otu: label.otu,
            sequence: record.sequence,
        });
    }

    debug!("{:?}: {} records", infile, records.len());
    Ok(LocusAlignment {
        records,
        width: width.unwrap_or(0),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn locus_records_and_width() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("locus.fasta");
        fs::write(&path, ">accA Homo sapiens\nAC\nGT\n>accA2 Mus musculus x\nAC-A\n").unwrap();

        let locus = check_locus(&path).unwrap();
        assert_eq!(locus.width, 4);
        assert_eq!(
            locus.records,
            vec![
                LocusRecord {
                    accession: "accA".to_string(),
                    otu: "Homo sapiens".to_string(),
                    sequence: "ACGT".to_string(),
                },
                LocusRecord {
                    accession: "accA2".to_string(),
                    otu: "Mus musculus".to_string(),
                    sequence: "AC-A".to_string(),
                },
            ]
        );
    }

    #[test]
    fn empty_locus_has_zero_width() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.fasta");
        fs::write(&path, "\n").unwrap();

        let locus = check_locus(&path).unwrap();
        assert!(locus.records.is_empty());
        assert_eq!(locus.width, 0);
    }

    #[test]
    fn width_mismatch_is_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("locus.fasta");
        fs::write(&path, ">a Homo sapiens\nACGT\n>b Mus musculus\nACG\n").unwrap();

        match check_locus(&path) {
            Err(SupermatrixError::LocusWidthMismatch {
                description,
                expected,
                found,
                ..
            }) => {
                assert_eq!(description, "b Mus musculus");
                assert_eq!(expected, 4);
                assert_eq!(found, 3);
            }
            other => panic!("expected width mismatch, got {other:?}"),
        }
    }

    #[test]
    fn malformed_description_is_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("locus.fasta");
        fs::write(&path, ">a Homo sapiens\nACGT\n>b Mus\nACGA\n").unwrap();

        match check_locus(&path) {
            Err(SupermatrixError::MalformedDescription { description, .. }) => {
                assert_eq!(description, "b Mus");
            }
            other => panic!("expected malformed description, got {other:?}"),
        }
    }

    #[test]
    fn width_counts_characters() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("locus.fasta");
        fs::write(&path, ">a Homo sapiens\nACÑT\n>b Mus musculus\nACGT\n").unwrap();

        assert_eq!(check_locus(&path).unwrap().width, 4);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.fasta");
        assert!(matches!(check_locus(&path), Err(SupermatrixError::Io { .. })));
    }
}
