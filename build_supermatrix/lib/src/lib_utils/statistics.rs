/*
    Gap content of a written supermatrix
        per OTU: fraction of '-' in the row
        total: number of OTUs, matrix length, fraction of '-' in the matrix
    The matrix length is taken from the last row, every row has the same length
*/

use std::fmt;
use std::path::Path;
use log::{debug, info};
use super::error::SupermatrixError;
use super::otu::GAP;
use super::struct_helper::FileBufferHelper;

#[derive(Debug, Clone, PartialEq)]
pub struct OtuGapContent {
    pub name: String,
    pub gaps: usize,
    pub length: usize,
    // rounded to 2 decimals
    pub gap_fraction: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatrixStatistics {
    pub otus: Vec<OtuGapContent>,
    pub otu_count: usize,
    pub matrix_length: usize,
    pub total_gaps: usize,
    // rounded to 2 decimals
    pub total_gap_fraction: f64,
}

impl MatrixStatistics {
    pub fn from_fasta(path: &Path) -> Result<Self, SupermatrixError> {
        info!("Collecting supermatrix attributes of {:?}", path);
        let mut otus = Vec::new();
        let mut total_gaps = 0usize;
        let mut matrix_length = 0usize;

        for record in FileBufferHelper::new(path)? {
            let record = record?;
            let gaps = record.sequence.chars().filter(|&c| c == GAP).count();
            let length = record.sequence.chars().count();
            debug!("{}: {} gaps in {}", record.description, gaps, length);
            total_gaps += gaps;
            matrix_length = length;
            otus.push(OtuGapContent {
                name: record.description,
                gaps,
                length,
                gap_fraction: round_fraction(gaps, length),
            });
        }

        let otu_count = otus.len();
        Ok(Self {
            otus,
            otu_count,
            matrix_length,
            total_gaps,
            total_gap_fraction: round_fraction(total_gaps, matrix_length * otu_count),
        })
    }
}

// an empty matrix has no gaps
fn round_fraction(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    let fraction = part as f64 / whole as f64;
    (fraction * 100.0).round() / 100.0
}

impl fmt::Display for MatrixStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Supermatrix attributes:")?;
        for otu in &self.otus {
            writeln!(f, "OTU: {} % gaps = {}", otu.name, otu.gap_fraction)?;
        }
        writeln!(f, "Total number of OTUs = {}", self.otu_count)?;
        writeln!(f, "Total length of matrix = {}", self.matrix_length)?;
        write!(f, "Total % gaps = {}", self.total_gap_fraction)
    }
}
