/*
    Data of a single OTU in the supermatrix
        name: taxon label, "Genus species"
        sequence: concatenated aligned sequence of every locus processed so far
        accessions: accession used per locus, "-" if the locus was gap filled
        sequence_lengths: ungapped length contributed per locus
*/

use std::fmt;

pub const GAP: char = '-';
pub const MISSING_ACCESSION: &str = "-";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Otu {
    name: String,
    sequence: String,
    accessions: Vec<String>,
    sequence_lengths: Vec<usize>,
}

impl Otu {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sequence: String::new(),
            accessions: Vec::new(),
            sequence_lengths: Vec::new(),
        }
    }

    /// Append the aligned sequence of one locus along with its accession and ungapped length.
    pub fn update(&mut self, sequence: &str, accession: &str, sequence_length: usize) {
        self.sequence.push_str(sequence);
        self.accessions.push(accession.to_string());
        self.sequence_lengths.push(sequence_length);
    }

    /// Append a locus this OTU has no sequence for.
    pub fn update_gaps(&mut self, locus_width: usize) {
        self.sequence.extend(std::iter::repeat(GAP).take(locus_width));
        self.accessions.push(MISSING_ACCESSION.to_string());
        self.sequence_lengths.push(0);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sequence(&self) -> &str {
        &self.sequence
    }

    pub fn accessions(&self) -> &[String] {
        &self.accessions
    }

    pub fn sequence_lengths(&self) -> &[usize] {
        &self.sequence_lengths
    }

    pub fn loci_count(&self) -> usize {
        self.accessions.len()
    }
}

impl fmt::Display for Otu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name = {}", self.name)?;
        writeln!(f, "Sequence = {}", self.sequence)?;
        writeln!(f, "Accessions = {:?}", self.accessions)?;
        write!(f, "Sequence_lengths = {:?}", self.sequence_lengths)
    }
}

// length of the sequence minus any gaps
pub fn ungapped_length(sequence: &str) -> usize {
    sequence.chars().filter(|&c| c != GAP).count()
}
