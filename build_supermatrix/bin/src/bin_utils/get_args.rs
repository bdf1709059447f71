use clap::Parser;
use std::path::PathBuf;
use supermatrix::{DEFAULT_LINE_WIDTH, DEFAULT_OUTPUT};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a locus alignment stored in fasta format. Repeat for every locus, in matrix order
    #[arg(short='i', long="infile", required = true, action=clap::ArgAction::Append)]
    pub input_alignment: Vec<PathBuf>,
    /// Path of the concatenated alignment. Default: "alignments/combined.fasta"
    #[arg(short='o', long="output", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,
    /// Number of sequence characters per line in the output. Default: 80
    #[arg(short='w', long="line-width", value_parser=validate_line_width, default_value_t=DEFAULT_LINE_WIDTH)]
    pub line_width: usize,
    /// Store the accession and ungapped length used per OTU and locus as a tab separated table
    #[arg(short='p', long="provenance")]
    pub provenance: Option<PathBuf>,
    /// Print name, sequence, accessions and sequence lengths of every OTU
    #[arg(long="otu-details", default_value_t=false)]
    pub otu_details: bool,
}

fn validate_line_width(input_str: &str) -> Result<usize, String> {
    match input_str.parse::<usize>() {
        Ok(width) if width > 0 => Ok(width),
        _ => Err(format!("Line width must be a positive integer, found '{}'", input_str)),
    }
}
