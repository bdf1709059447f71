/*
Build a supermatrix from per-locus sequence alignments
    + collect every OTU (genus and species from the record description) across all loci
    + concatenate one sequence per OTU and locus, the first record of an OTU wins
        + OTUs without a sequence at a locus are filled with gaps
    + write the concatenated alignment in fasta format
    + report loci, OTU provenance and gap content

Arguments
    paths to the locus alignments, in matrix order
    output path, line width
    optional provenance table
*/

mod bin_utils;
use std::io;
use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use env_logger;
use bin_utils::get_args::Cli;
use bin_utils::report::{report_loci, report_otus, report_statistics};
use supermatrix::Supermatrix;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    debug!("Parsing commandline arguments");
    for file in &cli.input_alignment {
        debug!("Locus alignment: {:?}", file);
    }

    let mut supermatrix = Supermatrix::new(&cli.output).with_line_width(cli.line_width);
    supermatrix
        .concatenate(&cli.input_alignment)
        .context("Unable to concatenate alignments")?;
    supermatrix
        .write()
        .with_context(|| format!("Unable to write supermatrix to {:?}", cli.output))?;
    info!("Final alignment: {:?}", supermatrix.output());

    let mut stdout = io::stdout().lock();
    report_loci(&supermatrix, &mut stdout)?;
    if cli.otu_details {
        report_otus(&supermatrix, &mut stdout)?;
    }
    if let Some(provenance) = &cli.provenance {
        supermatrix
            .write_provenance(provenance)
            .with_context(|| format!("Unable to write provenance table to {:?}", provenance))?;
    }
    let statistics = supermatrix.statistics().context("Unable to read back supermatrix")?;
    report_statistics(&statistics, &mut stdout)?;
    Ok(())
}
