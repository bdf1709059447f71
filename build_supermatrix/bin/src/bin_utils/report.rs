/*
    Console output of a finished supermatrix
        loci: path, records, OTUs kept, duplicates skipped, aligned width
        OTU details: name, sequence, accessions, sequence lengths
        statistics: gap content of the written fasta
*/

use std::io::{self, Write};
use log::debug;
use supermatrix::{MatrixStatistics, Supermatrix};

pub fn report_loci(supermatrix: &Supermatrix, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Locus\tRecords\tOTUs\tDuplicates\tWidth")?;
    for locus in supermatrix.loci() {
        writeln!(out, "{}\t{}\t{}\t{}\t{}",
            locus.path.display(), locus.record_count, locus.otu_count, locus.duplicates, locus.width)?;
    }
    Ok(())
}

pub fn report_otus(supermatrix: &Supermatrix, out: &mut impl Write) -> io::Result<()> {
    for otu in supermatrix.otus() {
        debug!("Reporting {}", otu.name());
        writeln!(out, "{}", otu)?;
    }
    Ok(())
}

pub fn report_statistics(statistics: &MatrixStatistics, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", statistics)
}
