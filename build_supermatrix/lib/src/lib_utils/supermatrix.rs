/*
    Concatenate per-locus alignments into a supermatrix
        discover: collect every OTU across all loci, in order of first appearance
        merge_locus: add one sequence per OTU for a locus
            only the first record of an OTU is used
            OTUs without a record are filled with gaps of the locus width
        write: one fasta record per OTU, sequence wrapped at a fixed width
*/

use std::collections::{HashMap, HashSet};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use log::{debug, info, trace};
use crate::check_locus;
use super::error::SupermatrixError;
use super::otu::{ungapped_length, Otu};
use super::statistics::MatrixStatistics;

pub const DEFAULT_OUTPUT: &str = "alignments/combined.fasta";
pub const DEFAULT_LINE_WIDTH: usize = 80;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocusSummary {
    pub path: PathBuf,
    pub record_count: usize,
    pub otu_count: usize,
    pub duplicates: usize,
    pub width: usize,
}

#[derive(Debug)]
pub struct Supermatrix {
    output: PathBuf,
    line_width: usize,
    otus: HashMap<String, Otu>,
    // OTU names in order of discovery, also the output order
    order: Vec<String>,
    loci: Vec<LocusSummary>,
}

impl Supermatrix {
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
            line_width: DEFAULT_LINE_WIDTH,
            otus: HashMap::new(),
            order: Vec::new(),
            loci: Vec::new(),
        }
    }

    /// Width of the sequence lines in the output. A width of 0 is treated as 1.
    pub fn with_line_width(mut self, line_width: usize) -> Self {
        self.line_width = line_width.max(1);
        self
    }

    /// Builds the supermatrix of `alignments` and writes it to `output`.
    ///
    /// All alignments are read twice, once to discover the OTUs and once to concatenate them.
    /// Any invalid alignment is reported before the first locus is merged.
    pub fn build<P: AsRef<Path>>(
        alignments: &[P],
        output: impl Into<PathBuf>,
    ) -> Result<Self, SupermatrixError> {
        let mut supermatrix = Self::new(output);
        supermatrix.concatenate(alignments)?;
        supermatrix.write()?;
        Ok(supermatrix)
    }

    /// Discovers and merges all `alignments` without writing the output.
    pub fn concatenate<P: AsRef<Path>>(&mut self, alignments: &[P]) -> Result<(), SupermatrixError> {
        self.discover(alignments)?;
        for alignment in alignments {
            self.merge_locus(alignment.as_ref())?;
        }
        info!(
            "Concatenated {} loci for {} OTUs, matrix length {}",
            self.loci.len(),
            self.order.len(),
            self.width()
        );
        Ok(())
    }

    /// Registers every OTU found in `alignments`.
    pub fn discover<P: AsRef<Path>>(&mut self, alignments: &[P]) -> Result<(), SupermatrixError> {
        for alignment in alignments {
            let alignment = alignment.as_ref();
            debug!("Discovering OTUs in {:?}", alignment);
            for record in check_locus(alignment)?.records {
                self.add_otu(record.otu);
            }
        }
        info!("Discovered {} OTUs", self.order.len());
        Ok(())
    }

    // a new OTU is padded with gaps for every locus merged before it was seen
    fn add_otu(&mut self, name: String) {
        if !self.otus.contains_key(&name) {
            trace!("New OTU {}", name);
            let mut otu = Otu::new(name.clone());
            for locus in &self.loci {
                otu.update_gaps(locus.width);
            }
            self.otus.insert(name.clone(), otu);
            self.order.push(name);
        }
    }

    /// Adds one locus to every OTU, either the first sequence of that OTU or gaps.
    ///
    /// OTUs appearing in this locus that were not discovered beforehand are added
    /// and padded with gaps for every previous locus, as in `discover`.
    pub fn merge_locus(&mut self, alignment: &Path) -> Result<&LocusSummary, SupermatrixError> {
        let locus = check_locus(alignment)?;
        let previous_loci = self.loci.len();
        let record_count = locus.records.len();
        let mut already_added: HashSet<String> = HashSet::new();
        let mut duplicates = 0usize;

        for record in locus.records {
            if already_added.contains(&record.otu) {
                debug!(
                    "Skipping {} ({}), {:?} already contains this OTU",
                    record.accession, record.otu, alignment
                );
                duplicates += 1;
                continue;
            }
            self.add_otu(record.otu.clone());
            if let Some(otu) = self.otus.get_mut(&record.otu) {
                otu.update(&record.sequence, &record.accession, ungapped_length(&record.sequence));
            }
            already_added.insert(record.otu);
        }

        // add gaps for any OTU that didn't have a sequence
        let mut gap_filled = 0usize;
        for otu in self.otus.values_mut() {
            if !already_added.contains(otu.name()) {
                otu.update_gaps(locus.width);
                gap_filled += 1;
            }
        }

        info!(
            "{:?}: {} OTUs, {} gap filled, {} duplicates skipped, width {}",
            alignment,
            already_added.len(),
            gap_filled,
            duplicates,
            locus.width
        );
        self.loci.push(LocusSummary {
            path: alignment.to_path_buf(),
            record_count,
            otu_count: already_added.len(),
            duplicates,
            width: locus.width,
        });
        Ok(&self.loci[previous_loci])
    }

    /// Writes the supermatrix in fasta format, replacing any existing file.
    pub fn write(&self) -> Result<(), SupermatrixError> {
        create_parent(&self.output)?;
        info!("Output file: {:?}", self.output);
        let file = File::create(&self.output).map_err(|error| SupermatrixError::io(&self.output, error))?;
        let mut writer = BufWriter::new(file);
        self.write_fasta(&mut writer)
            .and_then(|()| writer.flush())
            .map_err(|error| SupermatrixError::io(&self.output, error))
    }

    fn write_fasta(&self, writer: &mut impl Write) -> std::io::Result<()> {
        for otu in self.otus() {
            writeln!(writer, "> {}", otu.name())?;
            let sequence = otu.sequence().chars().collect::<Vec<_>>();
            for line in sequence.chunks(self.line_width) {
                writeln!(writer, "{}", line.iter().collect::<String>())?;
            }
        }
        Ok(())
    }

    /// Writes a tab separated table of the accession and ungapped length used for each OTU and locus.
    pub fn write_provenance(&self, path: &Path) -> Result<(), SupermatrixError> {
        create_parent(path)?;
        info!("Provenance table: {:?}", path);
        let file = File::create(path).map_err(|error| SupermatrixError::io(path, error))?;
        let mut writer = BufWriter::new(file);
        self.write_provenance_table(&mut writer)
            .and_then(|()| writer.flush())
            .map_err(|error| SupermatrixError::io(path, error))
    }

    fn write_provenance_table(&self, writer: &mut impl Write) -> std::io::Result<()> {
        let headers = self.loci.iter().fold(String::from("OTU"), |headers, locus| {
            let name = locus
                .path
                .file_name()
                .unwrap_or(locus.path.as_os_str())
                .to_string_lossy();
            headers + "\t" + &name
        });
        writeln!(writer, "{}", headers)?;
        for otu in self.otus() {
            let cells = otu
                .accessions()
                .iter()
                .zip(otu.sequence_lengths())
                .map(|(accession, length)| format!("\t{accession}:{length}"))
                .collect::<String>();
            writeln!(writer, "{}{}", otu.name(), cells)?;
        }
        Ok(())
    }

    /// Gap content of the written output file.
    pub fn statistics(&self) -> Result<MatrixStatistics, SupermatrixError> {
        MatrixStatistics::from_fasta(&self.output)
    }

    /// OTUs in order of discovery.
    pub fn otus(&self) -> impl Iterator<Item = &Otu> + '_ {
        self.order.iter().filter_map(|name| self.otus.get(name))
    }

    pub fn otu(&self, name: &str) -> Option<&Otu> {
        self.otus.get(name)
    }

    pub fn otu_count(&self) -> usize {
        self.order.len()
    }

    pub fn loci(&self) -> &[LocusSummary] {
        &self.loci
    }

    /// Sum of the widths of all merged loci, the length of every row.
    pub fn width(&self) -> usize {
        self.loci.iter().map(|locus| locus.width).sum()
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    pub fn line_width(&self) -> usize {
        self.line_width
    }
}

fn create_parent(path: &Path) -> Result<(), SupermatrixError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent).map_err(|error| SupermatrixError::io(parent, error))
        }
        _ => Ok(()),
    }
}
