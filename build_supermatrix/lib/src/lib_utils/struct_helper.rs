// struct to handle file buffers


use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use log::{debug, trace};
use super::error::SupermatrixError;

// one fasta record, header without the leading '>'
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentRecord {
    pub description: String,
    pub sequence: String,
}

pub struct FileBufferHelper<'a> {
    pub path: &'a Path,
    buffer_reader: BufReader<File>,
    line: String,
    line_number: usize,
    pending_header: Option<String>,
}

impl<'a> FileBufferHelper<'a> {
    pub fn new(file: &'a Path) -> Result<FileBufferHelper<'a>, SupermatrixError> {
        // initialise instant of FileBufferHelper
        debug!("FileHelper created for: {:?}", file);
        let file_open = File::open(file).map_err(|error| SupermatrixError::io(file, error))?;
        Ok(Self {
            path: file,
            buffer_reader: BufReader::new(file_open),
            line: String::new(),
            line_number: 0,
            pending_header: None,
        })
    }

    // Read the next record. Sequence lines are joined and stripped of
    // surrounding whitespace, empty lines are skipped.
    pub fn next_record(&mut self) -> Result<Option<AlignmentRecord>, SupermatrixError> {
        let mut header = self.pending_header.take();
        let mut sequence = String::new();
        loop {
            self.line.clear();
            let read = self
                .buffer_reader
                .read_line(&mut self.line)
                .map_err(|error| SupermatrixError::io(self.path, error))?;
            if read == 0 {
                // end of file
                return Ok(header.map(|description| AlignmentRecord {
                    description,
                    sequence,
                }));
            }
            self.line_number += 1;
            let trimmed = self.line.trim();
            if trimmed.is_empty() {
                continue;
            } else if let Some(description) = trimmed.strip_prefix('>') {
                let description = description.trim().to_string();
                match header {
                    Some(previous) => {
                        // the next header ends the current record
                        self.pending_header = Some(description);
                        return Ok(Some(AlignmentRecord {
                            description: previous,
                            sequence,
                        }));
                    }
                    None => {
                        trace!("Processing {}", description);
                        header = Some(description);
                    }
                }
            } else if header.is_none() {
                return Err(SupermatrixError::SequenceBeforeHeader {
                    path: self.path.to_path_buf(),
                    line: self.line_number,
                });
            } else {
                sequence.push_str(trimmed);
            }
        }
    }
}

impl Iterator for FileBufferHelper<'_> {
    type Item = Result<AlignmentRecord, SupermatrixError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_record().transpose()
    }
}
