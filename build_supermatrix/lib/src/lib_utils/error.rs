// errors raised while reading locus alignments and writing the supermatrix

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SupermatrixError {
    #[error("Unable to access {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Record description in {path:?} needs an accession and a two word taxon label: '{description}'")]
    MalformedDescription { path: PathBuf, description: String },

    #[error("{description} in {path:?} has aligned width {found}, but the locus width is {expected}")]
    LocusWidthMismatch {
        path: PathBuf,
        description: String,
        expected: usize,
        found: usize,
    },

    #[error("Encountered sequence before header in {path:?} at line {line}")]
    SequenceBeforeHeader { path: PathBuf, line: usize },
}

impl SupermatrixError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
