/// The two broad classes of failure a caller can see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Something was supplied, but it isn't valid: a letter outside A..Z, bad board dimensions.
    InvalidInput,
    /// Something required wasn't supplied at all.
    IllegalArgument,
}

/// Errors returned by dictionary construction, board loading, solving and scoring.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BoggleError {
    #[error("invalid letter {letter:?} at position {position}; expected A-Z")]
    InvalidLetter { letter: char, position: usize },
    #[error("invalid board dimensions {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },
    #[error("board has {found} cells, expected {expected}")]
    CellCountMismatch { expected: usize, found: usize },
    #[error("malformed board: {0}")]
    MalformedBoard(String),
    #[error("missing {0}")]
    MissingArgument(&'static str),
}

impl BoggleError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BoggleError::InvalidLetter { .. }
            | BoggleError::InvalidDimensions { .. }
            | BoggleError::CellCountMismatch { .. }
            | BoggleError::MalformedBoard(_) => ErrorKind::InvalidInput,
            BoggleError::MissingArgument(_) => ErrorKind::IllegalArgument,
        }
    }
}
