use core::fmt::Display;

/// Errors that can occur while reading a term count or building a sequence
#[derive(Debug)]
pub enum Error {
    /// The requested term index is past [`crate::MAX_TERM`]
    TermOutOfRange {
        /// The index that was asked for
        requested: u32,
        /// The largest index that can be represented
        max: u32,
    },

    /// Input from the user could not be understood
    InvalidInput(String),

    /// An I/O error occurred
    Io(std::io::Error),
}

impl Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::TermOutOfRange { requested, max } => {
                write!(f, "term {} is out of range: the largest supported term is {}", requested, max)
            }
            Self::InvalidInput(input) => write!(f, "invalid input: {}", input),
            Self::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// A wrapper around [`core::result::Result`] for fibseq operations
pub type Result<T, E = Error> = core::result::Result<T, E>;
