//
// Errors
//
use std::io;
use std::result;
use std::error;
use std::num;
use std::fmt;

/// Type alias for respell errors
pub type Result<X> = result::Result<X, Error>;

/// Wrapper for the kinds of errors occuring while building or reading corpora
#[derive(Debug)]
pub enum Error {
    IOError(io::Error),
    ParseFloatError(num::ParseFloatError),
    CorpusError {
        file: String,
        line: usize,
        message: String,
    },
    NoTokens(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::IOError(ref err) => write!(f, "IO error: {}", err),
            Error::ParseFloatError(ref err) => write!(f, "Error parsing float: {}", err),
            Error::CorpusError { ref file, line, ref message } => {
                write!(f, "Corpus error in {}, line {}: {}", file, line, message)
            }
            Error::NoTokens(ref file) => {
                write!(f,
                    "The corpus {} has no fully-alphabetic lines, \
                    so token probabilities would divide by zero.",
                    file)
            }
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            Error::IOError(ref err) => Some(err),
            Error::ParseFloatError(ref err) => Some(err),
            Error::CorpusError { .. } => None,
            Error::NoTokens(_) => None,
        }
    }
}
//
// Convert everything else into Error
//
impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::IOError(err)
    }
}
impl From<num::ParseFloatError> for Error {
    fn from(err: num::ParseFloatError) -> Self {
        Error::ParseFloatError(err)
    }
}
