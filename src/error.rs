//! Error enum
use std::fmt;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Serde(serde_json::Error),
    Glob(glob::GlobError),
    GlobPattern(glob::PatternError),
    Custom(String),
    /// No case to process (before any filter ran).
    EmptyInput,
    /// A field needed for normalization is absent from a raw case.
    MissingField { itemid: String, field: &'static str },
    /// Respondent code absent from the countries table.
    UnknownCountry { itemid: String, code: String },
    /// Originating body code absent from the originating bodies table.
    UnknownOriginatingBody { itemid: String, code: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "io error: {}", e),
            Error::Serde(e) => write!(f, "json error: {}", e),
            Error::Glob(e) => write!(f, "glob error: {}", e),
            Error::GlobPattern(e) => write!(f, "glob pattern error: {}", e),
            Error::Custom(s) => write!(f, "{}", s),
            Error::EmptyInput => write!(f, "there is no case to filter"),
            Error::MissingField { itemid, field } => {
                write!(f, "case {} has no field {}", itemid, field)
            }
            Error::UnknownCountry { itemid, code } => {
                write!(f, "case {}: unknown respondent country {:?}", itemid, code)
            }
            Error::UnknownOriginatingBody { itemid, code } => {
                write!(f, "case {}: unknown originating body {:?}", itemid, code)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<glob::GlobError> for Error {
    fn from(e: glob::GlobError) -> Error {
        Error::Glob(e)
    }
}

impl From<glob::PatternError> for Error {
    fn from(e: glob::PatternError) -> Error {
        Error::GlobPattern(e)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
    }
}
