//! Error enum
#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Csv(csv::Error),
    Serde(serde_json::Error),
    Glob(glob::GlobError),
    GlobPattern(glob::PatternError),
    LanguageTag(oxilangtag::LanguageTagParseError),
    InvalidSampleSize(i64),
    Custom(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(e) => write!(f, "{}", e),
            Error::Csv(e) => write!(f, "{}", e),
            Error::Serde(e) => write!(f, "{}", e),
            Error::Glob(e) => write!(f, "{}", e),
            Error::GlobPattern(e) => write!(f, "{}", e),
            Error::LanguageTag(e) => write!(f, "{}", e),
            Error::InvalidSampleSize(n) => write!(f, "invalid sample size: {}", n),
            Error::Custom(s) => write!(f, "{}", s),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Error {
        Error::Csv(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
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

impl From<oxilangtag::LanguageTagParseError> for Error {
    fn from(e: oxilangtag::LanguageTagParseError) -> Error {
        Error::LanguageTag(e)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}
