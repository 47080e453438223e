use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum AnalyticsError {
    InvalidFrame(String),
    Config(String),
    Io(String),
    Json(String),
    Sink(String),
}

impl fmt::Display for AnalyticsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalyticsError::InvalidFrame(msg) => write!(f, "invalid frame: {msg}"),
            AnalyticsError::Config(msg) => write!(f, "config error: {msg}"),
            AnalyticsError::Io(msg) => write!(f, "io error: {msg}"),
            AnalyticsError::Json(msg) => write!(f, "json error: {msg}"),
            AnalyticsError::Sink(msg) => write!(f, "sink error: {msg}"),
        }
    }
}

impl std::error::Error for AnalyticsError {}

impl From<std::io::Error> for AnalyticsError {
    fn from(err: std::io::Error) -> Self {
        AnalyticsError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for AnalyticsError {
    fn from(err: serde_json::Error) -> Self {
        AnalyticsError::Json(err.to_string())
    }
}
