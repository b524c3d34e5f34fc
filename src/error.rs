use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum NillableError {
    #[error("Decode error: {0}")]
    Decode(String),
    #[error("Format error: value {value:?} is not a valid {data_type}")]
    Format { data_type: &'static str, value: String },
    #[error("Range error: value {value} outside of the range of {target}")]
    Range { value: String, target: String },
    #[error("Scan error: cannot scan value {value} of type {shape} to {data_type}")]
    Scan { value: String, shape: &'static str, data_type: &'static str },
    #[error("Parse error: {value:?} is not a valid {data_type}: {message}")]
    Parse { data_type: &'static str, value: String, message: String },
}

pub type Result<T> = std::result::Result<T, NillableError>;

impl NillableError {
    pub fn is_decode(&self) -> bool { matches!(self, Self::Decode(_)) }
    pub fn is_format(&self) -> bool { matches!(self, Self::Format { .. }) }
    pub fn is_range(&self) -> bool { matches!(self, Self::Range { .. }) }
    pub fn is_scan(&self) -> bool { matches!(self, Self::Scan { .. }) }
    pub fn is_parse(&self) -> bool { matches!(self, Self::Parse { .. }) }
}

// Helper conversions
impl From<serde_json::Error> for NillableError {
    fn from(e: serde_json::Error) -> Self { Self::Decode(e.to_string()) }
}
impl From<NillableError> for rusqlite::types::FromSqlError {
    fn from(e: NillableError) -> Self { Self::Other(Box::new(e)) }
}
