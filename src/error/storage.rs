use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum StoreError {
    Unavailable(String),
    Write(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Unavailable(msg) => write!(f, "Store Unavailable: {}", msg),
            StoreError::Write(msg) => write!(f, "Write Error: {}", msg),
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(error: std::io::Error) -> Self {
        StoreError::Write(error.to_string())
    }
}
