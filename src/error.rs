pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    /// Product name is empty
    InvalidName,
    /// Quantity is outside the range the operation accepts
    InvalidQuantity,
    /// `low_stock` was given a zero threshold
    InvalidThreshold,
    /// Product (or inventory file) does not exist
    NotFound,
    /// Inventory file is valid JSON but not a top-level object
    BadFormat,
    /// Inventory file is not valid JSON
    ParseError(String),
    IOError(std::io::Error),
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::InvalidName => write!(f, "Invalid product name"),
            Self::InvalidQuantity => write!(f, "Quantity must be positive"),
            Self::InvalidThreshold => write!(f, "Threshold must be positive"),
            Self::NotFound => write!(f, "Not found"),
            Self::BadFormat => write!(f, "Inventory file is not a JSON object"),
            Self::ParseError(msg) => write!(f, "ParseError: {}", msg),
            Self::IOError(err) => write!(f, "{}", err.to_string()),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::IOError(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::ParseError(err.to_string())
    }
}
