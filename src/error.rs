use std::fmt;
use std::path::PathBuf;

/// Custom error type for provisioning operations
#[derive(Debug)]
pub enum ProvisionError {
    /// HTTP request failed
    Http(reqwest::Error),
    /// API returned an error response
    Api { status: u16, message: String },
    /// Request was rejected by a rate limit and not retried
    RateLimited { status: u16, message: String },
    /// Required setting (token, organization) is missing or invalid
    Config(String),
    /// Input CSV file does not exist
    MissingInput(PathBuf),
    /// Input CSV file could not be read or parsed
    Csv(String),
    /// JSON parsing error
    Json(String),
}

impl ProvisionError {
    /// True when the error is the "resource does not exist" signal
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// HTTP status carried by the error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            ProvisionError::Api { status, .. } | ProvisionError::RateLimited { status, .. } => {
                Some(*status)
            }
            ProvisionError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

impl fmt::Display for ProvisionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProvisionError::Http(e) => write!(f, "HTTP request failed: {}", e),
            ProvisionError::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            ProvisionError::RateLimited { status, message } => {
                write!(f, "Rate limited (status {}): {}", status, message)
            }
            ProvisionError::Config(msg) => write!(f, "Configuration error: {}", msg),
            ProvisionError::MissingInput(path) => {
                write!(f, "CSV file not found at {}", path.display())
            }
            ProvisionError::Csv(msg) => write!(f, "CSV error: {}", msg),
            ProvisionError::Json(msg) => write!(f, "JSON error: {}", msg),
        }
    }
}

impl std::error::Error for ProvisionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProvisionError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ProvisionError {
    fn from(err: reqwest::Error) -> Self {
        ProvisionError::Http(err)
    }
}

impl From<serde_json::Error> for ProvisionError {
    fn from(err: serde_json::Error) -> Self {
        ProvisionError::Json(err.to_string())
    }
}

impl From<csv::Error> for ProvisionError {
    fn from(err: csv::Error) -> Self {
        ProvisionError::Csv(err.to_string())
    }
}

/// Result type alias for provisioning operations
pub type Result<T> = std::result::Result<T, ProvisionError>;
