//! Error types for classification, registry construction and the usage counter

/// Errors raised at the classifier's public entry points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifyError {
    /// Nothing left after trimming whitespace.
    EmptyInput,
    /// A partner filter named a key the registry does not know.
    UnknownPartner(String),
}

impl ClassifyError {
    /// Stable reason code for boundary layers (HTTP bodies, UI messages).
    pub fn reason_code(&self) -> &'static str {
        match self {
            ClassifyError::EmptyInput => "empty_input",
            ClassifyError::UnknownPartner(_) => "unknown_partner",
        }
    }
}

impl std::fmt::Display for ClassifyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClassifyError::EmptyInput => write!(f, "Order ID is required"),
            ClassifyError::UnknownPartner(key) => write!(f, "Unknown partner key: {}", key),
        }
    }
}

impl std::error::Error for ClassifyError {}

/// Errors raised while compiling a format table.
#[derive(Debug)]
pub enum RegistryError {
    InvalidPattern { key: String, source: regex::Error },
    DuplicateKey(String),
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryError::InvalidPattern { key, source } => {
                write!(f, "Invalid pattern for '{}': {}", key, source)
            }
            RegistryError::DuplicateKey(key) => write!(f, "Duplicate format key: {}", key),
        }
    }
}

impl std::error::Error for RegistryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RegistryError::InvalidPattern { source, .. } => Some(source),
            RegistryError::DuplicateKey(_) => None,
        }
    }
}

/// Errors raised by the usage counter. These never affect classification.
#[derive(Debug)]
pub enum StatsError {
    EmptyKey,
    Poisoned,
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for StatsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatsError::EmptyKey => write!(f, "Provider name is required"),
            StatsError::Poisoned => write!(f, "Stats lock poisoned by an earlier panic"),
            StatsError::Io(e) => write!(f, "Stats store I/O error: {}", e),
            StatsError::Json(e) => write!(f, "Stats store JSON error: {}", e),
        }
    }
}

impl std::error::Error for StatsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StatsError::Io(e) => Some(e),
            StatsError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for StatsError {
    fn from(e: std::io::Error) -> Self {
        StatsError::Io(e)
    }
}

impl From<serde_json::Error> for StatsError {
    fn from(e: serde_json::Error) -> Self {
        StatsError::Json(e)
    }
}
