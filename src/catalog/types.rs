use std::collections::BTreeMap;
use std::error::Error;
use std::fmt;
use serde::{Serialize, Deserialize};
use serde_json::Number;

/// A single catalog record describing one selectable model variant.
///
/// Entries are read-only after load: they are created once when the
/// catalog documents are parsed and held for the remaining process
/// lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelEntry {
    /// Unique identifier within the catalog (e.g., "mistral-7b")
    pub id: String,
    /// Human-readable label shown in listings
    pub display_name: String,
    /// Maximum number of tokens the model can process in one call
    pub context_length: u64,
    /// Free-text description of the model
    pub description: String,
    /// Tag grouping related models (e.g., "mistral", "phi", "llama")
    pub model_family: String,
    /// Name of the ProviderConfig this model belongs to
    pub provider: String,
    /// Whether a local weights path must be supplied to use this model
    pub requires_model_path: bool,
    /// Whether a remote credential must be supplied to use this model
    pub requires_api_key: bool,
}

/// Configuration for one backend family (e.g., llama.cpp, local
/// transformers) sharing default parameters and credential/path
/// requirements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Unique provider identifier (e.g., "llama")
    pub name: String,
    /// Human-readable label shown in listings
    pub display_name: String,
    /// Free-text description of the backend
    pub description: String,
    /// Provider-level default for credential requirement
    pub requires_api_key: bool,
    /// Provider-level default for weights-path requirement
    pub requires_model_path: bool,
    /// Open mapping from parameter name to numeric value. The key set is
    /// provider-specific (e.g., n_ctx/n_threads for llama.cpp,
    /// max_length/repetition_penalty for transformers) and is not fixed.
    pub default_parameters: BTreeMap<String, Number>,
}

impl ProviderConfig {
    /// Looks up a default parameter by name.
    ///
    /// # Returns
    /// Some(&Number) if the provider defines the parameter, None otherwise
    pub fn default_parameter(&self, key: &str) -> Option<&Number> {
        self.default_parameters.get(key)
    }
}

/// Custom error types for catalog loading and validation
#[derive(Debug)]
pub enum CatalogError {
    /// Wraps std::io::Error for document file operations
    Io(std::io::Error),
    /// Malformed document or missing/mis-typed field, with a message
    Schema(String),
    /// A model references a provider name that was not loaded
    UnknownProvider {
        /// Id of the offending model entry
        model_id: String,
        /// Provider name that failed to resolve
        provider: String,
    },
    /// Two model entries share the same id
    DuplicateModelId(String),
    /// Two provider configs share the same name
    DuplicateProviderName(String),
}

/// Implements Display trait for CatalogError for error reporting
impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CatalogError::Io(e) => write!(f, "I/O error: {}", e),
            CatalogError::Schema(msg) => write!(f, "Invalid catalog document: {}", msg),
            CatalogError::UnknownProvider { model_id, provider } => {
                write!(f, "Model '{}' references unknown provider '{}'", model_id, provider)
            }
            CatalogError::DuplicateModelId(id) => {
                write!(f, "Duplicate model id in catalog: '{}'", id)
            }
            CatalogError::DuplicateProviderName(name) => {
                write!(f, "Duplicate provider name in catalog: '{}'", name)
            }
        }
    }
}

/// Implements Error trait to allow CatalogError to be used as a standard error type
impl Error for CatalogError {}

/// Allows automatic conversion from std::io::Error to CatalogError
impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        CatalogError::Io(err)
    }
}

/// Parse and type failures from serde_json are schema errors
impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Schema(err.to_string())
    }
}
