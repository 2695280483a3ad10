pub mod types;
pub mod document;
pub mod loader;
pub mod registry;

pub use types::{CatalogError, ModelEntry, ProviderConfig};
pub use document::{parse_document, CatalogDocument};
pub use loader::{build, load_dir};
pub use registry::{ModelCatalog, BUILTIN_CATALOG};
