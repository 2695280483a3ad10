use std::fs;
use std::path::Path;
use tracing::{debug, info};
use crate::catalog::document::{parse_document, CatalogDocument};
use crate::catalog::registry::ModelCatalog;
use crate::catalog::types::{CatalogError, ModelEntry, ProviderConfig};

/// Assembles a unified catalog from a set of parsed documents.
///
/// Providers are registered first so that model entries can be checked
/// against them in a second pass. The catalog is built into a fresh
/// value and only returned on success, so a failed load never leaves a
/// partially populated catalog visible to the caller.
///
/// # Arguments
///
/// * `documents` - One parsed document per provider
///
/// # Errors
/// Returns `DuplicateProviderName` / `DuplicateModelId` on key
/// collisions, `UnknownProvider` on a dangling provider reference, and
/// `Schema` when a record fails field-level validation.
pub fn build(documents: Vec<CatalogDocument>) -> Result<ModelCatalog, CatalogError> {
    let mut catalog = ModelCatalog::empty();

    for document in &documents {
        validate_provider(&document.provider_config)?;
        if catalog.get_provider(&document.provider_config.name).is_some() {
            return Err(CatalogError::DuplicateProviderName(
                document.provider_config.name.clone(),
            ));
        }
        catalog.insert_provider(document.provider_config.clone());
    }

    for document in documents {
        for model in document.models {
            validate_model(&model)?;
            if catalog.get_provider(&model.provider).is_none() {
                return Err(CatalogError::UnknownProvider {
                    model_id: model.id,
                    provider: model.provider,
                });
            }
            if catalog.get_model(&model.id).is_some() {
                return Err(CatalogError::DuplicateModelId(model.id));
            }
            catalog.insert_model(model);
        }
    }

    info!(
        "Catalog assembled: {} models across {} providers",
        catalog.model_count(),
        catalog.provider_count()
    );
    Ok(catalog)
}

/// Loads every `*.json` document in a directory and assembles a catalog.
///
/// Files are visited in filename order so repeated loads of the same
/// directory produce the same catalog. Hidden files and files without a
/// `.json` extension are skipped.
///
/// # Arguments
///
/// * `dir` - Directory containing one document per provider
pub fn load_dir(dir: &Path) -> Result<ModelCatalog, CatalogError> {
    if !dir.is_dir() {
        return Err(CatalogError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Catalog directory not found at: {}", dir.display()),
        )));
    }

    let mut paths: Vec<_> = fs::read_dir(dir)?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && !path.file_name().map_or(true, |name| name.to_string_lossy().starts_with("."))
                && path.extension().map_or(false, |ext| ext.to_string_lossy().to_lowercase() == "json")
        })
        .collect();
    paths.sort();

    let mut documents = Vec::with_capacity(paths.len());
    for path in &paths {
        debug!("Reading catalog document: {}", path.display());
        let raw = fs::read_to_string(path)?;
        let document = parse_document(&raw).map_err(|e| match e {
            CatalogError::Schema(msg) => {
                CatalogError::Schema(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })?;
        documents.push(document);
    }

    info!("Loaded {} catalog documents from {}", documents.len(), dir.display());
    build(documents)
}

/// Field-level checks serde cannot express for a model entry.
fn validate_model(model: &ModelEntry) -> Result<(), CatalogError> {
    if model.id.is_empty() {
        return Err(CatalogError::Schema("Model id must not be empty".to_string()));
    }
    if model.context_length == 0 {
        return Err(CatalogError::Schema(format!(
            "Model '{}': context_length must be greater than 0",
            model.id
        )));
    }
    Ok(())
}

/// Field-level checks serde cannot express for a provider config.
fn validate_provider(provider: &ProviderConfig) -> Result<(), CatalogError> {
    if provider.name.is_empty() {
        return Err(CatalogError::Schema("Provider name must not be empty".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn sample_provider(name: &str) -> ProviderConfig {
        let mut params = BTreeMap::new();
        params.insert("temperature".to_string(), serde_json::Number::from_f64(0.7).unwrap());
        params.insert("max_tokens".to_string(), serde_json::Number::from(256u64));
        ProviderConfig {
            name: name.to_string(),
            display_name: name.to_uppercase(),
            description: format!("{} test provider", name),
            requires_api_key: false,
            requires_model_path: true,
            default_parameters: params,
        }
    }

    fn sample_model(id: &str, provider: &str) -> ModelEntry {
        ModelEntry {
            id: id.to_string(),
            display_name: id.to_uppercase(),
            context_length: 4096,
            description: format!("{} test model", id),
            model_family: provider.to_string(),
            provider: provider.to_string(),
            requires_model_path: true,
            requires_api_key: false,
        }
    }

    fn document(provider: &str, model_ids: &[&str]) -> CatalogDocument {
        CatalogDocument {
            models: model_ids.iter().map(|id| sample_model(id, provider)).collect(),
            provider_config: sample_provider(provider),
        }
    }

    #[test]
    fn builds_a_catalog_from_multiple_documents() {
        let catalog = build(vec![
            document("alpha", &["alpha-small", "alpha-large"]),
            document("beta", &["beta-base"]),
        ])
        .unwrap();

        assert_eq!(catalog.model_count(), 3);
        assert_eq!(catalog.provider_count(), 2);
        assert_eq!(catalog.get_model("beta-base").unwrap().provider, "beta");
    }

    #[test]
    fn rejects_duplicate_model_ids() {
        let result = build(vec![
            document("alpha", &["shared-id"]),
            document("beta", &["shared-id"]),
        ]);
        match result {
            Err(CatalogError::DuplicateModelId(id)) => assert_eq!(id, "shared-id"),
            other => panic!("expected duplicate model id error, got {:?}", other),
        }
    }

    #[test]
    fn rejects_duplicate_provider_names() {
        let result = build(vec![
            document("alpha", &["alpha-1"]),
            document("alpha", &["alpha-2"]),
        ]);
        match result {
            Err(CatalogError::DuplicateProviderName(name)) => assert_eq!(name, "alpha"),
            other => panic!("expected duplicate provider error, got {:?}", other),
        }
    }

    #[test]
    fn rejects_dangling_provider_references() {
        let mut doc = document("alpha", &["alpha-1"]);
        doc.models.push(sample_model("orphan", "unknown"));

        let result = build(vec![doc]);
        match result {
            Err(CatalogError::UnknownProvider { model_id, provider }) => {
                assert_eq!(model_id, "orphan");
                assert_eq!(provider, "unknown");
            }
            other => panic!("expected unknown provider error, got {:?}", other),
        }
    }

    #[test]
    fn rejects_zero_context_length() {
        let mut doc = document("alpha", &["alpha-1"]);
        doc.models[0].context_length = 0;

        match build(vec![doc]) {
            Err(CatalogError::Schema(msg)) => assert!(msg.contains("context_length")),
            other => panic!("expected schema error, got {:?}", other),
        }
    }

    #[test]
    fn empty_document_set_yields_an_empty_catalog() {
        let catalog = build(Vec::new()).unwrap();
        assert_eq!(catalog.model_count(), 0);
        assert_eq!(catalog.provider_count(), 0);
    }
}
