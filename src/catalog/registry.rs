use std::collections::HashMap;
use once_cell::sync::Lazy;
use crate::catalog::document::{parse_document, CatalogDocument};
use crate::catalog::loader;
use crate::catalog::types::{CatalogError, ModelEntry, ProviderConfig};

/// The catalog documents bundled with the binary, one per provider.
const BUILTIN_DOCUMENTS: [&str; 3] = [
    include_str!("../../catalog/llama.json"),
    include_str!("../../catalog/mistral.json"),
    include_str!("../../catalog/phi.json"),
];

/// Process-wide catalog built from the bundled documents.
///
/// The bundled documents are validated by the integration tests, so a
/// failure here means the binary itself was built from a broken catalog.
pub static BUILTIN_CATALOG: Lazy<ModelCatalog> = Lazy::new(|| {
    ModelCatalog::builtin().expect("bundled catalog documents must load")
});

/// Immutable in-memory catalog of model entries grouped by provider.
///
/// Built once by the loader and read-only afterwards: models are indexed
/// by id and providers by name, and every model's `provider` field is
/// guaranteed to resolve to a provider present in the same catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelCatalog {
    /// Registry of providers, indexed by provider name
    providers: HashMap<String, ProviderConfig>,
    /// Registry of model entries, indexed by model id
    models: HashMap<String, ModelEntry>,
}

impl ModelCatalog {
    /// Creates an empty catalog for the loader to populate.
    pub(crate) fn empty() -> Self {
        Self {
            providers: HashMap::new(),
            models: HashMap::new(),
        }
    }

    /// Builds the catalog shipped with the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        let mut documents = Vec::with_capacity(BUILTIN_DOCUMENTS.len());
        for raw in BUILTIN_DOCUMENTS {
            documents.push(parse_document(raw)?);
        }
        loader::build(documents)
    }

    pub(crate) fn insert_provider(&mut self, provider: ProviderConfig) {
        self.providers.insert(provider.name.clone(), provider);
    }

    pub(crate) fn insert_model(&mut self, model: ModelEntry) {
        self.models.insert(model.id.clone(), model);
    }

    /// Looks up a model entry by id.
    pub fn get_model(&self, id: &str) -> Option<&ModelEntry> {
        self.models.get(id)
    }

    /// Looks up a provider config by name.
    pub fn get_provider(&self, name: &str) -> Option<&ProviderConfig> {
        self.providers.get(name)
    }

    /// Resolves the provider config a model entry belongs to.
    ///
    /// For a catalog produced by the loader this always succeeds; the
    /// Option only exists for entries that did not come from this catalog.
    pub fn provider_for(&self, model: &ModelEntry) -> Option<&ProviderConfig> {
        self.providers.get(&model.provider)
    }

    /// All model entries, sorted by id for stable display output.
    pub fn models(&self) -> Vec<&ModelEntry> {
        let mut models: Vec<&ModelEntry> = self.models.values().collect();
        models.sort_by(|a, b| a.id.cmp(&b.id));
        models
    }

    /// All provider configs, sorted by name for stable display output.
    pub fn providers(&self) -> Vec<&ProviderConfig> {
        let mut providers: Vec<&ProviderConfig> = self.providers.values().collect();
        providers.sort_by(|a, b| a.name.cmp(&b.name));
        providers
    }

    /// Model entries belonging to the named provider, sorted by id.
    pub fn models_for_provider(&self, name: &str) -> Vec<&ModelEntry> {
        let mut models: Vec<&ModelEntry> = self
            .models
            .values()
            .filter(|model| model.provider == name)
            .collect();
        models.sort_by(|a, b| a.id.cmp(&b.id));
        models
    }

    /// Model entries in the given family tag, sorted by id.
    pub fn models_in_family(&self, family: &str) -> Vec<&ModelEntry> {
        let mut models: Vec<&ModelEntry> = self
            .models
            .values()
            .filter(|model| model.model_family == family)
            .collect();
        models.sort_by(|a, b| a.id.cmp(&b.id));
        models
    }

    /// Distinct family tags present in the catalog, sorted.
    pub fn model_families(&self) -> Vec<&str> {
        let mut families: Vec<&str> = self
            .models
            .values()
            .map(|model| model.model_family.as_str())
            .collect();
        families.sort();
        families.dedup();
        families
    }

    /// Number of model entries in the catalog.
    pub fn model_count(&self) -> usize {
        self.models.len()
    }

    /// Number of provider configs in the catalog.
    pub fn provider_count(&self) -> usize {
        self.providers.len()
    }

    /// Serializes the catalog back to document form, one document per
    /// provider with its models attached.
    ///
    /// Documents come out sorted by provider name and models sorted by
    /// id, so reloading the result yields an identical catalog.
    pub fn to_documents(&self) -> Vec<CatalogDocument> {
        self.providers()
            .into_iter()
            .map(|provider| CatalogDocument {
                models: self
                    .models_for_provider(&provider.name)
                    .into_iter()
                    .cloned()
                    .collect(),
                provider_config: provider.clone(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_loads() {
        let catalog = ModelCatalog::builtin().unwrap();
        assert_eq!(catalog.model_count(), 6);
        assert_eq!(catalog.provider_count(), 3);
    }

    #[test]
    fn lookups_resolve_within_the_catalog() {
        let catalog = ModelCatalog::builtin().unwrap();
        for model in catalog.models() {
            let provider = catalog.provider_for(model);
            assert!(provider.is_some(), "model '{}' has no provider", model.id);
            assert_eq!(provider.unwrap().name, model.provider);
        }
    }

    #[test]
    fn models_group_by_provider_and_family() {
        let catalog = ModelCatalog::builtin().unwrap();
        assert_eq!(catalog.models_for_provider("llama").len(), 2);
        assert_eq!(catalog.models_in_family("phi").len(), 2);
        assert_eq!(catalog.model_families(), vec!["llama", "mistral", "phi"]);
        assert!(catalog.models_for_provider("openai").is_empty());
    }

    #[test]
    fn documents_round_trip_to_an_identical_catalog() {
        let catalog = ModelCatalog::builtin().unwrap();
        let reloaded = loader::build(catalog.to_documents()).unwrap();
        assert_eq!(catalog, reloaded);
    }

    #[test]
    fn global_builtin_catalog_is_usable() {
        assert_eq!(BUILTIN_CATALOG.model_count(), 6);
        assert!(BUILTIN_CATALOG.get_model("mistral-7b").is_some());
    }
}
