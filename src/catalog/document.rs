use serde::{Serialize, Deserialize};
use crate::catalog::types::{CatalogError, ModelEntry, ProviderConfig};

/// One on-disk catalog document, as shipped per provider: a list of
/// model entries plus the provider configuration block they belong to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogDocument {
    /// Model entries declared by this document
    pub models: Vec<ModelEntry>,
    /// Configuration block for the provider these models reference
    pub provider_config: ProviderConfig,
}

/// Parses a single catalog document from its JSON text.
///
/// # Arguments
///
/// * `raw` - The raw JSON text of one provider document
///
/// # Errors
/// Returns `CatalogError::Schema` when the document is malformed or a
/// required field is missing or of the wrong type.
pub fn parse_document(raw: &str) -> Result<CatalogDocument, CatalogError> {
    let document: CatalogDocument = serde_json::from_str(raw)?;
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_minimal_document() {
        let raw = r#"{
            "models": [{
                "id": "m1",
                "display_name": "M1",
                "context_length": 2048,
                "description": "test model",
                "model_family": "test",
                "provider": "p1",
                "requires_model_path": true,
                "requires_api_key": false
            }],
            "provider_config": {
                "name": "p1",
                "display_name": "P1",
                "description": "test provider",
                "requires_api_key": false,
                "requires_model_path": true,
                "default_parameters": {"temperature": 0.7, "max_tokens": 256}
            }
        }"#;

        let document = parse_document(raw).unwrap();
        assert_eq!(document.models.len(), 1);
        assert_eq!(document.models[0].id, "m1");
        assert_eq!(document.provider_config.name, "p1");
        assert_eq!(
            document.provider_config.default_parameters["max_tokens"].as_u64(),
            Some(256)
        );
    }

    #[test]
    fn missing_field_is_a_schema_error() {
        // context_length omitted
        let raw = r#"{
            "models": [{
                "id": "m1",
                "display_name": "M1",
                "description": "test model",
                "model_family": "test",
                "provider": "p1",
                "requires_model_path": true,
                "requires_api_key": false
            }],
            "provider_config": {
                "name": "p1",
                "display_name": "P1",
                "description": "test provider",
                "requires_api_key": false,
                "requires_model_path": true,
                "default_parameters": {}
            }
        }"#;

        match parse_document(raw) {
            Err(CatalogError::Schema(_)) => {}
            other => panic!("expected schema error, got {:?}", other),
        }
    }

    #[test]
    fn wrong_field_type_is_a_schema_error() {
        // context_length as a string
        let raw = r#"{
            "models": [{
                "id": "m1",
                "display_name": "M1",
                "context_length": "4096",
                "description": "test model",
                "model_family": "test",
                "provider": "p1",
                "requires_model_path": true,
                "requires_api_key": false
            }],
            "provider_config": {
                "name": "p1",
                "display_name": "P1",
                "description": "test provider",
                "requires_api_key": false,
                "requires_model_path": true,
                "default_parameters": {}
            }
        }"#;

        match parse_document(raw) {
            Err(CatalogError::Schema(_)) => {}
            other => panic!("expected schema error, got {:?}", other),
        }
    }
}
