use comfy_table::{Table, Cell, ContentArrangement, Attribute, CellAlignment};
use colored::*;
use crate::catalog::{ModelCatalog, ModelEntry, ProviderConfig};

/// Displays a table of all catalog models with colorful formatting.
///
/// # Arguments
///
/// * `catalog` - The loaded catalog to render
pub fn display_models_table(catalog: &ModelCatalog) {
    let models = catalog.models();
    if models.is_empty() {
        println!("{}", "No models found in catalog".yellow());
        return;
    }

    let mut table = Table::new();
    table
        .set_header(vec![
            Cell::new("Id").fg(comfy_table::Color::Cyan).add_attribute(Attribute::Bold),
            Cell::new("Name").fg(comfy_table::Color::Cyan).add_attribute(Attribute::Bold),
            Cell::new("Family").fg(comfy_table::Color::Cyan).add_attribute(Attribute::Bold),
            Cell::new("Provider").fg(comfy_table::Color::Cyan).add_attribute(Attribute::Bold),
            Cell::new("Context").fg(comfy_table::Color::Cyan).add_attribute(Attribute::Bold),
            Cell::new("Weights").fg(comfy_table::Color::Cyan).add_attribute(Attribute::Bold),
            Cell::new("API Key").fg(comfy_table::Color::Cyan).add_attribute(Attribute::Bold),
        ])
        .load_preset(comfy_table::presets::UTF8_FULL)
        // Use dynamic content arrangement
        .set_content_arrangement(ContentArrangement::Dynamic);

    for model in &models {
        table.add_row(vec![
            Cell::new(&model.id).fg(comfy_table::Color::Yellow),
            Cell::new(&model.display_name).fg(comfy_table::Color::Green),
            Cell::new(&model.model_family).fg(comfy_table::Color::Magenta).set_alignment(CellAlignment::Center),
            Cell::new(&model.provider).fg(comfy_table::Color::Blue).set_alignment(CellAlignment::Center),
            Cell::new(model.context_length.to_string()).fg(comfy_table::Color::White).set_alignment(CellAlignment::Right),
            Cell::new(flag(model.requires_model_path)).set_alignment(CellAlignment::Center),
            Cell::new(flag(model.requires_api_key)).set_alignment(CellAlignment::Center),
        ]);
    }

    println!("\n{}", table);
    println!("{}\n", format!("Found {} models in catalog", models.len()).green());
}

/// Displays a table of all providers and their default parameters.
///
/// # Arguments
///
/// * `catalog` - The loaded catalog to render
pub fn display_providers_table(catalog: &ModelCatalog) {
    let providers = catalog.providers();
    if providers.is_empty() {
        println!("{}", "No providers found in catalog".yellow());
        return;
    }

    let mut table = Table::new();
    table
        .set_header(vec![
            Cell::new("Name").fg(comfy_table::Color::Cyan).add_attribute(Attribute::Bold),
            Cell::new("Display Name").fg(comfy_table::Color::Cyan).add_attribute(Attribute::Bold),
            Cell::new("Models").fg(comfy_table::Color::Cyan).add_attribute(Attribute::Bold),
            Cell::new("Defaults").fg(comfy_table::Color::Cyan).add_attribute(Attribute::Bold),
        ])
        .load_preset(comfy_table::presets::UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    for provider in &providers {
        let defaults = provider
            .default_parameters
            .iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect::<Vec<_>>()
            .join(", ");
        table.add_row(vec![
            Cell::new(&provider.name).fg(comfy_table::Color::Yellow),
            Cell::new(&provider.display_name).fg(comfy_table::Color::Green),
            Cell::new(catalog.models_for_provider(&provider.name).len().to_string())
                .fg(comfy_table::Color::White)
                .set_alignment(CellAlignment::Right),
            Cell::new(defaults).fg(comfy_table::Color::DarkGrey),
        ]);
    }

    println!("\n{}", table);
    println!("{}\n", format!("Found {} providers in catalog", providers.len()).green());
}

/// Displays the detail view for one model and its provider.
///
/// # Arguments
///
/// * `model` - The model entry to describe
/// * `provider` - The provider config the model resolves to
pub fn display_model_details(model: &ModelEntry, provider: &ProviderConfig) {
    println!("\n{}", model.display_name.bold().green());
    println!("{}", model.description);
    println!();
    println!("  {} {}", "Id:".cyan(), model.id.yellow());
    println!("  {} {}", "Family:".cyan(), model.model_family);
    println!("  {} {}", "Context length:".cyan(), model.context_length);
    println!("  {} {}", "Needs weights path:".cyan(), flag(model.requires_model_path));
    println!("  {} {}", "Needs API key:".cyan(), flag(model.requires_api_key));
    println!();
    println!("  {} {} ({})", "Provider:".cyan(), provider.display_name.green(), provider.name);
    println!("  {}", provider.description.dimmed());
    if !provider.default_parameters.is_empty() {
        println!("  {}", "Default parameters:".cyan());
        for (key, value) in &provider.default_parameters {
            println!("    {} = {}", key, value);
        }
    }
    println!();
}

fn flag(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}
