use super::resolve_config;
use crate::aspects::AspectCatalog;
use anyhow::Result;
use colored::*;
use std::path::Path;

pub fn list_aspects(config: Option<&Path>) -> Result<()> {
    let catalog = resolve_config(config)?.catalog();
    print!("{}", render_catalog(&catalog));
    Ok(())
}

fn render_catalog(catalog: &AspectCatalog) -> String {
    catalog
        .iter()
        .enumerate()
        .map(|(index, aspect)| {
            format!(
                "{}. {} ({})\n   keywords: {}\n",
                index + 1,
                aspect.label.bold(),
                aspect.id,
                aspect.keywords.join(", ")
            )
        })
        .collect()
}
