// SPDX-License-Identifier: GPL-3.0-only

//! CLI commands for headless use
//!
//! This module provides command-line functionality for:
//! - Listing the filter catalog
//! - Developing a photo without opening the window

use cosmic::Application;
use kontax::app::AppModel;
use kontax::config;
use kontax::filters::{self, FilterCollection, FilterName, FxName};
use kontax::storage;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

/// One catalog entry as printed by `kontax filters --json`
#[derive(Serialize)]
struct FilterEntry {
    name: FilterName,
    label: String,
    collection: &'static str,
}

/// List the filter catalog grouped by collection
pub fn list_filters(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let (_, config) = config::load(AppModel::APP_ID);

    if json {
        let entries: Vec<FilterEntry> = FilterName::ALL
            .into_iter()
            .map(|name| FilterEntry {
                name,
                label: name.label(),
                collection: name.collection().title(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    for collection in FilterCollection::ALL {
        println!("{}:", collection.title());
        for name in collection.filters() {
            let marker = if *name == config.selected_filter { "*" } else { " " };
            println!("  {} {}", marker, name);
        }
        println!();
    }
    println!("Effects: {}", FxName::ALL.map(|fx| fx.as_str()).join(", "));

    Ok(())
}

/// Develop a photo and write it as JPEG
///
/// `filter` and `effects` fall back to what is selected in the app.
pub fn process_photo(
    input: &Path,
    output: Option<PathBuf>,
    filter: Option<FilterName>,
    effects: Option<Vec<FxName>>,
) -> Result<(), Box<dyn std::error::Error>> {
    let (_, config) = config::load(AppModel::APP_ID);
    let filter = filter.unwrap_or(config.selected_filter);
    let effects = effects.unwrap_or_else(|| config.enabled_effects.clone());
    let quality = config.export_quality();

    println!("Developing {} with {}...", input.display(), filter);
    let start = Instant::now();

    let photo = storage::load_photo(input)?;
    let developed = filters::develop(&photo, filter, &effects)?;

    let path = match output {
        Some(path) => {
            storage::write_jpeg(&developed, &path, quality)?;
            path
        }
        None => {
            let dir = storage::photo_directory(&config.save_folder_name)?;
            storage::export_photo(&developed, &dir, quality)?
        }
    };

    info!(
        path = %path.display(),
        %filter,
        ?effects,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Photo processed"
    );
    println!("Saved to {}", path.display());

    Ok(())
}
