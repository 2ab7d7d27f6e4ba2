use crate::prelude::*;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// One raw entity row as it arrives from an external dataset. Sources only
/// guarantee a country-like string and a numeric value; everything else is
/// ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct DatasetRecord {
    pub country: String,
    pub value: f64,
}

/// One dataset file: quiz metadata plus its rows.
#[derive(Debug, Clone, Deserialize)]
pub struct DatasetFile {
    pub title: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub answers: Vec<String>,
    pub records: Vec<DatasetRecord>,
}

pub fn parse_dataset(json: &str) -> Result<DatasetFile> {
    Ok(serde_json::from_str(json)?)
}

/// Loads every `*.json` dataset under `dir`. Files that fail to parse are
/// logged and skipped so one bad dataset cannot take the catalog down.
pub fn load_datasets(dir: &Path) -> Result<Vec<DatasetFile>> {
    let mut datasets = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }

        let json = fs::read_to_string(&path)?;
        match parse_dataset(&json) {
            Ok(dataset) => {
                tracing::info!("Loaded dataset {:?} from {}", dataset.title, path.display());
                datasets.push(dataset);
            }
            Err(e) => tracing::error!("Skipping malformed dataset {}: {}", path.display(), e),
        }
    }

    datasets.sort_by(|a, b| a.title.cmp(&b.title));
    Ok(datasets)
}
