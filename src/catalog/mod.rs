pub mod digest;
pub mod filesystem;

use crate::error::{RideMatchError, Result};
use crate::types::item::{CatalogRecord, Item};
use digest::CatalogDigest;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Loaded, normalized catalog in source order.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub root: PathBuf,
    pub items: Vec<Item>,
    pub digest: String,
}

impl Catalog {
    pub fn find(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Load a catalog from a JSON file holding an array of records, or from a
/// directory holding one record per `.json` file.
pub fn load(path: &Path) -> Result<Catalog> {
    if !path.exists() {
        return Err(RideMatchError::PathNotFound(path.display().to_string()));
    }

    let mut digest = CatalogDigest::default();
    let items = if path.is_dir() {
        load_directory(path, &mut digest)?
    } else {
        load_array_file(path, &mut digest)?
    };

    warn_on_duplicate_ids(&items);
    info!(path = %path.display(), items = items.len(), "catalog loaded");

    Ok(Catalog {
        root: path.to_path_buf(),
        items,
        digest: digest.finish(),
    })
}

fn load_directory(root: &Path, digest: &mut CatalogDigest) -> Result<Vec<Item>> {
    let mut items = Vec::new();
    for file in filesystem::list_json_files(root) {
        let name = file
            .strip_prefix(root)
            .unwrap_or(file.as_path())
            .to_string_lossy()
            .replace('\\', "/");
        let bytes = std::fs::read(&file)?;
        digest.update(&name, &bytes);

        let record: CatalogRecord =
            serde_json::from_slice(&bytes).map_err(|e| RideMatchError::CatalogParse {
                path: file.display().to_string(),
                message: e.to_string(),
            })?;
        debug!(source = %name, id = %record.id, "catalog record read");
        items.push(Item::from_record(record, Some(name)));
    }
    Ok(items)
}

fn load_array_file(path: &Path, digest: &mut CatalogDigest) -> Result<Vec<Item>> {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let bytes = std::fs::read(path)?;
    digest.update(&name, &bytes);

    let records: Vec<CatalogRecord> =
        serde_json::from_slice(&bytes).map_err(|e| RideMatchError::CatalogParse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
    Ok(records
        .into_iter()
        .map(|record| Item::from_record(record, Some(name.clone())))
        .collect())
}

fn warn_on_duplicate_ids(items: &[Item]) {
    let mut seen = HashSet::new();
    for item in items {
        if !seen.insert(item.id.as_str()) {
            warn!(id = %item.id, "duplicate item id in catalog; lookups use the first");
        }
    }
}
