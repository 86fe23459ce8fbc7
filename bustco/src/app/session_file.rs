//! reads and writes session storage as a JSON file: one object mapping
//! storage keys (`tco_ice`, `tco_bev`, `tco_bev_ad`) to JSON-encoded breakdown
//! strings, the same entries a browser session would hold.
use super::TcoAppError;
use crate::session::ResultStore;
use std::{collections::HashMap, path::Path};

/// loads the result store from a session file. a file that does not exist
/// yet reads as an empty store.
pub fn read_session_file(path: &Path) -> Result<ResultStore, TcoAppError> {
    if !path.exists() {
        log::info!(
            "session file {} does not exist, starting an empty session",
            path.display()
        );
        return Ok(ResultStore::new());
    }
    let contents = std::fs::read_to_string(path)?;
    let storage: HashMap<String, String> = serde_json::from_str(&contents)?;
    let store = ResultStore::from_storage(&storage)?;
    log::debug!(
        "read session file {} with {} stored result(s)",
        path.display(),
        storage.len()
    );
    Ok(store)
}

/// writes every stored result into the session file. storage keys already in
/// the file that do not belong to a variant are preserved.
pub fn write_session_file(path: &Path, store: &ResultStore) -> Result<(), TcoAppError> {
    let mut storage: serde_json::Map<String, serde_json::Value> = if path.exists() {
        let contents = std::fs::read_to_string(path)?;
        serde_json::from_str(&contents)?
    } else {
        serde_json::Map::new()
    };
    for (key, value) in store.to_storage()? {
        storage.insert(key, serde_json::Value::String(value));
    }
    let output = serde_json::to_string_pretty(&storage)?;
    std::fs::write(path, output)?;
    log::info!("wrote session file {}", path.display());
    Ok(())
}
