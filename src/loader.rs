use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::SiteError;
use crate::models::RawItem;

pub fn load_items(path: &Path) -> Result<Vec<RawItem>, SiteError> {
    let text = fs::read_to_string(path).map_err(|source| SiteError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let items = parse_items(&text).map_err(|source| SiteError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), count = items.len(), "loaded items");
    Ok(items)
}

/// Parses a YAML sequence of item mappings. An empty document has no items.
pub fn parse_items(text: &str) -> Result<Vec<RawItem>, serde_yaml::Error> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    let items: Option<Vec<RawItem>> = serde_yaml::from_str(text)?;
    Ok(items.unwrap_or_default())
}
