use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::error::SiteError;
use crate::listing::Listing;
use crate::loader::load_items;
use crate::render::render_site;
use crate::settings::Settings;
use crate::validation::normalize_all;

pub const INDEX_PAGE: &str = "index.html";
pub const PAST_PAGE: &str = "past.html";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSummary {
    pub coming_soon: usize,
    pub past_workshops: usize,
    pub self_paced: usize,
    pub recorded_workshops: usize,
    pub written: Vec<PathBuf>,
}

/// Loads, validates, classifies and renders everything before the first
/// output file is touched.
pub fn build(settings: &Settings, as_of: NaiveDate) -> Result<BuildSummary, SiteError> {
    let raw = load_items(&settings.input)?;
    let items = normalize_all(&raw)?;
    let listing = Listing::classify(&items, as_of);

    for section in hidden_sections(&listing) {
        warn!(%as_of, section, "section is empty and will be hidden");
    }

    let site = render_site(&settings.title, &listing, settings.past_preview)?;

    let index_path = settings.output_dir.join(INDEX_PAGE);
    let past_path = settings.output_dir.join(PAST_PAGE);
    write_atomic(&index_path, &site.index)?;
    write_atomic(&past_path, &site.past)?;

    let summary = BuildSummary {
        coming_soon: listing.coming_soon.len(),
        past_workshops: listing.past_workshops.len(),
        self_paced: listing.self_paced.len(),
        recorded_workshops: listing.recorded_workshops.len(),
        written: vec![index_path, past_path],
    };
    info!(
        coming_soon = summary.coming_soon,
        past = summary.past_workshops,
        self_paced = summary.self_paced,
        recorded = summary.recorded_workshops,
        "site generated"
    );
    Ok(summary)
}

/// Index page sections left out because their view is empty.
pub fn hidden_sections(listing: &Listing<'_>) -> Vec<&'static str> {
    [
        ("coming_soon", listing.coming_soon.is_empty()),
        ("self_paced", listing.self_paced.is_empty()),
        ("past_workshops", listing.past_workshops.is_empty()),
        ("recorded_workshops", listing.recorded_workshops.is_empty()),
    ]
    .into_iter()
    .filter_map(|(name, empty)| empty.then_some(name))
    .collect()
}

/// Writes to a sibling temporary file and renames it over `path`, so readers
/// never see a half-written page.
pub fn write_atomic(path: &Path, contents: &str) -> Result<(), SiteError> {
    let mut tmp_name = path.file_name().unwrap_or_default().to_os_string();
    tmp_name.push(".tmp");
    let tmp_path = path.with_file_name(tmp_name);

    let result = fs::write(&tmp_path, contents).and_then(|()| fs::rename(&tmp_path, path));
    if let Err(source) = result {
        let _ = fs::remove_file(&tmp_path);
        return Err(SiteError::Write {
            path: path.to_path_buf(),
            source,
        });
    }
    info!(path = %path.display(), bytes = contents.len(), "wrote page");
    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::loader::parse_items;

    #[test]
    fn test_hidden_sections() {
        let raw = parse_items("- title: Docker 101\n  date: 2024-03-01\n").unwrap();
        let items = normalize_all(&raw).unwrap();
        let as_of = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();

        let listing = Listing::classify(&items, as_of);
        assert_eq!(
            hidden_sections(&listing),
            ["self_paced", "past_workshops", "recorded_workshops"]
        );

        let listing = Listing::classify(&[], as_of);
        assert_eq!(hidden_sections(&listing).len(), 4);
    }

    #[test]
    fn test_write_atomic_replaces_file() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path();
        let path = dir.join("index.html");
        fs::write(&path, "old").unwrap();

        write_atomic(&path, "new").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
        assert!(!dir.join("index.html.tmp").exists());
    }

    #[test]
    fn test_write_atomic_missing_dir() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nope").join("index.html");
        let err = write_atomic(&path, "x").unwrap_err();
        assert!(matches!(err, SiteError::Write { .. }));
    }
}
