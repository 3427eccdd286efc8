use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;
use tempfile::TempDir;
use training_index::error::SiteError;
use training_index::settings::Settings;
use training_index::site::{build, INDEX_PAGE, PAST_PAGE};

const CATALOG: &str = r#"
# Scheduled sessions have a date, self-paced content does not.
- title: Docker 101
  date: 2024-03-01
  city: Lyon
  country: France
  attend: https://example.com/docker-101
- title: K8s Deep Dive
  date: [2024-01-10, 2024-01-12]
  slides: https://example.com/k8s/
- title: Self-Paced Intro
  slides: intro.html
- title: Old Workshop
  date: 2023-05-22
  video: https://example.com/old-workshop
"#;

/// Helper to create a fresh scratch directory holding the data file.
/// The directory is removed when the returned `TempDir` is dropped.
fn scratch_site(catalog: &str) -> (TempDir, Settings) {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("index.yaml"), catalog).unwrap();

    let settings = Settings {
        input: dir.path().join("index.yaml"),
        output_dir: dir.path().to_path_buf(),
        ..Settings::default()
    };
    (dir, settings)
}

fn feb_first() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()
}

fn read_page(settings: &Settings, page: &str) -> String {
    fs::read_to_string(settings.output_dir.join(page)).unwrap()
}

#[test]
fn test_build_writes_both_pages() {
    // Arrange
    let (_dir, settings) = scratch_site(CATALOG);

    // Act
    let summary = build(&settings, feb_first()).unwrap();

    // Assert
    assert_eq!(summary.coming_soon, 1);
    assert_eq!(summary.past_workshops, 2);
    assert_eq!(summary.self_paced, 1);
    assert_eq!(summary.recorded_workshops, 1);
    assert_eq!(
        summary.written,
        vec![
            settings.output_dir.join(INDEX_PAGE),
            settings.output_dir.join(PAST_PAGE)
        ]
    );

    let index = read_page(&settings, INDEX_PAGE);
    assert!(index.contains("<title>Container Training</title>"));
    assert!(index.contains("March 1st, 2024: Docker 101"));
    assert!(index.contains("Lyon, France"));
    assert!(index.contains("Self-Paced Intro"));
    assert!(index.contains("January 10th, 2024: K8s Deep Dive"));
    assert!(index.contains("https://example.com/old-workshop"));

    let past = read_page(&settings, PAST_PAGE);
    assert!(past.contains("All past workshops"));
    assert!(past.contains("K8s Deep Dive"));
    assert!(past.contains("May 22nd, 2023: Old Workshop"));
    assert!(!past.contains("Docker 101"));
    assert!(!past.contains("Self-Paced Intro"));
}

#[test]
fn test_past_page_is_most_recent_first() {
    // Arrange
    let (_dir, settings) = scratch_site(CATALOG);

    // Act
    build(&settings, feb_first()).unwrap();

    // Assert
    let past = read_page(&settings, PAST_PAGE);
    let k8s = past.find("K8s Deep Dive").unwrap();
    let old = past.find("Old Workshop").unwrap();
    assert!(k8s < old);
}

#[test]
fn test_build_is_repeatable() {
    // Arrange
    let (_dir, settings) = scratch_site(CATALOG);

    // Act
    build(&settings, feb_first()).unwrap();
    let first = read_page(&settings, INDEX_PAGE);
    build(&settings, feb_first()).unwrap();
    let second = read_page(&settings, INDEX_PAGE);

    // Assert
    assert_eq!(first, second);
}

#[test]
fn test_invalid_records_abort_before_writing() {
    // Arrange
    let (_dir, settings) = scratch_site(
        r#"
- title: Fine
  date: 2024-03-01
- date: [2024-01-10]
- title: Backwards
  date: [2024-01-12, 2024-01-10]
"#,
    );
    fs::write(settings.output_dir.join(INDEX_PAGE), "previous").unwrap();

    // Act
    let err = build(&settings, feb_first()).unwrap_err();

    // Assert
    let SiteError::Invalid(report) = &err else {
        panic!("expected validation error, got {err}");
    };
    assert_eq!(report.errors.len(), 3);
    let message = err.to_string();
    assert!(message.contains("item #2: title is missing"));
    assert!(message.contains("exactly two elements"));
    assert!(message.contains("\"Backwards\""));

    assert_eq!(read_page(&settings, INDEX_PAGE), "previous");
    assert!(!settings.output_dir.join(PAST_PAGE).exists());
}

#[test]
fn test_missing_input_file() {
    // Arrange
    let (_dir, mut settings) = scratch_site(CATALOG);
    settings.input = settings.output_dir.join("absent.yaml");

    // Act
    let err = build(&settings, feb_first()).unwrap_err();

    // Assert
    assert!(matches!(err, SiteError::Read { .. }));
    assert!(!settings.output_dir.join(INDEX_PAGE).exists());
}

#[test]
fn test_malformed_yaml() {
    // Arrange
    let (_dir, settings) = scratch_site("title: [unclosed\n");

    // Act
    let err = build(&settings, feb_first()).unwrap_err();

    // Assert
    assert!(matches!(err, SiteError::Parse { .. }));
}

#[test]
fn test_empty_catalog_still_renders() {
    // Arrange
    let (_dir, settings) = scratch_site("");

    // Act
    let summary = build(&settings, feb_first()).unwrap();

    // Assert
    assert_eq!(summary.coming_soon + summary.past_workshops + summary.self_paced, 0);
    let index = read_page(&settings, INDEX_PAGE);
    assert!(index.contains("Container Training"));
    assert!(!index.contains("Self-paced tutorials"));
}

#[test]
fn test_custom_title_and_output_dir() {
    // Arrange
    let (_dir, mut settings) = scratch_site(CATALOG);
    let public: PathBuf = settings.output_dir.join("public");
    fs::create_dir_all(&public).unwrap();
    settings.output_dir = public;
    settings.title = "Workshops & Talks".to_string();

    // Act
    build(&settings, feb_first()).unwrap();

    // Assert
    let index = read_page(&settings, INDEX_PAGE);
    assert!(index.contains("<title>Workshops &amp; Talks</title>"));
}

#[test]
fn test_scratch_site_is_removed_on_drop() {
    // Arrange
    let (dir, settings) = scratch_site(CATALOG);
    build(&settings, feb_first()).unwrap();
    let root = dir.path().to_path_buf();
    assert!(root.join(INDEX_PAGE).exists());

    // Act
    drop(dir);

    // Assert
    assert!(!root.exists());
}
