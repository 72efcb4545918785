//! Test fixture loader for Scribe golden scenarios, plus in-memory
//! collaborator fakes shared by the crates' integration tests.

pub mod fakes;
pub mod scenario;

use serde::de::DeserializeOwned;
use std::path::PathBuf;

pub use fakes::{FailingCorpus, FailingLookup, FakeCorpus, InMemoryDictionary, RecordingWriteStore};
pub use scenario::{ExpectedDecision, SelectionScenario};

/// Root directory of the fixture data (`golden/` lives here).
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// List all JSON files in a fixture subdirectory, sorted by name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                Some(path)
            } else {
                None
            }
        })
        .collect();
    files.sort();
    files
}

/// Load every selection scenario under `golden/selection`.
pub fn load_selection_scenarios() -> Vec<(String, SelectionScenario)> {
    list_fixtures("golden/selection")
        .into_iter()
        .map(|path| {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            (name.clone(), load_fixture(&format!("golden/selection/{name}")))
        })
        .collect()
}
