/// Project feed loader
///
/// Reads the project feed (a JSON array of records) once at startup. Any
/// failure is terminal for that attempt: the gallery renders a fallback
/// message instead, and nothing retries automatically. The user can still
/// point the app at a different feed file through the picker.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::state::project::ProjectRecord;

/// Default feed location, relative to the working directory.
pub const DEFAULT_FEED: &str = "data/projects.json";

/// Why a feed failed to load.
#[derive(Debug, Clone, Error)]
pub enum LoadError {
    #[error("unable to read {path}: {message}")]
    Io { path: String, message: String },
    #[error("invalid project data in {path}: {message}")]
    Parse { path: String, message: String },
}

/// Load and parse the project feed.
pub async fn load_projects(path: PathBuf) -> Result<Vec<ProjectRecord>, LoadError> {
    let text = tokio::fs::read_to_string(&path)
        .await
        .map_err(|e| LoadError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

    let records: Vec<ProjectRecord> =
        serde_json::from_str(&text).map_err(|e| LoadError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

    println!(
        "📁 Loaded {} project records from {}",
        records.len(),
        path.display()
    );

    Ok(records)
}

/// Directory screenshots resolve against: the feed's parent, falling back
/// to the working directory when the feed path has none.
pub fn asset_base(feed: &Path) -> PathBuf {
    feed.parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_feed(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("folio-test-{}-{}", std::process::id(), name));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[tokio::test]
    async fn test_missing_feed_is_an_io_error() {
        let result = load_projects(PathBuf::from("/nonexistent/projects.json")).await;
        assert!(matches!(result, Err(LoadError::Io { .. })));
    }

    #[tokio::test]
    async fn test_invalid_json_is_a_parse_error() {
        let path = temp_feed("bad.json", "{ not json");
        let result = load_projects(path.clone()).await;
        assert!(matches!(result, Err(LoadError::Parse { .. })));
        let _ = std::fs::remove_file(path);
    }

    #[tokio::test]
    async fn test_valid_feed_loads_in_order() {
        let path = temp_feed(
            "good.json",
            r#"[{"title": "First", "category": "web"}, {"title": "Second"}]"#,
        );
        let records = load_projects(path.clone()).await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title, "First");
        assert_eq!(records[1].title, "Second");
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_asset_base_is_the_feed_parent() {
        assert_eq!(
            asset_base(Path::new("data/projects.json")),
            PathBuf::from("data")
        );
        assert_eq!(asset_base(Path::new("projects.json")), PathBuf::from("."));
    }
}
