/// Screenshot existence verification
///
/// The feed references screenshots by relative path. After a successful
/// load we walk the asset directory once and report every referenced file
/// that is not actually on disk, so missing thumbnails render a placeholder
/// instead of a broken image. Purely advisory — a missing screenshot never
/// fails the gallery.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tokio::task;
use walkdir::WalkDir;

/// Collect the referenced screenshot paths that do not exist under `base`.
/// Absolute references are checked directly.
pub fn missing_screenshots(base: &Path, referenced: &[String]) -> Vec<String> {
    let mut present: HashSet<PathBuf> = HashSet::new();
    for entry in WalkDir::new(base)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if !entry.path().is_file() {
            continue;
        }
        if let Ok(relative) = entry.path().strip_prefix(base) {
            present.insert(relative.to_path_buf());
        }
    }

    referenced
        .iter()
        .filter(|reference| {
            let path = Path::new(reference.as_str());
            if path.is_absolute() {
                !path.exists()
            } else {
                !present.contains(path)
            }
        })
        .cloned()
        .collect()
}

/// Resolve a feed screenshot reference against the asset base directory.
/// Absolute references pass through untouched.
pub fn resolve(base: &Path, reference: &str) -> PathBuf {
    let path = Path::new(reference);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

/// Blocking-pool wrapper for the startup verification pass.
pub async fn verify_screenshots(base: PathBuf, referenced: Vec<String>) -> Vec<String> {
    task::spawn_blocking(move || missing_screenshots(&base, &referenced))
        .await
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_base(name: &str) -> PathBuf {
        let base = std::env::temp_dir().join(format!("folio-assets-{}-{}", std::process::id(), name));
        std::fs::create_dir_all(base.join("shots")).unwrap();
        std::fs::write(base.join("shots/a.png"), b"png").unwrap();
        base
    }

    #[test]
    fn test_present_files_are_not_reported() {
        let base = temp_base("present");
        let missing = missing_screenshots(
            &base,
            &["shots/a.png".to_string(), "shots/b.png".to_string()],
        );
        assert_eq!(missing, vec!["shots/b.png".to_string()]);
        let _ = std::fs::remove_dir_all(base);
    }

    #[test]
    fn test_empty_reference_list_reports_nothing() {
        let base = temp_base("empty");
        assert!(missing_screenshots(&base, &[]).is_empty());
        let _ = std::fs::remove_dir_all(base);
    }
}
