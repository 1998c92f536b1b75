//! Hierarchical memory loading for the CLI session.
//!
//! A deliberately small loader: it looks for an `ANTEROOM.md` context
//! file in each workspace directory and concatenates what it finds.
//! Richer discovery (nested imports honoring `import_format`) would
//! slot in behind the same trait.

use anteroom_admission::{MemoryLoadRequest, MemoryLoader, MemorySnapshot};
use anyhow::Context;
use async_trait::async_trait;
use tracing::debug;

/// Name of the per-directory context file.
pub(crate) const CONTEXT_FILE_NAME: &str = "ANTEROOM.md";

/// Scans workspace directories for context files.
pub(crate) struct ContextFileLoader;

#[async_trait]
impl MemoryLoader for ContextFileLoader {
    async fn load(&self, request: MemoryLoadRequest) -> anyhow::Result<MemorySnapshot> {
        let limit = request.max_dirs.unwrap_or(usize::MAX);
        let mut content = String::new();
        let mut file_count = 0usize;

        for dir in request.directories.iter().take(limit) {
            let candidate = dir.as_path().join(CONTEXT_FILE_NAME);
            match tokio::fs::read_to_string(&candidate).await {
                Ok(text) => {
                    file_count = file_count.saturating_add(1);
                    content.push_str(&format!("--- context from {} ---\n", candidate.display()));
                    content.push_str(&text);
                    if !text.ends_with('\n') {
                        content.push('\n');
                    }
                },
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {},
                Err(e) => {
                    return Err(e)
                        .with_context(|| format!("failed to read {}", candidate.display()));
                },
            }
        }

        if request.debug {
            debug!(
                file_count,
                working_dir = %request.working_dir,
                "context file scan complete"
            );
        }

        Ok(MemorySnapshot { content, file_count })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anteroom_core::normalize_with_home;
    use tempfile::TempDir;

    fn request(dirs: &[&TempDir]) -> MemoryLoadRequest {
        MemoryLoadRequest {
            working_dir: normalize_with_home(dirs[0].path().to_str().unwrap(), None),
            directories: dirs
                .iter()
                .map(|d| normalize_with_home(d.path().to_str().unwrap(), None))
                .collect(),
            debug: false,
            folder_trust: true,
            import_format: "tree".to_owned(),
            max_dirs: None,
        }
    }

    #[tokio::test]
    async fn collects_context_files_in_directory_order() {
        let a = TempDir::new().unwrap();
        let b = TempDir::new().unwrap();
        std::fs::write(a.path().join(CONTEXT_FILE_NAME), "alpha notes").unwrap();
        std::fs::write(b.path().join(CONTEXT_FILE_NAME), "beta notes\n").unwrap();

        let snapshot = ContextFileLoader.load(request(&[&a, &b])).await.unwrap();
        assert_eq!(snapshot.file_count, 2);
        let alpha = snapshot.content.find("alpha notes").unwrap();
        let beta = snapshot.content.find("beta notes").unwrap();
        assert!(alpha < beta);
    }

    #[tokio::test]
    async fn directories_without_context_files_are_skipped() {
        let a = TempDir::new().unwrap();
        let snapshot = ContextFileLoader.load(request(&[&a])).await.unwrap();
        assert_eq!(snapshot.file_count, 0);
        assert!(snapshot.content.is_empty());
    }

    #[tokio::test]
    async fn max_dirs_caps_the_scan() {
        let a = TempDir::new().unwrap();
        let b = TempDir::new().unwrap();
        std::fs::write(a.path().join(CONTEXT_FILE_NAME), "first").unwrap();
        std::fs::write(b.path().join(CONTEXT_FILE_NAME), "second").unwrap();

        let mut req = request(&[&a, &b]);
        req.max_dirs = Some(1);
        let snapshot = ContextFileLoader.load(req).await.unwrap();
        assert_eq!(snapshot.file_count, 1);
    }
}
