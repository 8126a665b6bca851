//! Local filesystem output for rendered pages.
//!
//! ## Layout
//!
//! ```text
//! {root}/
//! ├── 20261018_Priority.html
//! ├── 20261018_Main.html
//! └── 20261018_Interest.html
//! ```

use std::path::{Path, PathBuf};

use tokio::io::AsyncWriteExt;

use crate::error::Result;

/// Writes dated HTML pages into a directory.
#[derive(Debug, Clone)]
pub struct LocalOutput {
    root_dir: PathBuf,
}

impl LocalOutput {
    /// Create an output rooted at the given directory.
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
        }
    }

    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    /// File name for a page, e.g. `20261018_Priority.html`.
    pub fn file_name(stamp: &str, label: &str) -> String {
        format!("{stamp}_{label}.html")
    }

    /// Write a page and return its final path.
    pub async fn write_page(&self, stamp: &str, label: &str, html: &str) -> Result<PathBuf> {
        let path = self.root_dir.join(Self::file_name(stamp, label));
        self.write_bytes(&path, html.as_bytes()).await?;
        log::info!("Wrote {}", path.display());
        Ok(path)
    }

    /// Write bytes atomically (write to temp, then rename).
    async fn write_bytes(&self, path: &Path, bytes: &[u8]) -> Result<()> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let tmp = path.with_extension("tmp");
        let mut file = tokio::fs::File::create(&tmp).await?;
        file.write_all(bytes).await?;
        file.flush().await?;
        drop(file);

        tokio::fs::rename(&tmp, path).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name() {
        assert_eq!(
            LocalOutput::file_name("20261018", "Priority"),
            "20261018_Priority.html"
        );
    }

    #[tokio::test]
    async fn test_write_page_creates_dir() {
        let dir = tempfile::tempdir().unwrap();
        let output = LocalOutput::new(dir.path().join("out"));

        let path = output
            .write_page("20261018", "Main", "<!doctype html>")
            .await
            .unwrap();

        assert_eq!(path, dir.path().join("out/20261018_Main.html"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<!doctype html>");
        assert!(!dir.path().join("out/20261018_Main.tmp").exists());
    }

    #[tokio::test]
    async fn test_write_page_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let output = LocalOutput::new(dir.path());

        output.write_page("20261018", "Main", "old").await.unwrap();
        let path = output.write_page("20261018", "Main", "new").await.unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "new");
    }
}
