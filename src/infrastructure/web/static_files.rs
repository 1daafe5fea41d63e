use actix_files::NamedFile;
use std::{
    io,
    path::{Component, Path, PathBuf},
};
use tokio::fs;

const INDEX_FILE: &str = "index.html";

/// Built UI bundle on disk. Unknown paths fall back to `index.html` so the
/// client-side router can take over.
#[derive(Debug, Clone)]
pub struct StaticAssets {
    root: PathBuf,
}

impl StaticAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        StaticAssets { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Maps a raw URL path onto a file below the root, percent-decoding it
    /// first. Returns `None` for undecodable paths and ones that try to climb
    /// out of the root.
    pub fn resolve(&self, request_path: &str) -> Option<PathBuf> {
        let decoded = urlencoding::decode(request_path).ok()?;
        let relative = Path::new(decoded.trim_start_matches('/'));
        let mut resolved = self.root.clone();

        for component in relative.components() {
            match component {
                Component::Normal(part) => resolved.push(part),
                Component::CurDir => {}
                _ => return None,
            }
        }

        Some(resolved)
    }

    pub async fn load(&self, request_path: &str) -> io::Result<NamedFile> {
        if let Some(path) = self.resolve(request_path) {
            if fs::metadata(&path).await.map(|m| m.is_file()).unwrap_or(false) {
                return NamedFile::open_async(path).await;
            }
        }

        NamedFile::open_async(self.root.join(INDEX_FILE)).await
    }
}
