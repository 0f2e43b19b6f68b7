//! File storage for signed commitment terms.
//!
//! Files live flat under one directory, named by
//! [`internhub_core::commitment_term::storage_filename`]. Metadata is kept in
//! the `commitment_terms` table; this module only moves bytes.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use uuid::Uuid;

/// Directory-backed store for commitment-term files.
#[derive(Debug, Clone)]
pub struct TermStorage {
    root: Arc<PathBuf>,
}

/// Bytes written under a private temporary name, not yet visible at their
/// final path. Finish with [`TermStorage::commit`] or [`TermStorage::discard`].
#[derive(Debug)]
pub struct StagedFile {
    partial: PathBuf,
    target: PathBuf,
}

impl StagedFile {
    /// Where the file will live once committed.
    pub fn target(&self) -> &Path {
        &self.target
    }
}

impl TermStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Arc::new(root.into()),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Write `data` next to its final location under a unique hidden name,
    /// creating the storage directory on first use. Nothing at the final
    /// path is touched.
    pub async fn stage(&self, file_name: &str, data: &[u8]) -> io::Result<StagedFile> {
        tokio::fs::create_dir_all(self.root.as_path()).await?;

        let target = self.root.join(file_name);
        let partial = self
            .root
            .join(format!(".{file_name}.{}.part", Uuid::new_v4().simple()));
        tokio::fs::write(&partial, data).await?;

        Ok(StagedFile { partial, target })
    }

    /// Move a staged file to its final path, replacing any file already
    /// there.
    pub async fn commit(&self, staged: StagedFile) -> io::Result<PathBuf> {
        tokio::fs::rename(&staged.partial, &staged.target).await?;
        tracing::debug!(path = %staged.target.display(), "Stored commitment term file");
        Ok(staged.target)
    }

    /// Drop a staged file without publishing it.
    pub async fn discard(&self, staged: StagedFile) -> io::Result<()> {
        self.remove(&staged.partial).await
    }

    /// Read a stored file fully into memory.
    pub async fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        tokio::fs::read(path).await
    }

    /// Delete a stored file. A file that is already gone is not an error.
    pub async fn remove(&self, path: &Path) -> io::Result<()> {
        match tokio::fs::remove_file(path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}
