//! Local-filesystem provider.

use std::fs::{self, File};
use std::path::Path;

use filetime::FileTime;

use crate::error::AccessError;
use crate::provider::{FileAccess, FileMeta, ReadHandle, WriteHandle};

/// [`FileAccess`] implementation backed by the local filesystem.
///
/// This is the provider the `logtail` binary runs against. It is stateless;
/// construct one and share it freely.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Creates a new local-filesystem provider.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl FileAccess for LocalFs {
    fn exists(&self, path: &Path) -> Result<bool, AccessError> {
        path.try_exists()
            .map_err(|error| AccessError::probe(path.to_path_buf(), error))
    }

    fn stat(&self, path: &Path) -> Result<FileMeta, AccessError> {
        let metadata =
            fs::metadata(path).map_err(|error| AccessError::stat(path.to_path_buf(), error))?;
        Ok(FileMeta {
            size: metadata.len(),
            mtime: FileTime::from_last_modification_time(&metadata),
        })
    }

    #[cfg(unix)]
    fn inode(&self, path: &Path) -> Result<u64, AccessError> {
        use std::os::unix::fs::MetadataExt;

        let metadata =
            fs::metadata(path).map_err(|error| AccessError::inode(path.to_path_buf(), error))?;
        Ok(metadata.ino())
    }

    #[cfg(not(unix))]
    fn inode(&self, path: &Path) -> Result<u64, AccessError> {
        Err(AccessError::unsupported(path.to_path_buf(), "inode"))
    }

    fn list_dir(&self, dir: &Path) -> Result<Vec<String>, AccessError> {
        let read_dir =
            fs::read_dir(dir).map_err(|error| AccessError::list_dir(dir.to_path_buf(), error))?;
        let mut names = Vec::new();
        for entry in read_dir {
            let entry =
                entry.map_err(|error| AccessError::list_dir_entry(dir.to_path_buf(), error))?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        names.sort();
        Ok(names)
    }

    fn open_read(&self, path: &Path) -> Result<ReadHandle, AccessError> {
        let file =
            File::open(path).map_err(|error| AccessError::open(path.to_path_buf(), error))?;
        Ok(Box::new(file))
    }

    fn open_write(&self, path: &Path) -> Result<WriteHandle, AccessError> {
        let file =
            File::create(path).map_err(|error| AccessError::create(path.to_path_buf(), error))?;
        Ok(Box::new(file))
    }
}
