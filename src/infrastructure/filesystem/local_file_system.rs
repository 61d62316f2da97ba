use crate::domain::entities::file_entry::FileEntry;
use crate::domain::errors::file_system_error::FileSystemError;
use crate::domain::ports::secondary::file_system::FileSystemRepository;
use chrono::{DateTime, Utc};
use jwalk::WalkDir;
use std::fs::{self, Metadata};
use std::io;
use std::path::Path;
use tracing::{debug, warn};

/// [`FileSystemRepository`] over the local disk.
pub struct LocalFileSystem;

fn modification_time(metadata: &Metadata) -> Option<i64> {
    metadata
        .modified()
        .ok()
        .map(|modified| DateTime::<Utc>::from(modified).timestamp())
}

fn entry_from_metadata(path: &Path, metadata: &Metadata) -> FileEntry {
    let modified = modification_time(metadata);
    if metadata.is_dir() {
        FileEntry::directory(path.to_path_buf(), modified)
    } else {
        FileEntry::file(path.to_path_buf(), metadata.len(), modified)
    }
}

fn copy_error(from: &Path, to: &Path, source: io::Error) -> FileSystemError {
    FileSystemError::CopyMove {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    }
}

fn ensure_vacant(to: &Path) -> Result<(), FileSystemError> {
    if fs::symlink_metadata(to).is_ok() {
        return Err(FileSystemError::Conflict {
            path: to.to_path_buf(),
        });
    }
    Ok(())
}

fn copy_recursively(from: &Path, to: &Path) -> io::Result<()> {
    if !fs::metadata(from)?.is_dir() {
        fs::copy(from, to)?;
        return Ok(());
    }

    for entry in WalkDir::new(from).skip_hidden(false).sort(true) {
        let entry = entry.map_err(|err| io::Error::other(err.to_string()))?;
        let source = entry.path();
        let relative = source.strip_prefix(from).map_err(io::Error::other)?;
        let target = to.join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            fs::copy(&source, &target)?;
        }
    }
    Ok(())
}

fn remove(path: &Path) -> io::Result<()> {
    if fs::symlink_metadata(path)?.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    }
}

impl FileSystemRepository for LocalFileSystem {
    fn list(&self, path: &Path) -> Result<Vec<FileEntry>, FileSystemError> {
        let metadata = fs::metadata(path).map_err(|source| FileSystemError::DirectoryRead {
            path: path.to_path_buf(),
            source,
        })?;
        if !metadata.is_dir() {
            return Err(FileSystemError::NotADirectory {
                path: path.to_path_buf(),
            });
        }

        let read_dir = fs::read_dir(path).map_err(|source| FileSystemError::DirectoryRead {
            path: path.to_path_buf(),
            source,
        })?;

        let mut entries = Vec::new();
        for dir_entry in read_dir {
            let dir_entry = match dir_entry {
                Ok(dir_entry) => dir_entry,
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "Skipping unreadable entry");
                    continue;
                }
            };
            let child = dir_entry.path();
            match fs::metadata(&child) {
                Ok(metadata) => entries.push(entry_from_metadata(&child, &metadata)),
                Err(err) => warn!(path = %child.display(), error = %err, "Skipping entry"),
            }
        }
        debug!(path = %path.display(), count = entries.len(), "Listed directory");
        Ok(entries)
    }

    fn create_directory(&self, path: &Path) -> Result<(), FileSystemError> {
        fs::create_dir_all(path).map_err(|source| FileSystemError::Create {
            path: path.to_path_buf(),
            source,
        })
    }

    fn create_file(&self, path: &Path, content: &str) -> Result<(), FileSystemError> {
        fs::write(path, content).map_err(|source| FileSystemError::Create {
            path: path.to_path_buf(),
            source,
        })
    }

    fn delete_entry(&self, path: &Path) -> Result<(), FileSystemError> {
        remove(path).map_err(|source| FileSystemError::Delete {
            path: path.to_path_buf(),
            source,
        })
    }

    fn move_entry(&self, from: &Path, to: &Path) -> Result<(), FileSystemError> {
        ensure_vacant(to)?;
        match fs::rename(from, to) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::CrossesDevices => {
                debug!(from = %from.display(), to = %to.display(), "Rename across devices, copying");
                copy_recursively(from, to)
                    .and_then(|()| remove(from))
                    .map_err(|source| copy_error(from, to, source))
            }
            Err(source) => Err(copy_error(from, to, source)),
        }
    }

    fn copy_entry(&self, from: &Path, to: &Path) -> Result<(), FileSystemError> {
        ensure_vacant(to)?;
        copy_recursively(from, to).map_err(|source| copy_error(from, to, source))
    }

    fn read_text(&self, path: &Path) -> Result<String, FileSystemError> {
        fs::read_to_string(path).map_err(|source| FileSystemError::ReadWrite {
            path: path.to_path_buf(),
            source,
        })
    }

    fn write_text(&self, path: &Path, content: &str) -> Result<(), FileSystemError> {
        fs::write(path, content).map_err(|source| FileSystemError::ReadWrite {
            path: path.to_path_buf(),
            source,
        })
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}
