//! File helpers for the settings document.

use std::{
    fs::{self, OpenOptions},
    io::{self, Write},
    path::Path,
};

/// Outcome of [`write_file_if_absent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteIfAbsentStatus {
    /// A file already existed; nothing was written.
    Existing,
    /// The file was created with the supplied content.
    Created,
}

/// Write `content` to `path` unless a file is already there.
///
/// Missing parent directories are created. An existing file is never
/// truncated, even if it is empty.
pub fn write_file_if_absent(path: &Path, content: &str) -> Result<WriteIfAbsentStatus, io::Error> {
    if path.exists() {
        return Ok(WriteIfAbsentStatus::Existing);
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
            return Ok(WriteIfAbsentStatus::Existing)
        }
        Err(err) => return Err(err),
    };
    file.write_all(content.as_bytes())?;
    if !content.ends_with('\n') {
        file.write_all(b"\n")?;
    }
    file.flush()?;

    Ok(WriteIfAbsentStatus::Created)
}
