//! Local persistence shim.
//!
//! The original client kept cart and session state in browser local storage
//! as JSON blobs. Here they are JSON files under the configured data
//! directory, with the same read-fully / modify-in-memory / write-wholesale
//! discipline, last writer wins. Writes go through a temp file and rename so
//! a crash never leaves a half-written store behind.

use crate::errors::Result;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Cart file with schema versioning and legacy migration
pub mod cart;
/// Session (user id + token) file
pub mod session;

/// Reads and parses a JSON store file, returning `None` when it does not
/// exist yet.
pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    Ok(Some(serde_json::from_str(&contents)?))
}

/// Serializes a value to a JSON store file, creating parent directories and
/// replacing the file atomically.
pub(crate) fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, serde_json::to_vec_pretty(value)?)?;
    fs::rename(&tmp, path)?;
    Ok(())
}
