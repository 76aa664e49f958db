// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow, bail};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

pub mod seed;
pub mod tickets;

pub use seed::*;
pub use tickets::*;

pub const APP_NAME: &str = "tablero";

/// Best-effort local key-value persistence. Each key maps to one JSON file
/// under the data directory (or one slot of a shared in-memory map for
/// `--demo` and tests).
///
/// Contract: neither `load` nor `save` ever errors outward. A missing file,
/// an unreadable directory, a corrupt payload, or a failed write degrades to
/// `None` / a no-op, and the owning collections keep working in memory only.
/// Persistence here is convenience, never a correctness requirement.
#[derive(Debug, Clone)]
pub struct Store {
    backend: Backend,
}

#[derive(Debug, Clone)]
enum Backend {
    Dir(PathBuf),
    Memory(Rc<RefCell<BTreeMap<String, String>>>),
}

impl Store {
    pub fn open(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            backend: Backend::Dir(data_dir.into()),
        }
    }

    /// Shared in-memory store; clones see each other's writes, which lets a
    /// queue and a test observe the same slots.
    pub fn open_memory() -> Self {
        Self {
            backend: Backend::Memory(Rc::new(RefCell::new(BTreeMap::new()))),
        }
    }

    pub fn is_memory(&self) -> bool {
        matches!(self.backend, Backend::Memory(_))
    }

    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match &self.backend {
            Backend::Dir(dir) => fs::read_to_string(key_path(dir, key)).ok()?,
            Backend::Memory(slots) => slots.borrow().get(&sanitize_key(key)).cloned()?,
        };
        serde_json::from_str(&raw).ok()
    }

    pub fn save<T: Serialize>(&self, key: &str, value: &T) {
        let Ok(raw) = serde_json::to_string(value) else {
            return;
        };
        match &self.backend {
            Backend::Dir(dir) => {
                if fs::create_dir_all(dir).is_err() {
                    return;
                }
                let _ = fs::write(key_path(dir, key), raw);
            }
            Backend::Memory(slots) => {
                slots.borrow_mut().insert(sanitize_key(key), raw);
            }
        }
    }
}

fn key_path(dir: &Path, key: &str) -> PathBuf {
    dir.join(format!("{}.json", sanitize_key(key)))
}

fn sanitize_key(key: &str) -> String {
    key.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect()
}

/// Resolve the data directory: `TABLERO_DATA_DIR`, then the platform data
/// dir under the app name.
pub fn default_data_dir() -> Result<PathBuf> {
    if let Some(dir) = env::var_os("TABLERO_DATA_DIR") {
        return Ok(PathBuf::from(dir));
    }
    let data_root = dirs::data_dir().ok_or_else(|| {
        anyhow!("cannot resolve data directory; set TABLERO_DATA_DIR to a writable directory")
    })?;
    Ok(data_root.join(APP_NAME))
}

/// Config-level guard: the data dir must look like a plain filesystem path,
/// not a URI.
pub fn validate_data_dir(raw: &str) -> Result<()> {
    if raw.trim().is_empty() {
        bail!("data_dir must not be empty");
    }
    if raw.contains("://") || raw.starts_with("file:") {
        bail!("data_dir {raw:?} looks like a URI; use a plain filesystem path");
    }
    if raw.contains('?') {
        bail!("data_dir {raw:?} contains query syntax; use a plain filesystem path");
    }
    Ok(())
}

/// Create the data directory if needed; used by `--check` so a misconfigured
/// path fails loudly there rather than silently at the store boundary.
pub fn ensure_data_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("create data directory {}", dir.display()))
}

#[cfg(test)]
mod tests {
    use super::{sanitize_key, validate_data_dir};

    #[test]
    fn keys_sanitize_to_filesystem_safe_names() {
        assert_eq!(sanitize_key("help-tickets"), "help-tickets");
        assert_eq!(sanitize_key("Help Tickets/v2"), "help-tickets-v2");
    }

    #[test]
    fn data_dir_validation_rejects_uri_forms() {
        assert!(validate_data_dir("https://example.com/data").is_err());
        assert!(validate_data_dir("file:data").is_err());
        assert!(validate_data_dir("data?mode=ro").is_err());
        assert!(validate_data_dir("").is_err());
        assert!(validate_data_dir("/var/lib/tablero").is_ok());
    }
}
