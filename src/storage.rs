//! Client-side key/value storage, the daemon's analogue of the browser's
//! localStorage: a flat JSON object persisted in the workspace directory.
//!
//! Record collections never touch this file. The only key written in
//! practice is the admin-session flag, which is also the only state that
//! survives a daemon restart.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Context;

const STORAGE_FILE: &str = "site-storage.json";

pub struct ClientStorage {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl ClientStorage {
    /// Open (or create) the storage file under `workspace`.
    ///
    /// A file that fails to parse is treated as empty rather than as an
    /// error: a corrupted flag must read the same as an absent one.
    pub fn open(workspace: &Path) -> anyhow::Result<Self> {
        std::fs::create_dir_all(workspace)
            .with_context(|| format!("create workspace dir {}", workspace.display()))?;
        let path = workspace.join(STORAGE_FILE);
        let values = match std::fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_default(),
            Err(_) => BTreeMap::new(),
        };
        Ok(Self { path, values })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.persist()
    }

    pub fn remove(&mut self, key: &str) -> anyhow::Result<()> {
        self.values.remove(key);
        self.persist()
    }

    fn persist(&self) -> anyhow::Result<()> {
        let raw = serde_json::to_string_pretty(&self.values)?;
        std::fs::write(&self.path, raw)
            .with_context(|| format!("write {}", self.path.display()))?;
        Ok(())
    }
}
