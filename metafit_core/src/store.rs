//! Program persistence over an injected key-value storage capability.
//!
//! The storage collaborator only needs `get`/`set` on string records;
//! everything else (serialization, keying by tier, lazy creation,
//! degraded-mode tracking) lives here. `MemoryStore` backs tests and
//! ephemeral sessions, `FileStore` gives the CLI durable storage with
//! atomic writes and file locking.

use crate::catalog::WorkoutCatalog;
use crate::plan::generate_program;
use crate::types::{ProgramState, Tier};
use crate::{Error, Result};
use fs2::FileExt;
use std::collections::HashMap;
use std::fs::File;
use std::io::{Read, Write};
use std::path::PathBuf;
use tempfile::NamedTempFile;

// ============================================================================
// Key-Value Storage Capability
// ============================================================================

/// Minimal durable string-record storage
pub trait KeyValueStore {
    /// Fetch a record, or None if the key has never been written
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace a record. Must be atomic from the caller's perspective:
    /// either the whole value is stored or the prior value remains.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-memory store for tests and ephemeral sessions
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    records: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.records.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.records.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-backed store: one JSON document per key under a root directory.
///
/// Writes go through a temp file in the same directory and are renamed
/// into place, so a record is never observable half-written.
#[derive(Clone, Debug)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Keys may contain `:` which is awkward in filenames
    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key.replace(':', "-")))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }

        let file = File::open(&path)
            .map_err(|e| Error::Storage(format!("open {:?}: {}", path, e)))?;
        file.lock_shared()
            .map_err(|e| Error::Storage(format!("lock {:?}: {}", path, e)))?;

        let mut contents = String::new();
        let mut reader = std::io::BufReader::new(&file);
        let read = reader.read_to_string(&mut contents);
        let _ = file.unlock();
        read.map_err(|e| Error::Storage(format!("read {:?}: {}", path, e)))?;

        Ok(Some(contents))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        std::fs::create_dir_all(&self.root)
            .map_err(|e| Error::Storage(format!("create {:?}: {}", self.root, e)))?;

        let path = self.path_for(key);
        let temp = NamedTempFile::new_in(&self.root)
            .map_err(|e| Error::Storage(format!("temp file in {:?}: {}", self.root, e)))?;

        temp.as_file()
            .lock_exclusive()
            .map_err(|e| Error::Storage(format!("lock temp file: {}", e)))?;

        let write = (|| {
            let mut writer = std::io::BufWriter::new(temp.as_file());
            writer.write_all(value.as_bytes())?;
            writer.flush()?;
            temp.as_file().sync_all()
        })();
        let _ = temp.as_file().unlock();
        write.map_err(|e| Error::Storage(format!("write {:?}: {}", path, e)))?;

        temp.persist(&path)
            .map_err(|e| Error::Storage(format!("persist {:?}: {}", path, e.error)))?;

        tracing::debug!("Wrote record '{}' to {:?}", key, path);
        Ok(())
    }
}

// ============================================================================
// Program Store
// ============================================================================

/// Tier-keyed persistence for program state.
///
/// Storage failures on save are remembered as degraded mode: the caller
/// keeps operating from memory, but progress will not survive a restart
/// until a save succeeds again.
#[derive(Clone, Debug)]
pub struct ProgramStore<S: KeyValueStore> {
    store: S,
    degraded: bool,
}

fn program_key(tier: Tier) -> String {
    format!("program:{}", tier.key())
}

impl<S: KeyValueStore> ProgramStore<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            degraded: false,
        }
    }

    /// True once a save has failed and not yet succeeded again
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    /// Load the persisted program for a tier, or None if absent.
    ///
    /// A record that no longer parses or violates the program shape is
    /// treated as absent (with a warning) so the caller regenerates it.
    pub fn load(&self, tier: Tier) -> Result<Option<ProgramState>> {
        let raw = match self.store.get(&program_key(tier))? {
            Some(raw) => raw,
            None => return Ok(None),
        };

        let state: ProgramState = match serde_json::from_str(&raw) {
            Ok(state) => state,
            Err(e) => {
                tracing::warn!(
                    "Stored program for tier '{}' failed to parse: {}. Treating as absent.",
                    tier,
                    e
                );
                return Ok(None);
            }
        };

        if state.tier != tier {
            tracing::warn!(
                "Stored program under key for tier '{}' claims tier '{}'. Treating as absent.",
                tier,
                state.tier
            );
            return Ok(None);
        }

        let errors = state.validate();
        if !errors.is_empty() {
            tracing::warn!(
                "Stored program for tier '{}' is malformed ({:?}). Treating as absent.",
                tier,
                errors
            );
            return Ok(None);
        }

        Ok(Some(state))
    }

    /// Persist the full program, overwriting any prior value
    pub fn save(&mut self, tier: Tier, state: &ProgramState) -> Result<()> {
        let raw = serde_json::to_string(state)?;
        match self.store.set(&program_key(tier), &raw) {
            Ok(()) => {
                self.degraded = false;
                Ok(())
            }
            Err(e) => {
                self.degraded = true;
                Err(e)
            }
        }
    }

    /// Load the tier's program, generating and persisting a fresh one if
    /// absent. The sole creation path: repeated calls without intervening
    /// mutation return identical state.
    ///
    /// Storage trouble never aborts this: an unreadable store behaves as
    /// absent, and a failed save of the fresh program leaves the session
    /// running from memory in degraded mode.
    pub fn ensure(&mut self, catalog: &WorkoutCatalog, tier: Tier) -> Result<ProgramState> {
        let existing = match self.load(tier) {
            Ok(found) => found,
            Err(Error::Storage(e)) => {
                tracing::warn!(
                    "Storage unavailable loading program for tier '{}': {}. Generating fresh.",
                    tier,
                    e
                );
                None
            }
            Err(e) => return Err(e),
        };

        if let Some(state) = existing {
            tracing::debug!("Loaded existing program for tier '{}'", tier);
            return Ok(state);
        }

        let state = generate_program(catalog, tier);
        if let Err(e) = self.save(tier, &state) {
            tracing::warn!(
                "Could not persist fresh program for tier '{}': {}. Continuing in memory.",
                tier,
                e
            );
        }
        Ok(state)
    }
}
