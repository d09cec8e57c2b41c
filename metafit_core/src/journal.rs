//! Append-only progress journal.
//!
//! Progress entries (weigh-ins, workout counts, calorie totals) are
//! appended to a JSONL file with file locking so concurrent invocations
//! cannot interleave partial lines.

use crate::Result;
use chrono::{DateTime, Utc};
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// One logged progress observation. Any subset of the measurements may
/// be present.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ProgressEntry {
    pub id: Uuid,
    pub recorded_at: DateTime<Utc>,
    pub weight_kg: Option<f64>,
    pub workouts_completed: Option<u32>,
    pub calories_consumed: Option<u32>,
    pub notes: Option<String>,
}

impl ProgressEntry {
    /// Fresh empty entry stamped with an id and timestamp
    pub fn new(recorded_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            recorded_at,
            weight_kg: None,
            workouts_completed: None,
            calories_consumed: None,
            notes: None,
        }
    }

    /// True when the entry carries no measurement at all
    pub fn is_empty(&self) -> bool {
        self.weight_kg.is_none()
            && self.workouts_completed.is_none()
            && self.calories_consumed.is_none()
            && self.notes.is_none()
    }
}

/// Entry sink trait for persisting progress entries
pub trait EntrySink {
    fn append(&mut self, entry: &ProgressEntry) -> Result<()>;
}

/// JSONL-based entry sink with file locking
pub struct JsonlJournal {
    path: PathBuf,
}

impl JsonlJournal {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Ok(())
    }
}

impl EntrySink for JsonlJournal {
    fn append(&mut self, entry: &ProgressEntry) -> Result<()> {
        self.ensure_parent_dir()?;

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        file.lock_exclusive()?;

        let mut writer = std::io::BufWriter::new(&file);
        let line = serde_json::to_string(entry)?;
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()?;

        file.unlock()?;

        tracing::debug!("Appended progress entry {} to journal", entry.id);
        Ok(())
    }
}

/// Read all entries from a journal file, oldest first.
///
/// Unparseable lines are skipped with a warning rather than failing
/// the whole read.
pub fn read_entries(path: &Path) -> Result<Vec<ProgressEntry>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let file = File::open(path)?;
    file.lock_shared()?;

    let reader = BufReader::new(&file);
    let mut entries = Vec::new();

    for (line_num, line_result) in reader.lines().enumerate() {
        let line = line_result?;
        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<ProgressEntry>(&line) {
            Ok(entry) => entries.push(entry),
            Err(e) => {
                tracing::warn!("Failed to parse journal line {}: {}", line_num + 1, e);
            }
        }
    }

    file.unlock()?;
    tracing::debug!("Read {} entries from journal", entries.len());
    Ok(entries)
}
