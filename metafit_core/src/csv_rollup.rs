//! CSV rollup for archiving the progress journal.
//!
//! Entries are appended to a CSV archive and the journal is renamed
//! aside only after the CSV has reached disk, so a crash mid-rollup
//! never loses entries.

use crate::journal::ProgressEntry;
use crate::Result;
use std::fs::OpenOptions;
use std::path::Path;

/// A row in the CSV output
#[derive(Debug, serde::Serialize)]
struct CsvRow {
    id: String,
    recorded_at: String,
    weight_kg: Option<f64>,
    workouts_completed: Option<u32>,
    calories_consumed: Option<u32>,
    notes: Option<String>,
}

impl From<&ProgressEntry> for CsvRow {
    fn from(entry: &ProgressEntry) -> Self {
        CsvRow {
            id: entry.id.to_string(),
            recorded_at: entry.recorded_at.to_rfc3339(),
            weight_kg: entry.weight_kg,
            workouts_completed: entry.workouts_completed,
            calories_consumed: entry.calories_consumed,
            notes: entry.notes.clone(),
        }
    }
}

/// Roll up journal entries into CSV and archive the journal atomically
///
/// This function:
/// 1. Reads all entries from the journal
/// 2. Appends them to the CSV file (creates with headers if needed)
/// 3. Syncs the CSV to disk
/// 4. Renames the journal to .processed
/// 5. Returns the number of entries processed
pub fn journal_to_csv_and_archive(journal_path: &Path, csv_path: &Path) -> Result<usize> {
    let entries = crate::journal::read_entries(journal_path)?;

    if entries.is_empty() {
        tracing::info!("No entries in journal to roll up");
        return Ok(0);
    }

    if let Some(parent) = csv_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(csv_path)?;

    // Only emit headers when starting a fresh file
    let needs_headers = file.metadata()?.len() == 0;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(needs_headers)
        .from_writer(file);

    for entry in &entries {
        let row = CsvRow::from(entry);
        writer.serialize(row)?;
    }

    writer.flush()?;
    let file = writer
        .into_inner()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
    file.sync_all()?;

    tracing::info!("Wrote {} entries to CSV", entries.len());

    // Archive the journal by renaming it; the CSV is already durable
    let processed_path = journal_path.with_extension("jsonl.processed");
    std::fs::rename(journal_path, &processed_path)?;

    tracing::info!("Archived journal to {:?}", processed_path);

    Ok(entries.len())
}

/// Clean up old processed journal files
///
/// This removes all .processed files in the given directory.
pub fn cleanup_processed_journals(dir: &Path) -> Result<usize> {
    if !dir.exists() {
        return Ok(0);
    }

    let mut count = 0;
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if let Some(extension) = path.extension() {
            if extension == "processed" {
                std::fs::remove_file(&path)?;
                tracing::debug!("Removed processed journal: {:?}", path);
                count += 1;
            }
        }
    }

    if count > 0 {
        tracing::info!("Cleaned up {} processed journal files", count);
    }

    Ok(count)
}
