//! Candidate record persistence
//!
//! The store assigns ids and keeps records; ranking reads them back with
//! `all()` and does not depend on the order they come back in.

use crate::error::{RankerError, Result};
use crate::processing::document::CandidateRecord;
use chrono::{DateTime, Utc};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredCandidate {
    pub id: u64,
    /// File the record was built from
    pub source: String,
    pub ingested_at: DateTime<Utc>,
    pub record: CandidateRecord,
}

impl AsRef<CandidateRecord> for StoredCandidate {
    fn as_ref(&self) -> &CandidateRecord {
        &self.record
    }
}

pub trait CandidateStore {
    /// Stores `record` and returns its new id
    fn insert(&mut self, source: &str, record: CandidateRecord) -> Result<u64>;
    fn get(&self, id: u64) -> Result<StoredCandidate>;
    fn all(&self) -> Vec<StoredCandidate>;
    /// Removes every record, returning how many were dropped
    fn clear(&mut self) -> Result<usize>;
}

#[derive(Debug, Serialize, Deserialize)]
struct StoreFile {
    next_id: u64,
    candidates: Vec<StoredCandidate>,
}

/// JSON file holding every record, rewritten on each change
pub struct JsonFileStore {
    path: PathBuf,
    contents: StoreFile,
}

impl JsonFileStore {
    /// Opens the store at `path`; a missing file is an empty store
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let contents = if path.exists() {
            let raw = std::fs::read_to_string(&path)?;
            serde_json::from_str(&raw).map_err(|e| {
                RankerError::Store(format!("Corrupt record store {}: {}", path.display(), e))
            })?
        } else {
            StoreFile {
                next_id: 1,
                candidates: Vec::new(),
            }
        };

        debug!(
            "Opened record store {} with {} records",
            path.display(),
            contents.candidates.len()
        );
        Ok(Self { path, contents })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.contents.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.candidates.is_empty()
    }

    /// Inserts several records with a single write
    pub fn insert_many<I>(&mut self, records: I) -> Result<Vec<u64>>
    where
        I: IntoIterator<Item = (String, CandidateRecord)>,
    {
        let ids = records
            .into_iter()
            .map(|(source, record)| self.push(source, record))
            .collect();
        self.persist()?;
        Ok(ids)
    }

    fn push(&mut self, source: String, record: CandidateRecord) -> u64 {
        let id = self.contents.next_id;
        self.contents.next_id += 1;
        self.contents.candidates.push(StoredCandidate {
            id,
            source,
            ingested_at: Utc::now(),
            record,
        });
        id
    }

    fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(&self.contents)?;
        let staging = self.path.with_extension("json.tmp");
        std::fs::write(&staging, json)?;
        std::fs::rename(&staging, &self.path)?;
        Ok(())
    }
}

impl CandidateStore for JsonFileStore {
    fn insert(&mut self, source: &str, record: CandidateRecord) -> Result<u64> {
        let id = self.push(source.to_string(), record);
        self.persist()?;
        Ok(id)
    }

    fn get(&self, id: u64) -> Result<StoredCandidate> {
        self.contents
            .candidates
            .iter()
            .find(|candidate| candidate.id == id)
            .cloned()
            .ok_or(RankerError::RecordNotFound(id))
    }

    fn all(&self) -> Vec<StoredCandidate> {
        self.contents.candidates.clone()
    }

    fn clear(&mut self) -> Result<usize> {
        let removed = self.contents.candidates.len();
        self.contents.candidates.clear();
        self.persist()?;
        info!("Removed {} records from {}", removed, self.path.display());
        Ok(removed)
    }
}
