//! JSON manifest summarizing one search run.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::driver::{SearchOptions, SearchStats};
use crate::SearchError;

/// Written next to the candidate output when requested, so a long run can
/// be audited and resumed with the right skip counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunManifest {
    pub run_id: String,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub options: SearchOptions,
    pub stats: SearchStats,
}

impl RunManifest {
    pub fn write(&self, path: &Path) -> Result<(), SearchError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn load(path: &Path) -> Result<RunManifest, SearchError> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }
}
