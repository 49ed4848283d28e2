//! Save and load series history to/from JSON files, e.g. to continue a plot
//! after restarting a notebook kernel.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::data::series::SeriesCollection;
use crate::error::Result;

/// Samples of one group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupState {
    pub name: String,
    pub samples: Vec<f64>,
}

/// Serializable snapshot of every group's series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryState {
    /// RFC 3339 timestamp of when the snapshot was taken.
    pub saved_at: String,
    pub groups: Vec<GroupState>,
}

impl HistoryState {
    pub fn from_history(history: &SeriesCollection) -> Self {
        Self {
            saved_at: chrono::Local::now().to_rfc3339(),
            groups: history
                .iter()
                .map(|(name, samples)| GroupState {
                    name: name.to_string(),
                    samples: samples.to_vec(),
                })
                .collect(),
        }
    }

    pub fn group(&self, name: &str) -> Option<&GroupState> {
        self.groups.iter().find(|g| g.name == name)
    }
}

pub fn state_to_json(state: &HistoryState) -> Result<String> {
    Ok(serde_json::to_string_pretty(state)?)
}

pub fn state_from_json(json: &str) -> Result<HistoryState> {
    Ok(serde_json::from_str(json)?)
}

pub fn save_state_to_path(state: &HistoryState, path: &Path) -> Result<()> {
    let json = state_to_json(state)?;
    std::fs::write(path, json)?;
    Ok(())
}

pub fn load_state_from_path(path: &Path) -> Result<HistoryState> {
    let json = std::fs::read_to_string(path)?;
    state_from_json(&json)
}
