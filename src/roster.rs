#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Group metadata looked up from the digits in a report's file name.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use anyhow::{Context, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{
    config::{GraderConfig, RowLayout},
    constants::{DEFAULT_ROSTER_PATH, MISSING_TOPIC, UNKNOWN_TOPIC},
};

/// First run of ASCII digits.
static GROUP_ID: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").expect("group id regex"));

/// Group id embedded in a file name, e.g. `Group12_final.pdf` → `12`.
pub fn group_id_from_name(file_name: &str) -> Option<String> {
    GROUP_ID.find(file_name).map(|m| m.as_str().to_string())
}

/// `N/A`, for entries without a topic.
fn missing_topic() -> String {
    MISSING_TOPIC.to_string()
}

/// What the roster knows about one group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    /// Report topic.
    #[serde(default = "missing_topic")]
    pub topic:    String,
    /// Student names, in roster order.
    #[serde(default)]
    pub students: Vec<String>,
}

impl RosterEntry {
    /// Returned for group ids the roster does not list.
    pub fn unknown() -> Self {
        Self {
            topic:    UNKNOWN_TOPIC.to_string(),
            students: Vec::new(),
        }
    }
}

/// Group id → entry, read once from JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    /// Entries keyed by the group id as written in the JSON.
    groups: HashMap<String, RosterEntry>,
}

impl Roster {
    /// Builds a roster from entries.
    pub fn new(groups: HashMap<String, RosterEntry>) -> Self {
        Self { groups }
    }

    /// Reads a roster JSON file: an object of `{ "topic": .., "students": [..] }`
    /// keyed by group id.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read roster file {}", path.display()))?;
        let roster: Self = serde_json::from_str(&raw)
            .with_context(|| format!("Could not parse roster file {}", path.display()))?;
        tracing::debug!("loaded {} groups from {}", roster.len(), path.display());
        Ok(roster)
    }

    /// The roster a run with `config` uses: the configured file, `groups.json`
    /// for grouped runs without one, or an empty roster for per-file runs.
    pub fn for_config(config: &GraderConfig) -> Result<Self> {
        match (config.roster_path(), config.layout()) {
            (Some(path), _) => Self::load(path),
            (None, RowLayout::Grouped) => Self::load(&PathBuf::from(DEFAULT_ROSTER_PATH)),
            (None, RowLayout::PerFile) => Ok(Self::default()),
        }
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether the roster lists no groups.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Entry for `group_id`. Keys are matched exactly first, then by numeric
    /// value so `07` finds `7`. Anything else gets [`RosterEntry::unknown`].
    pub fn resolve(&self, group_id: Option<&str>) -> RosterEntry {
        let Some(id) = group_id else {
            return RosterEntry::unknown();
        };
        if let Some(entry) = self.groups.get(id) {
            return entry.clone();
        }
        let Ok(wanted) = id.parse::<u64>() else {
            return RosterEntry::unknown();
        };
        self.groups
            .iter()
            .find(|(key, _)| key.trim().parse::<u64>().is_ok_and(|k| k == wanted))
            .map(|(_, entry)| entry.clone())
            .unwrap_or_else(RosterEntry::unknown)
    }
}
