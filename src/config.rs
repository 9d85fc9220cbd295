// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Host configuration.
//!
//! The host builds one [`DraftConfig`] at startup (from defaults, a YAML file,
//! or command line flags) and passes it into every operation. Nothing in the
//! operations reads the environment on its own.

use crate::io::paths::drafts_dir_under;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// What to do when today's folder for a project name already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollisionPolicy {
    /// Reuse the folder and rewrite both documents.
    #[default]
    Overwrite,
    /// Pick the first free `<name>_2`, `<name>_3`, ...
    Suffix,
    /// Refuse to create the draft.
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DraftConfig {
    /// Root used when the caller passes an empty or missing draft root.
    pub draft_root: PathBuf,
    /// Refresh `modifyTime` whenever a mutation rewrites a draft.
    pub touch_modify_time: bool,
    pub on_collision: CollisionPolicy,
}

impl Default for DraftConfig {
    fn default() -> Self {
        Self {
            draft_root: Self::default_root(),
            touch_modify_time: false,
            on_collision: CollisionPolicy::default(),
        }
    }
}

impl DraftConfig {
    /// `<home>/Documents/JianyingPro/Drafts`, or a relative `Drafts` folder
    /// when the home directory is unknown.
    pub fn default_root() -> PathBuf {
        match dirs_next::home_dir() {
            Some(home) => drafts_dir_under(&home),
            None => PathBuf::from("Drafts"),
        }
    }

    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            draft_root: root.into(),
            ..Self::default()
        }
    }

    /// Load a YAML config file. Missing keys fall back to defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let yaml = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config = serde_yaml::from_str(&yaml)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        Ok(config)
    }

    /// Save as YAML.
    pub fn save(&self, path: &Path) -> Result<()> {
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, yaml)
            .with_context(|| format!("Failed to write config {}", path.display()))?;
        Ok(())
    }
}
