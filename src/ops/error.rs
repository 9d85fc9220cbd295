// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Mutation results and the status-pair boundary.
//!
//! Mutators return `Result<MutationReport, MutationError>`. Hosts that want
//! the flat `(folder, message)` pair go through [`into_status`], which never
//! fails: errors become an empty folder plus the error's message.

use crate::models::settings::MediaKind;
use std::fmt;
use std::path::PathBuf;

/// Why a mutation was refused or could not finish.
#[derive(Debug, thiserror::Error)]
pub enum MutationError {
    #[error("path must not be empty.")]
    PathEmpty,

    #[error("path does not exist: {}", .0.display())]
    PathNotFound(PathBuf),

    #[error("missing file: {}", .0.display())]
    FileMissing(PathBuf),

    #[error("error: failed to parse {}: {source}", file.display())]
    Parse {
        file: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("error: invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("error: {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl MutationError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        MutationError::Io {
            path: path.into(),
            source,
        }
    }
}

/// What a successful mutation appended.
#[derive(Debug, Clone, PartialEq)]
pub struct MutationReport {
    pub folder: PathBuf,
    pub kind: MediaKind,
    pub material_id: String,
    pub track_id: String,
    pub clip_id: String,
    pub start_time: f64,
    pub duration: f64,
}

impl fmt::Display for MutationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            MediaKind::Audio => write!(
                f,
                "audio added as {}, duration set to {}s",
                self.material_id, self.duration
            ),
            kind => write!(
                f,
                "{} added as {}, {}s starting at {}s",
                kind, self.material_id, self.duration, self.start_time
            ),
        }
    }
}

/// Flatten a mutation result into `(folder or "", status message)`.
pub fn into_status(result: Result<MutationReport, MutationError>) -> (String, String) {
    match result {
        Ok(report) => (report.folder.display().to_string(), report.to_string()),
        Err(e) => {
            log::warn!("Draft mutation refused: {}", e);
            (String::new(), e.to_string())
        }
    }
}
