// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! A loaded draft document pair.
//!
//! Every mutation is one full read-modify-write cycle through [`DraftPair`]:
//! `open` validates the folder and parses both documents, the caller appends,
//! and `save` rewrites both files. No state survives between calls.

use super::error::{MutationError, MutationReport};
use crate::io::paths::{content_path, meta_path, normalize};
use crate::io::serialization::to_document_text;
use crate::models::{
    content::{Clip, DraftContent, MaterialRecord, Track},
    meta::{DraftMaterialStub, MetaInfo},
    settings::MediaKind,
};
use crate::util::ids;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct DraftPair {
    pub folder: PathBuf,
    pub meta: MetaInfo,
    pub content: DraftContent,
}

/// A new material plus the single-clip track that places it.
#[derive(Debug, Clone)]
pub struct Placement {
    pub kind: MediaKind,
    pub record: MaterialRecord,
    pub clip: Clip,
}

impl DraftPair {
    /// Validate `folder` and load both documents.
    ///
    /// Checks run in order and the first failure is returned: empty path,
    /// missing folder, missing metadata file, missing content file, then
    /// read and parse errors.
    pub fn open(folder: &str) -> Result<Self, MutationError> {
        if folder.is_empty() {
            return Err(MutationError::PathEmpty);
        }

        let folder = normalize(Path::new(folder));
        if !folder.exists() {
            return Err(MutationError::PathNotFound(folder));
        }

        let meta_file = meta_path(&folder);
        if !meta_file.is_file() {
            return Err(MutationError::FileMissing(meta_file));
        }
        let content_file = content_path(&folder);
        if !content_file.is_file() {
            return Err(MutationError::FileMissing(content_file));
        }

        let meta = read_document(&meta_file)?;
        let content = read_document(&content_file)?;
        log::debug!("Loaded draft {}", folder.display());

        Ok(Self {
            folder,
            meta,
            content,
        })
    }

    /// Append a material, its stub, and a one-clip track referencing it.
    ///
    /// The clip's `materialId` is overwritten with the record's id so the
    /// three entries can't disagree.
    pub fn append(&mut self, placement: Placement) -> MutationReport {
        let Placement {
            kind,
            record,
            mut clip,
        } = placement;

        let material_id = record.id.clone();
        let track_id = ids::track_id(&material_id);
        clip.material_id = material_id.clone();

        let report = MutationReport {
            folder: self.folder.clone(),
            kind,
            material_id: material_id.clone(),
            track_id: track_id.clone(),
            clip_id: clip.id.clone(),
            start_time: clip.start_time,
            duration: clip.duration,
        };

        self.meta
            .push_material(DraftMaterialStub::new(&material_id, &record.path, kind));
        self.content.materials.push(kind, record);
        self.content
            .tracks
            .push(Track::with_clip(track_id, kind.track_type(), clip));

        report
    }

    /// Set `modifyTime`.
    pub fn touch(&mut self, timestamp: String) {
        self.meta.modify_time = timestamp;
    }

    /// Overwrite both documents in place, metadata first.
    pub fn save(&self) -> Result<(), MutationError> {
        write_document(&self.meta, &meta_path(&self.folder))?;
        write_document(&self.content, &content_path(&self.folder))?;
        Ok(())
    }
}

fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T, MutationError> {
    let text = std::fs::read_to_string(path).map_err(|e| MutationError::io(path, e))?;
    serde_json::from_str(&text).map_err(|source| MutationError::Parse {
        file: path.to_path_buf(),
        source,
    })
}

fn write_document<T: Serialize>(data: &T, path: &Path) -> Result<(), MutationError> {
    let text = to_document_text(data).map_err(|source| MutationError::Parse {
        file: path.to_path_buf(),
        source,
    })?;
    std::fs::write(path, text).map_err(|e| MutationError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::paths::{CONTENT_FILE, META_FILE};
    use tempfile::TempDir;

    #[test]
    fn test_open_empty_path() {
        assert!(matches!(DraftPair::open(""), Err(MutationError::PathEmpty)));
    }

    #[test]
    fn test_open_missing_folder() {
        let err = DraftPair::open("/nonexistent/dir").unwrap_err();
        assert!(matches!(err, MutationError::PathNotFound(_)));
        assert!(err.to_string().contains("/nonexistent/dir"));
    }

    #[test]
    fn test_open_reports_meta_before_content() {
        let dir = TempDir::new().unwrap();
        let folder = dir.path().to_str().unwrap();

        match DraftPair::open(folder) {
            Err(MutationError::FileMissing(path)) => assert!(path.ends_with(META_FILE)),
            other => panic!("unexpected {:?}", other),
        }

        std::fs::write(dir.path().join(META_FILE), "{}").unwrap();
        match DraftPair::open(folder) {
            Err(MutationError::FileMissing(path)) => assert!(path.ends_with(CONTENT_FILE)),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_open_malformed_json() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(META_FILE), "{not json").unwrap();
        std::fs::write(dir.path().join(CONTENT_FILE), "{}").unwrap();

        let err = DraftPair::open(dir.path().to_str().unwrap()).unwrap_err();
        assert!(matches!(err, MutationError::Parse { .. }));
        assert!(err.to_string().starts_with("error: "));
    }
}
