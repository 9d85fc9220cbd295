// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Draft document serialization and deserialization.
//!
//! Both documents are written as UTF-8, two-space indented JSON with
//! non-ASCII characters kept literally, which is what `serde_json`'s pretty
//! printer produces.

use super::paths::{content_path, meta_path};
use crate::models::{content::DraftContent, meta::MetaInfo};
use anyhow::{Context, Result};
use serde::{de::DeserializeOwned, Serialize};
use std::path::Path;

/// Render a document the way the editor writes it.
pub fn to_document_text<T: Serialize>(data: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(data)
}

/// Export one document to `path`, overwriting it.
pub fn export_json<T: Serialize>(data: &T, path: &Path) -> Result<()> {
    let json = to_document_text(data)?;
    std::fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Import one document from `path`.
pub fn import_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let data = serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(data)
}

/// Write both documents into `folder`, metadata first.
///
/// The two writes are independent: a failure on the second leaves the first
/// already replaced.
pub fn export_pair(folder: &Path, meta: &MetaInfo, content: &DraftContent) -> Result<()> {
    export_json(meta, &meta_path(folder))?;
    export_json(content, &content_path(folder))?;
    Ok(())
}

/// Read both documents from `folder`.
pub fn import_pair(folder: &Path) -> Result<(MetaInfo, DraftContent)> {
    let meta = import_json(&meta_path(folder))?;
    let content = import_json(&content_path(folder))?;
    Ok((meta, content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::settings::{FrameRate, Resolution};
    use tempfile::TempDir;

    fn sample_meta(name: &str) -> MetaInfo {
        MetaInfo::new(
            "id-1".into(),
            name.into(),
            Resolution::Landscape1080,
            FrameRate::Fps30,
            "2025-03-04T05:06:07.000000".into(),
        )
    }

    #[test]
    fn test_non_ascii_kept_literally() {
        let text = to_document_text(&sample_meta("未命名项目")).unwrap();
        assert!(text.contains("\"name\": \"未命名项目\""));
        assert!(!text.contains("\\u"));
    }

    #[test]
    fn test_two_space_indent() {
        let text = to_document_text(&sample_meta("x")).unwrap();
        assert!(text.lines().any(|l| l.starts_with("  \"id\": ")));
        assert!(!text.lines().any(|l| l.starts_with("    \"id\"")));
    }

    #[test]
    fn test_pair_roundtrip() {
        let dir = TempDir::new().unwrap();
        let meta = sample_meta("roundtrip");
        let content = DraftContent::new(Resolution::Landscape1080);

        export_pair(dir.path(), &meta, &content).unwrap();
        let (meta_back, content_back) = import_pair(dir.path()).unwrap();

        assert_eq!(meta_back, meta);
        assert_eq!(content_back, content);
    }

    #[test]
    fn test_import_missing_file_errors() {
        let dir = TempDir::new().unwrap();
        assert!(import_pair(dir.path()).is_err());
    }
}
