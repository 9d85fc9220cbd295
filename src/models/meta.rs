// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Metadata document (`draft_meta_info.json`).
//!
//! The metadata document identifies the draft (id, name, canvas, frame rate,
//! timestamps) and keeps a flat list of material stubs that mirrors the
//! material records held in the content document.

use super::settings::{FrameRate, MediaKind, Resolution};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Material stub listed in `draft_materials`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftMaterialStub {
    pub id: String,
    pub path: String,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    /// Fields written by the host application that we don't model.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DraftMaterialStub {
    pub fn new(id: impl Into<String>, path: impl Into<String>, kind: MediaKind) -> Self {
        Self {
            id: id.into(),
            path: path.into(),
            kind,
            extra: Map::new(),
        }
    }
}

/// Complete metadata document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetaInfo {
    pub id: String,
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub fps: u32,
    #[serde(rename = "createTime")]
    pub create_time: String,
    #[serde(rename = "modifyTime")]
    pub modify_time: String,
    #[serde(default)]
    pub draft_materials: Vec<DraftMaterialStub>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl MetaInfo {
    /// Create the metadata for a fresh draft. Both timestamps get `timestamp`.
    pub fn new(
        id: String,
        name: String,
        resolution: Resolution,
        fps: FrameRate,
        timestamp: String,
    ) -> Self {
        Self {
            id,
            name,
            width: resolution.width(),
            height: resolution.height(),
            fps: fps.as_u32(),
            create_time: timestamp.clone(),
            modify_time: timestamp,
            draft_materials: Vec::new(),
            extra: Map::new(),
        }
    }

    /// Append a material stub.
    pub fn push_material(&mut self, stub: DraftMaterialStub) {
        self.draft_materials.push(stub);
    }

    pub fn find_material(&self, id: &str) -> Option<&DraftMaterialStub> {
        self.draft_materials.iter().find(|m| m.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_meta_mirrors_settings() {
        let meta = MetaInfo::new(
            "abc".into(),
            "Demo".into(),
            Resolution::Portrait720,
            FrameRate::Fps24,
            "2025-01-01T00:00:00.000000".into(),
        );
        assert_eq!((meta.width, meta.height), (720, 1280));
        assert_eq!(meta.fps, 24);
        assert_eq!(meta.create_time, meta.modify_time);
        assert!(meta.draft_materials.is_empty());
    }

    #[test]
    fn test_stub_serializes_type_field() {
        let stub = DraftMaterialStub::new("audio_1234abcd", "/a.mp3", MediaKind::Audio);
        let json = serde_json::to_value(&stub).unwrap();
        assert_eq!(json["type"], "audio");
        assert_eq!(json["id"], "audio_1234abcd");
    }

    #[test]
    fn test_unknown_fields_survive() {
        let raw = r#"{
            "id": "x", "name": "n", "width": 1920, "height": 1080, "fps": 30,
            "createTime": "t", "modifyTime": "t",
            "draft_materials": [{"id": "video_0", "path": "", "type": "video", "tag": 7}],
            "cover": "cover.png"
        }"#;
        let meta: MetaInfo = serde_json::from_str(raw).unwrap();
        assert_eq!(meta.extra["cover"], "cover.png");
        assert_eq!(meta.draft_materials[0].extra["tag"], 7);

        let back = serde_json::to_value(&meta).unwrap();
        assert_eq!(back["cover"], "cover.png");
        assert_eq!(back["draft_materials"][0]["tag"], 7);
    }
}
