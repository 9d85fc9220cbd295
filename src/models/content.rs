// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Content document (`draft_content.json`).
//!
//! Holds the canvas configuration, the material buckets keyed by media kind,
//! and the ordered list of tracks. Every record keeps the fields it doesn't
//! model in an `extra` map so a read-modify-write cycle leaves host data alone.

use super::settings::{MediaKind, Resolution};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Format generation written into `version`.
pub const CONTENT_VERSION: &str = "2.0";

/// Target application written into `app`.
pub const CONTENT_APP: &str = "jianying";

/// Placement of a visual clip on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
    #[serde(rename = "aspectRatio")]
    pub aspect_ratio: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl From<Resolution> for CanvasConfig {
    fn from(resolution: Resolution) -> Self {
        Self {
            width: resolution.width(),
            height: resolution.height(),
            aspect_ratio: resolution.aspect_ratio(),
            extra: Map::new(),
        }
    }
}

/// A material record in one of the `materials` buckets.
///
/// Video and image records carry `inPoint`/`outPoint`; audio records add
/// `volume`; image records may carry the caller's `position` and `scale`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
    #[serde(rename = "inPoint", default, skip_serializing_if = "Option::is_none")]
    pub in_point: Option<f64>,
    #[serde(rename = "outPoint", default, skip_serializing_if = "Option::is_none")]
    pub out_point: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl MaterialRecord {
    /// A video record spanning `[0, duration]` of its source.
    pub fn video(id: impl Into<String>, path: impl Into<String>, duration: f64) -> Self {
        Self {
            id: id.into(),
            path: path.into(),
            duration: Some(duration),
            volume: None,
            in_point: Some(0.0),
            out_point: Some(duration),
            position: None,
            scale: None,
            extra: Map::new(),
        }
    }

    pub fn audio(
        id: impl Into<String>,
        path: impl Into<String>,
        duration: f64,
        volume: f64,
    ) -> Self {
        Self {
            volume: Some(volume),
            ..Self::video(id, path, duration)
        }
    }

    pub fn image(
        id: impl Into<String>,
        path: impl Into<String>,
        duration: f64,
        position: Position,
        scale: f64,
    ) -> Self {
        Self {
            position: Some(position),
            scale: Some(scale),
            ..Self::video(id, path, duration)
        }
    }
}

/// Material buckets keyed by media kind. Absent buckets stay absent on write.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Materials {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub videos: Option<Vec<MaterialRecord>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audios: Option<Vec<MaterialRecord>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<MaterialRecord>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Materials {
    pub fn bucket(&self, kind: MediaKind) -> &[MaterialRecord] {
        let bucket = match kind {
            MediaKind::Video => &self.videos,
            MediaKind::Audio => &self.audios,
            MediaKind::Image => &self.images,
        };
        bucket.as_deref().unwrap_or(&[])
    }

    /// Mutable access to a bucket, creating it if absent.
    pub fn bucket_mut(&mut self, kind: MediaKind) -> &mut Vec<MaterialRecord> {
        let bucket = match kind {
            MediaKind::Video => &mut self.videos,
            MediaKind::Audio => &mut self.audios,
            MediaKind::Image => &mut self.images,
        };
        bucket.get_or_insert_with(Vec::new)
    }

    pub fn push(&mut self, kind: MediaKind, record: MaterialRecord) {
        self.bucket_mut(kind).push(record);
    }

    /// Every record across all buckets, tagged with its kind.
    pub fn iter(&self) -> impl Iterator<Item = (MediaKind, &MaterialRecord)> {
        [MediaKind::Video, MediaKind::Audio, MediaKind::Image]
            .into_iter()
            .flat_map(move |kind| self.bucket(kind).iter().map(move |m| (kind, m)))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.iter().any(|(_, m)| m.id == id)
    }

    /// Longest `duration` among video materials, if any carries one.
    pub fn max_video_duration(&self) -> Option<f64> {
        self.bucket(MediaKind::Video)
            .iter()
            .filter_map(|m| m.duration)
            .fold(None, |acc, d| Some(acc.map_or(d, |a: f64| a.max(d))))
    }
}

/// Placement of one material on a track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clip {
    pub id: String,
    #[serde(rename = "materialId")]
    pub material_id: String,
    #[serde(rename = "startTime", default)]
    pub start_time: f64,
    #[serde(default)]
    pub duration: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Clip {
    pub fn visual(
        id: impl Into<String>,
        material_id: impl Into<String>,
        start_time: f64,
        duration: f64,
        position: Position,
        scale: f64,
    ) -> Self {
        Self {
            id: id.into(),
            material_id: material_id.into(),
            start_time,
            duration,
            position: Some(position),
            scale: Some(scale),
            volume: None,
            extra: Map::new(),
        }
    }

    pub fn audio(
        id: impl Into<String>,
        material_id: impl Into<String>,
        duration: f64,
        volume: f64,
    ) -> Self {
        Self {
            id: id.into(),
            material_id: material_id.into(),
            start_time: 0.0,
            duration,
            position: None,
            scale: None,
            volume: Some(volume),
            extra: Map::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    #[serde(rename = "type")]
    pub track_type: String,
    #[serde(default)]
    pub clips: Vec<Clip>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Track {
    /// A track holding exactly one clip.
    pub fn with_clip(id: impl Into<String>, track_type: &str, clip: Clip) -> Self {
        Self {
            id: id.into(),
            track_type: track_type.to_string(),
            clips: vec![clip],
            extra: Map::new(),
        }
    }
}

/// Complete content document.
///
/// Only `materials` and `tracks` are touched by mutations; the header fields
/// are optional so a draft missing them can still be extended, and stay
/// absent when rewritten.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canvas_config: Option<CanvasConfig>,
    #[serde(default)]
    pub materials: Materials,
    #[serde(default)]
    pub tracks: Vec<Track>,
    #[serde(default)]
    pub effects: Vec<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DraftContent {
    /// Empty content for a canvas of the given resolution.
    pub fn new(resolution: Resolution) -> Self {
        Self {
            version: Some(CONTENT_VERSION.to_string()),
            app: Some(CONTENT_APP.to_string()),
            canvas_config: Some(resolution.into()),
            materials: Materials::default(),
            tracks: Vec::new(),
            effects: Vec::new(),
            extra: Map::new(),
        }
    }

    pub fn clips(&self) -> impl Iterator<Item = &Clip> {
        self.tracks.iter().flat_map(|t| t.clips.iter())
    }
}
