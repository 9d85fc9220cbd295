// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Identifier generation for drafts, materials, tracks and clips.

use crate::models::settings::MediaKind;
use uuid::Uuid;

/// Id of the material seeded into every new draft.
pub const SEED_VIDEO_ID: &str = "video_0";

/// Fresh globally unique draft id (hyphenated UUID v4).
pub fn draft_id() -> String {
    Uuid::new_v4().to_string()
}

/// Eight lowercase hex characters taken from a fresh UUID v4.
pub fn short_hex() -> String {
    let mut hex = Uuid::new_v4().simple().to_string();
    hex.truncate(8);
    hex
}

/// Material id of the form `<kind>_<8 hex>`.
pub fn material_id(kind: MediaKind) -> String {
    format!("{}_{}", kind.as_str(), short_hex())
}

/// Track id derived from a material id.
pub fn track_id(material_id: &str) -> String {
    format!("track_{}", material_id)
}

/// Clip id derived from a material id.
pub fn clip_id(material_id: &str) -> String {
    format!("clip_{}", material_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_material_id_shape() {
        let id = material_id(MediaKind::Audio);
        let (prefix, hex) = id.split_once('_').unwrap();
        assert_eq!(prefix, "audio");
        assert_eq!(hex.len(), 8);
        assert!(hex.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_track_and_clip_ids() {
        assert_eq!(track_id("audio_0badf00d"), "track_audio_0badf00d");
        assert_eq!(clip_id("audio_0badf00d"), "clip_audio_0badf00d");
        assert_eq!(track_id(SEED_VIDEO_ID), "track_video_0");
    }

    #[test]
    fn test_ids_do_not_repeat() {
        let ids: HashSet<String> = (0..500).map(|_| material_id(MediaKind::Image)).collect();
        assert_eq!(ids.len(), 500);
    }

    #[test]
    fn test_draft_id_is_uuid() {
        assert!(Uuid::parse_str(&draft_id()).is_ok());
    }
}
