// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Appending an image or video clip to an existing draft.
//!
//! Unlike audio, the clip's duration is whatever the caller asks for; it is
//! not derived from the materials already in the draft.

use super::draft::{DraftPair, Placement};
use super::error::{into_status, MutationError, MutationReport};
use crate::config::DraftConfig;
use crate::models::{
    content::{Clip, MaterialRecord, Position},
    settings::MediaKind,
};
use crate::util::{ids, time};
use std::fmt;
use std::str::FromStr;

/// Clip length used when the caller doesn't give one (seconds).
pub const DEFAULT_VISUAL_DURATION: f64 = 5.0;

/// Media kinds that can be placed on a video lane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualKind {
    Image,
    Video,
}

impl From<VisualKind> for MediaKind {
    fn from(kind: VisualKind) -> Self {
        match kind {
            VisualKind::Image => MediaKind::Image,
            VisualKind::Video => MediaKind::Video,
        }
    }
}

impl fmt::Display for VisualKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&MediaKind::from(*self), f)
    }
}

impl FromStr for VisualKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.parse::<MediaKind>()? {
            MediaKind::Image => Ok(VisualKind::Image),
            MediaKind::Video => Ok(VisualKind::Video),
            MediaKind::Audio => anyhow::bail!("Audio can't be placed as a visual clip"),
        }
    }
}

/// Placement of a visual clip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualPlacement {
    pub kind: VisualKind,
    pub start_time: f64,
    pub duration: f64,
    pub position: Position,
    pub scale: f64,
}

impl VisualPlacement {
    pub fn new(kind: VisualKind) -> Self {
        Self {
            kind,
            start_time: 0.0,
            duration: DEFAULT_VISUAL_DURATION,
            position: Position::default(),
            scale: 1.0,
        }
    }

    fn validate(&self) -> Result<(), MutationError> {
        let invalid = |what: &str, value: f64| {
            Err(MutationError::InvalidParameter(format!("{} = {}", what, value)))
        };
        if !(self.duration.is_finite() && self.duration > 0.0) {
            return invalid("duration", self.duration);
        }
        if !(self.start_time.is_finite() && self.start_time >= 0.0) {
            return invalid("start_time", self.start_time);
        }
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return invalid("scale", self.scale);
        }
        Ok(())
    }
}

/// Append `media_path` as a new image or video material and track.
pub fn add_visual(
    draft_folder: &str,
    media_path: &str,
    placement: &VisualPlacement,
    config: &DraftConfig,
) -> Result<MutationReport, MutationError> {
    let mut draft = DraftPair::open(draft_folder)?;
    placement.validate()?;

    let kind = MediaKind::from(placement.kind);
    let material_id = ids::material_id(kind);
    let record = match placement.kind {
        VisualKind::Image => MaterialRecord::image(
            &material_id,
            media_path,
            placement.duration,
            placement.position,
            placement.scale,
        ),
        VisualKind::Video => MaterialRecord::video(&material_id, media_path, placement.duration),
    };
    let clip = Clip::visual(
        ids::clip_id(&material_id),
        &material_id,
        placement.start_time,
        placement.duration,
        placement.position,
        placement.scale,
    );

    let report = draft.append(Placement { kind, record, clip });

    if config.touch_modify_time {
        draft.touch(time::format_timestamp(time::now()));
    }
    draft.save()?;

    log::info!(
        "Added {} {} to {} ({}s at {}s)",
        kind,
        report.material_id,
        report.folder.display(),
        report.duration,
        report.start_time
    );
    Ok(report)
}

/// Host-facing form of [`add_visual`]: `(folder or "", status message)`.
pub fn add_image_or_video_to_draft(
    draft_folder: &str,
    media_path: &str,
    placement: &VisualPlacement,
    config: &DraftConfig,
) -> (String, String) {
    into_status(add_visual(draft_folder, media_path, placement, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::serialization::import_pair;
    use crate::ops::audio::add_audio;
    use crate::ops::create::{create_draft, NewDraft};
    use crate::ops::integrity::check_integrity;
    use std::path::Path;
    use tempfile::TempDir;

    fn new_draft(root: &Path) -> String {
        let config = DraftConfig::with_root(root);
        let created = create_draft(Some(root), &NewDraft::default(), &config).unwrap();
        created.folder.to_str().unwrap().to_string()
    }

    #[test]
    fn test_add_image_with_placement() {
        let dir = TempDir::new().unwrap();
        let folder = new_draft(dir.path());
        let placement = VisualPlacement {
            start_time: 2.0,
            duration: 3.5,
            position: Position { x: 0.25, y: -0.5 },
            scale: 0.5,
            ..VisualPlacement::new(VisualKind::Image)
        };

        let report =
            add_visual(&folder, "/img/logo.png", &placement, &DraftConfig::with_root(dir.path()))
                .unwrap();
        assert!(report.material_id.starts_with("image_"));

        let (meta, content) = import_pair(Path::new(&folder)).unwrap();
        let image = &content.materials.bucket(MediaKind::Image)[0];
        assert_eq!(image.duration, Some(3.5));
        assert_eq!(image.position, Some(Position { x: 0.25, y: -0.5 }));
        assert_eq!(image.scale, Some(0.5));

        let track = content.tracks.last().unwrap();
        assert_eq!(track.track_type, "video");
        assert_eq!(track.clips[0].start_time, 2.0);
        assert_eq!(track.clips[0].duration, 3.5);
        assert_eq!(meta.find_material(&report.material_id).unwrap().kind, MediaKind::Image);
    }

    #[test]
    fn test_add_video_keeps_caller_duration() {
        let dir = TempDir::new().unwrap();
        let folder = new_draft(dir.path());
        let placement = VisualPlacement {
            duration: 42.0,
            ..VisualPlacement::new(VisualKind::Video)
        };

        add_visual(&folder, "/v/b-roll.mp4", &placement, &DraftConfig::with_root(dir.path()))
            .unwrap();

        let (_, content) = import_pair(Path::new(&folder)).unwrap();
        let videos = content.materials.bucket(MediaKind::Video);
        assert_eq!(videos.len(), 2);
        assert_eq!(videos[1].duration, Some(42.0));
        assert!(videos[1].position.is_none());
        assert_eq!(content.tracks.len(), 2);
    }

    #[test]
    fn test_added_video_lengthens_later_audio() {
        let dir = TempDir::new().unwrap();
        let folder = new_draft(dir.path());
        let config = DraftConfig::with_root(dir.path());
        let placement = VisualPlacement {
            duration: 30.0,
            ..VisualPlacement::new(VisualKind::Video)
        };

        add_visual(&folder, "/v/long.mp4", &placement, &config).unwrap();
        let report = add_audio(&folder, "/a/music.mp3", 0.6, &config).unwrap();
        assert_eq!(report.duration, 30.0);
    }

    #[test]
    fn test_mixed_mutations_keep_integrity() {
        let dir = TempDir::new().unwrap();
        let folder = new_draft(dir.path());
        let config = DraftConfig::with_root(dir.path());

        add_visual(&folder, "/i.png", &VisualPlacement::new(VisualKind::Image), &config).unwrap();
        add_audio(&folder, "/a.mp3", 0.3, &config).unwrap();
        add_visual(&folder, "/v.mp4", &VisualPlacement::new(VisualKind::Video), &config).unwrap();

        let (meta, content) = import_pair(Path::new(&folder)).unwrap();
        assert_eq!(content.tracks.len(), 4);
        assert_eq!(meta.draft_materials.len(), 4);
        assert!(check_integrity(&meta, &content).is_empty());
    }

    #[test]
    fn test_invalid_placement_leaves_draft_alone() {
        let dir = TempDir::new().unwrap();
        let folder = new_draft(dir.path());
        let before = import_pair(Path::new(&folder)).unwrap();
        let placement = VisualPlacement {
            duration: 0.0,
            ..VisualPlacement::new(VisualKind::Image)
        };

        let (returned, message) = add_image_or_video_to_draft(
            &folder,
            "/i.png",
            &placement,
            &DraftConfig::with_root(dir.path()),
        );
        assert_eq!(returned, "");
        assert!(message.contains("duration"));

        let after = import_pair(Path::new(&folder)).unwrap();
        assert_eq!(before.1, after.1);
    }

    #[test]
    fn test_status_on_missing_folder() {
        let (folder, message) = add_image_or_video_to_draft(
            "/nonexistent/dir",
            "/i.png",
            &VisualPlacement::new(VisualKind::Image),
            &DraftConfig::with_root("/tmp"),
        );
        assert_eq!(folder, "");
        assert!(message.contains("does not exist"));
    }

    #[test]
    fn test_visual_kind_parse() {
        assert_eq!("Image".parse::<VisualKind>().unwrap(), VisualKind::Image);
        assert_eq!("video".parse::<VisualKind>().unwrap(), VisualKind::Video);
        assert!("audio".parse::<VisualKind>().is_err());
    }
}
