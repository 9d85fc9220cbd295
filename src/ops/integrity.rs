// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Referential integrity of a draft document pair.

use super::draft::DraftPair;
use super::error::MutationError;
use crate::models::{content::DraftContent, meta::MetaInfo};
use std::collections::HashSet;
use std::fmt;

/// One broken link between the two documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntegrityIssue {
    /// A clip points at a material that isn't in any bucket.
    DanglingClip { clip_id: String, material_id: String },
    /// A material has no stub in `draft_materials`.
    MissingStub { material_id: String },
    /// A stub in `draft_materials` has no material record.
    OrphanStub { material_id: String },
    /// The same id is used twice among materials, tracks or clips.
    DuplicateId { id: String },
}

impl fmt::Display for IntegrityIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntegrityIssue::DanglingClip {
                clip_id,
                material_id,
            } => write!(f, "clip {} references unknown material {}", clip_id, material_id),
            IntegrityIssue::MissingStub { material_id } => {
                write!(f, "material {} has no draft_materials entry", material_id)
            }
            IntegrityIssue::OrphanStub { material_id } => {
                write!(f, "draft_materials entry {} has no material", material_id)
            }
            IntegrityIssue::DuplicateId { id } => write!(f, "duplicate id {}", id),
        }
    }
}

/// List every integrity problem in a loaded pair. Empty means consistent.
pub fn check_integrity(meta: &MetaInfo, content: &DraftContent) -> Vec<IntegrityIssue> {
    let mut issues = Vec::new();

    for clip in content.clips() {
        if !content.materials.contains(&clip.material_id) {
            issues.push(IntegrityIssue::DanglingClip {
                clip_id: clip.id.clone(),
                material_id: clip.material_id.clone(),
            });
        }
    }

    let stub_ids: HashSet<&str> = meta.draft_materials.iter().map(|m| m.id.as_str()).collect();
    for (_, material) in content.materials.iter() {
        if !stub_ids.contains(material.id.as_str()) {
            issues.push(IntegrityIssue::MissingStub {
                material_id: material.id.clone(),
            });
        }
    }
    for stub in &meta.draft_materials {
        if !content.materials.contains(&stub.id) {
            issues.push(IntegrityIssue::OrphanStub {
                material_id: stub.id.clone(),
            });
        }
    }

    // Materials, tracks and clips each form their own id namespace.
    let namespaces: [Vec<&str>; 3] = [
        content.materials.iter().map(|(_, m)| m.id.as_str()).collect(),
        content.tracks.iter().map(|t| t.id.as_str()).collect(),
        content.clips().map(|c| c.id.as_str()).collect(),
    ];
    for ids in namespaces {
        let mut seen = HashSet::new();
        for id in ids {
            if !seen.insert(id) {
                issues.push(IntegrityIssue::DuplicateId { id: id.to_string() });
            }
        }
    }

    issues
}

/// Load the draft in `draft_folder` and check it.
pub fn verify_draft(draft_folder: &str) -> Result<Vec<IntegrityIssue>, MutationError> {
    let draft = DraftPair::open(draft_folder)?;
    let issues = check_integrity(&draft.meta, &draft.content);
    for issue in &issues {
        log::warn!("{}: {}", draft.folder.display(), issue);
    }
    Ok(issues)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::content::{Clip, MaterialRecord, Track};
    use crate::models::meta::DraftMaterialStub;
    use crate::models::settings::{FrameRate, MediaKind, Resolution};

    fn empty_pair() -> (MetaInfo, DraftContent) {
        let meta = MetaInfo::new(
            "id".into(),
            "n".into(),
            Resolution::Landscape1080,
            FrameRate::Fps30,
            "t".into(),
        );
        (meta, DraftContent::new(Resolution::Landscape1080))
    }

    fn audio_clip(id: &str, material: &str) -> Clip {
        Clip::audio(id, material, 1.0, 1.0)
    }

    #[test]
    fn test_consistent_pair() {
        let (mut meta, mut content) = empty_pair();
        meta.push_material(DraftMaterialStub::new("audio_1", "/a", MediaKind::Audio));
        content
            .materials
            .push(MediaKind::Audio, MaterialRecord::audio("audio_1", "/a", 1.0, 1.0));
        content
            .tracks
            .push(Track::with_clip("track_audio_1", "audio", audio_clip("clip_audio_1", "audio_1")));

        assert!(check_integrity(&meta, &content).is_empty());
    }

    #[test]
    fn test_dangling_clip() {
        let (_, mut content) = empty_pair();
        content
            .tracks
            .push(Track::with_clip("t", "audio", audio_clip("c", "ghost")));

        let issues = check_integrity(&empty_pair().0, &content);
        assert_eq!(
            issues,
            vec![IntegrityIssue::DanglingClip {
                clip_id: "c".into(),
                material_id: "ghost".into()
            }]
        );
    }

    #[test]
    fn test_stub_mismatch_both_ways() {
        let (mut meta, mut content) = empty_pair();
        meta.push_material(DraftMaterialStub::new("only_meta", "", MediaKind::Video));
        content
            .materials
            .push(MediaKind::Video, MaterialRecord::video("only_content", "", 1.0));

        let issues = check_integrity(&meta, &content);
        assert!(issues.contains(&IntegrityIssue::MissingStub {
            material_id: "only_content".into()
        }));
        assert!(issues.contains(&IntegrityIssue::OrphanStub {
            material_id: "only_meta".into()
        }));
    }

    #[test]
    fn test_duplicate_material_id() {
        let (mut meta, mut content) = empty_pair();
        meta.push_material(DraftMaterialStub::new("dup", "", MediaKind::Video));
        content.materials.push(MediaKind::Video, MaterialRecord::video("dup", "", 1.0));
        content.materials.push(MediaKind::Image, MaterialRecord::video("dup", "", 1.0));

        let issues = check_integrity(&meta, &content);
        assert_eq!(issues, vec![IntegrityIssue::DuplicateId { id: "dup".into() }]);
    }
}
