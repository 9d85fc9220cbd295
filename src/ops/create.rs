// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Draft creation.
//!
//! Builds a new draft folder named `<yymmdd>_<project>` under the draft root
//! and writes the initial document pair: one seed video material (`video_0`)
//! placed on one video track as a single clip spanning the full duration.

use crate::config::{CollisionPolicy, DraftConfig};
use crate::io::paths::{folder_name, suffixed_folder_name};
use crate::io::serialization::export_pair;
use crate::models::{
    content::{Clip, DraftContent, MaterialRecord, Position, Track},
    meta::{DraftMaterialStub, MetaInfo},
    settings::{check_duration, FrameRate, MediaKind, Resolution},
};
use crate::util::{ids, time};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Project name used when the host doesn't supply one.
pub const DEFAULT_PROJECT_NAME: &str = "未命名项目";

/// Duration used when the host doesn't supply one (seconds).
pub const DEFAULT_DURATION: f64 = 10.0;

/// Parameters for a new draft.
#[derive(Debug, Clone, PartialEq)]
pub struct NewDraft {
    pub project_name: String,
    pub video_path: String,
    pub duration: f64,
    pub resolution: Resolution,
    pub fps: FrameRate,
}

impl Default for NewDraft {
    fn default() -> Self {
        Self {
            project_name: DEFAULT_PROJECT_NAME.to_string(),
            video_path: String::new(),
            duration: DEFAULT_DURATION,
            resolution: Resolution::default(),
            fps: FrameRate::default(),
        }
    }
}

impl NewDraft {
    /// Build parameters from the string options a host exposes.
    pub fn parse(
        project_name: &str,
        video_path: &str,
        duration: f64,
        resolution: &str,
        fps: &str,
    ) -> Result<Self> {
        Ok(Self {
            project_name: project_name.to_string(),
            video_path: video_path.to_string(),
            duration,
            resolution: resolution.parse()?,
            fps: fps.parse()?,
        })
    }
}

/// Identity of a freshly written draft.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatedDraft {
    pub draft_id: String,
    pub folder: PathBuf,
}

/// Create a draft under `draft_root`.
///
/// An empty `draft_root`, or one that isn't an existing directory, is replaced by `config.draft_root`, which
/// is created if needed. Filesystem failures are returned as errors; nothing
/// is written if the parameters are out of range.
pub fn create_draft(
    draft_root: Option<&Path>,
    params: &NewDraft,
    config: &DraftConfig,
) -> Result<CreatedDraft> {
    let duration = check_duration(params.duration)?;

    let root = resolve_root(draft_root, config)?;
    let now = time::now();
    let folder = claim_folder(
        &root,
        &folder_name(now.date(), &params.project_name),
        config.on_collision,
    )?;

    let draft_id = ids::draft_id();
    let timestamp = time::format_timestamp(now);
    let (meta, content) = initial_documents(&draft_id, params, duration, timestamp);

    export_pair(&folder, &meta, &content)?;
    log::info!(
        "Created draft {} ({}) in {}",
        params.project_name,
        draft_id,
        folder.display()
    );

    Ok(CreatedDraft { draft_id, folder })
}

/// Metadata and content for a new draft.
fn initial_documents(
    draft_id: &str,
    params: &NewDraft,
    duration: f64,
    timestamp: String,
) -> (MetaInfo, DraftContent) {
    let mut meta = MetaInfo::new(
        draft_id.to_string(),
        params.project_name.clone(),
        params.resolution,
        params.fps,
        timestamp,
    );
    meta.push_material(DraftMaterialStub::new(
        ids::SEED_VIDEO_ID,
        &params.video_path,
        MediaKind::Video,
    ));

    let mut content = DraftContent::new(params.resolution);
    content.materials.push(
        MediaKind::Video,
        MaterialRecord::video(ids::SEED_VIDEO_ID, &params.video_path, duration),
    );
    content.tracks.push(Track::with_clip(
        ids::track_id(ids::SEED_VIDEO_ID),
        MediaKind::Video.track_type(),
        Clip::visual(
            "clip_0",
            ids::SEED_VIDEO_ID,
            0.0,
            duration,
            Position::default(),
            1.0,
        ),
    ));

    (meta, content)
}

/// Pick the draft root, falling back to the configured one.
fn resolve_root(draft_root: Option<&Path>, config: &DraftConfig) -> Result<PathBuf> {
    let root = match draft_root {
        Some(root) if !root.as_os_str().is_empty() && root.is_dir() => root.to_path_buf(),
        _ => {
            let fallback = &config.draft_root;
            log::debug!("Using default draft root {}", fallback.display());
            std::fs::create_dir_all(fallback).with_context(|| {
                format!("Failed to create draft root {}", fallback.display())
            })?;
            fallback.clone()
        }
    };

    if root.is_absolute() {
        Ok(root)
    } else {
        Ok(std::env::current_dir()
            .context("Failed to resolve current directory")?
            .join(root))
    }
}

/// Create (or reuse) the draft folder according to the collision policy.
fn claim_folder(root: &Path, name: &str, policy: CollisionPolicy) -> Result<PathBuf> {
    let mut folder = root.join(name);

    if folder.exists() {
        match policy {
            CollisionPolicy::Overwrite => {
                log::warn!("Reusing existing draft folder {}", folder.display());
            }
            CollisionPolicy::Suffix => {
                let mut n = 2;
                while folder.exists() {
                    folder = root.join(suffixed_folder_name(name, n));
                    n += 1;
                }
            }
            CollisionPolicy::Error => {
                anyhow::bail!("Draft folder already exists: {}", folder.display());
            }
        }
    }

    std::fs::create_dir_all(&folder)
        .with_context(|| format!("Failed to create draft folder {}", folder.display()))?;
    Ok(folder)
}
