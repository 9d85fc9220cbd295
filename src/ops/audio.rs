// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Appending an audio track to an existing draft.
//!
//! The new audio clip always matches the longest video material already in
//! the draft (or [`DEFAULT_AUDIO_DURATION`] when there is none), regardless
//! of the length of the audio file itself.

use super::draft::{DraftPair, Placement};
use super::error::{into_status, MutationError, MutationReport};
use crate::config::DraftConfig;
use crate::models::{
    content::{Clip, MaterialRecord},
    settings::{clamp_volume, MediaKind},
};
use crate::util::{ids, time};

/// Audio duration when the draft has no video material with a duration.
pub const DEFAULT_AUDIO_DURATION: f64 = 10.0;

/// Append `audio_path` as a new material and audio track.
pub fn add_audio(
    draft_folder: &str,
    audio_path: &str,
    volume: f64,
    config: &DraftConfig,
) -> Result<MutationReport, MutationError> {
    let mut draft = DraftPair::open(draft_folder)?;

    let duration = draft
        .content
        .materials
        .max_video_duration()
        .unwrap_or(DEFAULT_AUDIO_DURATION);
    let volume = clamp_volume(volume);
    log::debug!("Audio duration {}s, volume {}", duration, volume);

    let material_id = ids::material_id(MediaKind::Audio);
    let report = draft.append(Placement {
        kind: MediaKind::Audio,
        record: MaterialRecord::audio(&material_id, audio_path, duration, volume),
        clip: Clip::audio(ids::clip_id(&material_id), &material_id, duration, volume),
    });

    if config.touch_modify_time {
        draft.touch(time::format_timestamp(time::now()));
    }
    draft.save()?;

    log::info!(
        "Added audio {} to {} ({}s)",
        report.material_id,
        report.folder.display(),
        report.duration
    );
    Ok(report)
}

/// Host-facing form of [`add_audio`]: `(folder or "", status message)`.
pub fn add_audio_to_draft(
    draft_folder: &str,
    audio_path: &str,
    volume: f64,
    config: &DraftConfig,
) -> (String, String) {
    into_status(add_audio(draft_folder, audio_path, volume, config))
}
