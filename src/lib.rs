// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! JianyingPro draft writer.
//!
//! Creates draft projects (a `draft_meta_info.json` / `draft_content.json`
//! pair inside a dated folder) and appends audio, image or video tracks to
//! them. Each operation is one full read-modify-write of both files.

pub mod config;
pub mod io;
pub mod models;
pub mod ops;
pub mod util;

pub use config::{CollisionPolicy, DraftConfig};
pub use ops::{
    add_audio, add_audio_to_draft, add_image_or_video_to_draft, add_visual, create_draft,
    verify_draft, MutationError, MutationReport, NewDraft, VisualKind, VisualPlacement,
};
