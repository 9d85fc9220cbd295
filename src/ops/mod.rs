// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Draft operations: create a draft, then append audio, image or video.

pub mod audio;
pub mod create;
pub mod draft;
pub mod error;
pub mod integrity;
pub mod visual;

pub use audio::{add_audio, add_audio_to_draft};
pub use create::{create_draft, CreatedDraft, NewDraft};
pub use error::{into_status, MutationError, MutationReport};
pub use integrity::{check_integrity, verify_draft, IntegrityIssue};
pub use visual::{add_image_or_video_to_draft, add_visual, VisualKind, VisualPlacement};
