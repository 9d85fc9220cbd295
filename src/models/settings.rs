// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Enumerated project settings.
//!
//! These are the options a host exposes when creating or extending a draft:
//! canvas resolution, frame rate, media kind, and the numeric bounds for
//! durations and volume.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Shortest clip duration accepted, exclusive (seconds).
pub const MIN_DURATION: f64 = 0.1;

/// Longest clip duration accepted, inclusive (seconds).
pub const MAX_DURATION: f64 = 3600.0;

/// Canvas resolution supported by the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Resolution {
    #[default]
    Landscape1080,
    Landscape720,
    Landscape480,
    Portrait1080,
    Portrait720,
}

impl Resolution {
    pub const ALL: [Resolution; 5] = [
        Resolution::Landscape1080,
        Resolution::Landscape720,
        Resolution::Landscape480,
        Resolution::Portrait1080,
        Resolution::Portrait720,
    ];

    /// Canvas size in pixels as `(width, height)`.
    pub fn dimensions(self) -> (u32, u32) {
        match self {
            Resolution::Landscape1080 => (1920, 1080),
            Resolution::Landscape720 => (1280, 720),
            Resolution::Landscape480 => (854, 480),
            Resolution::Portrait1080 => (1080, 1920),
            Resolution::Portrait720 => (720, 1280),
        }
    }

    pub fn width(self) -> u32 {
        self.dimensions().0
    }

    pub fn height(self) -> u32 {
        self.dimensions().1
    }

    /// Aspect ratio string in the `"W:H"` form the content document stores.
    pub fn aspect_ratio(self) -> String {
        let (w, h) = self.dimensions();
        format!("{}:{}", w, h)
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (w, h) = self.dimensions();
        write!(f, "{}x{}", w, h)
    }
}

impl FromStr for Resolution {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        let (w, h) = s
            .trim()
            .split_once('x')
            .ok_or_else(|| anyhow::anyhow!("Resolution must look like WIDTHxHEIGHT: {:?}", s))?;
        let dims: (u32, u32) = (w.parse()?, h.parse()?);

        Resolution::ALL
            .into_iter()
            .find(|r| r.dimensions() == dims)
            .ok_or_else(|| anyhow::anyhow!("Unsupported resolution: {}", s))
    }
}

/// Project frame rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrameRate {
    Fps24,
    #[default]
    Fps30,
    Fps60,
}

impl FrameRate {
    pub fn as_u32(self) -> u32 {
        match self {
            FrameRate::Fps24 => 24,
            FrameRate::Fps30 => 30,
            FrameRate::Fps60 => 60,
        }
    }
}

impl fmt::Display for FrameRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u32())
    }
}

impl FromStr for FrameRate {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim() {
            "24" => Ok(FrameRate::Fps24),
            "30" => Ok(FrameRate::Fps30),
            "60" => Ok(FrameRate::Fps60),
            other => anyhow::bail!("Unsupported frame rate: {}", other),
        }
    }
}

/// Kind of media referenced by a material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Video,
    Audio,
    Image,
}

impl MediaKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MediaKind::Video => "video",
            MediaKind::Audio => "audio",
            MediaKind::Image => "image",
        }
    }

    /// Track lane the kind is placed on. Images share the video lane.
    pub fn track_type(self) -> &'static str {
        match self {
            MediaKind::Audio => "audio",
            MediaKind::Video | MediaKind::Image => "video",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "video" => Ok(MediaKind::Video),
            "audio" => Ok(MediaKind::Audio),
            "image" => Ok(MediaKind::Image),
            other => anyhow::bail!("Unknown media kind: {}", other),
        }
    }
}

/// Check that a duration lies in `(MIN_DURATION, MAX_DURATION]`.
pub fn check_duration(seconds: f64) -> anyhow::Result<f64> {
    if seconds.is_finite() && seconds > MIN_DURATION && seconds <= MAX_DURATION {
        Ok(seconds)
    } else {
        anyhow::bail!(
            "Duration must be in ({}, {}] seconds, got {}",
            MIN_DURATION,
            MAX_DURATION,
            seconds
        )
    }
}

/// Clamp an audio volume into `[0.0, 1.0]`.
pub fn clamp_volume(volume: f64) -> f64 {
    if volume.is_nan() {
        return 1.0;
    }
    volume.clamp(0.0, 1.0)
}
