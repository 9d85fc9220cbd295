// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Data models for the draft document pair.

pub mod content;
pub mod meta;
pub mod settings;
