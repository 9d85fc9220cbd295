// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! I/O operations for draft folders and their documents.

pub mod paths;
pub mod serialization;
