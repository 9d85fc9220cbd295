// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Draft folder layout and naming.

use chrono::NaiveDate;
use std::path::{Path, PathBuf};

/// File name of the metadata document inside a draft folder.
pub const META_FILE: &str = "draft_meta_info.json";

/// File name of the content document inside a draft folder.
pub const CONTENT_FILE: &str = "draft_content.json";

pub fn meta_path(folder: &Path) -> PathBuf {
    folder.join(META_FILE)
}

pub fn content_path(folder: &Path) -> PathBuf {
    folder.join(CONTENT_FILE)
}

/// Folder name for a draft: `<yy><mm><dd>_<project name>`.
pub fn folder_name(date: NaiveDate, project_name: &str) -> String {
    format!("{}_{}", date.format("%y%m%d"), project_name)
}

/// Folder name with a numeric suffix, used to avoid reusing an existing folder.
pub fn suffixed_folder_name(base: &str, n: u32) -> String {
    format!("{}_{}", base, n)
}

/// Where the editor keeps drafts under a home directory.
pub fn drafts_dir_under(home: &Path) -> PathBuf {
    home.join("Documents").join("JianyingPro").join("Drafts")
}

/// Lexically normalize a user supplied folder path.
///
/// Removes `.` components and trailing separators, and resolves `..` against
/// preceding normal components. The filesystem is not consulted.
pub fn normalize(path: &Path) -> PathBuf {
    use std::path::Component;

    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let popped = matches!(out.components().next_back(), Some(Component::Normal(_)))
                    && out.pop();
                if !popped {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}
