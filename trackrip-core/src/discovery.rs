//! File discovery module for finding selectable container files.
//!
//! This is the CLI-side counterpart of a file-picker dialog: it scans the top
//! level of a directory for video container files by extension and returns
//! their paths. It does not search subdirectories.

use crate::error::{CoreError, CoreResult};

use std::path::{Path, PathBuf};

/// Container extensions accepted by default, matching the file-picker filter.
/// The `all_files` flag on [`find_selectable_files`] is the escape hatch for
/// anything else.
pub const ACCEPTED_EXTENSIONS: [&str; 7] = ["mkv", "mp4", "mov", "avi", "webm", "ts", "flv"];

/// Finds container files eligible for probing in the specified directory.
///
/// Scans the top level of `input_dir` for files whose extension matches
/// [`ACCEPTED_EXTENSIONS`] (case-insensitive). With `all_files` set, every
/// regular file is accepted instead.
///
/// # Returns
///
/// * `Ok(Vec<PathBuf>)` - Paths of the discovered files, sorted by name
/// * `Err(CoreError::Io)` - If the directory cannot be read
/// * `Err(CoreError::NoFilesFound)` - If no matching files are found
pub fn find_selectable_files(input_dir: &Path, all_files: bool) -> CoreResult<Vec<PathBuf>> {
    let read_dir = std::fs::read_dir(input_dir)?;
    let mut files: Vec<PathBuf> = read_dir
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let path = entry.path();

            if !path.is_file() {
                return None;
            }

            if all_files {
                return Some(path);
            }

            path.extension()
                .and_then(|ext| ext.to_str())
                .filter(|ext_str| {
                    ACCEPTED_EXTENSIONS
                        .iter()
                        .any(|accepted| ext_str.eq_ignore_ascii_case(accepted))
                })
                .map(|_| path.clone())
        })
        .collect();

    files.sort();

    if files.is_empty() {
        Err(CoreError::NoFilesFound)
    } else {
        Ok(files)
    }
}
