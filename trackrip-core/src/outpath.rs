//! Output path construction for extracted streams.
//!
//! The output file lives in the same directory as the source and encodes the
//! source's base name, the codec class, and the stream index. A numeric
//! suffix is appended until an unused name is found, so an existing file is
//! never overwritten.
//!
//! The existence check is check-then-use and therefore racy against
//! concurrent external file creation; the extraction in-flight lock removes
//! the intra-process case, and the tool is otherwise single-user and serial.

use crate::error::{CoreError, CoreResult};
use crate::streams::CodecType;

use std::path::{Path, PathBuf};

/// Computes a collision-free output path for one extracted stream.
///
/// The candidate name is `{base}-{type}-{index}.{ext}` next to the source
/// file; see [`unique_path`] for the collision suffix scheme. Pure function
/// of the source path and the directory contents at call time.
pub fn build_output_path(
    source: &Path,
    codec_type: CodecType,
    stream_index: u32,
) -> CoreResult<PathBuf> {
    let dir = source.parent().ok_or_else(|| {
        CoreError::PathError(format!(
            "Could not determine parent directory for '{}'",
            source.display()
        ))
    })?;

    let base = source
        .file_stem()
        .and_then(|stem| stem.to_str())
        .ok_or_else(|| {
            CoreError::PathError(format!("Could not determine base name for '{}'", source.display()))
        })?;

    // Streams with no recognizable codec class are filed as "-stream-",
    // matching the generic .bin extension they receive.
    let kind = match codec_type {
        CodecType::Unknown => "stream",
        other => other.as_str(),
    };

    let candidate = dir.join(format!(
        "{base}-{kind}-{stream_index}.{}",
        codec_type.extension()
    ));
    Ok(unique_path(candidate))
}

/// Returns `candidate` if unused, otherwise the first `{stem}-{n}.{ext}`
/// (n = 1, 2, ...) that does not exist yet.
fn unique_path(candidate: PathBuf) -> PathBuf {
    if !candidate.exists() {
        return candidate;
    }

    let dir = candidate.parent().map(Path::to_path_buf).unwrap_or_default();
    let stem = candidate
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = candidate
        .extension()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut counter = 1u32;
    loop {
        let current = dir.join(format!("{stem}-{counter}.{ext}"));
        if !current.exists() {
            return current;
        }
        counter += 1;
    }
}
