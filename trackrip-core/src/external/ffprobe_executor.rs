//! FFprobe integration for container stream inspection.
//!
//! Runs ffprobe in quiet JSON mode against a container file and deserializes
//! the stream table into [`StreamDescriptor`] values. Parsing is strict: a
//! structurally invalid document is rejected, never coerced, while every
//! optional field defaults to an explicit absent value.

use crate::error::{CoreResult, probe_execution_error, probe_parse_error};
use crate::streams::{CodecType, StreamDescriptor};

use serde::Deserialize;
use std::path::Path;
use std::process::Command;

#[derive(Debug, Deserialize)]
struct FfprobeOutput {
    #[serde(default)]
    streams: Vec<FfprobeStream>,
}

#[derive(Debug, Deserialize)]
struct FfprobeStream {
    #[serde(default)]
    index: u32,
    codec_type: Option<String>,
    codec_name: Option<String>,
    duration: Option<DurationField>,
    #[serde(default)]
    tags: FfprobeTags,
}

#[derive(Debug, Default, Deserialize)]
struct FfprobeTags {
    language: Option<String>,
    title: Option<String>,
}

/// ffprobe reports `duration` as a decimal string in most containers but as
/// a bare number in some; accept both.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DurationField {
    Text(String),
    Number(f64),
}

impl DurationField {
    fn as_secs(&self) -> Option<f64> {
        match self {
            DurationField::Text(s) => s.parse::<f64>().ok(),
            DurationField::Number(n) => Some(*n),
        }
    }
}

/// Probes a container file and returns one descriptor per elementary stream.
///
/// Descriptors come back in the order of the container's stream table as
/// reported by ffprobe; the order is preserved, not re-sorted.
///
/// # Errors
///
/// * `CoreError::ProbeExecution` - ffprobe could not be launched, or exited
///   with a failure status
/// * `CoreError::ProbeParse` - ffprobe succeeded but its output was not the
///   expected JSON shape
pub fn probe_streams(input_path: &Path) -> CoreResult<Vec<StreamDescriptor>> {
    log::debug!("Running ffprobe on: {}", input_path.display());

    let output = Command::new("ffprobe")
        .args(["-v", "quiet", "-print_format", "json", "-show_streams"])
        .arg(input_path)
        .output()
        .map_err(|e| probe_execution_error(format!("Failed to run ffprobe: {e}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        log::error!(
            "ffprobe failed for {}: {} {}",
            input_path.display(),
            output.status,
            stderr.trim()
        );
        return Err(probe_execution_error(format!(
            "ffprobe exited with {} for '{}'",
            output.status,
            input_path.display()
        )));
    }

    let parsed: FfprobeOutput = serde_json::from_slice(&output.stdout)
        .map_err(|e| probe_parse_error(e.to_string()))?;

    Ok(parsed.streams.into_iter().map(into_descriptor).collect())
}

fn into_descriptor(stream: FfprobeStream) -> StreamDescriptor {
    StreamDescriptor {
        index: stream.index,
        codec_type: CodecType::from_ffprobe(stream.codec_type.as_deref()),
        codec_name: stream.codec_name,
        language: stream.tags.language,
        title: stream.tags.title,
        duration_secs: stream.duration.as_ref().and_then(DurationField::as_secs),
    }
}
