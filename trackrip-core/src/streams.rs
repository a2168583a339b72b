//! Stream descriptor types produced by container probing.
//!
//! A probe returns one `StreamDescriptor` per elementary stream, in the
//! order ffprobe reports them. Descriptors are read-only snapshots: they are
//! valid for display and for building an extraction request against the same
//! file, and are never persisted.

use std::fmt;

/// Codec class of an elementary stream, as reported by ffprobe's
/// `codec_type` field. Any unrecognized or absent value maps to `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecType {
    Video,
    Audio,
    Subtitle,
    Data,
    Attachment,
    Unknown,
}

impl CodecType {
    /// Maps ffprobe's `codec_type` string onto a codec class.
    pub fn from_ffprobe(value: Option<&str>) -> Self {
        match value {
            Some("video") => CodecType::Video,
            Some("audio") => CodecType::Audio,
            Some("subtitle") => CodecType::Subtitle,
            Some("data") => CodecType::Data,
            Some("attachment") => CodecType::Attachment,
            _ => CodecType::Unknown,
        }
    }

    /// Output file extension for a stream copy of this codec class.
    ///
    /// Total and pure. Known limitation: stream-copy output is not
    /// guaranteed to be valid for every codec/container combination; the
    /// extension encodes the codec class, not a verified container choice.
    pub fn extension(&self) -> &'static str {
        match self {
            CodecType::Video => "mp4",
            CodecType::Audio => "aac",
            CodecType::Subtitle => "srt",
            _ => "bin",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CodecType::Video => "video",
            CodecType::Audio => "audio",
            CodecType::Subtitle => "subtitle",
            CodecType::Data => "data",
            CodecType::Attachment => "attachment",
            CodecType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for CodecType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read-only snapshot of one elementary stream inside a container.
///
/// `index` is unique within a single probe result and stable only for the
/// lifetime of that result; re-probing the same file yields a fresh set.
#[derive(Debug, Clone)]
pub struct StreamDescriptor {
    pub index: u32,
    pub codec_type: CodecType,
    /// Short codec identifier, display-only.
    pub codec_name: Option<String>,
    /// Language tag from the container, when present.
    pub language: Option<String>,
    /// Title tag from the container, when present.
    pub title: Option<String>,
    /// Duration in seconds as reported by the container. Display-only,
    /// never validated.
    pub duration_secs: Option<f64>,
}
