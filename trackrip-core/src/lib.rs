//! Core library for lossless elementary stream extraction using ffmpeg and
//! ffprobe.
//!
//! This crate provides container probing, output path construction, and
//! single-stream remuxing. All media parsing and demuxing is delegated to the
//! external binaries; the library owns argument construction, collision-free
//! output naming, process lifecycle, and error marshalling.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use trackrip_core::{Extractor, ExtractionRequest, probe_streams};
//! use std::path::PathBuf;
//!
//! let streams = probe_streams(std::path::Path::new("movie.mkv")).unwrap();
//! let chosen = &streams[0];
//!
//! let extractor = Extractor::new();
//! let output = extractor
//!     .extract(&ExtractionRequest {
//!         source_path: PathBuf::from("movie.mkv"),
//!         stream_index: chosen.index,
//!         codec_type: chosen.codec_type,
//!     })
//!     .unwrap();
//! println!("extracted to {}", output.display());
//! ```

pub mod discovery;
pub mod error;
pub mod external;
pub mod extraction;
pub mod outpath;
pub mod streams;

// Re-exports for public API
pub use discovery::{ACCEPTED_EXTENSIONS, find_selectable_files};
pub use error::{CoreError, CoreResult};
pub use external::{check_dependency, probe_streams};
pub use extraction::{ExtractionRequest, Extractor};
pub use outpath::build_output_path;
pub use streams::{CodecType, StreamDescriptor};
