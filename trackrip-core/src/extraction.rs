//! Stream extraction orchestration.
//!
//! Turns a validated [`ExtractionRequest`] into a completed output file by
//! computing a collision-free path and running ffmpeg in stream-copy mode
//! against the single selected stream. No re-encoding takes place; the
//! compressed stream data is remuxed into a new container as-is.

use crate::error::{CoreError, CoreResult, invalid_request_error};
use crate::external::{FfmpegProcess, FfmpegSpawner, SidecarSpawner};
use crate::outpath::build_output_path;
use crate::streams::CodecType;

use ffmpeg_sidecar::command::FfmpegCommand;
use std::path::PathBuf;
use std::sync::Mutex;

/// Ephemeral value describing one extraction, built by the caller from a
/// descriptor returned by the most recent probe of `source_path`.
///
/// The orchestrator does not re-validate `stream_index` against the file; an
/// out-of-range index surfaces as the copier's failure.
#[derive(Debug, Clone)]
pub struct ExtractionRequest {
    pub source_path: PathBuf,
    pub stream_index: u32,
    pub codec_type: CodecType,
}

impl ExtractionRequest {
    /// Rejects a malformed request before any process is spawned.
    fn validate(&self) -> CoreResult<()> {
        if self.source_path.as_os_str().is_empty() {
            return Err(invalid_request_error("missing source path"));
        }
        Ok(())
    }
}

/// Stream copy orchestrator.
///
/// Stateless between calls apart from the in-flight slot: extractions are
/// serialized so two calls cannot race on output-path collision avoidance.
pub struct Extractor<S: FfmpegSpawner = SidecarSpawner> {
    spawner: S,
    in_flight: Mutex<()>,
}

impl Extractor<SidecarSpawner> {
    /// Creates an extractor backed by the real ffmpeg binary.
    pub fn new() -> Self {
        Self::with_spawner(SidecarSpawner)
    }
}

impl Default for Extractor<SidecarSpawner> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: FfmpegSpawner> Extractor<S> {
    /// Creates an extractor with a custom process spawner.
    pub fn with_spawner(spawner: S) -> Self {
        Extractor {
            spawner,
            in_flight: Mutex::new(()),
        }
    }

    /// Losslessly remuxes the selected stream into a new file next to the
    /// source and returns the output path.
    ///
    /// Exactly one child process runs per call; the call blocks until the
    /// child terminates, and the process handle is released on every exit
    /// path. Calling twice with identical input produces two distinct
    /// output files; the first is never overwritten.
    ///
    /// # Errors
    ///
    /// * `CoreError::InvalidRequest` - Malformed request, nothing spawned
    /// * `CoreError::ExtractStart` - ffmpeg could not be launched
    /// * `CoreError::ExtractExit` - ffmpeg exited non-zero; the status is
    ///   carried verbatim. A partial output file, if ffmpeg left one, is not
    ///   cleaned up and counts as existing for the next collision check.
    pub fn extract(&self, request: &ExtractionRequest) -> CoreResult<PathBuf> {
        request.validate()?;

        // A panicked extraction leaves the slot poisoned but still usable.
        let _in_flight = self
            .in_flight
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let output_path =
            build_output_path(&request.source_path, request.codec_type, request.stream_index)?;

        log::info!(
            "Extracting stream {} of {} to {}",
            request.stream_index,
            request.source_path.display(),
            output_path.display()
        );

        let mut cmd = FfmpegCommand::new();
        cmd.arg("-n"); // Never overwrite
        cmd.arg("-v");
        cmd.arg("error");
        cmd.input(request.source_path.to_string_lossy().as_ref());
        cmd.arg("-map");
        cmd.arg(format!("0:{}", request.stream_index));
        cmd.arg("-c"); // Use stream copy
        cmd.arg("copy");
        cmd.output(output_path.to_string_lossy().as_ref());

        log::debug!("Running stream copy command: {:?}", cmd);

        let status = self.spawner.spawn(cmd)?.wait()?;
        if !status.success() {
            log::error!("Stream copy failed: {}", status);
            return Err(CoreError::ExtractExit(status));
        }

        log::info!("Stream extracted successfully to: {}", output_path.display());
        Ok(output_path)
    }
}
