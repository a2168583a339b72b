//! FFmpeg process management and abstraction.
//!
//! Defines the trait pair used to spawn and await ffmpeg processes, plus the
//! concrete implementation backed by ffmpeg-sidecar. The traits exist so the
//! extraction orchestrator can be driven by a mock spawner in tests instead
//! of a real ffmpeg binary.

use crate::error::{CoreError, CoreResult, extract_start_error};
use ffmpeg_sidecar::child::FfmpegChild as SidecarChild;
use ffmpeg_sidecar::command::FfmpegCommand;
use std::process::ExitStatus;

/// Trait representing an active ffmpeg process instance.
pub trait FfmpegProcess {
    /// Waits for the process to terminate and returns its exit status.
    ///
    /// Consumes the underlying handle on every path, so no process handle
    /// outlives the call.
    fn wait(&mut self) -> CoreResult<ExitStatus>;
}

/// Trait representing something that can spawn an [`FfmpegProcess`].
pub trait FfmpegSpawner {
    type Process: FfmpegProcess;

    /// Spawns the ffmpeg command, consuming the command object.
    fn spawn(&self, cmd: FfmpegCommand) -> CoreResult<Self::Process>;
}

/// Wrapper around `ffmpeg_sidecar::child::FfmpegChild` implementing
/// [`FfmpegProcess`].
pub struct SidecarProcess(SidecarChild);

impl FfmpegProcess for SidecarProcess {
    fn wait(&mut self) -> CoreResult<ExitStatus> {
        self.0.wait().map_err(CoreError::Io)
    }
}

/// Concrete implementation of [`FfmpegSpawner`] using ffmpeg-sidecar.
#[derive(Debug, Clone, Default)]
pub struct SidecarSpawner;

impl FfmpegSpawner for SidecarSpawner {
    type Process = SidecarProcess;

    fn spawn(&self, mut cmd: FfmpegCommand) -> CoreResult<Self::Process> {
        cmd.spawn()
            .map(SidecarProcess)
            .map_err(|e| extract_start_error(format!("Failed to start: {e}")))
    }
}
