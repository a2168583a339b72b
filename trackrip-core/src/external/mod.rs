//! Interactions with the external media tools.
//!
//! This module encapsulates all contact with the ffprobe and ffmpeg child
//! processes. The prober is invoked directly and its JSON output parsed; the
//! copier sits behind a spawner trait so tests can inject a mock process
//! instead of a real binary.

use crate::error::{CoreError, CoreResult};

use std::io;
use std::process::{Command, Stdio};

/// Contains traits and implementations for spawning ffmpeg processes
pub mod ffmpeg_executor;

/// Contains the ffprobe invocation and stream-table parsing
pub mod ffprobe_executor;

/// Mock spawner for tests (feature `test-mocks`)
pub mod mocks;

pub use ffmpeg_executor::{FfmpegProcess, FfmpegSpawner, SidecarProcess, SidecarSpawner};
pub use ffprobe_executor::probe_streams;

/// Checks if a required external command is available and executable.
///
/// Runs the command with `-version`, discarding its output; the exit status
/// is irrelevant, only whether the binary could be started.
///
/// # Returns
///
/// * `Ok(())` - The command is present
/// * `Err(CoreError::DependencyNotFound)` - The command is not on the PATH
/// * `Err(CoreError::Io)` - The command exists but failed to start
pub fn check_dependency(cmd_name: &str) -> CoreResult<()> {
    let result = Command::new(cmd_name)
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match result {
        Ok(_) => {
            log::debug!("Found dependency: {}", cmd_name);
            Ok(())
        }
        Err(e) => {
            if e.kind() == io::ErrorKind::NotFound {
                log::warn!("Dependency '{}' not found.", cmd_name);
                Err(CoreError::DependencyNotFound(cmd_name.to_string()))
            } else {
                log::error!("Failed to start dependency check for '{}': {}", cmd_name, e);
                Err(CoreError::Io(e))
            }
        }
    }
}
