// trackrip-core/src/external/mocks.rs

// --- Mocking Infrastructure (for testing) ---

// This module is only compiled when the "test-mocks" feature is enabled.
#![cfg(feature = "test-mocks")]

use super::*;
use crate::error::{CoreError, CoreResult};
use ffmpeg_sidecar::command::FfmpegCommand;
use std::cell::RefCell;
use std::os::unix::process::ExitStatusExt; // For ExitStatus::from_raw
use std::process::ExitStatus;
use std::rc::Rc;

/// Mock implementation of FfmpegProcess.
#[derive(Clone)]
pub struct MockFfmpegProcess {
    /// Exit status to return when wait is called.
    pub exit_status: ExitStatus,
}

impl FfmpegProcess for MockFfmpegProcess {
    fn wait(&mut self) -> CoreResult<ExitStatus> {
        Ok(self.exit_status)
    }
}

/// Represents an expected ffmpeg command call and its mock result.
pub struct MockFfmpegExpectation {
    pub arg_pattern: String,
    pub result: CoreResult<MockFfmpegProcess>,
    pub create_dummy_output: bool,
}

/// Mock implementation of FfmpegSpawner supporting multiple expectations.
#[derive(Clone, Default)]
pub struct MockFfmpegSpawner {
    expectations: Rc<RefCell<Vec<MockFfmpegExpectation>>>,
    received_calls: Rc<RefCell<Vec<Vec<String>>>>,
}

impl MockFfmpegSpawner {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn add_expectation(
        &self,
        arg_pattern: &str,
        result: CoreResult<MockFfmpegProcess>,
        create_dummy_output: bool,
    ) {
        self.expectations.borrow_mut().push(MockFfmpegExpectation {
            arg_pattern: arg_pattern.to_string(),
            result,
            create_dummy_output,
        });
    }

    pub fn add_success_expectation(&self, arg_pattern: &str, create_dummy_output: bool) {
        let process = MockFfmpegProcess {
            exit_status: ExitStatus::from_raw(0),
        };
        self.add_expectation(arg_pattern, Ok(process), create_dummy_output);
    }

    pub fn add_spawn_error_expectation(&self, arg_pattern: &str, error: CoreError) {
        self.add_expectation(arg_pattern, Err(error), false);
    }

    pub fn add_exit_error_expectation(&self, arg_pattern: &str, exit_code: i32) {
        let process = MockFfmpegProcess {
            // wait(2) encoding: the exit code lives in the high byte.
            exit_status: ExitStatus::from_raw(exit_code << 8),
        };
        self.add_expectation(arg_pattern, Ok(process), false);
    }

    pub fn get_received_calls(&self) -> Vec<Vec<String>> {
        self.received_calls.borrow().clone()
    }
}

impl FfmpegSpawner for MockFfmpegSpawner {
    type Process = MockFfmpegProcess;

    fn spawn(&self, cmd: FfmpegCommand) -> CoreResult<Self::Process> {
        let args: Vec<String> = cmd
            .get_args()
            .map(|s| s.to_string_lossy().into_owned())
            .collect();
        self.received_calls.borrow_mut().push(args.clone());

        let mut expectations = self.expectations.borrow_mut();

        let found_index = expectations
            .iter()
            .position(|exp| args.iter().any(|arg| arg.contains(&exp.arg_pattern)));

        if let Some(index) = found_index {
            let expectation = expectations.remove(index);
            log::info!(
                "MockFfmpegSpawner: Matched expectation with pattern '{}'",
                expectation.arg_pattern
            );

            match expectation.result {
                Ok(process) => {
                    if expectation.create_dummy_output {
                        if let Some(output_path_str) = args.last() {
                            let output_path = std::path::PathBuf::from(output_path_str);
                            match std::fs::File::create(&output_path) {
                                Ok(_) => log::info!(
                                    "MockFfmpegSpawner created dummy output file: {:?}",
                                    output_path
                                ),
                                Err(e) => log::error!(
                                    "MockFfmpegSpawner failed to create dummy output file {:?}: {}",
                                    output_path,
                                    e
                                ),
                            }
                        } else {
                            log::warn!(
                                "MockFfmpegSpawner couldn't find output path in args to create dummy file."
                            );
                        }
                    }
                    Ok(process)
                }
                Err(err) => {
                    log::warn!(
                        "MockFfmpegSpawner simulating spawn error for pattern '{}': {:?}",
                        expectation.arg_pattern,
                        err
                    );
                    Err(err)
                }
            }
        } else {
            panic!(
                "MockFfmpegSpawner: No expectation found for command args: {:?}",
                args
            );
        }
    }
}
