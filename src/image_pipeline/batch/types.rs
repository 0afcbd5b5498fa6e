//! Per-file and per-run batch outcomes

use std::path::{Path, PathBuf};

use crate::image_pipeline::common::error::{ErrorKind, Result};

/// Outcome of processing one input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessResult {
    Success {
        input: PathBuf,
        output: PathBuf,
    },
    Failure {
        input: PathBuf,
        kind: ErrorKind,
        message: String,
    },
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

impl ProcessResult {
    pub fn from_outcome(input: PathBuf, outcome: Result<PathBuf>) -> Self {
        match outcome {
            Ok(output) => ProcessResult::Success { input, output },
            Err(e) => ProcessResult::Failure {
                input,
                kind: e.kind(),
                message: e.to_string(),
            },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ProcessResult::Success { .. })
    }

    pub fn input(&self) -> &Path {
        match self {
            ProcessResult::Success { input, .. } | ProcessResult::Failure { input, .. } => input,
        }
    }

    pub fn output(&self) -> Option<&Path> {
        match self {
            ProcessResult::Success { output, .. } => Some(output),
            ProcessResult::Failure { .. } => None,
        }
    }

    pub fn error_kind(&self) -> Option<ErrorKind> {
        match self {
            ProcessResult::Success { .. } => None,
            ProcessResult::Failure { kind, .. } => Some(*kind),
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            ProcessResult::Success { .. } => None,
            ProcessResult::Failure { message, .. } => Some(message),
        }
    }

    /// One human-readable line, e.g. `OK: brick.tga` or
    /// `FAILED: brick.png (Failed to decode image: ...)`.
    pub fn report_line(&self) -> String {
        match self {
            ProcessResult::Success { output, .. } => format!("OK: {}", display_name(output)),
            ProcessResult::Failure { input, message, .. } => {
                format!("FAILED: {} ({})", display_name(input), message)
            }
        }
    }
}

/// Everything one batch run produced, in input order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub results: Vec<ProcessResult>,
    /// Set when a cancel request stopped the run before the last file.
    pub cancelled: bool,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.results.len()
    }

    pub fn succeeded(&self) -> usize {
        self.results.iter().filter(|r| r.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.succeeded()
    }

    pub fn failures(&self) -> impl Iterator<Item = &ProcessResult> {
        self.results.iter().filter(|r| !r.is_success())
    }

    pub fn summary(&self) -> String {
        format!("{}/{} succeeded", self.succeeded(), self.total())
    }
}
