//! Per-stage wall-clock timings for a single file.

use std::fmt;
use std::time::{Duration, Instant};

/// The stages of one file's trip through the pipeline, in execution order.
///
/// The discriminant doubles as the slot in [`PipelineTimings`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Read,
    Decode,
    Resize,
    Remap,
    Encode,
    Write,
}

impl Stage {
    pub const ALL: [Stage; 6] = [
        Stage::Read,
        Stage::Decode,
        Stage::Resize,
        Stage::Remap,
        Stage::Encode,
        Stage::Write,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Stage::Read => "read",
            Stage::Decode => "decode",
            Stage::Resize => "resize",
            Stage::Remap => "remap",
            Stage::Encode => "encode",
            Stage::Write => "write",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Time spent in each stage. Stages that did not run stay `None`.
#[derive(Debug, Default, Clone)]
pub struct PipelineTimings {
    stages: [Option<Duration>; 6],
}

impl PipelineTimings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, stage: Stage, duration: Duration) {
        let slot = &mut self.stages[stage as usize];
        *slot = Some(slot.unwrap_or(Duration::ZERO) + duration);
    }

    /// Runs `f` and charges its wall time to `stage`, whatever it returns.
    pub fn measure<T>(&mut self, stage: Stage, f: impl FnOnce() -> T) -> T {
        let start = Instant::now();
        let out = f();
        self.record(stage, start.elapsed());
        out
    }

    pub fn get(&self, stage: Stage) -> Option<Duration> {
        self.stages[stage as usize]
    }

    pub fn total(&self) -> Duration {
        self.stages.iter().flatten().sum()
    }

    /// One line such as `read 0.2ms | decode 4.1ms | ... | total 9.8ms`.
    pub fn summary_line(&self) -> String {
        let mut parts: Vec<String> = Stage::ALL
            .iter()
            .filter_map(|stage| self.get(*stage).map(|d| format!("{} {}", stage, millis(d))))
            .collect();
        parts.push(format!("total {}", millis(self.total())));
        parts.join(" | ")
    }
}

fn millis(duration: Duration) -> String {
    format!("{:.1}ms", duration.as_secs_f64() * 1000.0)
}
