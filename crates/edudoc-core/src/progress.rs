//! Generation progress phases
//!
//! Generation itself is instant; these phases only pace the feedback a
//! front end shows while it runs. Each phase is held for a fixed delay.

use std::time::Duration;

use serde::Serialize;

/// One step of the progress animation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProgressPhase {
    /// Status line shown while the phase is held
    pub message: &'static str,
    /// Completion percentage reached by this phase
    pub percent: u8,
}

/// The phases, in order
pub const PHASES: [ProgressPhase; 5] = [
    ProgressPhase {
        message: "Analyzing your topic and requirements...",
        percent: 20,
    },
    ProgressPhase {
        message: "Selecting appropriate AI models...",
        percent: 40,
    },
    ProgressPhase {
        message: "Generating content structure...",
        percent: 60,
    },
    ProgressPhase {
        message: "Writing detailed sections...",
        percent: 80,
    },
    ProgressPhase {
        message: "Finalizing and formatting...",
        percent: 100,
    },
];

/// Play every phase, calling `on_phase` and then `wait` with the delay
///
/// `wait` is a parameter so callers choose how to block (thread sleep in a
/// CLI, nothing at all in tests).
pub fn run_phases<F, W>(step_delay: Duration, mut on_phase: F, mut wait: W)
where
    F: FnMut(&ProgressPhase),
    W: FnMut(Duration),
{
    for phase in &PHASES {
        on_phase(phase);
        wait(step_delay);
    }
}

/// Total time the sequence takes with `step_delay` per phase
pub fn total_duration(step_delay: Duration) -> Duration {
    step_delay * PHASES.len() as u32
}
