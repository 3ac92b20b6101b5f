//! Batch pipeline assembling the three output counts.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::counting::crossing::{CounterConfig, CrossingCounter};
use crate::counting::trajectory::TrajectoryBuilder;
use crate::ingest::Scene;

/// Result of one batch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GateReport {
    /// Trajectory edges crossing the enter gate
    pub enters: u64,
    /// Trajectory edges crossing the exit gate
    pub exits: u64,
    /// Tracks with more than one recorded point
    pub active_tracks: usize,
}

/// Prints the three counts in output order, one per line.
impl fmt::Display for GateReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.enters)?;
        writeln!(f, "{}", self.exits)?;
        writeln!(f, "{}", self.active_tracks)
    }
}

/// Bundles trajectory aggregation with the two gate counters.
///
/// One call to [`GateCounter::analyze`] consumes one frozen scene and
/// produces one report; nothing is cached across calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct GateCounter {
    config: CounterConfig,
}

impl GateCounter {
    pub fn new(config: CounterConfig) -> Self {
        Self { config }
    }

    pub fn analyze(&self, scene: &Scene) -> GateReport {
        let mut builder = TrajectoryBuilder::new();
        for frame in &scene.frames {
            builder.observe_all(&frame.detections);
        }
        let trajectories = builder.build();
        debug!(
            tracks = trajectories.len(),
            moving = trajectories.moving_track_count(),
            "trajectories accumulated"
        );

        let enters = CrossingCounter::with_config(scene.enter_line, self.config);
        let exits = CrossingCounter::with_config(scene.exit_line, self.config);
        GateReport {
            enters: enters.count(&trajectories),
            exits: exits.count(&trajectories),
            active_tracks: trajectories.moving_track_count(),
        }
    }
}
