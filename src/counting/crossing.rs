//! Gate-crossing detection over accumulated trajectories.

use crate::counting::line::ReferenceLine;
use crate::counting::point::{Point, orient};
use crate::counting::trajectory::TrajectorySet;

/// Configuration for the crossing counter.
#[derive(Debug, Clone, Copy)]
pub struct CounterConfig {
    /// Treat each trajectory as a closed loop: the first and last
    /// recorded points form an extra implicit edge.
    ///
    /// This reproduces the reference system, where negative indexing
    /// paired point 0 with the last point. It does not reflect true
    /// motion continuity and is a likely latent defect there, so it is
    /// kept behind this flag; set `false` for the corrected open-path
    /// variant.
    pub closed_path: bool,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self { closed_path: true }
    }
}

/// Counts proper intersections between one gate segment and every
/// consecutive-point edge of every qualifying track.
///
/// The test is a strict orientation straddle on exact integer cross
/// products: edges that merely touch the gate, run collinear with it,
/// or share an endpoint never count. Tracks with fewer than two points
/// contribute nothing. One track can contribute several crossings if
/// its path weaves back and forth across the gate.
#[derive(Debug, Clone, Copy)]
pub struct CrossingCounter {
    line: ReferenceLine,
    config: CounterConfig,
}

impl CrossingCounter {
    pub fn new(line: ReferenceLine) -> Self {
        Self::with_config(line, CounterConfig::default())
    }

    pub fn with_config(line: ReferenceLine, config: CounterConfig) -> Self {
        Self { line, config }
    }

    /// Total crossings over every track in the set.
    pub fn count(&self, trajectories: &TrajectorySet) -> u64 {
        trajectories
            .iter()
            .map(|(_, points)| self.count_track(points))
            .sum()
    }

    /// Crossings contributed by a single point sequence.
    pub fn count_track(&self, points: &[Point]) -> u64 {
        if points.len() < 2 {
            return 0;
        }
        let start = if self.config.closed_path { 0 } else { 1 };
        let mut count = 0;
        for i in start..points.len() {
            let prev = if i == 0 { points.len() - 1 } else { i - 1 };
            if self.edge_crosses(points[i], points[prev]) {
                count += 1;
            }
        }
        count
    }

    fn edge_crosses(&self, a: Point, b: Point) -> bool {
        let p = self.line.start();
        let q = self.line.end();
        // orientation signs, so the straddle products stay in i8
        let v1 = orient(p, q, a);
        let v2 = orient(p, q, b);
        let v3 = orient(a, b, p);
        let v4 = orient(a, b, q);
        // strict straddle: any zero (touching or collinear) is excluded
        v1 * v2 < 0 && v3 * v4 < 0
    }
}
