//! Per-track trajectory accumulation.

use std::collections::HashMap;
use std::fmt;

use crate::counting::point::Point;

/// Opaque stable track identifier.
///
/// Upstream detectors emit either strings or integers. The identifier
/// is opaque, so the JSON type is part of the identity: integer `7`
/// and string `"7"` key separate tracks, exactly as they would in the
/// source system's mapping.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TrackId {
    Int(i64),
    Str(String),
}

impl From<&str> for TrackId {
    fn from(id: &str) -> Self {
        Self::Str(id.to_owned())
    }
}

impl From<String> for TrackId {
    fn from(id: String) -> Self {
        Self::Str(id)
    }
}

impl From<i64> for TrackId {
    fn from(id: i64) -> Self {
        Self::Int(id)
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(id) => write!(f, "{id}"),
            Self::Str(id) => f.write_str(id),
        }
    }
}

/// One detection record after boundary parsing.
///
/// `track_ids` holds every identity the upstream re-identification
/// stage associated with this box. An unconfirmed detection has no
/// identities and never contributes a trajectory point.
#[derive(Debug, Clone)]
pub struct Detection {
    /// Bounding box in TLBR order (x1, y1, x2, y2)
    pub bbox: [f64; 4],
    /// Track identities associated with this box
    pub track_ids: Vec<TrackId>,
}

impl Detection {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            bbox: [x1, y1, x2, y2],
            track_ids: Vec::new(),
        }
    }

    pub fn with_track(mut self, id: impl Into<TrackId>) -> Self {
        self.track_ids.push(id.into());
        self
    }

    /// Rounded center point of the bounding box.
    pub fn center(&self) -> Point {
        Point::center_of(self.bbox)
    }
}

/// Groups detections by track identity and accumulates each track's
/// ordered center-point sequence.
///
/// Frames must be fed in ingestion order; the builder performs no
/// reordering, deduplication, or smoothing. A detection carrying
/// several track identities appends the same point under every one of
/// them: upstream identity ambiguity is broadcast, not resolved here.
#[derive(Debug, Default)]
pub struct TrajectoryBuilder {
    tracks: HashMap<TrackId, Vec<Point>>,
}

impl TrajectoryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one detection. A detection with no track identities is
    /// ignored.
    pub fn observe(&mut self, detection: &Detection) {
        if detection.track_ids.is_empty() {
            return;
        }
        let center = detection.center();
        for id in &detection.track_ids {
            self.tracks.entry(id.clone()).or_default().push(center);
        }
    }

    /// Record every detection of one frame, in order.
    pub fn observe_all<'a>(&mut self, detections: impl IntoIterator<Item = &'a Detection>) {
        for det in detections {
            self.observe(det);
        }
    }

    pub fn build(self) -> TrajectorySet {
        TrajectorySet {
            tracks: self.tracks,
        }
    }
}

/// Frozen output of a [`TrajectoryBuilder`]: track identity to ordered
/// center-point sequence.
#[derive(Debug, Clone, Default)]
pub struct TrajectorySet {
    tracks: HashMap<TrackId, Vec<Point>>,
}

impl TrajectorySet {
    /// Number of distinct tracks, moving or not.
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn get(&self, id: &TrackId) -> Option<&[Point]> {
        self.tracks.get(id).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&TrackId, &[Point])> {
        self.tracks.iter().map(|(id, pts)| (id, pts.as_slice()))
    }

    /// Tracks observed to move at all: more than one recorded point.
    /// Tracks with zero or one point are excluded.
    pub fn moving_track_count(&self) -> usize {
        self.tracks.values().filter(|pts| pts.len() > 1).count()
    }
}
