use crate::counting::point::Point;

/// A fixed gate segment read once from configuration.
///
/// Two instances exist per run (enter and exit); immutable after load.
/// A zero-length line is not an error, it simply never registers a
/// crossing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceLine {
    pub x1: i64,
    pub y1: i64,
    pub x2: i64,
    pub y2: i64,
}

impl ReferenceLine {
    #[inline]
    pub fn new(x1: i64, y1: i64, x2: i64, y2: i64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Build from the 4-scalar `[x1, y1, x2, y2]` layout used by the
    /// camera configuration, rounding with the same half-to-even rule
    /// as detection centers.
    #[inline]
    pub fn from_coords(coords: [f64; 4]) -> Self {
        Self {
            x1: coords[0].round_ties_even() as i64,
            y1: coords[1].round_ties_even() as i64,
            x2: coords[2].round_ties_even() as i64,
            y2: coords[3].round_ties_even() as i64,
        }
    }

    #[inline]
    pub fn start(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    #[inline]
    pub fn end(&self) -> Point {
        Point::new(self.x2, self.y2)
    }

    /// True when both endpoints coincide.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.start() == self.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_coords_rounds_ties_to_even() {
        let line = ReferenceLine::from_coords([0.5, 1.5, 2.5, 3.5]);
        assert_eq!(line, ReferenceLine::new(0, 2, 2, 4));
    }

    #[test]
    fn test_degenerate() {
        assert!(ReferenceLine::new(3, 3, 3, 3).is_degenerate());
        assert!(!ReferenceLine::new(3, 3, 3, 4).is_degenerate());
    }
}
