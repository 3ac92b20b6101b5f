/// Integer center point of a detection.
///
/// Coordinates are produced by rounding the bounding-box midpoint with
/// round-half-to-even (the same tie rule as Python's `round`), so every
/// downstream cross product is an exact integer and the crossing test
/// needs no epsilon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    #[inline]
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Rounded midpoint of a TLBR bounding box.
    ///
    /// Each coordinate is rounded independently; ties go to the even
    /// integer. The rule is fixed because it changes crossing outcomes
    /// for paths that graze a gate at exact half-pixel coordinates.
    #[inline]
    pub fn center_of(bbox: [f64; 4]) -> Self {
        Self {
            x: ((bbox[0] + bbox[2]) / 2.0).round_ties_even() as i64,
            y: ((bbox[1] + bbox[3]) / 2.0).round_ties_even() as i64,
        }
    }
}

/// Sign of the cross product of `(q - p)` and `(r - p)`.
///
/// `1` when `r` lies to the left of the directed line `p -> q`, `-1`
/// to the right, `0` when collinear. Coordinate differences are taken
/// in i128 (an i64 difference needs 65 bits) and the two partial
/// products are compared as sign and u128 magnitude, so the result is
/// exact for every representable coordinate.
pub fn orient(p: Point, q: Point, r: Point) -> i8 {
    let (qx, qy) = (q.x as i128 - p.x as i128, q.y as i128 - p.y as i128);
    let (rx, ry) = (r.x as i128 - p.x as i128, r.y as i128 - p.y as i128);
    // |difference| < 2^64, so each magnitude product fits in u128
    let lhs = (sign(qx) * sign(ry), qx.unsigned_abs() * ry.unsigned_abs());
    let rhs = (sign(qy) * sign(rx), qy.unsigned_abs() * rx.unsigned_abs());
    match cmp_signed(lhs, rhs) {
        std::cmp::Ordering::Greater => 1,
        std::cmp::Ordering::Less => -1,
        std::cmp::Ordering::Equal => 0,
    }
}

#[inline]
fn sign(v: i128) -> i8 {
    v.signum() as i8
}

/// Order two sign/magnitude values as the integers they represent.
fn cmp_signed(a: (i8, u128), b: (i8, u128)) -> std::cmp::Ordering {
    match a.0.cmp(&b.0) {
        std::cmp::Ordering::Equal if a.0 >= 0 => a.1.cmp(&b.1),
        std::cmp::Ordering::Equal => b.1.cmp(&a.1),
        unequal => unequal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_exact() {
        let p = Point::center_of([10.0, 20.0, 30.0, 40.0]);
        assert_eq!(p, Point::new(20, 30));
    }

    #[test]
    fn test_center_ties_round_to_even() {
        // midpoints 2.5 and 3.5: both round to the even neighbour
        let p = Point::center_of([0.0, 0.0, 5.0, 7.0]);
        assert_eq!(p, Point::new(2, 4));
    }

    #[test]
    fn test_center_negative_coordinates() {
        let p = Point::center_of([-10.0, -4.0, -5.0, -3.0]);
        // midpoints -7.5 and -3.5 round to -8 and -4
        assert_eq!(p, Point::new(-8, -4));
    }

    #[test]
    fn test_orient_sign() {
        let p = Point::new(0, 0);
        let q = Point::new(10, 0);
        assert_eq!(orient(p, q, Point::new(5, 5)), 1);
        assert_eq!(orient(p, q, Point::new(5, -5)), -1);
        assert_eq!(orient(p, q, Point::new(20, 0)), 0);
    }

    #[test]
    fn test_orient_extreme_coordinates() {
        let p = Point::new(i64::MIN, i64::MIN);
        let q = Point::new(i64::MAX, i64::MIN);
        let r = Point::new(i64::MAX, i64::MAX);
        assert_eq!(orient(p, q, r), 1);
        assert_eq!(orient(p, r, q), -1);
        assert_eq!(orient(p, q, Point::new(0, i64::MIN)), 0);
    }
}
