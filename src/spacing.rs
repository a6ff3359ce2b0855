use tracing::debug;

use crate::point::Point;

/// Spacing below which two consecutive points are treated as coincident.
pub const DEGENERATE_SPACING: f64 = 1e-4;

/// Centripetal knot spacing of one 4-point segment.
/// - `dt0` - spacing between first and second point,
/// - `dt1` - spacing between second and third point, the interpolated interval,
/// - `dt2` - spacing between third and fourth point.
///
/// All values are strictly positive, every constructor applies the degenerate spacing fallback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KnotSpacing {
    dt0: f64,
    dt1: f64,
    dt2: f64,
}

impl KnotSpacing {
    /// Spacing from explicit values. Values below [DEGENERATE_SPACING] (or NaN) are replaced
    /// the same way as for coincident points.
    /// # Example
    /// ```
    /// use centripetal_spline::KnotSpacing;
    ///
    /// let spacing = KnotSpacing::new(0.0, 0.0, 2.0);
    /// assert_eq!(1.0, spacing.get_dt0());
    /// assert_eq!(1.0, spacing.get_dt1());
    /// assert_eq!(2.0, spacing.get_dt2());
    /// ```
    pub fn new(dt0: f64, dt1: f64, dt2: f64) -> Self {
        KnotSpacing { dt0, dt1, dt2 }.with_degenerate_fallback()
    }

    /// Spacing between consecutive points equal to square root of their distance.
    /// Coincident points fall back to spacing of the middle interval, which itself falls back to 1.
    /// # Example
    /// ```
    /// use centripetal_spline::{KnotSpacing, Point};
    /// use assert_approx_eq::assert_approx_eq;
    ///
    /// let spacing = KnotSpacing::centripetal(
    ///     &Point::from((0.0, 0.0)),
    ///     &Point::from((4.0, 0.0)),
    ///     &Point::from((4.0, 9.0)),
    ///     &Point::from((4.0, 9.0)),
    /// );
    /// assert_approx_eq!(2.0, spacing.get_dt0(), 1e-12);
    /// assert_approx_eq!(3.0, spacing.get_dt1(), 1e-12);
    /// assert_approx_eq!(3.0, spacing.get_dt2(), 1e-12);
    /// ```
    pub fn centripetal(p0: &Point, p1: &Point, p2: &Point, p3: &Point) -> Self {
        KnotSpacing::new(
            centripetal_distance(p0, p1),
            centripetal_distance(p1, p2),
            centripetal_distance(p2, p3),
        )
    }

    /// Unit spacing of the classic uniform Catmull-Rom spline (tangents `(x2 - x0) / 2`).
    pub fn uniform() -> Self {
        KnotSpacing { dt0: 1.0, dt1: 1.0, dt2: 1.0 }
    }

    pub fn get_dt0(&self) -> f64 {
        self.dt0
    }

    pub fn get_dt1(&self) -> f64 {
        self.dt1
    }

    pub fn get_dt2(&self) -> f64 {
        self.dt2
    }

    fn with_degenerate_fallback(mut self) -> Self {
        if is_degenerate(self.dt1) {
            debug!(dt1 = self.dt1, "middle points coincide, using unit spacing");
            self.dt1 = 1.0;
        }
        if is_degenerate(self.dt0) {
            debug!(dt0 = self.dt0, dt1 = self.dt1, "first points coincide, reusing middle spacing");
            self.dt0 = self.dt1;
        }
        if is_degenerate(self.dt2) {
            debug!(dt2 = self.dt2, dt1 = self.dt1, "last points coincide, reusing middle spacing");
            self.dt2 = self.dt1;
        }
        self
    }
}

fn is_degenerate(dt: f64) -> bool {
    !(dt >= DEGENERATE_SPACING)
}

/// Square root of chord length. Chord is scaled by its largest coordinate
/// so squaring does not overflow for large coordinates.
fn centripetal_distance(from: &Point, to: &Point) -> f64 {
    let chord = from.chord_to(to).get_coordinates().clone();
    let scale = chord.amax();
    if scale == 0.0 {
        return 0.0;
    }
    let unit = chord / scale;
    scale.sqrt() * fourth_root(unit.dot(&unit))
}

pub(crate) fn fourth_root(value: f64) -> f64 {
    value.sqrt().sqrt()
}
