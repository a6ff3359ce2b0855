use nalgebra::DMatrix;

use crate::{
    curves::{DerivedCurves, SegmentCurves},
    error::SplineError,
    interpolants::InterpolantSequence,
    point::Point,
    polynomial::Polynomial,
    spacing::KnotSpacing,
};

/// Four consecutive points defining one cubic piece of the spline.
/// The piece runs from the second point (parameter 0) to the third point (parameter 1),
/// outer points only shape the tangents.
#[derive(Debug, Clone, Copy)]
pub struct Segment<'a> {
    points: [&'a Point; 4],
}

impl<'a> Segment<'a> {
    /// # Errors
    /// - [SplineError::EmptyPoint] when points have no coordinates,
    /// - [SplineError::DimensionMismatch] when points differ in dimension.
    pub fn new(p0: &'a Point, p1: &'a Point, p2: &'a Point, p3: &'a Point) -> Result<Self, SplineError> {
        let points = [p0, p1, p2, p3];
        let dimension = p0.get_dimension();
        if dimension == 0 {
            return Err(SplineError::EmptyPoint);
        }
        for (index, point) in points.iter().enumerate() {
            if point.get_dimension() != dimension {
                return Err(SplineError::DimensionMismatch {
                    index,
                    expected: dimension,
                    found: point.get_dimension(),
                });
            }
        }
        Ok(Segment { points })
    }

    /// Window must hold exactly 4 points of equal dimension.
    pub(crate) fn from_window(window: &'a [Point]) -> Self {
        Segment { points: [&window[0], &window[1], &window[2], &window[3]] }
    }

    pub fn get_dimension(&self) -> usize {
        self.points[0].get_dimension()
    }

    pub fn get_start(&self) -> &'a Point {
        self.points[1]
    }

    pub fn get_end(&self) -> &'a Point {
        self.points[2]
    }

    pub fn spacing(&self) -> KnotSpacing {
        let [p0, p1, p2, p3] = self.points;
        KnotSpacing::centripetal(p0, p1, p2, p3)
    }

    /// One cubic per axis, parametrised on `[0, 1]`.
    pub fn cubics(&self) -> Vec<Polynomial> {
        let spacing = self.spacing();
        let [p0, p1, p2, p3] = self.points;

        (0..self.get_dimension())
            .map(|axis| hermite_axis_cubic([p0[axis], p1[axis], p2[axis], p3[axis]], &spacing))
            .collect()
    }

    /// Cubics with derived polynomials selected by `request`.
    pub fn curves(&self, request: &DerivedCurves) -> SegmentCurves {
        SegmentCurves::derive(self.cubics(), request)
    }

    /// Evaluates the segment at a single parameter value.
    pub fn point_at(&self, s: f64) -> Point {
        Point::new(self.cubics().iter().map(|cubic| cubic.evaluate(s)).collect())
    }

    /// Matrix with one row per interpolant and one column per axis.
    /// First and last rows are exact copies of the segment's second and third point.
    /// # Example
    /// ```
    /// use centripetal_spline::{InterpolantSequence, Point, Segment};
    ///
    /// let points: Vec<Point> = vec![(0.0, 0.0).into(), (1.0, 1.0).into(), (2.0, 0.0).into(), (3.0, 1.0).into()];
    /// let segment = Segment::new(&points[0], &points[1], &points[2], &points[3]).unwrap();
    /// let result = segment.evaluate(&InterpolantSequence::uniform(3).unwrap());
    ///
    /// assert_eq!(3, result.nrows());
    /// assert_eq!(1.0, result[(0, 1)]);
    /// assert_eq!(2.0, result[(2, 0)]);
    /// ```
    pub fn evaluate(&self, interpolants: &InterpolantSequence) -> DMatrix<f64> {
        let mut output = DMatrix::<f64>::zeros(interpolants.len(), self.get_dimension());
        self.write_rows(&self.cubics(), interpolants, &mut output, 0, false);
        output
    }

    /// Writes evaluated rows into `output` starting at `start_row`.
    /// With `skip_first` the boundary row shared with previous segment is left untouched.
    pub(crate) fn write_rows(
        &self,
        cubics: &[Polynomial],
        interpolants: &InterpolantSequence,
        output: &mut DMatrix<f64>,
        start_row: usize,
        skip_first: bool,
    ) {
        let last = interpolants.len() - 1;
        let first = if skip_first { 1 } else { 0 };

        for (i, s) in interpolants.iter().enumerate().skip(first) {
            let row = start_row + i - first;
            for (axis, cubic) in cubics.iter().enumerate() {
                output[(row, axis)] = if i == 0 {
                    self.get_start()[axis]
                } else if i == last {
                    self.get_end()[axis]
                } else {
                    cubic.evaluate(*s)
                };
            }
        }
    }
}

/// Hermite cubic on `[0, 1]` through `x[1]` and `x[2]` for one axis.
/// Tangents are non-uniform Catmull-Rom finite differences rescaled by `dt1`.
/// `spacing` is always strictly positive, see [KnotSpacing::new].
pub fn hermite_axis_cubic(x: [f64; 4], spacing: &KnotSpacing) -> Polynomial {
    let [x0, x1, x2, x3] = x;
    let (dt0, dt1, dt2) = (spacing.get_dt0(), spacing.get_dt1(), spacing.get_dt2());

    let t1 = (x1 - x0) / dt0 - (x2 - x0) / (dt0 + dt1) + (x2 - x1) / dt1;
    let t2 = (x2 - x1) / dt1 - (x3 - x1) / (dt1 + dt2) + (x3 - x2) / dt2;

    let t1 = t1 * dt1;
    let t2 = t2 * dt1;

    Polynomial::new(vec![
        x1,
        t1,
        -3.0 * x1 + 3.0 * x2 - 2.0 * t1 - t2,
        2.0 * x1 - 2.0 * x2 + t1 + t2,
    ])
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use rand::Rng;

    use super::*;

    fn random_points(count: usize, dimension: usize) -> Vec<Point> {
        let mut rng = rand::thread_rng();
        (0..count)
            .map(|_| Point::new((0..dimension).map(|_| rng.gen_range(-10.0..10.0)).collect()))
            .collect()
    }

    #[test]
    fn uniform_spacing_is_classic_catmull_rom() {
        let eps = 1e-12;
        let cubic = hermite_axis_cubic([0.0, 1.0, 3.0, 2.0], &KnotSpacing::uniform());

        // 0.5 * (2 p1 + (p2 - p0) s + (2 p0 - 5 p1 + 4 p2 - p3) s^2 + (-p0 + 3 p1 - 3 p2 + p3) s^3)
        let expected = [1.0, 1.5, 2.5, -2.0];
        for (c, e) in cubic.coefficients().iter().zip(expected.iter()) {
            assert_approx_eq!(*e, *c, eps);
        }
    }

    #[test]
    fn cubic_hits_inner_points() {
        let eps = 1e-9;

        for _ in 0..100 {
            let points = random_points(4, 3);
            let segment = Segment::new(&points[0], &points[1], &points[2], &points[3]).unwrap();

            for (axis, cubic) in segment.cubics().iter().enumerate() {
                assert_approx_eq!(points[1][axis], cubic.evaluate(0.0), eps);
                assert_approx_eq!(points[2][axis], cubic.evaluate(1.0), eps);
            }
        }
    }

    #[test]
    fn cubic_derivatives_match_tangents() {
        let eps = 1e-12;
        let spacing = KnotSpacing::new(1.5, 2.0, 0.5);
        let x = [0.0, 1.0, 4.0, 2.0];
        let cubic = hermite_axis_cubic(x, &spacing);
        let derivative = cubic.derivative();

        let t1 = ((1.0 - 0.0) / 1.5 - (4.0 - 0.0) / 3.5 + (4.0 - 1.0) / 2.0) * 2.0;
        let t2 = ((4.0 - 1.0) / 2.0 - (2.0 - 1.0) / 2.5 + (2.0 - 4.0) / 0.5) * 2.0;

        assert_approx_eq!(t1, derivative.evaluate(0.0), eps);
        assert_approx_eq!(t2, derivative.evaluate(1.0), eps);
    }

    #[test]
    fn evaluate_copies_boundaries() {
        let points = random_points(4, 2);
        let segment = Segment::new(&points[0], &points[1], &points[2], &points[3]).unwrap();
        let interpolants = InterpolantSequence::uniform(7).unwrap();

        let result = segment.evaluate(&interpolants);

        assert_eq!(7, result.nrows());
        assert_eq!(2, result.ncols());
        for axis in 0..2 {
            assert_eq!(points[1][axis], result[(0, axis)]);
            assert_eq!(points[2][axis], result[(6, axis)]);
        }
    }

    #[test]
    fn evaluate_interior_rows() {
        let eps = 1e-12;
        let points = random_points(4, 3);
        let segment = Segment::new(&points[0], &points[1], &points[2], &points[3]).unwrap();
        let interpolants = InterpolantSequence::new(vec![0.0, 0.2, 0.7, 1.0]).unwrap();

        let result = segment.evaluate(&interpolants);
        let at_02 = segment.point_at(0.2);
        let at_07 = segment.point_at(0.7);

        for axis in 0..3 {
            assert_approx_eq!(at_02[axis], result[(1, axis)], eps);
            assert_approx_eq!(at_07[axis], result[(2, axis)], eps);
        }
    }

    #[test]
    fn coincident_points_stay_finite() {
        let points: Vec<Point> = vec![(0.0, 0.0).into(), (1.0, 1.0).into(), (1.0, 1.0).into(), (1.0, 1.0).into()];
        let segment = Segment::new(&points[0], &points[1], &points[2], &points[3]).unwrap();

        let result = segment.evaluate(&InterpolantSequence::uniform(5).unwrap());

        assert!(result.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn curves_derivatives() {
        let eps = 1e-9;
        let points = random_points(4, 2);
        let segment = Segment::new(&points[0], &points[1], &points[2], &points[3]).unwrap();

        let curves = segment.curves(&DerivedCurves::all());
        let first = curves.first_derivative.unwrap();
        let integral = curves.integral.unwrap();

        for axis in 0..2 {
            assert_eq!(3, first[axis].degree() + 1);
            assert_approx_eq!(
                curves.cubics[axis].evaluate(1.0) - curves.cubics[axis].evaluate(0.0),
                first[axis].integral().evaluate(1.0),
                eps
            );
            assert_approx_eq!(0.0, integral[axis].evaluate(0.0), eps);
        }
    }

    #[test]
    fn zero_spacing_stays_finite() {
        let eps = 1e-12;
        let cubic = hermite_axis_cubic([0.0, 1.0, 2.0, 3.0], &KnotSpacing::new(0.0, 0.0, 0.0));

        assert!(cubic.coefficients().iter().all(|c| c.is_finite()));
        assert_approx_eq!(1.5, cubic.evaluate(0.5), eps);
    }

    #[test]
    fn mismatched_dimensions() {
        let p0 = Point::from((0.0, 0.0));
        let p1 = Point::from((1.0, 0.0));
        let p2 = Point::from((2.0, 0.0, 0.0));

        let segment = Segment::new(&p0, &p1, &p2, &p1);

        assert!(matches!(segment, Err(SplineError::DimensionMismatch { index: 2, expected: 2, found: 3 })));
    }
}
