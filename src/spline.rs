use nalgebra::DMatrix;
use tracing::trace;

use crate::{
    curves::{DerivedCurves, SegmentCurves},
    error::SplineError,
    interpolants::InterpolantSequence,
    point::PointSequence,
    segment::Segment,
};

/// Centripetal Catmull-Rom spline through a sequence of points.
/// Curve starts at the second point and ends at the second to last point,
/// first and last point only shape the end tangents.
#[derive(Debug, Clone)]
pub struct CatmullRom {
    points: PointSequence,
}

impl CatmullRom {
    /// # Errors
    /// Error is returned when `points` can not be converted into a valid [PointSequence].
    /// ```
    /// use centripetal_spline::{CatmullRom, SplineError};
    ///
    /// let spline = CatmullRom::new(vec![(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
    /// assert!(matches!(spline, Err(SplineError::InsufficientPoints { found: 3 })));
    /// ```
    pub fn new<P>(points: P) -> Result<Self, SplineError>
    where
        P: TryInto<PointSequence>,
        SplineError: From<P::Error>,
    {
        Ok(CatmullRom { points: points.try_into()? })
    }

    pub fn get_points(&self) -> &PointSequence {
        &self.points
    }

    pub fn get_dimension(&self) -> usize {
        self.points.get_dimension()
    }

    /// Number of 4-point windows.
    pub fn segment_count(&self) -> usize {
        self.points.len() - 3
    }

    /// Number of output rows produced for `samples` interpolants per segment.
    pub fn output_len(&self, samples: usize) -> usize {
        self.segment_count() * samples.saturating_sub(1) + 1
    }

    pub fn segment(&self, index: usize) -> Result<Segment<'_>, SplineError> {
        let count = self.segment_count();
        if index >= count {
            return Err(SplineError::SegmentOutOfRange { index, count });
        }
        Ok(Segment::from_window(&self.points.as_slice()[index..index + 4]))
    }

    pub fn segments(&self) -> impl Iterator<Item = Segment<'_>> {
        self.points.as_slice().windows(4).map(Segment::from_window)
    }

    /// Per-axis cubics of segment `index` with requested derived polynomials.
    pub fn segment_curves(&self, index: usize, request: &DerivedCurves) -> Result<SegmentCurves, SplineError> {
        Ok(self.segment(index)?.curves(request))
    }

    /// Evaluates every segment at `interpolants` and stitches the blocks together.
    /// Neighbouring segments share their boundary row, so the result has
    /// `segment_count() * (interpolants.len() - 1) + 1` rows and one column per axis.
    pub fn interpolate(&self, interpolants: &InterpolantSequence) -> DMatrix<f64> {
        if self.segment_count() == 1 {
            return Segment::from_window(self.points.as_slice()).evaluate(interpolants);
        }

        let block = interpolants.len() - 1;
        let mut output = DMatrix::<f64>::zeros(self.output_len(interpolants.len()), self.get_dimension());

        for (index, segment) in self.segments().enumerate() {
            let cubics = segment.cubics();
            if index == 0 {
                segment.write_rows(&cubics, interpolants, &mut output, 0, false);
            } else {
                segment.write_rows(&cubics, interpolants, &mut output, index * block + 1, true);
            }
            trace!(segment = index, spacing = ?segment.spacing(), "segment interpolated");
        }
        output
    }
}

/// Interpolates centripetal Catmull-Rom spline through `points` at `interpolants` of every segment.
/// # Errors
/// Error is returned when less than 4 points are given, points differ in dimension
/// or interpolants are invalid.
pub fn interpolate<P, I>(points: P, interpolants: I) -> Result<DMatrix<f64>, SplineError>
where
    P: TryInto<PointSequence>,
    SplineError: From<P::Error>,
    I: TryInto<InterpolantSequence>,
    SplineError: From<I::Error>,
{
    let spline = CatmullRom::new(points)?;
    let interpolants = interpolants.try_into()?;
    Ok(spline.interpolate(&interpolants))
}
