//! Library of centripetal Catmull-Rom spline interpolation through points of any dimension.
//! Every 4 consecutive points form a segment whose cubic runs between its two inner points,
//! segments are sampled at the same parameters from `[0, 1]` and stitched into one curve.
//!
//! # Example
//! ```
//! use centripetal_spline::interpolate;
//! use assert_approx_eq::assert_approx_eq;
//!
//! let points = vec![(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0), (4.0, 0.0)];
//! let result = interpolate(points, vec![0.0, 0.5, 1.0]).unwrap();
//!
//! assert_eq!(5, result.nrows());
//! assert_eq!(1.0, result[(0, 0)]);
//! assert_approx_eq!(1.5, result[(1, 0)], 1e-9);
//! assert_eq!(3.0, result[(4, 0)]);
//! ```
//!
//! Derived polynomials of a single segment are computed on request:
//! ```
//! use centripetal_spline::{CatmullRom, DerivedCurves};
//!
//! let spline = CatmullRom::new(vec![[0.0, 1.0], [1.0, 3.0], [2.0, 2.0], [4.0, 0.0]]).unwrap();
//! let curves = spline.segment_curves(0, &DerivedCurves { integral: true, ..DerivedCurves::default() }).unwrap();
//!
//! assert!(curves.first_derivative.is_none());
//! assert_eq!(2, curves.integral.unwrap().len());
//! ```

mod curves;
mod error;
mod interpolants;
mod point;
mod polynomial;
mod segment;
mod spacing;
mod spline;

pub use curves::{DerivedCurves, SegmentCurves};
pub use error::SplineError;
pub use interpolants::InterpolantSequence;
pub use point::{Point, PointSequence};
pub use polynomial::Polynomial;
pub use segment::{hermite_axis_cubic, Segment};
pub use spacing::{KnotSpacing, DEGENERATE_SPACING};
pub use spline::{interpolate, CatmullRom};
