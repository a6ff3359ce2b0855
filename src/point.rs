use std::ops::Index;

use nalgebra::{DMatrix, DVector};

use crate::error::SplineError;

/// Point of arbitrary dimension through which the spline passes.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    coordinates: DVector<f64>,
}

impl Point {
    /// Creates point from its coordinates.
    /// # Example
    /// ```
    /// use centripetal_spline::Point;
    ///
    /// let point = Point::new(vec![1.0, 2.0, 3.0]);
    /// assert_eq!(3, point.get_dimension());
    /// assert_eq!(2.0, point[1]);
    /// ```
    pub fn new(coordinates: Vec<f64>) -> Self {
        Point { coordinates: DVector::from_vec(coordinates) }
    }

    pub fn get_coordinates(&self) -> &DVector<f64> {
        &self.coordinates
    }

    pub fn get_dimension(&self) -> usize {
        self.coordinates.len()
    }

    /// Sum of per-axis products.
    pub fn dot(&self, other: &Point) -> f64 {
        self.coordinates.dot(&other.coordinates)
    }

    /// Vector pointing from `self` to `other`.
    pub fn chord_to(&self, other: &Point) -> Point {
        Point { coordinates: &other.coordinates - &self.coordinates }
    }
}

impl Index<usize> for Point {
    type Output = f64;

    fn index(&self, axis: usize) -> &Self::Output {
        &self.coordinates[axis]
    }
}

impl From<Vec<f64>> for Point {
    fn from(coordinates: Vec<f64>) -> Self {
        Point::new(coordinates)
    }
}

impl From<&[f64]> for Point {
    fn from(coordinates: &[f64]) -> Self {
        Point { coordinates: DVector::from_column_slice(coordinates) }
    }
}

impl<const D: usize> From<[f64; D]> for Point {
    fn from(coordinates: [f64; D]) -> Self {
        Point { coordinates: DVector::from_column_slice(&coordinates) }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(vec![x, y])
    }
}

impl From<(f64, f64, f64)> for Point {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Point::new(vec![x, y, z])
    }
}

impl From<DVector<f64>> for Point {
    fn from(coordinates: DVector<f64>) -> Self {
        Point { coordinates }
    }
}

/// Ordered sequence of at least 4 points sharing the same dimension.
#[derive(Debug, Clone, PartialEq)]
pub struct PointSequence {
    points: Vec<Point>,
    dimension: usize,
}

impl PointSequence {
    /// Minimal number of points needed to build one cubic segment.
    pub const MIN_POINTS: usize = 4;

    /// Validates and wraps `points`.
    /// # Errors
    /// - [SplineError::InsufficientPoints] when fewer than 4 points are given,
    /// - [SplineError::EmptyPoint] when points have no coordinates,
    /// - [SplineError::DimensionMismatch] when any point differs in dimension from the first one.
    /// ```
    /// use centripetal_spline::{PointSequence, SplineError};
    ///
    /// let points = PointSequence::try_from(vec![[0.0, 0.0], [1.0, 1.0], [2.0, 0.0]]);
    /// assert_eq!(Err(SplineError::InsufficientPoints { found: 3 }), points);
    /// ```
    pub fn new(points: Vec<Point>) -> Result<Self, SplineError> {
        if points.len() < Self::MIN_POINTS {
            return Err(SplineError::InsufficientPoints { found: points.len() });
        }

        let dimension = points[0].get_dimension();
        if dimension == 0 {
            return Err(SplineError::EmptyPoint);
        }

        if let Some((index, point)) = points.iter()
            .enumerate()
            .find(|(_, p)| p.get_dimension() != dimension)
        {
            return Err(SplineError::DimensionMismatch {
                index,
                expected: dimension,
                found: point.get_dimension(),
            });
        }

        Ok(PointSequence { points, dimension })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false, sequence holds at least 4 points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get_dimension(&self) -> usize {
        self.dimension
    }

    pub fn get(&self, index: usize) -> Option<&Point> {
        self.points.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }

    fn from_convertible<T: Into<Point>>(points: Vec<T>) -> Result<Self, SplineError> {
        PointSequence::new(points.into_iter().map(Into::into).collect())
    }
}

impl Index<usize> for PointSequence {
    type Output = Point;

    fn index(&self, index: usize) -> &Self::Output {
        &self.points[index]
    }
}

impl TryFrom<Vec<Point>> for PointSequence {
    type Error = SplineError;

    fn try_from(points: Vec<Point>) -> Result<Self, Self::Error> {
        PointSequence::new(points)
    }
}

impl TryFrom<Vec<Vec<f64>>> for PointSequence {
    type Error = SplineError;

    fn try_from(points: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        PointSequence::from_convertible(points)
    }
}

impl<const D: usize> TryFrom<Vec<[f64; D]>> for PointSequence {
    type Error = SplineError;

    fn try_from(points: Vec<[f64; D]>) -> Result<Self, Self::Error> {
        PointSequence::from_convertible(points)
    }
}

impl TryFrom<Vec<(f64, f64)>> for PointSequence {
    type Error = SplineError;

    fn try_from(points: Vec<(f64, f64)>) -> Result<Self, Self::Error> {
        PointSequence::from_convertible(points)
    }
}

impl TryFrom<Vec<(f64, f64, f64)>> for PointSequence {
    type Error = SplineError;

    fn try_from(points: Vec<(f64, f64, f64)>) -> Result<Self, Self::Error> {
        PointSequence::from_convertible(points)
    }
}

/// Every matrix row is treated as one point.
impl TryFrom<&DMatrix<f64>> for PointSequence {
    type Error = SplineError;

    fn try_from(matrix: &DMatrix<f64>) -> Result<Self, Self::Error> {
        let points = matrix.row_iter()
            .map(|row| Point::from(row.transpose()))
            .collect();
        PointSequence::new(points)
    }
}
