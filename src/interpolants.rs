use std::ops::Index;

use crate::error::SplineError;

/// Parametric sample values from `[0, 1]` at which every segment is evaluated.
/// First and last value always map to segment boundary points.
#[derive(Debug, Clone, PartialEq)]
pub struct InterpolantSequence {
    values: Vec<f64>,
}

impl InterpolantSequence {
    /// Minimal number of samples, one for each segment boundary.
    pub const MIN_INTERPOLANTS: usize = 2;

    /// # Errors
    /// - [SplineError::InsufficientInterpolants] when less than 2 values are given,
    /// - [SplineError::InterpolantOutOfRange] when any value is outside of `[0, 1]` or is NaN.
    pub fn new(values: Vec<f64>) -> Result<Self, SplineError> {
        if values.len() < Self::MIN_INTERPOLANTS {
            return Err(SplineError::InsufficientInterpolants { found: values.len() });
        }

        if let Some((index, value)) = values.iter()
            .enumerate()
            .find(|(_, v)| !(0.0..=1.0).contains(*v))
        {
            return Err(SplineError::InterpolantOutOfRange { index, value: *value });
        }

        Ok(InterpolantSequence { values })
    }

    /// Evenly spaced samples from 0 to 1 inclusive.
    /// # Example
    /// ```
    /// use centripetal_spline::InterpolantSequence;
    ///
    /// let interpolants = InterpolantSequence::uniform(5).unwrap();
    /// assert_eq!(&[0.0, 0.25, 0.5, 0.75, 1.0], interpolants.as_slice());
    /// ```
    pub fn uniform(samples: usize) -> Result<Self, SplineError> {
        if samples < Self::MIN_INTERPOLANTS {
            return Err(SplineError::InsufficientInterpolants { found: samples });
        }

        let step = 1.0 / (samples - 1) as f64;
        let mut values: Vec<f64> = (0..samples).map(|i| step * i as f64).collect();
        values[samples - 1] = 1.0;
        Ok(InterpolantSequence { values })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false, sequence holds at least 2 values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.values.iter()
    }
}

impl Index<usize> for InterpolantSequence {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.values[index]
    }
}

impl TryFrom<Vec<f64>> for InterpolantSequence {
    type Error = SplineError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        InterpolantSequence::new(values)
    }
}

impl TryFrom<&[f64]> for InterpolantSequence {
    type Error = SplineError;

    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        InterpolantSequence::new(values.to_vec())
    }
}

impl<const L: usize> TryFrom<[f64; L]> for InterpolantSequence {
    type Error = SplineError;

    fn try_from(values: [f64; L]) -> Result<Self, Self::Error> {
        InterpolantSequence::new(values.to_vec())
    }
}
