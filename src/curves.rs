use crate::polynomial::Polynomial;

/// Selects which derived polynomials are computed for a segment.
/// Every flag is off by default.
/// # Example
/// ```
/// use centripetal_spline::DerivedCurves;
///
/// let request = DerivedCurves { first_derivative: true, ..DerivedCurves::default() };
/// assert!(!request.integral);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DerivedCurves {
    pub first_derivative: bool,
    pub second_derivative: bool,
    pub integral: bool,
}

impl DerivedCurves {
    pub fn none() -> Self {
        DerivedCurves::default()
    }

    pub fn all() -> Self {
        DerivedCurves { first_derivative: true, second_derivative: true, integral: true }
    }
}

/// Per-axis polynomials of one segment together with requested derived polynomials.
/// Derived slot is `None` when it was not requested.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentCurves {
    pub cubics: Vec<Polynomial>,
    pub first_derivative: Option<Vec<Polynomial>>,
    pub second_derivative: Option<Vec<Polynomial>>,
    pub integral: Option<Vec<Polynomial>>,
}

impl SegmentCurves {
    pub(crate) fn derive(cubics: Vec<Polynomial>, request: &DerivedCurves) -> Self {
        let first_derivative = if request.first_derivative || request.second_derivative {
            Some(map_axes(&cubics, Polynomial::derivative))
        } else {
            None
        };

        let second_derivative = match (&first_derivative, request.second_derivative) {
            (Some(first), true) => Some(map_axes(first, Polynomial::derivative)),
            _ => None,
        };

        let integral = if request.integral {
            Some(map_axes(&cubics, Polynomial::integral))
        } else {
            None
        };

        SegmentCurves {
            cubics,
            first_derivative: first_derivative.filter(|_| request.first_derivative),
            second_derivative,
            integral,
        }
    }
}

fn map_axes(polynomials: &[Polynomial], operation: fn(&Polynomial) -> Polynomial) -> Vec<Polynomial> {
    polynomials.iter().map(operation).collect()
}
