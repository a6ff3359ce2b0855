/// Polynomial in one variable stored by its coefficients, lowest degree first.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    coefficients: Vec<f64>,
}

impl Polynomial {

    /// Creates polynomial from `coefficients` ordered from the constant term upwards.
    /// Empty coefficient list is treated as zero polynomial.
    pub fn new(coefficients: Vec<f64>) -> Self {
        if coefficients.is_empty() {
            return Polynomial { coefficients: vec![0.0] };
        }
        Polynomial { coefficients }
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        self.coefficients
            .iter()
            .rev()
            .fold(0.0, |result, coefficient| f64::mul_add(result, x, *coefficient))
    }

    /// First derivative. Derivative of a constant is zero polynomial.
    pub fn derivative(&self) -> Polynomial {
        if self.coefficients.len() < 2 {
            return Polynomial::new(vec![0.0]);
        }
        let coefficients = self.coefficients
            .iter()
            .enumerate()
            .skip(1)
            .map(|(power, c)| power as f64 * c)
            .collect();
        Polynomial::new(coefficients)
    }

    /// Indefinite integral with integration constant equal to zero.
    pub fn integral(&self) -> Polynomial {
        let mut coefficients = Vec::with_capacity(self.coefficients.len() + 1);
        coefficients.push(0.0);
        for (power, c) in self.coefficients.iter().enumerate() {
            coefficients.push(c / (power + 1) as f64);
        }
        Polynomial::new(coefficients)
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Degree of stored coefficient list, trailing zeros included.
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use super::*;

    #[test]
    fn evaluate() {

        let eps = 1e-6;
        let coefficients = vec![1.0, 2.5, -0.25];
        let polynomial = Polynomial::new(coefficients);

        assert_approx_eq!(polynomial.evaluate(2.1), 5.1475, eps);
        assert_approx_eq!(polynomial.evaluate(-3.14), -9.3149, eps);
        assert_approx_eq!(polynomial.evaluate(0.0), 1.0, eps);
    }

    #[test]
    fn empty_is_zero() {
        let polynomial = Polynomial::new(Vec::new());

        assert_eq!(0, polynomial.degree());
        assert_eq!(0.0, polynomial.evaluate(3.0));
    }

    #[test]
    fn derivative_of_cubic() {
        let eps = 1e-12;
        // 1 + 2x - 3x^2 + 4x^3
        let polynomial = Polynomial::new(vec![1.0, 2.0, -3.0, 4.0]);
        let derivative = polynomial.derivative();

        assert_eq!(&[2.0, -6.0, 12.0], derivative.coefficients());
        assert_approx_eq!(derivative.evaluate(0.5), 2.0 - 3.0 + 3.0, eps);

        let second = derivative.derivative();
        assert_eq!(&[-6.0, 24.0], second.coefficients());
    }

    #[test]
    fn derivative_of_constant() {
        let polynomial = Polynomial::new(vec![7.5]);

        assert_eq!(&[0.0], polynomial.derivative().coefficients());
    }

    #[test]
    fn integral_of_cubic() {
        let eps = 1e-12;
        let polynomial = Polynomial::new(vec![1.0, 2.0, -3.0, 4.0]);
        let integral = polynomial.integral();

        assert_eq!(4, integral.degree());
        assert_approx_eq!(integral.evaluate(0.0), 0.0, eps);
        // x + x^2 - x^3 + x^4 at x = 2
        assert_approx_eq!(integral.evaluate(2.0), 2.0 + 4.0 - 8.0 + 16.0, eps);
    }

    #[test]
    fn integral_then_derivative() {
        let eps = 1e-12;
        let polynomial = Polynomial::new(vec![0.5, -1.5, 2.25, 3.0]);
        let restored = polynomial.integral().derivative();

        for (a, b) in polynomial.coefficients().iter().zip(restored.coefficients()) {
            assert_approx_eq!(*a, *b, eps);
        }
    }
}
