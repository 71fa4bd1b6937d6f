use crate::math::quadrature::quadratureerror::QuadratureError;
use crate::math::quadrature::quadraturemethod::QuadratureMethod;
use crate::math::quadrature::quadraturerule::QuadratureRule;

/// I ≈ (h/2)·[f(x₀) + 2f(x₁) + ... + 2f(xₙ₋₁) + f(xₙ)]，誤差 O(h²)
pub struct TrapezoidalRule;

impl QuadratureRule for TrapezoidalRule {
    fn method(&self) -> QuadratureMethod {
        QuadratureMethod::Trapezoidal
    }

    fn check_subdivisions(&self, n: usize) -> Result<(), QuadratureError> {
        if n >= 1 {
            Ok(())
        } else {
            Err(QuadratureError::InvalidSubdivisionCount {
                method: self.method(),
                n,
                requirement: "at least one subdivision",
            })
        }
    }

    fn weight(&self, i: usize, n: usize) -> f64 {
        if i == 0 || i == n { 1.0 } else { 2.0 }
    }

    fn scale(&self, h: f64) -> f64 {
        h / 2.0
    }
}
