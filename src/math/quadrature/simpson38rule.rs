use crate::math::quadrature::quadratureerror::QuadratureError;
use crate::math::quadrature::quadraturemethod::QuadratureMethod;
use crate::math::quadrature::quadraturerule::QuadratureRule;

/// I ≈ (3h/8)·[f(x₀) + 3f(x₁) + 3f(x₂) + 2f(x₃) + ... + f(xₙ)]，誤差 O(h⁴)
pub struct Simpson38Rule;

impl QuadratureRule for Simpson38Rule {
    fn method(&self) -> QuadratureMethod {
        QuadratureMethod::Simpson38
    }

    fn check_subdivisions(&self, n: usize) -> Result<(), QuadratureError> {
        if n >= 3 && n % 3 == 0 {
            Ok(())
        } else {
            Err(QuadratureError::InvalidSubdivisionCount {
                method: self.method(),
                n,
                requirement: "a subdivision count that is a multiple of 3",
            })
        }
    }

    fn weight(&self, i: usize, n: usize) -> f64 {
        if i == 0 || i == n {
            1.0
        } else if i % 3 == 0 {
            2.0
        } else {
            3.0
        }
    }

    fn scale(&self, h: f64) -> f64 {
        3.0 * h / 8.0
    }
}
