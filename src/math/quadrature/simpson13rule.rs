use crate::math::quadrature::quadratureerror::QuadratureError;
use crate::math::quadrature::quadraturemethod::QuadratureMethod;
use crate::math::quadrature::quadraturerule::QuadratureRule;

/// I ≈ (h/3)·[f(x₀) + 4f(x₁) + 2f(x₂) + 4f(x₃) + ... + f(xₙ)]，誤差 O(h⁴)
pub struct Simpson13Rule;

impl QuadratureRule for Simpson13Rule {
    fn method(&self) -> QuadratureMethod {
        QuadratureMethod::Simpson13
    }

    fn check_subdivisions(&self, n: usize) -> Result<(), QuadratureError> {
        if n >= 2 && n % 2 == 0 {
            Ok(())
        } else {
            Err(QuadratureError::InvalidSubdivisionCount {
                method: self.method(),
                n,
                requirement: "an even subdivision count",
            })
        }
    }

    // 端點不論奇偶一律為 1
    fn weight(&self, i: usize, n: usize) -> f64 {
        if i == 0 || i == n {
            1.0
        } else if i % 2 == 0 {
            2.0
        } else {
            4.0
        }
    }

    fn scale(&self, h: f64) -> f64 {
        h / 3.0
    }
}
