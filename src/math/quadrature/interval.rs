use serde::Serialize;

use crate::math::quadrature::quadratureerror::QuadratureError;

/// 積分區間 [a, b]，保證 a < b、兩端與寬度 b - a 皆有限
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Interval {
    a: f64,
    b: f64,
}

impl Interval {
    pub fn new(a: f64, b: f64) -> Result<Interval, QuadratureError> {
        // NaN 比較恆為 false，一併擋下
        if a.is_finite() && b.is_finite() && a < b && (b - a).is_finite() {
            Ok(Interval { a, b })
        } else {
            Err(QuadratureError::InvalidInterval { a, b })
        }
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn width(&self) -> f64 {
        self.b - self.a
    }

    /// h = (b - a) / n
    pub fn step(&self, n: usize) -> f64 {
        self.width() / n as f64
    }

    /// x_i = a + i·h, i = 0..=n；兩端直接取 a、b
    pub fn nodes(&self, n: usize) -> Vec<f64> {
        let h = self.step(n);
        (0..=n)
            .map(|i| match i {
                0 => self.a,
                _ if i == n => self.b,
                _ => self.a + i as f64 * h,
            })
            .collect()
    }

    /// x_i = a + (b - a)·i / steps, i = 0..=steps
    pub fn linspace(&self, steps: usize) -> Vec<f64> {
        let width = self.width();
        (0..=steps)
            .map(|i| self.a + width * i as f64 / steps as f64)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn rejects_equal_inverted_and_non_finite_bounds() {
        assert_eq!(Interval::new(1.0, 1.0), Err(QuadratureError::InvalidInterval { a: 1.0, b: 1.0 }));
        assert!(Interval::new(2.0, -1.0).is_err());
        assert!(Interval::new(f64::NAN, 1.0).is_err());
        assert!(Interval::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn rejects_bounds_whose_width_overflows() {
        assert_eq!(
            Interval::new(-1e308, 1e308),
            Err(QuadratureError::InvalidInterval { a: -1e308, b: 1e308 })
        );
        let wide = Interval::new(-8e307, 8e307).unwrap();
        let nodes = wide.nodes(4);
        assert_eq!(nodes[0], -8e307);
        assert_eq!(nodes[4], 8e307);
        assert!(nodes.iter().all(|x| x.is_finite()));
    }

    #[test]
    fn nodes_cover_both_endpoints() {
        let interval = Interval::new(0.0, 1.0).unwrap();
        let nodes = interval.nodes(3);
        assert_eq!(nodes.len(), 4);
        assert_eq!(nodes[0], 0.0);
        assert_relative_eq!(nodes[1], 1.0 / 3.0);
        assert_relative_eq!(nodes[2], 2.0 / 3.0);
        assert_eq!(nodes[3], 1.0);
    }

    #[test]
    fn linspace_has_steps_plus_one_points() {
        let interval = Interval::new(-1.0, 1.0).unwrap();
        let xs = interval.linspace(200);
        assert_eq!(xs.len(), 201);
        assert_eq!(xs[0], -1.0);
        assert_eq!(xs[100], 0.0);
        assert_eq!(xs[200], 1.0);
    }
}
