use tracing::debug;

use crate::math::quadrature::integrablefunction::IntegrableFunction;
use crate::math::quadrature::quadratureerror::QuadratureError;
use crate::math::quadrature::quadraturemethod::QuadratureMethod;

// ─────────────────────────────────────────────────────────────────────────────
// 對外入口：三個純函數 + 依方法分派的 compute
// ─────────────────────────────────────────────────────────────────────────────
//
// 無共享可變狀態，可在多執行緒下同時呼叫。

pub fn trapezoidal(f: &dyn IntegrableFunction, a: f64, b: f64, n: usize) -> Result<f64, QuadratureError> {
    compute(QuadratureMethod::Trapezoidal, f, a, b, n)
}

pub fn simpson13(f: &dyn IntegrableFunction, a: f64, b: f64, n: usize) -> Result<f64, QuadratureError> {
    compute(QuadratureMethod::Simpson13, f, a, b, n)
}

pub fn simpson38(f: &dyn IntegrableFunction, a: f64, b: f64, n: usize) -> Result<f64, QuadratureError> {
    compute(QuadratureMethod::Simpson38, f, a, b, n)
}

pub fn compute(
    method: QuadratureMethod,
    f: &dyn IntegrableFunction,
    a: f64,
    b: f64,
    n: usize,
) -> Result<f64, QuadratureError> {
    let result = method.rule().integrate(f, a, b, n);
    match &result {
        Ok(value) => debug!(%method, a, b, n, value, "integral computed"),
        Err(error) => debug!(%method, a, b, n, %error, "integral rejected"),
    }
    result
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::f64::consts::{E, PI};

    use approx::assert_relative_eq;

    use super::*;
    use crate::math::quadrature::integrablefunction::FallibleFunction;
    use crate::math::quadrature::quadratureerror::EvaluationError;

    fn valid_counts(method: QuadratureMethod) -> [usize; 3] {
        match method {
            QuadratureMethod::Trapezoidal => [1, 5, 16],
            QuadratureMethod::Simpson13 => [2, 6, 16],
            QuadratureMethod::Simpson38 => [3, 9, 15],
        }
    }

    #[test]
    fn constant_is_exact_for_every_rule() {
        for method in QuadratureMethod::ALL {
            for n in valid_counts(method) {
                let value = compute(method, &|_x: f64| 2.5, -1.0, 3.0, n).unwrap();
                assert_relative_eq!(value, 10.0, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn linear_is_exact_for_every_rule() {
        for method in QuadratureMethod::ALL {
            for n in valid_counts(method) {
                let value = compute(method, &|x: f64| 3.0 * x - 1.0, 0.0, 2.0, n).unwrap();
                assert_relative_eq!(value, 4.0, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn trapezoid_of_identity_is_exactly_fifty() {
        assert_eq!(trapezoidal(&|x: f64| x, 0.0, 10.0, 10), Ok(50.0));
    }

    #[test]
    fn trapezoid_is_not_exact_for_quadratics() {
        let value = trapezoidal(&|x: f64| x * x, 0.0, 1.0, 4).unwrap();
        // (h²/12)·(b-a)·f'' = 1/96
        assert_relative_eq!(value - 1.0 / 3.0, 1.0 / 96.0, epsilon = 1e-12);
    }

    #[test]
    fn simpson_rules_are_exact_for_cubics() {
        let cubic = |x: f64| x * x * x - 2.0 * x * x + x + 1.0;
        for n in [2, 4, 10] {
            assert_relative_eq!(simpson13(&cubic, -1.0, 2.0, n).unwrap(), 2.25, epsilon = 1e-10);
        }
        for n in [3, 6, 12] {
            assert_relative_eq!(simpson38(&cubic, -1.0, 2.0, n).unwrap(), 2.25, epsilon = 1e-10);
        }
    }

    #[test]
    fn simpson13_of_sine_over_half_period() {
        let value = simpson13(&|x: f64| x.sin(), 0.0, PI, 10).unwrap();
        assert!((value - 2.0).abs() < 2e-4, "got {value}");
    }

    #[test]
    fn doubling_n_reduces_error() {
        let exact = E - 1.0;
        let cases = [
            (QuadratureMethod::Trapezoidal, 4),
            (QuadratureMethod::Simpson13, 2),
            (QuadratureMethod::Simpson38, 3),
        ];
        for (method, start) in cases {
            let errors: Vec<f64> = (0..4)
                .map(|k| {
                    let n = start << k;
                    (compute(method, &|x: f64| x.exp(), 0.0, 1.0, n).unwrap() - exact).abs()
                })
                .collect();
            for pair in errors.windows(2) {
                assert!(pair[1] < pair[0], "{method}: {errors:?}");
            }
        }
    }

    #[test]
    fn simpson13_rejects_odd_counts() {
        let err = simpson13(&|x: f64| x, 0.0, 1.0, 5).unwrap_err();
        assert_eq!(
            err,
            QuadratureError::InvalidSubdivisionCount {
                method: QuadratureMethod::Simpson13,
                n: 5,
                requirement: "an even subdivision count",
            }
        );
        assert_eq!(err.to_string(), "Simpson 1/3 requires an even subdivision count (got n = 5)");
    }

    #[test]
    fn simpson38_rejects_counts_not_multiple_of_three() {
        let err = simpson38(&|x: f64| x, 0.0, 1.0, 10).unwrap_err();
        assert!(matches!(
            err,
            QuadratureError::InvalidSubdivisionCount { method: QuadratureMethod::Simpson38, n: 10, .. }
        ));
    }

    #[test]
    fn zero_subdivisions_is_invalid_for_every_rule() {
        for method in QuadratureMethod::ALL {
            let err = compute(method, &|x: f64| x, 0.0, 1.0, 0).unwrap_err();
            assert!(matches!(err, QuadratureError::InvalidSubdivisionCount { n: 0, .. }));
        }
    }

    #[test]
    fn oversized_counts_are_rejected_without_allocating() {
        let calls = Cell::new(0);
        let counting = |x: f64| {
            calls.set(calls.get() + 1);
            x
        };
        let huge = usize::MAX / 6 * 6;
        for method in QuadratureMethod::ALL {
            let err = compute(method, &counting, 0.0, 1.0, huge).unwrap_err();
            assert!(matches!(err, QuadratureError::InvalidSubdivisionCount { n, .. } if n == huge));
        }
        let err = trapezoidal(&counting, 0.0, 1.0, 1usize << 62).unwrap_err();
        assert!(err.to_string().contains("at most 1000000 subdivisions"), "{err}");
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn inverted_interval_is_rejected() {
        let err = trapezoidal(&|x: f64| x, 1.0, 0.0, 4).unwrap_err();
        assert_eq!(err, QuadratureError::InvalidInterval { a: 1.0, b: 0.0 });
    }

    #[test]
    fn subdivision_check_runs_before_any_evaluation() {
        let calls = Cell::new(0);
        let counting = |x: f64| {
            calls.set(calls.get() + 1);
            x
        };
        assert!(simpson38(&counting, 0.0, 1.0, 4).is_err());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn evaluation_stops_at_first_failing_node() {
        let calls = Cell::new(0);
        let f = FallibleFunction(|x: f64| {
            calls.set(calls.get() + 1);
            if x > 0.45 && x < 0.55 { Err(EvaluationError::new("pole")) } else { Ok(x) }
        });
        let err = trapezoidal(&f, 0.0, 1.0, 10).unwrap_err();
        assert!(matches!(err, QuadratureError::EvaluationFailure { reason, .. } if reason == "pole"));
        assert_eq!(calls.get(), 6);
    }

    #[test]
    fn pole_inside_interval_is_an_evaluation_failure() {
        let err = simpson13(&|x: f64| 1.0 / x, -1.0, 1.0, 4).unwrap_err();
        assert!(matches!(err, QuadratureError::EvaluationFailure { x, .. } if x == 0.0));
    }

    #[test]
    fn concurrent_calls_agree_with_sequential_ones() {
        let sequential: Vec<f64> = QuadratureMethod::ALL
            .iter()
            .map(|&method| compute(method, &|x: f64| x.cos(), 0.0, 1.0, 12).unwrap())
            .collect();
        let concurrent: Vec<f64> = std::thread::scope(|scope| {
            let handles: Vec<_> = QuadratureMethod::ALL
                .iter()
                .map(|&method| scope.spawn(move || compute(method, &|x: f64| x.cos(), 0.0, 1.0, 12).unwrap()))
                .collect();
            handles.into_iter().map(|handle| handle.join().unwrap()).collect()
        });
        assert_eq!(sequential, concurrent);
    }
}
