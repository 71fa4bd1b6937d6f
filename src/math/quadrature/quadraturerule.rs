use nalgebra::DVector;
use tracing::trace;

use crate::math::quadrature::integrablefunction::IntegrableFunction;
use crate::math::quadrature::interval::Interval;
use crate::math::quadrature::quadratureerror::QuadratureError;
use crate::math::quadrature::quadraturemethod::QuadratureMethod;

// ─────────────────────────────────────────────────────────────────────────────
// QuadratureRule
// ─────────────────────────────────────────────────────────────────────────────
//
// 三種固定步長規則共用同一組節點，只差在：
//   - 子區間數 n 的適用條件
//   - 權重 w(i, n)
//   - 縮放係數 s(h)
//
//   I ≈ s(h) · Σ_{i=0}^{n} w(i, n)·f(x_i)

/// 節點值與權重各需 n+1 個 f64，超過上限直接拒絕
pub const MAX_SUBDIVISIONS: usize = 1_000_000;

pub trait QuadratureRule: Send + Sync {
    fn method(&self) -> QuadratureMethod;

    fn check_subdivisions(&self, n: usize) -> Result<(), QuadratureError>;

    fn weight(&self, i: usize, n: usize) -> f64;

    fn scale(&self, h: f64) -> f64;

    fn integrate(&self, f: &dyn IntegrableFunction, a: f64, b: f64, n: usize) -> Result<f64, QuadratureError> {
        self.check_subdivisions(n)?;
        check_subdivision_limit(self.method(), n)?;
        let interval = Interval::new(a, b)?;
        weighted_sum(self, f, &interval, n)
    }
}

/// 依規則的權重對 n+1 個節點加權求和；任一節點求值失敗即中止
pub fn weighted_sum<R>(
    rule: &R,
    f: &dyn IntegrableFunction,
    interval: &Interval,
    n: usize,
) -> Result<f64, QuadratureError>
where
    R: QuadratureRule + ?Sized,
{
    check_subdivision_limit(rule.method(), n)?;
    let values = interval
        .nodes(n)
        .into_iter()
        .map(|x| evaluate_finite(f, x))
        .collect::<Result<Vec<f64>, QuadratureError>>()?;
    let values = DVector::from_vec(values);
    let weights = DVector::from_fn(n + 1, |i, _| rule.weight(i, n));
    let h = interval.step(n);
    trace!(method = %rule.method(), n, h, "weighted sum over nodes");
    Ok(rule.scale(h) * weights.dot(&values))
}

pub fn check_subdivision_limit(method: QuadratureMethod, n: usize) -> Result<(), QuadratureError> {
    if n <= MAX_SUBDIVISIONS {
        Ok(())
    } else {
        Err(QuadratureError::InvalidSubdivisionCount {
            method,
            n,
            requirement: "at most 1000000 subdivisions",
        })
    }
}

/// 回傳錯誤與回傳 NaN/±∞ 一律視為求值失敗
pub fn evaluate_finite(f: &dyn IntegrableFunction, x: f64) -> Result<f64, QuadratureError> {
    match f.evaluate(x) {
        Ok(y) if y.is_finite() => Ok(y),
        Ok(y) => Err(QuadratureError::EvaluationFailure {
            x,
            reason: format!("non-finite value {y}"),
        }),
        Err(error) => Err(QuadratureError::EvaluationFailure {
            x,
            reason: error.to_string(),
        }),
    }
}
