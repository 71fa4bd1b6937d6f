use std::fmt::Display;

use crate::math::quadrature::quadratureerror::EvaluationError;

/// ℝ → ℝ 的被積函數；求值可以失敗（除以零、定義域外等）
pub trait IntegrableFunction {
    fn evaluate(&self, x: f64) -> Result<f64, EvaluationError>;
}

impl<F> IntegrableFunction for F
where
    F: Fn(f64) -> f64,
{
    fn evaluate(&self, x: f64) -> Result<f64, EvaluationError> {
        Ok(self(x))
    }
}

/// 包裝回傳 `Result` 的 closure
pub struct FallibleFunction<F>(pub F);

impl<F, E> IntegrableFunction for FallibleFunction<F>
where
    F: Fn(f64) -> Result<f64, E>,
    E: Display,
{
    fn evaluate(&self, x: f64) -> Result<f64, EvaluationError> {
        (self.0)(x).map_err(|error| EvaluationError::new(error.to_string()))
    }
}
