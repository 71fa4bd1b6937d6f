use thiserror::Error;

use crate::math::quadrature::quadraturemethod::QuadratureMethod;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuadratureError {
    #[error("{} requires {requirement} (got n = {n})", .method.display_name())]
    InvalidSubdivisionCount {
        method: QuadratureMethod,
        n: usize,
        requirement: &'static str,
    },
    #[error("the lower bound must be less than the upper bound (got a = {a}, b = {b})")]
    InvalidInterval { a: f64, b: f64 },
    #[error("function evaluation failed at x = {x}: {reason}")]
    EvaluationFailure { x: f64, reason: String },
}

/// 被積函數在單一點求值失敗
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct EvaluationError(pub String);

impl EvaluationError {
    pub fn new(reason: impl Into<String>) -> EvaluationError {
        EvaluationError(reason.into())
    }
}
