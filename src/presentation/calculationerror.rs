use thiserror::Error;

use crate::manager::managererror::ManagerError;
use crate::math::quadrature::quadratureerror::QuadratureError;
use crate::math::quadrature::quadraturemethod::ParseMethodError;
use crate::presentation::expression::ExpressionError;

/// 單次計算嘗試在展示層邊界可能出現的所有錯誤
#[derive(Debug, Error)]
pub enum CalculationError {
    #[error("enter a function")]
    EmptyFunction,
    #[error("invalid {which} bound '{value}'")]
    InvalidBound { which: &'static str, value: String },
    #[error("invalid subdivision count '{0}': expected a positive integer")]
    InvalidSubdivisions(String),
    #[error("the lower bound must be less than the upper bound")]
    InvalidInterval,
    #[error(transparent)]
    UnknownMethod(#[from] ParseMethodError),
    #[error(transparent)]
    Expression(#[from] ExpressionError),
    #[error(transparent)]
    Quadrature(#[from] QuadratureError),
    #[error(transparent)]
    Manager(#[from] ManagerError),
}
