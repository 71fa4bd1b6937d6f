use serde::{Deserialize, Serialize};

use crate::math::quadrature::interval::Interval;
use crate::math::quadrature::quadraturemethod::QuadratureMethod;
use crate::presentation::calculationerror::CalculationError;

/// 使用者輸入的原始字串，尚未驗證
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCalculationInput {
    pub function: String,
    pub lower: String,
    pub upper: String,
    pub subdivisions: String,
    pub method: String,
}

/// 通過驗證、可直接交給積分引擎的輸入
#[derive(Clone, Debug, PartialEq)]
pub struct CalculationRequest {
    function: String,
    interval: Interval,
    subdivisions: usize,
    method: QuadratureMethod,
}

impl CalculationRequest {
    pub fn function(&self) -> &str {
        &self.function
    }

    pub fn interval(&self) -> Interval {
        self.interval
    }

    pub fn subdivisions(&self) -> usize {
        self.subdivisions
    }

    pub fn method(&self) -> QuadratureMethod {
        self.method
    }
}

impl RawCalculationInput {
    pub fn new(function: &str, lower: &str, upper: &str, subdivisions: &str, method: &str) -> RawCalculationInput {
        RawCalculationInput {
            function: function.to_owned(),
            lower: lower.to_owned(),
            upper: upper.to_owned(),
            subdivisions: subdivisions.to_owned(),
            method: method.to_owned(),
        }
    }

    /// 檢查順序：函數 → 上下限 → 子區間數 → a < b → 方法
    pub fn validate(&self) -> Result<CalculationRequest, CalculationError> {
        let function = self.function.trim();
        if function.is_empty() {
            return Err(CalculationError::EmptyFunction);
        }
        let a = parse_bound("lower", &self.lower)?;
        let b = parse_bound("upper", &self.upper)?;
        let subdivisions = parse_subdivisions(&self.subdivisions)?;
        let interval = Interval::new(a, b).map_err(|_| CalculationError::InvalidInterval)?;
        let method: QuadratureMethod = self.method.parse()?;
        Ok(CalculationRequest {
            function: function.to_owned(),
            interval,
            subdivisions,
            method,
        })
    }
}

fn parse_bound(which: &'static str, raw: &str) -> Result<f64, CalculationError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| CalculationError::InvalidBound {
            which,
            value: raw.to_owned(),
        })
}

fn parse_subdivisions(raw: &str) -> Result<usize, CalculationError> {
    raw.trim()
        .parse::<i64>()
        .ok()
        .filter(|n| *n > 0)
        .and_then(|n| usize::try_from(n).ok())
        .ok_or_else(|| CalculationError::InvalidSubdivisions(raw.to_owned()))
}
