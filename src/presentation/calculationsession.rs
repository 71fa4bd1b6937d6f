use tracing::{info, warn};

use crate::configuration::Configuration;
use crate::manager::managererror::ManagerError;
use crate::math::quadrature::quadratureengine::compute;
use crate::math::round::format_fixed;
use crate::presentation::calculationerror::CalculationError;
use crate::presentation::calculationreport::{CalculationReport, CalculationReportParts};
use crate::presentation::explanation::explain;
use crate::presentation::expression::ExpressionFunction;
use crate::presentation::inputvalidation::RawCalculationInput;
use crate::presentation::sampler::Sampler;

pub const PLACEHOLDER: &str = "---";

/// 結果欄位目前顯示的文字
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultDisplay {
    value: String,
    message: String,
}

impl ResultDisplay {
    fn placeholder(message: String) -> ResultDisplay {
        ResultDisplay {
            value: PLACEHOLDER.to_owned(),
            message,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_error(&self) -> bool {
        !self.message.is_empty()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// CalculationSession
// ─────────────────────────────────────────────────────────────────────────────
//
// 展示層的狀態都放在這裡（取代全域的 chart instance）：
//   - display      結果欄位文字；失敗時顯示 "---" 與錯誤訊息
//   - last_report  最後一次成功的結果（圖形、方法說明）；失敗時保留不清除

pub struct CalculationSession<'c> {
    configuration: &'c Configuration,
    sampler: Sampler,
    display: ResultDisplay,
    last_report: Option<CalculationReport>,
}

impl<'c> CalculationSession<'c> {
    pub fn new(configuration: &'c Configuration) -> CalculationSession<'c> {
        CalculationSession {
            configuration,
            sampler: Sampler::new(configuration.curve_steps()),
            display: ResultDisplay::placeholder(String::new()),
            last_report: None,
        }
    }

    pub fn display(&self) -> &ResultDisplay {
        &self.display
    }

    pub fn last_report(&self) -> Option<&CalculationReport> {
        self.last_report.as_ref()
    }

    pub fn calculate(&mut self, input: &RawCalculationInput) -> Result<&CalculationReport, CalculationError> {
        match self.try_calculate(input) {
            Ok(report) => {
                info!(
                    method = %report.method(),
                    function = report.function(),
                    value = report.value(),
                    "calculation succeeded"
                );
                self.display = ResultDisplay {
                    value: report.formatted_value().to_owned(),
                    message: String::new(),
                };
                let report: &CalculationReport = self.last_report.insert(report);
                Ok(report)
            }
            Err(error) => {
                warn!(%error, "calculation failed");
                self.display = ResultDisplay::placeholder(format!("⚠ {error}"));
                Err(error)
            }
        }
    }

    fn try_calculate(&self, input: &RawCalculationInput) -> Result<CalculationReport, CalculationError> {
        let request = input.validate()?;
        let function = ExpressionFunction::compile(request.function())?;
        let method = request.method();
        let interval = request.interval();
        let n = request.subdivisions();

        let value = compute(method, &function, interval.a(), interval.b(), n)?;
        let descriptor = self
            .configuration
            .method_registry()
            .describe(method)
            .cloned()
            .ok_or_else(|| ManagerError::name_not_found(method.id()))?;

        let curve = self.sampler.curve(&function, &interval);
        let nodes = self.sampler.nodes(&function, &interval, n)?;
        let area = self.sampler.area(&curve, &interval);

        Ok(CalculationReport::new(CalculationReportParts {
            function: request.function().to_owned(),
            interval,
            subdivisions: n,
            value,
            formatted_value: format_fixed(value, self.configuration.display_digits()),
            descriptor,
            explanation: explain(method, &interval, n),
            curve,
            nodes,
            area,
        }))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::math::quadrature::quadraturemethod::QuadratureMethod;
    use crate::math::quadrature::quadratureerror::QuadratureError;

    #[test]
    fn starts_with_placeholder_and_no_report() {
        let configuration = Configuration::new();
        let session = CalculationSession::new(&configuration);
        assert_eq!(session.display().value(), PLACEHOLDER);
        assert!(!session.display().is_error());
        assert!(session.last_report().is_none());
    }

    #[test]
    fn successful_calculation_fills_the_report() {
        let configuration = Configuration::new();
        let mut session = CalculationSession::new(&configuration);
        let report = session
            .calculate(&RawCalculationInput::new("x", "0", "10", "10", "trapezoidal"))
            .unwrap();

        assert_eq!(report.value(), 50.0);
        assert_eq!(report.formatted_value(), "50.00000000");
        assert_eq!(report.method(), QuadratureMethod::Trapezoidal);
        assert_eq!(report.descriptor().name(), "TRAPEZOIDAL RULE");
        assert_eq!(report.curve().len(), 201);
        assert_eq!(report.nodes().len(), 11);
        assert_eq!(report.area().len(), 203);
        assert_relative_eq!(report.step(), 1.0);
        assert_eq!(session.display().value(), "50.00000000");
        assert_eq!(session.display().message(), "");
    }

    #[test]
    fn failure_keeps_the_last_good_report() {
        let configuration = Configuration::new();
        let mut session = CalculationSession::new(&configuration);
        session
            .calculate(&RawCalculationInput::new("x^2", "0", "3", "6", "simpson13"))
            .unwrap();

        let err = session
            .calculate(&RawCalculationInput::new("x^2", "0", "3", "5", "simpson13"))
            .unwrap_err();
        assert!(matches!(
            err,
            CalculationError::Quadrature(QuadratureError::InvalidSubdivisionCount { n: 5, .. })
        ));

        assert_eq!(session.display().value(), PLACEHOLDER);
        assert_eq!(
            session.display().message(),
            "⚠ Simpson 1/3 requires an even subdivision count (got n = 5)"
        );
        let kept = session.last_report().expect("previous report should be kept");
        assert_eq!(kept.subdivisions(), 6);
        assert_relative_eq!(kept.value(), 9.0, epsilon = 1e-12);
    }

    #[test]
    fn input_errors_are_reported_through_the_display() {
        let configuration = Configuration::new();
        let mut session = CalculationSession::new(&configuration);
        assert!(session.calculate(&RawCalculationInput::new("", "0", "1", "2", "simpson13")).is_err());
        assert_eq!(session.display().message(), "⚠ enter a function");
        assert!(session.last_report().is_none());
    }

    #[test]
    fn oversized_subdivision_count_is_an_ordinary_failure() {
        let configuration = Configuration::new();
        let mut session = CalculationSession::new(&configuration);
        session
            .calculate(&RawCalculationInput::new("x", "0", "10", "10", "trapezoidal"))
            .unwrap();

        let err = session
            .calculate(&RawCalculationInput::new("x", "0", "1", "4611686018427387904", "trapezoidal"))
            .unwrap_err();
        assert!(matches!(err, CalculationError::Quadrature(QuadratureError::InvalidSubdivisionCount { .. })));
        assert_eq!(session.display().value(), PLACEHOLDER);
        assert_eq!(session.last_report().map(CalculationReport::value), Some(50.0));
    }

    #[test]
    fn display_digits_follow_configuration() {
        let configuration = Configuration::from_json(serde_json::json!({"display_digits": 3, "curve_steps": 10})).unwrap();
        let mut session = CalculationSession::new(&configuration);
        let report = session
            .calculate(&RawCalculationInput::new("1.0 / 3.0", "0", "1", "1", "trapezoidal"))
            .unwrap();
        assert_eq!(report.formatted_value(), "0.333");
        assert_eq!(report.curve().len(), 11);
    }
}
