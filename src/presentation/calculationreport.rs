use serde::Serialize;

use crate::math::quadrature::interval::Interval;
use crate::math::quadrature::methoddescriptor::MethodDescriptor;
use crate::math::quadrature::quadraturemethod::QuadratureMethod;
use crate::presentation::samplepoint::SamplePoint;

/// 一次成功計算的完整結果：數值、說明文字、繪圖資料
#[derive(Clone, Debug, Serialize)]
pub struct CalculationReport {
    function: String,
    method: QuadratureMethod,
    interval: Interval,
    subdivisions: usize,
    step: f64,
    value: f64,
    formatted_value: String,
    descriptor: MethodDescriptor,
    explanation: String,
    curve: Vec<SamplePoint>,
    nodes: Vec<SamplePoint>,
    area: Vec<SamplePoint>,
}

pub struct CalculationReportParts {
    pub function: String,
    pub interval: Interval,
    pub subdivisions: usize,
    pub value: f64,
    pub formatted_value: String,
    pub descriptor: MethodDescriptor,
    pub explanation: String,
    pub curve: Vec<SamplePoint>,
    pub nodes: Vec<SamplePoint>,
    pub area: Vec<SamplePoint>,
}

impl CalculationReport {
    pub fn new(parts: CalculationReportParts) -> CalculationReport {
        CalculationReport {
            method: parts.descriptor.method(),
            step: parts.interval.step(parts.subdivisions),
            function: parts.function,
            interval: parts.interval,
            subdivisions: parts.subdivisions,
            value: parts.value,
            formatted_value: parts.formatted_value,
            descriptor: parts.descriptor,
            explanation: parts.explanation,
            curve: parts.curve,
            nodes: parts.nodes,
            area: parts.area,
        }
    }

    pub fn function(&self) -> &str {
        &self.function
    }

    pub fn method(&self) -> QuadratureMethod {
        self.method
    }

    pub fn interval(&self) -> Interval {
        self.interval
    }

    pub fn subdivisions(&self) -> usize {
        self.subdivisions
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn formatted_value(&self) -> &str {
        &self.formatted_value
    }

    pub fn descriptor(&self) -> &MethodDescriptor {
        &self.descriptor
    }

    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    pub fn curve(&self) -> &[SamplePoint] {
        &self.curve
    }

    pub fn nodes(&self) -> &[SamplePoint] {
        &self.nodes
    }

    pub fn area(&self) -> &[SamplePoint] {
        &self.area
    }

    pub fn render_text(&self) -> String {
        let descriptor = &self.descriptor;
        format!(
            "∫ {} dx on [{}, {}] with n = {}\n\
             Result: {}\n\n\
             {}\n\
             Formula: {}\n\
             Description: {}\n\
             {}\n\
             Recommendation: {}\n\n\
             {}\n",
            self.function,
            self.interval.a(),
            self.interval.b(),
            self.subdivisions,
            self.formatted_value,
            descriptor.name(),
            descriptor.formula(),
            descriptor.description(),
            descriptor.precision(),
            descriptor.recommendation(),
            self.explanation,
        )
    }
}
