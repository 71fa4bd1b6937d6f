use std::f64::consts::PI;

use crate::math::quadrature::quadraturemethod::QuadratureMethod;
use crate::presentation::inputvalidation::RawCalculationInput;

/// 預設範例，一鍵帶入輸入欄位
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Preset {
    pub name: &'static str,
    pub function: &'static str,
    pub lower: f64,
    pub upper: f64,
    pub subdivisions: usize,
    pub method: QuadratureMethod,
}

pub static PRESETS: [Preset; 5] = [
    Preset {
        name: "linear",
        function: "x",
        lower: 0.0,
        upper: 10.0,
        subdivisions: 10,
        method: QuadratureMethod::Trapezoidal,
    },
    Preset {
        name: "parabola",
        function: "x^2",
        lower: 0.0,
        upper: 3.0,
        subdivisions: 6,
        method: QuadratureMethod::Simpson13,
    },
    Preset {
        name: "sine",
        function: "sin(x)",
        lower: 0.0,
        upper: PI,
        subdivisions: 10,
        method: QuadratureMethod::Simpson13,
    },
    Preset {
        name: "exponential",
        function: "exp(x)",
        lower: 0.0,
        upper: 1.0,
        subdivisions: 9,
        method: QuadratureMethod::Simpson38,
    },
    Preset {
        name: "cubic",
        function: "x^3 - 2*x^2 + x + 1",
        lower: -1.0,
        upper: 2.0,
        subdivisions: 6,
        method: QuadratureMethod::Simpson38,
    },
];

pub fn find_preset(name: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|preset| preset.name == name)
}

impl Preset {
    pub fn to_input(&self) -> RawCalculationInput {
        RawCalculationInput::new(
            self.function,
            &self.lower.to_string(),
            &self.upper.to_string(),
            &self.subdivisions.to_string(),
            self.method.id(),
        )
    }
}
