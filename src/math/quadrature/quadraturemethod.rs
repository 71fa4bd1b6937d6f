use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::math::quadrature::quadraturerule::QuadratureRule;
use crate::math::quadrature::simpson13rule::Simpson13Rule;
use crate::math::quadrature::simpson38rule::Simpson38Rule;
use crate::math::quadrature::trapezoidalrule::TrapezoidalRule;

static TRAPEZOIDAL_RULE: TrapezoidalRule = TrapezoidalRule;
static SIMPSON13_RULE: Simpson13Rule = Simpson13Rule;
static SIMPSON38_RULE: Simpson38Rule = Simpson38Rule;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuadratureMethod {
    Trapezoidal,
    Simpson13,
    Simpson38,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown integration method '{0}'")]
pub struct ParseMethodError(pub String);

impl QuadratureMethod {
    pub const ALL: [QuadratureMethod; 3] = [
        QuadratureMethod::Trapezoidal,
        QuadratureMethod::Simpson13,
        QuadratureMethod::Simpson38,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            QuadratureMethod::Trapezoidal => "trapezoidal",
            QuadratureMethod::Simpson13 => "simpson13",
            QuadratureMethod::Simpson38 => "simpson38",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            QuadratureMethod::Trapezoidal => "Trapezoidal",
            QuadratureMethod::Simpson13 => "Simpson 1/3",
            QuadratureMethod::Simpson38 => "Simpson 3/8",
        }
    }

    pub fn rule(&self) -> &'static dyn QuadratureRule {
        match self {
            QuadratureMethod::Trapezoidal => &TRAPEZOIDAL_RULE,
            QuadratureMethod::Simpson13 => &SIMPSON13_RULE,
            QuadratureMethod::Simpson38 => &SIMPSON38_RULE,
        }
    }
}

impl fmt::Display for QuadratureMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for QuadratureMethod {
    type Err = ParseMethodError;

    fn from_str(s: &str) -> Result<QuadratureMethod, ParseMethodError> {
        QuadratureMethod::ALL
            .into_iter()
            .find(|method| method.id() == s.trim())
            .ok_or_else(|| ParseMethodError(s.to_owned()))
    }
}
