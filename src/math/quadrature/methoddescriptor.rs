use serde::{Deserialize, Serialize};

use crate::math::quadrature::quadraturemethod::QuadratureMethod;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDescriptor {
    method: QuadratureMethod,
    name: String,
    formula: String,
    description: String,
    precision: String,
    recommendation: String,
}

impl MethodDescriptor {
    pub fn new(
        method: QuadratureMethod,
        name: &str,
        formula: &str,
        description: &str,
        precision: &str,
        recommendation: &str,
    ) -> MethodDescriptor {
        MethodDescriptor {
            method,
            name: name.to_owned(),
            formula: formula.to_owned(),
            description: description.to_owned(),
            precision: precision.to_owned(),
            recommendation: recommendation.to_owned(),
        }
    }

    pub fn method(&self) -> QuadratureMethod {
        self.method
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn formula(&self) -> &str {
        &self.formula
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn precision(&self) -> &str {
        &self.precision
    }

    pub fn recommendation(&self) -> &str {
        &self.recommendation
    }

    pub fn is_complete(&self) -> bool {
        [
            &self.name,
            &self.formula,
            &self.description,
            &self.precision,
            &self.recommendation,
        ]
        .iter()
        .all(|text| !text.trim().is_empty())
    }
}
