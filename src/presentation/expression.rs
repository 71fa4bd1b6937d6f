use std::f64::consts::{E, PI};

use rhai::{Dynamic, Engine, Scope, AST};
use thiserror::Error;

use crate::math::quadrature::integrablefunction::IntegrableFunction;
use crate::math::quadrature::quadratureerror::EvaluationError;
use crate::presentation::mathsyntax::MathExpr;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot compile '{expression}': {message}")]
pub struct ExpressionError {
    pub expression: String,
    pub message: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// ExpressionFunction
// ─────────────────────────────────────────────────────────────────────────────
//
// 將文字運算式編譯為 f(x)：
//   - 先以 MathExpr 依數學優先序解析（-x^2 = -(x^2)，1/2 = 0.5，log = ln）
//   - 再轉寫為完全加括號的 rhai 運算式，由 rhai 求值
//   - 數字常值以 lit{i} 常數放入 scope；另有常數 pi、e

pub struct ExpressionFunction {
    expression: String,
    engine: Engine,
    ast: AST,
    literals: Vec<f64>,
}

impl ExpressionFunction {
    pub fn compile(expression: &str) -> Result<ExpressionFunction, ExpressionError> {
        let expression = expression.trim().to_owned();
        let compile_error = |message: String| ExpressionError {
            expression: expression.clone(),
            message,
        };
        let syntax = MathExpr::parse(&expression).map_err(|error| compile_error(error.to_string()))?;
        let mut literals = Vec::new();
        let source = syntax.to_rhai(&mut literals);

        let engine = Engine::new();
        let ast = engine
            .compile_expression(&source)
            .map_err(|error| compile_error(error.to_string()))?;
        Ok(ExpressionFunction {
            expression,
            engine,
            ast,
            literals,
        })
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }
}

impl IntegrableFunction for ExpressionFunction {
    fn evaluate(&self, x: f64) -> Result<f64, EvaluationError> {
        let mut scope = Scope::new();
        scope.push_constant("pi", PI).push_constant("e", E).push("x", x);
        for (i, value) in self.literals.iter().enumerate() {
            scope.push_constant(format!("lit{i}"), *value);
        }
        let value: Dynamic = self
            .engine
            .eval_ast_with_scope(&mut scope, &self.ast)
            .map_err(|error| EvaluationError::new(error.to_string()))?;
        value.as_float().map_err(|type_name| {
            EvaluationError::new(format!("expression produced a value of type {type_name}, expected a number"))
        })
    }
}
