use crate::manager::manager::{IManager, Manager, ManagerBuilder};
use crate::manager::managererror::{parse_json_value, ManagerError};
use crate::math::quadrature::methoddescriptor::MethodDescriptor;
use crate::math::quadrature::quadraturemethod::QuadratureMethod;

// ─────────────────────────────────────────────────────────────────────────────
// 內建說明文字（純展示用途，與計算邏輯無關）
// ─────────────────────────────────────────────────────────────────────────────

fn builtin_descriptors() -> [MethodDescriptor; 3] {
    [
        MethodDescriptor::new(
            QuadratureMethod::Trapezoidal,
            "TRAPEZOIDAL RULE",
            "I ≈ (h/2) × [f(x₀) + 2f(x₁) + 2f(x₂) + ... + 2f(xₙ₋₁) + f(xₙ)]",
            "Approximates the area under the curve with trapezoids. It is the simplest method and works with any number of subdivisions.",
            "Precision: MEDIUM | Error: O(h²)",
            "Ideal for linear or smooth functions.",
        ),
        MethodDescriptor::new(
            QuadratureMethod::Simpson13,
            "SIMPSON 1/3 RULE",
            "I ≈ (h/3) × [f(x₀) + 4f(x₁) + 2f(x₂) + 4f(x₃) + ... + f(xₙ)]",
            "Approximates with second-degree parabolas. Requires an EVEN number of subdivisions.",
            "Precision: HIGH | Error: O(h⁴)",
            "Excellent for functions with smooth curvature.",
        ),
        MethodDescriptor::new(
            QuadratureMethod::Simpson38,
            "SIMPSON 3/8 RULE",
            "I ≈ (3h/8) × [f(x₀) + 3f(x₁) + 3f(x₂) + 2f(x₃) + ... + f(xₙ)]",
            "Uses cubic polynomials. Requires a number of subdivisions that is a multiple of 3.",
            "Precision: VERY HIGH | Error: O(h⁴)",
            "Best for complex functions or functions with high curvature.",
        ),
    ]
}

fn descriptor_from_json(json_value: serde_json::Value) -> Result<(QuadratureMethod, MethodDescriptor), ManagerError> {
    let descriptor: MethodDescriptor = parse_json_value(json_value)?;
    Ok((descriptor.method(), descriptor))
}

// ─────────────────────────────────────────────────────────────────────────────
// MethodRegistry
// ─────────────────────────────────────────────────────────────────────────────

/// 方法識別字 → 說明文字；建立後唯讀
#[derive(Clone, Debug)]
pub struct MethodRegistry {
    manager: Manager<QuadratureMethod, MethodDescriptor>,
}

impl MethodRegistry {
    pub fn builtin() -> MethodRegistry {
        MethodRegistry::from_builder(MethodRegistry::builder())
    }

    /// 已預先放入內建說明的 builder，可再以 JSON 覆蓋個別方法
    pub fn builder() -> ManagerBuilder<QuadratureMethod, MethodDescriptor> {
        let mut builder = ManagerBuilder::new(descriptor_from_json);
        for descriptor in builtin_descriptors() {
            builder.insert(descriptor.method(), descriptor);
        }
        builder
    }

    pub fn from_builder(builder: ManagerBuilder<QuadratureMethod, MethodDescriptor>) -> MethodRegistry {
        MethodRegistry {
            manager: builder.build(),
        }
    }

    pub fn with_overrides(json_vec: &[serde_json::Value]) -> Result<MethodRegistry, ManagerError> {
        let mut builder = MethodRegistry::builder();
        builder.insert_obj_from_json_vec(json_vec)?;
        Ok(MethodRegistry::from_builder(builder))
    }

    pub fn describe(&self, method: QuadratureMethod) -> Option<&MethodDescriptor> {
        self.manager.get(&method)
    }

    pub fn describe_id(&self, id: &str) -> Result<&MethodDescriptor, ManagerError> {
        id.parse::<QuadratureMethod>()
            .ok()
            .and_then(|method| self.describe(method))
            .ok_or_else(|| ManagerError::name_not_found(id))
    }

    pub fn methods(&self) -> Vec<QuadratureMethod> {
        let mut methods: Vec<QuadratureMethod> = self.manager.map().keys().copied().collect();
        methods.sort();
        methods
    }

    pub fn descriptors(&self) -> Vec<&MethodDescriptor> {
        self.methods()
            .into_iter()
            .filter_map(|method| self.describe(method))
            .collect()
    }
}

impl Default for MethodRegistry {
    fn default() -> MethodRegistry {
        MethodRegistry::builtin()
    }
}
