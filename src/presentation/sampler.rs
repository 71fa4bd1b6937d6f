use tracing::debug;

use crate::math::quadrature::integrablefunction::IntegrableFunction;
use crate::math::quadrature::interval::Interval;
use crate::math::quadrature::quadratureerror::QuadratureError;
use crate::math::quadrature::quadraturerule::evaluate_finite;
use crate::presentation::samplepoint::SamplePoint;

// ─────────────────────────────────────────────────────────────────────────────
// Sampler：產生繪圖資料，不回饋給積分引擎
// ─────────────────────────────────────────────────────────────────────────────
//
//   curve — 細取樣 steps+1 點，畫平滑曲線；求值失敗的點直接略過（曲線斷開）
//   nodes — 子區間節點 n+1 點，畫標記；求值失敗即回報錯誤
//   area  — [(a, 0), curve..., (b, 0)] 封閉多邊形，畫陰影面積

pub struct Sampler {
    curve_steps: usize,
}

impl Sampler {
    pub fn new(curve_steps: usize) -> Sampler {
        Sampler {
            curve_steps: curve_steps.max(1),
        }
    }

    pub fn curve_steps(&self) -> usize {
        self.curve_steps
    }

    pub fn curve(&self, f: &dyn IntegrableFunction, interval: &Interval) -> Vec<SamplePoint> {
        interval
            .linspace(self.curve_steps)
            .into_iter()
            .filter_map(|x| match evaluate_finite(f, x) {
                Ok(y) => Some(SamplePoint::new(x, y)),
                Err(error) => {
                    debug!(%error, "curve sample skipped");
                    None
                }
            })
            .collect()
    }

    pub fn nodes(&self, f: &dyn IntegrableFunction, interval: &Interval, n: usize) -> Result<Vec<SamplePoint>, QuadratureError> {
        interval
            .nodes(n)
            .into_iter()
            .map(|x| evaluate_finite(f, x).map(|y| SamplePoint::new(x, y)))
            .collect()
    }

    pub fn area(&self, curve: &[SamplePoint], interval: &Interval) -> Vec<SamplePoint> {
        let mut polygon = Vec::with_capacity(curve.len() + 2);
        polygon.push(SamplePoint::new(interval.a(), 0.0));
        polygon.extend_from_slice(curve);
        polygon.push(SamplePoint::new(interval.b(), 0.0));
        polygon
    }
}
