use serde::{Deserialize, Serialize};

/// 繪圖用的 (x, f(x))
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SamplePoint {
    x: f64,
    y: f64,
}

impl SamplePoint {
    pub fn new(x: f64, y: f64) -> SamplePoint {
        SamplePoint { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }
}
