/// 四捨六入五成雙（banker's rounding）到小數第 `digits` 位
pub fn round(x: f64, digits: u32) -> f64 {
    if !x.is_finite() {
        return x;
    }

    // 10^digits 超過 1e22 時分兩段乘，避免單一乘數溢位
    let (pow1, pow2) = if digits > 22 {
        (10f64.powi((digits - 22) as i32), 1e22)
    } else {
        (10f64.powi(digits as i32), 1.0)
    };

    let y = (x * pow1) * pow2;
    if !y.is_finite() {
        return x;
    }

    let mut z = y.round();
    if (y - z).abs() == 0.5 {
        z = 2.0 * (y / 2.0).round();
    }

    (z / pow2) / pow1
}

/// 固定小數位數輸出，例如 `format_fixed(1.0 / 3.0, 8)` → `"0.33333333"`
pub fn format_fixed(x: f64, digits: u32) -> String {
    format!("{:.*}", digits as usize, round(x, digits))
}
