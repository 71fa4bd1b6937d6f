use crate::math::quadrature::interval::Interval;
use crate::math::quadrature::quadraturemethod::QuadratureMethod;
use crate::math::round::format_fixed;

/// 說明目前圖形的意義，步長 h 取小數四位
pub fn explain(method: QuadratureMethod, interval: &Interval, n: usize) -> String {
    let (a, b) = (interval.a(), interval.b());
    let body = match method {
        QuadratureMethod::Trapezoidal => format!(
            "The Trapezoidal rule splits the area into {n} trapezoids between x={a} and x={b}.\n\n\
             • Each trapezoid joins two consecutive points with a straight line\n\
             • The marked points show where the function is evaluated\n\
             • The shaded area is the sum of all trapezoids\n\
             • More subdivisions give a better approximation"
        ),
        QuadratureMethod::Simpson13 => format!(
            "The Simpson 1/3 rule uses {n} subdivisions (an even number is required).\n\n\
             • Groups the points in pairs of subintervals and fits parabolas\n\
             • The marked points are the evaluation nodes\n\
             • Uses alternating coefficients: 1, 4, 2, 4, 2, ..., 4, 1\n\
             • Higher precision than the Trapezoidal rule with fewer subdivisions"
        ),
        QuadratureMethod::Simpson38 => format!(
            "The Simpson 3/8 rule uses {n} subdivisions (a multiple of 3).\n\n\
             • Groups the points in triples of subintervals and fits cubics\n\
             • The marked points are the evaluation nodes\n\
             • Uses coefficients: 1, 3, 3, 2, 3, 3, 2, ..., 3, 3, 1\n\
             • Highest precision for complex functions"
        ),
    };
    format!(
        "Chart interpretation:\n\n{body}\n\nStep: h = ({b} - {a})/{n} = {}",
        format_fixed(interval.step(n), 4)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_line_uses_four_decimals() {
        let interval = Interval::new(0.0, 1.0).unwrap();
        let text = explain(QuadratureMethod::Simpson38, &interval, 3);
        insta::assert_snapshot!(text.lines().last().unwrap(), @"Step: h = (1 - 0)/3 = 0.3333");
    }

    #[test]
    fn opening_line_names_the_rule_and_count() {
        let interval = Interval::new(-1.5, 2.0).unwrap();
        let text = explain(QuadratureMethod::Trapezoidal, &interval, 7);
        insta::assert_snapshot!(
            text.lines().nth(2).unwrap(),
            @"The Trapezoidal rule splits the area into 7 trapezoids between x=-1.5 and x=2."
        );
    }

    #[test]
    fn every_method_has_an_explanation() {
        let interval = Interval::new(0.0, 6.0).unwrap();
        for method in QuadratureMethod::ALL {
            let text = explain(method, &interval, 6);
            assert!(text.starts_with("Chart interpretation:"));
            assert!(text.ends_with("= 1.0000"));
        }
    }
}
