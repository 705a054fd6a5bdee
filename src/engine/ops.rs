use crate::model::Operator;

/// Applies one binary arithmetic operator to two resolved operands.
///
/// Total by design: division by zero is a defined `0`, not an error, and
/// `None` contributes `0`, so a fold over any operation list always
/// produces a number.
pub fn apply(operator: Operator, v1: f64, v2: f64) -> f64 {
    match operator {
        Operator::Add => v1 + v2,
        Operator::Subtract => v1 - v2,
        Operator::Multiply => v1 * v2,
        Operator::Divide => {
            if v2 == 0.0 {
                0.0
            } else {
                v1 / v2
            }
        }
        Operator::Percentage => (v1 * v2) / 100.0,
        Operator::None => 0.0,
    }
}

/// Parses an admin literal or a submitted form value as a float.
/// Anything unparseable coerces to `0`, as do "NaN" and "inf" — Rust
/// parses those to non-finite floats that would otherwise poison the
/// whole fold.
pub(super) fn parse_number(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn divide_by_zero_is_zero() {
        assert_eq!(apply(Operator::Divide, 10.0, 0.0), 0.0);
        assert_eq!(apply(Operator::Divide, 10.0, 2.0), 5.0);
    }

    #[test]
    fn percentage_of_base() {
        assert_eq!(apply(Operator::Percentage, 200.0, 10.0), 20.0);
    }

    #[test]
    fn none_operator_contributes_nothing() {
        assert_eq!(apply(Operator::None, 7.0, 3.0), 0.0);
    }

    #[test]
    fn parse_number_coerces_garbage_to_zero() {
        assert_eq!(parse_number("abc"), 0.0);
        assert_eq!(parse_number(""), 0.0);
        assert_eq!(parse_number(" 5 "), 5.0);
        assert_eq!(parse_number("2.5"), 2.5);
    }

    #[test]
    fn parse_number_coerces_non_finite_to_zero() {
        assert_eq!(parse_number("NaN"), 0.0);
        assert_eq!(parse_number("nan"), 0.0);
        assert_eq!(parse_number("inf"), 0.0);
        assert_eq!(parse_number("-inf"), 0.0);
    }
}
