use super::context::{CacheKey, EvalContext};
use super::ops::parse_number;
use super::Engine;
use crate::catalog::FormValues;
use crate::error::EvaluationError;
use crate::model::{Comparison, Condition, ConditionTarget, LogicalOperator};

/// The current value of a condition's field: logic fields only ever yield
/// numbers, input fields keep their raw string so `Equals` can compare
/// non-numeric values literally.
enum FieldValue<'v> {
    Submitted(Option<&'v str>),
    Computed(f64),
}

impl FieldValue<'_> {
    fn numeric(&self) -> f64 {
        match self {
            FieldValue::Submitted(raw) => parse_number(raw.unwrap_or("")),
            FieldValue::Computed(n) => *n,
        }
    }
}

impl<'a, F: FormValues> Engine<'a, F> {
    /// Evaluates a condition list to one boolean.
    ///
    /// Results combine left to right through each condition's own
    /// `logical_operator`; the first condition's operator has no preceding
    /// term and is ignored. An empty list is vacuously true, so a
    /// conditional calculation without conditions runs its `then` branch.
    pub(super) fn evaluate_conditions(
        &self,
        conditions: &[Condition],
        ctx: &mut EvalContext,
    ) -> Result<bool, EvaluationError> {
        let mut result = true;
        for (index, condition) in conditions.iter().enumerate() {
            let current = self.evaluate_condition(condition, ctx)?;
            result = if index == 0 {
                current
            } else {
                match condition.logical_operator {
                    LogicalOperator::And => result && current,
                    LogicalOperator::Or => result || current,
                }
            };
        }
        Ok(result)
    }

    fn evaluate_condition(
        &self,
        condition: &Condition,
        ctx: &mut EvalContext,
    ) -> Result<bool, EvaluationError> {
        let current = match condition.target {
            ConditionTarget::Input => FieldValue::Submitted(self.form.raw(&condition.field)),
            ConditionTarget::Logic => FieldValue::Computed(
                self.resolve_field(CacheKey::Logic(condition.field.clone()), ctx)?,
            ),
        };

        Ok(match condition.comparison {
            Comparison::Equals => compare_equals(&current, &condition.value),
            Comparison::NotEquals => !compare_equals(&current, &condition.value),
            Comparison::GreaterThan => current.numeric() > parse_number(&condition.value),
            Comparison::LessThan => current.numeric() < parse_number(&condition.value),
            Comparison::Between => {
                let x = current.numeric();
                let low = parse_number(&condition.value);
                let high = parse_number(condition.value2.as_deref().unwrap_or(""));
                low <= x && x <= high
            }
        })
    }
}

/// Numeric equality when both sides parse as numbers, literal string
/// equality otherwise.
fn compare_equals(current: &FieldValue<'_>, expected: &str) -> bool {
    match current {
        FieldValue::Computed(n) => *n == parse_number(expected),
        FieldValue::Submitted(raw) => {
            let raw = raw.unwrap_or("");
            match (raw.trim().parse::<f64>(), expected.trim().parse::<f64>()) {
                (Ok(a), Ok(b)) => a == b,
                _ => raw == expected,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equals_prefers_numeric_comparison() {
        assert!(compare_equals(&FieldValue::Submitted(Some("30.0")), "30"));
        assert!(compare_equals(&FieldValue::Submitted(Some("yes")), "yes"));
        assert!(!compare_equals(&FieldValue::Submitted(Some("yes")), "no"));
        assert!(!compare_equals(&FieldValue::Submitted(None), "30"));
    }
}
