use super::context::{CacheKey, EvalContext};
use super::ops::parse_number;
use super::Engine;
use crate::catalog::FormValues;
use crate::error::EvaluationError;
use crate::model::Operand;

impl<'a, F: FormValues> Engine<'a, F> {
    /// Resolves a single operand to a number.
    ///
    /// Literals parse-or-0. Field references go through the per-invocation
    /// cache: a field owning a calculation is computed recursively, any
    /// other input field reads its submitted form value. Unknown ids and
    /// unset references resolve to 0.
    pub(super) fn resolve(
        &self,
        operand: &Operand,
        ctx: &mut EvalContext,
    ) -> Result<f64, EvaluationError> {
        match operand {
            Operand::Number { value } => Ok(parse_number(value)),
            Operand::Input { field_id: None } => Ok(0.0),
            Operand::Input {
                field_id: Some(id),
            } => self.resolve_field(CacheKey::Input(id.clone()), ctx),
            Operand::Logic { logic_id } => {
                self.resolve_field(CacheKey::Logic(logic_id.clone()), ctx)
            }
        }
    }

    pub(super) fn resolve_field(
        &self,
        key: CacheKey,
        ctx: &mut EvalContext,
    ) -> Result<f64, EvaluationError> {
        if let Some(cached) = ctx.cached(&key) {
            return Ok(cached);
        }
        ctx.enter(&key)?;
        let value = self.resolve_field_uncached(&key, ctx);
        ctx.exit(&key);
        let value = value?;
        ctx.store(key, value);
        Ok(value)
    }

    fn resolve_field_uncached(
        &self,
        key: &CacheKey,
        ctx: &mut EvalContext,
    ) -> Result<f64, EvaluationError> {
        match key {
            CacheKey::Input(id) => {
                if self.catalog.field(id).is_none() {
                    return Ok(0.0);
                }
                // Derived variable fields own a calculation in the catalog;
                // plain fields read the submitted value.
                if let Some(calculation) = self.catalog.calculation_for(id) {
                    self.compute_calculation_with(calculation, ctx)
                } else {
                    Ok(parse_number(self.form.raw(id).unwrap_or("")))
                }
            }
            CacheKey::Logic(id) => match self.catalog.calculation_for(id) {
                Some(calculation) => self.compute_calculation_with(calculation, ctx),
                None => Ok(0.0),
            },
        }
    }
}
