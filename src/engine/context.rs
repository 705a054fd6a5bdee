use crate::error::EvaluationError;
use crate::model::FieldId;
use ahash::{AHashMap, AHashSet};

/// Memoization key for a resolved field reference. Input and logic fields
/// live in separate id namespaces, so the kind is part of the key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(super) enum CacheKey {
    Input(FieldId),
    Logic(FieldId),
}

impl CacheKey {
    fn id(&self) -> &str {
        match self {
            CacheKey::Input(id) | CacheKey::Logic(id) => id,
        }
    }
}

/// Per-invocation evaluation state: the memoization cache and the set of
/// fields currently being resolved on the call stack.
///
/// A fresh context is created at the top of every `compute` call and never
/// shared, so nothing can leak between evaluations. The in-progress set is
/// the cycle guard: revisiting a key before its resolution finished means
/// the admin's logic references itself.
#[derive(Debug, Default)]
pub(super) struct EvalContext {
    cache: AHashMap<CacheKey, f64>,
    in_progress: AHashSet<CacheKey>,
}

impl EvalContext {
    pub(super) fn new() -> Self {
        Self::default()
    }

    pub(super) fn cached(&self, key: &CacheKey) -> Option<f64> {
        self.cache.get(key).copied()
    }

    pub(super) fn store(&mut self, key: CacheKey, value: f64) {
        self.cache.insert(key, value);
    }

    /// Marks a key as being resolved. Fails if it already is.
    pub(super) fn enter(&mut self, key: &CacheKey) -> Result<(), EvaluationError> {
        if !self.in_progress.insert(key.clone()) {
            return Err(EvaluationError::CyclicReference {
                id: key.id().to_string(),
            });
        }
        Ok(())
    }

    pub(super) fn exit(&mut self, key: &CacheKey) {
        self.in_progress.remove(key);
    }
}
