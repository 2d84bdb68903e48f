//! Arity Emission Loop
//!
//! Drives a block renderer across every arity in `0..=max_params`. Blocks
//! never reference each other's symbols, so they are rendered in parallel
//! and concatenated in the requested order.

use rayon::prelude::*;
use tracing::trace;

use crate::params::ParamList;

/// One call arity within a configured range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Arity {
    value: usize,
    max: usize,
}

impl Arity {
    /// Arity `value` in a range whose maximum is `max`.
    pub fn new(value: usize, max: usize) -> Self {
        debug_assert!(value <= max, "arity {value} exceeds max {max}");
        Arity { value, max }
    }

    /// Number of value parameters.
    #[inline]
    pub fn value(self) -> usize {
        self.value
    }

    /// Configured maximum arity.
    #[inline]
    pub fn max(self) -> usize {
        self.max
    }

    /// Whether this is the maximum arity, which owns the primary template.
    ///
    /// The primary template is the only place `= void` defaults may appear;
    /// every lower arity is emitted as a partial specialization.
    #[inline]
    pub fn is_max(self) -> bool {
        self.value == self.max
    }

    /// Parameter slots of this arity behind `prefix`.
    pub fn params<'a>(self, prefix: &[&'a str]) -> ParamList<'a> {
        ParamList::new(self.value).with_prefix(prefix)
    }
}

/// Iteration order of the emission loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArityOrder {
    /// `max_params` down to 0 (factory-like artifacts).
    Descending,
    /// 0 up to `max_params` (map operations, library accessors).
    Ascending,
}

impl ArityOrder {
    /// All arities of `0..=max_params` in this order.
    pub fn arities(self, max_params: usize) -> Vec<Arity> {
        let make = |value| Arity::new(value, max_params);
        match self {
            ArityOrder::Descending => (0..=max_params).rev().map(make).collect(),
            ArityOrder::Ascending => (0..=max_params).map(make).collect(),
        }
    }
}

/// Render one block per arity, in order.
pub fn render_blocks<F>(max_params: usize, order: ArityOrder, render: F) -> Vec<String>
where
    F: Fn(Arity) -> String + Sync + Send,
{
    order
        .arities(max_params)
        .into_par_iter()
        .map(|arity| {
            trace!(arity = arity.value(), max = arity.max(), "rendering arity block");
            render(arity)
        })
        .collect()
}

/// Render one block per arity and concatenate them in order.
pub fn emit_blocks<F>(max_params: usize, order: ArityOrder, render: F) -> String
where
    F: Fn(Arity) -> String + Sync + Send,
{
    render_blocks(max_params, order, render).concat()
}

#[cfg(test)]
mod tests;
