//! Derived queries over the static type table
//!
//! This module computes the combined weaknesses, resistances and immunities of a
//! pokemon from its list of types.

mod effectiveness;

pub use effectiveness::{
    Category, EffectivenessResult, compute_effectiveness, compute_effectiveness_by_name,
};
