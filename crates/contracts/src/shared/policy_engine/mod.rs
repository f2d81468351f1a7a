//! Policy configuration & combination engine
//!
//! Pure and synchronous: every operation is a function of its arguments and
//! returns a fresh value. Catalogs are read, never mutated.

pub mod baseline;
pub mod combination;
pub mod config;
pub mod cycle_rules;
pub mod derived;
pub mod engine;
pub mod selection;

pub use baseline::{BaselineOptionSets, CycleBaseline};
pub use combination::{
    valid_combinations, DimensionOptions, FixedAttributes, OptionSource, ValidCombinations,
};
pub use config::PolicyEngineConfig;
pub use cycle_rules::{
    resolve_cycle_types, resolve_cycle_types_for_key, CycleDerivation, CycleRule, FormMode,
    SiteOverrides, UnknownSegmentPolicy,
};
pub use derived::SecondaryClassifier;
pub use engine::PolicyEngine;
pub use selection::PolicySelection;

pub use crate::domain::a001_wifi_policy::{PolicyAttribute, PolicyError};
