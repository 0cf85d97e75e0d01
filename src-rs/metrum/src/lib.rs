#![cfg_attr(doc, doc = include_str!("../../../README.md"))]
//! Units, quantities and conversions
//!
//! This crate gathers the Metrum crates under one name:
//!
//! - [`unit`]: base dimensions, composite units and conversions
//! - [`quantity`]: values tagged with units
//! - [`builtins`]: the standard unit catalog and suffix registry
//! - [`parser`]: unit expression and quantity literal parsing
//! - [`runtime`]: parsing and evaluation against a registry

pub use metrum_builtins as builtins;
pub use metrum_parser as parser;
pub use metrum_quantity as quantity;
pub use metrum_runtime as runtime;
pub use metrum_unit as unit;

pub use metrum_quantity::{CompositeUnit, Prefix, Quantity, UnitError, Value};
pub use metrum_runtime::{Config, Runtime, RuntimeError};
