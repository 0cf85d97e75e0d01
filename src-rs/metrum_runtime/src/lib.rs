#![cfg_attr(doc, doc = include_str!("../README.md"))]
//! Runtime for Metrum unit expressions

mod config;
mod error;
mod eval_unit;
mod runtime;

pub use config::Config;
pub use error::{EvalError, RuntimeError};
pub use eval_unit::{eval_quantity, eval_unit};
pub use runtime::Runtime;

pub use metrum_builtins::{RegistryOptions, UnitRegistry};
