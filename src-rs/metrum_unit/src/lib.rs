#![cfg_attr(doc, doc = include_str!("../README.md"))]
//! Unit algebra for Metrum

mod composite;
mod convert;
mod dimension;
pub mod error;
mod intern;
mod prefix;
mod sub_conversion;

pub use composite::CompositeUnit;
pub use convert::{Conversion, powi_by_squaring};
pub use dimension::{BaseDimension, ratio_to_f64};
pub use error::{ConversionRejection, ScaleRejection, UnitError};
pub use prefix::Prefix;
pub use sub_conversion::SubConversion;
