//! Dimensioned quantities for Metrum
//!
//! A [`Quantity`] pairs an `f64` with a [`CompositeUnit`]. Addition,
//! subtraction and comparison require equal units and report a
//! [`UnitError`] otherwise; multiplication and division combine units through
//! the unit algebra and collapse dimensionless results into a
//! [`Value::Scalar`].

mod angle;
pub mod prefix;
mod quantity;
pub mod util;
mod value;

pub use angle::{RADIAN, angle_from_cosine, radian, to_radians};
pub use metrum_unit::{CompositeUnit, Prefix, UnitError};
pub use quantity::Quantity;
pub use value::Value;
