//! Errors produced by the unit algebra.
//!
//! All of these are programming errors: the units involved were composed
//! incorrectly. None of them are transient, so none of them should be retried.

use thiserror::Error;

use crate::{BaseDimension, CompositeUnit};

/// An error caused by an invalid combination of units.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitError {
    /// Two quantities were added, subtracted, or compared while carrying
    /// different units.
    #[error("unit mismatch: `{left}` is not the same unit as `{right}`")]
    UnitMismatch {
        /// The unit of the left operand
        left: String,
        /// The unit of the right operand
        right: String,
    },
    /// A conversion was requested between units that cannot be converted.
    #[error("cannot convert `{from}` to `{to}`: {reason}")]
    IncompatibleConversion {
        /// The unit being converted from
        from: String,
        /// The unit being converted to
        to: String,
        /// Why the conversion was rejected
        reason: ConversionRejection,
    },
    /// A scale (usually an SI prefix) was applied to a unit that cannot take one.
    #[error("cannot apply scale `{prefix}` to `{unit}`: {reason}")]
    InvalidScaleApplication {
        /// The unit the scale was applied to
        unit: String,
        /// The prefix label of the scale
        prefix: String,
        /// Why the scale was rejected
        reason: ScaleRejection,
    },
    /// Combining exponents left the range of `i32`.
    #[error("the exponent of `{unit}` is out of range")]
    ExponentOverflow {
        /// The entry whose exponent overflowed, without its exponent
        unit: String,
    },
}

impl UnitError {
    /// Creates a `UnitMismatch` error for the two units.
    #[must_use]
    pub fn unit_mismatch(left: &CompositeUnit, right: &CompositeUnit) -> Self {
        Self::UnitMismatch {
            left: left.describe(),
            right: right.describe(),
        }
    }

    /// Creates an `IncompatibleConversion` error for the two units.
    #[must_use]
    pub fn incompatible_conversion(
        from: &CompositeUnit,
        to: &CompositeUnit,
        reason: ConversionRejection,
    ) -> Self {
        Self::IncompatibleConversion {
            from: from.describe(),
            to: to.describe(),
            reason,
        }
    }

    /// Creates an `InvalidScaleApplication` error for the unit.
    #[must_use]
    pub fn invalid_scale_application(
        unit: &CompositeUnit,
        prefix: &str,
        reason: ScaleRejection,
    ) -> Self {
        Self::InvalidScaleApplication {
            unit: unit.describe(),
            prefix: prefix.to_string(),
            reason,
        }
    }

    /// Creates an `ExponentOverflow` error for the entry.
    #[must_use]
    pub fn exponent_overflow(dimension: &BaseDimension) -> Self {
        Self::ExponentOverflow {
            unit: format!("{}{}", dimension.prefix(), dimension.sub_symbol()),
        }
    }
}

/// The reason a conversion between two units was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConversionRejection {
    /// The base symbols of the two units differ (e.g. `m` and `s`)
    #[error("the base symbols differ")]
    SymbolMismatch,
    /// The exponents of the two units differ (e.g. `m` and `m^2`)
    #[error("the exponents differ")]
    ExponentMismatch,
    /// The compound units do not reduce to the same dimensions
    #[error("the dimensions differ")]
    DimensionMismatch,
    /// An affine unit was raised to an exponent other than 1
    #[error("affine conversions are only defined at exponent 1")]
    AffineExponent,
    /// An affine unit appeared inside a compound unit
    #[error("affine units can only be converted on their own")]
    AffineInCompound,
}

/// The reason a scale could not be applied to a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScaleRejection {
    /// The unit does not consist of exactly one base dimension
    #[error("expected exactly one base dimension, found {count}")]
    NotSingleDimension {
        /// The number of base dimensions the unit has
        count: usize,
    },
    /// The single base dimension is raised to an exponent other than 1
    #[error("the unit is raised to the power {exponent}")]
    NonUnitExponent {
        /// The exponent of the base dimension
        exponent: i32,
    },
    /// The unit already carries a scale
    #[error("the unit is already scaled")]
    AlreadyScaled,
}
