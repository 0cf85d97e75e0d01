//! Conversion factors between compatible units.

use std::fmt;

use crate::{BaseDimension, CompositeUnit, ConversionRejection, SubConversion, UnitError};

/// A resolved conversion from one unit into another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Conversion {
    /// Multiply the value by a factor.
    Factor(f64),
    /// Map the value through the base unit of an affine dimension.
    Affine {
        /// The scale of the source entry
        source_scale: f64,
        /// The sub-unit conversion of the source entry
        source: SubConversion,
        /// The scale of the target entry
        target_scale: f64,
        /// The sub-unit conversion of the target entry
        target: SubConversion,
    },
}

impl Conversion {
    /// The conversion that leaves values unchanged.
    pub const IDENTITY: Self = Self::Factor(1.0);

    /// Converts a value expressed in the source unit into the target unit.
    #[must_use]
    pub fn apply(&self, value: f64) -> f64 {
        match self {
            Self::Factor(factor) => value * factor,
            Self::Affine {
                source_scale,
                source,
                target_scale,
                target,
            } => {
                let base = source.to_base(value * source_scale);
                target.from_base(base) / target_scale
            }
        }
    }

    /// The multiplicative factor, if the conversion has no offset.
    #[must_use]
    pub const fn factor(&self) -> Option<f64> {
        match self {
            Self::Factor(factor) => Some(*factor),
            Self::Affine { .. } => None,
        }
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Factor(factor) => write!(f, "a factor of {factor}"),
            Self::Affine { .. } => write!(f, "an affine mapping"),
        }
    }
}

/// Finds the conversion from `source` into `target`.
///
/// Equal units convert with the identity. Single-entry units must share their
/// base symbol and exponent, and an affine entry is only accepted at
/// exponent 1. Compound units must reduce to the same signature and may not
/// contain affine entries.
pub fn conversion(
    source: &CompositeUnit,
    target: &CompositeUnit,
) -> Result<Conversion, UnitError> {
    if source == target {
        return Ok(Conversion::IDENTITY);
    }

    let reject = |reason| UnitError::incompatible_conversion(source, target, reason);

    let conversion = match (source.single(), target.single()) {
        (Some(source_entry), Some(target_entry)) => {
            single_conversion(source_entry, target_entry).map_err(reject)?
        }
        _ => {
            if source.has_affine() || target.has_affine() {
                return Err(reject(ConversionRejection::AffineInCompound));
            }

            if source.signature() != target.signature() {
                return Err(reject(ConversionRejection::DimensionMismatch));
            }

            Conversion::Factor(magnitude(source) / magnitude(target))
        }
    };

    log::trace!("conversion from `{source}` to `{target}` resolved to {conversion}");

    Ok(conversion)
}

fn single_conversion(
    source: &BaseDimension,
    target: &BaseDimension,
) -> Result<Conversion, ConversionRejection> {
    if source.symbol() != target.symbol() {
        return Err(ConversionRejection::SymbolMismatch);
    }

    if source.exponent() != target.exponent() {
        return Err(ConversionRejection::ExponentMismatch);
    }

    if source.is_affine() || target.is_affine() {
        if source.exponent() != 1 {
            return Err(ConversionRejection::AffineExponent);
        }

        return Ok(Conversion::Affine {
            source_scale: crate::ratio_to_f64(source.scale()),
            source: source.conversion(),
            target_scale: crate::ratio_to_f64(target.scale()),
            target: target.conversion(),
        });
    }

    let ratio = source.factor() / target.factor();
    Ok(Conversion::Factor(powi_by_squaring(ratio, source.exponent())))
}

/// The size of one unit in base units.
fn magnitude(unit: &CompositeUnit) -> f64 {
    unit.entries()
        .iter()
        .map(|entry| powi_by_squaring(entry.factor(), entry.exponent()))
        .product()
}

/// Raises `base` to an integer power by repeated squaring.
///
/// Negative exponents invert the base first.
#[must_use]
pub fn powi_by_squaring(base: f64, exponent: i32) -> f64 {
    let base = if exponent < 0 { base.recip() } else { base };

    let Ok(times) = usize::try_from(exponent.unsigned_abs()) else {
        return base.powf(f64::from(exponent.unsigned_abs()));
    };

    num_traits::pow(base, times)
}
