use std::{cmp::Ordering, fmt, ops};

use metrum_unit::{CompositeUnit, Prefix, UnitError};
use num_rational::Ratio;

use crate::{Value, angle, util::is_close};

/// A number tagged with a composite unit.
///
/// Quantities are immutable: every operation returns a new quantity.
/// Operations that need matching units return a `Result` instead of
/// converting one side implicitly.
#[derive(Debug, Clone, PartialEq)]
pub struct Quantity {
    value: f64,
    unit: CompositeUnit,
}

impl Quantity {
    /// Creates a new quantity.
    #[must_use]
    pub const fn new(value: f64, unit: CompositeUnit) -> Self {
        Self { value, unit }
    }

    /// Creates a quantity without dimensions.
    #[must_use]
    pub fn dimensionless(value: f64) -> Self {
        Self::new(value, CompositeUnit::dimensionless())
    }

    /// An angle of zero radians.
    #[must_use]
    pub fn zero_angle() -> Self {
        Self::new(0.0, angle::radian())
    }

    /// The numeric value, expressed in the quantity's unit.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// The unit of the quantity.
    #[must_use]
    pub const fn unit(&self) -> &CompositeUnit {
        &self.unit
    }

    /// Splits the quantity into its value and unit.
    #[must_use]
    pub fn into_parts(self) -> (f64, CompositeUnit) {
        (self.value, self.unit)
    }

    /// Whether the quantity has no dimensions.
    #[must_use]
    pub fn is_dimensionless(&self) -> bool {
        self.unit.is_dimensionless()
    }

    fn require_same_unit(&self, rhs: &Self) -> Result<(), UnitError> {
        if self.unit == rhs.unit {
            Ok(())
        } else {
            Err(UnitError::unit_mismatch(&self.unit, &rhs.unit))
        }
    }

    /// Compares two quantities for ordering.
    ///
    /// # Errors
    ///
    /// Returns `UnitError::UnitMismatch` if the units don't match.
    pub fn checked_partial_cmp(&self, rhs: &Self) -> Result<Option<Ordering>, UnitError> {
        self.require_same_unit(rhs)?;

        Ok(self.value.partial_cmp(&rhs.value))
    }

    /// Checks if two quantities are equal.
    ///
    /// # Errors
    ///
    /// Returns `UnitError::UnitMismatch` if the units don't match.
    pub fn checked_eq(&self, rhs: &Self) -> Result<bool, UnitError> {
        self.checked_partial_cmp(rhs)
            .map(|ordering| ordering == Some(Ordering::Equal))
    }

    /// Checks if two quantities are equal within floating point tolerance.
    ///
    /// # Errors
    ///
    /// Returns `UnitError::UnitMismatch` if the units don't match.
    pub fn checked_is_close(&self, rhs: &Self) -> Result<bool, UnitError> {
        self.require_same_unit(rhs)?;

        Ok(is_close(self.value, rhs.value))
    }

    /// Adds two quantities.
    ///
    /// # Errors
    ///
    /// Returns `UnitError::UnitMismatch` if the units don't match.
    pub fn checked_add(self, rhs: &Self) -> Result<Self, UnitError> {
        self.require_same_unit(rhs)?;

        Ok(Self {
            value: self.value + rhs.value,
            unit: self.unit,
        })
    }

    /// Subtracts two quantities.
    ///
    /// # Errors
    ///
    /// Returns `UnitError::UnitMismatch` if the units don't match.
    pub fn checked_sub(self, rhs: &Self) -> Result<Self, UnitError> {
        self.require_same_unit(rhs)?;

        Ok(Self {
            value: self.value - rhs.value,
            unit: self.unit,
        })
    }

    /// Computes the floating point remainder of two quantities.
    ///
    /// # Errors
    ///
    /// Returns `UnitError::UnitMismatch` if the units don't match.
    pub fn checked_rem(self, rhs: &Self) -> Result<Self, UnitError> {
        self.require_same_unit(rhs)?;

        Ok(Self {
            value: self.value % rhs.value,
            unit: self.unit,
        })
    }

    /// The absolute value of the quantity.
    #[must_use]
    pub fn abs(self) -> Self {
        Self {
            value: self.value.abs(),
            unit: self.unit,
        }
    }

    /// Raises the quantity to an integer power.
    ///
    /// # Panics
    ///
    /// Panics if an exponent of the unit leaves the range of `i32`.
    #[must_use]
    pub fn pow(self, exponent: i32) -> Self {
        Self {
            value: self.value.powi(exponent),
            unit: self.unit.pow(exponent),
        }
    }

    /// Converts the quantity into `target`.
    ///
    /// Converting into an equal unit returns the quantity unchanged.
    ///
    /// # Errors
    ///
    /// Returns `UnitError::IncompatibleConversion` if the units cannot be
    /// converted into one another.
    pub fn convert_to(&self, target: &CompositeUnit) -> Result<Self, UnitError> {
        let conversion = self.unit.conversion_to(target)?;

        Ok(Self {
            value: conversion.apply(self.value),
            unit: target.clone(),
        })
    }

    /// Relabels the quantity with a scaled unit, keeping its value.
    ///
    /// `1 m` scaled by `1000/1` with prefix `k` becomes `1 km`.
    ///
    /// # Errors
    ///
    /// Returns `UnitError::InvalidScaleApplication` if the unit is compound,
    /// is raised to a power other than 1, or already carries a scale.
    pub fn apply_scale(self, ratio: Ratio<i64>, prefix: &str) -> Result<Self, UnitError> {
        Ok(Self {
            unit: self.unit.with_scale(ratio, prefix)?,
            value: self.value,
        })
    }

    /// Relabels the quantity with a prefixed unit, keeping its value.
    ///
    /// # Errors
    ///
    /// See [`Quantity::apply_scale`].
    pub fn with_prefix(self, prefix: Prefix) -> Result<Self, UnitError> {
        self.apply_scale(prefix.ratio(), prefix.symbol())
    }

    /// The sine of a plane angle.
    ///
    /// # Errors
    ///
    /// Returns `UnitError::IncompatibleConversion` if the quantity is not an
    /// angle.
    pub fn sin(&self) -> Result<f64, UnitError> {
        angle::to_radians(self).map(f64::sin)
    }

    /// The cosine of a plane angle.
    ///
    /// # Errors
    ///
    /// Returns `UnitError::IncompatibleConversion` if the quantity is not an
    /// angle.
    pub fn cos(&self) -> Result<f64, UnitError> {
        angle::to_radians(self).map(f64::cos)
    }

    /// The tangent of a plane angle.
    ///
    /// # Errors
    ///
    /// Returns `UnitError::IncompatibleConversion` if the quantity is not an
    /// angle.
    pub fn tan(&self) -> Result<f64, UnitError> {
        angle::to_radians(self).map(f64::tan)
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::dimensionless(0.0)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unit.is_dimensionless() {
            write!(f, "{}", self.value)
        } else {
            write!(f, "{} {}", self.value, self.unit)
        }
    }
}

impl ops::Neg for Quantity {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            value: -self.value,
            unit: self.unit,
        }
    }
}

impl ops::Mul<f64> for Quantity {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self {
            value: self.value * rhs,
            unit: self.unit,
        }
    }
}

impl ops::Mul<Quantity> for f64 {
    type Output = Quantity;

    fn mul(self, rhs: Quantity) -> Self::Output {
        rhs * self
    }
}

impl ops::Div<f64> for Quantity {
    type Output = Self;

    fn div(self, rhs: f64) -> Self::Output {
        Self {
            value: self.value / rhs,
            unit: self.unit,
        }
    }
}

impl ops::Div<Quantity> for f64 {
    type Output = Quantity;

    /// Divides a scalar by a quantity, inverting its unit.
    fn div(self, rhs: Quantity) -> Self::Output {
        Quantity {
            value: self / rhs.value,
            unit: rhs.unit.invert(),
        }
    }
}

impl ops::Mul for Quantity {
    type Output = Value;

    /// Multiplies two quantities.
    ///
    /// A product without dimensions is returned as a scalar.
    fn mul(self, rhs: Self) -> Self::Output {
        Value::from_parts(self.value * rhs.value, self.unit.multiply(&rhs.unit))
    }
}

impl ops::Div for Quantity {
    type Output = Value;

    /// Divides two quantities.
    ///
    /// A quotient without dimensions is returned as a scalar.
    fn div(self, rhs: Self) -> Self::Output {
        Value::from_parts(self.value / rhs.value, self.unit.divide(&rhs.unit))
    }
}
