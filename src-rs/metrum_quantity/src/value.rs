use std::fmt;

use metrum_unit::CompositeUnit;

use crate::Quantity;

/// The result of multiplying or dividing two quantities.
///
/// When the units cancel completely the dimensions disappear and the result
/// is a plain scalar.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A number without dimensions
    Scalar(f64),
    /// A number with dimensions
    Quantity(Quantity),
}

impl Value {
    /// Creates a value, collapsing a dimensionless unit into a scalar.
    #[must_use]
    pub fn from_parts(value: f64, unit: CompositeUnit) -> Self {
        if unit.is_dimensionless() {
            Self::Scalar(value)
        } else {
            Self::Quantity(Quantity::new(value, unit))
        }
    }

    /// The numeric part of the value.
    #[must_use]
    pub const fn value(&self) -> f64 {
        match self {
            Self::Scalar(value) => *value,
            Self::Quantity(quantity) => quantity.value(),
        }
    }

    /// Returns the scalar if the value has no dimensions.
    #[must_use]
    pub const fn as_scalar(&self) -> Option<f64> {
        match self {
            Self::Scalar(value) => Some(*value),
            Self::Quantity(_) => None,
        }
    }

    /// Returns the quantity if the value has dimensions.
    #[must_use]
    pub const fn as_quantity(&self) -> Option<&Quantity> {
        match self {
            Self::Scalar(_) => None,
            Self::Quantity(quantity) => Some(quantity),
        }
    }

    /// Converts the value into a quantity, giving scalars the dimensionless
    /// unit.
    #[must_use]
    pub fn into_quantity(self) -> Quantity {
        match self {
            Self::Scalar(value) => Quantity::dimensionless(value),
            Self::Quantity(quantity) => quantity,
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Scalar(value)
    }
}

impl From<Quantity> for Value {
    fn from(quantity: Quantity) -> Self {
        let (value, unit) = quantity.into_parts();
        Self::from_parts(value, unit)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(value) => write!(f, "{value}"),
            Self::Quantity(quantity) => write!(f, "{quantity}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use metrum_unit::BaseDimension;

    use super::*;

    #[test]
    fn dimensionless_unit_collapses() {
        let value = Value::from_parts(4.0, CompositeUnit::dimensionless());

        assert_eq!(value, Value::Scalar(4.0));
        assert_eq!(value.as_quantity(), None);
    }

    #[test]
    fn dimensioned_unit_is_kept() {
        let meter = CompositeUnit::from_dimension(BaseDimension::base("m"));

        let value = Value::from_parts(4.0, meter.clone());

        assert_eq!(value.as_scalar(), None);
        assert_eq!(value.to_string(), "4 m");
        assert_eq!(value.into_quantity(), Quantity::new(4.0, meter));
    }

    #[test]
    fn dimensionless_quantity_becomes_scalar() {
        assert_eq!(Value::from(Quantity::dimensionless(2.5)), Value::Scalar(2.5));
    }
}
