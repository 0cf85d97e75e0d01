use libfuzzer_sys::arbitrary::{self, Result, Unstructured};
use metrum_unit::{BaseDimension, CompositeUnit, Prefix, SubConversion};

/// A length unit picked from a fixed menu of sub-units and prefixes.
#[derive(Debug, Clone, PartialEq)]
pub struct LengthUnit(pub CompositeUnit);

impl<'a> arbitrary::Arbitrary<'a> for LengthUnit {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        let dimension = match u.int_in_range(0..=3)? {
            0 => BaseDimension::base("m"),
            1 => BaseDimension::sub_unit("m", "mi", SubConversion::linear(1609.344)),
            2 => BaseDimension::sub_unit("m", "ft", SubConversion::linear(0.3048)),
            _ => {
                let prefix = *u.choose(&Prefix::ALL)?;
                BaseDimension::base("m").scaled(prefix.ratio(), prefix.symbol())
            }
        };

        let exponent = u.int_in_range(-3..=3)?;
        Ok(Self(CompositeUnit::from_dimension(
            dimension.with_exponent(exponent),
        )))
    }
}

/// An arbitrary composite unit built from a small alphabet of dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct SmallUnit(pub CompositeUnit);

impl<'a> arbitrary::Arbitrary<'a> for SmallUnit {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        let count = u.int_in_range(0..=6)?;
        let mut dimensions = Vec::with_capacity(count);

        for _ in 0..count {
            let symbol = *u.choose(&["m", "s", "g", "K", "A"])?;
            let dimension = if u.arbitrary()? {
                BaseDimension::base(symbol).scaled(Prefix::Kilo.ratio(), Prefix::Kilo.symbol())
            } else {
                BaseDimension::base(symbol)
            };

            dimensions.push(dimension.with_exponent(u.int_in_range(-4..=4)?));
        }

        Ok(Self(CompositeUnit::from_dimensions(dimensions)))
    }
}

/// A finite `f64` of moderate magnitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModerateF64(pub f64);

impl<'a> arbitrary::Arbitrary<'a> for ModerateF64 {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        let value = u.arbitrary::<f64>()?;

        if !value.is_finite() || value.abs() > 1e12 {
            return Err(arbitrary::Error::IncorrectFormat);
        }

        Ok(Self(value))
    }
}
