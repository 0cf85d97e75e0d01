//! Plane angles
//!
//! The radian is a base unit of its own, so angles can be told apart from
//! plain numbers. Other angle units are sub-units of `rad`.

use metrum_unit::{BaseDimension, CompositeUnit, UnitError};

use crate::{Quantity, util::is_close};

/// The symbol of the plane-angle base unit.
pub const RADIAN: &str = "rad";

/// The radian unit.
#[must_use]
pub fn radian() -> CompositeUnit {
    CompositeUnit::from_dimension(BaseDimension::base(RADIAN))
}

/// Converts an angle into a number of radians.
///
/// # Errors
///
/// Returns `UnitError::IncompatibleConversion` if the quantity is not a plane
/// angle.
pub fn to_radians(angle: &Quantity) -> Result<f64, UnitError> {
    angle
        .convert_to(&radian())
        .map(|radians| radians.value())
}

/// The angle whose cosine is `dot / magnitudes`.
///
/// This is the angle between two vectors given their dot product and the
/// product of their magnitudes. The cosine is clamped into `[-1, 1]` to absorb
/// rounding, and a zero magnitude product yields the zero angle.
#[must_use]
pub fn angle_from_cosine(dot: f64, magnitudes: f64) -> Quantity {
    if is_close(magnitudes, 0.0) {
        return Quantity::zero_angle();
    }

    let cosine = (dot / magnitudes).clamp(-1.0, 1.0);
    Quantity::new(cosine.acos(), radian())
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    use metrum_unit::{ConversionRejection, SubConversion};

    use super::*;
    use crate::util::test::assert_is_close;

    fn degree() -> CompositeUnit {
        CompositeUnit::from_dimension(BaseDimension::sub_unit(
            RADIAN,
            "deg",
            SubConversion::linear(PI / 180.0),
        ))
    }

    #[test]
    fn degrees_to_radians() {
        let angle = Quantity::new(45.0, degree());

        let radians = angle.convert_to(&radian()).expect("degrees convert to radians");

        assert_is_close!(FRAC_PI_4, radians.value());
        assert_eq!(radians.unit().to_string(), "rad");
    }

    #[test]
    fn trigonometry_of_degrees() {
        let angle = Quantity::new(45.0, degree());

        assert_is_close!(FRAC_PI_4.sin(), angle.sin().expect("degrees are angles"));
        assert_is_close!(FRAC_PI_4.cos(), angle.cos().expect("degrees are angles"));
        assert_is_close!(1.0, angle.tan().expect("degrees are angles"));
    }

    #[test]
    fn trigonometry_of_non_angle() {
        let length = Quantity::new(1.0, CompositeUnit::from_dimension(BaseDimension::base("m")));

        let error = length.sin().expect_err("lengths are not angles");

        assert!(matches!(
            error,
            UnitError::IncompatibleConversion {
                reason: ConversionRejection::SymbolMismatch,
                ..
            }
        ));
    }

    #[test]
    fn plain_numbers_are_not_angles() {
        assert!(Quantity::dimensionless(0.5).cos().is_err());
    }

    #[test]
    fn zero_angle() {
        let zero = Quantity::zero_angle();

        assert_is_close!(0.0, zero.value());
        assert_eq!(zero.unit(), &radian());
    }

    #[test]
    fn angle_between_vectors() {
        assert_is_close!(FRAC_PI_2, angle_from_cosine(0.0, 2.0).value());
        assert_is_close!(PI, angle_from_cosine(-4.0, 4.0).value());
    }

    #[test]
    fn cosine_is_clamped() {
        assert_is_close!(0.0, angle_from_cosine(1.0 + 1e-7, 1.0).value());
        assert_is_close!(PI, angle_from_cosine(-1.0 - 1e-7, 1.0).value());
    }

    #[test]
    fn zero_magnitude_yields_zero_angle() {
        assert_eq!(angle_from_cosine(0.0, 0.0), Quantity::zero_angle());
    }
}
