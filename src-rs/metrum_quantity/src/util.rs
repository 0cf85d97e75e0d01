//! Floating point comparison helpers

const TOLERANCE: f64 = 1e-10;

/// Checks if two floating point numbers are close to each other.
///
/// Two numbers are close if their difference is within `1e-10` either
/// absolutely or relative to the smaller of the two magnitudes. Infinities
/// are only close to themselves and `NaN` is never close to anything.
#[must_use]
pub const fn is_close(a: f64, b: f64) -> bool {
    is_close_within(a, b, TOLERANCE)
}

/// Checks if two floating point numbers are within `tolerance` of each other,
/// absolutely or relative to the smaller magnitude.
#[must_use]
pub const fn is_close_within(a: f64, b: f64, tolerance: f64) -> bool {
    #[expect(
        clippy::float_cmp,
        reason = "this is a part of implementing better floating point comparison"
    )]
    if a == b {
        return true;
    }

    if a.is_infinite() || b.is_infinite() || a.is_nan() || b.is_nan() {
        return false;
    }

    let difference = (a - b).abs();
    let relative_tolerance = tolerance * f64::min(a.abs(), b.abs());

    difference <= relative_tolerance || difference <= tolerance
}

#[cfg(test)]
pub mod test {
    macro_rules! assert_is_close {
        ($expected:expr, $actual:expr) => {
            assert!(
                $crate::util::is_close($expected, $actual),
                "expected: {}, actual: {}",
                $expected,
                $actual
            );
        };
    }

    pub(crate) use assert_is_close;
}
