use std::{fmt, sync::Arc};

use num_rational::Ratio;

use crate::SubConversion;

/// One factor of a composite unit.
///
/// A base dimension is identified by its `symbol` (e.g. `m` for length). The
/// remaining fields describe which unit of that dimension is meant and how it
/// relates to the base unit:
///
/// - `scale` is the decimal prefix ratio (`1000/1` for `km`)
/// - `prefix` is the label of that ratio (`k`)
/// - `sub_symbol` names the sub-unit (`mi` for miles, or `m` itself)
/// - `conversion` maps values of the sub-unit onto the base unit
///
/// Entries are only merged by the unit algebra when everything except the
/// exponent matches, so `m * mi` stays a two-entry unit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BaseDimension {
    symbol: Arc<str>,
    exponent: i32,
    scale: Ratio<i64>,
    prefix: Arc<str>,
    sub_symbol: Arc<str>,
    conversion: SubConversion,
}

impl BaseDimension {
    /// Creates a plain base unit, such as `m` or `s`.
    #[must_use]
    pub fn base(symbol: &str) -> Self {
        let symbol: Arc<str> = Arc::from(symbol);

        Self {
            sub_symbol: Arc::clone(&symbol),
            symbol,
            exponent: 1,
            scale: Ratio::from_integer(1),
            prefix: Arc::from(""),
            conversion: SubConversion::IDENTITY,
        }
    }

    /// Creates a sub-unit of the base dimension `symbol`, such as `mi` for `m`.
    #[must_use]
    pub fn sub_unit(symbol: &str, sub_symbol: &str, conversion: SubConversion) -> Self {
        Self {
            symbol: Arc::from(symbol),
            exponent: 1,
            scale: Ratio::from_integer(1),
            prefix: Arc::from(""),
            sub_symbol: Arc::from(sub_symbol),
            conversion,
        }
    }

    /// The symbol of the physical dimension, e.g. `m`.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// The exponent this dimension is raised to.
    #[must_use]
    pub const fn exponent(&self) -> i32 {
        self.exponent
    }

    /// The decimal scale ratio applied to the sub-unit.
    #[must_use]
    pub const fn scale(&self) -> Ratio<i64> {
        self.scale
    }

    /// The prefix label matching `scale`, e.g. `k`.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The symbol of the sub-unit, e.g. `mi`.
    #[must_use]
    pub fn sub_symbol(&self) -> &str {
        &self.sub_symbol
    }

    /// How the sub-unit converts to the base unit.
    #[must_use]
    pub const fn conversion(&self) -> SubConversion {
        self.conversion
    }

    /// Whether the sub-unit relationship has an affine offset.
    #[must_use]
    pub const fn is_affine(&self) -> bool {
        self.conversion.is_affine()
    }

    /// Whether no scale has been applied.
    #[must_use]
    pub fn is_unscaled(&self) -> bool {
        self.scale == Ratio::from_integer(1)
    }

    /// The size of one unit of this entry in base units, ignoring the exponent.
    ///
    /// For affine entries this is only the multiplicative part.
    #[must_use]
    pub fn factor(&self) -> f64 {
        ratio_to_f64(self.scale) * self.conversion.factor()
    }

    /// Returns the same dimension raised to a different exponent.
    #[must_use]
    pub fn with_exponent(self, exponent: i32) -> Self {
        Self { exponent, ..self }
    }

    /// Returns the same dimension with its scale multiplied by `ratio` and
    /// its prefix replaced.
    #[must_use]
    pub fn scaled(self, ratio: Ratio<i64>, prefix: &str) -> Self {
        Self {
            scale: self.scale * ratio,
            prefix: Arc::from(prefix),
            ..self
        }
    }

    /// Whether the two entries describe the same unit and differ at most in
    /// their exponent.
    #[must_use]
    pub fn is_mergeable_with(&self, other: &Self) -> bool {
        self.symbol == other.symbol
            && self.scale == other.scale
            && self.prefix == other.prefix
            && self.sub_symbol == other.sub_symbol
            && self.conversion == other.conversion
    }
}

impl fmt::Display for BaseDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.prefix, self.sub_symbol)?;
        if self.exponent != 1 {
            write!(f, "^{}", self.exponent)?;
        }

        Ok(())
    }
}

/// Converts a scale ratio to a float.
#[must_use]
#[expect(
    clippy::cast_precision_loss,
    reason = "decimal prefixes are exactly representable well beyond the range they are used in"
)]
pub fn ratio_to_f64(ratio: Ratio<i64>) -> f64 {
    *ratio.numer() as f64 / *ratio.denom() as f64
}
