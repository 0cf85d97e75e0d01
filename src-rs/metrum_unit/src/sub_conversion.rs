use std::hash::{Hash, Hasher};

/// How a sub-unit relates to the base unit of its dimension.
///
/// Linear and affine relationships are kept apart: an affine shift does not
/// survive being raised to a power, so it can only be applied to a unit that
/// stands on its own at exponent 1.
///
/// Floating point fields are compared and hashed by their bit patterns so that
/// a conversion can take part in unit interning.
#[derive(Debug, Clone, Copy)]
pub enum SubConversion {
    /// `base = sub * factor`
    Linear {
        /// Size of one sub-unit in base units
        factor: f64,
    },
    /// `base = sub * factor + offset`
    Affine {
        /// Size of one sub-unit step in base units
        factor: f64,
        /// Base value of the sub-unit's zero point
        offset: f64,
    },
}

impl SubConversion {
    /// The conversion of a base unit to itself.
    pub const IDENTITY: Self = Self::Linear { factor: 1.0 };

    /// Creates a linear conversion.
    #[must_use]
    pub const fn linear(factor: f64) -> Self {
        Self::Linear { factor }
    }

    /// Creates an affine conversion.
    #[must_use]
    pub const fn affine(factor: f64, offset: f64) -> Self {
        Self::Affine { factor, offset }
    }

    /// Whether the conversion includes an offset.
    #[must_use]
    pub const fn is_affine(&self) -> bool {
        matches!(self, Self::Affine { .. })
    }

    /// Whether this is the identity conversion.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// The multiplicative part of the conversion.
    #[must_use]
    pub const fn factor(&self) -> f64 {
        match self {
            Self::Linear { factor } | Self::Affine { factor, .. } => *factor,
        }
    }

    /// Converts a value expressed in the sub-unit into the base unit.
    #[must_use]
    pub fn to_base(&self, value: f64) -> f64 {
        match self {
            Self::Linear { factor } => value * factor,
            Self::Affine { factor, offset } => value.mul_add(*factor, *offset),
        }
    }

    /// Converts a value expressed in the base unit into the sub-unit.
    #[must_use]
    pub fn from_base(&self, value: f64) -> f64 {
        match self {
            Self::Linear { factor } => value / factor,
            Self::Affine { factor, offset } => (value - offset) / factor,
        }
    }
}

impl Default for SubConversion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl PartialEq for SubConversion {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Linear { factor: lhs }, Self::Linear { factor: rhs }) => {
                lhs.to_bits() == rhs.to_bits()
            }
            (
                Self::Affine {
                    factor: lhs_factor,
                    offset: lhs_offset,
                },
                Self::Affine {
                    factor: rhs_factor,
                    offset: rhs_offset,
                },
            ) => {
                lhs_factor.to_bits() == rhs_factor.to_bits()
                    && lhs_offset.to_bits() == rhs_offset.to_bits()
            }
            (Self::Linear { .. }, Self::Affine { .. })
            | (Self::Affine { .. }, Self::Linear { .. }) => false,
        }
    }
}

impl Eq for SubConversion {}

impl Hash for SubConversion {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Linear { factor } => {
                0_u8.hash(state);
                factor.to_bits().hash(state);
            }
            Self::Affine { factor, offset } => {
                1_u8.hash(state);
                factor.to_bits().hash(state);
                offset.to_bits().hash(state);
            }
        }
    }
}
