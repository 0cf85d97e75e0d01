use std::{fmt, ops, sync::Arc};

use indexmap::IndexMap;
use num_rational::Ratio;

use crate::{BaseDimension, Conversion, Prefix, ScaleRejection, UnitError, convert, intern};

/// A product of base dimensions raised to integer exponents.
///
/// The entries are kept canonical: no two of them are mergeable and none has a
/// zero exponent. The empty unit is dimensionless.
///
/// Entries are stored in the order the algebra produced them. That order is
/// visible when the unit is displayed, but it does not take part in equality,
/// so `m*s` and `s*m` are equal.
///
/// Every distinct entry sequence is interned, so cloning a unit is a reference
/// count increment.
#[derive(Debug, Clone)]
pub struct CompositeUnit(Arc<[BaseDimension]>);

impl CompositeUnit {
    /// The unit with no dimensions.
    #[must_use]
    pub fn dimensionless() -> Self {
        Self(intern::intern(&[]))
    }

    /// Creates a unit consisting of a single dimension.
    ///
    /// A dimension with a zero exponent yields the dimensionless unit.
    #[must_use]
    pub fn from_dimension(dimension: BaseDimension) -> Self {
        if dimension.exponent() == 0 {
            return Self::dimensionless();
        }

        Self(intern::intern(&[dimension]))
    }

    /// Creates a unit by multiplying the given dimensions together in order.
    ///
    /// # Panics
    ///
    /// Panics if the summed exponent of an entry leaves the range of `i32`.
    #[must_use]
    pub fn from_dimensions(dimensions: impl IntoIterator<Item = BaseDimension>) -> Self {
        let mut entries = Vec::new();
        let folded = dimensions
            .into_iter()
            .try_for_each(|dimension| fold_into(&mut entries, dimension));

        in_range(folded.map(|()| Self(intern::intern(&entries))))
    }

    /// The canonical entries of the unit.
    #[must_use]
    pub fn entries(&self) -> &[BaseDimension] {
        &self.0
    }

    /// The number of entries in the unit.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.0.len()
    }

    /// Whether the unit has no dimensions.
    #[must_use]
    pub fn is_dimensionless(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the entry if the unit has exactly one.
    #[must_use]
    pub fn single(&self) -> Option<&BaseDimension> {
        match &*self.0 {
            [dimension] => Some(dimension),
            _ => None,
        }
    }

    /// Whether any entry carries an affine conversion.
    #[must_use]
    pub fn has_affine(&self) -> bool {
        self.0.iter().any(BaseDimension::is_affine)
    }

    /// Multiplies two units.
    ///
    /// Each entry of `other` is folded into `self` in turn. A mergeable entry
    /// keeps its position with the summed exponent and disappears when the sum
    /// is zero. Entries without a match are prepended.
    ///
    /// # Errors
    ///
    /// Returns `UnitError::ExponentOverflow` if a summed exponent leaves the
    /// range of `i32`.
    pub fn checked_multiply(&self, other: &Self) -> Result<Self, UnitError> {
        if other.is_dimensionless() {
            return Ok(self.clone());
        }

        let mut entries = self.0.to_vec();
        for dimension in other.entries() {
            fold_into(&mut entries, dimension.clone())?;
        }

        Ok(Self(intern::intern(&entries)))
    }

    /// Negates the exponent of every entry.
    ///
    /// # Errors
    ///
    /// Returns `UnitError::ExponentOverflow` if an entry is raised to
    /// `i32::MIN`.
    pub fn checked_invert(&self) -> Result<Self, UnitError> {
        let entries = self
            .0
            .iter()
            .map(|dimension| {
                let exponent = dimension
                    .exponent()
                    .checked_neg()
                    .ok_or_else(|| UnitError::exponent_overflow(dimension))?;
                Ok(dimension.clone().with_exponent(exponent))
            })
            .collect::<Result<Vec<_>, UnitError>>()?;

        Ok(Self(intern::intern(&entries)))
    }

    /// Divides `self` by `other`.
    ///
    /// # Errors
    ///
    /// See [`CompositeUnit::checked_multiply`] and
    /// [`CompositeUnit::checked_invert`].
    pub fn checked_divide(&self, other: &Self) -> Result<Self, UnitError> {
        self.checked_multiply(&other.checked_invert()?)
    }

    /// Raises the unit to an integer power.
    ///
    /// A power of zero yields the dimensionless unit.
    ///
    /// # Errors
    ///
    /// Returns `UnitError::ExponentOverflow` if a scaled exponent leaves the
    /// range of `i32`.
    pub fn checked_pow(&self, exponent: i32) -> Result<Self, UnitError> {
        if exponent == 0 {
            return Ok(Self::dimensionless());
        }

        let entries = self
            .0
            .iter()
            .map(|dimension| {
                let exponent = dimension
                    .exponent()
                    .checked_mul(exponent)
                    .ok_or_else(|| UnitError::exponent_overflow(dimension))?;
                Ok(dimension.clone().with_exponent(exponent))
            })
            .collect::<Result<Vec<_>, UnitError>>()?;

        Ok(Self(intern::intern(&entries)))
    }

    /// Multiplies two units. See [`CompositeUnit::checked_multiply`].
    ///
    /// # Panics
    ///
    /// Panics if a summed exponent leaves the range of `i32`.
    #[must_use]
    pub fn multiply(&self, other: &Self) -> Self {
        in_range(self.checked_multiply(other))
    }

    /// Negates the exponent of every entry.
    ///
    /// # Panics
    ///
    /// Panics if an entry is raised to `i32::MIN`.
    #[must_use]
    pub fn invert(&self) -> Self {
        in_range(self.checked_invert())
    }

    /// Divides `self` by `other`.
    ///
    /// # Panics
    ///
    /// Panics if an exponent leaves the range of `i32`.
    #[must_use]
    pub fn divide(&self, other: &Self) -> Self {
        in_range(self.checked_divide(other))
    }

    /// Raises the unit to an integer power.
    ///
    /// # Panics
    ///
    /// Panics if a scaled exponent leaves the range of `i32`.
    #[must_use]
    pub fn pow(&self, exponent: i32) -> Self {
        in_range(self.checked_pow(exponent))
    }

    /// Sums the exponents of every entry by base symbol.
    ///
    /// Symbols whose exponents cancel are left out. Two units can be
    /// converted into one another only if their signatures match.
    #[must_use]
    pub fn signature(&self) -> IndexMap<&str, i64> {
        let mut signature = IndexMap::new();
        for dimension in self.entries() {
            *signature.entry(dimension.symbol()).or_insert(0) += i64::from(dimension.exponent());
        }

        signature.retain(|_, exponent| *exponent != 0);
        signature
    }

    /// Applies a scale to a unit made of a single unscaled entry at
    /// exponent 1.
    ///
    /// # Errors
    ///
    /// Returns `UnitError::InvalidScaleApplication` if the unit does not have
    /// exactly one entry, if that entry is raised to a power other than 1, or
    /// if it already carries a scale.
    pub fn with_scale(&self, ratio: Ratio<i64>, prefix: &str) -> Result<Self, UnitError> {
        let reject = |reason| UnitError::invalid_scale_application(self, prefix, reason);

        let Some(dimension) = self.single() else {
            return Err(reject(ScaleRejection::NotSingleDimension {
                count: self.entry_count(),
            }));
        };

        if dimension.exponent() != 1 {
            return Err(reject(ScaleRejection::NonUnitExponent {
                exponent: dimension.exponent(),
            }));
        }

        if !dimension.is_unscaled() {
            return Err(reject(ScaleRejection::AlreadyScaled));
        }

        Ok(Self::from_dimension(dimension.clone().scaled(ratio, prefix)))
    }

    /// Applies a decimal prefix to the unit.
    ///
    /// # Errors
    ///
    /// See [`CompositeUnit::with_scale`].
    pub fn with_prefix(&self, prefix: Prefix) -> Result<Self, UnitError> {
        self.with_scale(prefix.ratio(), prefix.symbol())
    }

    /// Finds the conversion from this unit into `target`.
    ///
    /// # Errors
    ///
    /// Returns `UnitError::IncompatibleConversion` if the base symbols,
    /// exponents or signatures of the two units differ, or if an affine
    /// entry is raised to a power or combined with other entries.
    pub fn conversion_to(&self, target: &Self) -> Result<Conversion, UnitError> {
        convert::conversion(self, target)
    }

    /// Renders the unit for diagnostics, using `1` for the dimensionless unit.
    #[must_use]
    pub fn describe(&self) -> String {
        if self.is_dimensionless() {
            "1".to_string()
        } else {
            self.to_string()
        }
    }
}

fn fold_into(entries: &mut Vec<BaseDimension>, dimension: BaseDimension) -> Result<(), UnitError> {
    if dimension.exponent() == 0 {
        return Ok(());
    }

    let Some(index) = entries
        .iter()
        .position(|entry| entry.is_mergeable_with(&dimension))
    else {
        entries.insert(0, dimension);
        return Ok(());
    };

    let exponent = entries[index]
        .exponent()
        .checked_add(dimension.exponent())
        .ok_or_else(|| UnitError::exponent_overflow(&dimension))?;

    if exponent == 0 {
        entries.remove(index);
    } else {
        entries[index] = dimension.with_exponent(exponent);
    }

    Ok(())
}

fn in_range(result: Result<CompositeUnit, UnitError>) -> CompositeUnit {
    match result {
        Ok(unit) => unit,
        Err(error) => panic!("{error}"),
    }
}

impl Default for CompositeUnit {
    fn default() -> Self {
        Self::dimensionless()
    }
}

impl PartialEq for CompositeUnit {
    /// Compares the entries as a multiset.
    ///
    /// Canonical units never hold two mergeable entries, so each entry of one
    /// side can match at most one entry of the other.
    fn eq(&self, other: &Self) -> bool {
        if Arc::ptr_eq(&self.0, &other.0) {
            return true;
        }

        self.entry_count() == other.entry_count()
            && self.0.iter().all(|entry| other.0.contains(entry))
    }
}

impl Eq for CompositeUnit {}

impl fmt::Display for CompositeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries = self.0.iter();

        if let Some(first) = entries.next() {
            write!(f, "{first}")?;
        }

        for entry in entries {
            write!(f, "*{entry}")?;
        }

        Ok(())
    }
}

impl ops::Mul for &CompositeUnit {
    type Output = CompositeUnit;

    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(rhs)
    }
}

impl ops::Mul for CompositeUnit {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl ops::Div for &CompositeUnit {
    type Output = CompositeUnit;

    fn div(self, rhs: Self) -> Self::Output {
        self.divide(rhs)
    }
}

impl ops::Div for CompositeUnit {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        self.divide(&rhs)
    }
}

impl From<BaseDimension> for CompositeUnit {
    fn from(dimension: BaseDimension) -> Self {
        Self::from_dimension(dimension)
    }
}
