use std::fmt;

use num_rational::Ratio;

/// A decimal SI prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Prefix {
    /// 10^-18
    Atto,
    /// 10^-15
    Femto,
    /// 10^-12
    Pico,
    /// 10^-9
    Nano,
    /// 10^-6
    Micro,
    /// 10^-3
    Milli,
    /// 10^-2
    Centi,
    /// 10^-1
    Deci,
    /// 10^1
    Deca,
    /// 10^2
    Hecto,
    /// 10^3
    Kilo,
    /// 10^6
    Mega,
    /// 10^9
    Giga,
    /// 10^12
    Tera,
    /// 10^15
    Peta,
    /// 10^18
    Exa,
}

impl Prefix {
    /// Every prefix, from smallest to largest.
    pub const ALL: [Self; 16] = [
        Self::Atto,
        Self::Femto,
        Self::Pico,
        Self::Nano,
        Self::Micro,
        Self::Milli,
        Self::Centi,
        Self::Deci,
        Self::Deca,
        Self::Hecto,
        Self::Kilo,
        Self::Mega,
        Self::Giga,
        Self::Tera,
        Self::Peta,
        Self::Exa,
    ];

    /// The symbol used in front of unit symbols, e.g. `k`.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Atto => "a",
            Self::Femto => "f",
            Self::Pico => "p",
            Self::Nano => "n",
            Self::Micro => "μ",
            Self::Milli => "m",
            Self::Centi => "c",
            Self::Deci => "d",
            Self::Deca => "da",
            Self::Hecto => "h",
            Self::Kilo => "k",
            Self::Mega => "M",
            Self::Giga => "G",
            Self::Tera => "T",
            Self::Peta => "P",
            Self::Exa => "E",
        }
    }

    /// The name used in front of unit names, e.g. `kilo`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Atto => "atto",
            Self::Femto => "femto",
            Self::Pico => "pico",
            Self::Nano => "nano",
            Self::Micro => "micro",
            Self::Milli => "milli",
            Self::Centi => "centi",
            Self::Deci => "deci",
            Self::Deca => "deca",
            Self::Hecto => "hecto",
            Self::Kilo => "kilo",
            Self::Mega => "mega",
            Self::Giga => "giga",
            Self::Tera => "tera",
            Self::Peta => "peta",
            Self::Exa => "exa",
        }
    }

    /// The power of ten this prefix stands for.
    #[must_use]
    pub const fn power_of_ten(self) -> i32 {
        match self {
            Self::Atto => -18,
            Self::Femto => -15,
            Self::Pico => -12,
            Self::Nano => -9,
            Self::Micro => -6,
            Self::Milli => -3,
            Self::Centi => -2,
            Self::Deci => -1,
            Self::Deca => 1,
            Self::Hecto => 2,
            Self::Kilo => 3,
            Self::Mega => 6,
            Self::Giga => 9,
            Self::Tera => 12,
            Self::Peta => 15,
            Self::Exa => 18,
        }
    }

    /// The exact scale ratio of the prefix.
    #[must_use]
    pub const fn ratio(self) -> Ratio<i64> {
        let power = self.power_of_ten();
        let magnitude = 10_i64.pow(power.unsigned_abs());

        if power < 0 {
            Ratio::new_raw(1, magnitude)
        } else {
            Ratio::new_raw(magnitude, 1)
        }
    }

    /// Another accepted spelling of the prefix symbol.
    ///
    /// Micro is also written with the micro sign `µ` (U+00B5), which looks
    /// the same as `μ` (U+03BC).
    #[must_use]
    pub const fn alternate_symbol(self) -> Option<&'static str> {
        match self {
            Self::Micro => Some("\u{b5}"),
            Self::Atto
            | Self::Femto
            | Self::Pico
            | Self::Nano
            | Self::Milli
            | Self::Centi
            | Self::Deci
            | Self::Deca
            | Self::Hecto
            | Self::Kilo
            | Self::Mega
            | Self::Giga
            | Self::Tera
            | Self::Peta
            | Self::Exa => None,
        }
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratios_are_exact() {
        assert_eq!(Prefix::Kilo.ratio(), Ratio::from_integer(1000));
        assert_eq!(Prefix::Milli.ratio(), Ratio::new(1, 1000));
        assert_eq!(Prefix::Deca.ratio(), Ratio::from_integer(10));
        assert_eq!(Prefix::Exa.ratio(), Ratio::from_integer(1_000_000_000_000_000_000));
        assert_eq!(Prefix::Atto.ratio(), Ratio::new(1, 1_000_000_000_000_000_000));
    }

    #[test]
    fn catalog_is_ordered_by_size() {
        let powers: Vec<_> = Prefix::ALL.iter().map(|p| p.power_of_ten()).collect();

        assert!(powers.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn symbols_are_unique() {
        let mut symbols: Vec<_> = Prefix::ALL.iter().map(|prefix| prefix.symbol()).collect();
        symbols.sort_unstable();
        symbols.dedup();

        assert_eq!(symbols.len(), Prefix::ALL.len());
    }

    #[test]
    fn only_micro_has_an_alternate_symbol() {
        assert_eq!(Prefix::Micro.alternate_symbol(), Some("\u{b5}"));
        assert_ne!(Prefix::Micro.alternate_symbol(), Some(Prefix::Micro.symbol()));

        for prefix in Prefix::ALL.into_iter().filter(|prefix| *prefix != Prefix::Micro) {
            assert_eq!(prefix.alternate_symbol(), None);
        }
    }
}
