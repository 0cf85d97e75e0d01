use std::{fmt, sync::Arc};

use indexmap::IndexMap;
use metrum_quantity::Quantity;
use metrum_unit::{CompositeUnit, Prefix};

use crate::{RegistryError, std_units};

/// Builds a quantity from a value expressed in a registered unit.
pub type Constructor = Arc<dyn Fn(f64) -> Quantity + Send + Sync>;

/// How a suffix came to be registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Registered by name, either from the catalog or by the caller
    Explicit,
    /// Generated by applying a decimal prefix to an explicit unit
    Prefixed(Prefix),
}

/// A unit registered under a suffix.
#[derive(Clone)]
pub struct RegisteredUnit {
    name: String,
    unit: CompositeUnit,
    constructor: Constructor,
    origin: Origin,
}

impl RegisteredUnit {
    /// The long name of the unit, e.g. `kilometer`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The unit itself.
    #[must_use]
    pub const fn unit(&self) -> &CompositeUnit {
        &self.unit
    }

    /// How the suffix was registered.
    #[must_use]
    pub const fn origin(&self) -> Origin {
        self.origin
    }

    /// Builds a quantity of `value` in this unit.
    #[must_use]
    pub fn construct(&self, value: f64) -> Quantity {
        (self.constructor)(value)
    }
}

impl fmt::Debug for RegisteredUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisteredUnit")
            .field("name", &self.name)
            .field("unit", &self.unit)
            .field("origin", &self.origin)
            .finish_non_exhaustive()
    }
}

/// A constructor that truncates values to whole, non-negative counts.
fn whole_counts(unit: CompositeUnit) -> impl Fn(f64) -> Quantity + Send + Sync + 'static {
    move |value| Quantity::new(value.max(0.0).trunc(), unit.clone())
}

/// Options for building the standard registry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegistryOptions {
    /// Also accept `u` as the micro prefix (`um`, `us`, ...)
    pub ascii_micro: bool,
}

/// A map from unit suffixes (`m`, `km`, `mi`, ...) to units.
///
/// Suffixes keep their registration order. A suffix registered explicitly
/// always wins over one generated by prefixing another unit, whichever is
/// registered first.
#[derive(Debug, Clone, Default)]
pub struct UnitRegistry {
    units: IndexMap<String, RegisteredUnit>,
}

impl UnitRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the standard units and their prefixed
    /// forms.
    #[must_use]
    pub fn with_builtins(options: RegistryOptions) -> Self {
        let mut registry = Self::new();

        let catalog: Vec<_> = std_units::builtin_units_complete().collect();

        for builtin in &catalog {
            let mut suffixes = vec![builtin.symbol];
            suffixes.extend(builtin.aliases);
            if !suffixes.contains(&builtin.name) {
                suffixes.push(builtin.name);
            }

            for suffix in suffixes {
                let unit = builtin.unit.clone();
                if builtin.counted {
                    registry.register_with(suffix, builtin.name, unit.clone(), whole_counts(unit));
                } else {
                    registry.register(suffix, builtin.name, unit);
                }
            }
        }

        for builtin in catalog.iter().filter(|builtin| builtin.is_prefixable()) {
            registry.register_prefixes(builtin.symbol, builtin.name, options);
        }

        log::debug!("built unit registry with {} suffixes", registry.len());

        registry
    }

    /// Registers `unit` under `suffix`, replacing any unit already
    /// registered there.
    ///
    /// Returns the unit that was replaced, if any.
    pub fn register(
        &mut self,
        suffix: &str,
        name: &str,
        unit: CompositeUnit,
    ) -> Option<RegisteredUnit> {
        let constructor_unit = unit.clone();
        self.register_with(suffix, name, unit, move |value| {
            Quantity::new(value, constructor_unit.clone())
        })
    }

    /// Registers `unit` under `suffix` with a custom constructor, replacing
    /// any unit already registered there.
    ///
    /// Returns the unit that was replaced, if any.
    pub fn register_with(
        &mut self,
        suffix: &str,
        name: &str,
        unit: CompositeUnit,
        constructor: impl Fn(f64) -> Quantity + Send + Sync + 'static,
    ) -> Option<RegisteredUnit> {
        let registered = RegisteredUnit {
            name: name.to_string(),
            unit,
            constructor: Arc::new(constructor),
            origin: Origin::Explicit,
        };

        let replaced = self.units.insert(suffix.to_string(), registered);
        if let Some(replaced) = &replaced {
            log::debug!(
                "suffix `{suffix}` now names `{name}` instead of `{}`",
                replaced.name
            );
        }

        replaced
    }

    /// Registers every decimal prefix of the unit registered under `symbol`.
    ///
    /// Prefix symbols are applied to `symbol` (`km`) and prefix names to
    /// `name` (`kilometer`). Suffixes that are already taken are skipped.
    /// Units that cannot take a prefix are left alone.
    pub fn register_prefixes(&mut self, symbol: &str, name: &str, options: RegistryOptions) {
        let Some(base) = self.units.get(symbol) else {
            log::debug!("cannot prefix unknown unit `{symbol}`");
            return;
        };
        let base = base.unit.clone();

        for prefix in Prefix::ALL {
            let unit = match base.with_prefix(prefix) {
                Ok(unit) => unit,
                Err(error) => {
                    log::debug!("not prefixing `{symbol}`: {error}");
                    return;
                }
            };

            let long_name = format!("{}{name}", prefix.name());
            let mut suffixes = vec![format!("{}{symbol}", prefix.symbol()), long_name.clone()];
            if let Some(alternate) = prefix.alternate_symbol() {
                suffixes.push(format!("{alternate}{symbol}"));
            }
            if options.ascii_micro && prefix == Prefix::Micro {
                suffixes.push(format!("u{symbol}"));
            }

            for suffix in suffixes {
                self.register_generated(suffix, &long_name, &unit, prefix);
            }
        }
    }

    fn register_generated(
        &mut self,
        suffix: String,
        name: &str,
        unit: &CompositeUnit,
        prefix: Prefix,
    ) {
        if let Some(existing) = self.units.get(&suffix) {
            log::debug!(
                "skipping generated suffix `{suffix}` for `{name}`: already names `{}`",
                existing.name
            );
            return;
        }

        let constructor_unit = unit.clone();
        self.units.insert(
            suffix,
            RegisteredUnit {
                name: name.to_string(),
                unit: unit.clone(),
                constructor: Arc::new(move |value| Quantity::new(value, constructor_unit.clone())),
                origin: Origin::Prefixed(prefix),
            },
        );
    }

    /// Looks up the unit registered under `suffix`.
    #[must_use]
    pub fn get(&self, suffix: &str) -> Option<&RegisteredUnit> {
        self.units.get(suffix)
    }

    /// Whether a unit is registered under `suffix`.
    #[must_use]
    pub fn contains(&self, suffix: &str) -> bool {
        self.units.contains_key(suffix)
    }

    /// The unit registered under `suffix`.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::UnknownUnit` if nothing is registered under
    /// `suffix`.
    pub fn unit(&self, suffix: &str) -> Result<&CompositeUnit, RegistryError> {
        self.get(suffix)
            .map(RegisteredUnit::unit)
            .ok_or_else(|| RegistryError::unknown_unit(suffix))
    }

    /// Builds a quantity of `value` in the unit registered under `suffix`.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::UnknownUnit` if nothing is registered under
    /// `suffix`.
    pub fn construct(&self, suffix: &str, value: f64) -> Result<Quantity, RegistryError> {
        self.get(suffix)
            .map(|registered| registered.construct(value))
            .ok_or_else(|| RegistryError::unknown_unit(suffix))
    }

    /// Iterates over the suffixes and their units in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RegisteredUnit)> {
        self.units
            .iter()
            .map(|(suffix, registered)| (suffix.as_str(), registered))
    }

    /// The number of registered suffixes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use metrum_unit::BaseDimension;

    use super::*;

    fn builtins() -> UnitRegistry {
        UnitRegistry::with_builtins(RegistryOptions::default())
    }

    mod lookup_tests {
        use super::*;

        #[test]
        fn base_units_are_registered() {
            let registry = builtins();

            for suffix in ["m", "s", "g", "A", "K", "mol", "cd", "rad", "px", "sr"] {
                assert!(registry.contains(suffix), "`{suffix}` should be registered");
            }
        }

        #[test]
        fn long_names_are_suffixes() {
            let registry = builtins();

            assert_eq!(registry.unit("meter"), registry.unit("m"));
            assert_eq!(registry.unit("kilometer"), registry.unit("km"));
            assert_eq!(registry.unit("newton"), registry.unit("N"));
        }

        #[test]
        fn construct_builds_quantity() {
            let registry = builtins();

            let distance = registry.construct("mi", 3.0).expect("miles are registered");

            assert_eq!(distance.to_string(), "3 mi");
        }

        #[test]
        fn unknown_suffix() {
            let registry = builtins();

            let error = registry.unit("furlong").expect_err("furlongs are not registered");

            assert_eq!(
                error,
                RegistryError::UnknownUnit {
                    suffix: "furlong".to_string()
                }
            );
            assert_eq!(error.to_string(), "unknown unit `furlong`");
        }

        #[test]
        fn aliases_share_the_unit() {
            let registry = builtins();

            assert_eq!(registry.unit("ohm"), registry.unit("Ω"));
            assert_eq!(registry.unit("deg"), registry.unit("°"));
        }

        #[test]
        fn pixels_are_whole() {
            let registry = builtins();

            let pixel = registry.unit("px").expect("pixels are registered").clone();

            let pixels = registry.construct("px", 12.7).expect("pixels are registered");
            assert_eq!(pixels, Quantity::new(12.0, pixel.clone()));

            let negative = registry.construct("pixel", -3.0).expect("pixels are registered");
            assert_eq!(negative, Quantity::new(0.0, pixel));
        }
    }

    mod prefix_tests {
        use super::*;

        #[test]
        fn prefixes_are_generated() {
            let registry = builtins();

            let kilometer = registry.get("km").expect("km is generated");
            assert_eq!(kilometer.name(), "kilometer");
            assert_eq!(kilometer.origin(), Origin::Prefixed(Prefix::Kilo));
            assert_eq!(kilometer.unit().to_string(), "km");

            assert!(registry.contains("kg"));
            assert!(registry.contains("ms"));
            assert!(registry.contains("μm"));
            assert!(registry.contains("dam"));
            assert!(registry.contains("Ecd"));
        }

        #[test]
        fn every_prefixable_unit_gets_every_prefix() {
            let registry = builtins();

            let catalog = std_units::builtin_units_complete();

            for builtin in catalog.filter(std_units::StdBuiltinUnit::is_prefixable) {
                for prefix in Prefix::ALL {
                    let suffix = format!("{}{}", prefix.symbol(), builtin.symbol);
                    assert!(registry.contains(&suffix), "`{suffix}` should be generated");
                }
            }
        }

        #[test]
        fn linear_sub_units_are_prefixed() {
            let registry = builtins();

            let kilomile = registry.get("kmi").expect("kmi is generated");
            assert_eq!(kilomile.name(), "kilomile");
            assert_eq!(kilomile.unit().to_string(), "kmi");

            let meter = registry.unit("m").expect("meters are registered");
            let thousand_miles = registry
                .construct("mi", 1000.0)
                .expect("miles are registered")
                .convert_to(meter)
                .expect("miles convert to meters");
            let one_kilomile = registry
                .construct("kmi", 1.0)
                .expect("kmi is generated")
                .convert_to(meter)
                .expect("kilomiles convert to meters");
            assert!((thousand_miles.value() - one_kilomile.value()).abs() < 1e-6);

            let generated = [
                "msr", "kpx", "mft", "klb", "moz", "kmin", "khr", "kday", "mdeg", "cgrad",
            ];
            for suffix in generated {
                assert!(registry.contains(suffix), "`{suffix}` should be generated");
            }
        }

        #[test]
        fn compound_and_affine_units_are_not_prefixed() {
            let registry = builtins();

            assert!(!registry.contains("kN"));
            assert!(!registry.contains("kdegC"));
            assert!(!registry.contains("mdegF"));
        }

        #[test]
        fn micro_sign_is_an_alias() {
            let registry = builtins();

            assert_eq!(registry.unit("\u{b5}m"), registry.unit("\u{3bc}m"));
            assert_eq!(registry.unit("\u{b5}s"), registry.unit("μs"));
            assert_eq!(
                registry.get("\u{b5}m").map(RegisteredUnit::origin),
                Some(Origin::Prefixed(Prefix::Micro))
            );
        }

        #[test]
        fn ascii_micro_is_optional() {
            assert!(!builtins().contains("um"));

            let registry = UnitRegistry::with_builtins(RegistryOptions { ascii_micro: true });
            assert_eq!(registry.unit("um"), registry.unit("μm"));
            assert!(registry.contains("us"));
        }

        #[test]
        fn explicit_suffix_wins_over_generated() {
            let mut registry = UnitRegistry::new();
            let second = CompositeUnit::from_dimension(BaseDimension::base("s"));
            let knot = CompositeUnit::from_dimension(BaseDimension::base("knot"));

            registry.register("s", "second", second);
            registry.register("ks", "knot-second", knot.clone());
            registry.register_prefixes("s", "second", RegistryOptions::default());

            let kept = registry.get("ks").expect("ks is registered");
            assert_eq!(kept.origin(), Origin::Explicit);
            assert_eq!(kept.unit(), &knot);
            assert!(registry.contains("ms"));
        }

        #[test]
        fn explicit_registration_replaces_generated() {
            let mut registry = builtins();
            let custom = CompositeUnit::from_dimension(BaseDimension::base("custom"));

            let replaced = registry
                .register("km", "custom", custom.clone())
                .expect("km was generated");

            assert_eq!(replaced.origin(), Origin::Prefixed(Prefix::Kilo));
            assert_eq!(registry.unit("km"), Ok(&custom));
        }

        #[test]
        fn unprefixable_unit_is_skipped() {
            let mut registry = builtins();
            let before = registry.len();

            registry.register_prefixes("N", "newton", RegistryOptions::default());
            registry.register_prefixes("furlong", "furlong", RegistryOptions::default());

            assert_eq!(registry.len(), before);
        }
    }
}
