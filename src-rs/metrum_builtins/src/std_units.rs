//! The standard units that come with Metrum.
//!
//! Base units are their own base dimensions. Sub-units (`mi`, `hr`, `degC`,
//! ...) are alternate units of a base dimension with a linear or affine
//! conversion. Derived units (`N`, `J`, `V`, ...) are built from the base
//! units with the unit algebra, so `N` is `s^-2*m*kg`.

use std::f64::consts::PI;

use indexmap::IndexMap;
use metrum_quantity::{RADIAN, radian};
use metrum_unit::{BaseDimension, CompositeUnit, Prefix, SubConversion};

/// The family a standard unit belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitKind {
    /// One of the seven SI base units
    SiBase,
    /// A base unit outside the SI (`rad`, `sr`, `px`)
    SpecialBase,
    /// An alternate unit of a base dimension
    SubUnit,
    /// A product of other units
    Derived,
}

/// A unit of the standard catalog.
#[derive(Debug, Clone)]
pub struct StdBuiltinUnit {
    /// The long name, e.g. `meter`
    pub name: &'static str,
    /// The primary suffix, e.g. `m`
    pub symbol: &'static str,
    /// Other suffixes for the same unit, e.g. `Ω` for `ohm`
    pub aliases: &'static [&'static str],
    /// The unit itself
    pub unit: CompositeUnit,
    /// The family of the unit
    pub kind: UnitKind,
    /// Whether values are whole, non-negative counts
    pub counted: bool,
}

impl StdBuiltinUnit {
    /// Whether the decimal prefixes are generated for this unit.
    ///
    /// Every base unit and every linear sub-unit takes them. Derived units
    /// and affine units do not.
    #[must_use]
    pub fn is_prefixable(&self) -> bool {
        match self.kind {
            UnitKind::SiBase | UnitKind::SpecialBase => true,
            UnitKind::SubUnit => !self.unit.has_affine(),
            UnitKind::Derived => false,
        }
    }
}

fn base(symbol: &str) -> CompositeUnit {
    CompositeUnit::from_dimension(BaseDimension::base(symbol))
}

fn sub_unit(symbol: &str, sub_symbol: &str, conversion: SubConversion) -> CompositeUnit {
    CompositeUnit::from_dimension(BaseDimension::sub_unit(symbol, sub_symbol, conversion))
}

fn prefixed(unit: &CompositeUnit, prefix: Prefix) -> CompositeUnit {
    unit.with_prefix(prefix)
        .expect("plain base units always accept a prefix")
}

/// The standard units, in catalog order.
#[expect(clippy::too_many_lines, reason = "this is a list of builtin units")]
pub fn builtin_units_complete() -> impl Iterator<Item = StdBuiltinUnit> {
    let meter = base("m");
    let second = base("s");
    let gram = base("g");
    let ampere = base("A");
    let kelvin = base("K");
    let mole = base("mol");
    let candela = base("cd");
    let steradian = base("sr");

    let kilogram = prefixed(&gram, Prefix::Kilo);
    let centimeter = prefixed(&meter, Prefix::Centi);
    let decimeter = prefixed(&meter, Prefix::Deci);

    let square_meter = meter.pow(2);
    let square_second = second.pow(2);

    let hertz = second.invert();
    let newton = &(&kilogram * &meter) / &square_second;
    let pascal = &newton / &square_meter;
    let joule = &newton * &meter;
    let watt = &joule / &second;
    let coulomb = &ampere * &second;
    let volt = &watt / &ampere;
    let ohm = &volt / &ampere;
    let farad = &coulomb / &volt;
    let weber = &volt * &second;
    let tesla = &weber / &square_meter;
    let henry = &weber / &ampere;
    let siemens = &ampere / &volt;
    let lumen = &candela * &steradian;
    let lux = &lumen / &square_meter;
    let gray = &joule / &kilogram;
    let katal = &mole / &second;
    let liter = decimeter.pow(3);
    let dyne = &(&gram * &centimeter) / &square_second;

    let units = [
        // === SI BASE UNITS ===
        StdBuiltinUnit {
            name: "meter",
            symbol: "m",
            aliases: &[],
            unit: meter,
            kind: UnitKind::SiBase,
            counted: false,
        },
        StdBuiltinUnit {
            name: "second",
            symbol: "s",
            aliases: &[],
            unit: second,
            kind: UnitKind::SiBase,
            counted: false,
        },
        StdBuiltinUnit {
            // the gram carries the prefixes, so `kg` is generated like `mg`
            name: "gram",
            symbol: "g",
            aliases: &[],
            unit: gram,
            kind: UnitKind::SiBase,
            counted: false,
        },
        StdBuiltinUnit {
            name: "ampere",
            symbol: "A",
            aliases: &[],
            unit: ampere,
            kind: UnitKind::SiBase,
            counted: false,
        },
        StdBuiltinUnit {
            name: "kelvin",
            symbol: "K",
            aliases: &[],
            unit: kelvin,
            kind: UnitKind::SiBase,
            counted: false,
        },
        StdBuiltinUnit {
            name: "mole",
            symbol: "mol",
            aliases: &[],
            unit: mole,
            kind: UnitKind::SiBase,
            counted: false,
        },
        StdBuiltinUnit {
            name: "candela",
            symbol: "cd",
            aliases: &[],
            unit: candela,
            kind: UnitKind::SiBase,
            counted: false,
        },
        // === SPECIAL BASE UNITS ===
        StdBuiltinUnit {
            name: "radian",
            symbol: RADIAN,
            aliases: &[],
            unit: radian(),
            kind: UnitKind::SpecialBase,
            counted: false,
        },
        StdBuiltinUnit {
            name: "steradian",
            symbol: "sr",
            aliases: &[],
            unit: steradian,
            kind: UnitKind::SpecialBase,
            counted: false,
        },
        StdBuiltinUnit {
            name: "pixel",
            symbol: "px",
            aliases: &[],
            unit: base("px"),
            kind: UnitKind::SpecialBase,
            counted: true,
        },
        // === SUB-UNITS ===
        StdBuiltinUnit {
            name: "mile",
            symbol: "mi",
            aliases: &[],
            unit: sub_unit("m", "mi", SubConversion::linear(1609.344)),
            kind: UnitKind::SubUnit,
            counted: false,
        },
        StdBuiltinUnit {
            name: "foot",
            symbol: "ft",
            aliases: &[],
            unit: sub_unit("m", "ft", SubConversion::linear(0.3048)),
            kind: UnitKind::SubUnit,
            counted: false,
        },
        StdBuiltinUnit {
            name: "pound",
            symbol: "lb",
            aliases: &[],
            unit: sub_unit("g", "lb", SubConversion::linear(453.592_37)),
            kind: UnitKind::SubUnit,
            counted: false,
        },
        StdBuiltinUnit {
            name: "ounce",
            symbol: "oz",
            aliases: &[],
            unit: sub_unit("g", "oz", SubConversion::linear(28.349_523_125)),
            kind: UnitKind::SubUnit,
            counted: false,
        },
        StdBuiltinUnit {
            name: "minute",
            symbol: "min",
            aliases: &[],
            unit: sub_unit("s", "min", SubConversion::linear(60.0)),
            kind: UnitKind::SubUnit,
            counted: false,
        },
        StdBuiltinUnit {
            name: "hour",
            symbol: "hr",
            aliases: &["h"],
            unit: sub_unit("s", "hr", SubConversion::linear(3600.0)),
            kind: UnitKind::SubUnit,
            counted: false,
        },
        StdBuiltinUnit {
            name: "day",
            symbol: "day",
            aliases: &[],
            unit: sub_unit("s", "day", SubConversion::linear(86400.0)),
            kind: UnitKind::SubUnit,
            counted: false,
        },
        StdBuiltinUnit {
            name: "degree",
            symbol: "deg",
            aliases: &["°"],
            unit: sub_unit(RADIAN, "deg", SubConversion::linear(PI / 180.0)),
            kind: UnitKind::SubUnit,
            counted: false,
        },
        StdBuiltinUnit {
            name: "gradian",
            symbol: "grad",
            aliases: &[],
            unit: sub_unit(RADIAN, "grad", SubConversion::linear(PI / 200.0)),
            kind: UnitKind::SubUnit,
            counted: false,
        },
        StdBuiltinUnit {
            name: "celsius",
            symbol: "degC",
            aliases: &["°C"],
            unit: sub_unit("K", "degC", SubConversion::affine(1.0, 273.15)),
            kind: UnitKind::SubUnit,
            counted: false,
        },
        StdBuiltinUnit {
            name: "fahrenheit",
            symbol: "degF",
            aliases: &["°F"],
            unit: sub_unit(
                "K",
                "degF",
                SubConversion::affine(5.0 / 9.0, 273.15 - 160.0 / 9.0),
            ),
            kind: UnitKind::SubUnit,
            counted: false,
        },
        // === DERIVED UNITS ===
        StdBuiltinUnit {
            name: "hertz",
            symbol: "Hz",
            aliases: &[],
            unit: hertz.clone(),
            kind: UnitKind::Derived,
            counted: false,
        },
        StdBuiltinUnit {
            name: "newton",
            symbol: "N",
            aliases: &[],
            unit: newton,
            kind: UnitKind::Derived,
            counted: false,
        },
        StdBuiltinUnit {
            name: "pascal",
            symbol: "Pa",
            aliases: &[],
            unit: pascal,
            kind: UnitKind::Derived,
            counted: false,
        },
        StdBuiltinUnit {
            name: "joule",
            symbol: "J",
            aliases: &[],
            unit: joule,
            kind: UnitKind::Derived,
            counted: false,
        },
        StdBuiltinUnit {
            name: "watt",
            symbol: "W",
            aliases: &[],
            unit: watt,
            kind: UnitKind::Derived,
            counted: false,
        },
        StdBuiltinUnit {
            name: "coulomb",
            symbol: "C",
            aliases: &[],
            unit: coulomb,
            kind: UnitKind::Derived,
            counted: false,
        },
        StdBuiltinUnit {
            name: "volt",
            symbol: "V",
            aliases: &[],
            unit: volt,
            kind: UnitKind::Derived,
            counted: false,
        },
        StdBuiltinUnit {
            name: "ohm",
            symbol: "ohm",
            aliases: &["Ω"],
            unit: ohm,
            kind: UnitKind::Derived,
            counted: false,
        },
        StdBuiltinUnit {
            name: "farad",
            symbol: "F",
            aliases: &[],
            unit: farad,
            kind: UnitKind::Derived,
            counted: false,
        },
        StdBuiltinUnit {
            name: "weber",
            symbol: "Wb",
            aliases: &[],
            unit: weber,
            kind: UnitKind::Derived,
            counted: false,
        },
        StdBuiltinUnit {
            name: "tesla",
            symbol: "T",
            aliases: &[],
            unit: tesla,
            kind: UnitKind::Derived,
            counted: false,
        },
        StdBuiltinUnit {
            name: "henry",
            symbol: "H",
            aliases: &[],
            unit: henry,
            kind: UnitKind::Derived,
            counted: false,
        },
        StdBuiltinUnit {
            name: "siemens",
            symbol: "S",
            aliases: &[],
            unit: siemens,
            kind: UnitKind::Derived,
            counted: false,
        },
        StdBuiltinUnit {
            name: "lumen",
            symbol: "lm",
            aliases: &[],
            unit: lumen,
            kind: UnitKind::Derived,
            counted: false,
        },
        StdBuiltinUnit {
            name: "lux",
            symbol: "lx",
            aliases: &[],
            unit: lux,
            kind: UnitKind::Derived,
            counted: false,
        },
        StdBuiltinUnit {
            name: "becquerel",
            symbol: "Bq",
            aliases: &[],
            unit: hertz,
            kind: UnitKind::Derived,
            counted: false,
        },
        StdBuiltinUnit {
            name: "gray",
            symbol: "Gy",
            aliases: &[],
            unit: gray.clone(),
            kind: UnitKind::Derived,
            counted: false,
        },
        StdBuiltinUnit {
            name: "sievert",
            symbol: "Sv",
            aliases: &[],
            unit: gray,
            kind: UnitKind::Derived,
            counted: false,
        },
        StdBuiltinUnit {
            name: "katal",
            symbol: "kat",
            aliases: &[],
            unit: katal,
            kind: UnitKind::Derived,
            counted: false,
        },
        StdBuiltinUnit {
            name: "liter",
            symbol: "L",
            aliases: &["l"],
            unit: liter,
            kind: UnitKind::Derived,
            counted: false,
        },
        StdBuiltinUnit {
            name: "dyne",
            symbol: "dyn",
            aliases: &[],
            unit: dyne,
            kind: UnitKind::Derived,
            counted: false,
        },
    ];

    units.into_iter()
}

/// The standard units keyed by their primary suffix.
#[must_use]
pub fn builtin_units() -> IndexMap<&'static str, CompositeUnit> {
    builtin_units_complete()
        .map(|unit| (unit.symbol, unit.unit))
        .collect()
}
