//! One scale-application wrapper per decimal prefix.
//!
//! Each wrapper relabels a quantity with the prefixed unit and keeps its
//! value, so `kilo(1 m)` is `1 km`.
//!
//! # Errors
//!
//! Every wrapper returns `UnitError::InvalidScaleApplication` if the
//! quantity's unit is compound, is raised to a power other than 1, or already
//! carries a scale.

use metrum_unit::{Prefix, UnitError};

use crate::Quantity;

macro_rules! prefix_wrappers {
    ($($name:ident => $prefix:ident),* $(,)?) => {
        $(
            #[doc = concat!("Applies the `", stringify!($name), "` prefix to a quantity.")]
            #[doc = ""]
            #[doc = "# Errors"]
            #[doc = ""]
            #[doc = "See [`Quantity::apply_scale`]."]
            pub fn $name(quantity: Quantity) -> Result<Quantity, UnitError> {
                quantity.with_prefix(Prefix::$prefix)
            }
        )*
    };
}

prefix_wrappers! {
    atto => Atto,
    femto => Femto,
    pico => Pico,
    nano => Nano,
    micro => Micro,
    milli => Milli,
    centi => Centi,
    deci => Deci,
    deca => Deca,
    hecto => Hecto,
    kilo => Kilo,
    mega => Mega,
    giga => Giga,
    tera => Tera,
    peta => Peta,
    exa => Exa,
}
