#![no_main]

use libfuzzer_sys::{arbitrary, fuzz_target};
use metrum_unit::CompositeUnit;
use shared::SmallUnit;

#[derive(Debug, Clone, PartialEq, arbitrary::Arbitrary)]
enum FuzzData {
    Identity { unit: SmallUnit },
    Inverse { unit: SmallUnit },
    Cancellation { lhs: SmallUnit, rhs: SmallUnit },
}

fuzz_target!(|data: FuzzData| {
    match data {
        FuzzData::Identity { unit: SmallUnit(unit) } => {
            let product = unit.multiply(&CompositeUnit::dimensionless());
            assert_eq!(product, unit);
        }
        FuzzData::Inverse { unit: SmallUnit(unit) } => {
            let product = unit.multiply(&unit.invert());
            assert!(product.is_dimensionless(), "`{unit}` times its inverse is `{product}`");
        }
        FuzzData::Cancellation {
            lhs: SmallUnit(lhs),
            rhs: SmallUnit(rhs),
        } => {
            let quotient = lhs.multiply(&rhs).divide(&rhs);
            assert_eq!(quotient, lhs);
        }
    }
});
