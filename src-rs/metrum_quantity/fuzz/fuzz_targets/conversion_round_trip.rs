#![no_main]

use libfuzzer_sys::{arbitrary, fuzz_target};
use metrum_quantity::{Quantity, util::is_close_within};
use shared::{LengthUnit, ModerateF64};

#[derive(Debug, Clone, PartialEq, arbitrary::Arbitrary)]
struct FuzzData {
    value: ModerateF64,
    from: LengthUnit,
    to: LengthUnit,
}

fuzz_target!(|data: FuzzData| {
    let FuzzData {
        value: ModerateF64(value),
        from: LengthUnit(from),
        to: LengthUnit(to),
    } = data;

    let quantity = Quantity::new(value, from.clone());

    let Ok(there) = quantity.convert_to(&to) else {
        // only lengths raised to the same power convert
        let from_exponent = from.single().map(|entry| entry.exponent());
        let to_exponent = to.single().map(|entry| entry.exponent());
        assert_ne!(from_exponent, to_exponent, "`{from}` should convert to `{to}`");
        return;
    };

    let back = there
        .convert_to(&from)
        .expect("a conversion that succeeds one way succeeds the other way");

    assert!(
        is_close_within(value, back.value(), 1e-9),
        "expected: {}, actual: {} (via {})",
        value,
        back.value(),
        there
    );
});
