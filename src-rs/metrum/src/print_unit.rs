//! Output formatting for conversions, units and the registry

use anstream::println;
use metrum::{
    CompositeUnit, Quantity,
    builtins::{Origin, RegisteredUnit, UnitRegistry},
    unit::BaseDimension,
};
use owo_colors::OwoColorize;

use crate::stylesheet;

/// Prints a converted quantity, naming the unit as the user wrote it.
pub fn print_conversion(converted: &Quantity, target_text: &str) {
    let value = stylesheet::QUANTITY_VALUE.style(converted.value());

    if converted.is_dimensionless() {
        println!("{value}");
    } else {
        println!("{value} {}", stylesheet::UNIT.style(target_text));
    }
}

/// Prints the canonical form of a unit, its entries and its signature.
pub fn print_unit_details(unit: &CompositeUnit) {
    println!("{}", stylesheet::UNIT.style(unit.describe()));

    for entry in unit.entries() {
        println!(
            "  {} {}",
            stylesheet::SUFFIX.style(entry.to_string()),
            stylesheet::LABEL.style(entry_details(entry)),
        );
    }

    println!(
        "  {} {}",
        stylesheet::LABEL.style("signature:"),
        signature_string(unit),
    );
}

/// Prints every registered suffix with its long name and unit.
///
/// Suffixes generated from decimal prefixes are skipped unless
/// `include_prefixed` is set.
pub fn print_registry(registry: &UnitRegistry, include_prefixed: bool) {
    let rows = registry
        .iter()
        .filter(|(_, registered)| include_prefixed || is_explicit(registered));

    for (suffix, registered) in rows {
        println!(
            "{} {:<24} {}",
            stylesheet::SUFFIX.style(format!("{suffix:<10}")),
            registered.name(),
            stylesheet::UNIT.style(registered.unit().describe()),
        );
    }
}

fn is_explicit(registered: &RegisteredUnit) -> bool {
    registered.origin() == Origin::Explicit
}

/// Describes how an entry relates to its base symbol.
fn entry_details(entry: &BaseDimension) -> String {
    let mut details = vec![format!("base `{}`", entry.symbol())];

    if !entry.prefix().is_empty() {
        details.push(format!("prefix `{}`", entry.prefix()));
    }

    if !entry.is_unscaled() {
        details.push(format!("scale {}", entry.scale()));
    }

    let conversion = entry.conversion();
    if conversion.is_affine() {
        details.push(format!("affine, factor {}", conversion.factor()));
    } else if !conversion.is_identity() {
        details.push(format!("factor {}", conversion.factor()));
    }

    details.join(", ")
}

/// Renders the base signature, e.g. `s^-2*m*g`.
fn signature_string(unit: &CompositeUnit) -> String {
    let signature = unit.signature();

    if signature.is_empty() {
        return "1".to_string();
    }

    signature
        .iter()
        .map(|(symbol, exponent)| {
            if *exponent == 1 {
                (*symbol).to_string()
            } else {
                format!("{symbol}^{exponent}")
            }
        })
        .collect::<Vec<_>>()
        .join("*")
}
