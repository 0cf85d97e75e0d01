use metrum_builtins::UnitRegistry;
use metrum_parser::{QuantityLiteral, Span, UnitExpr, UnitOp};
use metrum_quantity::{CompositeUnit, Quantity};

use crate::error::EvalError;

/// Resolves a parsed unit expression against the registry.
///
/// # Errors
///
/// Returns every unknown unit name in the expression, in the order they
/// appear. If every name resolves but an exponent leaves the range of `i32`,
/// returns the subexpression where that happened.
pub fn eval_unit(
    expr: &UnitExpr,
    registry: &UnitRegistry,
) -> Result<CompositeUnit, Vec<EvalError>> {
    match expr {
        UnitExpr::Unit { name, span } => registry
            .unit(name)
            .cloned()
            .map_err(|_| vec![EvalError::unknown_unit(name, *span)]),
        UnitExpr::One { .. } => Ok(CompositeUnit::dimensionless()),
        UnitExpr::BinaryOp { op, left, right } => {
            let left = eval_unit(left, registry);
            let right = eval_unit(right, registry);

            match (left, right) {
                (Ok(left), Ok(right)) => {
                    let combined = match op {
                        UnitOp::Multiply => left.checked_multiply(&right),
                        UnitOp::Divide => left.checked_divide(&right),
                    };
                    combined.map_err(|error| vec![EvalError::invalid_unit(error, expr.span())])
                }
                (Err(mut errors), Err(right_errors)) => {
                    errors.extend(right_errors);
                    Err(errors)
                }
                (Err(errors), Ok(_)) | (Ok(_), Err(errors)) => Err(errors),
            }
        }
        UnitExpr::Power {
            base,
            exponent,
            span,
        } => eval_unit(base, registry)?
            .checked_pow(*exponent)
            .map_err(|error| vec![EvalError::invalid_unit(error, *span)]),
        UnitExpr::Parenthesized { expr, .. } => eval_unit(expr, registry),
    }
}

/// Builds a quantity from a parsed literal.
///
/// A literal whose unit is a single name uses that unit's registered
/// constructor, so units such as `px` can normalize the value. Parentheses
/// and powers of 1 around the name do not change that.
///
/// # Errors
///
/// See [`eval_unit`].
pub fn eval_quantity(
    literal: &QuantityLiteral,
    registry: &UnitRegistry,
) -> Result<Quantity, Vec<EvalError>> {
    let Some(expr) = &literal.unit else {
        return Ok(Quantity::dimensionless(literal.value));
    };

    if let Some((name, span)) = lone_name(expr) {
        return registry
            .construct(name, literal.value)
            .map_err(|_| vec![EvalError::unknown_unit(name, span)]);
    }

    let unit = eval_unit(expr, registry)?;
    Ok(Quantity::new(literal.value, unit))
}

/// The name `expr` stands for when it is a lone unit name.
fn lone_name(expr: &UnitExpr) -> Option<(&str, Span)> {
    match expr {
        UnitExpr::Unit { name, span } => Some((name.as_str(), *span)),
        UnitExpr::Parenthesized { expr, .. }
        | UnitExpr::Power {
            base: expr,
            exponent: 1,
            ..
        } => lone_name(expr),
        UnitExpr::One { .. } | UnitExpr::BinaryOp { .. } | UnitExpr::Power { .. } => None,
    }
}

#[cfg(test)]
mod tests {
    use metrum_builtins::RegistryOptions;
    use metrum_parser::{parse_quantity, parse_unit};
    use metrum_quantity::UnitError;

    use super::*;

    fn registry() -> UnitRegistry {
        UnitRegistry::with_builtins(RegistryOptions::default())
    }

    fn eval_text(text: &str) -> Result<CompositeUnit, Vec<EvalError>> {
        let expr = parse_unit(text, None).expect("should parse unit");
        eval_unit(&expr, &registry())
    }

    mod success_tests {
        use super::*;

        #[test]
        fn single_name() {
            let unit = eval_text("km").expect("km is registered");

            assert_eq!(unit.to_string(), "km");
        }

        #[test]
        fn compound_expression() {
            let unit = eval_text("kg*m/s^2").expect("all names are registered");
            let registry = registry();
            let newton = registry.unit("N").expect("N is registered");

            assert_eq!(&unit, newton);
        }

        #[test]
        fn one_is_dimensionless() {
            let unit = eval_text("1").expect("1 is always valid");

            assert!(unit.is_dimensionless());
        }

        #[test]
        fn per_second() {
            let unit = eval_text("1/s").expect("s is registered");
            let expected = eval_text("s^-1").expect("s is registered");

            assert_eq!(unit, expected);
        }

        #[test]
        fn parentheses_apply_power_to_the_group() {
            let grouped = eval_text("(m/s)^2").expect("all names are registered");
            let expanded = eval_text("m^2/s^2").expect("all names are registered");

            assert_eq!(grouped, expanded);
        }

        #[test]
        fn counted_quantity_uses_its_constructor() {
            let literal = parse_quantity("12.7 px", None).expect("should parse quantity");
            let quantity = eval_quantity(&literal, &registry()).expect("px is registered");

            let expected = registry()
                .construct("px", 12.0)
                .expect("px is registered");
            assert_eq!(quantity, expected);
        }

        #[test]
        fn counted_quantity_keeps_its_constructor_through_grouping() {
            let expected = registry()
                .construct("px", 12.0)
                .expect("px is registered");

            for text in ["12.7 (px)", "12.7 px^1", "12.7 ((px))^1"] {
                let literal = parse_quantity(text, None).expect("should parse quantity");
                let quantity = eval_quantity(&literal, &registry()).expect("px is registered");

                assert_eq!(quantity, expected, "`{text}` should count whole pixels");
            }
        }

        #[test]
        fn squared_count_is_not_truncated() {
            let literal = parse_quantity("12.7 px^2", None).expect("should parse quantity");
            let quantity = eval_quantity(&literal, &registry()).expect("px is registered");

            assert!((quantity.value() - 12.7).abs() < f64::EPSILON);
        }

        #[test]
        fn extreme_exponent_that_cancels() {
            let unit = eval_text("m^2147483647/m^2147483647").expect("the exponents cancel");

            assert!(unit.is_dimensionless());
        }

        #[test]
        fn bare_number_is_dimensionless() {
            let literal = parse_quantity("3.5", None).expect("should parse quantity");
            let quantity = eval_quantity(&literal, &registry()).expect("no units to resolve");

            assert_eq!(quantity, Quantity::dimensionless(3.5));
        }
    }

    mod error_tests {
        use super::*;

        #[test]
        fn unknown_name() {
            let errors = eval_text("furlong").expect_err("furlong is not registered");

            assert_eq!(
                errors,
                vec![EvalError::unknown_unit("furlong", Span::new(0, 7))]
            );
        }

        #[test]
        fn every_unknown_name_is_collected() {
            let errors = eval_text("foo*m/bar^2").expect_err("foo and bar are not registered");

            assert_eq!(
                errors,
                vec![
                    EvalError::unknown_unit("foo", Span::new(0, 3)),
                    EvalError::unknown_unit("bar", Span::new(6, 9)),
                ]
            );
        }

        #[test]
        fn exponent_overflow_is_reported() {
            let overflow = UnitError::ExponentOverflow {
                unit: "m".to_string(),
            };

            let errors = eval_text("m^2147483647*m").expect_err("the exponent overflows");
            assert_eq!(
                errors,
                vec![EvalError::invalid_unit(overflow.clone(), Span::new(0, 14))]
            );

            let errors = eval_text("(m^-2147483648)^-1").expect_err("the exponent overflows");
            assert_eq!(
                errors,
                vec![EvalError::invalid_unit(overflow.clone(), Span::new(0, 18))]
            );

            let errors = eval_text("1/m^-2147483648").expect_err("the exponent overflows");
            assert_eq!(
                errors,
                vec![EvalError::invalid_unit(overflow, Span::new(0, 15))]
            );
            assert_eq!(errors[0].to_string(), "the exponent of `m` is out of range");
        }

        #[test]
        fn overflow_and_unknown_names_are_both_reported() {
            let errors = eval_text("m^2147483647*m*furlong").expect_err("furlong is unknown");

            assert_eq!(errors.len(), 2);
            assert_eq!(errors[0].span(), Span::new(0, 14));
            assert_eq!(errors[1], EvalError::unknown_unit("furlong", Span::new(15, 22)));
        }

        #[test]
        fn unknown_name_in_quantity() {
            let literal = parse_quantity("3 parsec", None).expect("should parse quantity");
            let errors = eval_quantity(&literal, &registry()).expect_err("parsec is unknown");

            assert_eq!(errors[0].span(), Span::new(2, 8));
        }
    }
}
