use metrum_builtins::UnitRegistry;
use metrum_parser::{QuantityLiteral, UnitExpr};
use metrum_quantity::{CompositeUnit, Quantity};

use crate::{
    config::Config,
    error::RuntimeError,
    eval_unit::{eval_quantity, eval_unit},
};

/// Parses and evaluates units and quantities against a unit registry.
#[derive(Debug, Clone)]
pub struct Runtime {
    config: Config,
    registry: UnitRegistry,
}

impl Runtime {
    /// Creates a runtime with the standard unit registry.
    #[must_use]
    pub fn new(config: Config) -> Self {
        let registry = UnitRegistry::with_builtins(config.registry_options());
        Self::with_registry(config, registry)
    }

    /// Creates a runtime that resolves names in `registry`.
    #[must_use]
    pub const fn with_registry(config: Config, registry: UnitRegistry) -> Self {
        Self { config, registry }
    }

    /// The configuration of the runtime.
    #[must_use]
    pub const fn config(&self) -> Config {
        self.config
    }

    /// The registry used to resolve unit names.
    #[must_use]
    pub const fn registry(&self) -> &UnitRegistry {
        &self.registry
    }

    /// Parses a unit expression without resolving its names.
    ///
    /// # Errors
    ///
    /// Returns `RuntimeError::Parse` if the input is not a unit expression.
    pub fn parse_unit_expr(&self, input: &str) -> Result<UnitExpr, RuntimeError> {
        metrum_parser::parse_unit(input, Some(self.config.parser_config()))
            .map_err(|error| RuntimeError::parse(input, error))
    }

    /// Parses a quantity literal without resolving its unit.
    ///
    /// # Errors
    ///
    /// Returns `RuntimeError::Parse` if the input is not a quantity literal.
    pub fn parse_quantity_literal(&self, input: &str) -> Result<QuantityLiteral, RuntimeError> {
        metrum_parser::parse_quantity(input, Some(self.config.parser_config()))
            .map_err(|error| RuntimeError::parse(input, error))
    }

    /// Parses and resolves a unit expression such as `kg*m/s^2`.
    ///
    /// # Errors
    ///
    /// Returns `RuntimeError::Parse` for malformed input and
    /// `RuntimeError::Eval` listing every unknown unit name.
    pub fn parse_unit(&self, input: &str) -> Result<CompositeUnit, RuntimeError> {
        let expr = self.parse_unit_expr(input)?;
        let unit = eval_unit(&expr, &self.registry)?;
        Ok(unit)
    }

    /// Parses and resolves a quantity literal such as `60 mi/hr`.
    ///
    /// # Errors
    ///
    /// Returns `RuntimeError::Parse` for malformed input and
    /// `RuntimeError::Eval` listing every unknown unit name.
    pub fn parse_quantity(&self, input: &str) -> Result<Quantity, RuntimeError> {
        let literal = self.parse_quantity_literal(input)?;
        let quantity = eval_quantity(&literal, &self.registry)?;
        Ok(quantity)
    }

    /// Parses `quantity` and converts it into the unit `target`.
    ///
    /// # Errors
    ///
    /// Returns the parse or evaluation error of either input, or
    /// `RuntimeError::Unit` if the units are not convertible.
    pub fn convert(&self, quantity: &str, target: &str) -> Result<Quantity, RuntimeError> {
        let quantity = self.parse_quantity(quantity)?;
        let target = self.parse_unit(target)?;

        log::debug!("converting `{quantity}` into `{target}`");

        Ok(quantity.convert_to(&target)?)
    }
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

#[cfg(test)]
mod tests {
    use metrum_quantity::{UnitError, Value, radian, util::is_close_within};

    use super::*;
    use crate::error::EvalError;

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            is_close_within(actual, expected, tolerance),
            "expected {expected}, got {actual}"
        );
    }

    mod scenario_tests {
        use super::*;

        #[test]
        fn miles_per_hour_to_meters_per_second() {
            let runtime = Runtime::default();
            let distance = runtime.parse_quantity("60 mi").expect("mi is registered");
            let time = runtime.parse_quantity("1 hr").expect("hr is registered");

            let Value::Quantity(speed) = distance / time else {
                panic!("mi/hr has dimensions");
            };
            let meters_per_second = runtime.parse_unit("m/s").expect("m and s are registered");
            let speed = speed
                .convert_to(&meters_per_second)
                .expect("mi/hr converts to m/s");

            assert_close(speed.value(), 26.8224, 1e-9);
        }

        #[test]
        fn accelerating_car_force() {
            let runtime = Runtime::default();
            let quantity = |text: &str| runtime.parse_quantity(text).expect("valid quantity");

            let mass = quantity("1500 kg");
            let delta_v = quantity("100 km/hr")
                .checked_sub(&quantity("0 km/hr"))
                .expect("same units");
            let acceleration = (delta_v / quantity("5 s")).into_quantity();
            let force = (mass * acceleration).into_quantity();

            let base_force = force
                .convert_to(&runtime.parse_unit("kg*m*s^-2").expect("valid unit"))
                .expect("force reduces to base units");
            assert_eq!(base_force.unit().to_string(), "s^-2*m*kg");
            assert_close(base_force.value(), 8333.333_333, 1e-3);

            let newton = runtime.parse_unit("N").expect("N is registered");
            let in_newtons = force.convert_to(&newton).expect("force converts to N");
            assert_close(in_newtons.value(), 8333.333_333, 1e-3);
        }

        #[test]
        fn celsius_to_kelvin() {
            let runtime = Runtime::default();

            let freezing = runtime.convert("0 degC", "K").expect("degC converts to K");
            let boiling = runtime.convert("100 degC", "K").expect("degC converts to K");

            assert_close(freezing.value(), 273.15, 1e-9);
            assert_close(boiling.value(), 373.15, 1e-9);
            assert_eq!(boiling.to_string(), "373.15 K");
        }

        #[test]
        fn cancelling_units_yield_a_scalar() {
            let runtime = Runtime::default();
            let meter = runtime.parse_quantity("3 m").expect("m is registered");
            let per_meter = runtime.parse_quantity("2 m^-1").expect("m is registered");

            assert_eq!(meter * per_meter, Value::Scalar(6.0));
            assert!(
                runtime
                    .parse_unit("m*m^-1")
                    .expect("m is registered")
                    .is_dimensionless()
            );
        }

        #[test]
        fn degrees_to_radians() {
            let runtime = Runtime::default();

            let angle = runtime.convert("45 deg", "rad").expect("deg converts to rad");
            assert_eq!(angle.unit(), &radian());
            assert_close(angle.value(), 0.785_398, 1e-6);

            let sine = runtime
                .parse_quantity("45 deg")
                .expect("deg is registered")
                .sin()
                .expect("deg is an angle");
            assert_close(sine, 0.707_11, 1e-5);
        }
    }

    mod success_tests {
        use super::*;

        #[test]
        fn fahrenheit_to_celsius() {
            let runtime = Runtime::default();

            let body = runtime.convert("98.6 degF", "degC").expect("degF converts to degC");

            assert_close(body.value(), 37.0, 1e-9);
        }

        #[test]
        fn prefixed_compound_conversion() {
            let runtime = Runtime::default();

            let speed = runtime.convert("36 km/hr", "m/s").expect("km/hr converts to m/s");

            assert_close(speed.value(), 10.0, 1e-9);
        }

        #[test]
        fn implicit_multiplication() {
            let config = Config {
                space_multiplies: true,
                ..Config::default()
            };
            let runtime = Runtime::new(config);

            let torque = runtime.convert("2 kN m", "J");
            assert!(matches!(torque, Err(RuntimeError::Eval(_))));

            let energy = runtime.convert("2 kg m^2 s^-2", "J").expect("reduces to J");
            assert_close(energy.value(), 2.0, 1e-9);
        }

        #[test]
        fn ascii_micro() {
            let runtime = Runtime::new(Config {
                ascii_micro: true,
                ..Config::default()
            });

            let time = runtime.convert("1500 us", "ms").expect("us is registered");

            assert_close(time.value(), 1.5, 1e-9);
        }
    }

    mod error_tests {
        use super::*;

        #[test]
        fn parse_error_keeps_the_input() {
            let runtime = Runtime::default();

            let error = runtime.parse_unit("m/").expect_err("missing term");

            let RuntimeError::Parse { input, error } = error else {
                panic!("expected a parse error");
            };
            assert_eq!(input, "m/");
            assert_eq!(error.error_offset, 2);
        }

        #[test]
        fn unknown_units_are_all_reported() {
            let runtime = Runtime::default();

            let error = runtime.parse_unit("foo/bar").expect_err("unknown units");

            let RuntimeError::Eval(errors) = error else {
                panic!("expected evaluation errors");
            };
            let messages: Vec<_> = errors.iter().map(ToString::to_string).collect();
            assert_eq!(messages, ["unknown unit `foo`", "unknown unit `bar`"]);
        }

        #[test]
        fn exponent_overflow_is_an_error_not_a_panic() {
            let runtime = Runtime::default();

            for input in ["m^2147483647*m", "(m^-2147483648)^-1", "1/m^-2147483648"] {
                let error = runtime.parse_unit(input).expect_err("the exponent overflows");

                let RuntimeError::Eval(errors) = error else {
                    panic!("expected evaluation errors for `{input}`");
                };
                assert!(
                    matches!(
                        errors.as_slice(),
                        [EvalError::InvalidUnit {
                            error: UnitError::ExponentOverflow { .. },
                            ..
                        }]
                    ),
                    "`{input}` should report one overflow"
                );
            }

            let error = runtime
                .convert("2 m^2147483647*m", "m")
                .expect_err("the quantity's unit overflows");
            assert!(matches!(error, RuntimeError::Eval(_)));
        }

        #[test]
        fn incompatible_units() {
            let runtime = Runtime::default();

            let error = runtime.convert("3 m", "s").expect_err("m is not s");

            assert!(matches!(
                error,
                RuntimeError::Unit(UnitError::IncompatibleConversion { .. })
            ));
        }

        #[test]
        fn ascii_micro_is_off_by_default() {
            let runtime = Runtime::default();

            assert!(matches!(
                runtime.parse_unit("us"),
                Err(RuntimeError::Eval(_))
            ));
        }
    }
}
