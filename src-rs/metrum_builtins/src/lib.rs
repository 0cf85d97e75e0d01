//! The standard unit catalog and suffix registry for Metrum
//!
//! [`UnitRegistry::with_builtins`] registers every unit of the standard
//! catalog under its symbol, aliases and long name, then generates the
//! decimal prefixes (`km`, `ms`, `kg`, ...) of every unit that accepts them.

mod error;
mod registry;
pub mod std_units;

pub use error::RegistryError;
pub use registry::{Constructor, Origin, RegisteredUnit, RegistryOptions, UnitRegistry};
