//! Token parsers for unit expressions.
//!
//! - `literal`: numbers, integer exponents and the dimensionless `1`
//! - `naming`: unit identifiers
//! - `symbol`: operators and parentheses
//!
//! Every token parser consumes the whitespace that follows its lexeme.

use super::util::{InputSpan, Parser, Result};

pub mod error;
mod util;
pub use util::{Token, inline_whitespace};

pub mod literal;
pub mod naming;
pub mod symbol;
