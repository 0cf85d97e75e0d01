//! Syntax tree for unit expressions and quantity literals.

use std::fmt;

/// A byte range in the parsed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    /// Offset of the first byte
    pub start: usize,
    /// Offset one past the last byte
    pub end: usize,
}

impl Span {
    /// Creates a span covering `start..end`.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Creates the smallest span covering both spans.
    #[must_use]
    pub fn cover(first: Self, last: Self) -> Self {
        Self {
            start: first.start.min(last.start),
            end: first.end.max(last.end),
        }
    }

    /// The number of bytes covered.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Whether the span covers no bytes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// An operator joining two unit terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitOp {
    /// `*`, or whitespace when implicit multiplication is enabled
    Multiply,
    /// `/`
    Divide,
}

impl fmt::Display for UnitOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Multiply => write!(f, "*"),
            Self::Divide => write!(f, "/"),
        }
    }
}

/// A parsed unit expression.
///
/// Names are kept as written; resolving them to units happens later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitExpr {
    /// A unit suffix such as `km` or `degC`
    Unit {
        /// The suffix as written
        name: String,
        /// Where the suffix appears
        span: Span,
    },
    /// The dimensionless unit `1`
    One {
        /// Where the `1` appears
        span: Span,
    },
    /// Two expressions joined by `*` or `/`
    BinaryOp {
        /// The operator
        op: UnitOp,
        /// The left operand
        left: Box<Self>,
        /// The right operand
        right: Box<Self>,
    },
    /// An expression raised to an integer power
    Power {
        /// The expression being raised
        base: Box<Self>,
        /// The exponent
        exponent: i32,
        /// The base through the end of the exponent
        span: Span,
    },
    /// An expression in parentheses
    Parenthesized {
        /// The inner expression
        expr: Box<Self>,
        /// The expression including both parentheses
        span: Span,
    },
}

impl UnitExpr {
    /// Creates a unit name node.
    #[must_use]
    pub fn unit(name: impl Into<String>, span: Span) -> Self {
        Self::Unit {
            name: name.into(),
            span,
        }
    }

    /// Creates a `1` node.
    #[must_use]
    pub const fn one(span: Span) -> Self {
        Self::One { span }
    }

    /// Creates a binary operation node.
    #[must_use]
    pub fn binary_op(op: UnitOp, left: Self, right: Self) -> Self {
        Self::BinaryOp {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Creates a power node.
    #[must_use]
    pub fn power(base: Self, exponent: i32, span: Span) -> Self {
        Self::Power {
            base: Box::new(base),
            exponent,
            span,
        }
    }

    /// Creates a parenthesized node.
    #[must_use]
    pub fn parenthesized(expr: Self, span: Span) -> Self {
        Self::Parenthesized {
            expr: Box::new(expr),
            span,
        }
    }

    /// The span of the whole expression.
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Self::Unit { span, .. }
            | Self::One { span }
            | Self::Power { span, .. }
            | Self::Parenthesized { span, .. } => *span,
            Self::BinaryOp { left, right, .. } => Span::cover(left.span(), right.span()),
        }
    }
}

impl fmt::Display for UnitExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unit { name, .. } => write!(f, "{name}"),
            Self::One { .. } => write!(f, "1"),
            Self::BinaryOp { op, left, right } => write!(f, "{left}{op}{right}"),
            Self::Power { base, exponent, .. } => write!(f, "{base}^{exponent}"),
            Self::Parenthesized { expr, .. } => write!(f, "({expr})"),
        }
    }
}

/// A number optionally followed by a unit expression, such as `60 mi/hr`.
#[derive(Debug, Clone, PartialEq)]
pub struct QuantityLiteral {
    /// The numeric value
    pub value: f64,
    /// Where the number appears
    pub value_span: Span,
    /// The unit, if one was written
    pub unit: Option<UnitExpr>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary_span_covers_both_operands() {
        let expr = UnitExpr::binary_op(
            UnitOp::Divide,
            UnitExpr::unit("m", Span::new(0, 1)),
            UnitExpr::unit("s", Span::new(2, 3)),
        );

        assert_eq!(expr.span(), Span::new(0, 3));
    }

    #[test]
    fn display_rebuilds_compact_text() {
        let expr = UnitExpr::binary_op(
            UnitOp::Multiply,
            UnitExpr::unit("kg", Span::new(0, 2)),
            UnitExpr::power(
                UnitExpr::parenthesized(
                    UnitExpr::binary_op(
                        UnitOp::Divide,
                        UnitExpr::unit("m", Span::new(4, 5)),
                        UnitExpr::unit("s", Span::new(6, 7)),
                    ),
                    Span::new(3, 8),
                ),
                2,
                Span::new(3, 10),
            ),
        );

        assert_eq!(expr.to_string(), "kg*(m/s)^2");
    }

    #[test]
    fn span_length() {
        assert_eq!(Span::new(3, 7).len(), 4);
        assert!(Span::new(5, 5).is_empty());
    }
}
