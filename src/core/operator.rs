//! Binary and unary calculator operators.
//!
//! Application is pure: a domain failure (division by zero, square root of
//! a negative number, reciprocal of zero) comes back as `None`.

use serde::{Deserialize, Serialize};

/// Binary operator awaiting its right-hand operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Symbol used in history entries.
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '×',
            Self::Divide => '÷',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        }
    }

    /// Apply to `lhs` and `rhs`; dividing by zero yields `None`.
    ///
    /// ```rust
    /// use deskcalc::core::Operator;
    ///
    /// assert_eq!(Operator::Multiply.apply(5.0, 4.0), Some(20.0));
    /// assert_eq!(Operator::Divide.apply(5.0, 0.0), None);
    /// ```
    pub fn apply(self, lhs: f64, rhs: f64) -> Option<f64> {
        match self {
            Self::Add => Some(lhs + rhs),
            Self::Subtract => Some(lhs - rhs),
            Self::Multiply => Some(lhs * rhs),
            Self::Divide if rhs == 0.0 => None,
            Self::Divide => Some(lhs / rhs),
        }
    }
}

/// Single-operand function applied to the current display value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnaryOp {
    SquareRoot,
    Square,
    Reciprocal,
    /// Add tax: `x × (1 + rate)`.
    TaxPlus,
    /// Remove tax: `x ÷ (1 + rate)`.
    TaxMinus,
}

impl UnaryOp {
    /// Label used in history entries, e.g. `sqrt(9) = 3`.
    pub fn name(self) -> &'static str {
        match self {
            Self::SquareRoot => "sqrt",
            Self::Square => "square",
            Self::Reciprocal => "reciprocal",
            Self::TaxPlus => "taxplus",
            Self::TaxMinus => "taxminus",
        }
    }

    /// Apply to `x` with the given tax rate.
    ///
    /// ```rust
    /// use deskcalc::core::UnaryOp;
    ///
    /// assert_eq!(UnaryOp::SquareRoot.apply(9.0, 0.10), Some(3.0));
    /// assert_eq!(UnaryOp::SquareRoot.apply(-1.0, 0.10), None);
    /// assert_eq!(UnaryOp::Reciprocal.apply(0.0, 0.10), None);
    /// ```
    pub fn apply(self, x: f64, tax_rate: f64) -> Option<f64> {
        let factor = 1.0 + tax_rate;
        match self {
            Self::SquareRoot if x < 0.0 => None,
            Self::SquareRoot => Some(x.sqrt()),
            Self::Square => Some(x * x),
            Self::Reciprocal if x == 0.0 => None,
            Self::Reciprocal => Some(1.0 / x),
            Self::TaxPlus => Some(x * factor),
            Self::TaxMinus => Some(x / factor),
        }
    }
}
