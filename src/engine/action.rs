//! Input surface: the discrete actions an adapter can send to the engine.

use crate::core::{DigitKey, Operator, UnaryOp};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// One keypad or keyboard action.
///
/// [`Action::HistoryRecall`] picks a history entry by position, 0 being the
/// newest. Recalling arbitrary entry text is a direct engine call
/// ([`crate::CalculatorEngine::recall_from_history`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Digit(DigitKey),
    Operator(Operator),
    Equals,
    Negate,
    Percent,
    Backspace,
    Clear,
    MemoryClear,
    MemoryRecall,
    MemoryAdd,
    MemorySubtract,
    Unary(UnaryOp),
    HistoryClear,
    HistoryRecall(usize),
}

const HISTORY_RECALL_PREFIX: &str = "history-recall:";

/// An action name that no action answers to
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown action '{0}'")]
pub struct ActionParseError(pub String);

impl Action {
    /// Map a keyboard key name to an action.
    ///
    /// Unmapped keys return `None`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use deskcalc::core::{DigitKey, Operator};
    /// use deskcalc::Action;
    ///
    /// assert_eq!(Action::from_key("7"), Some(Action::Digit(DigitKey::Digit(7))));
    /// assert_eq!(Action::from_key("x"), Some(Action::Operator(Operator::Multiply)));
    /// assert_eq!(Action::from_key("Enter"), Some(Action::Equals));
    /// assert_eq!(Action::from_key("Tab"), None);
    /// ```
    pub fn from_key(key: &str) -> Option<Self> {
        let action = match key {
            "Enter" | "=" => Self::Equals,
            "+" => Self::Operator(Operator::Add),
            "-" => Self::Operator(Operator::Subtract),
            "*" | "x" | "X" => Self::Operator(Operator::Multiply),
            "/" => Self::Operator(Operator::Divide),
            "Backspace" => Self::Backspace,
            "Escape" | "c" | "C" => Self::Clear,
            "%" => Self::Percent,
            _ => return single_digit_key(key).map(Self::Digit),
        };
        Some(action)
    }

    /// Name an adapter uses for this action; [`FromStr`] accepts it back.
    pub fn name(&self) -> String {
        match self {
            Self::Digit(key) => key.as_char().to_string(),
            Self::Operator(op) => op.name().to_string(),
            Self::Equals => "equals".to_string(),
            Self::Negate => "plus-minus".to_string(),
            Self::Percent => "percent".to_string(),
            Self::Backspace => "back".to_string(),
            Self::Clear => "clear".to_string(),
            Self::MemoryClear => "mc".to_string(),
            Self::MemoryRecall => "mr".to_string(),
            Self::MemoryAdd => "mplus".to_string(),
            Self::MemorySubtract => "mminus".to_string(),
            Self::Unary(op) => op.name().to_string(),
            Self::HistoryClear => "history-clear".to_string(),
            Self::HistoryRecall(index) => format!("{HISTORY_RECALL_PREFIX}{index}"),
        }
    }
}

fn single_digit_key(key: &str) -> Option<DigitKey> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => DigitKey::from_char(c),
        _ => None,
    }
}

impl FromStr for Action {
    type Err = ActionParseError;

    /// Parse an adapter action name such as `"mplus"`, `"sqrt"` or
    /// `"history-recall:2"`.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        if let Some(index) = name.strip_prefix(HISTORY_RECALL_PREFIX) {
            return index
                .parse()
                .map(Self::HistoryRecall)
                .map_err(|_| ActionParseError(name.to_string()));
        }

        let action = match name {
            "add" => Self::Operator(Operator::Add),
            "subtract" => Self::Operator(Operator::Subtract),
            "multiply" => Self::Operator(Operator::Multiply),
            "divide" => Self::Operator(Operator::Divide),
            "equals" => Self::Equals,
            "plus-minus" => Self::Negate,
            "percent" => Self::Percent,
            "back" => Self::Backspace,
            "clear" => Self::Clear,
            "mc" => Self::MemoryClear,
            "mr" => Self::MemoryRecall,
            "mplus" => Self::MemoryAdd,
            "mminus" => Self::MemorySubtract,
            "sqrt" => Self::Unary(UnaryOp::SquareRoot),
            "square" => Self::Unary(UnaryOp::Square),
            "reciprocal" => Self::Unary(UnaryOp::Reciprocal),
            "taxplus" => Self::Unary(UnaryOp::TaxPlus),
            "taxminus" => Self::Unary(UnaryOp::TaxMinus),
            "history-clear" => Self::HistoryClear,
            _ => {
                return single_digit_key(name)
                    .map(Self::Digit)
                    .ok_or_else(|| ActionParseError(name.to_string()))
            }
        };
        Ok(action)
    }
}
