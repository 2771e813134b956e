//! Deskcalc: the computational core of a desktop keypad calculator
//!
//! The engine turns discrete keypad actions (digits, operators, unary
//! functions, memory keys, equals) into display text. Rendering and event
//! capture belong to an adapter that drives the engine and polls its state.
//!
//! # Core Concepts
//!
//! - **Entry**: operands are typed as text and become numbers only when computed
//! - **Chaining**: operators evaluate strictly left to right, one pending at a time
//! - **Errors**: invalid arithmetic shows the `"Error"` sentinel; nothing panics
//! - **Memory and history**: a single accumulator and a bounded, newest-first log
//!
//! # Example
//!
//! ```rust
//! use deskcalc::{Action, CalculatorEngine};
//!
//! let mut calc = CalculatorEngine::new();
//! for key in ["1", "2", "+", "3", "0", "="] {
//!     if let Some(action) = Action::from_key(key) {
//!         calc.dispatch(action);
//!     }
//! }
//!
//! assert_eq!(calc.display(), "42");
//! assert_eq!(calc.history().latest().unwrap().text(), "12 + 30 = 42");
//!
//! calc.dispatch("sqrt".parse().unwrap());
//! assert_eq!(calc.display(), "6.480740698");
//! ```

pub mod config;
pub mod core;
pub mod engine;
pub mod logging;

// Re-export commonly used types
pub use crate::config::{CalculatorConfig, ConfigError, EngineConfig};
pub use crate::core::{DigitKey, HistoryEntry, HistoryLog, MemoryRegister, Operator, Phase, UnaryOp};
pub use crate::engine::{Action, ActionParseError, CalculatorEngine, DisplayState};
