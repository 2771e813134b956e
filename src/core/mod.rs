//! Core calculator types and logic.
//!
//! This module contains the pure building blocks the engine is made of:
//! - Display formatting of computed values
//! - Operand entry accumulation and operators
//! - The memory register and the bounded history log
//! - The entry state and its named phases
//!
//! Nothing in here logs or touches I/O.

mod format;
mod history;
mod memory;
mod operand;
mod operator;
mod state;

pub use format::{
    format_exponential, format_plain, format_result, parse_display, ERROR, EXPONENT_DIGITS,
    FIXED_DIGITS, LOWER_PLAIN_LIMIT, UPPER_PLAIN_LIMIT,
};
pub use history::{result_of, HistoryEntry, HistoryLog, DEFAULT_HISTORY_CAPACITY};
pub use memory::MemoryRegister;
pub use operand::{DigitKey, Operand};
pub use operator::{Operator, UnaryOp};
pub use state::{EngineState, Phase, PendingOperation};
