//! The calculator engine and its input surface.
//!
//! Adapters translate button clicks or key presses into [`Action`]s (or call
//! the engine methods directly), then poll [`CalculatorEngine::display`],
//! [`CalculatorEngine::snapshot`] or [`CalculatorEngine::history`] to redraw.
//! The engine never calls back into the adapter.

mod action;
mod machine;

pub use action::{Action, ActionParseError};
pub use machine::{CalculatorEngine, DisplayState};
