//! The calculator engine: keypad actions in, display text out.

use crate::config::EngineConfig;
use crate::core::{
    format_result, result_of, DigitKey, EngineState, HistoryLog, MemoryRegister, Operand,
    Operator, PendingOperation, Phase, UnaryOp,
};
use crate::engine::action::Action;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Everything an adapter needs to redraw after an action.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DisplayState {
    pub display: String,
    pub phase: Phase,
    pub is_error: bool,
    /// Whether the memory register holds a non-zero value
    pub memory: bool,
}

/// Left-to-right keypad calculator.
///
/// Owns the entry state, the memory register and the history log. Every
/// method runs to completion and never fails: arithmetic errors show the
/// `"Error"` sentinel and malformed input is ignored.
///
/// # Example
///
/// ```rust
/// use deskcalc::{CalculatorEngine, DigitKey, Operator};
///
/// let mut calc = CalculatorEngine::new();
/// calc.input_digit(DigitKey::Digit(2));
/// calc.apply_operator(Operator::Add);
/// calc.input_digit(DigitKey::Digit(3));
/// calc.apply_operator(Operator::Multiply);
/// calc.input_digit(DigitKey::Digit(4));
/// calc.compute();
///
/// assert_eq!(calc.display(), "20");
/// let history: Vec<&str> = calc.history().texts().collect();
/// assert_eq!(history, vec!["5 × 4 = 20", "2 + 3 = 5"]);
/// ```
#[derive(Clone, Debug)]
pub struct CalculatorEngine {
    state: EngineState,
    memory: MemoryRegister,
    history: HistoryLog,
    config: EngineConfig,
}

impl Default for CalculatorEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorEngine {
    /// Engine with default settings.
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Engine with the given settings.
    ///
    /// Settings are used as given; call [`EngineConfig::validated`] first
    /// to reject out-of-range values.
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            state: EngineState::default(),
            memory: MemoryRegister::new(),
            history: HistoryLog::with_capacity(config.history_capacity),
            config,
        }
    }

    /// Current display text.
    pub fn display(&self) -> &str {
        self.state.current.as_str()
    }

    pub fn state(&self) -> &EngineState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn is_error(&self) -> bool {
        self.state.current.is_error()
    }

    pub fn memory(&self) -> &MemoryRegister {
        &self.memory
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn snapshot(&self) -> DisplayState {
        DisplayState {
            display: self.display().to_string(),
            phase: self.phase(),
            is_error: self.is_error(),
            memory: self.memory.is_set(),
        }
    }

    /// Route an input-surface action to its operation.
    pub fn dispatch(&mut self, action: Action) {
        trace!(?action, "dispatch");
        match action {
            Action::Digit(key) => self.input_digit(key),
            Action::Operator(op) => self.apply_operator(op),
            Action::Equals => self.compute(),
            Action::Negate => self.negate(),
            Action::Percent => self.percent(),
            Action::Backspace => self.backspace(),
            Action::Clear => self.clear_all(),
            Action::MemoryClear => self.memory_clear(),
            Action::MemoryRecall => self.memory_recall(),
            Action::MemoryAdd => self.memory_add(),
            Action::MemorySubtract => self.memory_subtract(),
            Action::Unary(op) => self.apply_unary(op),
            Action::HistoryClear => self.clear_history(),
            Action::HistoryRecall(index) => self.recall_history_entry(index),
        }
    }

    /// Type a digit or the decimal point.
    pub fn input_digit(&mut self, key: DigitKey) {
        if self.state.awaiting_fresh_entry {
            self.state.current = Operand::fresh(key);
            self.state.awaiting_fresh_entry = false;
        } else if !self.state.current.push(key, self.config.max_entry_len) {
            trace!(key = %key.as_char(), "ignored second decimal point");
        }
        trace!(display = self.display(), "entry");
    }

    /// Select a binary operator, evaluating any complete pending operation
    /// first.
    pub fn apply_operator(&mut self, operator: Operator) {
        if self.state.has_complete_operation() {
            self.compute();
        }
        self.state.pending = Some(PendingOperation {
            left: self.state.current.clone(),
            operator,
        });
        self.state.awaiting_fresh_entry = true;
    }

    /// Evaluate the pending operation, if any.
    ///
    /// Every successful evaluation, whether from `=` or from chaining
    /// operators, records one history entry.
    pub fn compute(&mut self) {
        let Some(PendingOperation { left, operator }) = self.state.pending.take() else {
            return;
        };
        let right = self.state.current.clone();
        let expression = format!("{} {} {}", left, operator.symbol(), right);

        let result = operator
            .apply(left.value(), right.value())
            .map(format_result);
        self.state.awaiting_fresh_entry = true;
        self.finish(expression, result);
    }

    /// Flip the sign of the display value. `"0"` is left alone.
    pub fn negate(&mut self) {
        if self.state.current.is_zero_literal() {
            return;
        }
        self.state.current = Operand::from_value(-self.state.current.value());
    }

    /// Divide the display value by 100.
    pub fn percent(&mut self) {
        self.state.current = Operand::from_value(self.state.current.value() / 100.0);
    }

    /// Remove the last typed character. Ignored right after an operator or
    /// a result.
    pub fn backspace(&mut self) {
        if self.state.awaiting_fresh_entry {
            return;
        }
        self.state.current.backspace();
    }

    /// Reset the entry state. Memory and history are kept.
    pub fn clear_all(&mut self) {
        self.state = EngineState::default();
    }

    /// Apply a single-operand function to the display value.
    pub fn apply_unary(&mut self, op: UnaryOp) {
        let x = self.state.current.value();
        let expression = format!("{}({})", op.name(), Operand::from_value(x));

        let result = op.apply(x, self.config.tax_rate).map(format_result);
        self.state.awaiting_fresh_entry = true;
        self.finish(expression, result);
    }

    /// Load the result of a history entry's text into the display.
    ///
    /// Text without a value after `=` is ignored.
    pub fn recall_from_history(&mut self, entry_text: &str) {
        let Some(value) = result_of(entry_text) else {
            debug!(entry = entry_text, "history entry has no result");
            return;
        };
        self.state.current = Operand::from_display(value);
        self.state.awaiting_fresh_entry = false;
    }

    /// Recall the entry at `index` (0 is the newest). Out of range is ignored.
    pub fn recall_history_entry(&mut self, index: usize) {
        if let Some(text) = self.history.get(index).map(|e| e.text().to_string()) {
            self.recall_from_history(&text);
        }
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
        debug!("history cleared");
    }

    pub fn memory_clear(&mut self) {
        self.memory.clear();
    }

    /// Show the memory value as a new operand that can be extended.
    pub fn memory_recall(&mut self) {
        self.state.current = Operand::from_value(self.memory.recall());
        self.state.awaiting_fresh_entry = false;
    }

    pub fn memory_add(&mut self) {
        self.memory.add(self.state.current.value());
        debug!(memory = self.memory.recall(), "memory add");
    }

    pub fn memory_subtract(&mut self) {
        self.memory.subtract(self.state.current.value());
        debug!(memory = self.memory.recall(), "memory subtract");
    }

    /// Show a computed result and log it; a failed or non-finite result
    /// shows the sentinel and is not logged.
    fn finish(&mut self, expression: String, result: Option<String>) {
        match result.map(Operand::from_display) {
            Some(operand) if !operand.is_error() => {
                let entry = format!("{expression} = {operand}");
                debug!(%entry, "computed");
                self.state.current = operand;
                self.history.append(entry);
            }
            _ => {
                debug!(%expression, "arithmetic error");
                self.state.current = Operand::error();
            }
        }
    }
}
