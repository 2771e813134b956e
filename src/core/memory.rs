//! Single-value memory register (MC / MR / M+ / M-).

use serde::{Deserialize, Serialize};

/// Numeric accumulator independent of the entry state.
///
/// Operands are accumulated as given; non-finite values are not
/// special-cased.
///
/// # Example
///
/// ```rust
/// use deskcalc::core::MemoryRegister;
///
/// let mut memory = MemoryRegister::new();
/// memory.add(12.0);
/// memory.subtract(2.5);
/// assert_eq!(memory.recall(), 9.5);
///
/// memory.clear();
/// assert_eq!(memory.recall(), 0.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryRegister {
    value: f64,
}

impl MemoryRegister {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.value = 0.0;
    }

    pub fn recall(&self) -> f64 {
        self.value
    }

    pub fn add(&mut self, operand: f64) {
        self.value += operand;
    }

    pub fn subtract(&mut self, operand: f64) {
        self.value -= operand;
    }

    /// Whether the register holds anything other than zero.
    pub fn is_set(&self) -> bool {
        self.value != 0.0
    }
}
