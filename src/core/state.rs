//! Entry state of the calculator engine.
//!
//! The engine has no explicit state enum; its configuration is the pair
//! (pending operator set?, awaiting fresh entry?). [`Phase`] names the four
//! reachable combinations for inspection and logging.

use super::operand::Operand;
use super::operator::Operator;
use serde::{Deserialize, Serialize};

/// Left operand and operator stored between an operator press and the
/// computation that consumes them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PendingOperation {
    pub left: Operand,
    pub operator: Operator,
}

/// Named view of the engine's flag pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// No operator, extending the current operand.
    Idle,
    /// Operator just pressed; the next digit starts the right operand.
    FreshAfterOp,
    /// Operator pending while the right operand is typed.
    AccumulatingAfterOp,
    /// A result is shown; the next digit starts a new expression.
    FreshAfterCompute,
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::FreshAfterOp => "FreshAfterOp",
            Self::AccumulatingAfterOp => "AccumulatingAfterOp",
            Self::FreshAfterCompute => "FreshAfterCompute",
        }
    }

    /// Whether the next digit replaces the display.
    pub fn awaits_fresh_entry(&self) -> bool {
        matches!(self, Self::FreshAfterOp | Self::FreshAfterCompute)
    }
}

/// Mutable entry state.
///
/// Previous operand and operator live together in [`PendingOperation`], so
/// one is set exactly when the other is.
///
/// # Example
///
/// ```rust
/// use deskcalc::core::{EngineState, Phase};
///
/// let state = EngineState::default();
/// assert_eq!(state.current.as_str(), "0");
/// assert_eq!(state.phase(), Phase::Idle);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineState {
    pub current: Operand,
    pub pending: Option<PendingOperation>,
    pub awaiting_fresh_entry: bool,
}

impl EngineState {
    pub fn previous(&self) -> Option<&Operand> {
        self.pending.as_ref().map(|p| &p.left)
    }

    pub fn operator(&self) -> Option<Operator> {
        self.pending.as_ref().map(|p| p.operator)
    }

    pub fn phase(&self) -> Phase {
        match (self.pending.is_some(), self.awaiting_fresh_entry) {
            (false, false) => Phase::Idle,
            (true, true) => Phase::FreshAfterOp,
            (true, false) => Phase::AccumulatingAfterOp,
            (false, true) => Phase::FreshAfterCompute,
        }
    }

    /// An operator is pending and its right operand has been typed.
    ///
    /// Pressing another operator in this configuration first evaluates the
    /// pending operation, which is what makes chains evaluate strictly
    /// left to right.
    pub fn has_complete_operation(&self) -> bool {
        self.phase() == Phase::AccumulatingAfterOp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(pending: bool, awaiting: bool) -> EngineState {
        EngineState {
            current: Operand::from_display("3"),
            pending: pending.then(|| PendingOperation {
                left: Operand::from_display("2"),
                operator: Operator::Add,
            }),
            awaiting_fresh_entry: awaiting,
        }
    }

    #[test]
    fn phase_covers_all_flag_pairs() {
        assert_eq!(state(false, false).phase(), Phase::Idle);
        assert_eq!(state(true, true).phase(), Phase::FreshAfterOp);
        assert_eq!(state(true, false).phase(), Phase::AccumulatingAfterOp);
        assert_eq!(state(false, true).phase(), Phase::FreshAfterCompute);
    }

    #[test]
    fn previous_and_operator_travel_together() {
        let pending = state(true, false);
        assert_eq!(pending.previous().map(Operand::as_str), Some("2"));
        assert_eq!(pending.operator(), Some(Operator::Add));

        let idle = state(false, false);
        assert!(idle.previous().is_none());
        assert!(idle.operator().is_none());
    }

    #[test]
    fn only_accumulating_phase_completes_an_operation() {
        assert!(state(true, false).has_complete_operation());
        assert!(!state(true, true).has_complete_operation());
        assert!(!state(false, false).has_complete_operation());
        assert!(!state(false, true).has_complete_operation());
    }

    #[test]
    fn phase_reports_fresh_entry() {
        assert!(Phase::FreshAfterOp.awaits_fresh_entry());
        assert!(Phase::FreshAfterCompute.awaits_fresh_entry());
        assert!(!Phase::Idle.awaits_fresh_entry());
        assert!(!Phase::AccumulatingAfterOp.awaits_fresh_entry());
        assert_eq!(Phase::AccumulatingAfterOp.name(), "AccumulatingAfterOp");
    }

    #[test]
    fn state_serializes_correctly() {
        let original = state(true, false);
        let json = serde_json::to_string(&original).unwrap();
        let restored: EngineState = serde_json::from_str(&json).unwrap();
        assert_eq!(original, restored);
    }
}
