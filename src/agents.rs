//! Agents: pluggable actors that can play a hand for the user.
//!
//! The trait keeps the TUI thin: scene code ticks an agent against the
//! `GameEngine` boundary and never needs to know how decisions are made.

use crate::engine::GameEngine;
use crate::round::{ActionError, Phase};
use crate::strategy::Action;

/// An actor that may act for the player when a hand is in progress.
pub trait PlayerAgent {
    /// Called once per tick while auto-play is enabled. Returns `true` if an
    /// action was taken.
    fn on_tick(&mut self, engine: &mut dyn GameEngine) -> Result<bool, ActionError>;
}

/// Auto-play that follows the strategy engine's recommendation, substituting
/// Hit whenever the recommended Double or Split is not currently eligible
/// (after a hit, or a split already spent).
#[derive(Debug, Default)]
pub struct StrategyAgent;

impl StrategyAgent {
    pub fn new() -> Self {
        Self
    }
}

impl PlayerAgent for StrategyAgent {
    fn on_tick(&mut self, engine: &mut dyn GameEngine) -> Result<bool, ActionError> {
        if !matches!(engine.phase(), Phase::Playing) {
            return Ok(false);
        }
        let Some(advice) = engine.advice() else {
            return Ok(false);
        };
        match advice.action {
            Action::Hit => engine.action_hit()?,
            Action::Stand => engine.action_stand()?,
            Action::Double if engine.can_double() => engine.action_double()?,
            Action::Split if engine.can_split() => engine.action_split()?,
            Action::Double | Action::Split => engine.action_hit()?,
        }
        Ok(true)
    }
}
