//! Turn execution for both sides of the table.

use hecs::Entity;

use crate::events::EventQueue;
use crate::linecast::Obstruction;
use crate::systems::{ai, MoveOutcome};

use super::GameState;

/// Result of attempting a controlled move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnResult {
    /// The move was accepted and the turn has passed on
    Accepted(MoveOutcome),
    /// Nothing happened; it is still the controlled entity's turn
    Blocked(Obstruction),
    /// It is not the controlled entity's turn
    NotReady,
}

impl TurnResult {
    pub fn is_accepted(&self) -> bool {
        matches!(self, TurnResult::Accepted(_))
    }
}

/// Give one autonomous entity its move against the controlled entity.
pub fn autonomous_step(
    state: &mut GameState,
    entity: Entity,
    events: &mut EventQueue,
) -> crate::error::Result<Option<MoveOutcome>> {
    puffin::profile_function!();
    if !state.world.contains(entity) {
        return Ok(None);
    }
    ai::take_turn(&mut state.world, &state.grid, entity, state.player, events)
}
