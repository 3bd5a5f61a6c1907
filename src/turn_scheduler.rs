//! Turn sequencing between the controlled entity and autonomous entities.
//!
//! The scheduler owns no game objects. It tracks which side may act, paces
//! the autonomous round on simulated time, and tells the engine what is due
//! next through [`TurnScheduler::next_due`]. Time only moves when the host
//! calls [`TurnScheduler::advance`].

use hecs::Entity;
use log::debug;

/// Coarse phase of the turn cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnPhase {
    /// A level is being laid out or its overlay is still up
    Setup,
    /// Waiting for the controlled entity to make an accepted move
    ControlledTurn,
    /// Autonomous entities are taking their moves one by one
    AutonomousTurn,
    /// Terminal; nothing is ever scheduled again
    GameOver,
}

/// Flag view of the phase, for hosts that gate input on booleans
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnState {
    pub players_turn: bool,
    pub enemies_moving: bool,
    pub doing_setup: bool,
}

/// Something the engine must do now
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Due {
    /// The restart delay elapsed; generate the next level and call `begin_level`
    StartLevel { level: u32 },
    /// The overlay delay elapsed; the controlled turn has begun
    SetupFinished { level: u32 },
    /// Give this autonomous entity its move
    MoveAutonomous(Entity),
    /// Everyone has moved; the controlled turn has begun
    RoundFinished,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum SetupStage {
    AwaitingRestart { remaining: f32 },
    ShowingOverlay { remaining: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct AutonomousRound {
    cursor: usize,
    /// Time that must pass before the next step
    wait: f32,
}

/// An autonomous entity and the pacing delay that follows its move
#[derive(Debug, Clone, Copy, PartialEq)]
struct Registered {
    entity: Entity,
    move_time: f32,
}

/// Turn state machine: Setup -> ControlledTurn -> AutonomousTurn -> ...
#[derive(Debug, Clone)]
pub struct TurnScheduler {
    phase: TurnPhase,
    level: u32,
    turn_delay: f32,
    setup: Option<SetupStage>,
    round: Option<AutonomousRound>,
    /// Autonomous entities in registration order
    autonomous: Vec<Registered>,
    /// Simulated time received but not yet spent on waits
    budget: f32,
}

impl TurnScheduler {
    pub fn new(turn_delay: f32) -> Self {
        Self {
            phase: TurnPhase::Setup,
            level: 0,
            turn_delay,
            setup: None,
            round: None,
            autonomous: Vec::new(),
            budget: 0.0,
        }
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn turn_state(&self) -> TurnState {
        TurnState {
            players_turn: self.phase == TurnPhase::ControlledTurn,
            enemies_moving: self.phase == TurnPhase::AutonomousTurn,
            doing_setup: self.phase == TurnPhase::Setup,
        }
    }

    /// The controlled entity may only act during its own turn.
    pub fn can_player_act(&self) -> bool {
        self.phase == TurnPhase::ControlledTurn
    }

    pub fn autonomous(&self) -> impl Iterator<Item = Entity> + '_ {
        self.autonomous.iter().map(|r| r.entity)
    }

    /// Enter Setup for `level`: clear the autonomous list, then the engine
    /// registers the freshly generated entities. The overlay stays up for
    /// `overlay_delay` seconds.
    pub fn begin_level(&mut self, level: u32, overlay_delay: f32) {
        if self.phase == TurnPhase::GameOver {
            return;
        }
        self.phase = TurnPhase::Setup;
        self.level = level;
        self.autonomous.clear();
        self.round = None;
        self.budget = 0.0;
        self.setup = Some(SetupStage::ShowingOverlay {
            remaining: overlay_delay,
        });
    }

    /// Add an autonomous entity to the end of the move order.
    pub fn register_autonomous(&mut self, entity: Entity, move_time: f32) {
        self.autonomous.push(Registered { entity, move_time });
    }

    /// The level was completed; the next one starts after `delay`.
    pub fn schedule_restart(&mut self, delay: f32) {
        if self.phase == TurnPhase::GameOver {
            return;
        }
        self.phase = TurnPhase::Setup;
        self.round = None;
        self.budget = 0.0;
        self.setup = Some(SetupStage::AwaitingRestart { remaining: delay });
    }

    /// Drop entities that no longer exist. Only valid between rounds.
    pub fn prune(&mut self, alive: impl Fn(Entity) -> bool) {
        debug_assert!(self.round.is_none(), "autonomous list mutated mid-round");
        self.autonomous.retain(|r| alive(r.entity));
    }

    /// The controlled entity made an accepted move; hand over to the
    /// autonomous side. Returns false (and does nothing) outside the
    /// controlled turn.
    pub fn end_controlled_turn(&mut self) -> bool {
        if self.phase != TurnPhase::ControlledTurn {
            return false;
        }
        // An empty list still waits the extra delay so cadence is constant.
        let wait = if self.autonomous.is_empty() {
            self.turn_delay * 2.0
        } else {
            self.turn_delay
        };
        self.phase = TurnPhase::AutonomousTurn;
        self.round = Some(AutonomousRound { cursor: 0, wait });
        self.budget = 0.0;
        debug!("autonomous round: {} entities", self.autonomous.len());
        true
    }

    /// Terminal transition, allowed from any phase.
    pub fn game_over(&mut self) {
        self.phase = TurnPhase::GameOver;
        self.setup = None;
        self.round = None;
        self.budget = 0.0;
    }

    /// Let `dt` seconds of simulated time pass.
    pub fn advance(&mut self, dt: f32) {
        match self.phase {
            TurnPhase::Setup | TurnPhase::AutonomousTurn => self.budget += dt,
            TurnPhase::ControlledTurn | TurnPhase::GameOver => {}
        }
    }

    /// Pop the next thing that is due given the time received so far.
    /// Call repeatedly until it returns `None`.
    pub fn next_due(&mut self) -> Option<Due> {
        puffin::profile_function!();
        match self.phase {
            TurnPhase::Setup => self.next_setup_step(),
            TurnPhase::AutonomousTurn => self.next_round_step(),
            TurnPhase::ControlledTurn | TurnPhase::GameOver => None,
        }
    }

    fn next_setup_step(&mut self) -> Option<Due> {
        match self.setup? {
            SetupStage::AwaitingRestart { remaining } => {
                // Stays pending until the engine calls begin_level.
                (self.budget >= remaining).then_some(Due::StartLevel {
                    level: self.level + 1,
                })
            }
            SetupStage::ShowingOverlay { remaining } => {
                if self.budget < remaining {
                    return None;
                }
                self.setup = None;
                self.budget = 0.0;
                self.phase = TurnPhase::ControlledTurn;
                Some(Due::SetupFinished { level: self.level })
            }
        }
    }

    fn next_round_step(&mut self) -> Option<Due> {
        let mut round = self.round?;
        if self.budget < round.wait {
            return None;
        }
        self.budget -= round.wait;

        let due = match self.autonomous.get(round.cursor) {
            Some(next) => {
                round.cursor += 1;
                round.wait = next.move_time;
                self.round = Some(round);
                Due::MoveAutonomous(next.entity)
            }
            None => {
                self.round = None;
                self.budget = 0.0;
                self.phase = TurnPhase::ControlledTurn;
                Due::RoundFinished
            }
        };
        Some(due)
    }
}
