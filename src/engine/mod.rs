//! Game engine - owns all game state and provides a clean API to the host.
//!
//! The engine handles:
//! - Level state (world, grid, controlled entity)
//! - Turn sequencing through the [`TurnScheduler`]
//! - Simulation advancement on host-supplied time
//! - Forwarding events to the host's [`Presentation`]
//!
//! The host only forwards move requests and elapsed time, then renders
//! whatever it likes from the world.

mod game_state;
mod simulation;

pub use game_state::GameState;
pub use simulation::{autonomous_step, TurnResult};

use hecs::{Entity, World};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::components::{Direction, Position};
use crate::config::GameConfig;
use crate::error::Result;
use crate::events::{EventQueue, GameEvent};
use crate::grid::Grid;
use crate::presentation::{self, Presentation};
use crate::spawning::Palette;
use crate::systems::{self, PlayerTurn};
use crate::turn_scheduler::{Due, TurnPhase, TurnScheduler, TurnState};

/// The game engine - owns all game state and simulation logic.
pub struct GameEngine<P: Presentation> {
    pub config: GameConfig,

    /// Object variants the generator draws from
    pub palette: Palette,

    /// Current level state
    pub state: GameState,

    /// Who may act, and when
    pub scheduler: TurnScheduler,

    /// Events not yet handed to the presentation
    pub events: EventQueue,

    rng: StdRng,
    presentation: P,
}

impl<P: Presentation> GameEngine<P> {
    /// Start a new game on level 1.
    pub fn new(config: GameConfig, seed: u64, presentation: P) -> Result<Self> {
        Self::starting_at(config, Palette::default(), 1, seed, presentation)
    }

    /// Start a new game on an arbitrary level with a custom palette.
    pub fn starting_at(
        config: GameConfig,
        palette: Palette,
        level: u32,
        seed: u64,
        presentation: P,
    ) -> Result<Self> {
        config.validate()?;
        let mut rng = StdRng::seed_from_u64(seed);
        let state = GameState::generate(&config, &palette, level, config.starting_food, &mut rng)?;

        let mut engine = Self {
            scheduler: TurnScheduler::new(config.turn_delay),
            config,
            palette,
            state,
            events: EventQueue::new(),
            rng,
            presentation,
        };
        engine.enter_level();
        engine.flush_events();
        Ok(engine)
    }

    /// Advance the simulation by `dt` seconds.
    pub fn tick(&mut self, dt: f32) -> Result<()> {
        puffin::profile_function!();
        systems::advance_motions(&mut self.state.world, dt, &mut self.events);
        self.scheduler.advance(dt);
        let result = self.run_due();
        self.flush_events();
        result
    }

    /// Request a one-cell move of the controlled entity.
    ///
    /// `(dx, dy)` must be a unit step along one axis. Outside the controlled
    /// turn the request is ignored with [`TurnResult::NotReady`].
    pub fn attempt_player_move(&mut self, dx: i32, dy: i32) -> Result<TurnResult> {
        let direction = Direction::from_delta(dx, dy)?;
        if !self.scheduler.can_player_act() {
            return Ok(TurnResult::NotReady);
        }

        let turn = systems::player_move(
            &mut self.state.world,
            &self.state.grid,
            self.state.player,
            direction,
            self.config.food_per_move,
            &mut self.events,
        )?;

        let result = match turn {
            PlayerTurn::NotAccepted(obstruction) => TurnResult::Blocked(obstruction),
            PlayerTurn::Accepted {
                outcome,
                food_left,
                starved,
                reached_exit,
            } => {
                if starved || food_left <= 0 {
                    self.enter_game_over();
                } else if reached_exit {
                    info!("day {} cleared with {food_left} food", self.state.level);
                    self.events.push(GameEvent::ExitReached {
                        level: self.state.level,
                    });
                    self.scheduler
                        .schedule_restart(self.config.restart_level_delay);
                } else {
                    self.start_autonomous_round();
                }
                TurnResult::Accepted(outcome)
            }
        };

        self.flush_events();
        Ok(result)
    }

    pub fn phase(&self) -> TurnPhase {
        self.scheduler.phase()
    }

    pub fn turn_state(&self) -> TurnState {
        self.scheduler.turn_state()
    }

    pub fn is_game_over(&self) -> bool {
        self.phase() == TurnPhase::GameOver
    }

    pub fn level(&self) -> u32 {
        self.state.level
    }

    pub fn food(&self) -> i32 {
        self.state.food()
    }

    pub fn player_entity(&self) -> Entity {
        self.state.player
    }

    pub fn player_position(&self) -> Option<Position> {
        self.state.player_position()
    }

    /// Autonomous entities in move order
    pub fn enemies(&self) -> Vec<Entity> {
        self.scheduler.autonomous().collect()
    }

    pub fn world(&self) -> &World {
        &self.state.world
    }

    pub fn grid(&self) -> &Grid {
        &self.state.grid
    }

    pub fn presentation(&self) -> &P {
        &self.presentation
    }

    pub fn presentation_mut(&mut self) -> &mut P {
        &mut self.presentation
    }

    fn run_due(&mut self) -> Result<()> {
        while let Some(due) = self.scheduler.next_due() {
            match due {
                Due::StartLevel { level } => self.load_level(level)?,
                Due::SetupFinished { level } => {
                    debug!("day {level} setup finished");
                    self.events.push(GameEvent::SetupFinished { level });
                }
                Due::MoveAutonomous(entity) => {
                    autonomous_step(&mut self.state, entity, &mut self.events)?;
                    if self.state.is_starving() {
                        self.enter_game_over();
                    }
                }
                Due::RoundFinished => self.events.push(GameEvent::RoundFinished),
            }
        }
        Ok(())
    }

    /// Replace the current level. On error the old level stays in place and
    /// the scheduler keeps waiting to start the new one.
    fn load_level(&mut self, level: u32) -> Result<()> {
        let food = self.state.food();
        self.state =
            GameState::generate(&self.config, &self.palette, level, food, &mut self.rng)?;
        self.enter_level();
        Ok(())
    }

    fn enter_level(&mut self) {
        let level = self.state.level;
        self.scheduler
            .begin_level(level, self.config.level_start_delay);
        for (entity, move_time) in self.state.autonomous_entities() {
            self.scheduler.register_autonomous(entity, move_time);
        }
        info!(
            "day {level}: {} enemies, {} food carried",
            self.state.enemies.len(),
            self.state.food()
        );
        self.events.push(GameEvent::LevelStarted { level });
    }

    fn start_autonomous_round(&mut self) {
        let world = &self.state.world;
        self.scheduler.prune(|e| world.contains(e));
        if self.scheduler.end_controlled_turn() {
            self.events.push(GameEvent::RoundStarted {
                autonomous: self.scheduler.autonomous().count(),
            });
        }
    }

    fn enter_game_over(&mut self) {
        let level = self.state.level;
        info!("starved on day {level}");
        self.scheduler.game_over();
        self.events.push(GameEvent::GameOver { level });
    }

    fn flush_events(&mut self) {
        for event in self.events.drain() {
            presentation::present(&event, &mut self.presentation);
        }
    }
}
