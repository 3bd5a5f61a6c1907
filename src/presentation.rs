//! Seam to the host's audio and UI.
//!
//! The core never renders or plays anything itself. It only asks for a
//! sound, an overlay, or reports that the controlled entity starved.

use crate::events::{GameEvent, SoundClip};

/// Requests the core makes of the host. All calls are fire-and-forget.
pub trait Presentation {
    /// Play one of two interchangeable clips, chosen by the host.
    fn play_random_one_of(&mut self, a: SoundClip, b: SoundClip);

    fn play_single(&mut self, clip: SoundClip);

    /// Put up the blocking overlay with a caption.
    fn show_overlay(&mut self, text: &str);

    fn hide_overlay(&mut self);

    /// The controlled entity's food reached zero on `level`.
    fn resource_depleted(&mut self, level: u32);
}

/// Presentation that ignores every request (headless hosts, tests).
#[derive(Debug, Default, Clone, Copy)]
pub struct NullPresentation;

impl Presentation for NullPresentation {
    fn play_random_one_of(&mut self, _a: SoundClip, _b: SoundClip) {}
    fn play_single(&mut self, _clip: SoundClip) {}
    fn show_overlay(&mut self, _text: &str) {}
    fn hide_overlay(&mut self) {}
    fn resource_depleted(&mut self, _level: u32) {}
}

/// Caption shown while a level is being set up.
pub fn level_caption(level: u32) -> String {
    format!("Day {level}")
}

/// Caption shown once the game is over.
pub fn game_over_caption(level: u32) -> String {
    format!("After {level} days, you starved.")
}

/// Translate one core event into presentation requests.
pub fn present(event: &GameEvent, presentation: &mut dyn Presentation) {
    match event {
        GameEvent::LevelStarted { level } => presentation.show_overlay(&level_caption(*level)),
        GameEvent::SetupFinished { .. } => presentation.hide_overlay(),
        GameEvent::MoveStarted {
            by_player: true, ..
        } => presentation.play_random_one_of(SoundClip::Footstep1, SoundClip::Footstep2),
        GameEvent::WallChopped { .. } | GameEvent::WallDestroyed { .. } => {
            presentation.play_random_one_of(SoundClip::Chop1, SoundClip::Chop2)
        }
        GameEvent::PlayerBitten { .. } => {
            presentation.play_random_one_of(SoundClip::EnemyAttack1, SoundClip::EnemyAttack2)
        }
        GameEvent::FoodCollected { sounds, .. } => presentation.play_random_one_of(sounds.0, sounds.1),
        GameEvent::GameOver { level } => {
            presentation.play_single(SoundClip::GameOver);
            presentation.show_overlay(&game_over_caption(*level));
            presentation.resource_depleted(*level);
        }
        GameEvent::MoveStarted { .. }
        | GameEvent::MoveFinished { .. }
        | GameEvent::ExitReached { .. }
        | GameEvent::RoundStarted { .. }
        | GameEvent::RoundFinished => {}
    }
}
