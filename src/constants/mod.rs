//! Game constants organized by domain.
//!
//! Constants are split into submodules by domain; everything is re-exported
//! here so callers can `use crate::constants::*`.

mod board;
mod gameplay;
mod time;

pub use board::*;
pub use gameplay::*;
pub use time::*;
