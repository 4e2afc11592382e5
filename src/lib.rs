//! Tidepool: a handful of tiny ocean-themed terminal games driven by one
//! turn-based session loop.
//!
//! Each game supplies its session state, a transition rule and a termination
//! predicate; [`session::SessionLoop`] drives input, random draws and
//! narration until the game reports its concluding message.

pub mod app;
pub mod config;
pub mod error;
pub mod games;
pub mod input;
pub mod random;
pub mod session;

pub use config::GamesConfig;
pub use error::{Result, TidepoolError};
pub use input::{LineInput, ScriptedInput, StdinInput};
pub use random::{FixedRandom, RandomSource, ThreadRandom};
pub use session::{Game, Pacing, SessionLoop, SessionReport, Status, Turn, TurnInput};
