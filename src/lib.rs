//! Self-playing Battleship: fleet placement, hunt/destroy targeting, a
//! two-player turn engine and post-game reports.

mod board;
mod common;
mod config;
mod coord_set;
mod game;
mod logging;
mod performance;
mod placement;
pub mod prelude;
pub mod render;
mod ship;
pub mod simulation;
mod store;
mod targeting;

pub use board::*;
pub use common::*;
pub use config::*;
pub use coord_set::{CoordSet, Members};
pub use game::*;
pub use logging::{init_logging, level_from_env, LOG_ENV};
pub use performance::*;
pub use placement::*;
pub use ship::*;
pub use simulation::{run_batch, CompletedGame, Simulation};
pub use store::*;
pub use targeting::*;
