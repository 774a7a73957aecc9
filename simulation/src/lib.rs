pub mod error;
pub mod game;

pub use error::EuchreError;
pub use game::{Game, NUM_PLAYERS};
