pub mod card;
pub mod pack;
pub mod player;
pub mod trick;

pub use card::{trick_cmp, trump_cmp, Card, ParseCardError, Rank, Suit};
pub use pack::{Pack, PackError, PACK_SIZE};
pub use player::{Player, TrumpRound};
pub use trick::winning_seat;
