use std::fmt::Debug;

use crate::card::{Card, Suit};

/// Which round of trump-making a `make_trump` call belongs to. The
/// proposed suit follows from the round: the upcard's suit in the first
/// round, its same-color partner in the second (the upcard's own suit
/// has been turned down by then).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TrumpRound {
    First,
    Second,
}

/// The capability set the game loop drives. Implementations own their
/// hand exclusively; hand size stays at five except inside the
/// `add_and_discard` window, and breaching that is a programmer error,
/// not a recoverable one.
pub trait Player: Debug {
    fn name(&self) -> &str;

    /// Inserts a dealt card. Must not grow the hand past five.
    fn add_card(&mut self, card: Card);

    /// Returns `Some(suit)` to order up the round's proposed suit, or
    /// `None` to pass. `is_dealer` is set only on the forced
    /// second-round call to the dealer, who must then order up.
    fn make_trump(&self, upcard: &Card, is_dealer: bool, round: TrumpRound) -> Option<Suit>;

    /// Picks up the upcard and discards down to five. Called on the
    /// dealer when the first round is ordered up.
    fn add_and_discard(&mut self, upcard: Card);

    /// Removes and returns the card that starts a trick.
    fn lead_card(&mut self, trump: Suit) -> Card;

    /// Removes and returns a card, following the led card's effective
    /// suit when the hand allows it.
    fn play_card(&mut self, led_card: &Card, trump: Suit) -> Card;
}
