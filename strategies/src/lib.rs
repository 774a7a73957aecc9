pub mod input_player;

use std::str::FromStr;

use itertools::Itertools;
use thiserror::Error;
use types::{trick_cmp, trump_cmp, Card, Player, Suit, TrumpRound};

pub use crate::input_player::HumanPlayer;

const HAND_SIZE: usize = 5;

/// The closed set of player strategy tags accepted on the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StrategyKind {
    Simple,
    Human,
}

#[derive(Debug, Error)]
#[error("unknown player strategy: {0:?}")]
pub struct UnknownStrategy(pub String);

impl FromStr for StrategyKind {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Simple" => Ok(StrategyKind::Simple),
            "Human" => Ok(StrategyKind::Human),
            other => Err(UnknownStrategy(other.to_string())),
        }
    }
}

pub fn player_factory(name: &str, kind: StrategyKind) -> Box<dyn Player> {
    match kind {
        StrategyKind::Simple => Box::new(SimplePlayer::new(name)),
        StrategyKind::Human => Box::new(HumanPlayer::new(name)),
    }
}

/// The scripted heuristic: orders up on high trump, leads its best
/// off-suit card, follows as high as it can, and sluffs or discards its
/// plain-lowest card. The hand is kept sorted in the context-free order,
/// so index 0 is always the plain-lowest card.
#[derive(Debug)]
pub struct SimplePlayer {
    name: String,
    hand: Vec<Card>,
}

impl SimplePlayer {
    pub fn new(name: &str) -> Self {
        SimplePlayer {
            name: name.to_string(),
            hand: Vec::with_capacity(HAND_SIZE + 1),
        }
    }

    /// Cards that would be both trump and face-or-ace if `trump` were
    /// named. This is the order-up signal.
    fn high_trump_count(&self, trump: Suit) -> usize {
        self.hand
            .iter()
            .filter(|card| card.is_trump(trump) && card.is_face_or_ace())
            .count()
    }
}

impl Player for SimplePlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn add_card(&mut self, card: Card) {
        assert!(
            self.hand.len() < HAND_SIZE,
            "{} was dealt a sixth card",
            self.name
        );
        self.hand.push(card);
        self.hand.sort();
    }

    fn make_trump(&self, upcard: &Card, is_dealer: bool, round: TrumpRound) -> Option<Suit> {
        match round {
            TrumpRound::First => {
                let proposed = upcard.suit();
                (self.high_trump_count(proposed) >= 2).then_some(proposed)
            }
            TrumpRound::Second => {
                let proposed = upcard.suit().next();
                (is_dealer || self.high_trump_count(proposed) >= 1).then_some(proposed)
            }
        }
    }

    fn add_and_discard(&mut self, upcard: Card) {
        assert_eq!(
            self.hand.len(),
            HAND_SIZE,
            "{} picked up the upcard without a full hand",
            self.name
        );
        self.hand.push(upcard);
        // Discard the plain-lowest of the six, upcard included.
        let lowest = self
            .hand
            .iter()
            .position_min()
            .expect("the discard window holds six cards");
        let discarded = self.hand.remove(lowest);
        log::debug!("{} discards {}", self.name, discarded);
        self.hand.sort();
    }

    fn lead_card(&mut self, trump: Suit) -> Card {
        assert!(!self.hand.is_empty(), "{} led from an empty hand", self.name);
        // Highest non-trump; the sorted hand makes that the last
        // off-suit position.
        if let Some(index) = self
            .hand
            .iter()
            .positions(|card| !card.is_trump(trump))
            .last()
        {
            return self.hand.remove(index);
        }
        // All trump: lead the boss card.
        let index = (0..self.hand.len())
            .max_by(|&a, &b| trump_cmp(&self.hand[a], &self.hand[b], trump))
            .expect("hand is not empty");
        self.hand.remove(index)
    }

    fn play_card(&mut self, led_card: &Card, trump: Suit) -> Card {
        assert!(
            !self.hand.is_empty(),
            "{} played from an empty hand",
            self.name
        );
        let led_suit = led_card.effective_suit(trump);
        let followers = self
            .hand
            .iter()
            .positions(|card| card.effective_suit(trump) == led_suit)
            .collect::<Vec<_>>();
        if let Some(&index) = followers
            .iter()
            .max_by(|&&a, &&b| trick_cmp(&self.hand[a], &self.hand[b], led_card, trump))
        {
            return self.hand.remove(index);
        }
        // Cannot follow: sluff the plain-lowest card, even when that
        // happens to be a low trump.
        self.hand.remove(0)
    }
}
