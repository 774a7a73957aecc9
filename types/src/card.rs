use std::{cmp::Ordering, fmt::Display, str::FromStr};

use thiserror::Error;

/// Card rank. Gameplay only deals Nine through Ace, but the full run of
/// ranks exists so the type works for any standard deck.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// The six ranks a Euchre pack is built from, lowest first.
    pub const GAME_RANKS: [Rank; 6] = [
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Rank::Two => "Two",
            Rank::Three => "Three",
            Rank::Four => "Four",
            Rank::Five => "Five",
            Rank::Six => "Six",
            Rank::Seven => "Seven",
            Rank::Eight => "Eight",
            Rank::Nine => "Nine",
            Rank::Ten => "Ten",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
            Rank::Ace => "Ace",
        }
    }
}

impl Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Rank {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rank::ALL
            .into_iter()
            .find(|rank| rank.name() == s)
            .ok_or_else(|| ParseCardError::Rank(s.to_string()))
    }
}

/// Card suit, in the canonical enumeration order used for pack
/// construction and context-free tie-breaking.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    Spades,
    Hearts,
    Clubs,
    Diamonds,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Clubs, Suit::Diamonds];

    /// The other suit of the same color. When a suit is trump, the Jack
    /// of `next()` is the left bower.
    pub fn next(self) -> Suit {
        match self {
            Suit::Spades => Suit::Clubs,
            Suit::Clubs => Suit::Spades,
            Suit::Hearts => Suit::Diamonds,
            Suit::Diamonds => Suit::Hearts,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Suit::Spades => "Spades",
            Suit::Hearts => "Hearts",
            Suit::Clubs => "Clubs",
            Suit::Diamonds => "Diamonds",
        }
    }
}

impl Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Suit {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Suit::ALL
            .into_iter()
            .find(|suit| suit.name() == s)
            .ok_or_else(|| ParseCardError::Suit(s.to_string()))
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseCardError {
    #[error("unrecognized rank: {0:?}")]
    Rank(String),
    #[error("unrecognized suit: {0:?}")]
    Suit(String),
    #[error("expected \"<Rank> of <Suit>\", got {0:?}")]
    Form(String),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Card { rank, suit }
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }

    pub fn suit(&self) -> Suit {
        self.suit
    }

    pub fn is_face_or_ace(&self) -> bool {
        matches!(self.rank, Rank::Jack | Rank::Queen | Rank::King | Rank::Ace)
    }

    /// The Jack of the trump suit, highest card in the hand.
    pub fn is_right_bower(&self, trump: Suit) -> bool {
        self.rank == Rank::Jack && self.suit == trump
    }

    /// The Jack of trump's same-color partner suit, second highest.
    pub fn is_left_bower(&self, trump: Suit) -> bool {
        self.rank == Rank::Jack && self.suit == trump.next()
    }

    pub fn is_trump(&self, trump: Suit) -> bool {
        self.suit == trump || self.is_left_bower(trump)
    }

    /// The suit this card plays as: the left bower counts as trump,
    /// every other card as its printed suit. Follow-suit legality and
    /// trick resolution go through this, never through `suit()`.
    pub fn effective_suit(&self, trump: Suit) -> Suit {
        if self.is_left_bower(trump) {
            trump
        } else {
            self.suit
        }
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_whitespace().collect::<Vec<_>>().as_slice() {
            [rank, "of", suit] => Ok(Card::new(rank.parse()?, suit.parse()?)),
            _ => Err(ParseCardError::Form(s.to_string())),
        }
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Context-free order: rank first, suit enumeration order breaking ties.
/// Knows nothing about trump; see `trump_cmp` and `trick_cmp` for the
/// game-aware orders.
impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank
            .cmp(&other.rank)
            .then_with(|| self.suit.cmp(&other.suit))
    }
}

/// Total order under a named trump suit, ignoring any led card: right
/// bower above everything, then the left bower, then the remaining trump
/// by rank, then all plain cards in context-free order.
pub fn trump_cmp(a: &Card, b: &Card, trump: Suit) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }
    if a.is_right_bower(trump) {
        return Ordering::Greater;
    }
    if b.is_right_bower(trump) {
        return Ordering::Less;
    }
    if a.is_left_bower(trump) {
        return Ordering::Greater;
    }
    if b.is_left_bower(trump) {
        return Ordering::Less;
    }
    match (a.is_trump(trump), b.is_trump(trump)) {
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        _ => a.cmp(b),
    }
}

/// The authoritative order for deciding a trick: trump beats non-trump,
/// a card following the led card's effective suit beats one that does
/// not, and otherwise `trump_cmp` (within trump) or the context-free
/// order (within the led suit or between two sluffs) decides.
pub fn trick_cmp(a: &Card, b: &Card, led_card: &Card, trump: Suit) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }
    let led_suit = led_card.effective_suit(trump);
    match (a.is_trump(trump), b.is_trump(trump)) {
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (true, true) => trump_cmp(a, b, trump),
        (false, false) => match (a.suit() == led_suit, b.suit() == led_suit) {
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            _ => a.cmp(b),
        },
    }
}
