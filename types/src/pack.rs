use std::io::BufRead;

use itertools::Itertools;
use thiserror::Error;

use crate::card::{Card, ParseCardError, Rank, Suit};

pub const PACK_SIZE: usize = 24;

/// The 24-card Euchre pack plus a deal cursor. Construction and
/// `shuffle`/`reset` are the only ways the card order changes;
/// `deal_one` only advances the cursor.
#[derive(Clone, Debug)]
pub struct Pack {
    cards: [Card; PACK_SIZE],
    next: usize,
}

#[derive(Debug, Error)]
pub enum PackError {
    #[error("failed to read pack source")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Card(#[from] ParseCardError),
    #[error("pack source entry is not \"<Rank> of <Suit>\": {0:?}")]
    Form(String),
    #[error("{0} is not dealt in Euchre")]
    NotAGameCard(Card),
    #[error("pack source held {0} cards, expected {PACK_SIZE}")]
    WrongCount(usize),
}

impl Pack {
    /// The standard order: suits in enumeration order, each suit's cards
    /// ascending from Nine to Ace.
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(PACK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::GAME_RANKS {
                cards.push(Card::new(rank, suit));
            }
        }
        let cards = cards
            .try_into()
            .expect("suit/rank product is exactly PACK_SIZE");
        Pack { cards, next: 0 }
    }

    /// Reads a pack from a text source of exactly 24 whitespace-separated
    /// `<Rank> of <Suit>` entries. Anything else is a corrupted source and
    /// fails; the caller treats that as fatal.
    pub fn from_reader(mut source: impl BufRead) -> Result<Self, PackError> {
        let mut text = String::new();
        source.read_to_string(&mut text)?;

        let mut cards = Vec::new();
        for (rank, of, suit) in text.split_whitespace().tuples() {
            if of != "of" {
                return Err(PackError::Form(format!("{rank} {of} {suit}")));
            }
            let card = Card::new(rank.parse()?, suit.parse()?);
            if card.rank() < Rank::Nine {
                return Err(PackError::NotAGameCard(card));
            }
            cards.push(card);
        }
        // A trailing partial entry also means a corrupted source.
        let token_count = text.split_whitespace().count();
        if token_count % 3 != 0 || cards.len() != PACK_SIZE {
            return Err(PackError::WrongCount(token_count / 3));
        }

        let cards = cards.try_into().expect("length checked above");
        Ok(Pack { cards, next: 0 })
    }

    /// Deals the next card. Dealing from an empty pack is a caller bug.
    pub fn deal_one(&mut self) -> Card {
        assert!(self.next < PACK_SIZE, "dealt from an empty pack");
        let card = self.cards[self.next];
        self.next += 1;
        card
    }

    pub fn is_empty(&self) -> bool {
        self.next == PACK_SIZE
    }

    /// Rewinds the deal cursor without touching the card order.
    pub fn reset(&mut self) {
        self.next = 0;
    }

    /// Seven in-shuffle passes, then a reset. Deliberately deterministic:
    /// the same input order always produces the same output order.
    pub fn shuffle(&mut self) {
        for _ in 0..7 {
            self.cards = in_shuffle(&self.cards);
        }
        self.next = 0;
    }
}

impl Default for Pack {
    fn default() -> Self {
        Pack::new()
    }
}

/// One in-shuffle: cut into halves and interleave, second half first, so
/// both original end cards move to the interior.
fn in_shuffle(cards: &[Card; PACK_SIZE]) -> [Card; PACK_SIZE] {
    let mut shuffled = *cards;
    let mid = PACK_SIZE / 2;
    for i in 0..mid {
        shuffled[2 * i] = cards[mid + i];
        shuffled[2 * i + 1] = cards[i];
    }
    shuffled
}
