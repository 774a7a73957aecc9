use std::cmp::Ordering;

use crate::card::{trick_cmp, Card, Suit};

/// Index into `plays` of the card that takes the trick. `plays[0]` is the
/// led card; callers map the index back to whichever seat led. A linear
/// scan with `trick_cmp` suffices because the bower rules make it a
/// strict total order over any four distinct cards.
pub fn winning_seat(plays: &[Card], trump: Suit) -> usize {
    assert!(!plays.is_empty(), "cannot resolve an empty trick");
    let led_card = plays[0];
    let mut best = 0;
    for (seat, card) in plays.iter().enumerate().skip(1) {
        if trick_cmp(&plays[best], card, &led_card, trump) == Ordering::Less {
            best = seat;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trick(names: [&str; 4]) -> Vec<Card> {
        names
            .iter()
            .map(|s| s.parse().expect("test cards are well formed"))
            .collect()
    }

    #[test]
    fn lone_trump_takes_the_trick() {
        let plays = trick([
            "Nine of Clubs",
            "Ace of Hearts",
            "King of Spades",
            "Queen of Clubs",
        ]);
        assert_eq!(winning_seat(&plays, Suit::Spades), 2);
    }

    #[test]
    fn highest_of_led_suit_wins_without_trump() {
        let plays = trick([
            "Nine of Clubs",
            "Ace of Hearts",
            "King of Hearts",
            "Queen of Clubs",
        ]);
        assert_eq!(winning_seat(&plays, Suit::Diamonds), 3);
    }

    #[test]
    fn right_bower_beats_left_bower_beats_trump_ace() {
        let plays = trick([
            "Ace of Hearts",
            "Jack of Diamonds",
            "Jack of Hearts",
            "Nine of Hearts",
        ]);
        assert_eq!(winning_seat(&plays, Suit::Hearts), 2);
    }

    #[test]
    fn left_bower_counts_as_trump_not_its_printed_suit() {
        // Diamonds led; the Jack of Diamonds is a heart when hearts are
        // trump, so it trumps in rather than following.
        let plays = trick([
            "Ace of Diamonds",
            "Jack of Diamonds",
            "King of Diamonds",
            "Nine of Clubs",
        ]);
        assert_eq!(winning_seat(&plays, Suit::Hearts), 1);
    }

    #[test]
    fn winner_is_independent_of_scan_pairing() {
        // Rotating the three followers never changes which card wins.
        let plays = trick([
            "Nine of Clubs",
            "Ten of Clubs",
            "Ace of Clubs",
            "King of Clubs",
        ]);
        assert_eq!(winning_seat(&plays, Suit::Hearts), 2);
        let rotated = trick([
            "Nine of Clubs",
            "King of Clubs",
            "Ten of Clubs",
            "Ace of Clubs",
        ]);
        assert_eq!(winning_seat(&rotated, Suit::Hearts), 3);
    }
}
