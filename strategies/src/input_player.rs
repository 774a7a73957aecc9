use std::io;

use regex::Regex;
use types::{Card, Player, Suit, TrumpRound};

/// Interactive player driven over stdin/stdout. Every decision prints
/// the sorted hand and prompts until a legal reply arrives; malformed
/// input is logged and re-prompted, never fatal. The hand-size and
/// follow-suit contracts are the same as for any other `Player`.
#[derive(Debug)]
pub struct HumanPlayer {
    name: String,
    hand: Vec<Card>,
}

impl HumanPlayer {
    pub fn new(name: &str) -> Self {
        HumanPlayer {
            name: name.to_string(),
            hand: Vec::with_capacity(6),
        }
    }

    fn print_hand(&self, allow_upcard: bool) {
        for (index, card) in self.hand.iter().enumerate() {
            println!("[{index}] {card}");
        }
        if allow_upcard {
            println!("[-1] discard the upcard");
        }
    }

    fn read_reply(&self) -> String {
        let mut buf = String::new();
        let bytes = io::stdin()
            .read_line(&mut buf)
            .expect("failed to read from stdin");
        assert!(bytes > 0, "stdin closed while waiting for {}", self.name);
        buf
    }

    /// Prompts until the reply names a held card, by index or by full
    /// name. Returns `None` only when `allow_upcard` and the reply was
    /// `-1`.
    fn prompt_card(&self, prompt: &str, allow_upcard: bool) -> Option<usize> {
        loop {
            self.print_hand(allow_upcard);
            println!("Human player {}, {prompt}", self.name);
            match parse_card_choice(&self.read_reply(), &self.hand, allow_upcard) {
                Ok(choice) => return choice,
                Err(err) => log::error!("{err}"),
            }
        }
    }
}

impl Player for HumanPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn add_card(&mut self, card: Card) {
        assert!(self.hand.len() < 5, "{} was dealt a sixth card", self.name);
        self.hand.push(card);
        self.hand.sort();
    }

    fn make_trump(&self, upcard: &Card, is_dealer: bool, round: TrumpRound) -> Option<Suit> {
        let proposed = match round {
            TrumpRound::First => upcard.suit(),
            TrumpRound::Second => upcard.suit().next(),
        };
        loop {
            self.print_hand(false);
            println!(
                "Human player {}, please enter {proposed} to order it up, or \"pass\":",
                self.name
            );
            match parse_trump_reply(&self.read_reply(), proposed) {
                Ok(None) if is_dealer => {
                    log::error!("the dealer cannot pass in the second round");
                }
                Ok(choice) => return choice,
                Err(err) => log::error!("{err}"),
            }
        }
    }

    fn add_and_discard(&mut self, upcard: Card) {
        assert_eq!(
            self.hand.len(),
            5,
            "{} picked up the upcard without a full hand",
            self.name
        );
        match self.prompt_card("please select a card to discard:", true) {
            // -1: the upcard itself goes back.
            None => {}
            Some(index) => {
                self.hand.remove(index);
                self.hand.push(upcard);
                self.hand.sort();
            }
        }
    }

    fn lead_card(&mut self, _trump: Suit) -> Card {
        assert!(!self.hand.is_empty(), "{} led from an empty hand", self.name);
        let index = self
            .prompt_card("please select a card to lead:", false)
            .expect("the upcard is not on offer when leading");
        self.hand.remove(index)
    }

    fn play_card(&mut self, led_card: &Card, trump: Suit) -> Card {
        assert!(
            !self.hand.is_empty(),
            "{} played from an empty hand",
            self.name
        );
        let led_suit = led_card.effective_suit(trump);
        loop {
            let index = self
                .prompt_card("please select a card to play:", false)
                .expect("the upcard is not on offer mid-trick");
            let can_follow = self
                .hand
                .iter()
                .any(|card| card.effective_suit(trump) == led_suit);
            if can_follow && self.hand[index].effective_suit(trump) != led_suit {
                log::error!(
                    "{} does not follow {led_suit}; you must follow suit",
                    self.hand[index]
                );
                continue;
            }
            return self.hand.remove(index);
        }
    }
}

/// Parses a reply naming a card either by hand index or by full card
/// name. `-1` selects the upcard when `allow_upcard` is set; that case
/// returns `Ok(None)`.
fn parse_card_choice(
    input: &str,
    hand: &[Card],
    allow_upcard: bool,
) -> Result<Option<usize>, String> {
    let input = input.trim();
    let index_re = Regex::new(r"^-?\d+$").expect("valid index regex");
    if index_re.is_match(input) {
        if input == "-1" && allow_upcard {
            return Ok(None);
        }
        let index: usize = input
            .parse()
            .map_err(|_| format!("not a hand index: {input}"))?;
        if index < hand.len() {
            Ok(Some(index))
        } else {
            Err(format!("index {index} is out of range"))
        }
    } else {
        let card: Card = input.parse().map_err(|err| format!("{err}"))?;
        hand.iter()
            .position(|&held| held == card)
            .map(Some)
            .ok_or_else(|| format!("{card} is not in your hand"))
    }
}

/// Parses a trump-making reply: `pass`, or the round's proposed suit.
/// Naming any other suit is rejected since only the proposed suit is on
/// offer.
fn parse_trump_reply(input: &str, proposed: Suit) -> Result<Option<Suit>, String> {
    let input = input.trim();
    if input.eq_ignore_ascii_case("pass") {
        return Ok(None);
    }
    let suit: Suit = input.parse().map_err(|err| format!("{err}"))?;
    if suit == proposed {
        Ok(Some(suit))
    } else {
        Err(format!("only {proposed} can be ordered up this round"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(names: [&str; 3]) -> Vec<Card> {
        names
            .iter()
            .map(|s| s.parse().expect("test cards are well formed"))
            .collect()
    }

    #[test]
    fn card_choice_by_index() {
        let hand = hand(["Nine of Spades", "Ten of Hearts", "Ace of Clubs"]);
        assert_eq!(parse_card_choice("1\n", &hand, false), Ok(Some(1)));
        assert_eq!(parse_card_choice(" 0 ", &hand, false), Ok(Some(0)));
    }

    #[test]
    fn card_choice_by_name() {
        let hand = hand(["Nine of Spades", "Ten of Hearts", "Ace of Clubs"]);
        assert_eq!(
            parse_card_choice("Ace of Clubs\n", &hand, false),
            Ok(Some(2))
        );
        assert!(parse_card_choice("Ace of Hearts", &hand, false).is_err());
    }

    #[test]
    fn card_choice_range_and_upcard() {
        let hand = hand(["Nine of Spades", "Ten of Hearts", "Ace of Clubs"]);
        assert!(parse_card_choice("3", &hand, false).is_err());
        assert!(parse_card_choice("-1", &hand, false).is_err());
        assert_eq!(parse_card_choice("-1", &hand, true), Ok(None));
    }

    #[test]
    fn trump_reply_accepts_pass_and_proposed_suit() {
        assert_eq!(parse_trump_reply("pass\n", Suit::Hearts), Ok(None));
        assert_eq!(
            parse_trump_reply("Hearts\n", Suit::Hearts),
            Ok(Some(Suit::Hearts))
        );
    }

    #[test]
    fn trump_reply_rejects_other_suits_and_noise() {
        assert!(parse_trump_reply("Spades", Suit::Hearts).is_err());
        assert!(parse_trump_reply("maybe", Suit::Hearts).is_err());
    }
}
