use itertools::Itertools;
use types::{winning_seat, Card, Pack, Player, Suit, TrumpRound};

pub const NUM_PLAYERS: usize = 4;
const TRICKS_PER_HAND: usize = 5;

// Traditional two-pass deal, starting left of the dealer.
const DEAL_BATCHES: [usize; 8] = [3, 2, 3, 2, 2, 3, 2, 3];

fn team_of(seat: usize) -> usize {
    seat % 2
}

/// One table of Euchre: four seated players, a pack, and the running
/// team scores. Seats 0 and 2 are one team, 1 and 3 the other. The deal
/// starts at seat 0 and rotates left every hand. `play` narrates the
/// whole game to stdout and runs until a team reaches the target score.
#[derive(Debug)]
pub struct Game {
    pack: Pack,
    players: Vec<Box<dyn Player>>,
    shuffle: bool,
    points_to_win: u32,
    scores: [u32; 2],
    dealer: usize,
    hand_number: u32,
}

impl Game {
    pub fn new(
        pack: Pack,
        shuffle: bool,
        points_to_win: u32,
        players: Vec<Box<dyn Player>>,
    ) -> Self {
        assert_eq!(players.len(), NUM_PLAYERS, "Euchre seats exactly four");
        assert!(points_to_win >= 1, "the target score must be positive");
        Game {
            pack,
            players,
            shuffle,
            points_to_win,
            scores: [0, 0],
            dealer: 0,
            hand_number: 0,
        }
    }

    pub fn scores(&self) -> [u32; 2] {
        self.scores
    }

    /// Plays hands until a team reaches the target score; returns the
    /// winning team index.
    pub fn play(&mut self) -> usize {
        while self.scores.iter().all(|&score| score < self.points_to_win) {
            self.play_hand();
        }
        let winners = if self.scores[0] >= self.points_to_win { 0 } else { 1 };
        println!("{} win!", self.team_names(winners));
        winners
    }

    fn left_of(&self, seat: usize) -> usize {
        (seat + 1) % NUM_PLAYERS
    }

    fn team_names(&self, team: usize) -> String {
        self.players
            .iter()
            .skip(team)
            .step_by(2)
            .map(|player| player.name())
            .join(" and ")
    }

    fn play_hand(&mut self) {
        println!("Hand {}", self.hand_number);
        println!("{} deals", self.players[self.dealer].name());
        if self.shuffle {
            self.pack.shuffle();
        } else {
            self.pack.reset();
        }
        let upcard = self.deal();
        println!("{upcard} turned up");

        let (orderer, trump) = self.make_trump(&upcard);
        let makers = team_of(orderer);
        log::debug!(
            "hand {}: {} made {trump} for team {makers}",
            self.hand_number,
            self.players[orderer].name()
        );

        let mut tricks = [0usize; 2];
        let mut leader = self.left_of(self.dealer);
        for _ in 0..TRICKS_PER_HAND {
            leader = self.play_trick(leader, trump);
            tricks[team_of(leader)] += 1;
        }

        let (winners, points) = if tricks[makers] >= 3 {
            let marched = tricks[makers] == TRICKS_PER_HAND;
            (makers, if marched { 2 } else { 1 })
        } else {
            (1 - makers, 2)
        };
        println!("{} win the hand", self.team_names(winners));
        if winners == makers {
            if tricks[makers] == TRICKS_PER_HAND {
                println!("march!");
            }
        } else {
            println!("euchred!");
        }
        self.scores[winners] += points;
        println!();
        for team in 0..2 {
            println!("{} have {} points", self.team_names(team), self.scores[team]);
        }
        println!();

        self.dealer = self.left_of(self.dealer);
        self.hand_number += 1;
    }

    /// Deals five cards to each seat in the traditional batches and
    /// returns the upcard.
    fn deal(&mut self) -> Card {
        for (turn, &batch) in DEAL_BATCHES.iter().enumerate() {
            let seat = (self.dealer + 1 + turn) % NUM_PLAYERS;
            for _ in 0..batch {
                let card = self.pack.deal_one();
                self.players[seat].add_card(card);
            }
        }
        self.pack.deal_one()
    }

    /// Two rounds of offers starting left of the dealer. Round one
    /// proposes the upcard's suit and has the dealer pick up on an
    /// order; round two proposes the next suit and forces the dealer if
    /// everyone else has passed.
    fn make_trump(&mut self, upcard: &Card) -> (usize, Suit) {
        for round in [TrumpRound::First, TrumpRound::Second] {
            for offset in 0..NUM_PLAYERS {
                let seat = (self.dealer + 1 + offset) % NUM_PLAYERS;
                let forced = round == TrumpRound::Second && seat == self.dealer;
                match self.players[seat].make_trump(upcard, forced, round) {
                    Some(trump) => {
                        println!("{} orders up {trump}", self.players[seat].name());
                        println!();
                        if round == TrumpRound::First {
                            self.players[self.dealer].add_and_discard(*upcard);
                        }
                        return (seat, trump);
                    }
                    None => println!("{} passes", self.players[seat].name()),
                }
            }
        }
        unreachable!("the dealer is forced to order up in the second round")
    }

    fn play_trick(&mut self, leader: usize, trump: Suit) -> usize {
        let led_card = self.players[leader].lead_card(trump);
        println!("{} leads {led_card}", self.players[leader].name());
        let mut plays = vec![led_card];
        for offset in 1..NUM_PLAYERS {
            let seat = (leader + offset) % NUM_PLAYERS;
            let card = self.players[seat].play_card(&led_card, trump);
            println!("{} plays {card}", self.players[seat].name());
            plays.push(card);
        }
        let winner = (leader + winning_seat(&plays, trump)) % NUM_PLAYERS;
        println!("{} takes the trick", self.players[winner].name());
        println!();
        winner
    }
}
