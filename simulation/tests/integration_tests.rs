use std::io::Cursor;

use simulation::Game;
use strategies::{player_factory, StrategyKind};
use types::{Pack, Player};

fn simple_table() -> Vec<Box<dyn Player>> {
    ["Ivy", "Noah", "Ruth", "Todd"]
        .iter()
        .map(|name| player_factory(name, StrategyKind::Simple))
        .collect()
}

#[test]
fn full_game_reaches_the_target_score() {
    let mut game = Game::new(Pack::new(), true, 10, simple_table());
    let winners = game.play();
    let scores = game.scores();
    assert!(scores[winners] >= 10);
    assert!(scores[1 - winners] < scores[winners]);
}

#[test]
fn noshuffle_games_are_reproducible() {
    let mut first = Game::new(Pack::new(), false, 5, simple_table());
    let mut second = Game::new(Pack::new(), false, 5, simple_table());
    assert_eq!(first.play(), second.play());
    assert_eq!(first.scores(), second.scores());
}

#[test]
fn one_point_game_ends_after_a_single_hand() {
    let mut game = Game::new(Pack::new(), false, 1, simple_table());
    game.play();
    let total: u32 = game.scores().iter().sum();
    assert!((1..=2).contains(&total));
}

#[test]
fn pack_loaded_from_text_drives_a_game() {
    let mut text = String::new();
    for suit in types::Suit::ALL {
        for rank in types::Rank::GAME_RANKS {
            text.push_str(&format!("{rank} of {suit}\n"));
        }
    }
    let pack = Pack::from_reader(Cursor::new(text)).expect("well-formed pack source");
    let mut game = Game::new(pack, true, 3, simple_table());
    let winners = game.play();
    assert!(game.scores()[winners] >= 3);
}
