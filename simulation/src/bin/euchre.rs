use std::{fs::File, io::BufReader, path::PathBuf, process};

use clap::{Parser, ValueEnum};
use simulation::{EuchreError, Game, NUM_PLAYERS};
use strategies::{player_factory, StrategyKind};
use types::Pack;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum ShuffleMode {
    Shuffle,
    Noshuffle,
}

#[derive(Parser, Debug)]
#[command(name = "euchre", about = "Simulates a game of Euchre")]
struct Args {
    /// File holding the initial pack order, one card per entry.
    pack_filename: PathBuf,

    /// Whether the pack is shuffled before each hand.
    #[arg(value_enum)]
    shuffle: ShuffleMode,

    /// Points required to win the game.
    #[arg(value_parser = clap::value_parser!(u32).range(1..=100))]
    points_to_win: u32,

    /// Four NAME STRATEGY pairs; STRATEGY is Simple or Human.
    #[arg(num_args = 8, value_name = "NAME STRATEGY")]
    players: Vec<String>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    log::debug!("args: {args:?}");
    if let Err(err) = run(args) {
        eprintln!("{err}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), EuchreError> {
    let file = File::open(&args.pack_filename).map_err(|source| EuchreError::PackFile {
        path: args.pack_filename.clone(),
        source,
    })?;
    let pack = Pack::from_reader(BufReader::new(file))?;

    let mut players = Vec::with_capacity(NUM_PLAYERS);
    for pair in args.players.chunks(2) {
        let kind: StrategyKind = pair[1].parse()?;
        players.push(player_factory(&pair[0], kind));
    }

    let shuffle = args.shuffle == ShuffleMode::Shuffle;
    let mut game = Game::new(pack, shuffle, args.points_to_win, players);
    game.play();
    Ok(())
}
