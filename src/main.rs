//! Dots-Rust: territory capture on an unbounded grid.
//!
//! ## Usage
//!
//! - `dots-rust` - Show a demo
//! - `dots-rust play` - Read commands from stdin (see `protocol`)
//! - `dots-rust random` - Play random stones and report captures

use std::io;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use log::info;

use dots_rust::board::Point;
use dots_rust::capture::Rules;
use dots_rust::constants::{DEFAULT_PLAYER_COUNT, MAX_PATH_LEN};
use dots_rust::game::Game;
use dots_rust::player::Players;
use dots_rust::protocol::Session;

/// Dots-Rust: territory capture on an unbounded grid
#[derive(Parser)]
#[command(name = "dots-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    rules: RuleArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args)]
struct RuleArgs {
    /// Number of players (1 to 4)
    #[arg(long, global = true, default_value_t = DEFAULT_PLAYER_COUNT)]
    players: usize,

    /// Longest path the enclosure search will follow
    #[arg(long, global = true, default_value_t = MAX_PATH_LEN)]
    max_path: usize,

    /// Also seal the inside of enclosures that hold no enemy stones
    #[arg(long, global = true)]
    seal_empty: bool,
}

impl RuleArgs {
    fn new_game(&self) -> Game {
        let rules = Rules {
            max_path_len: self.max_path,
            seal_empty_interiors: self.seal_empty,
            ..Rules::default()
        };
        Game::new(Players::standard(self.players), rules)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Read text commands from stdin and answer on stdout
    Play,
    /// Play through a few capture scenarios
    Demo,
    /// Place random stones and report what gets captured
    Random {
        /// Number of stones to place
        #[arg(long, default_value_t = 40)]
        moves: usize,
        /// Stones land within this distance of the origin
        #[arg(long, default_value_t = 8)]
        radius: u16,
        /// Random seed
        #[arg(long, default_value_t = 1)]
        seed: u64,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Play) => {
            let mut session = Session::new(cli.rules.new_game());
            session.run(io::stdin().lock(), io::stdout())?;
        }
        Some(Commands::Random {
            moves,
            radius,
            seed,
        }) => run_random(cli.rules.new_game(), moves, radius, seed),
        Some(Commands::Demo) | None => run_demo(&cli.rules)?,
    }
    Ok(())
}

fn run_demo(args: &RuleArgs) -> Result<()> {
    println!("Dots-Rust: territory capture demo\n");

    // Player 1 closes a square; player 2 answers each corner with a reply.
    let corners: [Point; 4] = [(0, 0), (2, 0), (2, 2), (0, 2)];
    let scenarios: [(&str, &[Point], [Point; 3]); 3] = [
        ("Enemy stone inside", &[], [(1, 1), (8, 9), (9, 9)]),
        ("Empty inside", &[], [(8, 9), (9, 9), (9, 8)]),
        ("Own stone inside", &[(1, 1), (8, 8)], [(8, 9), (9, 9), (9, 8)]),
    ];

    for (title, opening, replies) in scenarios {
        println!("=== {title} ===");
        let mut game = args.new_game();
        for &pt in opening {
            game.place(pt)?;
        }
        let mut result = None;
        for (k, &corner) in corners.iter().enumerate() {
            result = game.place(corner)?;
            if let Some(&reply) = replies.get(k) {
                game.place(reply)?;
            }
        }
        match result {
            Some(capture) => println!("Captured {} stone(s)", capture.captured),
            None => println!("No capture"),
        }
        println!("{}", game.board);
    }
    Ok(())
}

fn run_random(mut game: Game, moves: usize, radius: u16, seed: u64) {
    let mut rng = fastrand::Rng::with_seed(seed);
    let mut placed = 0;
    let mut attempts = 0;

    while placed < moves && attempts < moves.saturating_mul(20) {
        attempts += 1;
        let pt = random_point(&mut rng, radius);
        let player = game.current_player().id;
        match game.place(pt) {
            Ok(Some(capture)) => {
                placed += 1;
                println!(
                    "move {placed}: player {player} at {pt:?} captures {}",
                    capture.captured
                );
            }
            Ok(None) => placed += 1,
            Err(e) => info!("skipping {pt:?}: {e}"),
        }
    }

    println!("{}", game.board);
    for p in game.players.iter() {
        println!("Player {}: {}", p.id, p.score);
    }
}

/// A uniformly random point in the square of half-width `radius`.
fn random_point(rng: &mut fastrand::Rng, radius: u16) -> Point {
    let r = i32::from(radius);
    (rng.i32(-r..=r), rng.i32(-r..=r))
}
