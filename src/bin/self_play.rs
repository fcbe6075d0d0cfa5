//! Greedy-vs-random self-play runner.
//!
//! Run with:
//! `cargo run --release --bin self_play -- --mode ghost_pawn --seed 7`
//! `RUST_LOG=debug cargo run --bin self_play -- --max-plies 40 --verbose`

use tracing::info;
use tracing_subscriber::EnvFilter;

use variant_chess::engines::engine_greedy::GreedyEngine;
use variant_chess::engines::engine_random::RandomEngine;
use variant_chess::engines::engine_trait::Engine;
use variant_chess::game_state::chess_types::{Color, ModeChoice};
use variant_chess::game_state::game_config::GameConfig;
use variant_chess::game_state::game_state::GameState;
use variant_chess::utils::render_game_state::render_game_state;

const DEFAULT_MAX_PLIES: usize = 200;

struct Args {
    mode: ModeChoice,
    seed: Option<u64>,
    max_plies: usize,
    full_random_pool: bool,
    verbose: bool,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        mode: ModeChoice::default(),
        seed: None,
        max_plies: DEFAULT_MAX_PLIES,
        full_random_pool: false,
        verbose: false,
    };

    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--mode" => {
                let value = iter.next().ok_or("--mode needs a value")?;
                args.mode = value.parse().map_err(|e| format!("{e}"))?;
            }
            "--seed" => {
                let value = iter.next().ok_or("--seed needs a value")?;
                args.seed = Some(value.parse().map_err(|_| format!("bad seed '{value}'"))?);
            }
            "--max-plies" => {
                let value = iter.next().ok_or("--max-plies needs a value")?;
                args.max_plies = value
                    .parse()
                    .map_err(|_| format!("bad ply count '{value}'"))?;
            }
            "--full-random-pool" => args.full_random_pool = true,
            "--verbose" | "-v" => args.verbose = true,
            other => return Err(format!("unknown argument '{other}'")),
        }
    }
    Ok(args)
}

fn main() -> Result<(), String> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = parse_args()?;

    let mut config = GameConfig::default()
        .with_mode(args.mode)
        .with_full_random_pool(args.full_random_pool)
        .with_opponent(None);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    let mut game = GameState::new(config);

    let (mut white, mut black): (Box<dyn Engine>, Box<dyn Engine>) = match args.seed {
        Some(seed) => (
            Box::new(GreedyEngine::with_seed(seed)),
            Box::new(RandomEngine::with_seed(seed.wrapping_add(1))),
        ),
        None => (Box::new(GreedyEngine::new()), Box::new(RandomEngine::new())),
    };
    info!(mode = %game.mode(), white = white.name(), black = black.name(), "self-play started");

    let mut plies = 0;
    while plies < args.max_plies && !game.status().is_terminal() {
        let side = game.side_to_move();
        let engine = match side {
            Color::White => &mut white,
            Color::Black => &mut black,
        };
        let Some(mv) = engine.choose_move(&game, side) else {
            break;
        };
        game.apply_move(mv.from, mv.to, mv.promotion)
            .map_err(|e| e.to_string())?;
        plies += 1;

        if args.verbose {
            println!("{plies}. {side} {} -> {}", mv.from, mv.to);
            println!("{}\n", game.board());
        }
    }

    println!("{}", render_game_state(&game));
    println!(
        "plies: {plies}  captured white: {}  captured black: {}  halfmove clock: {}",
        game.captured_pieces(Color::White).len(),
        game.captured_pieces(Color::Black).len(),
        game.halfmove_clock()
    );
    info!(plies, status = %game.status(), "self-play finished");
    Ok(())
}
