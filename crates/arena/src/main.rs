//! Arena CLI
//!
//! Play matches between engines, ask the search engine for hints and
//! inspect the chain rule on any position.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use arena::{ArenaConfig, ArenaError, MatchRunner, create_engine};
use clap::{Parser, Subcommand};
use gyroad_core::{
    Access, GameState, Player, SearchLimits, Square, apply_moves, find_path_in, format_action, resolve,
    split_turns,
};
use negamax_engine::{NegamaxEngine, SearchTask};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "arena", about = "Gyroad engine arena")]
struct Cli {
    /// TOML file with [rules], [search] and [matches] sections
    #[arg(long, global = true, default_value = "config/arena.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play a match between two engines (search, random, random:<seed>)
    Match {
        engine1: String,
        engine2: String,
        #[arg(short, long)]
        games: Option<u32>,
        #[arg(short, long)]
        depth: Option<u8>,
        /// Print the full report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Suggest an action without playing it
    Hint {
        /// Player to advise (1 or 2)
        #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=2))]
        player: u8,
        /// Turns to replay first, separated by `;`
        #[arg(short, long, default_value = "")]
        moves: String,
        #[arg(long)]
        time_ms: Option<u64>,
    },
    /// Print the board and the squares a piece can reach
    Show {
        /// Turns to replay first, separated by `;`
        #[arg(short, long, default_value = "")]
        moves: String,
        /// Square of the piece to inspect, e.g. a2
        square: Option<String>,
    },
}

fn load_config(cli: &Cli) -> Result<ArenaConfig, ArenaError> {
    if cli.config.exists() {
        ArenaConfig::load(&cli.config)
    } else {
        debug!(path = %cli.config.display(), "no config file, using defaults");
        Ok(ArenaConfig::default())
    }
}

fn replay(config: &ArenaConfig, moves: &str) -> Result<GameState, ArenaError> {
    let mut state = GameState::new(config.rules);
    apply_moves(&mut state, &split_turns(moves))?;
    Ok(state)
}

fn run_match(
    config: &ArenaConfig,
    engine1: &str,
    engine2: &str,
    games: Option<u32>,
    depth: Option<u8>,
    json: bool,
) -> Result<(), ArenaError> {
    let mut matches = config.matches.clone();
    if let Some(games) = games {
        matches.num_games = games;
    }
    if let Some(depth) = depth {
        matches.depth = depth;
    }
    matches.verbose = !json;

    let mut first = create_engine(engine1, &config.search)?;
    let mut second = create_engine(engine2, &config.search)?;
    info!(engine1, engine2, games = matches.num_games, depth = matches.depth, "starting match");

    let runner = MatchRunner::new(matches).with_rules(config.rules);
    let report = runner.run_match(first.as_mut(), second.as_mut());

    if json {
        println!("{}", report.to_json()?);
    } else {
        println!();
        print!("{}", report.generate_report());
    }
    Ok(())
}

fn run_hint(config: &ArenaConfig, player: u8, moves: &str, time_ms: Option<u64>) -> Result<(), ArenaError> {
    let player = Player::from_number(player).unwrap_or(Player::One);
    let state = replay(config, moves)?;
    if state.is_game_over() {
        println!("Game is over: {:?}", state.outcome());
        return Ok(());
    }

    let view = state.as_turn_of(player);
    let budget = time_ms.unwrap_or(config.search.time_budget_ms);
    let limits = SearchLimits::depth_and_time(config.search.max_depth, Duration::from_millis(budget));
    let engine = Box::new(NegamaxEngine::with_config(config.search.clone()));

    let task = SearchTask::spawn(engine, view.clone(), limits).map_err(ArenaError::Spawn)?;
    let (_, result) = task.wait().ok_or(ArenaError::SearchLost)?;

    match result.best_action {
        Some(action) => {
            let text = format_action(view.board(), &action).unwrap_or_default();
            println!(
                "Hint for player {}: {} (score {}, depth {}, {} nodes)",
                player.number(),
                text,
                result.score,
                result.depth,
                result.nodes
            );
        }
        None => println!("Player {} has no legal move and must pass", player.number()),
    }
    Ok(())
}

fn run_show(config: &ArenaConfig, moves: &str, square: Option<&str>) -> Result<(), ArenaError> {
    let state = replay(config, moves)?;
    println!("{}", state.board());
    println!(
        "Player {} to move, scores {}-{}",
        state.side_to_move().number(),
        state.score(Player::One),
        state.score(Player::Two)
    );

    let Some(square) = square else {
        return Ok(());
    };
    let sq = Square::parse(square).ok_or_else(|| ArenaError::BadSquare(square.to_string()))?;
    let Some(piece) = state.board().piece_at(sq) else {
        println!("{sq} is empty");
        return Ok(());
    };

    let reach = resolve(state.board(), piece.id);
    println!("{} {} on {sq} reaches {} squares", piece.player, piece.kind, reach.len());
    for dest in reach.squares() {
        let path = find_path_in(state.board(), &reach, piece.id, dest).unwrap_or_default();
        let hops: Vec<String> = path.iter().map(Square::to_string).collect();
        let access = match reach.access(dest) {
            Some(Access::Swap) => "swap",
            _ => "move",
        };
        println!("  {dest} {access}: {}", hops.join(" -> "));
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = load_config(&cli).and_then(|config| match &cli.command {
        Command::Match {
            engine1,
            engine2,
            games,
            depth,
            json,
        } => run_match(&config, engine1, engine2, *games, *depth, *json),
        Command::Hint { player, moves, time_ms } => run_hint(&config, *player, moves, *time_ms),
        Command::Show { moves, square } => run_show(&config, moves, square.as_deref()),
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
