//! Match runner for playing games between engines

use std::time::Duration;

use gyroad_core::{
    Engine, GameState, Outcome, PASS, Player, RulesConfig, SearchLimits, TurnEngine, format_action,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::results::{GameRecord, GameResult, MatchReport, MatchResult, Termination};

/// Configuration for a match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Iterative-deepening depth handed to the engines
    pub depth: u8,
    /// Time per action in milliseconds (0 = no limit)
    pub time_per_move_ms: u64,
    /// Plies after which the game is scored a draw
    pub max_plies: u32,
    /// Whether to alternate sides each game
    pub alternate_sides: bool,
    /// Print progress during match
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            depth: 3,
            time_per_move_ms: 1500,
            max_plies: 200,
            alternate_sides: true,
            verbose: true,
        }
    }
}

impl MatchConfig {
    /// Fresh limits for one action (each search restarts the clock)
    fn search_limits(&self) -> SearchLimits {
        match self.time_per_move_ms {
            0 => SearchLimits::depth(self.depth),
            ms => SearchLimits::depth_and_time(self.depth, Duration::from_millis(ms)),
        }
    }
}

/// Runs matches between two engines
pub struct MatchRunner {
    config: MatchConfig,
    rules: RulesConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self {
            config,
            rules: RulesConfig::default(),
        }
    }

    pub fn with_rules(mut self, rules: RulesConfig) -> Self {
        self.rules = rules;
        self
    }

    /// Run a match between two engines
    ///
    /// Results are from engine1's perspective
    pub fn run_match(&self, engine1: &mut dyn Engine, engine2: &mut dyn Engine) -> MatchReport {
        let name1 = engine1.name().to_string();
        let name2 = engine2.name().to_string();
        let mut result = MatchResult::new();
        let mut games = Vec::new();

        for game_num in 0..self.config.num_games {
            let engine1_first = !self.config.alternate_sides || game_num % 2 == 0;

            let (record, game_result) = if engine1_first {
                let record = self.play_game(engine1, engine2);
                let r = record.result;
                (record, r)
            } else {
                let record = self.play_game(engine2, engine1);
                let r = record.result.flipped();
                (record, r)
            };
            result.record(game_result);

            if self.config.verbose {
                let side = if engine1_first { "P1" } else { "P2" };
                let outcome = match game_result {
                    GameResult::Win => "1-0",
                    GameResult::Loss => "0-1",
                    GameResult::Draw => "1/2",
                };
                println!(
                    "Game {}/{}: {} ({}) in {} plies, points {}-{} - Score: {}-{}-{}",
                    game_num + 1,
                    self.config.num_games,
                    outcome,
                    side,
                    record.plies,
                    record.scores[0],
                    record.scores[1],
                    result.wins,
                    result.losses,
                    result.draws
                );
            }
            games.push(record);
        }

        MatchReport {
            engine1: name1,
            engine2: name2,
            result,
            games,
        }
    }

    /// Play a single game, `first` moving as player 1
    pub fn play_game(&self, first: &mut dyn Engine, second: &mut dyn Engine) -> GameRecord {
        let mut turn = TurnEngine::from_state(GameState::new(self.rules));
        first.new_game();
        second.new_game();

        let mut actions = Vec::new();
        let mut plies = 0;
        let mut forfeit = None;

        while !turn.is_game_over() && plies < self.config.max_plies {
            let player = turn.current_player();
            let engine: &mut dyn Engine = match player {
                Player::One => &mut *first,
                Player::Two => &mut *second,
            };
            let result = engine.search(turn.state(), self.config.search_limits());

            match result.best_action {
                Some(action) => {
                    let text = format_action(turn.state().board(), &action).unwrap_or_default();
                    if let Err(err) = turn.play_action(&action) {
                        error!(%player, engine = engine.name(), action = %text, %err, "illegal action");
                        forfeit = Some(player);
                        break;
                    }
                    actions.push(text);
                }
                None => {
                    if let Err(err) = turn.pass() {
                        error!(%player, engine = engine.name(), %err, "engine passed with a legal move available");
                        forfeit = Some(player);
                        break;
                    }
                    info!(%player, "forced pass");
                    actions.push(PASS.to_string());
                }
            }
            plies += 1;
        }

        let (result, termination) = match (forfeit, turn.outcome()) {
            (Some(loser), _) => (result_for_first(Some(loser.other())), Termination::Forfeit(loser)),
            (None, Some(Outcome::Winner(winner))) => (result_for_first(Some(winner)), Termination::Threshold),
            (None, Some(Outcome::Draw)) => (GameResult::Draw, Termination::Threshold),
            (None, None) => (GameResult::Draw, Termination::PlyLimit),
        };
        info!(?result, ?termination, plies, scores = ?turn.scores(), "game over");

        GameRecord {
            first: first.name().to_string(),
            second: second.name().to_string(),
            result,
            termination,
            plies,
            scores: turn.scores(),
            actions,
        }
    }
}

fn result_for_first(winner: Option<Player>) -> GameResult {
    match winner {
        Some(Player::One) => GameResult::Win,
        Some(Player::Two) => GameResult::Loss,
        None => GameResult::Draw,
    }
}

/// Quick utility to run a single match
pub fn quick_match(engine1: &mut dyn Engine, engine2: &mut dyn Engine, num_games: u32, depth: u8) -> MatchReport {
    let config = MatchConfig {
        num_games,
        depth,
        verbose: false,
        ..Default::default()
    };
    MatchRunner::new(config).run_match(engine1, engine2)
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
