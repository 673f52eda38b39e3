//! Match results and reporting

use serde::{Deserialize, Serialize};

use gyroad_core::Player;

/// Result of a single game from one engine's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

impl GameResult {
    pub fn flipped(self) -> Self {
        match self {
            GameResult::Win => GameResult::Loss,
            GameResult::Loss => GameResult::Win,
            GameResult::Draw => GameResult::Draw,
        }
    }
}

/// Why a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Termination {
    /// A player reached the win threshold, or both did at once.
    Threshold,
    /// The ply cap was hit.
    PlyLimit,
    /// An engine returned an illegal action or declined a legal move.
    Forfeit(Player),
}

/// One played game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Engine playing as player 1.
    pub first: String,
    /// Engine playing as player 2.
    pub second: String,
    /// Result for player 1.
    pub result: GameResult,
    pub termination: Termination,
    pub plies: u32,
    pub scores: [u32; 2],
    /// One entry per turn in action notation, `pass` for forced passes.
    pub actions: Vec<String>,
}

/// Aggregate result of a match from engine 1's perspective.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, result: GameResult) {
        match result {
            GameResult::Win => self.wins += 1,
            GameResult::Loss => self.losses += 1,
            GameResult::Draw => self.draws += 1,
        }
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Points per game, a draw counting half.
    pub fn score(&self) -> f64 {
        let total = self.total_games();
        if total == 0 {
            return 0.5;
        }
        (self.wins as f64 + self.draws as f64 * 0.5) / total as f64
    }
}

/// Complete match report, written out with `--json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchReport {
    pub engine1: String,
    pub engine2: String,
    pub result: MatchResult,
    pub games: Vec<GameRecord>,
}

impl MatchReport {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("=== Match: {} vs {} ===\n\n", self.engine1, self.engine2));
        report.push_str(&format!(
            "{:<4} {:<16} {:<16} {:>6} {:>7} {:<10}\n",
            "Game", "Player 1", "Player 2", "Plies", "Score", "Result"
        ));
        report.push_str(&"-".repeat(64));
        report.push('\n');

        for (i, game) in self.games.iter().enumerate() {
            let result = match game.result {
                GameResult::Win => "1-0",
                GameResult::Loss => "0-1",
                GameResult::Draw => "1/2",
            };
            report.push_str(&format!(
                "{:<4} {:<16} {:<16} {:>6} {:>7} {:<10}\n",
                i + 1,
                game.first,
                game.second,
                game.plies,
                format!("{}-{}", game.scores[0], game.scores[1]),
                result
            ));
        }

        report.push_str(&format!(
            "\n{}: {} wins, {} losses, {} draws ({:.1}%)\n",
            self.engine1,
            self.result.wins,
            self.result.losses,
            self.result.draws,
            self.result.score() * 100.0
        ));
        report
    }
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod results_tests;
