//! Iterative-deepening negamax with alpha-beta pruning.
//!
//! Every node expands its candidate actions onto cloned states, pre-scores
//! each child with a one-ply static evaluation and searches only the best
//! `beam_width` of them. The deadline is checked at every node; an aborted
//! iteration falls back to the last completed one.

use std::cmp::Reverse;

use gyroad_core::{Action, GameState, TimeControl};
use tracing::{debug, warn};

use crate::config::SearchConfig;
use crate::eval::{WIN_BOUND, evaluate, evaluate_at};
use crate::ordering::candidate_actions;
use crate::tt::{Bound, TranspositionTable, TtEntry, value_from_tt, value_to_tt};

const INF: i32 = i32::MAX / 2;

/// Result of a root search.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Best action and its score, if the side to move has any action.
    pub best: Option<(Action, i32)>,
    /// Deepest fully completed iteration (0 if none).
    pub depth: u8,
    /// True if the deadline cut the search short.
    pub stopped: bool,
}

struct Child {
    action: Action,
    state: GameState,
    static_score: i32,
}

pub struct Searcher<'a> {
    config: &'a SearchConfig,
    tt: &'a mut TranspositionTable,
    tc: &'a TimeControl,
    nodes: u64,
}

impl<'a> Searcher<'a> {
    pub fn new(config: &'a SearchConfig, tt: &'a mut TranspositionTable, tc: &'a TimeControl) -> Self {
        Self {
            config,
            tt,
            tc,
            nodes: 0,
        }
    }

    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Candidate children ordered by one-ply evaluation, `preferred` first,
    /// cut to the beam width.
    fn expand(&self, state: &GameState, preferred: Option<&Action>) -> Vec<Child> {
        let mut children: Vec<Child> = candidate_actions(state, self.config)
            .into_iter()
            .filter_map(|action| {
                let mut next = state.clone();
                next.apply_action(&action).ok()?;
                let static_score = -evaluate(&next, &self.config.weights);
                Some(Child {
                    action,
                    state: next,
                    static_score,
                })
            })
            .collect();
        children.sort_by_key(|c| Reverse(c.static_score));
        if let Some(preferred) = preferred
            && let Some(pos) = children.iter().position(|c| &c.action == preferred)
        {
            children[..=pos].rotate_right(1);
        }
        children.truncate(self.config.beam_width.max(1));
        children
    }

    /// Search `state` to `max_depth` turns.
    pub fn search_root(&mut self, state: &GameState, max_depth: u8) -> SearchOutcome {
        let mut children = self.expand(state, None);
        let Some(first) = children.first() else {
            return SearchOutcome {
                best: None,
                depth: 0,
                stopped: false,
            };
        };
        let fallback = (first.action.clone(), first.static_score);

        let mut completed: Option<(Action, i32, u8)> = None;
        let mut partial: Option<(Action, i32)> = None;
        let mut stopped = false;

        for depth in 1..=max_depth.max(1) {
            let mut alpha = -INF;
            let mut best: Option<(usize, i32)> = None;

            for (i, child) in children.iter().enumerate() {
                match self.negamax(&child.state, depth - 1, -INF, -alpha, 1) {
                    Some(v) => {
                        let v = -v;
                        if best.is_none_or(|(_, b)| v > b) {
                            best = Some((i, v));
                        }
                        alpha = alpha.max(v);
                    }
                    None => {
                        stopped = true;
                        break;
                    }
                }
            }

            if stopped {
                partial = best.map(|(i, v)| (children[i].action.clone(), v));
                break;
            }
            let Some((i, value)) = best else {
                break;
            };
            completed = Some((children[i].action.clone(), value, depth));
            debug!(depth, score = value, nodes = self.nodes, "iteration complete");

            // Search the previous best first next time.
            children[..=i].rotate_right(1);
            if value >= WIN_BOUND {
                break;
            }
        }

        let best = match (completed.clone(), partial) {
            (Some((action, value, _)), _) => (action, value),
            (None, Some(partial)) => partial,
            (None, None) => fallback,
        };
        if completed.is_none() {
            warn!(nodes = self.nodes, "no iteration finished before the deadline");
        }
        SearchOutcome {
            best: Some(best),
            depth: completed.map_or(0, |(_, _, d)| d),
            stopped,
        }
    }

    /// Negamax value of `state` for its side to move, or None once the
    /// deadline has passed.
    fn negamax(&mut self, state: &GameState, depth: u8, mut alpha: i32, mut beta: i32, ply: u32) -> Option<i32> {
        self.nodes += 1;
        if self.tc.should_check_time(self.nodes) && self.tc.check_time() {
            return None;
        }
        if depth == 0 || state.is_game_over() {
            return Some(evaluate_at(state, &self.config.weights, ply));
        }

        let key = state.hash();
        let alpha_orig = alpha;
        let mut preferred = None;
        if let Some(entry) = self.tt.probe(key) {
            preferred = entry.best.clone();
            if entry.depth >= depth {
                let value = value_from_tt(entry.value, ply);
                match entry.bound {
                    Bound::Exact => return Some(value),
                    Bound::Lower => alpha = alpha.max(value),
                    Bound::Upper => beta = beta.min(value),
                }
                if alpha >= beta {
                    return Some(value);
                }
            }
        }

        let children = self.expand(state, preferred.as_ref());
        if children.is_empty() {
            // Forced pass.
            let mut next = state.clone();
            next.end_turn();
            return Some(-self.negamax(&next, depth - 1, -beta, -alpha, ply + 1)?);
        }

        let mut best_value = -INF;
        let mut best_action = None;
        for child in children {
            let v = -self.negamax(&child.state, depth - 1, -beta, -alpha, ply + 1)?;
            if v > best_value {
                best_value = v;
                best_action = Some(child.action);
            }
            alpha = alpha.max(v);
            if alpha >= beta {
                break;
            }
        }

        let bound = if best_value <= alpha_orig {
            Bound::Upper
        } else if best_value >= beta {
            Bound::Lower
        } else {
            Bound::Exact
        };
        self.tt.store(
            key,
            TtEntry {
                depth,
                value: value_to_tt(best_value, ply),
                bound,
                best: best_action,
            },
        );
        Some(best_value)
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
