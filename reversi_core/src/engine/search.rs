use crate::engine::cache::{CacheKey, SearchCache};
use crate::engine::config::EngineConfig;
use crate::engine::eval::MaterialEvaluator;
use crate::engine::{Choice, Evaluator, SearchStats};
use crate::logic::board::{Board, Player};
use crate::logic::generator::legal_moves;
use crate::logic::rules::simulate;
use std::time::Instant;

/// Terminal win sentinel. Scaled by the remaining depth so that at
/// equal material outcome a win reachable in fewer plies scores
/// higher than a slower one.
const WIN_BASE: i32 = 99_999;
/// Terminal loss sentinel.
const LOSS_SCORE: i32 = -9_999;

/// Depth-bounded minimax with alpha-beta pruning. One engine serves
/// one game at a time: searches are synchronous and reentrancy across
/// games is achieved by giving each game its own engine, so the cache
/// never mixes positions from unrelated games.
pub struct AlphaBetaEngine {
    config: EngineConfig,
    evaluator: MaterialEvaluator,
    cache: SearchCache,
    nodes: u64,
    cache_hits: u64,
    last_time_ms: u64,
}

impl AlphaBetaEngine {
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        let cache = SearchCache::new(config.cache_max_entries);
        Self {
            config,
            evaluator: MaterialEvaluator,
            cache,
            nodes: 0,
            cache_hits: 0,
            last_time_ms: 0,
        }
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Drops all cached scores. Called at the start of every game so
    /// entries never leak between independent games.
    pub fn start_game(&mut self) {
        self.cache.clear();
    }

    #[must_use]
    pub fn stats(&self) -> SearchStats {
        SearchStats {
            nodes: self.nodes,
            cache_hits: self.cache_hits,
            time_ms: self.last_time_ms,
        }
    }

    /// Selects the best move for `player`, looking `max_depth` plies
    /// ahead. Returns `Pass` when only the requesting player is
    /// blocked and `GameOver` when neither side can move.
    ///
    /// Root alpha is tightened to the best score seen so far after
    /// each candidate; ties keep the earliest candidate in generator
    /// order, so the result is deterministic.
    pub fn choose_move(&mut self, board: &Board, player: Player, max_depth: u8) -> Choice {
        let started = Instant::now();
        self.nodes = 0;
        self.cache_hits = 0;

        let moves = legal_moves(board, player);
        if moves.is_empty() {
            self.last_time_ms = started.elapsed().as_millis() as u64;
            return if legal_moves(board, player.opposite()).is_empty() {
                Choice::GameOver
            } else {
                Choice::Pass
            };
        }

        let mut best_move = moves[0];
        let mut best_score = i32::MIN;
        let mut alpha = i32::MIN;
        let beta = i32::MAX;

        for mv in moves {
            let key = CacheKey::new(board, mv, player, max_depth);
            let score = if let Some(hit) = self.cache.lookup(&key) {
                self.cache_hits += 1;
                hit
            } else {
                let score = self.minimax(
                    &simulate(board, mv, player),
                    max_depth,
                    player,
                    true,
                    alpha,
                    beta,
                );
                // With a tightened root alpha the search may return an
                // upper bound instead of the exact value; only exact
                // values are safe to reuse, so bounds are not cached.
                if score > alpha {
                    self.cache.store(key, score);
                }
                score
            };

            if score > best_score {
                best_score = score;
                best_move = mv;
            }
            alpha = alpha.max(best_score);
        }

        self.last_time_ms = started.elapsed().as_millis() as u64;
        log::debug!(
            "chose ({},{}) score {} nodes {} cache hits {} in {}ms",
            best_move.row,
            best_move.col,
            best_score,
            self.nodes,
            self.cache_hits,
            self.last_time_ms
        );
        Choice::Move(best_move)
    }

    /// Scores `board` from `root_player`'s perspective. `opponent_turn`
    /// flips each ply; a forced pass flips it without touching the
    /// board but still consumes one unit of depth.
    fn minimax(
        &mut self,
        board: &Board,
        depth: u8,
        root_player: Player,
        opponent_turn: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.nodes += 1;

        if depth == 0 {
            return self.evaluator.evaluate(board, root_player);
        }

        let current = if opponent_turn {
            root_player.opposite()
        } else {
            root_player
        };
        let moves = legal_moves(board, current);

        if moves.is_empty() {
            if legal_moves(board, current.opposite()).is_empty() {
                // Neither side can move: the game is decided here.
                let final_score = self.evaluator.evaluate(board, root_player);
                return if final_score > 0 {
                    WIN_BASE * i32::from(depth)
                } else if final_score < 0 {
                    LOSS_SCORE
                } else {
                    0
                };
            }
            // Forced pass.
            return self.minimax(board, depth - 1, root_player, !opponent_turn, alpha, beta);
        }

        if opponent_turn {
            let mut best = i32::MAX;
            for mv in moves {
                let score = self.minimax(
                    &simulate(board, mv, current),
                    depth - 1,
                    root_player,
                    false,
                    alpha,
                    beta,
                );
                best = best.min(score);
                beta = beta.min(best);
                if beta <= alpha {
                    break;
                }
            }
            best
        } else {
            let mut best = i32::MIN;
            for mv in moves {
                let score = self.minimax(
                    &simulate(board, mv, current),
                    depth - 1,
                    root_player,
                    true,
                    alpha,
                    beta,
                );
                best = best.max(score);
                alpha = alpha.max(best);
                if beta <= alpha {
                    break;
                }
            }
            best
        }
    }
}

impl Default for AlphaBetaEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
