//! Adversarial search: depth-limited minimax with alpha-beta pruning, plus
//! the placement-phase policy and the turn driver that commits AI decisions
//! through the same click path a human uses.
//!
//! Every move the search tries is applied transiently with
//! [`Board::apply_move`] and reverted with [`Board::undo_move`] before the
//! stack frame returns, so a search leaves the board exactly as it found it
//! on every exit path, including the forced-win early return.

use tracing::debug;

use crate::board::{Board, GamePhase, PieceKind, Player};
use crate::constants::{CENTER, EASY_DEPTH, GRID_SIZE, HARD_DEPTH, LOSS_SCORE, MEDIUM_DEPTH,
    NEIGHBORS_8, WIN_SCORE};
use crate::eval::evaluate;
use crate::rules::{self, Move};

/// Difficulty preset, mapped one-to-one onto minimax depth.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Search depth in plies.
    pub fn depth(self) -> i32 {
        match self {
            Difficulty::Easy => EASY_DEPTH,
            Difficulty::Medium => MEDIUM_DEPTH,
            Difficulty::Hard => HARD_DEPTH,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty: {other}")),
        }
    }
}

/// The AI player. Owns its difficulty, a seeded random source for
/// tie-breaking, and a snapshot of the candidates scored by the last search.
pub struct Searcher {
    difficulty: Difficulty,
    rng: fastrand::Rng,
    candidates: Vec<Move>,
}

impl Searcher {
    /// A searcher with an explicit seed. The same seed replays the same
    /// tie-breaking choices, which keeps games reproducible.
    pub fn new(difficulty: Difficulty, seed: u64) -> Self {
        Self {
            difficulty,
            rng: fastrand::Rng::with_seed(seed),
            candidates: Vec::new(),
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    /// The moves scored by the last [`Searcher::find_best_move`], with their
    /// minimax scores. Read-only diagnostic snapshot for visualising what
    /// the engine considered.
    pub fn last_candidates(&self) -> &[Move] {
        &self.candidates
    }

    /// Take one full AI turn for the current player.
    ///
    /// During placement this runs the placement policy; during movement it
    /// searches for the best move and commits it through two clicks, the
    /// same path human input takes. Does nothing once the game is over.
    pub fn run_ai_turn(&mut self, board: &mut Board) {
        match board.phase() {
            GamePhase::Placement => self.place_piece(board),
            GamePhase::Movement => {
                let player = board.current_player();
                if let Some(mv) = self.find_best_move(board, player) {
                    board.click_cell(mv.from_row, mv.from_col);
                    board.click_cell(mv.to_row, mv.to_col);
                }
            }
            GamePhase::GameOver => {}
        }
    }

    /// Search for the best movement-phase move for `player`.
    ///
    /// Returns `None` when the player has no legal move. Ties between
    /// equally scored moves are broken uniformly at random so equally good
    /// positions do not produce exploitable, deterministic play.
    pub fn find_best_move(&mut self, board: &mut Board, player: Player) -> Option<Move> {
        let mut moves = rules::moves_for(board, player);
        self.candidates.clear();
        if moves.is_empty() {
            return None;
        }
        order_moves(board, &mut moves);

        let depth = self.difficulty.depth();
        let mut best_score = i32::MIN;
        let mut best: Vec<Move> = Vec::new();

        for mut mv in moves {
            let undo = board.apply_move(&mv);

            // A move that wins outright is never outscored by anything the
            // search could find behind it.
            if board.phase() == GamePhase::GameOver && board.winner() == player {
                board.undo_move(undo);
                mv.score = WIN_SCORE + depth;
                self.candidates.push(mv);
                debug!(
                    from = ?(mv.from_row, mv.from_col),
                    to = ?(mv.to_row, mv.to_col),
                    "forced win found"
                );
                return Some(mv);
            }

            let score = minimax(board, depth - 1, false, player, i32::MIN, i32::MAX);
            board.undo_move(undo);

            mv.score = score;
            self.candidates.push(mv);

            if score > best_score {
                best_score = score;
                best.clear();
                best.push(mv);
            } else if score == best_score {
                best.push(mv);
            }
        }

        let choice = best[self.rng.usize(..best.len())];
        debug!(
            candidates = self.candidates.len(),
            tied = best.len(),
            score = choice.score,
            "search complete"
        );
        Some(choice)
    }

    /// Placement policy: pick a kind with inventory left, then a cell by
    /// priority: block an opponent winning placement, take an own winning
    /// placement, the centre if free, otherwise a random empty cell.
    fn place_piece(&mut self, board: &mut Board) {
        let player = board.current_player();
        let kind = choose_piece_kind(board, player);
        board.set_selected_kind(kind);
        if let Some((row, col)) = self.choose_placement(board) {
            debug!(row, col, kind = ?kind, "placing");
            board.place_piece(row, col);
        }
    }

    fn choose_placement(&mut self, board: &mut Board) -> Option<(i32, i32)> {
        let mut empties = Vec::new();
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                if board.is_empty(row, col) {
                    empties.push((row, col));
                }
            }
        }
        if empties.is_empty() {
            return None;
        }

        let player = board.current_player();
        let opponent = player.opponent();

        for &(row, col) in &empties {
            if would_complete_line(board, row, col, opponent) {
                return Some((row, col));
            }
        }
        for &(row, col) in &empties {
            if would_complete_line(board, row, col, player) {
                return Some((row, col));
            }
        }
        if board.is_empty(CENTER, CENTER) {
            return Some((CENTER, CENTER));
        }
        Some(empties[self.rng.usize(..empties.len())])
    }
}

/// Pick the first kind the player still has in inventory.
fn choose_piece_kind(board: &Board, player: Player) -> PieceKind {
    PieceKind::ALL
        .into_iter()
        .find(|&kind| board.remaining(player, kind) > 0)
        .unwrap_or(PieceKind::Frog)
}

/// Would placing any piece of `player` here complete a 4-line? Probes with a
/// transient set/clear; the kind is irrelevant to line detection.
fn would_complete_line(board: &mut Board, row: i32, col: i32, player: Player) -> bool {
    board.set_piece(row, col, player, PieceKind::Donkey);
    let wins = rules::count_lines(board, player) > 0;
    board.clear_cell(row, col);
    wins
}

/// Heuristic ordering: try centre-bound moves that stay connected to own
/// pieces first. Purely a pruning accelerator; it never changes which move
/// the search finally picks, only how quickly cutoffs happen.
fn order_moves(board: &Board, moves: &mut [Move]) {
    moves.sort_by_key(|mv| std::cmp::Reverse(ordering_score(board, mv)));
}

fn ordering_score(board: &Board, mv: &Move) -> i32 {
    let owner = board.owner_at(mv.from_row, mv.from_col);
    let center_dist = (mv.to_row - CENTER).abs().max((mv.to_col - CENTER).abs());
    let mut score = CENTER - center_dist;
    for (dr, dc) in NEIGHBORS_8 {
        let (nr, nc) = (mv.to_row + dr, mv.to_col + dc);
        if (nr, nc) != (mv.from_row, mv.from_col) && board.owner_at(nr, nc) == owner {
            score += 1;
        }
    }
    score
}

/// Depth-limited minimax with alpha-beta pruning, scored from `ai_player`'s
/// perspective.
///
/// Terminals: a decided game scores `WIN_SCORE + depth` for an AI win
/// (faster wins score higher) and `LOSS_SCORE - depth` for a loss (slower
/// losses score higher), zero for a drawn terminal; at depth zero, or when
/// the mover has no legal moves, the static evaluation is returned. The
/// no-move case deliberately falls back to evaluation instead of counting
/// as a loss.
pub fn minimax(
    board: &mut Board,
    depth: i32,
    maximizing: bool,
    ai_player: Player,
    mut alpha: i32,
    mut beta: i32,
) -> i32 {
    if board.phase() == GamePhase::GameOver {
        let winner = board.winner();
        return if winner == ai_player {
            WIN_SCORE + depth
        } else if winner != Player::None {
            LOSS_SCORE - depth
        } else {
            0
        };
    }

    if depth == 0 {
        return evaluate(board, ai_player);
    }

    let mut moves = rules::moves_for(board, board.current_player());
    if moves.is_empty() {
        return evaluate(board, ai_player);
    }
    order_moves(board, &mut moves);

    if maximizing {
        let mut best = i32::MIN;
        for mv in &moves {
            let undo = board.apply_move(mv);
            let score = minimax(board, depth - 1, false, ai_player, alpha, beta);
            board.undo_move(undo);
            best = best.max(score);
            alpha = alpha.max(score);
            if beta <= alpha {
                break;
            }
        }
        best
    } else {
        let mut best = i32::MAX;
        for mv in &moves {
            let undo = board.apply_move(mv);
            let score = minimax(board, depth - 1, true, ai_player, alpha, beta);
            board.undo_move(undo);
            best = best.min(score);
            beta = beta.min(score);
            if beta <= alpha {
                break;
            }
        }
        best
    }
}
