//! Move legality and line scanning.
//!
//! Each piece kind has its own movement rule:
//!
//! - **Donkey**: one orthogonal step onto an empty cell.
//! - **Snake**: one step in any of the 8 directions onto an empty cell.
//! - **Frog**: a snake-style step, or a straight-line vault over a contiguous
//!   run of one or more occupied cells (either owner), landing on the first
//!   empty cell after the run.
//!
//! The same module owns the 4-cell window scanner shared by win detection
//! and the evaluator: every horizontal, vertical, diagonal and anti-diagonal
//! 4-length window on the board is classified by how many cells the player
//! owns, how many are empty, and whether the opponent intrudes.

use crate::board::{Board, PieceKind, Player};
use crate::constants::{GRID_SIZE, LINE_DIRS, WIN_LENGTH};

/// A candidate move. Transient: built by move generation, scored by the
/// search engine, never persisted.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Move {
    pub from_row: i32,
    pub from_col: i32,
    pub to_row: i32,
    pub to_col: i32,
    pub score: i32,
}

/// Whether a piece of `kind` may move between the given cells on this board.
///
/// Pure predicate over the current position; it does not consider whose turn
/// it is or what actually stands on the source cell.
pub fn can_move(
    board: &Board,
    kind: PieceKind,
    from_row: i32,
    from_col: i32,
    to_row: i32,
    to_col: i32,
) -> bool {
    if !board.is_empty(to_row, to_col) {
        return false;
    }
    let dr = to_row - from_row;
    let dc = to_col - from_col;
    if dr == 0 && dc == 0 {
        return false;
    }

    match kind {
        PieceKind::Donkey => (dr.abs() == 1 && dc == 0) || (dr == 0 && dc.abs() == 1),
        PieceKind::Snake => dr.abs().max(dc.abs()) == 1,
        PieceKind::Frog => {
            dr.abs().max(dc.abs()) == 1 || frog_vault(board, from_row, from_col, dr, dc)
        }
    }
}

/// Frog vault: the path must be collinear and every cell strictly between
/// source and destination must be occupied, so the frog clears a contiguous
/// run of at least one piece and lands on the first empty cell after it.
fn frog_vault(board: &Board, from_row: i32, from_col: i32, dr: i32, dc: i32) -> bool {
    if !(dr == 0 || dc == 0 || dr.abs() == dc.abs()) {
        return false;
    }
    let dist = dr.abs().max(dc.abs());
    if dist < 2 {
        return false;
    }
    let step_r = dr.signum();
    let step_c = dc.signum();
    for i in 1..dist {
        if board.is_empty(from_row + i * step_r, from_col + i * step_c) {
            return false;
        }
    }
    true
}

/// All legal destinations for the current player's piece at the given cell.
/// Empty when the cell does not hold one of the current player's pieces.
pub fn valid_moves(board: &Board, from_row: i32, from_col: i32) -> Vec<(i32, i32)> {
    let mut moves = Vec::new();
    if board.owner_at(from_row, from_col) != board.current_player() {
        return moves;
    }
    let Some(kind) = board.kind_at(from_row, from_col) else {
        return moves;
    };
    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            if can_move(board, kind, from_row, from_col, row, col) {
                moves.push((row, col));
            }
        }
    }
    moves
}

/// Every legal move for every piece `player` has on the board.
pub fn moves_for(board: &Board, player: Player) -> Vec<Move> {
    let mut all = Vec::new();
    if player == Player::None {
        return all;
    }
    for from_row in 0..GRID_SIZE {
        for from_col in 0..GRID_SIZE {
            if board.owner_at(from_row, from_col) != player {
                continue;
            }
            let Some(kind) = board.kind_at(from_row, from_col) else {
                continue;
            };
            for to_row in 0..GRID_SIZE {
                for to_col in 0..GRID_SIZE {
                    if can_move(board, kind, from_row, from_col, to_row, to_col) {
                        all.push(Move {
                            from_row,
                            from_col,
                            to_row,
                            to_col,
                            score: 0,
                        });
                    }
                }
            }
        }
    }
    all
}

/// Walk every 4-length window in the four orientations and count those the
/// classifier accepts. The classifier sees (own cells, empty cells,
/// opponent present).
fn count_windows(board: &Board, player: Player, accept: impl Fn(i32, i32, bool) -> bool) -> u32 {
    let mut total = 0;
    for (dir_r, dir_c) in LINE_DIRS {
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let end_row = row + dir_r * (WIN_LENGTH - 1);
                let end_col = col + dir_c * (WIN_LENGTH - 1);
                if end_row < 0 || end_row >= GRID_SIZE || end_col < 0 || end_col >= GRID_SIZE {
                    continue;
                }
                let mut own = 0;
                let mut empty = 0;
                let mut enemy = false;
                for i in 0..WIN_LENGTH {
                    let r = row + i * dir_r;
                    let c = col + i * dir_c;
                    if board.owner_at(r, c) == player {
                        own += 1;
                    } else if board.is_empty(r, c) {
                        empty += 1;
                    } else {
                        enemy = true;
                    }
                }
                if accept(own, empty, enemy) {
                    total += 1;
                }
            }
        }
    }
    total
}

/// Complete 4-lines owned by `player`. Nonzero means `player` has won.
pub fn count_lines(board: &Board, player: Player) -> u32 {
    count_windows(board, player, |own, _, _| own == WIN_LENGTH)
}

/// Windows holding three of `player`'s pieces and one empty cell: one move
/// from a win.
pub fn count_threats(board: &Board, player: Player) -> u32 {
    count_windows(board, player, |own, empty, _| {
        own == WIN_LENGTH - 1 && empty == 1
    })
}

/// Windows with two or more of `player`'s pieces, at least one empty cell,
/// and no opposing piece: still completable lines.
pub fn count_potential(board: &Board, player: Player) -> u32 {
    count_windows(board, player, |own, empty, enemy| {
        own >= 2 && empty >= 1 && !enemy
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(pieces: &[(i32, i32, Player, PieceKind)]) -> Board {
        let mut board = Board::new();
        for &(row, col, owner, kind) in pieces {
            board.set_piece(row, col, owner, kind);
        }
        board
    }

    #[test]
    fn test_donkey_moves_orthogonally() {
        let board = board_with(&[(2, 2, Player::One, PieceKind::Donkey)]);
        assert!(can_move(&board, PieceKind::Donkey, 2, 2, 1, 2));
        assert!(can_move(&board, PieceKind::Donkey, 2, 2, 3, 2));
        assert!(can_move(&board, PieceKind::Donkey, 2, 2, 2, 1));
        assert!(can_move(&board, PieceKind::Donkey, 2, 2, 2, 3));
        // No diagonals, no long steps.
        assert!(!can_move(&board, PieceKind::Donkey, 2, 2, 3, 3));
        assert!(!can_move(&board, PieceKind::Donkey, 2, 2, 2, 4));
        assert!(!can_move(&board, PieceKind::Donkey, 2, 2, 2, 2));
    }

    #[test]
    fn test_donkey_blocked_by_occupied_destination() {
        let board = board_with(&[
            (2, 2, Player::One, PieceKind::Donkey),
            (2, 3, Player::Two, PieceKind::Snake),
        ]);
        assert!(!can_move(&board, PieceKind::Donkey, 2, 2, 2, 3));
    }

    #[test]
    fn test_snake_moves_all_eight_directions() {
        let board = board_with(&[(2, 2, Player::One, PieceKind::Snake)]);
        for dr in -1..=1 {
            for dc in -1..=1 {
                if dr == 0 && dc == 0 {
                    continue;
                }
                assert!(
                    can_move(&board, PieceKind::Snake, 2, 2, 2 + dr, 2 + dc),
                    "snake should step to ({}, {})",
                    2 + dr,
                    2 + dc
                );
            }
        }
        assert!(!can_move(&board, PieceKind::Snake, 2, 2, 2, 4));
        assert!(!can_move(&board, PieceKind::Snake, 2, 2, 4, 4));
    }

    #[test]
    fn test_moves_stay_on_board() {
        let board = board_with(&[(0, 0, Player::One, PieceKind::Snake)]);
        assert!(!can_move(&board, PieceKind::Snake, 0, 0, -1, 0));
        assert!(!can_move(&board, PieceKind::Snake, 0, 0, 0, -1));
        assert!(!can_move(&board, PieceKind::Snake, 0, 0, -1, -1));
    }

    #[test]
    fn test_frog_single_step() {
        let board = board_with(&[(2, 2, Player::One, PieceKind::Frog)]);
        assert!(can_move(&board, PieceKind::Frog, 2, 2, 1, 1));
        assert!(can_move(&board, PieceKind::Frog, 2, 2, 3, 2));
    }

    #[test]
    fn test_frog_vaults_single_piece() {
        let board = board_with(&[
            (2, 0, Player::One, PieceKind::Frog),
            (2, 1, Player::One, PieceKind::Donkey),
        ]);
        // Vault over (2,1) onto the first empty cell behind it.
        assert!(can_move(&board, PieceKind::Frog, 2, 0, 2, 2));
        // Landing past an empty gap is not a vault.
        assert!(!can_move(&board, PieceKind::Frog, 2, 0, 2, 3));
        assert!(!can_move(&board, PieceKind::Frog, 2, 0, 2, 4));
    }

    #[test]
    fn test_frog_vaults_contiguous_run() {
        let board = board_with(&[
            (2, 0, Player::One, PieceKind::Frog),
            (2, 1, Player::One, PieceKind::Donkey),
            (2, 2, Player::Two, PieceKind::Donkey),
            (2, 3, Player::Two, PieceKind::Snake),
        ]);
        // Run of three pieces of mixed ownership, landing at (2,4).
        assert!(can_move(&board, PieceKind::Frog, 2, 0, 2, 4));
    }

    #[test]
    fn test_frog_vault_rejects_gap_in_run() {
        let board = board_with(&[
            (2, 0, Player::One, PieceKind::Frog),
            (2, 1, Player::One, PieceKind::Donkey),
            (2, 3, Player::Two, PieceKind::Donkey),
        ]);
        // (2,2) is empty, so the run is broken before (2,4).
        assert!(!can_move(&board, PieceKind::Frog, 2, 0, 2, 4));
    }

    #[test]
    fn test_frog_vault_rejects_non_collinear_path() {
        let board = board_with(&[
            (2, 0, Player::One, PieceKind::Frog),
            (2, 1, Player::One, PieceKind::Donkey),
        ]);
        assert!(!can_move(&board, PieceKind::Frog, 2, 0, 1, 2));
        assert!(!can_move(&board, PieceKind::Frog, 2, 0, 0, 3));
    }

    #[test]
    fn test_frog_long_move_without_vault_is_illegal() {
        let board = board_with(&[(2, 0, Player::One, PieceKind::Frog)]);
        // Collinear, empty path, nothing vaulted: not a jump.
        assert!(!can_move(&board, PieceKind::Frog, 2, 0, 2, 2));
        assert!(!can_move(&board, PieceKind::Frog, 2, 0, 2, 4));
    }

    #[test]
    fn test_frog_vaults_diagonally() {
        let board = board_with(&[
            (0, 0, Player::One, PieceKind::Frog),
            (1, 1, Player::Two, PieceKind::Donkey),
        ]);
        assert!(can_move(&board, PieceKind::Frog, 0, 0, 2, 2));
        assert!(!can_move(&board, PieceKind::Frog, 0, 0, 3, 3));
    }

    #[test]
    fn test_valid_moves_requires_current_player_ownership() {
        let board = board_with(&[
            (2, 2, Player::Two, PieceKind::Donkey),
            (0, 0, Player::One, PieceKind::Donkey),
        ]);
        // Player one to move: the opponent's donkey yields nothing.
        assert!(valid_moves(&board, 2, 2).is_empty());
        assert_eq!(valid_moves(&board, 0, 0), vec![(0, 1), (1, 0)]);
        assert!(valid_moves(&board, 3, 3).is_empty());
    }

    #[test]
    fn test_moves_for_covers_all_pieces() {
        let board = board_with(&[
            (0, 0, Player::One, PieceKind::Donkey),
            (4, 4, Player::One, PieceKind::Donkey),
            (2, 2, Player::Two, PieceKind::Snake),
        ]);
        let moves = moves_for(&board, Player::One);
        // Each corner donkey has two orthogonal steps.
        assert_eq!(moves.len(), 4);
        assert!(moves.iter().all(|m| board.owner_at(m.from_row, m.from_col) == Player::One));
        assert!(moves_for(&board, Player::None).is_empty());
    }

    #[test]
    fn test_count_lines_detects_all_orientations() {
        for (dir_r, dir_c, start_r, start_c) in
            [(0, 1, 1, 0), (1, 0, 0, 3), (1, 1, 1, 1), (1, -1, 0, 4)]
        {
            let mut board = Board::new();
            for i in 0..WIN_LENGTH {
                board.set_piece(
                    start_r + i * dir_r,
                    start_c + i * dir_c,
                    Player::Two,
                    PieceKind::Donkey,
                );
            }
            assert_eq!(
                count_lines(&board, Player::Two),
                1,
                "direction ({dir_r}, {dir_c})"
            );
            assert_eq!(count_lines(&board, Player::One), 0);
        }
    }

    #[test]
    fn test_count_lines_ignores_mixed_windows() {
        let board = board_with(&[
            (0, 0, Player::One, PieceKind::Donkey),
            (0, 1, Player::One, PieceKind::Donkey),
            (0, 2, Player::Two, PieceKind::Donkey),
            (0, 3, Player::One, PieceKind::Donkey),
        ]);
        assert_eq!(count_lines(&board, Player::One), 0);
        assert_eq!(count_lines(&board, Player::Two), 0);
    }

    #[test]
    fn test_count_threats() {
        let board = board_with(&[
            (0, 0, Player::One, PieceKind::Donkey),
            (0, 1, Player::One, PieceKind::Donkey),
            (0, 2, Player::One, PieceKind::Snake),
        ]);
        // (0,0)..(0,3) has three own cells and one empty.
        assert_eq!(count_threats(&board, Player::One), 1);
        assert_eq!(count_threats(&board, Player::Two), 0);
    }

    #[test]
    fn test_count_threats_blocked_window() {
        let board = board_with(&[
            (0, 0, Player::One, PieceKind::Donkey),
            (0, 1, Player::One, PieceKind::Donkey),
            (0, 2, Player::One, PieceKind::Snake),
            (0, 3, Player::Two, PieceKind::Donkey),
        ]);
        assert_eq!(count_threats(&board, Player::One), 0);
    }

    #[test]
    fn test_count_potential() {
        let board = board_with(&[
            (2, 1, Player::One, PieceKind::Donkey),
            (2, 2, Player::One, PieceKind::Donkey),
        ]);
        // Windows (2,0..3) and (2,1..4) both qualify; every other orientation
        // through the pair holds at most one piece per window.
        assert_eq!(count_potential(&board, Player::One), 2);
    }

    #[test]
    fn test_count_potential_excludes_contested_windows() {
        let board = board_with(&[
            (2, 1, Player::One, PieceKind::Donkey),
            (2, 2, Player::One, PieceKind::Donkey),
            (2, 3, Player::Two, PieceKind::Donkey),
            (2, 0, Player::Two, PieceKind::Snake),
        ]);
        assert_eq!(count_potential(&board, Player::One), 0);
    }
}
