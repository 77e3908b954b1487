//! Board state and the game-phase state machine.
//!
//! The board owns the 5x5 cell grid, the per-player placement counters, the
//! current player, and the phase machine `Placement -> Movement -> GameOver`.
//! All mutation happens in place; the search engine borrows the board for the
//! duration of a search and restores it exactly via [`Board::apply_move`] /
//! [`Board::undo_move`].
//!
//! Illegal input (out-of-bounds coordinates, occupied cells, exhausted
//! inventory, wrong phase) is a silent no-op rather than an error: the front
//! end is expected to only offer legal choices and to poll the read accessors
//! to observe what happened. Out-of-bounds reads return the empty/`None`
//! sentinels so line-scanning callers need no bounds checks of their own.

use std::fmt;

use crate::constants::{
    GRID_SIZE, MAX_DONKEYS_PER_PLAYER, MAX_FROGS_PER_PLAYER, MAX_SNAKES_PER_PLAYER,
};
use crate::rules::{self, Move};

/// The three piece kinds, each with its own movement rule (see [`crate::rules`]).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PieceKind {
    Frog,
    Snake,
    Donkey,
}

impl PieceKind {
    /// All kinds, in placement-preference order.
    pub const ALL: [PieceKind; 3] = [PieceKind::Frog, PieceKind::Snake, PieceKind::Donkey];

    /// How many pieces of this kind each player may place.
    pub fn max_per_player(self) -> u8 {
        match self {
            PieceKind::Frog => MAX_FROGS_PER_PLAYER,
            PieceKind::Snake => MAX_SNAKES_PER_PLAYER,
            PieceKind::Donkey => MAX_DONKEYS_PER_PLAYER,
        }
    }

    /// Single-letter label used by the text renderer.
    pub fn label(self) -> char {
        match self {
            PieceKind::Frog => 'F',
            PieceKind::Snake => 'S',
            PieceKind::Donkey => 'D',
        }
    }

    fn index(self) -> usize {
        match self {
            PieceKind::Frog => 0,
            PieceKind::Snake => 1,
            PieceKind::Donkey => 2,
        }
    }
}

/// A player, or the `None` sentinel for empty cells and "no winner".
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Player {
    #[default]
    None,
    One,
    Two,
}

impl Player {
    /// The other player. `None` maps to itself.
    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
            Player::None => Player::None,
        }
    }

    fn index(self) -> Option<usize> {
        match self {
            Player::One => Some(0),
            Player::Two => Some(1),
            Player::None => None,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::None => write!(f, "none"),
            Player::One => write!(f, "player one"),
            Player::Two => write!(f, "player two"),
        }
    }
}

/// Game phase. Only ever advances; `reset_game` is the single way back.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GamePhase {
    Placement,
    Movement,
    GameOver,
}

/// An occupied cell's contents.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Piece {
    pub owner: Player,
    pub kind: PieceKind,
}

/// Saved state for reverting a search-applied move.
///
/// Captures everything [`Board::apply_move`] touches, including the
/// phase/winner bookkeeping a winning move sets, so that undo restores the
/// board bit for bit even on the forced-win early-return path.
#[derive(Debug)]
pub struct MoveUndo {
    from: (i32, i32),
    to: (i32, i32),
    moved: Option<Piece>,
    phase: GamePhase,
    winner: Player,
    current: Player,
}

/// The 5x5 board plus all per-game state.
pub struct Board {
    cells: [[Option<Piece>; GRID_SIZE as usize]; GRID_SIZE as usize],
    /// Placements made so far, indexed by [player][kind].
    placed: [[u8; 3]; 2],
    current: Player,
    selected_kind: PieceKind,
    phase: GamePhase,
    winner: Player,
    selection: Option<(i32, i32)>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// An empty board at the start of the placement phase, player one to move.
    pub fn new() -> Self {
        Self {
            cells: [[None; GRID_SIZE as usize]; GRID_SIZE as usize],
            placed: [[0; 3]; 2],
            current: Player::One,
            selected_kind: PieceKind::Frog,
            phase: GamePhase::Placement,
            winner: Player::None,
            selection: None,
        }
    }

    /// Restore the initial state. Always legal.
    pub fn reset_game(&mut self) {
        *self = Self::new();
    }

    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && row < GRID_SIZE && col >= 0 && col < GRID_SIZE
    }

    /// The piece at a cell, or `None` for empty and out-of-bounds cells.
    pub fn piece_at(&self, row: i32, col: i32) -> Option<Piece> {
        if !self.in_bounds(row, col) {
            return None;
        }
        self.cells[row as usize][col as usize]
    }

    /// Owner of a cell; `Player::None` for empty and out-of-bounds cells.
    pub fn owner_at(&self, row: i32, col: i32) -> Player {
        self.piece_at(row, col).map_or(Player::None, |p| p.owner)
    }

    /// Kind of the piece at a cell, if any.
    pub fn kind_at(&self, row: i32, col: i32) -> Option<PieceKind> {
        self.piece_at(row, col).map(|p| p.kind)
    }

    /// Whether a cell is an empty, playable cell. Out of bounds is not.
    pub fn is_empty(&self, row: i32, col: i32) -> bool {
        self.in_bounds(row, col) && self.cells[row as usize][col as usize].is_none()
    }

    pub fn current_player(&self) -> Player {
        self.current
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// The winner once the game is over; `Player::None` otherwise (and for a
    /// drawn terminal state).
    pub fn winner(&self) -> Player {
        self.winner
    }

    /// The currently picked-up piece during the movement phase.
    pub fn selection(&self) -> Option<(i32, i32)> {
        self.selection
    }

    pub fn selected_kind(&self) -> PieceKind {
        self.selected_kind
    }

    /// Advisory intent for which kind the next placement uses.
    pub fn set_selected_kind(&mut self, kind: PieceKind) {
        self.selected_kind = kind;
    }

    /// Placements of `kind` still available to `player`.
    pub fn remaining(&self, player: Player, kind: PieceKind) -> u8 {
        match player.index() {
            Some(p) => kind.max_per_player() - self.placed[p][kind.index()],
            None => 0,
        }
    }

    /// Total placements still available to `player` across all kinds.
    pub fn total_remaining(&self, player: Player) -> u8 {
        PieceKind::ALL
            .iter()
            .map(|&k| self.remaining(player, k))
            .sum()
    }

    /// Directly set a cell's occupant. No-op out of bounds.
    ///
    /// Bypasses phase and inventory rules; used by the search engine's
    /// what-if probes and by tests to build positions.
    pub fn set_piece(&mut self, row: i32, col: i32, owner: Player, kind: PieceKind) {
        if self.in_bounds(row, col) {
            self.cells[row as usize][col as usize] = Some(Piece { owner, kind });
        }
    }

    /// Directly clear a cell. No-op out of bounds.
    pub fn clear_cell(&mut self, row: i32, col: i32) {
        if self.in_bounds(row, col) {
            self.cells[row as usize][col as usize] = None;
        }
    }

    /// Place the selected piece kind for the current player.
    ///
    /// Silent no-op unless the cell is an empty in-bounds cell, the phase is
    /// `Placement`, and the current player has inventory left for the
    /// selected kind. On success the placement is win-checked; if the game is
    /// not over the turn passes, and once both inventories are empty the
    /// phase advances to `Movement`.
    pub fn place_piece(&mut self, row: i32, col: i32) {
        if self.phase != GamePhase::Placement {
            return;
        }
        if !self.is_empty(row, col) {
            return;
        }
        if self.remaining(self.current, self.selected_kind) == 0 {
            return;
        }

        self.set_piece(row, col, self.current, self.selected_kind);
        if let Some(p) = self.current.index() {
            self.placed[p][self.selected_kind.index()] += 1;
        }

        if rules::count_lines(self, self.current) > 0 {
            self.winner = self.current;
            self.phase = GamePhase::GameOver;
            return;
        }

        self.current = self.current.opponent();
        if self.total_remaining(Player::One) == 0 && self.total_remaining(Player::Two) == 0 {
            self.phase = GamePhase::Movement;
        }
    }

    /// Handle a movement-phase click.
    ///
    /// With no active selection, clicking one of the current player's pieces
    /// picks it up. With a selection, clicking a legal destination commits
    /// the move (win check, then turn toggle if the game is not over).
    /// Clicking an illegal target clears the selection and immediately
    /// retries the click as a fresh selection, so clicking another own piece
    /// switches the selection rather than erroring.
    pub fn click_cell(&mut self, row: i32, col: i32) {
        if self.phase != GamePhase::Movement {
            return;
        }

        let Some((from_row, from_col)) = self.selection else {
            self.try_select(row, col);
            return;
        };

        let legal = match self.kind_at(from_row, from_col) {
            Some(kind) => rules::can_move(self, kind, from_row, from_col, row, col),
            None => false,
        };

        if legal {
            self.commit_move(from_row, from_col, row, col);
        } else {
            self.selection = None;
            self.try_select(row, col);
        }
    }

    fn try_select(&mut self, row: i32, col: i32) {
        if self.current != Player::None && self.owner_at(row, col) == self.current {
            self.selection = Some((row, col));
        }
    }

    fn commit_move(&mut self, from_row: i32, from_col: i32, to_row: i32, to_col: i32) {
        if let Some(piece) = self.piece_at(from_row, from_col) {
            self.clear_cell(from_row, from_col);
            self.set_piece(to_row, to_col, piece.owner, piece.kind);
        }
        self.selection = None;

        if rules::count_lines(self, self.current) > 0 {
            self.winner = self.current;
            self.phase = GamePhase::GameOver;
        } else {
            self.current = self.current.opponent();
        }
    }

    /// Apply a move transiently for the search engine.
    ///
    /// Performs the full committed-move transition (relocate the piece, win
    /// check, turn toggle when the game is not over) and returns a token that
    /// [`Board::undo_move`] uses to restore the board exactly, including any
    /// phase/winner bookkeeping set here. The move is expected to be legal;
    /// an empty source leaves the grid untouched and yields a no-op token.
    pub fn apply_move(&mut self, mv: &Move) -> MoveUndo {
        let undo = MoveUndo {
            from: (mv.from_row, mv.from_col),
            to: (mv.to_row, mv.to_col),
            moved: self.piece_at(mv.from_row, mv.from_col),
            phase: self.phase,
            winner: self.winner,
            current: self.current,
        };

        if let Some(piece) = undo.moved {
            self.clear_cell(mv.from_row, mv.from_col);
            self.set_piece(mv.to_row, mv.to_col, piece.owner, piece.kind);

            if rules::count_lines(self, piece.owner) > 0 {
                self.winner = piece.owner;
                self.phase = GamePhase::GameOver;
            } else {
                self.current = self.current.opponent();
            }
        }

        undo
    }

    /// Revert a move applied with [`Board::apply_move`].
    pub fn undo_move(&mut self, undo: MoveUndo) {
        if let Some(piece) = undo.moved {
            self.clear_cell(undo.to.0, undo.to.1);
            self.set_piece(undo.from.0, undo.from.1, piece.owner, piece.kind);
        }
        self.phase = undo.phase;
        self.winner = undo.winner;
        self.current = undo.current;
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let ch = match self.piece_at(row, col) {
                    Some(p) if p.owner == Player::One => p.kind.label(),
                    Some(p) => p.kind.label().to_ascii_lowercase(),
                    None => '.',
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
