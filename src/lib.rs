//! Beastline: a two-player abstract strategy game on a 5x5 grid, with a
//! minimax engine that plays either side.
//!
//! Each player places one frog, one snake and three donkeys, then moves them
//! trying to line up four pieces in a row (horizontally, vertically or
//! diagonally). Donkeys step orthogonally, snakes step in all eight
//! directions, and frogs can additionally vault along a straight line over a
//! contiguous run of pieces.
//!
//! ## Modules
//!
//! - [`constants`] - Board geometry, piece inventories, evaluation weights
//! - [`board`] - Board state and the placement/movement/game-over machine
//! - [`rules`] - Movement legality and 4-in-a-row line scanning
//! - [`eval`] - Heuristic position evaluation
//! - [`search`] - Minimax with alpha-beta pruning and the AI turn driver
//! - [`shell`] - Line-oriented text front end
//!
//! ## Example
//!
//! ```
//! use beastline::board::{Board, PieceKind, Player};
//! use beastline::search::{Difficulty, Searcher};
//!
//! let mut board = Board::new();
//! board.set_selected_kind(PieceKind::Donkey);
//! board.place_piece(2, 2);
//! assert_eq!(board.remaining(Player::One, PieceKind::Donkey), 2);
//!
//! // Let the AI answer for player two.
//! let mut ai = Searcher::new(Difficulty::Easy, 42);
//! ai.run_ai_turn(&mut board);
//! assert_eq!(board.current_player(), Player::One);
//! ```

pub mod board;
pub mod constants;
pub mod eval;
pub mod rules;
pub mod search;
pub mod shell;
