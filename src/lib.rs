//! Boggle solving over a prefix trie.
//!
//! A [`BoggleSolver`] is built once from a list of uppercase dictionary words. Each call to
//! [`BoggleSolver::all_valid_words`] walks the trie and the board together, depth-first, and
//! returns every dictionary word that can be spelled along a simple path of king-move adjacent
//! cells. A `Q` cell always stands for the two letters `QU`.
//!
//! ```
//! use boggle::{BoggleSolver, GridBoard};
//!
//! let solver = BoggleSolver::new(["CAT", "CATS", "DOG"]).unwrap();
//! let board = GridBoard::from_rows(&["CA", "TS"]).unwrap();
//!
//! let mut words = solver.all_valid_words(&board).unwrap();
//! words.sort();
//! assert_eq!(words, vec!["CAT", "CATS"]);
//! assert_eq!(solver.score_of("CATS").unwrap(), 1);
//! ```

pub mod adjacency;
pub mod alphabet;
pub mod board;
pub mod error;
pub mod score;
pub mod solver;
pub mod trie;

pub use adjacency::Adjacency;
pub use board::{Board, Dimensions, GridBoard};
pub use error::{BoggleError, ErrorKind};
pub use score::score_for_length;
pub use solver::{BoggleSolver, Solution, Statistics};
pub use trie::Trie;

/// Words shorter than this many spelled letters are never emitted or scored.
pub const MIN_WORD_LENGTH: usize = 3;

/// The number of letters in the board alphabet, 'A' through 'Z'.
pub const ALPHABET_SIZE: usize = 26;

/// The maximum number of neighbors a cell can have under king-move adjacency.
pub const MAX_NEIGHBORS: usize = 8;

/// An identifier for a board cell, based on its row-major index.
pub type CellId = usize;

/// Zero-indexed (row, col) coords for a cell on the board, where row = 0 is the top row.
pub type CellCoord = (usize, usize);

/// Result type for every fallible operation in the crate.
pub type Result<T> = std::result::Result<T, BoggleError>;
