//! Joint depth-first traversal of the dictionary trie and the board.
//!
//! Every cell starts a walk. A walk extends the current path to an unvisited neighbor only if the
//! trie has an edge for that neighbor's letter (two edges, 'Q' then 'U', for a Q cell), so the
//! search is pruned to paths that are prefixes of some dictionary word. When the walk lands on a
//! terminal node it reports the word and marks the node as emitted; later paths spelling the same
//! word find the mark and stay quiet. The marks are undone when the solve finishes.

use std::cell::RefCell;

use bit_set::BitSet;
use instant::{Duration, Instant};
use log::{debug, trace};

use crate::adjacency::Adjacency;
use crate::alphabet::{letter_id, spelled_len, spelling, LetterId};
use crate::board::{Board, Dimensions};
use crate::error::BoggleError;
use crate::score::score_for_length;
use crate::trie::{NodeId, Trie};
use crate::{CellId, Result, MIN_WORD_LENGTH};

/// A struct tracking statistics about a single solve.
#[derive(Debug, Clone, Default)]
pub struct Statistics {
    /// Cells whose letter begins at least one dictionary word.
    pub start_cells: usize,
    /// (cell, trie node) pairs entered by the search.
    pub states: u64,
    pub words: usize,
    pub duration: Duration,
}

#[derive(Debug, Clone)]
pub struct Solution {
    pub words: Vec<String>,
    pub statistics: Statistics,
}

/// Finds dictionary words on Boggle boards.
///
/// A solver owns its trie and can be reused for any number of sequential solves. It isn't `Sync`:
/// a solve temporarily marks trie nodes, so two solves can't share one solver at the same time.
/// Build one solver per thread instead.
#[derive(Debug)]
pub struct BoggleSolver {
    trie: Trie,
    /// Neighbor lists for the most recently solved board shape.
    adjacency: RefCell<Option<Adjacency>>,
}

impl BoggleSolver {
    /// Build a solver for the given dictionary. Words must be uppercase 'A'-'Z'; duplicates are
    /// fine.
    pub fn new<I, S>(dictionary: I) -> Result<BoggleSolver>
        where
            I: IntoIterator<Item=S>,
            S: AsRef<str>,
    {
        let start = Instant::now();
        let trie = Trie::build(dictionary)?;

        debug!(
            "Built dictionary trie with {} words ({} nodes) in {:?}",
            trie.len(),
            trie.node_count(),
            start.elapsed()
        );

        Ok(BoggleSolver { trie, adjacency: RefCell::new(None) })
    }

    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    /// Number of distinct words in the dictionary.
    pub fn dictionary_size(&self) -> usize {
        self.trie.len()
    }

    /// Every dictionary word of at least `MIN_WORD_LENGTH` letters that can be spelled along a
    /// simple path of adjacent cells. Each word appears once; the order isn't meaningful.
    pub fn all_valid_words<B: Board + ?Sized>(&self, board: &B) -> Result<Vec<String>> {
        self.solve(board).map(|solution| solution.words)
    }

    /// Like `all_valid_words`, but also reports statistics about the search.
    pub fn solve<B: Board + ?Sized>(&self, board: &B) -> Result<Solution> {
        let start = Instant::now();

        // Read and validate the whole board up front, so nothing below can fail halfway through
        // a walk.
        let dimensions = Dimensions::of(board)?;
        let letters = read_letters(board, dimensions)?;

        let mut cache = self.adjacency.borrow_mut();
        if cache.as_ref().map_or(true, |adjacency| adjacency.dimensions() != dimensions) {
            trace!("Building adjacency for {}x{} board", dimensions.rows, dimensions.cols);
            *cache = Some(Adjacency::new(dimensions));
        }
        let adjacency = cache.get_or_insert_with(|| Adjacency::new(dimensions));

        let mut search = Search::new(&self.trie, adjacency, &letters);
        let mut start_cells = 0;
        for cell in dimensions.cells() {
            if search.walk_from(cell) {
                start_cells += 1;
            }
        }

        // Dropping the search clears every emitted mark.
        let states = search.states;
        let words = search.finish();

        let statistics = Statistics {
            start_cells,
            states,
            words: words.len(),
            duration: start.elapsed(),
        };
        debug!(
            "Solved {}x{} board: {:?}",
            dimensions.rows, dimensions.cols, statistics
        );

        Ok(Solution { words, statistics })
    }

    /// Points for `word` if it's in the dictionary, zero otherwise. Letters are taken literally:
    /// pass "QUIT", not "QIT".
    pub fn score_of(&self, word: &str) -> Result<u32> {
        if self.trie.contains(word)? {
            Ok(score_for_length(word.len()))
        } else {
            Ok(0)
        }
    }

    /// Sum of `score_of` over `words`.
    pub fn total_score<I, S>(&self, words: I) -> Result<u32>
        where
            I: IntoIterator<Item=S>,
            S: AsRef<str>,
    {
        words.into_iter().map(|word| self.score_of(word.as_ref())).sum()
    }
}

fn read_letters<B: Board + ?Sized>(board: &B, dimensions: Dimensions) -> Result<Vec<LetterId>> {
    dimensions.cells().map(|cell| {
        let (row, col) = dimensions.coord(cell);
        let letter = board.letter_at(row, col);
        letter_id(letter).ok_or(BoggleError::InvalidLetter { letter, position: cell })
    }).collect()
}

/// Trie nodes marked as emitted during one solve. Every mark is undone on drop, whether the solve
/// finished normally or not.
struct EmittedMarks<'a> {
    trie: &'a Trie,
    nodes: Vec<NodeId>,
}

impl<'a> EmittedMarks<'a> {
    fn new(trie: &'a Trie) -> EmittedMarks<'a> {
        EmittedMarks { trie, nodes: vec![] }
    }

    fn mark(&mut self, node: NodeId) {
        self.trie.mark_emitted(node);
        self.nodes.push(node);
    }
}

impl Drop for EmittedMarks<'_> {
    fn drop(&mut self) {
        for &node in &self.nodes {
            self.trie.restore(node);
        }
    }
}

/// One cell on the current path.
#[derive(Debug)]
struct Frame {
    cell: CellId,
    node: NodeId,
    /// Index into this cell's neighbor list of the next neighbor to try.
    next_neighbor: usize,
}

/// Working state for one solve. The path is an explicit stack rather than recursion, so path
/// length is only limited by the board size.
struct Search<'a> {
    trie: &'a Trie,
    adjacency: &'a Adjacency,
    letters: &'a [LetterId],

    /// Exactly the cells on the current path.
    visited: BitSet,
    /// The spelled letters of the current path.
    word: String,
    path: Vec<Frame>,

    marks: EmittedMarks<'a>,
    words: Vec<String>,
    states: u64,
}

impl<'a> Search<'a> {
    fn new(trie: &'a Trie, adjacency: &'a Adjacency, letters: &'a [LetterId]) -> Search<'a> {
        Search {
            trie,
            adjacency,
            letters,
            visited: BitSet::with_capacity(letters.len()),
            word: String::with_capacity(2 * letters.len()),
            path: Vec::with_capacity(letters.len()),
            marks: EmittedMarks::new(trie),
            words: vec![],
            states: 0,
        }
    }

    /// Explore every path starting at `start`. Returns false if no dictionary word begins with
    /// the start cell's letter.
    fn walk_from(&mut self, start: CellId) -> bool {
        let node = match self.trie.follow(self.trie.root(), self.letters[start]) {
            Some(node) => node,
            None => return false,
        };
        self.enter(start, node);

        let adjacency = self.adjacency;
        while let Some(frame) = self.path.last_mut() {
            let next = match adjacency.neighbors(frame.cell).get(frame.next_neighbor) {
                Some(&next) => next,
                None => {
                    self.leave();
                    continue;
                }
            };
            frame.next_neighbor += 1;
            let node = frame.node;

            if self.visited.contains(next) {
                continue;
            }
            if let Some(child) = self.trie.follow(node, self.letters[next]) {
                self.enter(next, child);
            }
        }

        debug_assert!(self.visited.is_empty() && self.word.is_empty());
        true
    }

    /// Extend the path to `cell`, whose letters lead to `node`, reporting the word if it's new.
    fn enter(&mut self, cell: CellId, node: NodeId) {
        self.visited.insert(cell);
        self.word.push_str(spelling(self.letters[cell]));
        self.path.push(Frame { cell, node, next_neighbor: 0 });
        self.states += 1;

        if self.word.len() >= MIN_WORD_LENGTH && self.trie.is_terminal_unseen(node) {
            self.words.push(self.word.clone());
            self.marks.mark(node);
        }
    }

    /// Drop the last cell from the path.
    fn leave(&mut self) {
        if let Some(frame) = self.path.pop() {
            self.visited.remove(frame.cell);
            let len = self.word.len() - spelled_len(self.letters[frame.cell]);
            self.word.truncate(len);
        }
    }

    fn finish(self) -> Vec<String> {
        let Search { words, marks, .. } = self;
        drop(marks);
        words
    }
}
