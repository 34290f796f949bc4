//! A 26-ary prefix trie over the board alphabet.
//!
//! Nodes live in a single arena and refer to their children by [`NodeId`]. The shape of the trie
//! is fixed once construction is finished; the only thing that changes afterwards is each node's
//! [`Terminal`] flag, which the solver flips to `Emitted` while a solve is in progress so that a
//! word reachable along several board paths is reported once. The flag sits in a `Cell` so this
//! can happen through a shared reference, and every flip must be undone with [`Trie::restore`]
//! before the solve returns.

use std::cell::Cell;

use crate::alphabet::{encode_word, LetterId, Q, U};
use crate::{Result, ALPHABET_SIZE};

/// An identifier for a trie node, based on its index in the Trie's `nodes` field.
pub type NodeId = usize;

/// Whether a node ends a dictionary word, and whether the current solve has already reported it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminal {
    No,
    Unseen,
    Emitted,
}

#[derive(Debug)]
struct TrieNode {
    terminal: Cell<Terminal>,
    children: [Option<NodeId>; ALPHABET_SIZE],
}

impl TrieNode {
    fn new() -> TrieNode {
        TrieNode { terminal: Cell::new(Terminal::No), children: [None; ALPHABET_SIZE] }
    }
}

#[derive(Debug)]
pub struct Trie {
    nodes: Vec<TrieNode>,
    /// Number of distinct words inserted.
    word_count: usize,
}

impl Default for Trie {
    fn default() -> Self {
        Trie::new()
    }
}

impl Trie {
    const ROOT: NodeId = 0;

    pub fn new() -> Trie {
        Trie { nodes: vec![TrieNode::new()], word_count: 0 }
    }

    /// Build a trie holding every word in `words`. Duplicates are ignored.
    pub fn build<I, S>(words: I) -> Result<Trie>
        where
            I: IntoIterator<Item=S>,
            S: AsRef<str>,
    {
        let mut trie = Trie::new();
        for word in words {
            trie.insert(word.as_ref())?;
        }
        Ok(trie)
    }

    pub fn root(&self) -> NodeId {
        Trie::ROOT
    }

    /// Add a word, creating nodes along its path as needed. Inserting a word that's already
    /// present changes nothing. Fails without modifying the trie if the word contains anything
    /// other than 'A'-'Z'.
    pub fn insert(&mut self, word: &str) -> Result<()> {
        let letters = encode_word(word)?;

        let mut node = Trie::ROOT;
        for &letter in &letters {
            let existing = self.nodes[node].children[letter];
            node = match existing {
                Some(child) => child,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(TrieNode::new());
                    self.nodes[node].children[letter] = Some(child);
                    child
                }
            };
        }

        let terminal = &self.nodes[node].terminal;
        if terminal.get() == Terminal::No {
            terminal.set(Terminal::Unseen);
            self.word_count += 1;
        }
        Ok(())
    }

    pub fn child(&self, node: NodeId, letter: LetterId) -> Option<NodeId> {
        self.nodes[node].children[letter]
    }

    /// Follow the edges a board cell holding `letter` contributes: one edge normally, or the two
    /// edges 'Q' then 'U' for a Q cell.
    pub fn follow(&self, node: NodeId, letter: LetterId) -> Option<NodeId> {
        let child = self.child(node, letter)?;
        if letter == Q {
            self.child(child, U)
        } else {
            Some(child)
        }
    }

    /// Walk the literal letters of `word` from the root.
    fn find(&self, word: &str) -> Result<Option<NodeId>> {
        let letters = encode_word(word)?;
        Ok(letters.iter().try_fold(Trie::ROOT, |node, &letter| self.child(node, letter)))
    }

    /// Is `word` one of the inserted words? Letters are taken literally, so "QUIT" is looked up
    /// as Q, U, I, T.
    pub fn contains(&self, word: &str) -> Result<bool> {
        Ok(self.find(word)?.map(|node| self.terminal(node) != Terminal::No).unwrap_or(false))
    }

    pub fn terminal(&self, node: NodeId) -> Terminal {
        self.nodes[node].terminal.get()
    }

    pub(crate) fn is_terminal_unseen(&self, node: NodeId) -> bool {
        self.terminal(node) == Terminal::Unseen
    }

    /// Mark a terminal node as already reported by the current solve.
    pub(crate) fn mark_emitted(&self, node: NodeId) {
        debug_assert_eq!(self.terminal(node), Terminal::Unseen);
        self.nodes[node].terminal.set(Terminal::Emitted);
    }

    /// Undo `mark_emitted`.
    pub(crate) fn restore(&self, node: NodeId) {
        debug_assert_ne!(self.terminal(node), Terminal::No);
        self.nodes[node].terminal.set(Terminal::Unseen);
    }

    /// Number of distinct words in the trie.
    pub fn len(&self) -> usize {
        self.word_count
    }

    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}
