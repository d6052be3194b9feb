//! Prefix tree over the dictionary
//!
//! The trie is built once per word list and never mutated afterwards, so a single
//! instance can be shared by reference across any number of concurrently simulated
//! games.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_csp::core::{LetterSet, Word};
//! use wordle_csp::trie::Trie;
//!
//! let trie: Trie = ["crane", "slate", "crate"]
//!     .into_iter()
//!     .map(|w| Word::new(w).unwrap())
//!     .collect();
//!
//! // Words ending in "ate" that contain an 'r'
//! let mut domains = vec![LetterSet::ALPHABET; 5];
//! domains[2] = LetterSet::single(b'a');
//! domains[3] = LetterSet::single(b't');
//! domains[4] = LetterSet::single(b'e');
//!
//! let found = trie.search_with_constraints(LetterSet::single(b'r'), &domains);
//! assert_eq!(found.len(), 1);
//! assert_eq!(found[0].text(), "crate");
//! ```

mod search;

use crate::core::Word;
use rustc_hash::FxHashMap;

/// A node in the trie
///
/// Children are owned exclusively, so the structure is a tree with no sharing.
#[derive(Debug, Default)]
pub struct TrieNode {
    children: FxHashMap<u8, TrieNode>,
    is_end: bool,
}

impl TrieNode {
    /// Child reached over the edge labelled `letter`
    #[inline]
    #[must_use]
    pub fn child(&self, letter: u8) -> Option<&Self> {
        self.children.get(&letter)
    }

    /// True if a complete dictionary word ends here
    #[inline]
    #[must_use]
    pub const fn is_end(&self) -> bool {
        self.is_end
    }
}

/// Dictionary trie
#[derive(Debug, Default)]
pub struct Trie {
    root: TrieNode,
    len: usize,
}

impl Trie {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a trie from a word list
    #[must_use]
    pub fn build<'a, I>(words: I) -> Self
    where
        I: IntoIterator<Item = &'a Word>,
    {
        let mut trie = Self::new();
        for word in words {
            trie.insert(word);
        }
        trie
    }

    /// Insert a word, returning `false` if it was already present
    pub fn insert(&mut self, word: &Word) -> bool {
        let mut node = &mut self.root;
        for &letter in word.chars() {
            node = node.children.entry(letter).or_default();
        }

        if node.is_end {
            return false;
        }
        node.is_end = true;
        self.len += 1;
        true
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        word.chars()
            .iter()
            .try_fold(&self.root, |node, &letter| node.child(letter))
            .is_some_and(TrieNode::is_end)
    }

    /// Number of distinct words stored
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub const fn root(&self) -> &TrieNode {
        &self.root
    }
}

impl FromIterator<Word> for Trie {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        let mut trie = Self::new();
        for word in iter {
            trie.insert(&word);
        }
        trie
    }
}
