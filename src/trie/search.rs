//! Constrained enumeration over the trie
//!
//! The walk is guided by the per-position domains rather than the trie's own edges:
//! at depth `d` only letters of `domains[d]` are tried, and only those with a
//! matching child are followed. The trie prunes non-words, the domains prune
//! constraint violations.

use super::{Trie, TrieNode};
use crate::core::{LetterSet, Word};

impl Trie {
    /// All words `w` with `w.len() == domains.len()`, `w[i] ∈ domains[i]` for every
    /// position, and every letter of `required` appearing somewhere in `w`
    ///
    /// Results come out in lexicographic order because each domain is walked in
    /// ascending letter order.
    #[must_use]
    pub fn search_with_constraints(&self, required: LetterSet, domains: &[LetterSet]) -> Vec<Word> {
        let mut results = Vec::new();
        if domains.is_empty() {
            return results;
        }

        let mut walk = Walk {
            required,
            domains,
            prefix: Vec::with_capacity(domains.len()),
            results: &mut results,
        };
        walk.visit(&self.root, LetterSet::EMPTY);

        results
    }

    /// Every stored word of the given length, in lexicographic order
    #[must_use]
    pub fn words_of_len(&self, len: usize) -> Vec<Word> {
        self.search_with_constraints(LetterSet::EMPTY, &vec![LetterSet::ALPHABET; len])
    }
}

struct Walk<'a> {
    required: LetterSet,
    domains: &'a [LetterSet],
    prefix: Vec<u8>,
    results: &'a mut Vec<Word>,
}

impl Walk<'_> {
    /// `found` is the subset of required letters seen along this path only. It is
    /// `Copy`, so each child gets its own value and siblings never observe it.
    fn visit(&mut self, node: &TrieNode, found: LetterSet) {
        let depth = self.prefix.len();

        if depth == self.domains.len() {
            if node.is_end() && found.is_superset(self.required) {
                self.results.push(Word::from_letters(&self.prefix));
            }
            return;
        }

        // Not enough positions left to place the missing required letters
        if self.required.difference(found).len() > self.domains.len() - depth {
            return;
        }

        for letter in self.domains[depth].iter() {
            let Some(child) = node.child(letter) else {
                continue;
            };

            let found = if self.required.contains(letter) {
                found.with(letter)
            } else {
                found
            };

            self.prefix.push(letter);
            self.visit(child, found);
            self.prefix.pop();
        }
    }
}
