//! Letter sets over the 26-symbol alphabet
//!
//! A `LetterSet` is a 26-bit mask, one bit per lowercase ASCII letter. It is used
//! both for per-position domains and for the set of letters known to be present.
//!
//! Iteration is always in ascending letter order (`a` first), which makes every
//! search built on top of it deterministic.

use std::fmt;

/// Number of symbols in the alphabet
pub const ALPHABET_SIZE: usize = 26;

const FULL_MASK: u32 = (1 << ALPHABET_SIZE) - 1;

/// A set of lowercase ASCII letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LetterSet(u32);

#[inline]
const fn bit(letter: u8) -> u32 {
    debug_assert!(letter.is_ascii_lowercase(), "letter must be a..z");
    1 << (letter - b'a')
}

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    /// Every letter `a..=z`
    pub const ALPHABET: Self = Self(FULL_MASK);

    /// Set holding exactly one letter
    #[inline]
    #[must_use]
    pub const fn single(letter: u8) -> Self {
        Self(bit(letter))
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        letter.is_ascii_lowercase() && self.0 & bit(letter) != 0
    }

    #[inline]
    pub fn insert(&mut self, letter: u8) {
        self.0 |= bit(letter);
    }

    #[inline]
    pub fn remove(&mut self, letter: u8) {
        self.0 &= !bit(letter);
    }

    #[inline]
    #[must_use]
    pub const fn with(self, letter: u8) -> Self {
        Self(self.0 | bit(letter))
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True when the domain has been narrowed to a single letter
    #[inline]
    #[must_use]
    pub const fn is_singleton(self) -> bool {
        self.0.count_ones() == 1
    }

    /// The only member of a singleton set
    #[must_use]
    pub const fn only(self) -> Option<u8> {
        if self.is_singleton() {
            Some(b'a' + self.0.trailing_zeros() as u8)
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    #[inline]
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    #[inline]
    #[must_use]
    pub const fn is_superset(self, other: Self) -> bool {
        other.0 & !self.0 == 0
    }

    /// Letters in ascending order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        let mut mask = self.0;
        std::iter::from_fn(move || {
            if mask == 0 {
                return None;
            }
            let index = mask.trailing_zeros();
            mask &= mask - 1;
            Some(b'a' + index as u8)
        })
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for letter in self.iter() {
            write!(f, "{}", letter as char)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_has_all_letters() {
        assert_eq!(LetterSet::ALPHABET.len(), 26);
        assert!(LetterSet::ALPHABET.contains(b'a'));
        assert!(LetterSet::ALPHABET.contains(b'z'));
        assert!(!LetterSet::ALPHABET.contains(b'A'));
    }

    #[test]
    fn iteration_is_ascending() {
        let set: LetterSet = b"zebra".iter().copied().collect();
        let letters: Vec<u8> = set.iter().collect();
        assert_eq!(letters, b"aberz");
    }

    #[test]
    fn insert_and_remove() {
        let mut set = LetterSet::EMPTY;
        set.insert(b'q');
        set.insert(b'q');
        assert_eq!(set.len(), 1);
        assert_eq!(set.only(), Some(b'q'));

        set.remove(b'q');
        assert!(set.is_empty());
        assert_eq!(set.only(), None);
    }

    #[test]
    fn set_algebra() {
        let abc: LetterSet = b"abc".iter().copied().collect();
        let bcd: LetterSet = b"bcd".iter().copied().collect();

        assert_eq!(abc.union(bcd).len(), 4);
        assert_eq!(abc.intersection(bcd).to_string(), "{bc}");
        assert_eq!(abc.difference(bcd).to_string(), "{a}");
        assert!(abc.is_superset(LetterSet::single(b'b')));
        assert!(!abc.is_superset(bcd));
        assert!(abc.is_superset(LetterSet::EMPTY));
    }

    #[test]
    fn with_does_not_mutate_original() {
        let base = LetterSet::single(b'a');
        let extended = base.with(b'b');
        assert_eq!(base.len(), 1);
        assert_eq!(extended.len(), 2);
    }
}
