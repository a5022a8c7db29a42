//! Fixed-size set of letters `A..=Z`

/// A set of upper-case ASCII letters stored as a 26-bit mask
///
/// Bytes outside `A..=Z` have no slot and are ignored on insert.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    pub const EMPTY: Self = Self(0);

    const fn bit(letter: u8) -> u32 {
        match letter {
            b'A'..=b'Z' => 1 << (letter - b'A'),
            _ => 0,
        }
    }

    #[inline]
    pub fn insert(&mut self, letter: u8) {
        self.0 |= Self::bit(letter);
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        let bit = Self::bit(letter);
        bit != 0 && self.0 & bit != 0
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// True when every letter of `self` is also in `other`
    #[inline]
    #[must_use]
    pub const fn is_subset(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn is_disjoint(self, other: Self) -> bool {
        self.0 & other.0 == 0
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

#[cfg(test)]
impl LetterSet {
    pub(crate) const fn len(self) -> u32 {
        self.0.count_ones()
    }

    pub(crate) const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Letters in alphabetical order
    pub(crate) fn iter(self) -> impl Iterator<Item = u8> {
        (b'A'..=b'Z').filter(move |&letter| self.contains(letter))
    }
}

#[cfg(test)]
impl std::fmt::Display for LetterSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for letter in self.iter() {
            write!(f, "{}", char::from(letter))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_contains() {
        let mut set = LetterSet::EMPTY;
        set.insert(b'A');
        set.insert(b'Z');
        set.insert(b'A');

        assert!(set.contains(b'A'));
        assert!(set.contains(b'Z'));
        assert!(!set.contains(b'M'));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn ignores_bytes_outside_alphabet() {
        let set: LetterSet = b"a#_Q".iter().copied().collect();
        assert_eq!(set.len(), 1);
        assert!(set.contains(b'Q'));
        assert!(!set.contains(b'a'));
        assert!(!set.contains(b'#'));
    }

    #[test]
    fn subset_and_disjoint() {
        let abc: LetterSet = b"ABC".iter().copied().collect();
        let ab: LetterSet = b"AB".iter().copied().collect();
        let xyz: LetterSet = b"XYZ".iter().copied().collect();

        assert!(ab.is_subset(abc));
        assert!(!abc.is_subset(ab));
        assert!(LetterSet::EMPTY.is_subset(ab));
        assert!(abc.is_disjoint(xyz));
        assert!(!abc.is_disjoint(ab));
        assert_eq!(ab.union(xyz).len(), 5);
    }

    #[test]
    fn display_is_alphabetical() {
        let set: LetterSet = b"TEASE".iter().copied().collect();
        assert_eq!(set.to_string(), "AEST");
    }
}
