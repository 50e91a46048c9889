use core::fmt::Display;
use core::ops::Index;

/// The first `n + 1` Fibonacci numbers, starting at F(0).
///
/// A `Sequence` is only built by [`crate::iterative`] or [`crate::recursive`] and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sequence(Vec<u64>);

impl Sequence {
    pub(crate) fn new(terms: Vec<u64>) -> Self {
        Self(terms)
    }

    /// Number of terms, always the requested index plus one
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<u64> {
        self.0.get(index).copied()
    }

    pub fn last(&self) -> Option<u64> {
        self.0.last().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        self.0.iter().copied()
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<u64> {
        self.0
    }
}

impl Index<usize> for Sequence {
    type Output = u64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a u64;
    type IntoIter = core::slice::Iter<'a, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl PartialEq<[u64]> for Sequence {
    fn eq(&self, other: &[u64]) -> bool {
        self.0 == other
    }
}

impl<const N: usize> PartialEq<[u64; N]> for Sequence {
    fn eq(&self, other: &[u64; N]) -> bool {
        self.0 == other
    }
}

/// Space-separated terms in square brackets, e.g. `[0 1 1 2]`
impl Display for Sequence {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "[")?;
        for (i, term) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", term)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::Sequence;

    #[test]
    fn display_matches_bracketed_form() {
        assert_eq!(Sequence::new(vec![0]).to_string(), "[0]");
        assert_eq!(Sequence::new(vec![0, 1, 1, 2, 3, 5]).to_string(), "[0 1 1 2 3 5]");
    }

    #[test]
    fn accessors() {
        let seq = Sequence::new(vec![0, 1, 1, 2]);
        assert_eq!(seq.len(), 4);
        assert!(!seq.is_empty());
        assert_eq!(seq[3], 2);
        assert_eq!(seq.get(4), None);
        assert_eq!(seq.last(), Some(2));
        assert_eq!(seq.iter().sum::<u64>(), 4);
        assert_eq!(seq, [0, 1, 1, 2]);
    }
}
