//! This module defines an index type that can be invalid, although it has the same size as
//! usize. This allows collections of `usize` integers to be reinterpreted as collections of
//! `Index` types and back.
//!
//! Orders under construction are stored as `Vec<Index>` where every slot starts out invalid and
//! is filled exactly once. Once all slots are valid, the buffer is reinterpreted as plain ranks.

/// A possibly invalid unsigned index.
/// The maximum `usize` integer represents an invalid index.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct Index(usize);

// SAFETY: Index is transparent and usize is Pod and Zeroable.
unsafe impl bytemuck::Pod for Index {}
unsafe impl bytemuck::Zeroable for Index {}

impl Index {
    /// Invalid index instance.
    pub const INVALID: Index = Index(usize::MAX);

    /// Create a valid index from a usize type. This constructor does the necessary check
    /// for debug builds only.
    #[inline]
    pub fn new(i: usize) -> Index {
        debug_assert!(Index::fits(i));
        Index(i)
    }

    /// Check if the index is valid.
    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::INVALID
    }

    /// Convert this `Index` into `Option<usize>`, which is a larger struct.
    #[inline]
    pub fn into_option(self) -> Option<usize> {
        self.into()
    }

    #[inline]
    fn fits(i: usize) -> bool {
        i != usize::MAX
    }
}

impl From<Index> for Option<usize> {
    #[inline]
    fn from(val: Index) -> Self {
        if val.is_valid() {
            Some(val.0)
        } else {
            None
        }
    }
}

impl Default for Index {
    fn default() -> Self {
        Self::INVALID
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_test() {
        let i = Index::new(2);
        let k = Index::INVALID;
        assert!(i.is_valid());
        assert!(!k.is_valid());
        assert_eq!(i.into_option(), Some(2));
        assert_eq!(k.into_option(), None);
        assert_eq!(Index::default(), k);
    }
}
