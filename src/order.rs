//!
//! Sort orders: permutations mapping old element indices to new element indices.
//!

use crate::index::Index;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A permutation of `[0, N)` mapping each old element index to its new index.
///
/// Every value in `[0, N)` appears exactly once.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SortOrder(Vec<usize>);

impl SortOrder {
    /// The order that keeps every element in place.
    pub fn identity(n: usize) -> Self {
        SortOrder((0..n).collect())
    }

    /// Wrap an old-to-new index map, checking that it is a permutation.
    pub fn from_vec(order: Vec<usize>) -> Option<Self> {
        if is_permutation(&order) {
            Some(SortOrder(order))
        } else {
            None
        }
    }

    /// Build the order that places the element `ranking[r]` at new index `r`.
    ///
    /// Returns `None` if `ranking` is not a permutation.
    pub fn from_ranking(ranking: &[usize]) -> Option<Self> {
        let mut slots = vec![Index::INVALID; ranking.len()];
        for (rank, &elem) in ranking.iter().enumerate() {
            let slot = slots.get_mut(elem)?;
            if slot.is_valid() {
                return None;
            }
            *slot = Index::new(rank);
        }
        Some(Self::from_slots(slots))
    }

    /// Reinterpret a fully assigned buffer of rank slots as an order.
    pub(crate) fn from_slots(slots: Vec<Index>) -> Self {
        // Ensure that all slots are valid before we reinterpret the vector.
        debug_assert!(slots.iter().all(|&x| x.is_valid()));
        let order: Vec<usize> = bytemuck::cast_vec(slots);
        debug_assert!(is_permutation(&order));
        SortOrder(order)
    }

    /// Number of elements in this order.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// New index of the element at `old`.
    #[inline]
    pub fn new_index(&self, old: usize) -> usize {
        self.0[old]
    }

    /// The inverse map from new indices to old indices, i.e. the elements listed in their new
    /// order.
    pub fn inverse(&self) -> Vec<usize> {
        let mut inv = vec![0; self.0.len()];
        for (old, &new) in self.0.iter().enumerate() {
            inv[new] = old;
        }
        inv
    }

    /// Reverse this order: the element at new index `r` moves to `N - 1 - r`.
    pub fn reverse(&mut self) {
        let n = self.0.len();
        let inv = self.inverse();
        for i in 0..n / 2 {
            self.0.swap(inv[i], inv[n - 1 - i]);
        }
    }

    /// Reverse this order. This is the consuming version of [`SortOrder::reverse`].
    #[inline]
    pub fn reversed(mut self) -> Self {
        self.reverse();
        self
    }
}

/// Returns `true` if `order` contains every value in `[0, order.len())` exactly once.
pub fn is_permutation(order: &[usize]) -> bool {
    let mut seen = vec![false; order.len()];
    for &i in order {
        match seen.get_mut(i) {
            Some(s) if !*s => *s = true,
            _ => return false,
        }
    }
    true
}
