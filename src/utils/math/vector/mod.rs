pub mod math;

use std::fmt::{self, Debug};

use num::Num;
use serde::{Deserialize, Serialize};

/// ZeroSpVecは0要素を疎とした疎ベクトルです
/// indices と values を持ち
/// indicesは要素のインデックスを保持し、
/// valuesは要素の値を保持します
///
/// 要素はindicesの昇順でソートされていることを保証します
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct ZeroSpVec<N>
where
    N: Num,
{
    ind: Vec<usize>,
    val: Vec<N>,
    len: usize,
}

impl<N> ZeroSpVec<N>
where
    N: Num + Copy,
{
    /// All-zero vector of dimension `len`
    #[inline]
    pub fn new(len: usize) -> Self {
        Self {
            ind: Vec::new(),
            val: Vec::new(),
            len,
        }
    }

    #[inline]
    pub fn with_capacity(len: usize, nnz: usize) -> Self {
        Self {
            ind: Vec::with_capacity(nnz),
            val: Vec::with_capacity(nnz),
            len,
        }
    }

    /// Build from (index, value) pairs in any order
    ///
    /// Zero values are dropped; duplicate indices are summed.
    pub fn from_entries(len: usize, mut entries: Vec<(usize, N)>) -> Self {
        entries.sort_unstable_by_key(|(idx, _)| *idx);
        let mut vec = Self::with_capacity(len, entries.len());
        for (idx, value) in entries {
            debug_assert!(idx < len, "index {idx} out of range for dimension {len}");
            match vec.ind.last() {
                Some(&last) if last == idx => {
                    // 重複は加算
                    if let Some(slot) = vec.val.last_mut() {
                        *slot = *slot + value;
                    }
                }
                _ => vec.raw_push(idx, value),
            }
        }
        vec.drop_zeros();
        vec
    }

    /// Append a value at `index`
    ///
    /// `index` must be greater than every index already stored.
    #[inline]
    pub fn raw_push(&mut self, index: usize, value: N) {
        debug_assert!(self.ind.last().map_or(true, |&last| last < index), "indices must be ascending");
        if value.is_zero() {
            return;
        }
        self.ind.push(index);
        self.val.push(value);
        if index >= self.len {
            self.len = index + 1;
        }
    }

    fn drop_zeros(&mut self) {
        let mut write = 0;
        for read in 0..self.val.len() {
            if !self.val[read].is_zero() {
                self.ind[write] = self.ind[read];
                self.val[write] = self.val[read];
                write += 1;
            }
        }
        self.ind.truncate(write);
        self.val.truncate(write);
    }

    /// Dimension of the vector
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of stored non-zero entries
    #[inline]
    pub fn nnz(&self) -> usize {
        self.ind.len()
    }

    /// Value at `index`, zero when not stored
    #[inline]
    pub fn get(&self, index: usize) -> N {
        match self.ind.binary_search(&index) {
            Ok(pos) => self.val[pos],
            Err(_) => N::zero(),
        }
    }

    /// Iterate stored (index, value) pairs in ascending index order
    #[inline]
    pub fn raw_iter(&self) -> impl Iterator<Item = (usize, N)> + '_ {
        self.ind.iter().copied().zip(self.val.iter().copied())
    }

    /// Dense copy
    pub fn to_dense(&self) -> Vec<N> {
        let mut dense = vec![N::zero(); self.len];
        for (idx, value) in self.raw_iter() {
            dense[idx] = value;
        }
        dense
    }
}

impl<N> From<Vec<N>> for ZeroSpVec<N>
where
    N: Num + Copy,
{
    fn from(dense: Vec<N>) -> Self {
        let len = dense.len();
        let mut vec = Self::new(len);
        for (idx, value) in dense.into_iter().enumerate() {
            vec.raw_push(idx, value);
        }
        vec
    }
}

impl<N: Num + Copy + Debug> Debug for ZeroSpVec<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.debug_struct("ZeroSpVec")
                .field("len", &self.len)
                .field("nnz", &self.nnz())
                .field("entries", &self.raw_iter().collect::<Vec<_>>())
                .finish()
        } else {
            f.debug_list().entries(self.to_dense()).finish()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_dense_skips_zeros() {
        let vec = ZeroSpVec::from(vec![0.0, 1.5, 0.0, 2.0]);
        assert_eq!(vec.len(), 4);
        assert_eq!(vec.nnz(), 2);
        assert_eq!(vec.raw_iter().collect::<Vec<_>>(), vec![(1, 1.5), (3, 2.0)]);
        assert_eq!(vec.get(0), 0.0);
        assert_eq!(vec.get(3), 2.0);
    }

    #[test]
    fn from_entries_sorts_and_merges() {
        let vec = ZeroSpVec::from_entries(5, vec![(4, 1.0), (1, 2.0), (4, 0.5), (2, 0.0)]);
        assert_eq!(vec.raw_iter().collect::<Vec<_>>(), vec![(1, 2.0), (4, 1.5)]);
        assert_eq!(vec.to_dense(), vec![0.0, 2.0, 0.0, 0.0, 1.5]);
    }

    #[test]
    fn cancelling_duplicates_leave_no_entry() {
        let vec = ZeroSpVec::from_entries(3, vec![(1, 1.0), (1, -1.0)]);
        assert_eq!(vec.nnz(), 0);
        assert_eq!(vec.len(), 3);
        assert!(!vec.is_empty());
        assert!(ZeroSpVec::<f64>::new(0).is_empty());
    }
}
