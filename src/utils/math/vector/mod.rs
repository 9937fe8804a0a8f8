pub mod math;

use std::fmt::{self, Debug};

use num::Float;

/// ZeroSpVec is a sparse vector whose implicit elements are zero.
/// It keeps `indices` and `values` side by side;
/// `indices` are strictly ascending, which the merge-join in `dot` relies on.
#[derive(Clone, PartialEq)]
pub struct ZeroSpVec<N>
where
    N: Float,
{
    inds: Vec<usize>,
    vals: Vec<N>,
    len: usize,
}

impl<N> ZeroSpVec<N>
where
    N: Float,
{
    /// An all-zero vector of dimension `len`.
    #[inline]
    pub fn new(len: usize) -> Self {
        ZeroSpVec {
            inds: Vec::new(),
            vals: Vec::new(),
            len,
        }
    }

    #[inline]
    pub fn with_capacity(len: usize, cap: usize) -> Self {
        ZeroSpVec {
            inds: Vec::with_capacity(cap),
            vals: Vec::with_capacity(cap),
            len,
        }
    }

    /// Build from `(index, value)` pairs in any order.
    /// Zero values are dropped; duplicate indices are summed.
    ///
    /// # Panics
    /// If an index is out of range for `len`.
    pub fn from_pairs(len: usize, mut pairs: Vec<(usize, N)>) -> Self {
        pairs.sort_unstable_by_key(|&(idx, _)| idx);
        let mut vec = ZeroSpVec::with_capacity(len, pairs.len());
        for (idx, val) in pairs {
            assert!(idx < len, "index {idx} out of range for dimension {len}");
            match vec.inds.last() {
                Some(&last) if last == idx => {
                    if let Some(v) = vec.vals.last_mut() {
                        *v = *v + val;
                    }
                }
                _ => {
                    vec.inds.push(idx);
                    vec.vals.push(val);
                }
            }
        }
        vec.retain_nonzero();
        vec
    }

    /// Append an element. `index` must be greater than every stored index.
    #[inline]
    pub fn push(&mut self, index: usize, value: N) {
        debug_assert!(self.inds.last().map_or(true, |&last| last < index));
        debug_assert!(index < self.len);
        if !value.is_zero() {
            self.inds.push(index);
            self.vals.push(value);
        }
    }

    /// Dimension
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of stored (non-zero) elements
    #[inline]
    pub fn nnz(&self) -> usize {
        self.inds.len()
    }

    /// `true` when every element is zero
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.vals.iter().all(|v| v.is_zero())
    }

    /// Value at `index`, zero when not stored.
    pub fn get(&self, index: usize) -> N {
        match self.inds.binary_search(&index) {
            Ok(pos) => self.vals[pos],
            Err(_) => N::zero(),
        }
    }

    /// Iterate stored `(index, value)` pairs in index order.
    #[inline]
    pub fn raw_iter(&self) -> impl Iterator<Item = (usize, N)> + '_ {
        self.inds.iter().copied().zip(self.vals.iter().copied())
    }

    /// Multiply each stored element by the matching dense weight.
    /// Missing weights count as zero.
    pub fn hadamard_dense(&mut self, weights: &[N]) {
        for (idx, val) in self.inds.iter().zip(self.vals.iter_mut()) {
            *val = *val * weights.get(*idx).copied().unwrap_or_else(N::zero);
        }
        self.retain_nonzero();
    }

    fn retain_nonzero(&mut self) {
        if self.vals.iter().all(|v| !v.is_zero()) {
            return;
        }
        let (inds, vals): (Vec<usize>, Vec<N>) = self
            .raw_iter()
            .filter(|(_, v)| !v.is_zero())
            .unzip();
        self.inds = inds;
        self.vals = vals;
    }

    pub fn shrink_to_fit(&mut self) {
        self.inds.shrink_to_fit();
        self.vals.shrink_to_fit();
    }
}

impl<N> Debug for ZeroSpVec<N>
where
    N: Float + Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            writeln!(f, "ZeroSpVec(len: {}, nnz: {}) [", self.len, self.nnz())?;
            for (idx, val) in self.raw_iter() {
                writeln!(f, "    {}: {:?}", idx, val)?;
            }
            write!(f, "]")
        } else {
            f.debug_map().entries(self.raw_iter()).finish()
        }
    }
}
