use std::cmp::Ordering;

use num::Float;

use super::ZeroSpVec;

impl<N> ZeroSpVec<N>
where
    N: Float + Into<f64>,
{
    /// Dot product over shared indices.
    /// d(a, b) = Σ(a_i * b_i)
    pub fn dot(&self, other: &Self) -> f64 {
        debug_assert_eq!(
            self.len(),
            other.len(),
            "Vectors must be of the same length to compute dot product."
        );
        let mut a_it = self.raw_iter();
        let mut b_it = other.raw_iter();
        let mut a_next = a_it.next();
        let mut b_next = b_it.next();
        let mut dot = 0_f64;
        while let (Some((ia, va)), Some((ib, vb))) = (a_next, b_next) {
            match ia.cmp(&ib) {
                Ordering::Equal => {
                    dot += va.into() * vb.into();
                    a_next = a_it.next();
                    b_next = b_it.next();
                }
                Ordering::Less => a_next = a_it.next(),
                Ordering::Greater => b_next = b_it.next(),
            }
        }
        dot
    }

    /// Euclidean norm
    /// ||a|| = sqrt(Σ(a_i^2))
    pub fn norm(&self) -> f64 {
        self.raw_iter()
            .map(|(_, v)| {
                let v: f64 = v.into();
                v * v
            })
            .sum::<f64>()
            .sqrt()
    }

    /// Scale to unit Euclidean norm in place.
    /// A zero vector stays zero.
    ///
    /// # Returns
    /// * `f64` - the norm before scaling
    pub fn normalize_l2(&mut self) -> f64 {
        let norm = self.norm();
        if norm > 0.0 && norm.is_finite() {
            if let Some(inv) = <N as num::NumCast>::from(1.0 / norm) {
                for val in self.vals.iter_mut() {
                    *val = *val * inv;
                }
            }
        }
        norm
    }
}
