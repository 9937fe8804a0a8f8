use num::Float;

use crate::utils::math::vector::ZeroSpVec;

pub trait Compare<N>
where
    N: Float,
{
    /// cosine similarity, in [0, 1] for non-negative weights
    /// cos(θ) = Σ(a_i * b_i) / (||a|| * ||b||)
    fn cosine_similarity(vec: &ZeroSpVec<N>, other: &ZeroSpVec<N>) -> f64;
}

/// Comparison for L2-normalized TF-IDF vectors.
///
/// Both inputs are expected to have unit norm (or be zero), so the cosine is
/// the dot product. The result is clamped to [0, 1] to absorb rounding drift.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultCompare;

impl<N> Compare<N> for DefaultCompare
where
    N: Float + Into<f64>,
{
    #[inline]
    fn cosine_similarity(vec: &ZeroSpVec<N>, other: &ZeroSpVec<N>) -> f64 {
        if vec.is_zero() || other.is_zero() {
            return 0.0;
        }
        let dot = vec.dot(other);
        if dot.is_nan() {
            return 0.0;
        }
        dot.clamp(0.0, 1.0)
    }
}
