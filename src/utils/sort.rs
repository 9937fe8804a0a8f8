use std::cmp::Ordering;

/// Select the positions of the `k` largest counts.
/// - Ranks by count descending
/// - Equal counts keep position order (lower position wins)
/// - Returned positions are ascending, so callers keep first-seen order
///
/// Complexity: O(n log n)
///
/// # Arguments
/// * `counts` - counts in first-seen order
/// * `k` - number of positions to keep
///
/// # Returns
/// * `Vec<usize>` - kept positions, ascending
pub fn top_k_by_count(counts: &[u64], k: usize) -> Vec<usize> {
    if k >= counts.len() {
        return (0..counts.len()).collect();
    }
    let mut order: Vec<usize> = (0..counts.len()).collect();
    order.sort_unstable_by(|&a, &b| counts[b].cmp(&counts[a]).then(a.cmp(&b)));
    order.truncate(k);
    order.sort_unstable();
    order
}

/// Stable sort by an `f64` key, descending.
/// Items with equal keys keep their relative order. NaN keys sort last.
pub fn stable_sort_desc_by_key<T, F>(items: &mut [T], key: F)
where
    F: Fn(&T) -> f64,
{
    items.sort_by(|a, b| {
        let (ka, kb) = (key(a), key(b));
        match (ka.is_nan(), kb.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => kb.total_cmp(&ka),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_k_keeps_everything_when_small() {
        assert_eq!(top_k_by_count(&[1, 5, 3], 3), vec![0, 1, 2]);
        assert_eq!(top_k_by_count(&[1, 5, 3], 10), vec![0, 1, 2]);
        assert!(top_k_by_count(&[], 4).is_empty());
    }

    #[test]
    fn top_k_picks_highest_counts() {
        assert_eq!(top_k_by_count(&[1, 5, 3, 4], 2), vec![1, 3]);
    }

    #[test]
    fn top_k_ties_prefer_first_seen() {
        // all equal: the first k positions win
        assert_eq!(top_k_by_count(&[2, 2, 2, 2], 2), vec![0, 1]);
        // tie at the cut line between positions 1 and 3
        assert_eq!(top_k_by_count(&[9, 3, 1, 3], 2), vec![0, 1]);
        assert_eq!(top_k_by_count(&[1, 3, 3, 3, 7], 3), vec![1, 2, 4]);
    }

    #[test]
    fn top_k_zero() {
        assert!(top_k_by_count(&[1, 2], 0).is_empty());
    }

    #[test]
    fn stable_sort_preserves_ties() {
        let mut items = vec![(0, 0.5), (1, 0.9), (2, 0.5), (3, 0.9), (4, 0.1)];
        stable_sort_desc_by_key(&mut items, |&(_, s)| s);
        let order: Vec<usize> = items.iter().map(|&(i, _)| i).collect();
        assert_eq!(order, vec![1, 3, 0, 2, 4]);
    }

    #[test]
    fn stable_sort_nan_last() {
        let mut items = vec![(0, f64::NAN), (1, 0.2), (2, 0.7)];
        stable_sort_desc_by_key(&mut items, |&(_, s)| s);
        let order: Vec<usize> = items.iter().map(|&(i, _)| i).collect();
        assert_eq!(order, vec![2, 1, 0]);
    }
}
