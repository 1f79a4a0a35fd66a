//! Permutation-preserving genetic operators for routes.
//!
//! # Crossover
//!
//! - [`order_crossover`] (OX): Davis (1985) — keeps a segment of parent 1
//!   in place and the relative order of parent 2 for the rest
//!
//! # Mutation
//!
//! - [`swap_mutation`]: exchange two distinct positions, at most once per call
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Cicirello (2023), "Genetic Operators for Permutation Representation"

use crate::error::{Error, Result};
use crate::route::Route;
use rand::Rng;

// ============================================================================
// Crossover
// ============================================================================

/// Order Crossover (OX) producing a single child.
///
/// Picks two distinct cut points `0 <= start < end <= n` uniformly at
/// random and delegates to [`order_crossover_at`]. Swapping the parents
/// generally yields a different child, so callers wanting two offspring
/// invoke it with both parent orders.
///
/// # Errors
/// [`Error::DimensionMismatch`] if the parents differ in length.
pub fn order_crossover<R: Rng>(parent1: &Route, parent2: &Route, rng: &mut R) -> Result<Route> {
    check_lengths(parent1, parent2)?;
    let (start, end) = random_cut(parent1.len(), rng);
    order_crossover_at(parent1, parent2, start, end)
}

/// Order Crossover with explicit cut points.
///
/// # Algorithm
///
/// 1. Copy `parent1[start..end]` into the same child positions
/// 2. Fill the remaining positions left to right, starting at index 0,
///    with the locations of `parent2` not in the copied segment, in the
///    order they appear in `parent2`
///
/// `start == 0 && end == n` copies the whole of parent 1 and leaves
/// nothing to fill.
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Errors
/// [`Error::DimensionMismatch`] if the parents differ in length,
/// [`Error::InvalidCrossoverCut`] unless `start < end <= n`.
///
/// # Examples
///
/// ```
/// use u_tsp_ga::Route;
/// use u_tsp_ga::ga::order_crossover_at;
///
/// let p1 = Route::new(vec![0, 1, 2, 3, 4, 5]).unwrap();
/// let p2 = Route::new(vec![5, 4, 3, 2, 1, 0]).unwrap();
/// let child = order_crossover_at(&p1, &p2, 2, 4).unwrap();
/// assert_eq!(child.as_slice(), &[5, 4, 2, 3, 1, 0]);
/// ```
pub fn order_crossover_at(
    parent1: &Route,
    parent2: &Route,
    start: usize,
    end: usize,
) -> Result<Route> {
    check_lengths(parent1, parent2)?;
    let n = parent1.len();
    if start >= end || end > n {
        return Err(Error::InvalidCrossoverCut { start, end, len: n });
    }

    let template = parent1.as_slice();
    let mut child = vec![usize::MAX; n];
    let mut in_segment = vec![false; n];

    // Step 1: Copy segment from parent 1
    for i in start..end {
        child[i] = template[i];
        in_segment[template[i]] = true;
    }

    // Step 2: Fill gaps from parent 2, left to right
    let mut fill = parent2.as_slice().iter().filter(|&&loc| !in_segment[loc]);
    let (head, rest) = child.split_at_mut(start);
    let tail = &mut rest[end - start..];
    for slot in head.iter_mut().chain(tail.iter_mut()) {
        if let Some(&loc) = fill.next() {
            *slot = loc;
        }
    }

    Ok(Route::from_permutation(child))
}

fn check_lengths(parent1: &Route, parent2: &Route) -> Result<()> {
    if parent1.len() != parent2.len() {
        return Err(Error::DimensionMismatch {
            expected: parent1.len(),
            found: parent2.len(),
        });
    }
    Ok(())
}

/// Pick two distinct cut points `start < end` from `0..=n`.
fn random_cut<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    let a = rng.random_range(0..=n);
    let mut b = rng.random_range(0..n);
    if b >= a {
        b += 1;
    }
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

// ============================================================================
// Mutation
// ============================================================================

/// Swap mutation: with probability `rate`, exchange two distinct random
/// positions of `route`.
///
/// One Bernoulli trial per call, not per gene. Returns whether a swap was
/// applied. Routes with fewer than two locations are never changed.
///
/// # Complexity
/// O(1)
pub fn swap_mutation<R: Rng>(route: &mut Route, rate: f64, rng: &mut R) -> bool {
    let n = route.len();
    if n < 2 || rng.random_range(0.0..1.0) >= rate {
        return false;
    }
    let i = rng.random_range(0..n);
    let mut j = rng.random_range(0..n - 1);
    if j >= i {
        j += 1;
    }
    route.swap(i, j);
    true
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use proptest::prelude::*;

    fn route(order: &[usize]) -> Route {
        Route::new(order.to_vec()).unwrap()
    }

    // ---- OX Crossover ----

    #[test]
    fn test_ox_produces_valid_permutations() {
        let mut rng = create_rng(42);
        let p1 = route(&[0, 1, 2, 3, 4, 5, 6, 7]);
        let p2 = route(&[7, 6, 5, 4, 3, 2, 1, 0]);

        for _ in 0..100 {
            let c1 = order_crossover(&p1, &p2, &mut rng).unwrap();
            let c2 = order_crossover(&p2, &p1, &mut rng).unwrap();
            assert!(c1.is_permutation(), "OX child1 not valid: {c1:?}");
            assert!(c2.is_permutation(), "OX child2 not valid: {c2:?}");
        }
    }

    #[test]
    fn test_ox_known_child() {
        let p1 = route(&[0, 1, 2, 3, 4, 5, 6, 7]);
        let p2 = route(&[3, 7, 5, 1, 6, 0, 2, 4]);
        let child = order_crossover_at(&p1, &p2, 3, 6).unwrap();
        // 3, 4, 5 stay in place; 7, 1, 6, 0, 2 fill left to right.
        assert_eq!(child.as_slice(), &[7, 1, 6, 3, 4, 5, 0, 2]);
    }

    #[test]
    fn test_ox_swapped_parents_differ() {
        let p1 = route(&[0, 1, 2, 3, 4, 5, 6, 7]);
        let p2 = route(&[3, 7, 5, 1, 6, 0, 2, 4]);
        let a = order_crossover_at(&p1, &p2, 2, 5).unwrap();
        let b = order_crossover_at(&p2, &p1, 2, 5).unwrap();
        assert_ne!(a, b);
        assert_eq!(&b.as_slice()[2..5], &[5, 1, 6]);
    }

    #[test]
    fn test_ox_full_segment_returns_parent1() {
        let p1 = route(&[2, 0, 3, 1]);
        let p2 = route(&[1, 3, 0, 2]);
        let child = order_crossover_at(&p1, &p2, 0, 4).unwrap();
        assert_eq!(child, p1);
    }

    #[test]
    fn test_ox_segment_reaching_end() {
        let p1 = route(&[0, 1, 2, 3, 4]);
        let p2 = route(&[4, 3, 2, 1, 0]);
        let child = order_crossover_at(&p1, &p2, 3, 5).unwrap();
        assert_eq!(child.as_slice(), &[2, 1, 0, 3, 4]);
    }

    #[test]
    fn test_ox_identical_parents() {
        let mut rng = create_rng(42);
        let p = route(&[4, 2, 0, 1, 3]);
        for _ in 0..20 {
            assert_eq!(order_crossover(&p, &p, &mut rng).unwrap(), p);
        }
    }

    #[test]
    fn test_ox_rejects_bad_cuts() {
        let p1 = route(&[0, 1, 2]);
        let p2 = route(&[2, 1, 0]);
        assert!(matches!(
            order_crossover_at(&p1, &p2, 2, 2),
            Err(Error::InvalidCrossoverCut { .. })
        ));
        assert!(order_crossover_at(&p1, &p2, 1, 4).is_err());
        assert!(order_crossover_at(&p1, &p2, 2, 1).is_err());
    }

    #[test]
    fn test_ox_length_mismatch() {
        let mut rng = create_rng(42);
        let p1 = route(&[0, 1, 2]);
        let p2 = route(&[0, 1, 2, 3]);
        assert_eq!(
            order_crossover(&p1, &p2, &mut rng).unwrap_err(),
            Error::DimensionMismatch {
                expected: 3,
                found: 4
            }
        );
    }

    #[test]
    fn test_ox_single_location() {
        let mut rng = create_rng(42);
        let p = route(&[0]);
        assert_eq!(order_crossover(&p, &p, &mut rng).unwrap(), p);
    }

    // ---- Cut points ----

    #[test]
    fn test_random_cut_bounds() {
        let mut rng = create_rng(42);
        let mut saw_full_tail = false;
        for _ in 0..2000 {
            let (start, end) = random_cut(6, &mut rng);
            assert!(start < end, "cuts not ordered: {start}, {end}");
            assert!(end <= 6);
            saw_full_tail |= end == 6;
        }
        assert!(saw_full_tail, "end == n should be reachable");
    }

    // ---- Swap Mutation ----

    #[test]
    fn test_swap_rate_one_always_changes() {
        let mut rng = create_rng(42);
        for _ in 0..200 {
            let mut r = Route::random(6, &mut rng);
            let before = r.clone();
            assert!(swap_mutation(&mut r, 1.0, &mut rng));
            let diffs = before
                .as_slice()
                .iter()
                .zip(r.as_slice())
                .filter(|(a, b)| a != b)
                .count();
            assert_eq!(diffs, 2, "exactly one swap expected: {before:?} -> {r:?}");
        }
    }

    #[test]
    fn test_swap_rate_zero_never_changes() {
        let mut rng = create_rng(42);
        let mut r = Route::identity(8);
        for _ in 0..200 {
            assert!(!swap_mutation(&mut r, 0.0, &mut rng));
        }
        assert_eq!(r, Route::identity(8));
    }

    #[test]
    fn test_swap_rate_is_per_call() {
        let mut rng = create_rng(42);
        let mut r = Route::identity(10);
        let n = 10000;
        let hits = (0..n).filter(|_| swap_mutation(&mut r, 0.25, &mut rng)).count();
        assert!(
            (2000..3000).contains(&hits),
            "expected ~25% of calls to swap, got {hits}/{n}"
        );
        assert!(r.is_permutation());
    }

    #[test]
    fn test_swap_single_location() {
        let mut rng = create_rng(42);
        let mut r = route(&[0]);
        assert!(!swap_mutation(&mut r, 1.0, &mut rng));
        assert_eq!(r, route(&[0]));
    }

    #[test]
    fn test_swap_two_locations() {
        let mut rng = create_rng(42);
        let mut r = route(&[0, 1]);
        assert!(swap_mutation(&mut r, 1.0, &mut rng));
        assert_eq!(r, route(&[1, 0]));
    }

    // ---- Properties ----

    proptest! {
        #[test]
        fn prop_crossover_yields_permutation(seed in any::<u64>(), n in 1usize..40) {
            let mut rng = create_rng(seed);
            let p1 = Route::random(n, &mut rng);
            let p2 = Route::random(n, &mut rng);
            let child = order_crossover(&p1, &p2, &mut rng).unwrap();
            prop_assert_eq!(child.len(), n);
            prop_assert!(child.is_permutation());
        }

        #[test]
        fn prop_crossover_keeps_segment(
            seed in any::<u64>(),
            n in 2usize..30,
            a in 0usize..30,
            b in 0usize..30,
        ) {
            let (start, end) = (a.min(b) % n, (a.max(b) % n) + 1);
            prop_assume!(start < end);
            let mut rng = create_rng(seed);
            let p1 = Route::random(n, &mut rng);
            let p2 = Route::random(n, &mut rng);
            let child = order_crossover_at(&p1, &p2, start, end).unwrap();
            prop_assert_eq!(&child.as_slice()[start..end], &p1.as_slice()[start..end]);
        }

        #[test]
        fn prop_mutation_yields_permutation(seed in any::<u64>(), n in 1usize..40, rate in 0.0f64..=1.0) {
            let mut rng = create_rng(seed);
            let mut r = Route::random(n, &mut rng);
            swap_mutation(&mut r, rate, &mut rng);
            prop_assert_eq!(r.len(), n);
            prop_assert!(r.is_permutation());
        }
    }
}
