//! Set algebra over [`CpuSet`]. None of the functions modify their operands.

use std::ops::{BitAnd, BitOr, Sub};

use crate::CpuSet;

/// Returns a new set with the CPUs of `a` that are not in `b`.
///
/// # Example
///
/// ```
/// use cpuset::{CpuSet, difference};
///
/// let a = CpuSet::from_list("0-32").unwrap();
/// let b = CpuSet::from_list("8-16").unwrap();
///
/// assert_eq!(difference(&a, &b).to_list_string(), "0-7,17-32");
/// ```
#[must_use]
pub fn difference(a: &CpuSet, b: &CpuSet) -> CpuSet {
    a.iter_unsorted().filter(|cpu| !b.contains(*cpu)).collect()
}

/// Returns a new set with the CPUs present in both `a` and `b`.
#[must_use]
pub fn intersection(a: &CpuSet, b: &CpuSet) -> CpuSet {
    // Probe the larger set with the members of the smaller one.
    let (smaller, larger) = if a.len() > b.len() { (b, a) } else { (a, b) };

    smaller
        .iter_unsorted()
        .filter(|cpu| larger.contains(*cpu))
        .collect()
}

/// Returns a new set with the CPUs present in either `a` or `b`.
#[must_use]
pub fn union(a: &CpuSet, b: &CpuSet) -> CpuSet {
    let mut result = a.clone();
    result.extend(b.iter_unsorted());
    result
}

impl Sub for &CpuSet {
    type Output = CpuSet;

    fn sub(self, rhs: Self) -> CpuSet {
        difference(self, rhs)
    }
}

impl BitAnd for &CpuSet {
    type Output = CpuSet;

    fn bitand(self, rhs: Self) -> CpuSet {
        intersection(self, rhs)
    }
}

impl BitOr for &CpuSet {
    type Output = CpuSet;

    fn bitor(self, rhs: Self) -> CpuSet {
        union(self, rhs)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    fn samples() -> Vec<CpuSet> {
        vec![
            CpuSet::new(),
            CpuSet::of([0]),
            CpuSet::of([0, 1, 2, 3, 4, 9]),
            CpuSet::of([3, 4, 5, 100]),
            CpuSet::of(0..64),
            CpuSet::of([31, 32, 63, 64, 4000]),
        ]
    }

    #[test]
    fn difference_smoke_test() {
        let a = CpuSet::of([0, 1, 2, 3, 4, 9]);
        let b = CpuSet::of([3, 4, 5, 100]);

        assert_eq!(difference(&a, &b), CpuSet::of([0, 1, 2, 9]));
        assert_eq!(difference(&b, &a), CpuSet::of([5, 100]));
        assert_eq!(difference(&a, &CpuSet::new()), a);
        assert_eq!(difference(&CpuSet::new(), &a), CpuSet::new());
    }

    #[test]
    fn intersection_smoke_test() {
        let a = CpuSet::of([0, 1, 2, 3, 4, 9]);
        let b = CpuSet::of([3, 4, 5, 100]);

        assert_eq!(intersection(&a, &b), CpuSet::of([3, 4]));
        assert_eq!(intersection(&a, &CpuSet::new()), CpuSet::new());
        assert_eq!(intersection(&a, &CpuSet::of([50])), CpuSet::new());
    }

    #[test]
    fn union_smoke_test() {
        let a = CpuSet::of([0, 1, 2, 3, 4, 9]);
        let b = CpuSet::of([3, 4, 5, 100]);

        assert_eq!(union(&a, &b), CpuSet::of([0, 1, 2, 3, 4, 5, 9, 100]));
        assert_eq!(union(&CpuSet::new(), &CpuSet::new()), CpuSet::new());
    }

    #[test]
    fn operands_are_not_modified() {
        let a = CpuSet::of([1, 2, 3]);
        let b = CpuSet::of([3, 4]);

        _ = difference(&a, &b);
        _ = intersection(&a, &b);
        _ = union(&a, &b);

        assert_eq!(a, CpuSet::of([1, 2, 3]));
        assert_eq!(b, CpuSet::of([3, 4]));
    }

    #[test]
    fn union_and_intersection_are_commutative() {
        for a in samples() {
            for b in samples() {
                assert_eq!(union(&a, &b), union(&b, &a));
                assert_eq!(intersection(&a, &b), intersection(&b, &a));
            }
        }
    }

    #[test]
    fn difference_with_self_is_empty() {
        for a in samples() {
            assert!(difference(&a, &a).is_empty());
        }
    }

    #[test]
    fn union_with_difference_restores_superset_only() {
        let a = CpuSet::of([1, 2]);
        let b = CpuSet::of([2, 3]);

        // The result holds everything from both sides, so it equals `b` only if `a` is a subset.
        assert_eq!(union(&a, &difference(&b, &a)), CpuSet::of([1, 2, 3]));
        assert_ne!(union(&a, &difference(&b, &a)), b);

        let subset = CpuSet::of([2]);
        assert_eq!(union(&subset, &difference(&b, &subset)), b);
    }

    #[test]
    fn operators_match_functions() {
        let a = CpuSet::of([0, 1, 2, 3, 4, 9]);
        let b = CpuSet::of([3, 4, 5, 100]);

        assert_eq!(&a - &b, difference(&a, &b));
        assert_eq!(&a & &b, intersection(&a, &b));
        assert_eq!(&a | &b, union(&a, &b));
    }
}
