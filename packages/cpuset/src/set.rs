use std::fmt::{self, Debug, Display};

use foldhash::{HashSet, HashSetExt};
use itertools::Itertools;

use crate::CpuId;

/// A set of CPU IDs, for example the processors a process is restricted to.
///
/// The set has no upper bound other than the range of [`CpuId`]. Members are stored without
/// any particular order; the textual forms produced by [`CpuSet::to_list_string()`] and
/// [`CpuSet::to_mask_string()`] always list them in ascending order.
///
/// Two sets are equal if they contain exactly the same IDs, regardless of how they were built.
///
/// # Example
///
/// ```
/// use cpuset::CpuSet;
///
/// let mut set = CpuSet::of([0, 1, 2, 3]);
/// assert!(set.remove(2));
/// assert!(set.add(9));
///
/// assert_eq!(set.to_list_string(), "0,1,3,9");
/// ```
#[derive(Clone, Default, Eq, PartialEq)]
pub struct CpuSet {
    cpus: HashSet<CpuId>,
}

impl CpuSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cpus: HashSet::new(),
        }
    }

    /// Creates a set containing exactly the given IDs. Duplicates are collapsed.
    #[must_use]
    pub fn of(cpus: impl IntoIterator<Item = CpuId>) -> Self {
        cpus.into_iter().collect()
    }

    /// Adds a CPU to the set.
    ///
    /// Returns `true` if the CPU was not present before.
    pub fn add(&mut self, cpu: CpuId) -> bool {
        self.cpus.insert(cpu)
    }

    /// Removes a CPU from the set.
    ///
    /// Returns `true` if the CPU was present.
    pub fn remove(&mut self, cpu: CpuId) -> bool {
        self.cpus.remove(&cpu)
    }

    /// Whether the CPU is a member of the set.
    #[must_use]
    pub fn contains(&self, cpu: CpuId) -> bool {
        self.cpus.contains(&cpu)
    }

    /// Removes all CPUs from the set.
    pub fn clear(&mut self) {
        self.cpus.clear();
    }

    /// The number of CPUs in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cpus.len()
    }

    /// Whether the set has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cpus.is_empty()
    }

    /// The highest CPU ID in the set, if any.
    #[must_use]
    pub fn max(&self) -> Option<CpuId> {
        self.cpus.iter().max().copied()
    }

    /// Iterates over the members in an unspecified order.
    pub fn iter_unsorted(&self) -> impl Iterator<Item = CpuId> + '_ {
        self.cpus.iter().copied()
    }

    /// Returns all members in an unspecified order.
    ///
    /// Callers that need a stable order should use [`CpuSet::to_sorted_vec()`] instead.
    #[must_use]
    pub fn unsorted_list(&self) -> Vec<CpuId> {
        self.iter_unsorted().collect()
    }

    /// Returns all members in ascending order.
    #[must_use]
    pub fn to_sorted_vec(&self) -> Vec<CpuId> {
        self.iter_unsorted().sorted_unstable().collect()
    }
}

impl FromIterator<CpuId> for CpuSet {
    fn from_iter<I: IntoIterator<Item = CpuId>>(iter: I) -> Self {
        Self {
            cpus: iter.into_iter().collect(),
        }
    }
}

impl Extend<CpuId> for CpuSet {
    fn extend<I: IntoIterator<Item = CpuId>>(&mut self, iter: I) {
        self.cpus.extend(iter);
    }
}

impl Debug for CpuSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CpuSet")?;
        f.debug_set().entries(self.to_sorted_vec()).finish()
    }
}

/// Formats the set in the list format, same as [`CpuSet::to_list_string()`].
impl Display for CpuSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_list_string())
    }
}
