use itertools::Itertools;

use crate::{CpuId, CpuSet, Error};

/// Parses a string in the [list format][crate#list-format].
///
/// Elements are applied from left to right, so an exclusion only removes IDs added by
/// earlier elements. An empty string is valid input and returns an empty set.
///
/// # Example
///
/// ```
/// use cpuset::{CpuSet, parse_list};
///
/// let set = parse_list("1-4,^3,6").unwrap();
/// assert_eq!(set, CpuSet::of([1, 2, 4, 6]));
/// ```
pub fn parse_list(input: &str) -> crate::Result<CpuSet> {
    let mut set = CpuSet::new();

    if input.is_empty() {
        return Ok(set);
    }

    for element in input.split(',') {
        let parts = element.split('-').collect::<Vec<_>>();

        match parts.as_slice() {
            [single] => {
                let (id, exclude) = single
                    .strip_prefix('^')
                    .map_or((*single, false), |id| (id, true));

                let cpu = parse_id(id).ok_or_else(|| Error::InvalidElement {
                    input: input.to_string(),
                    element: element.to_string(),
                })?;

                if exclude {
                    set.remove(cpu);
                } else {
                    set.add(cpu);
                }
            }
            [lower, upper] => {
                let lower_bound = parse_id(lower).ok_or_else(|| Error::InvalidLowerBound {
                    input: input.to_string(),
                    bound: (*lower).to_string(),
                    element: element.to_string(),
                })?;

                let upper_bound = parse_id(upper).ok_or_else(|| Error::InvalidUpperBound {
                    input: input.to_string(),
                    bound: (*upper).to_string(),
                    element: element.to_string(),
                })?;

                if upper_bound < lower_bound {
                    return Err(Error::NegativeRange {
                        input: input.to_string(),
                        element: element.to_string(),
                    });
                }

                set.extend(lower_bound..=upper_bound);
            }
            _ => {
                return Err(Error::InvalidElement {
                    input: input.to_string(),
                    element: element.to_string(),
                });
            }
        }
    }

    Ok(set)
}

/// Parses a decimal CPU ID. Only ASCII digits are accepted, so signs and whitespace are
/// rejected along with values that do not fit in a [`CpuId`].
fn parse_id(value: &str) -> Option<CpuId> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    value.parse().ok()
}

/// Emits a set in the [list format][crate#list-format].
///
/// The output is canonical: IDs are in ascending order, consecutive IDs are coalesced into
/// ranges and no exclusions are used. The empty set is emitted as an empty string.
///
/// # Example
///
/// ```
/// use cpuset::{CpuSet, emit_list};
///
/// assert_eq!(emit_list(&CpuSet::of([9, 0, 1, 2, 3, 4])), "0-4,9");
/// ```
#[must_use]
pub fn emit_list(set: &CpuSet) -> String {
    set.iter_unsorted()
        .sorted_unstable()
        .map(|cpu| (cpu, cpu))
        .coalesce(|(start, end), (next_start, next_end)| {
            if end.checked_add(1) == Some(next_start) {
                Ok((start, next_end))
            } else {
                Err(((start, end), (next_start, next_end)))
            }
        })
        .map(|(start, end)| {
            if start == end {
                start.to_string()
            } else {
                format!("{start}-{end}")
            }
        })
        .join(",")
}

impl CpuSet {
    /// Parses a string in the [list format][crate#list-format].
    ///
    /// See [`parse_list()`] for details.
    pub fn from_list(input: &str) -> crate::Result<Self> {
        parse_list(input)
    }

    /// Emits the set in the [list format][crate#list-format].
    ///
    /// See [`emit_list()`] for details.
    #[must_use]
    pub fn to_list_string(&self) -> String {
        emit_list(self)
    }
}
