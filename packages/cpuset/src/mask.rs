use itertools::Itertools;

use crate::{CpuId, CpuSet, Error};

/// Number of CPU IDs covered by one mask word.
const WORD_BITS: CpuId = 32;

/// Number of hexadecimal digits in one mask word.
const WORD_DIGITS: usize = 8;

/// Parses a string in the [mask format][crate#mask-format].
///
/// Every word must be exactly eight hexadecimal digits. The last word covers CPUs 0-31, the one
/// before it CPUs 32-63 and so on. An empty string is valid input and returns an empty set.
///
/// # Example
///
/// ```
/// use cpuset::{CpuSet, parse_mask};
///
/// let set = parse_mask("00000001,80000000").unwrap();
/// assert_eq!(set, CpuSet::of([31, 32]));
/// ```
pub fn parse_mask(input: &str) -> crate::Result<CpuSet> {
    let mut set = CpuSet::new();

    if input.is_empty() {
        return Ok(set);
    }

    let words = input.split(',').collect::<Vec<_>>();

    // The first word covers the highest IDs and every later word is one word lower.
    let mut offset =
        highest_word_offset(words.len()).ok_or_else(|| Error::OffsetOutOfRange {
            input: input.to_string(),
        })?;

    for word in words {
        let mask = parse_word(word).ok_or_else(|| Error::InvalidWord {
            input: input.to_string(),
            word: word.to_string(),
        })?;

        set.extend(
            (0..WORD_BITS)
                .filter(|pos| mask & (1 << pos) != 0)
                .map(|pos| offset | pos),
        );

        // Only saturates after the last word, whose offset is zero.
        offset = offset.saturating_sub(WORD_BITS);
    }

    Ok(set)
}

/// Returns the ID covered by bit 0 of the first (most significant) word in a mask of
/// `word_count` words, or `None` if the IDs in that word would not fit in [`CpuId`].
fn highest_word_offset(word_count: usize) -> Option<CpuId> {
    let highest_index = CpuId::try_from(word_count.checked_sub(1)?).ok()?;

    // Offsets are multiples of WORD_BITS, so if the offset fits then so does offset + 31.
    highest_index.checked_mul(WORD_BITS)
}

fn parse_word(word: &str) -> Option<u32> {
    if word.len() != WORD_DIGITS || !word.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    u32::from_str_radix(word, 16).ok()
}

/// Emits a set in the [mask format][crate#mask-format].
///
/// The output has as few words as needed to cover the highest CPU ID in the set, each rendered
/// as eight lowercase hexadecimal digits. The empty set is emitted as an empty string.
///
/// # Example
///
/// ```
/// use cpuset::{CpuSet, emit_mask};
///
/// assert_eq!(emit_mask(&CpuSet::of(32..40)), "000000ff,00000000");
/// ```
#[must_use]
pub fn emit_mask(set: &CpuSet) -> String {
    let Some(max) = set.max() else {
        return String::new();
    };

    // Index 0 is the least significant word, which is emitted last.
    let (max_index, _) = word_position(max);
    let mut words = vec![0_u32; max_index + 1];

    for cpu in set.iter_unsorted() {
        let (index, pos) = word_position(cpu);

        let word = words
            .get_mut(index)
            .expect("word count is derived from the highest CPU ID in the set");

        *word |= 1 << pos;
    }

    words.iter().rev().map(|word| format!("{word:08x}")).join(",")
}

/// Returns the index of the word containing the CPU, counting from the least significant word,
/// and the position of the CPU's bit within that word.
#[expect(clippy::integer_division, reason = "we want the index of the containing word")]
// Not `expect`: clippy skips division by a non-zero constant, so this lint may not fire.
#[allow(clippy::arithmetic_side_effects, reason = "divisor is a non-zero constant")]
fn word_position(cpu: CpuId) -> (usize, CpuId) {
    let index = usize::try_from(cpu / WORD_BITS)
        .expect("a mask reaching this CPU ID would have more words than fit in memory");

    (index, cpu % WORD_BITS)
}

impl CpuSet {
    /// Parses a string in the [mask format][crate#mask-format].
    ///
    /// See [`parse_mask()`] for details.
    pub fn from_mask(input: &str) -> crate::Result<Self> {
        parse_mask(input)
    }

    /// Emits the set in the [mask format][crate#mask-format].
    ///
    /// See [`emit_mask()`] for details.
    #[must_use]
    pub fn to_mask_string(&self) -> String {
        emit_mask(self)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn parse_smoke_test() {
        assert_eq!(parse_mask("").unwrap(), CpuSet::new());

        assert_eq!(parse_mask("00000000").unwrap(), CpuSet::new());

        assert_eq!(parse_mask("00000001").unwrap(), CpuSet::of([0]));

        assert_eq!(
            parse_mask("40000000,00000000,00000000").unwrap(),
            CpuSet::of([94])
        );

        assert_eq!(
            parse_mask("00000001,00000000,00000000").unwrap(),
            CpuSet::of([64])
        );

        assert_eq!(parse_mask("000000ff,00000000").unwrap(), CpuSet::of(32..40));

        assert_eq!(
            parse_mask("000e3862").unwrap(),
            CpuSet::of([1, 5, 6, 11, 12, 13, 17, 18, 19])
        );

        assert_eq!(
            parse_mask("00000001,00000001,00010117").unwrap(),
            CpuSet::of([0, 1, 2, 4, 8, 16, 32, 64])
        );

        assert_eq!(parse_mask("ffffffff").unwrap(), CpuSet::of(0..32));
    }

    #[test]
    fn accepts_uppercase_digits() {
        assert_eq!(parse_mask("000000FF").unwrap(), CpuSet::of(0..8));
    }

    #[test]
    fn leading_zero_words_are_allowed() {
        assert_eq!(
            parse_mask("00000000,00000000,00000002").unwrap(),
            CpuSet::of([1])
        );
    }

    #[test]
    fn invalid_word_messages() {
        let cases = [
            (",", ""),
            ("xxxxxxxx", "xxxxxxxx"),
            ("100000000", "100000000"),
            ("1", "1"),
            ("ff", "ff"),
            ("00000001,", ""),
            ("0000000g", "0000000g"),
            ("+0000001", "+0000001"),
            ("00000001,0x000001", "0x000001"),
        ];

        for (input, word) in cases {
            let error = parse_mask(input).unwrap_err();

            assert_eq!(
                error.to_string(),
                format!("cpuset: parsing {input:?}: invalid 32-bit word {word:?}"),
                "input {input:?}"
            );
            assert_eq!(
                error,
                Error::InvalidWord {
                    input: input.to_string(),
                    word: word.to_string(),
                }
            );
        }
    }

    #[test]
    fn emit_smoke_test() {
        assert_eq!(emit_mask(&CpuSet::new()), "");

        assert_eq!(emit_mask(&CpuSet::of([0])), "00000001");

        assert_eq!(emit_mask(&CpuSet::of([31])), "80000000");

        assert_eq!(emit_mask(&CpuSet::of([94])), "40000000,00000000,00000000");

        assert_eq!(emit_mask(&CpuSet::of([64])), "00000001,00000000,00000000");

        assert_eq!(emit_mask(&CpuSet::of(32..40)), "000000ff,00000000");

        assert_eq!(
            emit_mask(&CpuSet::of([1, 5, 6, 11, 12, 13, 17, 18, 19])),
            "000e3862"
        );

        assert_eq!(
            emit_mask(&CpuSet::of([0, 1, 2, 4, 8, 16, 32, 64])),
            "00000001,00000001,00010117"
        );
    }

    #[test]
    fn highest_word_offset_smoke_test() {
        assert_eq!(highest_word_offset(1), Some(0));
        assert_eq!(highest_word_offset(2), Some(32));
        assert_eq!(highest_word_offset(3), Some(64));
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn highest_word_offset_covers_every_id() {
        // The largest mask whose first word still holds representable IDs, with
        // CpuId::MAX as bit 31 of that word.
        let max_words = 1_usize << 59;

        let offset = highest_word_offset(max_words).unwrap();
        assert_eq!(offset + 31, CpuId::MAX);

        assert_eq!(highest_word_offset(max_words + 1), None);
    }

    #[test]
    fn last_word_of_wide_mask_starts_at_zero() {
        let mut input = "80000000".to_string();
        input.push_str(&",00000000".repeat(63));
        input.push_str(",00000001");

        assert_eq!(
            parse_mask(&input).unwrap(),
            CpuSet::of([0, 64 * 32 + 31])
        );
    }

    #[test]
    fn emit_uses_minimal_word_count() {
        assert_eq!(emit_mask(&CpuSet::of([0, 31])), "80000001");
        assert_eq!(emit_mask(&CpuSet::of([32])), "00000001,00000000");
        assert_eq!(emit_mask(&CpuSet::of([63])), "80000000,00000000");
    }

    #[test]
    fn round_trip() {
        let sets = [
            CpuSet::new(),
            CpuSet::of([0]),
            CpuSet::of([31, 32]),
            CpuSet::of(0..100),
            CpuSet::of([3, 70, 500, 1023]),
        ];

        for set in sets {
            let emitted = emit_mask(&set);
            let parsed = CpuSet::from_mask(&emitted).unwrap();

            assert_eq!(parsed, set);
            assert_eq!(parsed.to_mask_string(), emitted);
        }
    }
}
