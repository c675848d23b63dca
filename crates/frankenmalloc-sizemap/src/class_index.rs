//! Size to class-index arithmetic.
//!
//! Sizes up to 1024 bytes are 8-byte aligned, so they index a logical array
//! by `ceil(size / 8)`. Larger sizes are 128-byte aligned and index a second
//! logical array by `ceil(size / 128)`. Both arrays are flattened into one
//! physical table; the `120 << 7` bias makes the second segment start right
//! after the first.
//!
//! ```text
//!   size        expression                         index
//!   0           (0 + 7) >> 3                       0
//!   1           (1 + 7) >> 3                       1
//!   1024        (1024 + 7) >> 3                    128
//!   1025        (1025 + 127 + (120 << 7)) >> 7     129
//!   32768       (32768 + 127 + (120 << 7)) >> 7    376
//!   262144      (262144 + 127 + (120 << 7)) >> 7   2168
//! ```

use crate::config::MAX_SMALL_SIZE;

const SMALL_SHIFT: usize = 3;
const LARGE_SHIFT: usize = 7;
const LARGE_BIAS: usize = 120 << LARGE_SHIFT;

/// Index of the last entry of the 8-byte-granularity segment.
pub const MAX_SMALL_INDEX: usize = (MAX_SMALL_SIZE + 7) >> SMALL_SHIFT;

/// Number of class-index entries needed to cover `[0, max_size]`.
#[must_use]
pub const fn class_array_size(max_size: usize) -> usize {
    ((max_size + 127 + LARGE_BIAS) >> LARGE_SHIFT) + 1
}

/// Computes the class-index entry for `size`.
///
/// Returns `None` when `size > max_size`; the caller must then take the
/// large-object path.
#[inline(always)]
#[must_use]
pub const fn class_index_maybe(size: usize, max_size: usize) -> Option<usize> {
    if size <= MAX_SMALL_SIZE {
        Some((size + 7) >> SMALL_SHIFT)
    } else if size <= max_size {
        Some((size + 127 + LARGE_BIAS) >> LARGE_SHIFT)
    } else {
        None
    }
}

/// Like [`class_index_maybe`], for callers that already established
/// `size <= max_size`.
///
/// # Panics
///
/// Panics if `size > max_size`; that is a broken caller invariant.
#[inline]
#[must_use]
pub const fn class_index(size: usize, max_size: usize) -> usize {
    match class_index_maybe(size, max_size) {
        Some(idx) => idx,
        None => panic!("class_index: size exceeds the largest size class"),
    }
}

/// Largest byte size that maps to `index`, clamped to `max_size`.
///
/// Table construction keys each entry on this value so that every size
/// sharing an entry fits in the chosen class.
#[must_use]
pub const fn largest_size_for_index(index: usize, max_size: usize) -> usize {
    let size = if index <= MAX_SMALL_INDEX {
        index << SMALL_SHIFT
    } else {
        (index << LARGE_SHIFT) - LARGE_BIAS
    };
    if size > max_size { max_size } else { size }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAX: usize = 256 * 1024;

    #[test]
    fn worked_values() {
        assert_eq!(class_index_maybe(0, MAX), Some(0));
        assert_eq!(class_index_maybe(1, MAX), Some(1));
        assert_eq!(class_index_maybe(8, MAX), Some(1));
        assert_eq!(class_index_maybe(9, MAX), Some(2));
        assert_eq!(class_index_maybe(1024, MAX), Some(128));
        assert_eq!(class_index_maybe(1025, MAX), Some(129));
        assert_eq!(class_index_maybe(32768, MAX), Some(376));
        assert_eq!(class_index_maybe(MAX, MAX), Some(2168));
    }

    #[test]
    fn above_max_is_none() {
        assert_eq!(class_index_maybe(MAX + 1, MAX), None);
        assert_eq!(class_index_maybe(usize::MAX / 2, MAX), None);
        assert_eq!(class_index_maybe(8193, 8192), None);
    }

    #[test]
    fn array_size_covers_max() {
        assert_eq!(class_array_size(MAX), 2169);
        assert_eq!(class_index(MAX, MAX), class_array_size(MAX) - 1);
        assert_eq!(class_index(8192, 8192), class_array_size(8192) - 1);
    }

    #[test]
    fn monotonic_over_full_range() {
        let mut prev = 0;
        for size in 0..=MAX {
            let idx = class_index(size, MAX);
            assert!(idx >= prev, "index dropped at size {size}");
            assert!(idx - prev <= 1, "index skipped at size {size}");
            prev = idx;
        }
    }

    #[test]
    fn largest_size_maps_back_to_index() {
        for idx in 0..class_array_size(MAX) {
            let largest = largest_size_for_index(idx, MAX);
            assert_eq!(class_index(largest, MAX), idx, "index {idx}");
            if largest < MAX {
                assert_eq!(class_index(largest + 1, MAX), idx + 1, "index {idx}");
            }
        }
    }

    #[test]
    fn largest_size_segment_boundary() {
        assert_eq!(largest_size_for_index(0, MAX), 0);
        assert_eq!(largest_size_for_index(128, MAX), 1024);
        assert_eq!(largest_size_for_index(129, MAX), 1152);
        assert_eq!(largest_size_for_index(2168, MAX), MAX);
    }

    #[test]
    #[should_panic(expected = "exceeds the largest size class")]
    fn fatal_variant_panics_above_max() {
        let _ = class_index(MAX + 1, MAX);
    }
}
