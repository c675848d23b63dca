//! Errors raised while parsing or validating a size-class specification.

use thiserror::Error;

/// Why a size-class specification was rejected.
///
/// `class`/`entry` fields are class ids: position 0 is the sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SizeClassError {
    #[error("invalid character {ch:?} at byte {position}")]
    InvalidCharacter { ch: char, position: usize },
    #[error("entry {entry} has more than three fields")]
    TooManyFields { entry: usize },
    #[error("entry {entry} has a value above {limit}")]
    ValueTooLarge { entry: usize, limit: usize },
    #[error("model declares {num_classes} size classes, supported range is {min}..={max}")]
    ClassCountOutOfRange { num_classes: usize, min: usize, max: usize },
    #[error("expected {expected} size classes, found {found}")]
    WrongClassCount { expected: usize, found: usize },
    #[error("class 0 must be the zero-size sentinel, found size {size}")]
    SentinelNotZero { size: u32 },
    #[error("non-increasing size class {class}: {previous} then {size}")]
    NonIncreasing { class: usize, previous: u32, size: u32 },
    #[error("size class {class} ({size} bytes) exceeds the maximum size {max_size}")]
    TooLarge {
        class: usize,
        size: u32,
        max_size: usize,
    },
    #[error("size class {class} ({size} bytes) is not a multiple of {alignment}")]
    Misaligned {
        class: usize,
        size: u32,
        alignment: usize,
    },
    #[error("size class {class} ({size} bytes) must use single-page spans, found {pages} pages")]
    MultiPageSmallClass { class: usize, size: u32, pages: u8 },
    #[error("size class {class}: a {pages}-page span cannot hold one {size}-byte object")]
    SpanTooSmall { class: usize, size: u32, pages: u8 },
    #[error("size class {class}: a {pages}-page span wastes {waste} bytes on {size}-byte objects")]
    ExcessiveWaste {
        class: usize,
        size: u32,
        pages: u8,
        waste: usize,
    },
    #[error("size class {class}: batch size {num_to_move} outside [{min}, {max}]")]
    BatchOutOfRange {
        class: usize,
        num_to_move: u8,
        min: usize,
        max: usize,
    },
    #[error("last size class is {size} bytes, expected the maximum size {max_size}")]
    LastClassMismatch { size: u32, max_size: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_class() {
        let err = SizeClassError::Misaligned {
            class: 40,
            size: 1000,
            alignment: 64,
        };
        assert_eq!(
            err.to_string(),
            "size class 40 (1000 bytes) is not a multiple of 64"
        );
        let err = SizeClassError::WrongClassCount {
            expected: 86,
            found: 3,
        };
        assert_eq!(err.to_string(), "expected 86 size classes, found 3");
    }
}
