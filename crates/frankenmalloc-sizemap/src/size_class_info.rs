//! Size-class specification entries and the override string format.
//!
//! An override lists classes 1.. as `size,pages,num_to_move` triples joined
//! by `;`. Class 0 is the implicit `{0, 0, 0}` sentinel and is never written.
//! Only ASCII digits, `,` and `;` are accepted; a missing field reads as 0.

use serde::{Deserialize, Serialize};

use crate::error::SizeClassError;

/// One row of a size-class specification.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SizeClassInfo {
    /// Canonical object size in bytes.
    pub size: u32,
    /// Pages in one span of this class.
    pub pages: u8,
    /// Objects moved per batch between a thread cache and the central cache.
    pub num_to_move: u8,
}

impl SizeClassInfo {
    /// The class 0 sentinel.
    pub const SENTINEL: SizeClassInfo = SizeClassInfo::new(0, 0, 0);

    #[must_use]
    pub const fn new(size: u32, pages: u8, num_to_move: u8) -> Self {
        Self {
            size,
            pages,
            num_to_move,
        }
    }
}

const FIELDS_PER_ENTRY: usize = 3;

/// Parses an override specification for a model whose largest class is
/// `max_size`.
///
/// The returned vector starts with [`SizeClassInfo::SENTINEL`]. Parsing only
/// checks syntax and field ranges; structural rules are left to
/// [`crate::validate::validate_size_classes`].
pub fn parse_size_classes(
    spec: &str,
    max_size: usize,
) -> Result<Vec<SizeClassInfo>, SizeClassError> {
    let mut classes = vec![SizeClassInfo::SENTINEL];
    let mut fields = [0usize; FIELDS_PER_ENTRY];
    let mut field = 0usize;

    for (position, ch) in spec.trim().char_indices() {
        match ch {
            '0'..='9' => {
                let digit = ch as usize - '0' as usize;
                let value = fields[field]
                    .checked_mul(10)
                    .and_then(|v| v.checked_add(digit))
                    .filter(|&v| v <= max_size)
                    .ok_or(SizeClassError::ValueTooLarge {
                        entry: classes.len(),
                        limit: max_size,
                    })?;
                fields[field] = value;
            }
            ',' => {
                field += 1;
                if field >= FIELDS_PER_ENTRY {
                    return Err(SizeClassError::TooManyFields {
                        entry: classes.len(),
                    });
                }
            }
            ';' => {
                classes.push(entry_from_fields(&fields, classes.len())?);
                fields = [0; FIELDS_PER_ENTRY];
                field = 0;
            }
            _ => return Err(SizeClassError::InvalidCharacter { ch, position }),
        }
    }
    classes.push(entry_from_fields(&fields, classes.len())?);
    Ok(classes)
}

fn entry_from_fields(
    fields: &[usize; FIELDS_PER_ENTRY],
    entry: usize,
) -> Result<SizeClassInfo, SizeClassError> {
    let narrow = |value: usize| {
        u8::try_from(value).map_err(|_| SizeClassError::ValueTooLarge {
            entry,
            limit: u8::MAX as usize,
        })
    };
    let size = u32::try_from(fields[0]).map_err(|_| SizeClassError::ValueTooLarge {
        entry,
        limit: u32::MAX as usize,
    })?;
    Ok(SizeClassInfo::new(size, narrow(fields[1])?, narrow(fields[2])?))
}

/// Renders classes 1.. in the override format accepted by
/// [`parse_size_classes`].
#[must_use]
pub fn format_size_classes(classes: &[SizeClassInfo]) -> String {
    classes
        .iter()
        .skip(1)
        .map(|c| format!("{},{},{}", c.size, c.pages, c.num_to_move))
        .collect::<Vec<_>>()
        .join(";")
}
