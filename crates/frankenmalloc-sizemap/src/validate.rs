//! Structural checks a size-class specification must pass before any table
//! is built from it.

use crate::config::{
    ALIGNMENT, MAX_OBJECTS_TO_MOVE, MIN_OBJECTS_TO_MOVE, ModelConfig, MULTI_PAGE_ALIGNMENT,
    MULTI_PAGE_SIZE,
};
use crate::error::SizeClassError;
use crate::size_class_info::SizeClassInfo;

/// Fewest classes a model may declare: the sentinel plus one real class.
pub const MIN_NUM_CLASSES: usize = 2;

/// Most classes a model may declare; class ids are stored in one byte.
pub const MAX_NUM_CLASSES: usize = u8::MAX as usize + 1;

/// Largest tail a span may waste: `1 / MAX_TAIL_WASTE_DIVISOR` of its bytes.
pub const MAX_TAIL_WASTE_DIVISOR: usize = 8;

/// Required alignment of a class of `size` bytes.
#[must_use]
pub const fn required_alignment(size: usize) -> usize {
    if size <= MULTI_PAGE_SIZE {
        ALIGNMENT
    } else {
        MULTI_PAGE_ALIGNMENT
    }
}

/// Bytes left over at the end of a `pages`-page span of `size`-byte objects.
#[must_use]
pub const fn span_tail_waste(size: usize, pages: usize, page_size: usize) -> usize {
    (pages * page_size) % size
}

/// Validates `classes` against `config`, returning the first violation.
///
/// Checks, in order: the model's class count, class count, sentinel, then per class strictly
/// increasing size, size bound, alignment, single-page spans for small
/// classes, span capacity and tail waste, batch range; finally the last class
/// must equal `config.max_size`.
pub fn validate_size_classes(
    config: &ModelConfig,
    classes: &[SizeClassInfo],
) -> Result<(), SizeClassError> {
    if !(MIN_NUM_CLASSES..=MAX_NUM_CLASSES).contains(&config.num_classes) {
        return Err(SizeClassError::ClassCountOutOfRange {
            num_classes: config.num_classes,
            min: MIN_NUM_CLASSES,
            max: MAX_NUM_CLASSES,
        });
    }
    if classes.len() != config.num_classes {
        return Err(SizeClassError::WrongClassCount {
            expected: config.num_classes,
            found: classes.len(),
        });
    }
    if classes[0].size != 0 {
        return Err(SizeClassError::SentinelNotZero {
            size: classes[0].size,
        });
    }

    let page_size = config.page_size();
    for (class, pair) in classes.windows(2).enumerate() {
        let class = class + 1;
        let (previous, info) = (pair[0], pair[1]);
        let size = info.size as usize;

        if info.size <= previous.size {
            return Err(SizeClassError::NonIncreasing {
                class,
                previous: previous.size,
                size: info.size,
            });
        }
        if size > config.max_size {
            return Err(SizeClassError::TooLarge {
                class,
                size: info.size,
                max_size: config.max_size,
            });
        }
        let alignment = required_alignment(size);
        if size % alignment != 0 {
            return Err(SizeClassError::Misaligned {
                class,
                size: info.size,
                alignment,
            });
        }
        if size <= MULTI_PAGE_SIZE && info.pages != 1 {
            return Err(SizeClassError::MultiPageSmallClass {
                class,
                size: info.size,
                pages: info.pages,
            });
        }

        let span = info.pages as usize * page_size;
        if span < size {
            return Err(SizeClassError::SpanTooSmall {
                class,
                size: info.size,
                pages: info.pages,
            });
        }
        let waste = span_tail_waste(size, info.pages as usize, page_size);
        if waste * MAX_TAIL_WASTE_DIVISOR > span {
            return Err(SizeClassError::ExcessiveWaste {
                class,
                size: info.size,
                pages: info.pages,
                waste,
            });
        }

        let batch = info.num_to_move as usize;
        if !(MIN_OBJECTS_TO_MOVE..=MAX_OBJECTS_TO_MOVE).contains(&batch) {
            return Err(SizeClassError::BatchOutOfRange {
                class,
                num_to_move: info.num_to_move,
                min: MIN_OBJECTS_TO_MOVE,
                max: MAX_OBJECTS_TO_MOVE,
            });
        }
    }

    let last = classes[classes.len() - 1].size;
    if last as usize != config.max_size {
        return Err(SizeClassError::LastClassMismatch {
            size: last,
            max_size: config.max_size,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_CONFIG, Model};
    use crate::size_map::SizeMap;
    use crate::tables;

    fn default_table() -> Vec<SizeClassInfo> {
        tables::default_size_classes(Model::Default).to_vec()
    }

    #[test]
    fn compiled_tables_are_valid() {
        for model in Model::ALL {
            let config = model.config();
            validate_size_classes(config, tables::default_size_classes(model))
                .unwrap_or_else(|e| panic!("{model} default: {e}"));
            validate_size_classes(config, tables::experimental_size_classes(model))
                .unwrap_or_else(|e| panic!("{model} experimental: {e}"));
        }
    }

    /// Sentinel plus `real` classes: 8..=512 in steps of 8, then steps of 64,
    /// on 256 KiB pages.
    fn wide_table(real: usize) -> (ModelConfig, Vec<SizeClassInfo>) {
        let mut table = vec![SizeClassInfo::SENTINEL];
        let mut size = 0u32;
        for _ in 0..real {
            size += if size < 512 { 8 } else { 64 };
            table.push(SizeClassInfo::new(size, 1, 32));
        }
        let config = ModelConfig {
            page_shift: 18,
            num_classes: table.len(),
            max_size: size as usize,
            ..DEFAULT_CONFIG
        };
        (config, table)
    }

    #[test]
    fn rejects_class_ids_wider_than_a_byte() {
        let (config, table) = wide_table(299);
        assert_eq!(config.max_size, 15_552);
        assert_eq!(
            validate_size_classes(&config, &table),
            Err(SizeClassError::ClassCountOutOfRange {
                num_classes: 300,
                min: 2,
                max: 256
            })
        );
        assert!(SizeMap::build(&config, &table).is_err());
    }

    #[test]
    fn largest_byte_sized_model_never_under_allocates() {
        let (config, table) = wide_table(MAX_NUM_CLASSES - 1);
        assert_eq!(validate_size_classes(&config, &table), Ok(()));
        let map = SizeMap::build(&config, &table).unwrap();
        for size in 0..=config.max_size {
            let cl = map.get_size_class(size).unwrap();
            assert!(map.class_to_size(cl) >= size, "size {size} -> class {cl}");
        }
        assert_eq!(map.get_size_class(config.max_size), Some(MAX_NUM_CLASSES - 1));
    }

    #[test]
    fn rejects_degenerate_class_count() {
        for num_classes in [0, 1] {
            let config = ModelConfig {
                num_classes,
                ..DEFAULT_CONFIG
            };
            let table = vec![SizeClassInfo::SENTINEL; num_classes];
            assert!(matches!(
                validate_size_classes(&config, &table),
                Err(SizeClassError::ClassCountOutOfRange { min: 2, .. })
            ));
            assert!(SizeMap::build(&config, &table).is_err());
        }
    }

    #[test]
    fn rejects_wrong_count() {
        let mut table = default_table();
        table.pop();
        assert_eq!(
            validate_size_classes(&DEFAULT_CONFIG, &table),
            Err(SizeClassError::WrongClassCount {
                expected: 86,
                found: 85
            })
        );
    }

    #[test]
    fn rejects_nonzero_sentinel() {
        let mut table = default_table();
        table[0].size = 8;
        assert!(matches!(
            validate_size_classes(&DEFAULT_CONFIG, &table),
            Err(SizeClassError::SentinelNotZero { size: 8 })
        ));
    }

    #[test]
    fn rejects_non_increasing() {
        let mut table = default_table();
        table[5] = table[4];
        assert!(matches!(
            validate_size_classes(&DEFAULT_CONFIG, &table),
            Err(SizeClassError::NonIncreasing { class: 5, .. })
        ));
    }

    #[test]
    fn rejects_misaligned_small_class() {
        let mut table = default_table();
        table[1].size = 4;
        assert!(matches!(
            validate_size_classes(&DEFAULT_CONFIG, &table),
            Err(SizeClassError::Misaligned {
                class: 1,
                alignment: 8,
                ..
            })
        ));
    }

    #[test]
    fn rejects_misaligned_multi_page_class() {
        let mut table = default_table();
        let class = table.iter().position(|c| c.size > 600).unwrap();
        table[class].size = table[class - 1].size + 8;
        assert!(matches!(
            validate_size_classes(&DEFAULT_CONFIG, &table),
            Err(SizeClassError::Misaligned { alignment: 64, .. })
        ));
    }

    #[test]
    fn rejects_multi_page_small_class() {
        let mut table = default_table();
        table[3].pages = 2;
        assert!(matches!(
            validate_size_classes(&DEFAULT_CONFIG, &table),
            Err(SizeClassError::MultiPageSmallClass { class: 3, pages: 2, .. })
        ));
    }

    #[test]
    fn rejects_span_smaller_than_object() {
        let mut table = default_table();
        let last = table.len() - 1;
        table[last].pages = 1;
        assert!(matches!(
            validate_size_classes(&DEFAULT_CONFIG, &table),
            Err(SizeClassError::SpanTooSmall { .. })
        ));
    }

    #[test]
    fn rejects_excessive_tail_waste() {
        let mut table = default_table();
        // 5120-byte objects in one 8 KiB page leave 3072 bytes unused.
        let class = table.iter().position(|c| c.size == 5120).unwrap();
        table[class].pages = 1;
        assert!(matches!(
            validate_size_classes(&DEFAULT_CONFIG, &table),
            Err(SizeClassError::ExcessiveWaste { waste: 3072, .. })
        ));
    }

    #[test]
    fn rejects_batch_outside_range() {
        let mut table = default_table();
        table[2].num_to_move = 1;
        assert!(matches!(
            validate_size_classes(&DEFAULT_CONFIG, &table),
            Err(SizeClassError::BatchOutOfRange { class: 2, .. })
        ));
        table[2].num_to_move = 129;
        assert!(validate_size_classes(&DEFAULT_CONFIG, &table).is_err());
    }

    #[test]
    fn rejects_class_above_max_size() {
        let mut table = default_table();
        let last = table.len() - 1;
        table[last].size = DEFAULT_CONFIG.max_size as u32 + 8192;
        table[last].pages = 33;
        assert!(matches!(
            validate_size_classes(&DEFAULT_CONFIG, &table),
            Err(SizeClassError::TooLarge { .. })
        ));
    }

    #[test]
    fn rejects_short_last_class() {
        let config = ModelConfig {
            num_classes: 3,
            ..DEFAULT_CONFIG
        };
        let table = [
            SizeClassInfo::SENTINEL,
            SizeClassInfo::new(8, 1, 32),
            SizeClassInfo::new(16, 1, 32),
        ];
        assert_eq!(
            validate_size_classes(&config, &table),
            Err(SizeClassError::LastClassMismatch {
                size: 16,
                max_size: DEFAULT_CONFIG.max_size
            })
        );
    }

    #[test]
    fn alignment_thresholds() {
        assert_eq!(required_alignment(8), 8);
        assert_eq!(required_alignment(512), 8);
        assert_eq!(required_alignment(513), 64);
        assert_eq!(required_alignment(262_144), 64);
        assert_eq!(span_tail_waste(5120, 1, 8192), 3072);
        assert_eq!(span_tail_waste(4096, 1, 8192), 0);
    }
}
