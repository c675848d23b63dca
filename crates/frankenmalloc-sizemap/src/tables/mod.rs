//! Compiled-in size-class specifications, one production and one
//! experimental table per model.
//!
//! Every table starts with the class 0 sentinel and ends at the model's
//! `max_size`. Classes above 1024 bytes are 128-byte multiples, so each
//! 128-byte index bucket maps onto a distinct class.

mod large_pages;
mod pages_256k;
mod pages_8k;
mod small_but_slow;

use crate::config::Model;
use crate::size_class_info::SizeClassInfo;

/// Production specification for `model`.
#[must_use]
pub fn default_size_classes(model: Model) -> &'static [SizeClassInfo] {
    match model {
        Model::Default => &pages_8k::SIZE_CLASSES,
        Model::LargePages => &large_pages::SIZE_CLASSES,
        Model::Pages256K => &pages_256k::SIZE_CLASSES,
        Model::SmallButSlow => &small_but_slow::SIZE_CLASSES,
    }
}

/// Experimental specification for `model`.
#[must_use]
pub fn experimental_size_classes(model: Model) -> &'static [SizeClassInfo] {
    match model {
        Model::Default => &pages_8k::EXPERIMENTAL_SIZE_CLASSES,
        Model::LargePages => &large_pages::EXPERIMENTAL_SIZE_CLASSES,
        Model::Pages256K => &pages_256k::EXPERIMENTAL_SIZE_CLASSES,
        Model::SmallButSlow => &small_but_slow::EXPERIMENTAL_SIZE_CLASSES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_lengths_match_models() {
        for model in Model::ALL {
            let expected = model.config().num_classes;
            assert_eq!(default_size_classes(model).len(), expected, "{model}");
            assert_eq!(experimental_size_classes(model).len(), expected, "{model}");
        }
    }

    #[test]
    fn tables_end_at_max_size() {
        for model in Model::ALL {
            let max = model.config().max_size as u32;
            assert_eq!(default_size_classes(model).last().map(|c| c.size), Some(max));
            assert_eq!(
                experimental_size_classes(model).last().map(|c| c.size),
                Some(max)
            );
        }
    }

    #[test]
    fn experimental_table_differs() {
        for model in Model::ALL {
            assert_ne!(
                default_size_classes(model),
                experimental_size_classes(model),
                "{model}"
            );
        }
    }

    #[test]
    fn large_classes_fill_whole_index_buckets() {
        for model in Model::ALL {
            for class in default_size_classes(model) {
                if class.size > 1024 {
                    assert_eq!(class.size % 128, 0, "{model}: {}", class.size);
                }
            }
        }
    }
}
