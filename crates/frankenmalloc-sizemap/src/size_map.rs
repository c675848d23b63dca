//! Size-class lookup tables.
//!
//! A [`SizeMap`] holds the class-index table (size-derived index to class id)
//! and three per-class arrays: canonical size, pages per span, and batch size.
//! It is built once, validated, and read-only afterwards; every lookup is a
//! pure function of the tables.

use crate::class_index::{class_index, class_index_maybe, largest_size_for_index};
use crate::config::{Model, ModelConfig};
use crate::error::SizeClassError;
use crate::size_class_info::SizeClassInfo;
use crate::tables;
use crate::validate::{MAX_NUM_CLASSES, validate_size_classes};

/// Size-class information and mapping for one page model.
#[derive(Clone, PartialEq, Eq)]
pub struct SizeMap {
    /// Hit on every allocation; kept first.
    class_array: Box<[u8]>,
    num_objects_to_move: Box<[u8]>,
    class_to_pages: Box<[u8]>,
    class_to_size: Box<[u32]>,
    config: ModelConfig,
    initialized: bool,
}

impl SizeMap {
    /// All-zero tables: every in-range lookup yields the sentinel class 0.
    #[must_use]
    pub fn uninitialized(config: &ModelConfig) -> Self {
        Self {
            class_array: vec![0; config.class_array_size()].into_boxed_slice(),
            num_objects_to_move: vec![0; config.num_classes].into_boxed_slice(),
            class_to_pages: vec![0; config.num_classes].into_boxed_slice(),
            class_to_size: vec![0; config.num_classes].into_boxed_slice(),
            config: *config,
            initialized: false,
        }
    }

    /// Validates `classes` and builds the tables from them.
    pub fn build(config: &ModelConfig, classes: &[SizeClassInfo]) -> Result<Self, SizeClassError> {
        let mut map = Self::uninitialized(config);
        map.set_size_classes(classes)?;
        Ok(map)
    }

    /// Tables for `model` built from its compiled-in production table.
    #[must_use]
    pub fn for_model(model: Model) -> Self {
        Self::from_compiled(model.config(), tables::default_size_classes(model))
    }

    /// Tables for `model` built from its compiled-in experimental table.
    #[must_use]
    pub fn experimental_for_model(model: Model) -> Self {
        Self::from_compiled(model.config(), tables::experimental_size_classes(model))
    }

    fn from_compiled(config: &ModelConfig, classes: &'static [SizeClassInfo]) -> Self {
        debug_assert_eq!(validate_size_classes(config, classes), Ok(()));
        let mut map = Self::uninitialized(config);
        map.populate(classes);
        map
    }

    /// Replaces the tables with `classes`.
    ///
    /// On a validation error the current tables are left exactly as they were.
    pub fn set_size_classes(&mut self, classes: &[SizeClassInfo]) -> Result<(), SizeClassError> {
        validate_size_classes(&self.config, classes)?;
        self.populate(classes);
        Ok(())
    }

    /// Requires `classes` to be valid for `self.config`.
    fn populate(&mut self, classes: &[SizeClassInfo]) {
        for (cl, info) in classes.iter().enumerate() {
            self.class_to_size[cl] = info.size;
            self.class_to_pages[cl] = info.pages;
            self.num_objects_to_move[cl] = info.num_to_move;
        }

        // Each entry gets the smallest real class that holds the largest size
        // sharing that entry. The last class equals max_size, so the scan
        // always stops in range.
        let max_size = self.config.max_size;
        let mut cl = 1;
        for (idx, slot) in self.class_array.iter_mut().enumerate() {
            let largest = largest_size_for_index(idx, max_size);
            while (self.class_to_size[cl] as usize) < largest {
                cl += 1;
            }
            debug_assert!(cl < MAX_NUM_CLASSES, "class id {cl} does not fit in a byte");
            *slot = cl as u8;
        }
        self.initialized = true;
    }

    /// Returns the class for `size`, or `None` if `size` exceeds the largest
    /// size class.
    ///
    /// Returns `Some(0)` for every in-range size while the map is
    /// uninitialized; class 0 means "not yet classified", never a real class.
    #[inline(always)]
    #[must_use]
    pub fn get_size_class(&self, size: usize) -> Option<usize> {
        let idx = class_index_maybe(size, self.config.max_size)?;
        Some(usize::from(self.class_array[idx]))
    }

    /// Returns the class for `size` whose canonical size is a multiple of
    /// `align`.
    ///
    /// `None` if the size exceeds the largest class, if `align` is at least
    /// the page size, or if no class at or above the plain result is aligned.
    /// Every class above 512 bytes is 64-byte aligned, so `align <= 64`
    /// always succeeds for in-range sizes. `align == 1` behaves exactly like
    /// [`Self::get_size_class`].
    ///
    /// `align` must be a non-zero power of two.
    #[inline(always)]
    #[must_use]
    pub fn get_size_class_aligned(&self, size: usize, align: usize) -> Option<usize> {
        debug_assert!(align.is_power_of_two(), "alignment {align} is not a power of two");
        if align >= self.config.page_size() {
            return None;
        }
        let mut cl = self.get_size_class(size)?;

        // Size-aligned requests usually land on a matching class directly.
        let mask = align - 1;
        while cl < self.class_to_size.len() {
            if self.class_to_size[cl] as usize & mask == 0 {
                return Some(cl);
            }
            cl += 1;
        }
        None
    }

    /// Class for a size the caller has already bounded by the maximum size.
    ///
    /// Returns 0 while the map is uninitialized.
    ///
    /// # Panics
    ///
    /// Panics if `size > self.max_size()`.
    #[inline(always)]
    #[must_use]
    pub fn size_class(&self, size: usize) -> usize {
        usize::from(self.class_array[class_index(size, self.config.max_size)])
    }

    /// Canonical byte size of class `cl`.
    ///
    /// # Panics
    ///
    /// Panics if `cl >= self.num_classes()`.
    #[inline(always)]
    #[must_use]
    pub fn class_to_size(&self, cl: usize) -> usize {
        self.check_class(cl);
        self.class_to_size[cl] as usize
    }

    /// Pages per span of class `cl`.
    ///
    /// # Panics
    ///
    /// Panics if `cl >= self.num_classes()`.
    #[inline]
    #[must_use]
    pub fn class_to_pages(&self, cl: usize) -> usize {
        self.check_class(cl);
        usize::from(self.class_to_pages[cl])
    }

    /// Objects moved in one batch between a thread cache and the central
    /// cache for class `cl`.
    ///
    /// # Panics
    ///
    /// Panics if `cl >= self.num_classes()`.
    #[inline]
    #[must_use]
    pub fn num_objects_to_move(&self, cl: usize) -> usize {
        self.check_class(cl);
        usize::from(self.num_objects_to_move[cl])
    }

    /// Bytes in one span of class `cl`.
    #[must_use]
    pub fn span_bytes(&self, cl: usize) -> usize {
        self.class_to_pages(cl) * self.config.page_size()
    }

    /// Whole objects that fit in one span of class `cl` (0 for the sentinel).
    #[must_use]
    pub fn objects_per_span(&self, cl: usize) -> usize {
        match self.class_to_size(cl) {
            0 => 0,
            size => self.span_bytes(cl) / size,
        }
    }

    #[inline(always)]
    fn check_class(&self, cl: usize) {
        assert!(
            cl < self.class_to_size.len(),
            "size class {cl} out of range (num_classes = {})",
            self.class_to_size.len()
        );
    }

    #[must_use]
    pub fn num_classes(&self) -> usize {
        self.config.num_classes
    }

    #[must_use]
    pub fn max_size(&self) -> usize {
        self.config.max_size
    }

    #[must_use]
    pub fn page_size(&self) -> usize {
        self.config.page_size()
    }

    #[must_use]
    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    /// Whether tables have been populated from a specification.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// The active specification, one entry per class id.
    #[must_use]
    pub fn size_classes(&self) -> Vec<SizeClassInfo> {
        (0..self.num_classes())
            .map(|cl| {
                SizeClassInfo::new(
                    self.class_to_size[cl],
                    self.class_to_pages[cl],
                    self.num_objects_to_move[cl],
                )
            })
            .collect()
    }
}

impl std::fmt::Debug for SizeMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SizeMap")
            .field("model", &self.config.model)
            .field("num_classes", &self.config.num_classes)
            .field("class_array_len", &self.class_array.len())
            .field("initialized", &self.initialized)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_CONFIG, SMALL_BUT_SLOW_CONFIG};

    #[test]
    fn uninitialized_returns_sentinel() {
        let map = SizeMap::uninitialized(&DEFAULT_CONFIG);
        assert!(!map.is_initialized());
        assert_eq!(map.get_size_class(0), Some(0));
        assert_eq!(map.get_size_class(4096), Some(0));
        assert_eq!(map.get_size_class(DEFAULT_CONFIG.max_size + 1), None);
        assert_eq!(map.size_class(100), 0);
        assert_eq!(map.class_to_size(0), 0);
    }

    #[test]
    fn small_sizes_map_to_eight_byte_classes() {
        let map = SizeMap::for_model(Model::Default);
        assert!(map.is_initialized());
        assert_eq!(map.get_size_class(0), Some(1));
        assert_eq!(map.get_size_class(1), Some(1));
        assert_eq!(map.get_size_class(8), Some(1));
        assert_eq!(map.get_size_class(9), Some(2));
        assert_eq!(map.class_to_size(map.size_class(100)), 104);
    }

    #[test]
    fn sizes_round_up_across_segments() {
        let map = SizeMap::for_model(Model::Default);
        assert_eq!(map.class_to_size(map.size_class(1024)), 1024);
        assert_eq!(map.class_to_size(map.size_class(1025)), 1152);
        assert_eq!(map.class_to_size(map.size_class(1152)), 1152);
        assert_eq!(map.class_to_size(map.size_class(1153)), 1280);
        assert_eq!(map.size_class(262_144), map.num_classes() - 1);
        assert_eq!(map.get_size_class(262_145), None);
    }

    #[test]
    fn aligned_lookup_with_align_one_is_plain() {
        let map = SizeMap::for_model(Model::Default);
        for size in [0, 1, 7, 100, 513, 1025, 70_000, 262_144] {
            assert_eq!(map.get_size_class_aligned(size, 1), map.get_size_class(size));
        }
    }

    #[test]
    fn aligned_lookup_scans_forward() {
        let map = SizeMap::for_model(Model::Default);
        // 24 is not 16-aligned; the next class (32) is.
        let cl = map.get_size_class_aligned(24, 16).unwrap();
        assert_eq!(map.class_to_size(cl), 32);
        let cl = map.get_size_class_aligned(100, 64).unwrap();
        assert_eq!(map.class_to_size(cl), 128);
        let cl = map.get_size_class_aligned(8, 4096).unwrap();
        assert_eq!(map.class_to_size(cl), 4096);
    }

    #[test]
    fn aligned_lookup_rejects_page_alignment() {
        let map = SizeMap::for_model(Model::Default);
        assert_eq!(map.get_size_class_aligned(8, 8192), None);
        assert_eq!(map.get_size_class_aligned(8, 16384), None);
        assert_eq!(map.get_size_class_aligned(262_145, 8), None);
    }

    #[test]
    fn metadata_accessors() {
        let map = SizeMap::for_model(Model::Default);
        let cl = map.size_class(5000);
        assert_eq!(map.class_to_size(cl), 5120);
        assert_eq!(map.class_to_pages(cl), 2);
        assert_eq!(map.num_objects_to_move(cl), 12);
        assert_eq!(map.span_bytes(cl), 16384);
        assert_eq!(map.objects_per_span(cl), 3);
        assert_eq!(map.objects_per_span(0), 0);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn class_to_size_panics_out_of_range() {
        let map = SizeMap::for_model(Model::Default);
        let _ = map.class_to_size(map.num_classes());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn class_to_pages_panics_out_of_range() {
        let map = SizeMap::for_model(Model::SmallButSlow);
        let _ = map.class_to_pages(200);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn num_objects_to_move_panics_out_of_range() {
        let map = SizeMap::for_model(Model::SmallButSlow);
        let _ = map.num_objects_to_move(SMALL_BUT_SLOW_CONFIG.num_classes);
    }

    #[test]
    #[should_panic(expected = "exceeds the largest size class")]
    fn size_class_panics_above_max() {
        let map = SizeMap::for_model(Model::SmallButSlow);
        let _ = map.size_class(SMALL_BUT_SLOW_CONFIG.max_size + 1);
    }

    #[test]
    fn build_matches_compiled_path() {
        for model in Model::ALL {
            let built =
                SizeMap::build(model.config(), tables::default_size_classes(model)).unwrap();
            assert_eq!(built, SizeMap::for_model(model), "{model}");
        }
    }

    #[test]
    fn rejected_specification_leaves_tables_untouched() {
        let mut map = SizeMap::for_model(Model::Default);
        let before = map.clone();

        let mut bad = map.size_classes();
        bad[10].size = bad[9].size;
        assert!(map.set_size_classes(&bad).is_err());
        assert_eq!(map, before);

        assert!(map.set_size_classes(&bad[..10]).is_err());
        assert_eq!(map, before);
    }

    #[test]
    fn set_size_classes_switches_tables() {
        let mut map = SizeMap::for_model(Model::Default);
        map.set_size_classes(tables::experimental_size_classes(Model::Default))
            .unwrap();
        assert_eq!(map, SizeMap::experimental_for_model(Model::Default));
        // The experimental table starts at 16 bytes.
        assert_eq!(map.class_to_size(map.size_class(1)), 16);
    }

    #[test]
    fn size_classes_round_trip() {
        let map = SizeMap::for_model(Model::LargePages);
        assert_eq!(
            map.size_classes(),
            tables::default_size_classes(Model::LargePages).to_vec()
        );
    }

    #[test]
    fn debug_is_compact() {
        let text = format!("{:?}", SizeMap::for_model(Model::Default));
        assert!(text.contains("num_classes: 86"));
        assert!(text.contains("initialized: true"));
    }
}
