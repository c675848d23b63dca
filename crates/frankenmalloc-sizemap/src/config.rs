//! Build-time page model and runtime environment settings.
//!
//! Four models fix the page size, the number of size classes, the largest
//! size served by the class caches, and the cache-sizing thresholds:
//! - `default` (8 KiB pages): good performance with modest fragmentation.
//! - `large-pages` (32 KiB pages): coarser bookkeeping, smaller page maps.
//! - `pages-256k` (256 KiB pages): the coarsest accounting granularity.
//! - `small-but-slow` (4 KiB pages): minimal footprint at the cost of speed.
//!
//! Exactly one model is active per build, chosen by cargo feature in
//! [`ACTIVE_MODEL`]. Nothing else in the crate branches on the feature; it
//! reads a [`ModelConfig`] instead.
//!
//! Runtime knobs come from the environment and are read once by
//! [`RuntimeSettings::from_env`]:
//! - `FRANKENMALLOC_SIZE_CLASSES`: override specification
//!   (`size,pages,num_to_move;...`).
//! - `FRANKENMALLOC_EXPERIMENTAL_SIZE_CLASSES`: `1|true|on|yes` selects the
//!   experimental compiled-in table.
//! - `FRANKENMALLOC_LOG`: `stderr`/`1` or a file path for init diagnostics.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::class_index::{class_array_size, class_index_maybe};
use crate::diagnostics::LogTarget;

/// Environment variable carrying an override specification.
pub const SIZE_CLASSES_ENV: &str = "FRANKENMALLOC_SIZE_CLASSES";
/// Environment variable enabling the experimental compiled-in table.
pub const EXPERIMENTAL_ENV: &str = "FRANKENMALLOC_EXPERIMENTAL_SIZE_CLASSES";
/// Environment variable naming the init diagnostics target.
pub const LOG_ENV: &str = "FRANKENMALLOC_LOG";

/// Minimum number of objects moved between a thread cache and the central
/// cache in one batch.
pub const MIN_OBJECTS_TO_MOVE: usize = 2;
/// Maximum number of objects moved in one batch.
pub const MAX_OBJECTS_TO_MOVE: usize = 128;

/// Base alignment of every size class.
pub const ALIGNMENT: usize = 8;
/// log2([`ALIGNMENT`]).
pub const ALIGNMENT_SHIFT: usize = ALIGNMENT.trailing_zeros() as usize;

/// All size classes up to this size use single-page spans.
pub const MULTI_PAGE_SIZE: usize = 512;
/// Minimum alignment of every size class above [`MULTI_PAGE_SIZE`].
pub const MULTI_PAGE_ALIGNMENT: usize = 64;
/// log2([`MULTI_PAGE_ALIGNMENT`]).
pub const MULTI_PAGE_ALIGNMENT_SHIFT: usize = MULTI_PAGE_ALIGNMENT.trailing_zeros() as usize;

/// Sizes up to this bound are indexed at 8-byte granularity, larger sizes at
/// 128-byte granularity.
pub const MAX_SMALL_SIZE: usize = 1024;

/// Number of times a deallocation may push a free list over its max length
/// before the max length shrinks.
pub const MAX_OVERAGES: usize = 3;

/// Longest a per-thread free list may grow before objects are moved back to
/// the central free list.
pub const MAX_DYNAMIC_FREE_LIST_LENGTH: usize = 8192;

const HUGE_PAGE_SIZE: usize = 2 << 20;

/// The four build-time page models.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Model {
    /// 8 KiB pages.
    #[default]
    Default,
    /// 32 KiB pages.
    LargePages,
    /// 256 KiB pages.
    #[serde(rename = "pages-256k")]
    Pages256K,
    /// 4 KiB pages, smallest footprint.
    SmallButSlow,
}

impl Model {
    /// Every model, in page-size order.
    pub const ALL: [Model; 4] = [
        Model::SmallButSlow,
        Model::Default,
        Model::LargePages,
        Model::Pages256K,
    ];

    /// Parse from string (case-insensitive). Unknown names yield `None`.
    #[must_use]
    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "default" | "8k" | "normal" => Some(Self::Default),
            "large-pages" | "large_pages" | "large" | "32k" => Some(Self::LargePages),
            "pages-256k" | "pages_256k" | "256k" => Some(Self::Pages256K),
            "small-but-slow" | "small_but_slow" | "small" | "4k" => Some(Self::SmallButSlow),
            _ => None,
        }
    }

    /// Stable lowercase name, matching the serde representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::LargePages => "large-pages",
            Self::Pages256K => "pages-256k",
            Self::SmallButSlow => "small-but-slow",
        }
    }

    /// Parameter record for this model.
    #[must_use]
    pub const fn config(self) -> &'static ModelConfig {
        match self {
            Self::Default => &DEFAULT_CONFIG,
            Self::LargePages => &LARGE_PAGES_CONFIG,
            Self::Pages256K => &PAGES_256K_CONFIG,
            Self::SmallButSlow => &SMALL_BUT_SLOW_CONFIG,
        }
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Constants fixed by a page model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModelConfig {
    pub model: Model,
    /// Shift used to compute the page size.
    pub page_shift: usize,
    /// Number of size classes, including the sentinel class 0.
    pub num_classes: usize,
    /// Largest size served by the class caches.
    pub max_size: usize,
    /// Minimum size in bytes of each thread cache.
    pub min_thread_cache_size: usize,
    /// Maximum size in bytes of each thread cache.
    pub max_thread_cache_size: usize,
    /// Maximum size in bytes of each per-CPU cache.
    pub max_cpu_cache_size: usize,
    /// Combined limit of all thread caches in the process.
    pub default_overall_thread_cache_size: usize,
    /// Bytes one thread cache steals from another when forced to scavenge.
    pub steal_amount: usize,
    pub default_profile_sampling_rate: usize,
    /// Lower bound on `max_size / page_size` (12.5% worst-case waste at 8).
    pub min_pages: usize,
    /// Smallest request made to the system for backing memory.
    pub min_system_alloc: usize,
    /// Granularity of address-space reservations.
    pub min_mmap_alloc: usize,
}

impl ModelConfig {
    #[must_use]
    pub const fn page_size(&self) -> usize {
        1 << self.page_shift
    }

    /// Number of entries in the class-index table for this model.
    #[must_use]
    pub const fn class_array_size(&self) -> usize {
        class_array_size(self.max_size)
    }

    /// Compile-time invariants every model must satisfy.
    const fn check(&self) -> bool {
        let ratio_ok = self.max_size / self.page_size() >= self.min_pages || self.page_shift >= 18;
        let mmap_ok = self.min_mmap_alloc % self.min_system_alloc == 0;
        let first_index_ok = matches!(class_index_maybe(0, self.max_size), Some(0));
        let last_index_ok = match class_index_maybe(self.max_size, self.max_size) {
            Some(idx) => idx < self.class_array_size(),
            None => false,
        };
        // Class ids are stored in one byte.
        let ids_fit = self.num_classes <= u8::MAX as usize + 1;
        ratio_ok
            && mmap_ok
            && first_index_ok
            && last_index_ok
            && ids_fit
            && self.max_size > MAX_SMALL_SIZE
            && ALIGNMENT <= 16
    }
}

pub const DEFAULT_CONFIG: ModelConfig = ModelConfig {
    model: Model::Default,
    page_shift: 13,
    num_classes: 86,
    max_size: 256 * 1024,
    min_thread_cache_size: 256 * 1024 * 2,
    max_thread_cache_size: 4 << 20,
    max_cpu_cache_size: 3 * 1024 * 1024,
    default_overall_thread_cache_size: 8 * (4 << 20),
    steal_amount: 1 << 16,
    default_profile_sampling_rate: 1 << 21,
    min_pages: 8,
    min_system_alloc: HUGE_PAGE_SIZE,
    min_mmap_alloc: 1 << 30,
};

pub const LARGE_PAGES_CONFIG: ModelConfig = ModelConfig {
    model: Model::LargePages,
    page_shift: 15,
    num_classes: 78,
    ..DEFAULT_CONFIG
};

pub const PAGES_256K_CONFIG: ModelConfig = ModelConfig {
    model: Model::Pages256K,
    page_shift: 18,
    num_classes: 89,
    ..DEFAULT_CONFIG
};

pub const SMALL_BUT_SLOW_CONFIG: ModelConfig = ModelConfig {
    model: Model::SmallButSlow,
    page_shift: 12,
    num_classes: 46,
    max_size: 8 << 10,
    min_thread_cache_size: 4 * 1024,
    max_thread_cache_size: 64 * 1024,
    max_cpu_cache_size: 20 * 1024,
    default_overall_thread_cache_size: 64 * 1024,
    steal_amount: 4 * 1024,
    default_profile_sampling_rate: 1 << 19,
    min_pages: 2,
    min_system_alloc: 2 << 20,
    min_mmap_alloc: 32 << 20,
};

const _: () = assert!(DEFAULT_CONFIG.check(), "default model invariants");
const _: () = assert!(LARGE_PAGES_CONFIG.check(), "large-pages model invariants");
const _: () = assert!(PAGES_256K_CONFIG.check(), "pages-256k model invariants");
const _: () = assert!(SMALL_BUT_SLOW_CONFIG.check(), "small-but-slow model invariants");

#[cfg(any(
    all(feature = "large-pages", feature = "pages-256k"),
    all(feature = "large-pages", feature = "small-but-slow"),
    all(feature = "pages-256k", feature = "small-but-slow"),
))]
compile_error!("at most one of `large-pages`, `pages-256k`, `small-but-slow` may be enabled");

/// The model compiled into this build.
#[cfg(feature = "small-but-slow")]
pub const ACTIVE_MODEL: Model = Model::SmallButSlow;
#[cfg(all(feature = "pages-256k", not(feature = "small-but-slow")))]
pub const ACTIVE_MODEL: Model = Model::Pages256K;
#[cfg(all(
    feature = "large-pages",
    not(feature = "pages-256k"),
    not(feature = "small-but-slow")
))]
pub const ACTIVE_MODEL: Model = Model::LargePages;
#[cfg(not(any(
    feature = "large-pages",
    feature = "pages-256k",
    feature = "small-but-slow"
)))]
pub const ACTIVE_MODEL: Model = Model::Default;

/// Parameters of [`ACTIVE_MODEL`].
pub const ACTIVE_CONFIG: &ModelConfig = ACTIVE_MODEL.config();

/// Environment-derived knobs consumed by [`crate::init::init_size_map`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RuntimeSettings {
    /// Start from the experimental table instead of the default one.
    pub experimental: bool,
    /// Raw override specification, if any.
    pub size_classes: Option<String>,
    /// Where init diagnostics go; `None` keeps them silent.
    pub log_target: Option<LogTarget>,
}

impl RuntimeSettings {
    /// Read all knobs from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup (used by tests and the
    /// harness, which must not mutate the process environment).
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            experimental: lookup(EXPERIMENTAL_ENV).is_some_and(|v| parse_flag(&v)),
            size_classes: lookup(SIZE_CLASSES_ENV).filter(|v| !v.trim().is_empty()),
            log_target: lookup(LOG_ENV).and_then(|v| parse_log_target(&v)),
        }
    }
}

fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "on" | "yes"
    )
}

fn parse_log_target(raw: &str) -> Option<LogTarget> {
    let raw = raw.trim();
    match raw.to_ascii_lowercase().as_str() {
        "" | "0" | "off" | "false" | "none" => None,
        "1" | "stderr" | "on" | "true" => Some(LogTarget::Stderr),
        _ => Some(LogTarget::File(PathBuf::from(raw))),
    }
}
