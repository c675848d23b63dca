//! # frankenmalloc-sizemap
//!
//! Size-class mapping for the frankenmalloc allocator: translates a requested
//! size (and optional alignment) into one of a small fixed set of size
//! classes, and exposes per-class metadata (canonical size, pages per span,
//! batch transfer size) to the thread, CPU and central caches.
//!
//! Lookups are pure reads of tables built once at start-up. Sizes above the
//! model's maximum return `None` and belong on the large-object path.
//!
//! ```
//! use frankenmalloc_sizemap::{Model, SizeMap};
//!
//! let map = SizeMap::for_model(Model::Default);
//! let cl = map.get_size_class(1000).unwrap();
//! assert_eq!(map.class_to_size(cl), 1024);
//! assert_eq!(map.get_size_class(1 << 20), None);
//! ```

#![deny(unsafe_code)]

pub mod class_index;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod init;
pub mod pageheap_lock;
pub mod size_class_info;
pub mod size_map;
pub mod tables;
pub mod validate;

pub use config::{ACTIVE_CONFIG, ACTIVE_MODEL, Model, ModelConfig, RuntimeSettings};
pub use error::SizeClassError;
pub use init::{ClassSource, InitReport, init_size_map, size_map, try_size_map};
pub use pageheap_lock::{PAGEHEAP_LOCK, pageheap_lock};
pub use size_class_info::{SizeClassInfo, format_size_classes, parse_size_classes};
pub use size_map::SizeMap;
pub use validate::validate_size_classes;
