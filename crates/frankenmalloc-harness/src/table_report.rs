//! Machine-readable reports over size-class tables: the full table dump,
//! single-size classification and acceptance of candidate specifications.

use std::path::Path;

use frankenmalloc_sizemap::validate::span_tail_waste;
use frankenmalloc_sizemap::{
    Model, SizeClassInfo, SizeMap, format_size_classes, parse_size_classes,
    validate_size_classes,
};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::HarnessError;

/// SHA-256 (lowercase hex) of the override-string form of `classes`.
///
/// Two tables share a fingerprint exactly when every class after the
/// sentinel agrees on size, pages and batch size.
#[must_use]
pub fn fingerprint(classes: &[SizeClassInfo]) -> String {
    format!("{:x}", Sha256::digest(format_size_classes(classes).as_bytes()))
}

/// One row of a [`TableReport`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassRow {
    pub class: usize,
    pub size: usize,
    pub pages: usize,
    pub num_to_move: usize,
    pub span_bytes: usize,
    pub objects_per_span: usize,
    pub tail_waste_bytes: usize,
    /// Tail waste as a percentage of the span.
    pub tail_waste_pct: f64,
}

/// Full dump of a built size map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableReport {
    pub model: Model,
    pub source: String,
    pub page_size: usize,
    pub max_size: usize,
    pub num_classes: usize,
    pub class_array_size: usize,
    pub fingerprint: String,
    /// Override string reproducing this table.
    pub spec: String,
    pub classes: Vec<ClassRow>,
}

impl TableReport {
    /// Builds the report for `map`; `source` names where its table came from.
    #[must_use]
    pub fn from_map(map: &SizeMap, source: &str) -> Self {
        let classes = map.size_classes();
        let rows = (1..map.num_classes())
            .map(|cl| {
                let size = map.class_to_size(cl);
                let pages = map.class_to_pages(cl);
                let span_bytes = map.span_bytes(cl);
                // Uninitialized maps carry zero-size classes with empty spans.
                let tail_waste_bytes = match size {
                    0 => span_bytes,
                    _ => span_tail_waste(size, pages, map.page_size()),
                };
                ClassRow {
                    class: cl,
                    size,
                    pages,
                    num_to_move: map.num_objects_to_move(cl),
                    span_bytes,
                    objects_per_span: map.objects_per_span(cl),
                    tail_waste_bytes,
                    tail_waste_pct: match span_bytes {
                        0 => 0.0,
                        _ => tail_waste_bytes as f64 * 100.0 / span_bytes as f64,
                    },
                }
            })
            .collect();

        Self {
            model: map.config().model,
            source: source.to_string(),
            page_size: map.page_size(),
            max_size: map.max_size(),
            num_classes: map.num_classes(),
            class_array_size: map.config().class_array_size(),
            fingerprint: fingerprint(&classes),
            spec: format_size_classes(&classes),
            classes: rows,
        }
    }

    /// Report for a model's compiled-in production or experimental table.
    #[must_use]
    pub fn for_model(model: Model, experimental: bool) -> Self {
        if experimental {
            Self::from_map(&SizeMap::experimental_for_model(model), "experimental")
        } else {
            Self::from_map(&SizeMap::for_model(model), "default")
        }
    }

    /// Largest tail waste across all classes, in percent.
    #[must_use]
    pub fn worst_tail_waste_pct(&self) -> f64 {
        self.classes
            .iter()
            .map(|row| row.tail_waste_pct)
            .fold(0.0, f64::max)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Where a request lands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifyReport {
    pub model: Model,
    pub size: usize,
    pub align: usize,
    /// `None` when the request belongs on the large-object path.
    pub class: Option<usize>,
    pub class_size: Option<usize>,
    pub pages: Option<usize>,
    pub num_to_move: Option<usize>,
    /// Bytes rounded up past the request.
    pub internal_waste: Option<usize>,
}

/// Classifies `size` at `align` against `map`.
pub fn classify(map: &SizeMap, size: usize, align: usize) -> Result<ClassifyReport, HarnessError> {
    if !align.is_power_of_two() {
        return Err(HarnessError::InvalidAlignment(align));
    }
    let class = map.get_size_class_aligned(size, align);
    let class_size = class.map(|cl| map.class_to_size(cl));
    Ok(ClassifyReport {
        model: map.config().model,
        size,
        align,
        class,
        class_size,
        pages: class.map(|cl| map.class_to_pages(cl)),
        num_to_move: class.map(|cl| map.num_objects_to_move(cl)),
        internal_waste: class_size.map(|cs| cs - size),
    })
}

/// Verdict on a candidate specification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidateReport {
    pub model: Model,
    pub accepted: bool,
    pub num_classes: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ValidateReport {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Checks `classes` (sentinel included) against `model`.
#[must_use]
pub fn validate_classes(model: Model, classes: &[SizeClassInfo]) -> ValidateReport {
    let verdict = validate_size_classes(model.config(), classes);
    ValidateReport {
        model,
        accepted: verdict.is_ok(),
        num_classes: classes.len(),
        fingerprint: verdict.is_ok().then(|| fingerprint(classes)),
        error: verdict.err().map(|e| e.to_string()),
    }
}

/// Parses an override string and checks it against `model`.
///
/// Syntax errors are reported the same way as structural ones.
#[must_use]
pub fn validate_override(model: Model, spec: &str) -> ValidateReport {
    match parse_size_classes(spec, model.config().max_size) {
        Ok(classes) => validate_classes(model, &classes),
        Err(err) => ValidateReport {
            model,
            accepted: false,
            num_classes: 0,
            fingerprint: None,
            error: Some(err.to_string()),
        },
    }
}

/// Reads a JSON array of `{size, pages, num_to_move}` objects, class 0 first.
pub fn load_classes_json(path: &Path) -> Result<Vec<SizeClassInfo>, HarnessError> {
    let body = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&body)?)
}
