//! Exhaustive invariant sweep over a built size map.
//!
//! Every size in `[0, max_size]` is looked up plainly and at every
//! power-of-two alignment below the page size. Each named check produces one
//! structured log entry.

use std::time::Instant;

use frankenmalloc_sizemap::config::{MAX_OBJECTS_TO_MOVE, MIN_OBJECTS_TO_MOVE};
use frankenmalloc_sizemap::validate::{
    MAX_TAIL_WASTE_DIVISOR, required_alignment, span_tail_waste,
};
use frankenmalloc_sizemap::{Model, SizeMap};
use serde::Serialize;

use crate::structured_log::{LogEmitter, LogEntry, LogLevel, Outcome};

/// Result of one named check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvariantCheck {
    pub name: &'static str,
    pub checked: u64,
    pub violations: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_violation: Option<String>,
}

impl InvariantCheck {
    fn new(name: &'static str) -> Self {
        Self {
            name,
            checked: 0,
            violations: 0,
            first_violation: None,
        }
    }

    fn record(&mut self, ok: bool, describe: impl FnOnce() -> String) {
        self.checked += 1;
        if !ok {
            self.violations += 1;
            if self.first_violation.is_none() {
                self.first_violation = Some(describe());
            }
        }
    }

    #[must_use]
    pub fn passed(&self) -> bool {
        self.violations == 0
    }
}

/// All checks run against one map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvariantReport {
    pub model: Model,
    pub source: String,
    pub checks: Vec<InvariantCheck>,
}

impl InvariantReport {
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.checks.iter().all(InvariantCheck::passed)
    }

    #[must_use]
    pub fn failed(&self) -> Vec<&'static str> {
        self.checks
            .iter()
            .filter(|c| !c.passed())
            .map(|c| c.name)
            .collect()
    }
}

fn check_class_table(map: &SizeMap) -> Vec<InvariantCheck> {
    let mut increasing = InvariantCheck::new("sizes_strictly_increasing");
    let mut aligned = InvariantCheck::new("sizes_aligned");
    let mut last = InvariantCheck::new("last_class_is_max_size");
    let mut spans = InvariantCheck::new("span_tail_waste_bounded");
    let mut batches = InvariantCheck::new("batch_size_in_range");

    increasing.record(map.class_to_size(0) == 0, || {
        format!("class 0 has size {}", map.class_to_size(0))
    });
    for cl in 1..map.num_classes() {
        let size = map.class_to_size(cl);
        let previous = map.class_to_size(cl - 1);
        increasing.record(size > previous, || {
            format!("class {cl}: {size} <= {previous}")
        });
        aligned.record(size % required_alignment(size) == 0, || {
            format!("class {cl}: {size} not {}-aligned", required_alignment(size))
        });

        let span = map.span_bytes(cl);
        let waste = match size {
            0 => span,
            _ => span_tail_waste(size, map.class_to_pages(cl), map.page_size()),
        };
        spans.record(size > 0 && span >= size && waste * MAX_TAIL_WASTE_DIVISOR <= span, || {
            format!("class {cl}: {size} bytes in a {span}-byte span wastes {waste}")
        });

        let batch = map.num_objects_to_move(cl);
        batches.record(
            (MIN_OBJECTS_TO_MOVE..=MAX_OBJECTS_TO_MOVE).contains(&batch),
            || format!("class {cl}: batch {batch}"),
        );
    }
    let top = map.class_to_size(map.num_classes() - 1);
    last.record(top == map.max_size(), || {
        format!("last class {top} != max size {}", map.max_size())
    });

    vec![increasing, aligned, last, spans, batches]
}

fn check_plain_lookups(map: &SizeMap) -> Vec<InvariantCheck> {
    let mut covers = InvariantCheck::new("lookup_never_under_allocates");
    let mut tight = InvariantCheck::new("lookup_picks_tightest_class");
    let mut agrees = InvariantCheck::new("size_class_matches_lookup");
    let mut large = InvariantCheck::new("oversized_requests_rejected");

    for size in 0..=map.max_size() {
        let Some(cl) = map.get_size_class(size) else {
            covers.record(false, || format!("size {size}: no class"));
            continue;
        };
        covers.record(cl >= 1 && map.class_to_size(cl) >= size, || {
            format!("size {size}: class {cl} holds {}", map.class_to_size(cl))
        });
        if size > 0 {
            tight.record(cl <= 1 || map.class_to_size(cl - 1) < size, || {
                format!("size {size}: class {} would fit", cl - 1)
            });
        }
        agrees.record(map.size_class(size) == cl, || {
            format!("size {size}: size_class {} != {cl}", map.size_class(size))
        });
    }

    for size in [map.max_size() + 1, map.max_size() * 2, usize::MAX] {
        large.record(map.get_size_class(size).is_none(), || {
            format!("size {size} classified")
        });
        large.record(map.get_size_class_aligned(size, 8).is_none(), || {
            format!("size {size} classified at align 8")
        });
    }

    vec![covers, tight, agrees, large]
}

fn check_aligned_lookups(map: &SizeMap) -> Vec<InvariantCheck> {
    let mut sound = InvariantCheck::new("aligned_lookup_sound");
    let mut complete = InvariantCheck::new("aligned_lookup_complete");
    let mut align_one = InvariantCheck::new("align_one_matches_plain");
    let mut page = InvariantCheck::new("page_alignment_refused");

    let num_classes = map.num_classes();
    // Smallest class at or above each class id whose size is a multiple of
    // the current alignment.
    let mut next_aligned = vec![None; num_classes + 1];

    let mut align = 1;
    while align < map.page_size() {
        for cl in (0..num_classes).rev() {
            next_aligned[cl] = if cl > 0 && map.class_to_size(cl) % align == 0 {
                Some(cl)
            } else {
                next_aligned[cl + 1]
            };
        }

        for size in 0..=map.max_size() {
            let plain = map.get_size_class(size);
            let got = map.get_size_class_aligned(size, align);
            if align == 1 {
                align_one.record(got == plain, || {
                    format!("size {size}: {got:?} != {plain:?}")
                });
            }
            if let Some(cl) = got {
                let cs = map.class_to_size(cl);
                sound.record(cs >= size && cs % align == 0, || {
                    format!("size {size} align {align}: class {cl} holds {cs}")
                });
            }
            let want = plain.and_then(|start| next_aligned[start.max(1)]);
            complete.record(got == want, || {
                format!("size {size} align {align}: got {got:?}, expected {want:?}")
            });
        }
        align <<= 1;
    }

    for align in [map.page_size(), map.page_size() << 1] {
        page.record(map.get_size_class_aligned(8, align).is_none(), || {
            format!("align {align} accepted")
        });
    }

    vec![sound, complete, align_one, page]
}

/// Runs every check against `map`, logging one entry per check to `emitter`.
pub fn check_invariants(
    map: &SizeMap,
    source: &str,
    emitter: &mut LogEmitter,
) -> std::io::Result<InvariantReport> {
    let model = map.config().model;
    let started = Instant::now();
    emitter.emit_entry(
        LogEntry::new("", LogLevel::Info, "invariant_sweep_start")
            .with_model(model.as_str())
            .with_source(source)
            .with_details(serde_json::json!({
                "num_classes": map.num_classes(),
                "max_size": map.max_size(),
                "page_size": map.page_size(),
            })),
    )?;

    let mut checks = Vec::new();
    let phases: [fn(&SizeMap) -> Vec<InvariantCheck>; 3] =
        [check_class_table, check_plain_lookups, check_aligned_lookups];
    for phase in phases {
        let phase_started = Instant::now();
        let results = phase(map);
        let elapsed = u64::try_from(phase_started.elapsed().as_millis()).unwrap_or(u64::MAX);
        for check in &results {
            let (level, outcome) = if check.passed() {
                (LogLevel::Info, Outcome::Pass)
            } else {
                (LogLevel::Error, Outcome::Fail)
            };
            let mut details = serde_json::json!({
                "checked": check.checked,
                "violations": check.violations,
            });
            if let Some(first) = &check.first_violation {
                details["first_violation"] = serde_json::Value::String(first.clone());
            }
            emitter.emit_entry(
                LogEntry::new("", level, "invariant_check")
                    .with_model(model.as_str())
                    .with_source(source)
                    .with_check(check.name)
                    .with_outcome(outcome)
                    .with_duration_ms(elapsed)
                    .with_details(details),
            )?;
        }
        checks.extend(results);
    }

    let report = InvariantReport {
        model,
        source: source.to_string(),
        checks,
    };
    let outcome = if report.all_passed() {
        Outcome::Pass
    } else {
        Outcome::Fail
    };
    emitter.emit_entry(
        LogEntry::new("", LogLevel::Info, "invariant_sweep_end")
            .with_model(model.as_str())
            .with_source(source)
            .with_check("all")
            .with_outcome(outcome)
            .with_duration_ms(u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX))
            .with_details(serde_json::json!({ "failed": report.failed() })),
    )?;
    emitter.flush()?;
    Ok(report)
}
