//! One-time construction of the process-wide size map.
//!
//! Selection order: the experimental table if the switch is on, else the
//! production table; then an environment override replaces it if, and only
//! if, it parses and validates. A rejected override leaves the compiled-in
//! table active and is recorded in the [`InitReport`].

use std::sync::OnceLock;

use serde::Serialize;

use crate::config::{ACTIVE_MODEL, Model, RuntimeSettings};
use crate::diagnostics::{LogLevel, SizeMapLogRecord, emit_record, now_utc};
use crate::error::SizeClassError;
use crate::size_class_info::parse_size_classes;
use crate::size_map::SizeMap;

/// Which specification a size map was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassSource {
    Default,
    Experimental,
    Override,
}

impl ClassSource {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Experimental => "experimental",
            Self::Override => "override",
        }
    }
}

/// Outcome of [`init_size_map`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitReport {
    pub model: Model,
    pub source: ClassSource,
    /// Set when an override was supplied but rejected.
    pub override_rejected: Option<SizeClassError>,
}

impl InitReport {
    /// Structured record for the diagnostics channel.
    #[must_use]
    pub fn to_log_record(&self) -> SizeMapLogRecord {
        let (level, event, outcome) = match self.override_rejected {
            Some(_) => (LogLevel::Warn, "size_map_override_rejected", "fallback"),
            None => (LogLevel::Info, "size_map_init", "ok"),
        };
        SizeMapLogRecord {
            timestamp: now_utc(),
            trace_id: format!("sizemap::{event}::{}", std::process::id()),
            level,
            event,
            model: self.model.as_str(),
            source: self.source.as_str(),
            outcome,
            error: self.override_rejected.as_ref().map(ToString::to_string),
            details: format!(
                "num_classes={};max_size={};page_size={}",
                self.model.config().num_classes,
                self.model.config().max_size,
                self.model.config().page_size()
            ),
        }
    }
}

/// Builds the size map for `model` from `settings`.
///
/// Never fails: the worst case is the compiled-in table plus a report of the
/// rejected override.
#[must_use]
pub fn init_size_map(model: Model, settings: &RuntimeSettings) -> (SizeMap, InitReport) {
    let (mut map, base) = if settings.experimental {
        (SizeMap::experimental_for_model(model), ClassSource::Experimental)
    } else {
        (SizeMap::for_model(model), ClassSource::Default)
    };

    let mut report = InitReport {
        model,
        source: base,
        override_rejected: None,
    };

    if let Some(spec) = settings.size_classes.as_deref() {
        let applied = parse_size_classes(spec, model.config().max_size)
            .and_then(|classes| map.set_size_classes(&classes));
        match applied {
            Ok(()) => report.source = ClassSource::Override,
            Err(err) => report.override_rejected = Some(err),
        }
    }

    (map, report)
}

static SIZE_MAP: OnceLock<SizeMap> = OnceLock::new();

/// Process-wide size map for [`ACTIVE_MODEL`].
///
/// The first call reads the environment, builds the tables and emits the
/// init diagnostic if a log target is configured; later calls are a single
/// atomic load.
#[must_use]
pub fn size_map() -> &'static SizeMap {
    SIZE_MAP.get_or_init(|| {
        let settings = RuntimeSettings::from_env();
        let (map, report) = init_size_map(ACTIVE_MODEL, &settings);
        if let Some(target) = &settings.log_target {
            // Diagnostics are best effort; init must not fail on them.
            let _ = emit_record(&report.to_log_record(), target);
        }
        map
    })
}

/// The process-wide size map if it has been built already.
#[must_use]
pub fn try_size_map() -> Option<&'static SizeMap> {
    SIZE_MAP.get()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::size_class_info::format_size_classes;
    use crate::tables;

    fn settings(experimental: bool, size_classes: Option<&str>) -> RuntimeSettings {
        RuntimeSettings {
            experimental,
            size_classes: size_classes.map(str::to_string),
            log_target: None,
        }
    }

    #[test]
    fn default_without_settings() {
        let (map, report) = init_size_map(Model::Default, &RuntimeSettings::default());
        assert_eq!(report.source, ClassSource::Default);
        assert_eq!(report.override_rejected, None);
        assert_eq!(map, SizeMap::for_model(Model::Default));
    }

    #[test]
    fn experimental_switch() {
        let (map, report) = init_size_map(Model::LargePages, &settings(true, None));
        assert_eq!(report.source, ClassSource::Experimental);
        assert_eq!(map, SizeMap::experimental_for_model(Model::LargePages));
    }

    #[test]
    fn valid_override_wins() {
        let spec = format_size_classes(tables::experimental_size_classes(Model::Default));
        let (map, report) = init_size_map(Model::Default, &settings(false, Some(&spec)));
        assert_eq!(report.source, ClassSource::Override);
        assert_eq!(report.override_rejected, None);
        assert_eq!(map.size_classes(), tables::experimental_size_classes(Model::Default));
    }

    #[test]
    fn malformed_override_falls_back() {
        let (map, report) = init_size_map(Model::Default, &settings(false, Some("8,1,x")));
        assert_eq!(report.source, ClassSource::Default);
        assert!(matches!(
            report.override_rejected,
            Some(SizeClassError::InvalidCharacter { ch: 'x', .. })
        ));
        assert_eq!(map, SizeMap::for_model(Model::Default));
    }

    #[test]
    fn invalid_override_keeps_experimental_base() {
        let (map, report) =
            init_size_map(Model::Default, &settings(true, Some("8,1,32;16,1,32")));
        assert_eq!(report.source, ClassSource::Experimental);
        assert_eq!(
            report.override_rejected,
            Some(SizeClassError::WrongClassCount {
                expected: 86,
                found: 3
            })
        );
        assert_eq!(map, SizeMap::experimental_for_model(Model::Default));
    }

    #[test]
    fn log_record_reflects_report() {
        let (_, ok) = init_size_map(Model::SmallButSlow, &RuntimeSettings::default());
        let rec = ok.to_log_record();
        assert_eq!(rec.event, "size_map_init");
        assert_eq!(rec.level, LogLevel::Info);
        assert_eq!(rec.model, "small-but-slow");
        assert!(rec.details.contains("num_classes=46"));

        let (_, rejected) = init_size_map(Model::SmallButSlow, &settings(false, Some(";")));
        let rec = rejected.to_log_record();
        assert_eq!(rec.outcome, "fallback");
        assert_eq!(rec.level, LogLevel::Warn);
        assert!(rec.error.is_some());
    }

    #[test]
    fn global_map_is_built_once() {
        let first = size_map();
        assert!(first.is_initialized());
        assert_eq!(first.config().model, ACTIVE_MODEL);
        assert!(std::ptr::eq(first, size_map()));
        assert!(try_size_map().is_some_and(|m| std::ptr::eq(m, first)));
    }
}
