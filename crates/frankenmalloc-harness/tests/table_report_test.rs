use frankenmalloc_harness::table_report::{
    TableReport, classify, load_classes_json, validate_classes, validate_override,
};
use frankenmalloc_harness::{HarnessError, check_invariants, structured_log::LogEmitter};
use frankenmalloc_sizemap::{Model, SizeMap};

fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("frankenmalloc-{}-{name}", std::process::id()))
}

#[test]
fn dump_json_has_expected_shape() {
    for model in Model::ALL {
        let report = TableReport::for_model(model, false);
        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(value["model"], model.as_str());
        assert_eq!(value["source"], "default");
        assert_eq!(value["num_classes"], model.config().num_classes);
        assert_eq!(
            value["classes"].as_array().map(Vec::len),
            Some(model.config().num_classes - 1)
        );
        let first = &value["classes"][0];
        for key in ["class", "size", "pages", "num_to_move", "objects_per_span", "tail_waste_pct"] {
            assert!(first.get(key).is_some(), "{model}: missing {key}");
        }
    }
}

#[test]
fn production_and_experimental_tables_differ() {
    for model in Model::ALL {
        let production = TableReport::for_model(model, false);
        let experimental = TableReport::for_model(model, true);
        assert_eq!(experimental.source, "experimental");
        assert_ne!(production.fingerprint, experimental.fingerprint, "{model}");
    }
}

#[test]
fn json_class_file_is_accepted() {
    let path = temp_path("classes.json");
    let classes = SizeMap::for_model(Model::LargePages).size_classes();
    std::fs::write(&path, serde_json::to_string(&classes).unwrap()).unwrap();

    let loaded = load_classes_json(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(loaded, classes);

    let verdict = validate_classes(Model::LargePages, &loaded);
    assert!(verdict.accepted, "{:?}", verdict.error);
    // The same table is the wrong shape for another model.
    assert!(!validate_classes(Model::Default, &loaded).accepted);
}

#[test]
fn missing_class_file_is_an_io_error() {
    let err = load_classes_json(&temp_path("does-not-exist.json")).unwrap_err();
    assert!(matches!(err, HarnessError::Io(_)));
}

#[test]
fn override_with_trailing_separator_is_rejected() {
    let spec = TableReport::for_model(Model::SmallButSlow, false).spec;
    assert!(validate_override(Model::SmallButSlow, &spec).accepted);
    let verdict = validate_override(Model::SmallButSlow, &format!("{spec};"));
    assert!(!verdict.accepted);
}

#[test]
fn classify_aligned_request() {
    let map = SizeMap::for_model(Model::Default);
    let report = classify(&map, 100, 64).unwrap();
    let size = report.class_size.unwrap();
    assert_eq!(size % 64, 0);
    assert!(size >= 100);
    assert_eq!(classify(&map, 100, map.page_size()).unwrap().class, None);
}

#[test]
fn default_model_sweep_passes() {
    let map = SizeMap::for_model(Model::Default);
    let report = check_invariants(&map, "default", &mut LogEmitter::sink("it")).unwrap();
    assert!(report.all_passed(), "{:?}", report.failed());
}
