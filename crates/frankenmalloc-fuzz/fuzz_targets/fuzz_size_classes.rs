#![no_main]
use frankenmalloc_sizemap::{Model, SizeMap, parse_size_classes};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((&selector, rest)) = data.split_first() else {
        return;
    };
    let Ok(spec) = std::str::from_utf8(rest) else {
        return;
    };
    let model = Model::ALL[usize::from(selector) % Model::ALL.len()];
    let config = model.config();

    let Ok(classes) = parse_size_classes(spec, config.max_size) else {
        return;
    };
    let mut map = SizeMap::for_model(model);
    let before = map.clone();
    match map.set_size_classes(&classes) {
        // Anything that validates must produce a map that never under-allocates.
        Ok(()) => {
            for size in (0..=config.max_size).step_by(61) {
                let cl = map.size_class(size);
                assert!(cl >= 1 && map.class_to_size(cl) >= size);
            }
        }
        Err(_) => assert_eq!(map, before),
    }
});
