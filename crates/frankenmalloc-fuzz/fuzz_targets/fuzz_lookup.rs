#![no_main]
use frankenmalloc_sizemap::{Model, SizeMap};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 10 {
        return;
    }
    let model = Model::ALL[usize::from(data[0]) % Model::ALL.len()];
    let align = 1usize << (data[1] % 24);
    let size = u64::from_le_bytes([
        data[2], data[3], data[4], data[5], data[6], data[7], data[8], data[9],
    ]) as usize;

    let map = SizeMap::for_model(model);
    match map.get_size_class_aligned(size, align) {
        Some(cl) => {
            assert!(size <= map.max_size());
            assert!(align < map.page_size());
            let class_size = map.class_to_size(cl);
            assert!(class_size >= size);
            assert_eq!(class_size % align, 0);
        }
        None => assert!(size > map.max_size() || align > 64),
    }
});
