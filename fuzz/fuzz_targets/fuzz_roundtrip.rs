#![no_main]
use indexbmp::*;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(bmp) = IndexedBmp::decode(data) else {
        return;
    };

    // Untransformed output must reproduce the input byte for byte
    assert_eq!(bmp.dump(true), data, "decode/dump mismatch");

    // Flips only round-trip when the buffer splits into whole rows
    let stride = bmp.geometry().stride();
    if stride == 0 || bmp.pixels().len() % stride != 0 {
        return;
    }
    let twice = bmp
        .vertical_flip(enough::Unstoppable)
        .and_then(|b| b.vertical_flip(enough::Unstoppable))
        .expect("whole rows flip cleanly");
    assert_eq!(twice.pixels(), bmp.pixels(), "double vertical flip mismatch");

    let twice = bmp
        .horizontal_flip(enough::Unstoppable)
        .and_then(|b| b.horizontal_flip(enough::Unstoppable))
        .expect("whole rows flip cleanly");
    assert_eq!(twice.pixels(), bmp.pixels(), "double horizontal flip mismatch");
});
