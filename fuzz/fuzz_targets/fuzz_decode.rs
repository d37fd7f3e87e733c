#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Decode and every transform must return Ok or Err, never panic
    let Ok(bmp) = indexbmp::IndexedBmp::decode(data) else {
        return;
    };
    let _ = bmp.vertical_flip(enough::Unstoppable);
    let _ = bmp.horizontal_flip(enough::Unstoppable);
    let _ = bmp.mirror(enough::Unstoppable);

    let table: Vec<u8> = (0..bmp.descriptor().bits_per_pixel.index_count())
        .rev()
        .map(|i| i as u8)
        .collect();
    let _ = bmp.remap(&table, enough::Unstoppable);
    let _ = bmp.dump_text(true, ",");
});
