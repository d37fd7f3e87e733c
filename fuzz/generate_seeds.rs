#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn header(width: u32, height: u32, bpp: u16, pixel_len: usize) -> Vec<u8> {
    let mut bmp = vec![0u8; 54];
    bmp[0] = b'B'; bmp[1] = b'M';
    bmp[2..6].copy_from_slice(&((54 + pixel_len) as u32).to_le_bytes()); // file size
    bmp[10..14].copy_from_slice(&54u32.to_le_bytes()); // data offset
    bmp[14..18].copy_from_slice(&40u32.to_le_bytes()); // DIB header size
    bmp[18..22].copy_from_slice(&width.to_le_bytes());
    bmp[22..26].copy_from_slice(&height.to_le_bytes());
    bmp[26..28].copy_from_slice(&1u16.to_le_bytes()); // planes
    bmp[28..30].copy_from_slice(&bpp.to_le_bytes());
    bmp[34..38].copy_from_slice(&(pixel_len as u32).to_le_bytes()); // raw size
    bmp
}

fn main() {
    use std::fs;
    for dir in ["fuzz/corpus/fuzz_decode", "fuzz/corpus/fuzz_roundtrip"] {
        fs::create_dir_all(dir).unwrap();

        // 2x2 8-bit, rows padded to 8 bytes
        let mut bmp = header(2, 2, 8, 16);
        bmp.extend_from_slice(&[1, 2, 0, 0, 0, 0, 0, 0, 3, 4, 0, 0, 0, 0, 0, 0]);
        fs::write(format!("{dir}/bmp8_2x2.bmp"), bmp).unwrap();

        // 3x2 4-bit (odd width: trailing nibble is filler)
        let mut bmp = header(3, 2, 4, 16);
        bmp.extend_from_slice(&[0x12, 0x30, 0, 0, 0, 0, 0, 0, 0xAB, 0xC0, 0, 0, 0, 0, 0, 0]);
        fs::write(format!("{dir}/bmp4_3x2.bmp"), bmp).unwrap();

        // Truncated final row
        let mut bmp = header(2, 2, 8, 11);
        bmp.extend_from_slice(&[1, 2, 0, 0, 0, 0, 0, 0, 3, 4, 0]);
        fs::write(format!("{dir}/bmp8_truncated.bmp"), bmp).unwrap();

        // Truncated/malformed seeds for edge coverage
        fs::write(format!("{dir}/empty.bin"), b"").unwrap();
        fs::write(format!("{dir}/bm_short.bin"), b"BM\x00\x00").unwrap();
        fs::write(format!("{dir}/bmp24.bin"), header(1, 1, 24, 0)).unwrap();
    }

    println!("Generated seed corpora in fuzz/corpus/");
}
