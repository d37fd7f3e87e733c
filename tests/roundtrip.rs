mod common;

use common::*;
use indexbmp::*;

#[test]
fn decode_then_dump_is_identity() {
    let pixels = padded_rows(5, 3, 4, 7);
    let file = synth_bmp(5, 4, 8, &pixels);

    let bmp = IndexedBmp::decode(&file).unwrap();
    assert_eq!(bmp.dump(true), file);
    assert_eq!(bmp.dump(false), pixels);
    assert_eq!(bmp.header_bytes(), &file[..54]);
}

#[test]
fn descriptor_fields() {
    let pixels = padded_rows(4, 4, 3, 1);
    let mut file = synth_bmp(7, 3, 4, &pixels);
    patch_u32(&mut file, 38, 100);
    patch_u32(&mut file, 42, 200);
    patch_u32(&mut file, 50, 9);

    let bmp = IndexedBmp::decode(&file).unwrap();
    let d = bmp.descriptor();
    assert_eq!(d.width, 7);
    assert_eq!(d.height, 3);
    assert_eq!(d.bits_per_pixel, BitDepth::Four);
    assert_eq!(d.color_planes, 1);
    assert_eq!(d.compression, 0);
    assert_eq!(d.raw_bitmap_size, pixels.len() as u32);
    assert_eq!(d.print_width, 100);
    assert_eq!(d.print_height, 200);
    assert_eq!(d.colors_in_palette, 0);
    assert_eq!(d.important_colors, 9);
    assert_eq!(d.pixel_data_offset, 54);
    assert_eq!(d.file_size, file.len() as u32);

    // 7 pixels at 4 bpp = 4 bytes, padded to 8.
    assert_eq!(bmp.geometry().unpadded_row_bytes(), 4);
    assert_eq!(bmp.geometry().padding_bytes(), 4);
}

#[test]
fn gap_before_pixels_stays_in_header() {
    let pixels = padded_rows(8, 0, 2, 3);
    let mut file = synth_bmp(8, 2, 8, &[]);
    file.extend_from_slice(&[0xAA; 10]);
    file.extend_from_slice(&pixels);
    patch_u32(&mut file, 10, 64);

    let bmp = IndexedBmp::decode(&file).unwrap();
    assert_eq!(bmp.header_bytes().len(), 64);
    assert_eq!(bmp.pixels(), &pixels[..]);
    assert_eq!(bmp.dump(true), file);
}

fn expect_unsupported(file: &[u8], expected: HeaderField, expected_value: u32) {
    match IndexedBmp::decode(file) {
        Err(BmpError::UnsupportedFormat { field, value }) => {
            assert_eq!(field, expected);
            assert_eq!(value, expected_value);
        }
        other => panic!("expected UnsupportedFormat({expected:?}), got {other:?}"),
    }
}

#[test]
fn rejects_each_unsupported_field() {
    let good = synth_bmp(8, 1, 8, &[0; 8]);

    let mut f = good.clone();
    f[0..2].copy_from_slice(b"BA");
    expect_unsupported(&f, HeaderField::Signature, u32::from(u16::from_le_bytes(*b"BA")));

    let mut f = good.clone();
    patch_u32(&mut f, 14, 108);
    expect_unsupported(&f, HeaderField::DibHeaderSize, 108);

    let mut f = good.clone();
    patch_u32(&mut f, 46, 16);
    expect_unsupported(&f, HeaderField::ColorsInPalette, 16);

    let mut f = good.clone();
    patch_u32(&mut f, 30, 1);
    expect_unsupported(&f, HeaderField::Compression, 1);

    let mut f = good.clone();
    patch_u16(&mut f, 26, 2);
    expect_unsupported(&f, HeaderField::ColorPlanes, 2);

    for bpp in [1u16, 2, 16, 24, 32] {
        let mut f = good.clone();
        patch_u16(&mut f, 28, bpp);
        expect_unsupported(&f, HeaderField::BitsPerPixel, u32::from(bpp));
    }
}

#[test]
fn checks_fields_in_header_order() {
    // Both palette and compression are bad; the palette check runs first.
    let mut f = synth_bmp(8, 1, 8, &[0; 8]);
    patch_u32(&mut f, 46, 4);
    patch_u32(&mut f, 30, 2);
    expect_unsupported(&f, HeaderField::ColorsInPalette, 4);
}

#[test]
fn truncated_header() {
    let file = synth_bmp(8, 1, 8, &[]);
    assert!(matches!(
        IndexedBmp::decode(&file[..40]),
        Err(BmpError::UnexpectedEof)
    ));
    assert!(matches!(IndexedBmp::decode(&[]), Err(BmpError::UnexpectedEof)));
}

#[test]
fn pixel_offset_past_end() {
    let mut file = synth_bmp(8, 1, 8, &[0; 8]);
    patch_u32(&mut file, 10, 1000);
    assert!(matches!(
        IndexedBmp::decode(&file),
        Err(BmpError::UnexpectedEof)
    ));
}

#[test]
fn empty_pixel_region_is_allowed() {
    let file = synth_bmp(4, 0, 8, &[]);
    let bmp = IndexedBmp::decode(&file).unwrap();
    assert!(bmp.pixels().is_empty());
    assert!(bmp.vertical_flip(Unstoppable).unwrap().pixels().is_empty());
    assert_eq!(bmp.dump(true), file);
}

#[test]
fn limits_reject_large() {
    let file = synth_bmp(8, 2, 8, &[0; 16]);

    let limits = Limits {
        max_pixels: Some(8),
        ..Default::default()
    };
    let result = DecodeRequest::new(&file)
        .with_limits(&limits)
        .decode(Unstoppable);
    match result {
        Err(BmpError::LimitExceeded(_)) => {}
        other => panic!("expected LimitExceeded, got {other:?}"),
    }

    let limits = Limits {
        max_memory_bytes: Some(15),
        ..Default::default()
    };
    assert!(matches!(
        DecodeRequest::new(&file).with_limits(&limits).decode(Unstoppable),
        Err(BmpError::LimitExceeded(_))
    ));

    let limits = Limits {
        max_width: Some(8),
        max_height: Some(2),
        max_pixels: Some(16),
        max_memory_bytes: Some(16),
    };
    assert!(
        DecodeRequest::new(&file)
            .with_limits(&limits)
            .decode(Unstoppable)
            .is_ok()
    );
}

#[test]
fn configured_row_alignment() {
    let file = synth_bmp(5, 2, 8, &padded_rows(5, 3, 2, 2));
    let bmp = DecodeRequest::new(&file)
        .with_row_alignment(4)
        .decode(Unstoppable)
        .unwrap();
    assert_eq!(bmp.geometry().stride(), 8);
    assert_eq!(bmp.geometry().padding_bytes(), 3);

    let bmp = IndexedBmp::decode(&file).unwrap();
    assert_eq!(bmp.geometry().stride(), DEFAULT_ROW_ALIGNMENT);
}

#[test]
fn text_dump() {
    let file = synth_bmp(2, 1, 8, &[1, 200, 0, 0, 0, 0, 0, 0]);
    let bmp = IndexedBmp::decode(&file).unwrap();

    assert_eq!(bmp.dump_text(false, " "), "1 200 0 0 0 0 0 0 ");
    let with_header = bmp.dump_text(true, ",");
    assert!(with_header.starts_with("66,77,"));
    assert_eq!(with_header.split(',').count(), file.len() + 1);
}

#[test]
fn display_lists_fields() {
    let file = synth_bmp(2, 1, 4, &[0; 8]);
    let bmp = IndexedBmp::decode(&file).unwrap();
    let text = bmp.to_string();
    assert!(text.contains("width: 2"));
    assert!(text.contains("bits per pixel: 4"));
    assert!(text.ends_with("pixel data: 8 bytes"));
}

#[cfg(feature = "std")]
#[test]
fn file_roundtrip() {
    let dir = std::env::temp_dir().join(format!("indexbmp-test-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let input = dir.join("in.bmp");
    let output = dir.join("out.bmp");
    let text = dir.join("out.txt");

    let file = synth_bmp(3, 2, 8, &padded_rows(3, 5, 2, 11));
    std::fs::write(&input, &file).unwrap();

    let bmp = IndexedBmp::open(&input).unwrap();
    let flipped = bmp.vertical_flip(Unstoppable).unwrap();
    flipped.write(&output, true).unwrap();
    flipped.write_text(&text, false, ";").unwrap();

    let written = std::fs::read(&output).unwrap();
    assert_eq!(&written[..54], &file[..54]);
    assert_eq!(&written[54..], flipped.pixels());
    assert_eq!(std::fs::read_to_string(&text).unwrap(), flipped.dump_text(false, ";"));

    assert!(matches!(
        IndexedBmp::open(dir.join("missing.bmp")),
        Err(BmpError::Io(_))
    ));

    std::fs::remove_dir_all(&dir).unwrap();
}

#[cfg(feature = "std")]
#[test]
fn four_byte_aligned_file() {
    let dir = std::env::temp_dir().join(format!("indexbmp-align-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("aligned4.bmp");
    // 9 pixels per row: stride 12 at 4-byte alignment, 16 at the default.
    let file = synth_bmp(9, 2, 8, &padded_rows(9, 3, 2, 32));
    std::fs::write(&path, &file).unwrap();

    let opened = IndexedBmp::open(&path).unwrap();
    assert_eq!(opened.geometry().stride(), 16);
    assert_eq!(opened.geometry().padding_bytes(), 7);

    let data = std::fs::read(&path).unwrap();
    let bmp = DecodeRequest::new(&data)
        .with_row_alignment(4)
        .decode(Unstoppable)
        .unwrap();
    assert_eq!(bmp.geometry().stride(), 12);
    assert_eq!(bmp.rows().unwrap().count(), 2);
    let flipped = bmp.horizontal_flip(Unstoppable).unwrap();
    assert!(flipped.rows().unwrap().all(|row| row[9..] == [0, 0, 0]));
    assert_eq!(flipped.dump(true).len(), file.len());

    std::fs::remove_dir_all(&dir).unwrap();
}
