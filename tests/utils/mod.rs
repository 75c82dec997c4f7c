#![allow(dead_code)]

//! Minimal but well-formed image headers

pub const WIDTH: u32 = 298;
pub const HEIGHT: u32 = 221;

/// Content that is too short for every format
pub const SHORT: &[u8] = b"short\n";

pub fn bmp() -> Vec<u8> {
    let mut data = Vec::new();

    data.extend_from_slice(b"BM");
    // File size
    data.extend_from_slice(&58_u32.to_le_bytes());
    // Reserved
    data.extend_from_slice(&[0; 4]);
    // Pixel data offset
    data.extend_from_slice(&54_u32.to_le_bytes());
    // Info header size
    data.extend_from_slice(&40_u32.to_le_bytes());
    data.extend_from_slice(&WIDTH.to_le_bytes());
    data.extend_from_slice(&HEIGHT.to_le_bytes());
    // Planes
    data.extend_from_slice(&1_u16.to_le_bytes());
    // Bits per pixel
    data.extend_from_slice(&24_u16.to_le_bytes());
    // Compression, image size, resolution, colors
    data.extend_from_slice(&[0; 24]);
    // Pixel data
    data.extend_from_slice(&[0xff, 0, 0, 0]);

    data
}

fn u16_le(x: u32) -> [u8; 2] {
    u16::try_from(x).unwrap().to_le_bytes()
}

pub fn gif() -> Vec<u8> {
    let mut data = Vec::new();

    data.extend_from_slice(b"GIF89a");
    // Logical screen descriptor
    data.extend_from_slice(&u16_le(WIDTH));
    data.extend_from_slice(&u16_le(HEIGHT));
    data.extend_from_slice(&[0, 0, 0]);
    // Image descriptor
    data.push(0x2C);
    data.extend_from_slice(&[0; 4]);
    data.extend_from_slice(&u16_le(WIDTH));
    data.extend_from_slice(&u16_le(HEIGHT));
    data.push(0);
    // LZW minimum code size, empty data, trailer
    data.extend_from_slice(&[2, 0, 0x3B]);

    data
}

pub fn png_chunk(data: &mut Vec<u8>, chunk_type: &[u8; 4], chunk_data: &[u8]) {
    data.extend_from_slice(&u32::try_from(chunk_data.len()).unwrap().to_be_bytes());
    data.extend_from_slice(chunk_type);
    data.extend_from_slice(chunk_data);
    // CRC is not checked
    data.extend_from_slice(&[0xAA; 4]);
}

pub fn ihdr(width: u32, height: u32) -> Vec<u8> {
    let mut ihdr = Vec::new();
    ihdr.extend_from_slice(&width.to_be_bytes());
    ihdr.extend_from_slice(&height.to_be_bytes());
    // Bit depth, color type, compression, filter, interlace
    ihdr.extend_from_slice(&[8, 2, 0, 0, 0]);
    ihdr
}

pub fn png() -> Vec<u8> {
    png_with_header_type(b"IHDR")
}

pub fn png_with_header_type(chunk_type: &[u8; 4]) -> Vec<u8> {
    let mut data = vec![137, 80, 78, 71, 13, 10, 26, 10];
    png_chunk(&mut data, chunk_type, &ihdr(WIDTH, HEIGHT));
    png_chunk(&mut data, b"tEXt", b"Comment\0IHDR");
    png_chunk(&mut data, b"IDAT", &[0x78, 0x9C, 0x03, 0x00]);
    png_chunk(&mut data, b"IEND", &[]);
    data
}

pub fn jpeg_segment(data: &mut Vec<u8>, marker: u8, segment_data: &[u8]) {
    data.extend_from_slice(&[0xFF, marker]);
    // Length includes the two length bytes
    let len = u16::try_from(segment_data.len())
        .unwrap()
        .checked_add(2)
        .unwrap();
    data.extend_from_slice(&len.to_be_bytes());
    data.extend_from_slice(segment_data);
}

pub fn jfif() -> Vec<u8> {
    let mut app0 = b"JFIF\0".to_vec();
    // Version, density units, density, thumbnail size
    app0.extend_from_slice(&[1, 1, 0, 0, 1, 0, 1, 0, 0]);
    app0
}

pub fn sof(width: u32, height: u32) -> Vec<u8> {
    let mut sof = vec![8];
    sof.extend_from_slice(&u16::try_from(height).unwrap().to_be_bytes());
    sof.extend_from_slice(&u16::try_from(width).unwrap().to_be_bytes());
    // Three components
    sof.extend_from_slice(&[3, 1, 0x22, 0, 2, 0x11, 1, 3, 0x11, 1]);
    sof
}

/// JPEG with the given segments between SOI and the scan
pub fn jpeg_with(segments: &[(u8, Vec<u8>)]) -> Vec<u8> {
    let mut data = vec![0xFF, 0xD8];
    for (marker, segment_data) in segments {
        jpeg_segment(&mut data, *marker, segment_data);
    }
    jpeg_segment(&mut data, 0xDA, &[1, 1, 0, 0, 0x3F, 0]);
    // Entropy coded data with a stuffed byte and a restart marker
    data.extend_from_slice(&[0x12, 0xFF, 0x00, 0x34, 0xFF, 0xD0, 0x56]);
    data.extend_from_slice(&[0xFF, 0xD9]);
    data
}

pub fn jpeg() -> Vec<u8> {
    jpeg_with(&[
        (0xE0, jfif()),
        (0xDB, vec![0; 65]),
        (0xC0, sof(WIDTH, HEIGHT)),
        (0xC4, vec![0; 29]),
    ])
}

fn tiff_entry(data: &mut Vec<u8>, big_endian: bool, tag: u16, data_type: u16, value: u32) {
    let u16_bytes = |x: u16| if big_endian { x.to_be_bytes() } else { x.to_le_bytes() };
    let u32_bytes = |x: u32| if big_endian { x.to_be_bytes() } else { x.to_le_bytes() };

    data.extend_from_slice(&u16_bytes(tag));
    data.extend_from_slice(&u16_bytes(data_type));
    data.extend_from_slice(&u32_bytes(1));
    if data_type == 3 {
        // Shorts are left-aligned in the value field
        data.extend_from_slice(&u16_bytes(u16::try_from(value).unwrap()));
        data.extend_from_slice(&[0, 0]);
    } else {
        data.extend_from_slice(&u32_bytes(value));
    }
}

/// TIFF with width stored as short and height as long
pub fn tiff(big_endian: bool) -> Vec<u8> {
    let u16_bytes = |x: u16| if big_endian { x.to_be_bytes() } else { x.to_le_bytes() };
    let u32_bytes = |x: u32| if big_endian { x.to_be_bytes() } else { x.to_le_bytes() };

    let mut data = Vec::new();
    data.extend_from_slice(if big_endian { b"MM" } else { b"II" });
    data.extend_from_slice(&u16_bytes(42));
    // Offset of first IFD
    data.extend_from_slice(&u32_bytes(8));

    // Number of entries
    data.extend_from_slice(&u16_bytes(4));
    tiff_entry(&mut data, big_endian, 0x100, 3, WIDTH);
    tiff_entry(&mut data, big_endian, 0x101, 4, HEIGHT);
    // Compression
    tiff_entry(&mut data, big_endian, 0x103, 3, 1);
    // Strip offsets
    tiff_entry(&mut data, big_endian, 0x111, 4, 62);
    // Next IFD
    data.extend_from_slice(&u32_bytes(0));
    // Pixel data
    data.extend_from_slice(&[0; 4]);

    data
}
