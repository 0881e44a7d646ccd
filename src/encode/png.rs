//! # PNG Encoder
//!
//! Serializes a [`PixelGrid`] to a standard-conformant truecolor PNG:
//! 8 bits per channel, color type 2, no alpha, no interlacing.
//!
//! ## Container Layout
//!
//! | Section | Content |
//! |---------|---------|
//! | signature | `89 50 4E 47 0D 0A 1A 0A` |
//! | IHDR | width, height (big-endian), depth 8, color type 2, 0, 0, 0 |
//! | IDAT | zlib-wrapped deflate of all filtered scanlines |
//! | tEXt | `Creation Time`: local time at encoding |
//! | tEXt | `Comment`: caller-supplied free text |
//! | IEND | empty |
//!
//! Every chunk is `length (u32 BE) | type (4 ASCII bytes) | data |
//! CRC-32 over type+data (u32 BE)`.
//!
//! ## Scanline Filtering
//!
//! Each scanline is filtered independently with the cheapest of the five
//! standard filter types. All five candidates are computed against the
//! *unfiltered* current and previous rows, scored by summing `abs(byte)`
//! with every filtered byte read as a signed 8-bit integer, and the first
//! minimum in the order None, Sub, Up, Average, Paeth wins. Byte
//! differences are unsigned subtraction modulo 256.
//!
//! ## Channel Expansion
//!
//! The pipeline's 5-bit channels widen to 8 bits as `0 -> 0`, otherwise
//! `(c + 1) * 8 - 1`, so full intensity 31 reaches exactly 255. Plain
//! bit replication would not reproduce the expected output bytes.

use std::fs;
use std::io::Write;
use std::path::Path;

use chrono::{DateTime, Local};
use flate2::write::ZlibEncoder;
use flate2::{Compression, Crc};

use crate::color;
use crate::error::LienzoError;
use crate::raster::PixelGrid;

/// The eight-byte PNG file signature.
pub const SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

// Bytes per pixel in the filtered stream (24-bit truecolor, no alpha).
const PIXEL_STRIDE: usize = 3;

/// The five standard scanline filter types, in scoring order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FilterType {
    None = 0,
    Sub = 1,
    Up = 2,
    Average = 3,
    Paeth = 4,
}

const FILTER_ORDER: [FilterType; 5] = [
    FilterType::None,
    FilterType::Sub,
    FilterType::Up,
    FilterType::Average,
    FilterType::Paeth,
];

/// Encode a pixel grid as a PNG, stamping the current local time into
/// the `Creation Time` chunk.
pub fn encode(grid: &PixelGrid, comment: &str) -> Vec<u8> {
    encode_with_time(grid, comment, Local::now())
}

/// Encode a pixel grid as a PNG with an explicit creation timestamp.
/// Output is fully deterministic for a fixed grid, comment and time.
pub fn encode_with_time(grid: &PixelGrid, comment: &str, created: DateTime<Local>) -> Vec<u8> {
    let rows = to_truecolor(grid);

    let mut out = Vec::new();
    out.extend_from_slice(&SIGNATURE);
    out.extend_from_slice(&ihdr_chunk(grid.width() as u32, grid.height() as u32));
    out.extend_from_slice(&idat_chunk(&rows));
    out.extend_from_slice(&text_chunk(
        "Creation Time",
        &created.format("%d %B %Y %H:%M:%S %z").to_string(),
    ));
    out.extend_from_slice(&text_chunk("Comment", comment));
    out.extend_from_slice(&chunk("IEND", &[]));
    out
}

/// Encode `grid` and write it to `path` in one operation, overwriting
/// any existing file.
pub fn write_file<P: AsRef<Path>>(path: P, grid: &PixelGrid, comment: &str) -> Result<(), LienzoError> {
    fs::write(path, encode(grid, comment))?;
    Ok(())
}

/// Widen a 5-bit channel to 8 bits. Zero stays zero; everything else
/// maps so that 31 lands exactly on 255.
fn channel_5_to_8(channel: u8) -> u8 {
    if channel == 0 {
        0
    } else {
        ((channel as u16 + 1) * 8 - 1) as u8
    }
}

/// Expand the packed grid into unfiltered truecolor scanlines, grid
/// row 0 first (top scanline of the emitted image).
fn to_truecolor(grid: &PixelGrid) -> Vec<Vec<u8>> {
    (0..grid.height())
        .map(|y| {
            let mut scanline = Vec::with_capacity(grid.width() * PIXEL_STRIDE);
            for &pixel in grid.row(y) {
                let (r, g, b) = color::unpack(pixel);
                scanline.push(channel_5_to_8(r));
                scanline.push(channel_5_to_8(g));
                scanline.push(channel_5_to_8(b));
            }
            scanline
        })
        .collect()
}

fn ihdr_chunk(width: u32, height: u32) -> Vec<u8> {
    let mut data = Vec::with_capacity(13);
    data.extend_from_slice(&width.to_be_bytes());
    data.extend_from_slice(&height.to_be_bytes());
    data.push(8); // bit depth
    data.push(2); // color type: truecolor
    data.push(0); // compression method
    data.push(0); // filter method
    data.push(0); // interlace method
    chunk("IHDR", &data)
}

fn idat_chunk(rows: &[Vec<u8>]) -> Vec<u8> {
    let mut filtered = Vec::new();
    for (i, row) in rows.iter().enumerate() {
        let prev = if i == 0 { None } else { Some(rows[i - 1].as_slice()) };
        filtered.extend_from_slice(&best_filter_row(row, prev));
    }
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::best());
    encoder.write_all(&filtered).expect("deflate to memory");
    let compressed = encoder.finish().expect("deflate to memory");
    chunk("IDAT", &compressed)
}

fn text_chunk(keyword: &str, text: &str) -> Vec<u8> {
    let mut data = Vec::with_capacity(keyword.len() + 1 + text.len());
    data.extend_from_slice(keyword.as_bytes());
    data.push(0);
    data.extend_from_slice(text.as_bytes());
    chunk("tEXt", &data)
}

/// Assemble one chunk: big-endian length, 4-byte type code, data,
/// big-endian CRC-32 over type+data.
///
/// A malformed type code is normalized to exactly four bytes: shorter
/// codes are left-padded with `z`, longer ones truncated.
fn chunk(type_code: &str, data: &[u8]) -> Vec<u8> {
    let bytes = type_code.as_bytes();
    let mut ty = [b'z'; 4];
    if bytes.len() >= 4 {
        ty.copy_from_slice(&bytes[..4]);
    } else {
        ty[4 - bytes.len()..].copy_from_slice(bytes);
    }

    let mut crc = Crc::new();
    crc.update(&ty);
    crc.update(data);

    let mut out = Vec::with_capacity(12 + data.len());
    out.extend_from_slice(&(data.len() as u32).to_be_bytes());
    out.extend_from_slice(&ty);
    out.extend_from_slice(data);
    out.extend_from_slice(&crc.sum().to_be_bytes());
    out
}

/// Filter one scanline with every filter type and keep the cheapest.
/// Ties go to the earliest type in [`FILTER_ORDER`].
fn best_filter_row(row: &[u8], prev: Option<&[u8]>) -> Vec<u8> {
    let mut best: Option<(u32, Vec<u8>)> = None;
    for filter in FILTER_ORDER {
        let candidate = filter_row(filter, row, prev);
        let score = row_magnitude(&candidate);
        match &best {
            Some((best_score, _)) if score >= *best_score => {}
            _ => best = Some((score, candidate)),
        }
    }
    best.map(|(_, row)| row).unwrap_or_default()
}

/// Apply one filter type to a scanline. `prev` is the *unfiltered*
/// previous scanline, absent for the top row.
fn filter_row(filter: FilterType, row: &[u8], prev: Option<&[u8]>) -> Vec<u8> {
    let mut out = Vec::with_capacity(row.len() + 1);
    out.push(filter as u8);
    match filter {
        FilterType::None => out.extend_from_slice(row),
        FilterType::Sub => {
            for j in 0..row.len() {
                let left = if j < PIXEL_STRIDE { 0 } else { row[j - PIXEL_STRIDE] };
                out.push(row[j].wrapping_sub(left));
            }
        }
        FilterType::Up => {
            for j in 0..row.len() {
                let above = prev.map_or(0, |p| p[j]);
                out.push(row[j].wrapping_sub(above));
            }
        }
        FilterType::Average => {
            for j in 0..row.len() {
                let left = if j < PIXEL_STRIDE { 0 } else { row[j - PIXEL_STRIDE] };
                let above = prev.map_or(0, |p| p[j]);
                let predicted = ((left as u16 + above as u16) / 2) as u8;
                out.push(row[j].wrapping_sub(predicted));
            }
        }
        FilterType::Paeth => {
            for j in 0..row.len() {
                let left = if j < PIXEL_STRIDE { 0 } else { row[j - PIXEL_STRIDE] };
                let above = prev.map_or(0, |p| p[j]);
                let upper_left = match prev {
                    Some(p) if j >= PIXEL_STRIDE => p[j - PIXEL_STRIDE],
                    _ => 0,
                };
                out.push(row[j].wrapping_sub(paeth_predictor(left, above, upper_left)));
            }
        }
    }
    out
}

/// Standard Paeth predictor: pick whichever of a (left), b (above),
/// c (upper-left) is closest to `a + b - c`, ties resolved a, b, c.
fn paeth_predictor(a: u8, b: u8, c: u8) -> u8 {
    let p = a as i32 + b as i32 - c as i32;
    let pa = (p - a as i32).abs();
    let pb = (p - b as i32).abs();
    let pc = (p - c as i32).abs();
    if pa <= pb && pa <= pc {
        a
    } else if pb <= pc {
        b
    } else {
        c
    }
}

/// Cost of a filtered scanline: the sum of `abs(byte)` with each byte
/// read as a signed 8-bit integer, excluding the filter-type byte.
fn row_magnitude(filtered: &[u8]) -> u32 {
    filtered[1..]
        .iter()
        .map(|&b| (b as i8).unsigned_abs() as u32)
        .sum()
}

// ============================================================================
// TESTS
// ============================================================================
