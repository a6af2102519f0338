//! PNG image format support
//!
//! Reads any PNG color type into an 8-bit grayscale raster and writes
//! rasters back out as 8-bit grayscale. Color input is collapsed with
//! ITU-R BT.601 luma weights; alpha channels are ignored.

use crate::{IoError, IoResult};
use png::{BitDepth, ColorType, Decoder, Encoder};
use ridgeline_core::Raster;
use std::io::{BufRead, Seek, Write};

/// Convert RGB to grayscale using ITU-R BT.601 coefficients.
fn luma(r: u8, g: u8, b: u8) -> u8 {
    (0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64 + 0.5) as u8
}

/// Pull the `x`-th sample out of a row packed `bits` bits per sample,
/// most significant bits first.
fn packed_sample(row: &[u8], x: u32, bits: u32) -> u8 {
    let per_byte = 8 / bits;
    let byte = row[(x / per_byte) as usize];
    let shift = (per_byte - 1 - x % per_byte) * bits;
    (byte >> shift) & ((1u16 << bits) - 1) as u8
}

/// Read a PNG image as an 8-bit grayscale raster.
///
/// Grayscale sources below 8 bits are scaled up to the full byte range,
/// 16-bit sources keep their high byte, and color or indexed sources
/// are reduced with [`luma`].
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Raster> {
    let mut reader = Decoder::new(reader)
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("failed to read PNG header: {e}")))?;

    let info = reader.info();
    let width = info.width;
    let height = info.height;
    let color_type = info.color_type;
    let bit_depth = info.bit_depth;

    let decodable = matches!(
        (color_type, bit_depth),
        (ColorType::Grayscale, _)
            | (ColorType::GrayscaleAlpha, _)
            | (ColorType::Rgb, _)
            | (ColorType::Rgba, _)
            | (
                ColorType::Indexed,
                BitDepth::One | BitDepth::Two | BitDepth::Four | BitDepth::Eight
            )
    );
    if !decodable {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported PNG format: {color_type:?} {bit_depth:?}"
        )));
    }

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("PNG output buffer size overflow".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("failed to decode PNG frame: {e}")))?;

    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];
    let row = |y: u32| &data[y as usize * bytes_per_row..];

    let mut pixels = Vec::with_capacity(width as usize * height as usize);

    match (color_type, bit_depth) {
        (ColorType::Grayscale, BitDepth::One | BitDepth::Two | BitDepth::Four) => {
            let bits = bit_depth as u32;
            // 255, 85, and 17 spread the packed levels over the byte.
            let scale = (255 / ((1u16 << bits) - 1)) as u8;
            for y in 0..height {
                let row = row(y);
                for x in 0..width {
                    pixels.push(packed_sample(row, x, bits) * scale);
                }
            }
        }
        (ColorType::Grayscale, BitDepth::Eight) => {
            for y in 0..height {
                pixels.extend_from_slice(&row(y)[..width as usize]);
            }
        }
        (ColorType::Grayscale, BitDepth::Sixteen) => {
            // Samples are big-endian; the high byte is the gray level.
            for y in 0..height {
                let row = row(y);
                for x in 0..width {
                    pixels.push(row[x as usize * 2]);
                }
            }
        }
        (ColorType::GrayscaleAlpha, _) => {
            let stride = if bit_depth == BitDepth::Sixteen { 4 } else { 2 };
            for y in 0..height {
                let row = row(y);
                for x in 0..width {
                    pixels.push(row[x as usize * stride]);
                }
            }
        }
        (ColorType::Rgb | ColorType::Rgba, _) => {
            let channels = if color_type == ColorType::Rgba { 4 } else { 3 };
            let step = if bit_depth == BitDepth::Sixteen { 2 } else { 1 };
            for y in 0..height {
                let row = row(y);
                for x in 0..width {
                    let at = x as usize * channels * step;
                    pixels.push(luma(row[at], row[at + step], row[at + 2 * step]));
                }
            }
        }
        (
            ColorType::Indexed,
            BitDepth::One | BitDepth::Two | BitDepth::Four | BitDepth::Eight,
        ) => {
            let palette = reader.info().palette.as_ref().ok_or_else(|| {
                IoError::InvalidData("indexed PNG without a palette".to_string())
            })?;
            let palette: &[u8] = palette;
            let bits = bit_depth as u32;

            for y in 0..height {
                let row = &data[y as usize * bytes_per_row..];
                for x in 0..width {
                    let index = if bit_depth == BitDepth::Eight {
                        row[x as usize]
                    } else {
                        packed_sample(row, x, bits)
                    } as usize;
                    let rgb = palette.get(index * 3..index * 3 + 3).ok_or_else(|| {
                        IoError::InvalidData(format!("palette index {index} out of range"))
                    })?;
                    pixels.push(luma(rgb[0], rgb[1], rgb[2]));
                }
            }
        }
        _ => unreachable!(),
    }

    Ok(Raster::from_vec(width, height, pixels)?)
}

/// Write a raster as an 8-bit grayscale PNG.
pub fn write_png<W: Write>(raster: &Raster, writer: W) -> IoResult<()> {
    let mut encoder = Encoder::new(writer, raster.width(), raster.height());
    encoder.set_color(ColorType::Grayscale);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("failed to write PNG header: {e}")))?;
    writer
        .write_image_data(raster.data())
        .map_err(|e| IoError::EncodeError(format!("failed to encode PNG data: {e}")))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn encode(
        width: u32,
        height: u32,
        color: ColorType,
        depth: BitDepth,
        palette: Option<Vec<u8>>,
        data: &[u8],
    ) -> Vec<u8> {
        let mut buffer = Vec::new();
        let mut encoder = Encoder::new(&mut buffer, width, height);
        encoder.set_color(color);
        encoder.set_depth(depth);
        if let Some(palette) = palette {
            encoder.set_palette(palette);
        }
        let mut writer = encoder.write_header().unwrap();
        writer.write_image_data(data).unwrap();
        drop(writer);
        buffer
    }

    #[test]
    fn test_png_roundtrip_grayscale() {
        let pixels: Vec<u8> = (0..100).map(|i| ((i % 10) + (i / 10)) as u8 * 10).collect();
        let raster = Raster::from_vec(10, 10, pixels).unwrap();

        let mut buffer = Vec::new();
        write_png(&raster, &mut buffer).unwrap();
        let restored = read_png(Cursor::new(buffer)).unwrap();

        assert_eq!(restored.width(), 10);
        assert_eq!(restored.height(), 10);
        assert_eq!(restored.data(), raster.data());
    }

    #[test]
    fn test_png_one_bit_expands_to_full_range() {
        let encoded = encode(3, 1, ColorType::Grayscale, BitDepth::One, None, &[0xA0]);
        let raster = read_png(Cursor::new(encoded)).unwrap();
        assert_eq!(raster.data(), &[255, 0, 255]);
    }

    #[test]
    fn test_png_two_bit_scales() {
        // Values 0, 1, 3 packed as 00 01 11 00.
        let encoded = encode(3, 1, ColorType::Grayscale, BitDepth::Two, None, &[0x1C]);
        let raster = read_png(Cursor::new(encoded)).unwrap();
        assert_eq!(raster.data(), &[0, 85, 255]);
    }

    #[test]
    fn test_png_four_bit_scales() {
        let encoded = encode(3, 1, ColorType::Grayscale, BitDepth::Four, None, &[0x0F, 0x80]);
        let raster = read_png(Cursor::new(encoded)).unwrap();
        assert_eq!(raster.data(), &[0, 255, 136]);
    }

    #[test]
    fn test_png_sixteen_bit_keeps_high_byte() {
        let encoded = encode(
            2,
            1,
            ColorType::Grayscale,
            BitDepth::Sixteen,
            None,
            &[0x12, 0x34, 0xFF, 0x00],
        );
        let raster = read_png(Cursor::new(encoded)).unwrap();
        assert_eq!(raster.data(), &[0x12, 0xFF]);
    }

    #[test]
    fn test_png_rgb_reduces_with_luma() {
        let encoded = encode(
            4,
            1,
            ColorType::Rgb,
            BitDepth::Eight,
            None,
            &[255, 0, 0, 0, 255, 0, 0, 0, 255, 255, 255, 255],
        );
        let raster = read_png(Cursor::new(encoded)).unwrap();
        assert_eq!(raster.data(), &[76, 150, 29, 255]);
    }

    #[test]
    fn test_png_rgba_ignores_alpha() {
        let encoded = encode(
            2,
            1,
            ColorType::Rgba,
            BitDepth::Eight,
            None,
            &[255, 0, 0, 10, 0, 0, 0, 0],
        );
        let raster = read_png(Cursor::new(encoded)).unwrap();
        assert_eq!(raster.data(), &[76, 0]);
    }

    #[test]
    fn test_png_gray_alpha_keeps_gray() {
        let encoded = encode(
            2,
            1,
            ColorType::GrayscaleAlpha,
            BitDepth::Eight,
            None,
            &[200, 7, 31, 255],
        );
        let raster = read_png(Cursor::new(encoded)).unwrap();
        assert_eq!(raster.data(), &[200, 31]);
    }

    #[test]
    fn test_png_indexed_goes_through_palette() {
        let palette = vec![255, 0, 0, 0, 255, 0];
        let encoded = encode(
            2,
            1,
            ColorType::Indexed,
            BitDepth::Eight,
            Some(palette),
            &[0, 1],
        );
        let raster = read_png(Cursor::new(encoded)).unwrap();
        assert_eq!(raster.data(), &[76, 150]);
    }

    #[test]
    fn test_png_rejects_garbage() {
        let result = read_png(Cursor::new(b"definitely not a png".to_vec()));
        assert!(matches!(result, Err(IoError::DecodeError(_))));
    }
}
