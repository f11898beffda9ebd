//! PNG encoding for 8-bit grayscale frames (color type 0).
//!
//! Dashboard frames are a handful of gray levels on black, so a plain
//! unfiltered grayscale PNG with fast deflate compresses well and encodes
//! quickly.

use std::io::Write;

use image::GrayImage;
use wind_common::{DashboardError, DashboardResult};

/// PNG file signature.
const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

/// Create a grayscale PNG from one byte per pixel.
///
/// # Arguments
/// - `pixels`: Gray levels, row-major (1 byte per pixel)
/// - `width`: Image width in pixels
/// - `height`: Image height in pixels
pub fn create_png_gray(pixels: &[u8], width: usize, height: usize) -> DashboardResult<Vec<u8>> {
    if pixels.len() != width * height {
        return Err(DashboardError::Encode(format!(
            "expected {} pixels for {}x{}, got {}",
            width * height,
            width,
            height,
            pixels.len()
        )));
    }

    let mut png = Vec::new();
    png.extend_from_slice(&PNG_SIGNATURE);

    // IHDR chunk
    let mut ihdr_data = Vec::with_capacity(13);
    ihdr_data.extend_from_slice(&(width as u32).to_be_bytes());
    ihdr_data.extend_from_slice(&(height as u32).to_be_bytes());
    ihdr_data.push(8); // bit depth
    ihdr_data.push(0); // color type 0 = grayscale
    ihdr_data.push(0); // compression method
    ihdr_data.push(0); // filter method
    ihdr_data.push(0); // interlace method
    write_chunk(&mut png, b"IHDR", &ihdr_data);

    // IDAT chunk (image data)
    let idat_data = deflate_idat_gray(pixels, width, height)
        .map_err(|e| DashboardError::Encode(format!("IDAT compression failed: {}", e)))?;
    write_chunk(&mut png, b"IDAT", &idat_data);

    // IEND chunk
    write_chunk(&mut png, b"IEND", &[]);

    Ok(png)
}

/// Encode a grayscale image buffer as PNG.
pub fn encode_gray_image(image: &GrayImage) -> DashboardResult<Vec<u8>> {
    create_png_gray(image.as_raw(), image.width() as usize, image.height() as usize)
}

/// Write a PNG chunk: length, type, data, CRC over type and data.
fn write_chunk(png: &mut Vec<u8>, chunk_type: &[u8; 4], data: &[u8]) {
    png.extend_from_slice(&(data.len() as u32).to_be_bytes());
    png.extend_from_slice(chunk_type);
    png.extend_from_slice(data);

    let mut hasher = crc32fast::Hasher::new();
    hasher.update(chunk_type);
    hasher.update(data);
    png.extend_from_slice(&hasher.finalize().to_be_bytes());
}

/// Deflate grayscale scanlines, each prefixed with filter type 0.
fn deflate_idat_gray(pixels: &[u8], width: usize, height: usize) -> std::io::Result<Vec<u8>> {
    let mut uncompressed = Vec::with_capacity(height * (1 + width));
    for row in pixels.chunks_exact(width.max(1)).take(height) {
        uncompressed.push(0); // filter type: none
        uncompressed.extend_from_slice(row);
    }

    let mut encoder = flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::fast());
    encoder.write_all(&uncompressed)?;
    encoder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_and_header() {
        let png = create_png_gray(&[0, 128, 255, 30], 2, 2).unwrap();
        assert_eq!(&png[0..8], &PNG_SIGNATURE);
        assert_eq!(&png[12..16], b"IHDR");
        // width, height
        assert_eq!(&png[16..20], &2u32.to_be_bytes());
        assert_eq!(&png[20..24], &2u32.to_be_bytes());
        // bit depth, color type
        assert_eq!(png[24], 8);
        assert_eq!(png[25], 0);
        assert_eq!(&png[png.len() - 8..png.len() - 4], b"IEND");
    }

    #[test]
    fn test_size_mismatch_rejected() {
        assert!(matches!(
            create_png_gray(&[0; 5], 2, 2),
            Err(DashboardError::Encode(_))
        ));
    }
}
