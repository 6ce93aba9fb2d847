//! Image output in plain PPM and PNG.
//!
//! Both formats share the same channel mapping: clamp the linear value to
//! [0, 1], apply gamma-2 correction (square root), then quantize with
//! floor(255.99 * value). Radiance above 1.0 saturates to white instead of
//! wrapping.

use std::io::{self, Write};

use image::{ImageBuffer, Rgb};

use crate::interval::Interval;
use crate::renderer::Framebuffer;

/// Displayable channel range; values outside it are clamped before
/// quantization.
const INTENSITY: Interval = Interval { min: 0.0, max: 1.0 };

/// Map one linear channel value to a display byte.
///
/// Gamma-2 correction followed by floor(255.99 * v) quantization.
pub fn quantize_channel(value: f32) -> u8 {
    let gamma = INTENSITY.clamp(value).sqrt();
    (255.99 * gamma) as u8
}

/// Write a linear framebuffer as plain PPM (P3).
///
/// Emits the header `P3\n{width} {height}\n255\n` followed by one
/// `r g b` line per pixel, row-major with the top row first.
pub fn write_ppm<W: Write>(image: &Framebuffer, out: &mut W) -> io::Result<()> {
    let (width, height) = image.dimensions();
    write!(out, "P3\n{} {}\n255\n", width, height)?;

    // ImageBuffer iterates pixels row-major from the top scanline.
    for pixel in image.pixels() {
        let Rgb([r, g, b]) = *pixel;
        writeln!(
            out,
            "{} {} {}",
            quantize_channel(r),
            quantize_channel(g),
            quantize_channel(b)
        )?;
    }

    Ok(())
}

/// Save a linear framebuffer as an 8-bit PNG.
///
/// Uses the same gamma-2 quantization as the PPM writer so both formats
/// produce identical channel values.
pub fn save_image_as_png(image: &Framebuffer, output_path: &str) -> image::ImageResult<()> {
    let (width, height) = image.dimensions();
    let u8_image: ImageBuffer<Rgb<u8>, Vec<u8>> = ImageBuffer::from_fn(width, height, |x, y| {
        let pixel = image.get_pixel(x, y);
        Rgb([
            quantize_channel(pixel[0]),
            quantize_channel(pixel[1]),
            quantize_channel(pixel[2]),
        ])
    });
    u8_image.save(output_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantization_matches_the_gamma_formula() {
        // floor(255.99 * sqrt(c))
        assert_eq!(quantize_channel(0.0), 0);
        assert_eq!(quantize_channel(0.25), 127);
        assert_eq!(quantize_channel(1.0), 255);
    }

    #[test]
    fn out_of_range_radiance_clamps_instead_of_wrapping() {
        assert_eq!(quantize_channel(4.0), 255);
        assert_eq!(quantize_channel(-1.0), 0);
    }

    #[test]
    fn ppm_layout_is_exact() {
        let mut image: Framebuffer = ImageBuffer::new(2, 2);
        image.put_pixel(0, 0, Rgb([1.0, 0.0, 0.0]));
        image.put_pixel(1, 0, Rgb([0.0, 1.0, 0.0]));
        image.put_pixel(0, 1, Rgb([0.0, 0.0, 1.0]));
        image.put_pixel(1, 1, Rgb([0.25, 0.25, 0.25]));

        let mut out = Vec::new();
        write_ppm(&image, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "P3\n2 2\n255\n255 0 0\n0 255 0\n0 0 255\n127 127 127\n"
        );
    }
}
