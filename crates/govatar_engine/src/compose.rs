use image::codecs::jpeg::JpegEncoder;
use image::imageops::{self, FilterType};
use image::{DynamicImage, Rgba, RgbaImage};
use thiserror::Error;

/// Fraction of the canvas reserved as padding on each side.
pub const PAD_RATIO: f64 = 0.067;

const GUIDE_COLOR: Rgba<u8> = Rgba([255, 0, 255, 255]);
const GUIDE_WIDTH: f64 = 4.0;

#[derive(Debug, Error)]
pub enum ComposeError {
    #[error("source image has a zero dimension ({width}x{height})")]
    EmptySource { width: u32, height: u32 },
    #[error("jpeg encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}

/// Where the scaled source lands on the square canvas, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Compute the placement of a `width`x`height` source on a `size` canvas.
///
/// The source keeps its aspect ratio and fills the usable area (canvas minus
/// padding) along its longer axis; the other axis is centered on the full
/// canvas. A square source takes the tall branch, which places it identically
/// to the wide branch.
pub fn placement(width: u32, height: u32, size: u32) -> Placement {
    let canvas = f64::from(size);
    let padding = canvas * PAD_RATIO;
    let usable = canvas - padding * 2.0;
    let ratio = f64::from(height) / f64::from(width);

    let (w, h, x, y) = if ratio < 1.0 {
        let h = usable * ratio;
        (usable, h, padding, (canvas - h) / 2.0)
    } else {
        let w = usable / ratio;
        (w, usable, (canvas - w) / 2.0, padding)
    };

    Placement {
        x: x.round() as u32,
        y: y.round() as u32,
        width: (w.round() as u32).max(1),
        height: (h.round() as u32).max(1),
    }
}

/// Composite `source` onto an opaque white `size`x`size` canvas.
///
/// Source alpha blends over the white background. The debug overlay draws a
/// centered circular guide stroke for eyeballing margins; it is never enabled
/// in normal runs.
pub fn compose_logo(
    source: &DynamicImage,
    size: u32,
    debug_overlay: bool,
) -> Result<RgbaImage, ComposeError> {
    let (width, height) = (source.width(), source.height());
    if width == 0 || height == 0 {
        return Err(ComposeError::EmptySource { width, height });
    }

    let mut canvas = RgbaImage::from_pixel(size, size, Rgba([255, 255, 255, 255]));
    let place = placement(width, height, size);
    let scaled = source
        .resize_exact(place.width, place.height, FilterType::Lanczos3)
        .to_rgba8();
    imageops::overlay(&mut canvas, &scaled, i64::from(place.x), i64::from(place.y));

    if debug_overlay {
        draw_guide_circle(&mut canvas, size);
    }

    Ok(canvas)
}

/// Encode a composited canvas as a maximum-quality JPEG.
pub fn encode_jpeg(canvas: &RgbaImage) -> Result<Vec<u8>, ComposeError> {
    // The canvas is fully opaque, so dropping the alpha channel is lossless.
    let rgb = DynamicImage::ImageRgba8(canvas.clone()).to_rgb8();
    let mut bytes = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut bytes, 100);
    rgb.write_with_encoder(encoder)?;
    Ok(bytes)
}

fn draw_guide_circle(canvas: &mut RgbaImage, size: u32) {
    let center = f64::from(size) / 2.0;
    let radius = center - GUIDE_WIDTH * 2.0;
    let half = GUIDE_WIDTH / 2.0;

    for y in 0..size {
        for x in 0..size {
            let dx = f64::from(x) + 0.5 - center;
            let dy = f64::from(y) + 0.5 - center;
            let dist = (dx * dx + dy * dy).sqrt();
            if (dist - radius).abs() <= half {
                canvas.put_pixel(x, y, GUIDE_COLOR);
            }
        }
    }
}
