use govatar_engine::{compose_logo, encode_jpeg, placement, PAD_RATIO};
use image::{DynamicImage, Rgba, RgbaImage};
use pretty_assertions::assert_eq;

fn solid(width: u32, height: u32, pixel: Rgba<u8>) -> DynamicImage {
    DynamicImage::ImageRgba8(RgbaImage::from_pixel(width, height, pixel))
}

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);

#[test]
fn wide_source_fills_usable_width_and_centers_vertically() {
    let size = 512;
    let place = placement(200, 100, size);

    let usable = (f64::from(size) * (1.0 - 2.0 * PAD_RATIO)).round() as u32;
    assert_eq!(place.width, usable);
    assert!(place.height <= usable);
    // Aspect preserved: 2:1 within rounding.
    assert!((place.width as i64 - 2 * place.height as i64).abs() <= 1);
    // Vertically centered within the full canvas.
    assert!((2 * place.y + place.height) as i64 - size as i64 <= 1);
    assert!(size as i64 - (2 * place.y + place.height) as i64 <= 1);
}

#[test]
fn tall_source_fills_usable_height_and_centers_horizontally() {
    let size = 512;
    let place = placement(100, 200, size);

    let usable = (f64::from(size) * (1.0 - 2.0 * PAD_RATIO)).round() as u32;
    assert_eq!(place.height, usable);
    assert!(place.width <= usable);
    assert!((2 * place.x + place.width) as i64 - size as i64 <= 1);
}

#[test]
fn square_source_is_centered_both_ways() {
    let place = placement(100, 100, 512);
    assert_eq!(place.width, place.height);
    assert_eq!(place.x, place.y);
}

#[test]
fn canvas_is_white_outside_the_logo() {
    let canvas = compose_logo(&solid(200, 100, RED), 128, false).unwrap();

    assert_eq!(canvas.dimensions(), (128, 128));
    // Corners are always padding.
    assert_eq!(*canvas.get_pixel(0, 0), WHITE);
    assert_eq!(*canvas.get_pixel(127, 127), WHITE);
    // Top band of a wide logo is padding as well.
    assert_eq!(*canvas.get_pixel(64, 4), WHITE);
    // The center lies inside the drawn region.
    assert_eq!(*canvas.get_pixel(64, 64), RED);
}

#[test]
fn transparent_source_leaves_the_canvas_white() {
    let canvas = compose_logo(&solid(50, 50, Rgba([0, 0, 0, 0])), 64, false).unwrap();
    assert_eq!(*canvas.get_pixel(32, 32), WHITE);
}

#[test]
fn debug_overlay_strokes_a_centered_circle() {
    let size = 64;
    let canvas = compose_logo(&solid(50, 50, Rgba([0, 0, 0, 0])), size, true).unwrap();

    // Radius is size/2 minus twice the stroke width; (56, 32) sits on the ring.
    assert_eq!(*canvas.get_pixel(56, 32), Rgba([255, 0, 255, 255]));
    // The very center stays untouched.
    assert_eq!(*canvas.get_pixel(32, 32), WHITE);
}

#[test]
fn jpeg_encoding_yields_a_jpeg_stream() {
    let canvas = compose_logo(&solid(10, 10, RED), 64, false).unwrap();
    let bytes = encode_jpeg(&canvas).unwrap();

    // SOI marker.
    assert_eq!(&bytes[..2], &[0xFF, 0xD8]);
    assert_eq!(&bytes[bytes.len() - 2..], &[0xFF, 0xD9]);
}
