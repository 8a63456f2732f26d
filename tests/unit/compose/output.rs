use std::io::Cursor;

use super::*;

fn png(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(width, height, image::Rgba([26, 26, 26, 255]));
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn reads_png_dimensions() {
    let out = inspect_render(png(3, 2)).unwrap();
    assert_eq!((out.width, out.height), (3, 2));
    assert!(!out.bytes.is_empty());
}

#[test]
fn garbage_is_an_error() {
    let err = inspect_render(b"<html>502</html>".to_vec()).unwrap_err();
    assert!(matches!(err, StudioError::Other(_)));
}

#[test]
fn size_mismatch_is_a_service_error() {
    inspect_render_sized(png(4, 4), 4, 4).unwrap();
    let err = inspect_render_sized(png(4, 4), 8, 4).unwrap_err();
    assert!(err.to_string().starts_with("service error:"));
}
