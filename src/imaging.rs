use std::io::Cursor;

use base64::{engine::general_purpose, Engine as _};
use image::{DynamicImage, ImageFormat};

/// Decodes a base64 image, accepting an optional `data:<mime>;base64,` prefix.
///
/// Returns the raw bytes together with the decoded image, or `None` if either the
/// base64 or the image data is invalid.
pub fn decode_base64_image(data: &str) -> Option<(Vec<u8>, DynamicImage)> {
    let data = data.trim();
    let data = match data.strip_prefix("data:") {
        Some(rest) => rest.split_once(";base64,")?.1,
        None => data,
    };
    if data.is_empty() {
        return None;
    }
    let bytes = general_purpose::STANDARD.decode(data).ok()?;
    let image = image::load_from_memory(&bytes).ok()?;
    Some((bytes, image))
}

pub fn encode_png(image: &DynamicImage) -> image::ImageResult<Vec<u8>> {
    let mut png = Vec::new();
    image.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;
    Ok(png)
}

pub fn to_base64(bytes: &[u8]) -> String {
    general_purpose::STANDARD.encode(bytes)
}

#[cfg(test)]
pub(crate) fn sample_png() -> Vec<u8> {
    let image = DynamicImage::ImageRgba8(image::RgbaImage::from_pixel(
        3,
        2,
        image::Rgba([200, 30, 60, 255]),
    ));
    encode_png(&image).unwrap()
}
