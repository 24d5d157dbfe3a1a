use crate::models::FrameBuffer;
use crate::traits::{ImageResponse, Rasterizer};
use image::{ColorType, ImageEncoder, RgbImage, codecs::png::PngEncoder};
use std::io::Cursor;

/// Encodes a frame to PNG via the `image` crate.
pub struct PngRasterizer;

impl Rasterizer for PngRasterizer {
    fn rasterize(&self, frame: &FrameBuffer) -> Result<ImageResponse, String> {
        let img = RgbImage::from_raw(frame.width(), frame.height(), frame.raw_rgb())
            .ok_or_else(|| "frame buffer does not match its dimensions".to_string())?;

        let mut png_data = Vec::new();
        PngEncoder::new(Cursor::new(&mut png_data))
            .write_image(
                img.as_raw(),
                frame.width(),
                frame.height(),
                ColorType::Rgb8.into(),
            )
            .map_err(|e| e.to_string())?;

        Ok(ImageResponse {
            content_type: "image/png".into(),
            bytes: png_data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Rgb;
    use image::{ImageDecoder, codecs::png::PngDecoder};
    use std::fs;

    fn red_striped_frame() -> FrameBuffer {
        let mut frame = FrameBuffer::new(8, 4);
        frame.fill_column(3, Rgb { r: 255, g: 0, b: 0 });
        frame
    }

    #[test]
    fn encodes_rgb8_png_with_matching_dimensions() {
        let response = PngRasterizer.rasterize(&red_striped_frame()).unwrap();

        assert_eq!(response.content_type, "image/png");
        assert!(!response.bytes.is_empty());

        let decoder = PngDecoder::new(Cursor::new(&response.bytes)).unwrap();
        assert_eq!(decoder.color_type(), ColorType::Rgb8);
        assert_eq!(decoder.dimensions(), (8, 4));
    }

    #[test]
    fn decoded_pixels_match_the_frame() {
        let response = PngRasterizer.rasterize(&red_striped_frame()).unwrap();
        let img = image::load_from_memory(&response.bytes)
            .expect("Failed to load image")
            .to_rgb8();

        assert_eq!(img.get_pixel(3, 0).0, [255, 0, 0]);
        assert_eq!(img.get_pixel(3, 3).0, [255, 0, 0]);
        assert_eq!(img.get_pixel(2, 0).0, [0, 0, 0]);
    }

    #[test]
    fn encoded_png_round_trips_through_disk() {
        let tmp = tempfile::TempDir::new().expect("failed to create temp dir");
        let path = tmp.path().join("stripe.png");

        let response = PngRasterizer.rasterize(&red_striped_frame()).unwrap();
        fs::write(&path, &response.bytes).unwrap();

        let img = image::open(&path).expect("Failed to open image").to_rgb8();
        assert_eq!(img.dimensions(), (8, 4));
        assert_eq!(img.get_pixel(3, 2).0, [255, 0, 0]);

        drop(tmp);
    }
}
