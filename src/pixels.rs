//! Decoded image data.

use std::path::Path;

use crate::error::Error;

/// Bytes per pixel of `Pixels::data`.
pub const BYTES_PER_PIXEL: usize = 3;

/// Tightly packed 8-bit RGB rows, ready to upload.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Pixels {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Pixels {
    /// Decodes an image file.
    ///
    /// When `flip_vertically` is set the first row of `data` is the bottom
    /// row of the image, which is the order OpenGL expects.
    pub fn open<P: AsRef<Path>>(path: P, flip_vertically: bool) -> Result<Self, Error> {
        let path = path.as_ref();
        let image = image::open(path).map_err(|source| Error::Image {
            path: path.display().to_string(),
            source,
        })?;
        let pixels = Self::from_image(image, flip_vertically);
        debug!("loaded {} ({}x{})", path.display(), pixels.width, pixels.height);
        Ok(pixels)
    }

    /// Converts an already decoded image, dropping any alpha channel.
    pub fn from_image(image: image::DynamicImage, flip_vertically: bool) -> Self {
        let image = if flip_vertically { image.flipv() } else { image };
        let rgb = image.into_rgb8();
        let (width, height) = rgb.dimensions();
        Pixels {
            width,
            height,
            data: rgb.into_raw(),
        }
    }

    /// Returns the width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns `width * height * BYTES_PER_PIXEL` bytes, row by row.
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, Rgb, RgbImage, Rgba, RgbaImage};

    fn two_rows() -> DynamicImage {
        // Top row red, bottom row blue.
        let mut image = RgbImage::new(2, 2);
        for x in 0..2 {
            image.put_pixel(x, 0, Rgb([255, 0, 0]));
            image.put_pixel(x, 1, Rgb([0, 0, 255]));
        }
        DynamicImage::ImageRgb8(image)
    }

    #[test]
    fn keeps_row_order_without_flip() {
        let pixels = Pixels::from_image(two_rows(), false);
        assert_eq!((pixels.width(), pixels.height()), (2, 2));
        assert_eq!(&pixels.data()[..3], &[255, 0, 0]);
        assert_eq!(&pixels.data()[6..9], &[0, 0, 255]);
    }

    #[test]
    fn flip_puts_bottom_row_first() {
        let pixels = Pixels::from_image(two_rows(), true);
        assert_eq!(&pixels.data()[..3], &[0, 0, 255]);
        assert_eq!(&pixels.data()[6..9], &[255, 0, 0]);
    }

    #[test]
    fn alpha_is_dropped() {
        let image = RgbaImage::from_pixel(3, 1, Rgba([10, 20, 30, 40]));
        let pixels = Pixels::from_image(DynamicImage::ImageRgba8(image), false);
        assert_eq!(pixels.data(), &[10, 20, 30, 10, 20, 30, 10, 20, 30][..]);
    }

    #[test]
    fn odd_widths_have_no_row_padding() {
        let image = RgbaImage::from_pixel(3, 5, Rgba([1, 2, 3, 4]));
        let pixels = Pixels::from_image(DynamicImage::ImageRgba8(image), true);
        assert_eq!(pixels.data().len(), 3 * 5 * BYTES_PER_PIXEL);
    }

    #[test]
    fn missing_file_is_an_image_error() {
        let path = std::env::temp_dir().join("glquad-no-such-image.png");
        match Pixels::open(&path, true) {
            Err(Error::Image { path: reported, .. }) => {
                assert!(reported.ends_with("glquad-no-such-image.png"));
            }
            other => panic!("expected image error, got {:?}", other),
        }
    }

    #[test]
    fn open_decodes_png_from_disk() {
        let path = std::env::temp_dir()
            .join(format!("glquad-pixels-{}.png", std::process::id()));
        let raw = [1u8, 2, 3, 4, 5, 6];
        image::save_buffer(&path, &raw, 2, 1, image::ColorType::Rgb8).unwrap();
        let pixels = Pixels::open(&path, true).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!((pixels.width(), pixels.height()), (2, 1));
        assert_eq!(pixels.data(), &raw[..]);
    }
}
