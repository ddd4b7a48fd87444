// pwa-icon-resize/src/processors/resizer.rs
use image::{imageops::FilterType, ColorType, DynamicImage, Rgba32FImage};

/// Resamples to an exact size. Aspect ratio is never preserved.
#[derive(Debug, Clone, Copy, Default)]
pub struct Resizer;

impl Resizer {
    const FILTER: FilterType = FilterType::Lanczos3;

    pub fn new() -> Self {
        Self
    }

    pub fn resize_exact(&self, image: &DynamicImage, width: u32, height: u32) -> DynamicImage {
        if width == image.width() && height == image.height() {
            log::debug!("Image dimensions unchanged, skipping resize");
            return image.clone();
        }

        log::debug!(
            "Resizing image from {}x{} to {}x{} ({:?})",
            image.width(),
            image.height(),
            width,
            height,
            Self::FILTER
        );

        match image.color() {
            ColorType::Rgba8
            | ColorType::Rgba16
            | ColorType::La8
            | ColorType::La16
            | ColorType::Rgba32F => Self::resize_premultiplied(image, width, height),
            _ => image.resize_exact(width, height, Self::FILTER),
        }
    }

    /// Resamples with colour weighted by alpha so fully transparent pixels
    /// contribute nothing to the colour of their neighbours.
    fn resize_premultiplied(image: &DynamicImage, width: u32, height: u32) -> DynamicImage {
        let mut premultiplied = image.to_rgba32f();
        for pixel in premultiplied.pixels_mut() {
            let alpha = pixel[3];
            for channel in &mut pixel.0[..3] {
                *channel *= alpha;
            }
        }

        let mut resized: Rgba32FImage =
            image::imageops::resize(&premultiplied, width, height, Self::FILTER);
        for pixel in resized.pixels_mut() {
            let alpha = pixel[3];
            for channel in &mut pixel.0[..3] {
                *channel = if alpha > 0.0 {
                    (*channel / alpha).clamp(0.0, 1.0)
                } else {
                    0.0
                };
            }
        }

        let resized = DynamicImage::ImageRgba32F(resized);
        match image.color() {
            ColorType::Rgba8 => DynamicImage::ImageRgba8(resized.to_rgba8()),
            ColorType::Rgba16 => DynamicImage::ImageRgba16(resized.to_rgba16()),
            ColorType::La8 => DynamicImage::ImageLumaA8(resized.to_luma_alpha8()),
            ColorType::La16 => DynamicImage::ImageLumaA16(resized.to_luma_alpha16()),
            _ => resized,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, Rgba, RgbaImage};

    fn checkerboard() -> DynamicImage {
        let mut img = GrayImage::new(2, 2);
        img.put_pixel(0, 0, Luma([0]));
        img.put_pixel(1, 0, Luma([255]));
        img.put_pixel(0, 1, Luma([255]));
        img.put_pixel(1, 1, Luma([0]));
        DynamicImage::ImageLuma8(img)
    }

    #[test]
    fn upscales_to_exact_size() {
        let image = DynamicImage::ImageRgba8(RgbaImage::new(192, 192));
        let resized = Resizer::new().resize_exact(&image, 512, 512);
        assert_eq!((resized.width(), resized.height()), (512, 512));
    }

    #[test]
    fn ignores_aspect_ratio() {
        let image = DynamicImage::ImageRgba8(RgbaImage::new(300, 100));
        let resized = Resizer::new().resize_exact(&image, 512, 512);
        assert_eq!((resized.width(), resized.height()), (512, 512));
    }

    #[test]
    fn same_size_is_a_copy() {
        let image = checkerboard();
        let resized = Resizer::new().resize_exact(&image, 2, 2);
        assert_eq!(resized.as_bytes(), image.as_bytes());
    }

    #[test]
    fn transparent_pixels_do_not_bleed_colour() {
        let mut img = RgbaImage::new(2, 1);
        img.put_pixel(0, 0, Rgba([255, 0, 0, 255]));
        img.put_pixel(1, 0, Rgba([0, 255, 0, 0]));

        let out = Resizer::new()
            .resize_exact(&DynamicImage::ImageRgba8(img), 4, 1)
            .to_rgba8();

        assert_eq!(out.get_pixel(0, 0)[3], 255);
        for (x, _, pixel) in out.enumerate_pixels() {
            if pixel[3] > 0 {
                assert!(pixel[0] >= 250, "pixel {x}: {:?}", pixel);
                assert_eq!(pixel[1], 0, "pixel {x}: {:?}", pixel);
                assert_eq!(pixel[2], 0, "pixel {x}: {:?}", pixel);
            }
        }
    }

    #[test]
    fn opaque_alpha_image_matches_plain_resample() {
        let rgba = DynamicImage::ImageRgba8(RgbaImage::from_fn(6, 6, |x, y| {
            Rgba([(x * 40) as u8, (y * 40) as u8, 90, 255])
        }));
        let rgb = DynamicImage::ImageRgb8(rgba.to_rgb8());

        let from_rgba = Resizer::new().resize_exact(&rgba, 12, 12).to_rgba8();
        let from_rgb = Resizer::new().resize_exact(&rgb, 12, 12).to_rgb8();

        for (a, b) in from_rgba.pixels().zip(from_rgb.pixels()) {
            assert_eq!(a[3], 255);
            for c in 0..3 {
                let diff = (i32::from(a[c]) - i32::from(b[c])).abs();
                assert!(diff <= 1, "{:?} vs {:?}", a, b);
            }
        }
    }

    #[test]
    fn keeps_color_type() {
        let image = DynamicImage::ImageLumaA8(image::GrayAlphaImage::new(3, 3));
        let resized = Resizer::new().resize_exact(&image, 5, 5);
        assert_eq!(resized.color(), ColorType::La8);
    }

    #[test]
    fn checkerboard_upscale_is_reproducible() {
        let resizer = Resizer::new();
        let first = resizer.resize_exact(&checkerboard(), 4, 4).to_luma8();
        let second = resizer.resize_exact(&checkerboard(), 4, 4).to_luma8();
        assert_eq!(first.as_raw(), second.as_raw());
    }

    #[test]
    fn checkerboard_upscale_keeps_pattern() {
        let out = Resizer::new().resize_exact(&checkerboard(), 4, 4).to_luma8();
        assert_eq!(out.dimensions(), (4, 4));

        let at = |x: u32, y: u32| i32::from(out.get_pixel(x, y)[0]);

        // Corners follow the source cells.
        assert!(at(0, 0) < 64, "top-left {}", at(0, 0));
        assert!(at(3, 3) < 64, "bottom-right {}", at(3, 3));
        assert!(at(3, 0) > 192, "top-right {}", at(3, 0));
        assert!(at(0, 3) > 192, "bottom-left {}", at(0, 3));

        // The checkerboard is invariant under a half turn, so the result is too.
        for y in 0..4 {
            for x in 0..4 {
                let diff = (at(x, y) - at(3 - x, 3 - y)).abs();
                assert!(diff <= 1, "({x},{y}) differs by {diff}");
            }
        }
    }
}
