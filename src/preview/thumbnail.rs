use image::DynamicImage;

/// Small RGB copy of an image for terminal rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 3]>,
}

impl Thumbnail {
    /// Downscale `image` to fit within `max_width` x `max_height`,
    /// preserving the aspect ratio. Smaller images are kept as they are.
    pub fn from_image(image: &DynamicImage, max_width: u32, max_height: u32) -> Self {
        let rgb = if image.width() <= max_width && image.height() <= max_height {
            image.to_rgb8()
        } else {
            image.thumbnail(max_width, max_height).to_rgb8()
        };
        let (width, height) = rgb.dimensions();
        let pixels = rgb.pixels().map(|p| p.0).collect();
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Size in pixels that fits a `cols` x `rows` cell area, where every
    /// cell shows two vertically stacked pixels.
    pub fn fit(&self, cols: u16, rows: u16) -> (u32, u32) {
        if self.width == 0 || self.height == 0 || cols == 0 || rows == 0 {
            return (0, 0);
        }
        let max_w = cols as f64;
        let max_h = rows as f64 * 2.0;
        let scale = (max_w / self.width as f64).min(max_h / self.height as f64);
        let w = ((self.width as f64 * scale).floor() as u32).max(1);
        let h = ((self.height as f64 * scale).floor() as u32).max(1);
        (w, h)
    }

    /// Nearest-neighbour sample at (`x`, `y`) of a `target_w` x `target_h`
    /// rendition.
    pub fn sample(&self, x: u32, y: u32, target_w: u32, target_h: u32) -> Option<[u8; 3]> {
        if target_w == 0 || target_h == 0 || x >= target_w || y >= target_h {
            return None;
        }
        let src_x = (x as u64 * self.width as u64 / target_w as u64) as u32;
        let src_y = (y as u64 * self.height as u64 / target_h as u64) as u32;
        self.pixels
            .get((src_y * self.width + src_x) as usize)
            .copied()
    }
}
