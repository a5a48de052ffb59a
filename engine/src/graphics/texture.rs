use std::path::Path;

use image::RgbaImage;

use super::LoadError;

/// Immutable RGBA pixel buffer backing one or more sprites.
#[derive(Debug, Clone)]
pub struct Texture {
    image: RgbaImage,
}

impl Texture {
    pub fn from_image(image: RgbaImage) -> Self {
        Texture { image }
    }

    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let image = image::open(path)
            .map_err(|e| LoadError::ImageError(e))?
            .to_rgba8();
        log::info!(
            "Loaded texture {} ({}x{})",
            path.display(),
            image.width(),
            image.height()
        );
        Ok(Texture::from_image(image))
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Alpha value of the texel at `(x, y)`, or `None` outside the image.
    pub fn alpha(&self, x: u32, y: u32) -> Option<u8> {
        if x < self.image.width() && y < self.image.height() {
            Some(self.image.get_pixel(x, y)[3])
        } else {
            None
        }
    }
}
