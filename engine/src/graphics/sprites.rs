use std::{path::Path, sync::Arc};

use glam::Vec2;

use crate::{
    collision::{AlphaSource, SpriteGeometry},
    geometry::{rect, Rect, Transform},
};

use super::{texture::Texture, LoadError};

/// A rectangular view into a shared texture, placed in the world.
#[derive(Debug, Clone)]
pub struct Sprite {
    pub position: Vec2,
    /// Degrees, clockwise on screen.
    pub rotation: f32,
    /// Local point that `position` refers to and that the sprite rotates about.
    pub origin: Vec2,
    source_rect: Rect,
    texture: Arc<Texture>,
}

impl Sprite {
    /// Creates a sprite displaying the whole texture.
    pub fn new(texture: Arc<Texture>) -> Self {
        let source_rect = rect(0.0, 0.0, texture.width() as f32, texture.height() as f32);
        Sprite::with_source_rect(texture, source_rect)
    }

    pub fn with_source_rect(texture: Arc<Texture>, source_rect: Rect) -> Self {
        Sprite {
            position: Vec2::ZERO,
            rotation: 0.0,
            origin: Vec2::ZERO,
            source_rect,
            texture,
        }
    }

    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.position = Vec2::new(x, y);
        self
    }

    pub fn rotated(mut self, degrees: f32) -> Self {
        self.rotation = degrees;
        self
    }

    pub fn with_origin(mut self, x: f32, y: f32) -> Self {
        self.origin = Vec2::new(x, y);
        self
    }

    /// Moves the origin to the middle of the source rect.
    pub fn centered(self) -> Self {
        let half = self.source_rect.size() / 2.0;
        self.with_origin(half.x, half.y)
    }

    pub fn texture(&self) -> &Arc<Texture> {
        &self.texture
    }
}

impl SpriteGeometry for Sprite {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn rotation(&self) -> f32 {
        self.rotation
    }

    fn source_rect(&self) -> Rect {
        self.source_rect
    }

    fn transform(&self) -> Transform {
        Transform::from_position_rotation_origin(self.position, self.rotation, self.origin)
    }
}

impl AlphaSource for Sprite {
    fn alpha(&self, x: u32, y: u32) -> Option<u8> {
        if x as f32 >= self.source_rect.w || y as f32 >= self.source_rect.h {
            return None;
        }
        let texel_x = self.source_rect.x as u32 + x;
        let texel_y = self.source_rect.y as u32 + y;
        self.texture.alpha(texel_x, texel_y)
    }
}

pub fn load_aseprite_sprite_sheet(
    json_path: &Path,
) -> Result<aseprite::SpritesheetData, LoadError> {
    let json_file = std::fs::File::open(json_path).map_err(|e| LoadError::IoError(e))?;
    serde_json::from_reader(json_file).map_err(|e| LoadError::JsonError(e))
}

pub fn aseprite_sprite_sheet_frames(sprite_sheet_data: &aseprite::SpritesheetData) -> Vec<Rect> {
    sprite_sheet_data
        .frames
        .iter()
        .map(|frame| Rect {
            x: frame.frame.x as f32,
            y: frame.frame.y as f32,
            w: frame.frame.w as f32,
            h: frame.frame.h as f32,
        })
        .collect()
}
