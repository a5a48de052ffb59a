use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::Arc,
};

use serde::{Deserialize, Serialize};

use crate::geometry::{rect, Rect};

use super::{
    sprites::{aseprite_sprite_sheet_frames, load_aseprite_sprite_sheet, Sprite},
    texture::Texture,
    LoadError,
};

/// On-disk description of a set of sprites.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SceneDescription {
    pub sprites: Vec<SpriteDescription>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpriteDescription {
    pub name: String,
    pub texture: PathBuf,
    /// Aseprite sheet providing the source rect through `frame`.
    #[serde(default)]
    pub sheet: Option<PathBuf>,
    #[serde(default)]
    pub frame: usize,
    /// Explicit `[x, y, w, h]` source rect, used when there is no sheet.
    #[serde(default)]
    pub source_rect: Option<[f32; 4]>,
    #[serde(default)]
    pub position: [f32; 2],
    #[serde(default)]
    pub rotation: f32,
    #[serde(default)]
    pub origin: Option<[f32; 2]>,
    /// Rotate about the middle of the source rect. Ignored when `origin` is set.
    #[serde(default)]
    pub centered: bool,
}

#[derive(Debug, Clone)]
pub struct NamedSprite {
    pub name: String,
    pub sprite: Sprite,
}

#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub sprites: Vec<NamedSprite>,
}

pub fn load_scene_description(path: &Path) -> Result<SceneDescription, LoadError> {
    let file = std::fs::File::open(path).map_err(|e| LoadError::IoError(e))?;
    serde_json::from_reader(file).map_err(|e| LoadError::JsonError(e))
}

/// Loads a scene file. Texture and sheet paths are relative to the scene file.
pub fn load_scene(path: &Path) -> Result<Scene, LoadError> {
    let description = load_scene_description(path)?;
    let base_dir = path.parent().unwrap_or(Path::new("."));
    let scene = build_scene(&description, base_dir, |texture_path| {
        Texture::load(texture_path).map(Arc::new)
    })?;
    log::info!(
        "Loaded scene {} with {} sprites",
        path.display(),
        scene.sprites.len()
    );
    Ok(scene)
}

/// Builds the sprites of `description`, loading each distinct texture once.
pub fn build_scene<F>(
    description: &SceneDescription,
    base_dir: &Path,
    mut load_texture: F,
) -> Result<Scene, LoadError>
where
    F: FnMut(&Path) -> Result<Arc<Texture>, LoadError>,
{
    let mut textures: HashMap<PathBuf, Arc<Texture>> = HashMap::new();
    let mut sprites = Vec::with_capacity(description.sprites.len());

    for entry in &description.sprites {
        let texture_path = base_dir.join(&entry.texture);
        let texture = match textures.get(&texture_path) {
            Some(texture) => texture.clone(),
            None => {
                let texture = load_texture(&texture_path)?;
                textures.insert(texture_path, texture.clone());
                texture
            }
        };

        let source_rect = match (&entry.sheet, entry.source_rect) {
            (Some(sheet), _) => sheet_frame(&base_dir.join(sheet), entry.frame)?,
            (None, Some([x, y, w, h])) => rect(x, y, w, h),
            (None, None) => rect(0.0, 0.0, texture.width() as f32, texture.height() as f32),
        };

        let mut sprite = Sprite::with_source_rect(texture, source_rect)
            .at(entry.position[0], entry.position[1])
            .rotated(entry.rotation);
        sprite = match entry.origin {
            Some([x, y]) => sprite.with_origin(x, y),
            None if entry.centered => sprite.centered(),
            None => sprite,
        };

        log::debug!("Sprite '{}' uses source rect {:?}", entry.name, source_rect);
        sprites.push(NamedSprite {
            name: entry.name.clone(),
            sprite,
        });
    }

    Ok(Scene { sprites })
}

fn sheet_frame(sheet_path: &Path, index: usize) -> Result<Rect, LoadError> {
    let sheet = load_aseprite_sprite_sheet(sheet_path)?;
    aseprite_sprite_sheet_frames(&sheet)
        .get(index)
        .copied()
        .ok_or_else(|| LoadError::UnknownFrame {
            sheet: sheet_path.display().to_string(),
            index,
        })
}
