mod config;

use std::path::PathBuf;

use config::{CollisionMode, ProgramConfig};
use engine::{
    collision::{compute_aabb, oriented_overlap, pixel_overlap},
    graphics::scene::{load_scene, NamedSprite},
};
use itertools::Itertools;

fn init_logging() {
    if let Err(e) = simple_logger::SimpleLogger::new().init() {
        eprintln!("could not initialize logging: {}", e);
    }
}

fn init_config() -> ProgramConfig {
    let mut config = ProgramConfig::from_file(&PathBuf::from("config.ini"));

    let args: Vec<String> = std::env::args().collect();
    if args.len() > 2 && args[1] == "--scene" {
        config.scene_path = PathBuf::from(&args[2]);
    }

    log::set_max_level(config.log_level);
    config
}

fn collides(lhs: &NamedSprite, rhs: &NamedSprite, mode: CollisionMode, alpha_threshold: u8) -> bool {
    match mode {
        CollisionMode::Aabb => compute_aabb(&lhs.sprite).intersects(&compute_aabb(&rhs.sprite)),
        CollisionMode::Oriented => oriented_overlap(&lhs.sprite, &rhs.sprite),
        CollisionMode::Pixel => pixel_overlap(&lhs.sprite, &rhs.sprite, alpha_threshold),
    }
}

/// Names of every unordered pair of sprites that collide.
fn colliding_pairs(
    sprites: &[NamedSprite],
    mode: CollisionMode,
    alpha_threshold: u8,
) -> Vec<(&str, &str)> {
    sprites
        .iter()
        .tuple_combinations()
        .filter(|(lhs, rhs)| collides(lhs, rhs, mode, alpha_threshold))
        .map(|(lhs, rhs)| (lhs.name.as_str(), rhs.name.as_str()))
        .collect()
}

fn main() {
    /* Initialize */
    init_logging();
    let mut config = init_config();

    let scene = match load_scene(&config.scene_path) {
        Ok(scene) => scene,
        Err(e) => {
            log::error!("Could not load {}: {}", config.scene_path.display(), e);
            std::process::exit(1);
        }
    };

    /* Query */
    log::info!(
        "Testing {} sprites in {} mode (alpha threshold {})",
        scene.sprites.len(),
        config.mode,
        config.alpha_threshold
    );
    let pairs = colliding_pairs(&scene.sprites, config.mode, config.alpha_threshold);
    for (lhs, rhs) in &pairs {
        println!("{} <-> {}", lhs, rhs);
    }
    log::info!("{} colliding pairs", pairs.len());

    if let Err(e) = config.write_to_disk() {
        log::warn!("Could not save config: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use engine::graphics::{sprites::Sprite, texture::Texture};
    use image::{Rgba, RgbaImage};

    use super::*;

    fn named(name: &str, alpha: u8, x: f32, y: f32, rotation: f32) -> NamedSprite {
        let texture = Arc::new(Texture::from_image(RgbaImage::from_pixel(
            10,
            10,
            Rgba([255, 255, 255, alpha]),
        )));
        NamedSprite {
            name: name.to_owned(),
            sprite: Sprite::new(texture).centered().at(x, y).rotated(rotation),
        }
    }

    #[test]
    fn pairs_depend_on_mode() {
        let sprites = vec![
            named("diamond", 255, 0.0, 0.0, 45.0),
            named("corner", 255, 10.0, 10.0, 0.0),
            named("ghost", 0, 1.0, 3.0, 0.0),
            named("far", 255, 100.0, 0.0, 0.0),
        ];

        let aabb = colliding_pairs(&sprites, CollisionMode::Aabb, 128);
        let oriented = colliding_pairs(&sprites, CollisionMode::Oriented, 128);
        let pixel = colliding_pairs(&sprites, CollisionMode::Pixel, 128);

        assert_eq!(
            aabb,
            vec![("diamond", "corner"), ("diamond", "ghost"), ("corner", "ghost")]
        );
        assert_eq!(oriented, vec![("diamond", "ghost"), ("corner", "ghost")]);
        assert!(pixel.is_empty());
    }

    #[test]
    fn zero_threshold_pixel_mode_matches_boxes() {
        let sprites = vec![
            named("a", 0, 0.0, 0.0, 0.0),
            named("b", 0, 5.0, 5.0, 30.0),
            named("c", 0, 50.0, 50.0, 0.0),
        ];

        assert_eq!(
            colliding_pairs(&sprites, CollisionMode::Pixel, 0),
            colliding_pairs(&sprites, CollisionMode::Aabb, 0)
        );
    }
}
