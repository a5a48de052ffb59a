use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};

use configparser::ini::Ini;
use log::LevelFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionMode {
    Aabb,
    Oriented,
    Pixel,
}

impl FromStr for CollisionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "aabb" => Ok(CollisionMode::Aabb),
            "oriented" => Ok(CollisionMode::Oriented),
            "pixel" => Ok(CollisionMode::Pixel),
            other => Err(format!("unknown collision mode '{}'", other)),
        }
    }
}

impl fmt::Display for CollisionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CollisionMode::Aabb => "aabb",
            CollisionMode::Oriented => "oriented",
            CollisionMode::Pixel => "pixel",
        };
        write!(f, "{}", name)
    }
}

pub struct ProgramConfig {
    pub scene_path: PathBuf,
    pub alpha_threshold: u8,
    pub mode: CollisionMode,
    pub log_level: LevelFilter,
    config: Ini,
    path: PathBuf,
}

const DEFAULT_SCENE: &str = "scene.json";
const DEFAULT_ALPHA_THRESHOLD: u8 = 128;

impl ProgramConfig {
    pub fn from_file(path: &Path) -> Self {
        let mut config = Ini::new();
        if !path.exists() {
            return ProgramConfig::with_defaults(config, path);
        }
        if let Err(e) = config.load(path) {
            log::warn!("Could not parse {}: {}", path.display(), e);
            return ProgramConfig::with_defaults(Ini::new(), path);
        }
        ProgramConfig::from_ini(config, path)
    }

    fn with_defaults(config: Ini, path: &Path) -> Self {
        ProgramConfig {
            scene_path: PathBuf::from(DEFAULT_SCENE),
            alpha_threshold: DEFAULT_ALPHA_THRESHOLD,
            mode: CollisionMode::Pixel,
            log_level: LevelFilter::Info,
            config,
            path: PathBuf::from(path),
        }
    }

    fn from_ini(config: Ini, path: &Path) -> Self {
        let scene_path = config
            .get("Scene", "Path")
            .map(PathBuf::from)
            .unwrap_or(PathBuf::from(DEFAULT_SCENE));
        let alpha_threshold = match config.getint("Collision", "AlphaThreshold") {
            Ok(value) => value
                .map(engine::collision::alpha_threshold_from)
                .unwrap_or(DEFAULT_ALPHA_THRESHOLD),
            Err(e) => {
                log::warn!("Invalid alpha threshold: {}", e);
                DEFAULT_ALPHA_THRESHOLD
            }
        };
        let mode = config
            .get("Collision", "Mode")
            .map(|mode| {
                mode.parse().unwrap_or_else(|e| {
                    log::warn!("{}, using pixel mode", e);
                    CollisionMode::Pixel
                })
            })
            .unwrap_or(CollisionMode::Pixel);
        let log_level = config
            .get("Logging", "Level")
            .and_then(|level| level.parse().ok())
            .unwrap_or(LevelFilter::Info);

        ProgramConfig {
            scene_path,
            alpha_threshold,
            mode,
            log_level,
            config,
            path: PathBuf::from(path),
        }
    }

    pub fn write_to_disk(&mut self) -> std::io::Result<()> {
        self.config.set(
            "Scene",
            "Path",
            Some(self.scene_path.display().to_string()),
        );
        self.config.set(
            "Collision",
            "AlphaThreshold",
            Some(self.alpha_threshold.to_string()),
        );
        self.config
            .set("Collision", "Mode", Some(self.mode.to_string()));
        self.config
            .set("Logging", "Level", Some(self.log_level.to_string()));
        self.config.write(&self.path)
    }
}
