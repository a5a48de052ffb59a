pub mod scene;
pub mod sprites;
pub mod texture;

use std::fmt;

#[derive(Debug)]
pub enum LoadError {
    IoError(std::io::Error),
    JsonError(serde_json::error::Error),
    ImageError(image::ImageError),
    UnknownFrame { sheet: String, index: usize },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::IoError(e) => write!(f, "io error: {}", e),
            LoadError::JsonError(e) => write!(f, "json error: {}", e),
            LoadError::ImageError(e) => write!(f, "image error: {}", e),
            LoadError::UnknownFrame { sheet, index } => {
                write!(f, "sprite sheet {} has no frame {}", sheet, index)
            }
        }
    }
}

impl std::error::Error for LoadError {}
