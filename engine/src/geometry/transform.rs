use glam::{Affine2, Vec2};

/// Affine mapping from a sprite's local space into world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    matrix: Affine2,
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        matrix: Affine2::IDENTITY,
    };

    /// Builds the transform of a sprite placed at `position`, rotated by
    /// `rotation` degrees around its local `origin`.
    pub fn from_position_rotation_origin(position: Vec2, rotation: f32, origin: Vec2) -> Self {
        let matrix = Affine2::from_translation(position)
            * Affine2::from_angle(rotation.to_radians())
            * Affine2::from_translation(-origin);
        Transform { matrix }
    }

    pub fn transform_point(&self, local: Vec2) -> Vec2 {
        self.matrix.transform_point2(local)
    }

    pub fn inverse_transform_point(&self, world: Vec2) -> Vec2 {
        self.inverse().transform_point(world)
    }

    pub fn inverse(&self) -> Transform {
        Transform {
            matrix: self.matrix.inverse(),
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Transform::IDENTITY
    }
}
