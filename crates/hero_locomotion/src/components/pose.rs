//! Поза актора: позиция + ориентация

use bevy::prelude::*;

/// Поза актора в world space
///
/// Инвариант: `rotation` это конечный unit quaternion.
/// Мутируется только контроллером внутри per-frame шага.
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct ActorPose {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Default for ActorPose {
    fn default() -> Self {
        Self::from_position(Vec3::ZERO)
    }
}

impl ActorPose {
    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    /// Spawn поза: identity ориентация (как у героя после загрузки модели)
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            rotation: Quat::IDENTITY,
        }
    }

    pub fn distance_to(&self, point: Vec3) -> f32 {
        self.position.distance(point)
    }
}
