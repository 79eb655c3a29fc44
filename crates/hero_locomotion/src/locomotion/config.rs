//! Конфиг click-to-move контроллера
//!
//! Defaults взяты из сцены героя: speed 4, rotation lerp 40,
//! arrival threshold = speed * 0.01, ground mesh "ground", клипы "Idle"/"Run".

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Скорость бега по умолчанию (units/sec)
pub const DEFAULT_MOVE_SPEED: f32 = 4.0;
/// Скорость доворота по умолчанию (slerp factor per second)
pub const DEFAULT_ROTATION_LERP_SPEED: f32 = 40.0;
/// arrival_threshold = move_speed * ARRIVAL_THRESHOLD_FACTOR
pub const ARRIVAL_THRESHOLD_FACTOR: f32 = 0.01;

pub const DEFAULT_GROUND_ID: &str = "ground";
pub const DEFAULT_IDLE_CLIP: &str = "Idle";
pub const DEFAULT_RUN_CLIP: &str = "Run";

/// Куда смотрит модель в своём local space
///
/// Импортированный glTF герой смотрит в +Z (left-handed look rotation),
/// нативная конвенция Bevy: -Z.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Reflect)]
pub enum ModelForward {
    #[default]
    PositiveZ,
    NegativeZ,
}

/// Как позиция приближается к цели
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Reflect)]
pub enum ApproachMode {
    /// Ease (lerp к цели) + шаг фиксированной скорости, смещение за frame
    /// не превышает оставшуюся дистанцию
    #[default]
    Clamped,
    /// Ease + шаг складываются как есть. Может перелететь цель,
    /// при больших dt актор осциллирует вокруг неё
    Blended,
}

/// Параметры контроллера
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize, Reflect)]
#[serde(default)]
pub struct LocomotionConfig {
    /// Имя surface, клики по которой считаются навигацией
    pub ground_id: String,
    pub idle_clip: String,
    pub run_clip: String,
    /// Скорость движения (units/sec)
    pub move_speed: f32,
    /// Множитель slerp factor (factor = speed * dt, clamp [0, 1])
    pub rotation_lerp_speed: f32,
    /// Дистанция, ближе которой считаем что пришли (Idle)
    pub arrival_threshold: f32,
    /// "Up" ось актора для look rotation
    pub up: Vec3,
    pub model_forward: ModelForward,
    pub approach: ApproachMode,
}

impl Default for LocomotionConfig {
    fn default() -> Self {
        Self {
            ground_id: DEFAULT_GROUND_ID.into(),
            idle_clip: DEFAULT_IDLE_CLIP.into(),
            run_clip: DEFAULT_RUN_CLIP.into(),
            move_speed: DEFAULT_MOVE_SPEED,
            rotation_lerp_speed: DEFAULT_ROTATION_LERP_SPEED,
            arrival_threshold: DEFAULT_MOVE_SPEED * ARRIVAL_THRESHOLD_FACTOR,
            up: Vec3::Y,
            model_forward: ModelForward::default(),
            approach: ApproachMode::default(),
        }
    }
}

impl LocomotionConfig {
    /// Проверка конфига перед созданием контроллера
    ///
    /// Все скорости и threshold конечные и > 0, up ось ненулевая,
    /// имена непустые, idle и run клипы различаются.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_positive("move_speed", self.move_speed)?;
        check_positive("rotation_lerp_speed", self.rotation_lerp_speed)?;
        check_positive("arrival_threshold", self.arrival_threshold)?;

        if !self.up.is_finite() || self.up.length_squared() < f32::EPSILON {
            return Err(ConfigError::DegenerateUpAxis(self.up));
        }

        check_name("ground_id", &self.ground_id)?;
        check_name("idle_clip", &self.idle_clip)?;
        check_name("run_clip", &self.run_clip)?;

        if self.idle_clip == self.run_clip {
            return Err(ConfigError::DuplicateClip(self.idle_clip.clone()));
        }

        Ok(())
    }

    /// Клип, который должен играть в данном состоянии
    pub fn clip_for(&self, state: crate::components::LocomotionState) -> &str {
        if state.is_moving() {
            &self.run_clip
        } else {
            &self.idle_clip
        }
    }
}

fn check_positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

fn check_name(field: &'static str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        Err(ConfigError::EmptyName { field })
    } else {
        Ok(())
    }
}

/// Ошибка валидации LocomotionConfig
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Скорость/threshold не конечные или ≤ 0
    #[error("{field} must be finite and positive, got {value}")]
    NotPositive { field: &'static str, value: f32 },

    /// Up ось нулевой длины или NaN
    #[error("up axis must be a finite non-zero vector, got {0:?}")]
    DegenerateUpAxis(Vec3),

    #[error("{field} must not be empty")]
    EmptyName { field: &'static str },

    /// Idle и run указывают на один и тот же клип
    #[error("idle and run clips must differ, both are '{0}'")]
    DuplicateClip(String),
}
