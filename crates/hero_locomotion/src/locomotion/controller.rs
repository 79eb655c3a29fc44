//! Click-to-move контроллер героя
//!
//! Владеет позой, навигационной целью и состоянием локомоции.
//! Двигается двумя вызовами:
//! - `on_target_picked`: клик по поверхности (Target Selector)
//! - `on_frame`: тик рендера (Frame Clock)
//!
//! Flow одного frame:
//! 1. direction = target - position (короче epsilon → desired rotation не трогаем)
//! 2. desired rotation = look rotation по direction вокруг up оси
//! 3. slerp текущей ориентации к desired (factor = rotation_lerp_speed * dt, clamp)
//! 4. distance < arrival_threshold → Idle + idle клип, позицию не двигаем
//! 5. иначе Moving + run клип, ease к цели + шаг move_speed * dt

use bevy::prelude::*;

use super::config::{ApproachMode, ConfigError, LocomotionConfig};
use super::orientation::{facing_rotation, interpolation_factor, is_unit_quat, slerp_towards};
use super::sinks::{play_exclusive, AnimationSink, TransformSink};
use crate::components::{ActorPose, LocomotionState};

/// Контроллер локомоции (один на героя)
///
/// Инварианты:
/// - `pose.rotation` всегда конечный unit quaternion
/// - `target` меняется только принятым ground pick'ом
/// - Idle ⇔ играет idle клип, Moving ⇔ играет run клип (остальные остановлены)
#[derive(Component, Debug, Clone)]
pub struct LocomotionController {
    config: LocomotionConfig,
    pose: ActorPose,
    /// Последняя принятая точка; до первого клика это spawn позиция
    target: Vec3,
    /// Куда хотим смотреть; остаётся прежней пока direction вырожден
    desired_rotation: Quat,
    state: LocomotionState,
}

impl LocomotionController {
    /// Контроллер с дефолтным конфигом, identity ориентация
    pub fn new(spawn_position: Vec3) -> Self {
        Self::from_parts(ActorPose::from_position(spawn_position), LocomotionConfig::default())
    }

    /// Контроллер с проверенным конфигом
    pub fn try_new(spawn_pose: ActorPose, config: LocomotionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_parts(spawn_pose, config))
    }

    fn from_parts(spawn_pose: ActorPose, config: LocomotionConfig) -> Self {
        let position = if spawn_pose.position.is_finite() {
            spawn_pose.position
        } else {
            crate::log_warning(&format!(
                "LocomotionController: non-finite spawn position {:?}, using origin",
                spawn_pose.position
            ));
            Vec3::ZERO
        };

        let rotation = if spawn_pose.rotation.is_finite()
            && spawn_pose.rotation.length_squared() > f32::EPSILON
        {
            spawn_pose.rotation.normalize()
        } else {
            Quat::IDENTITY
        };

        Self {
            config,
            pose: ActorPose::new(position, rotation),
            target: position,
            desired_rotation: rotation,
            state: LocomotionState::Idle,
        }
    }

    pub fn pose(&self) -> &ActorPose {
        &self.pose
    }

    pub fn position(&self) -> Vec3 {
        self.pose.position
    }

    pub fn rotation(&self) -> Quat {
        self.pose.rotation
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn state(&self) -> LocomotionState {
        self.state
    }

    pub fn distance_to_target(&self) -> f32 {
        self.pose.distance_to(self.target)
    }

    /// Клик по поверхности `surface_id` в точке `world_point`
    ///
    /// Принимается только клик по ground surface с конечной точкой:
    /// цель перезаписывается, desired rotation пересчитывается.
    /// Всё остальное молча игнорируется (другие меши кликабельны для
    /// своих целей). Возвращает true если цель обновлена.
    pub fn on_target_picked(&mut self, surface_id: &str, world_point: Option<Vec3>) -> bool {
        let Some(point) = world_point else {
            crate::log(&format!("Locomotion: pick on '{}' without point, ignored", surface_id));
            return false;
        };

        if surface_id != self.config.ground_id {
            crate::log(&format!("Locomotion: pick on '{}' is not ground, ignored", surface_id));
            return false;
        }

        if !point.is_finite() {
            crate::log_warning(&format!("Locomotion: non-finite pick point {:?}, ignored", point));
            return false;
        }

        self.target = point;
        self.refresh_desired_rotation();
        crate::log(&format!("🎯 Locomotion: new target {:?}", point));
        true
    }

    /// Один тик: поворот, выбор состояния, клипы, движение, запись позы
    ///
    /// `delta_seconds` < 0 или не конечный трактуется как 0 (no-op tick
    /// для позы). Возвращает состояние после тика.
    pub fn on_frame<A, T>(
        &mut self,
        delta_seconds: f32,
        animation: &mut A,
        transform: &mut T,
    ) -> LocomotionState
    where
        A: AnimationSink + ?Sized,
        T: TransformSink + ?Sized,
    {
        let dt = sanitize_delta(delta_seconds);
        let to_target = self.target - self.pose.position;
        let distance = to_target.length();
        let arrived = distance < self.config.arrival_threshold;

        // 1-2: desired rotation по текущему direction.
        // Blended может перелететь цель и встать за ней: остаток смотрит
        // назад, на него не доворачиваемся
        if !(arrived && self.config.approach == ApproachMode::Blended) {
            self.refresh_desired_rotation();
        }

        // 3: плавный доворот
        let turn = interpolation_factor(self.config.rotation_lerp_speed, dt);
        self.pose.rotation = slerp_towards(self.pose.rotation, self.desired_rotation, turn);
        debug_assert!(is_unit_quat(self.pose.rotation), "{:?}", self.pose.rotation);

        // 4-5: состояние по дистанции
        let next_state = if arrived {
            LocomotionState::Idle
        } else {
            LocomotionState::Moving
        };
        self.set_state(next_state);

        play_exclusive(
            animation,
            self.config.clip_for(next_state),
            [self.config.idle_clip.as_str(), self.config.run_clip.as_str()],
        );

        if next_state.is_moving() {
            self.advance_position(to_target, distance, dt);
        }

        transform.write_pose(&self.pose);
        self.state
    }

    fn refresh_desired_rotation(&mut self) {
        let direction = self.target - self.pose.position;
        if let Some(rotation) = facing_rotation(direction, self.config.up, self.config.model_forward) {
            self.desired_rotation = rotation;
        }
    }

    fn set_state(&mut self, next_state: LocomotionState) {
        if self.state != next_state {
            crate::log_info(&format!(
                "Locomotion: {} → {} (distance {:.3})",
                self.state.as_str(),
                next_state.as_str(),
                self.distance_to_target()
            ));
            self.state = next_state;
        }
    }

    /// Ease к цели + шаг фиксированной скорости
    ///
    /// `distance` ≥ arrival_threshold > 0, деление безопасно.
    fn advance_position(&mut self, to_target: Vec3, distance: f32, dt: f32) {
        let ease = interpolation_factor(self.config.move_speed, dt);
        if ease <= 0.0 {
            return;
        }

        let direction = to_target / distance;
        let step = self.config.move_speed * dt;

        let next_position = match self.config.approach {
            ApproachMode::Blended => self.pose.position.lerp(self.target, ease) + direction * step,
            ApproachMode::Clamped => {
                let travel = distance * ease + step;
                if travel >= distance {
                    self.target
                } else {
                    self.pose.position + direction * travel
                }
            }
        };

        if next_position.is_finite() {
            self.pose.position = next_position;
        } else {
            crate::log_warning(&format!(
                "Locomotion: non-finite position step (dt {}), frame skipped",
                dt
            ));
        }
    }
}

/// Отрицательный, NaN или бесконечный dt → 0
fn sanitize_delta(delta_seconds: f32) -> f32 {
    if delta_seconds.is_finite() && delta_seconds >= 0.0 {
        delta_seconds
    } else {
        crate::log_warning(&format!("Locomotion: invalid frame delta {}, clamped to 0", delta_seconds));
        0.0
    }
}
