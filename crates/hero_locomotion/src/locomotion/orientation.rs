//! Ориентация: look rotation + guarded slerp
//!
//! Около нулевого вектора нормализация даёт NaN, а NaN в ориентации
//! интегрируется каждый frame и уже не лечится. Поэтому все функции здесь
//! возвращают Option / старое значение вместо деградировавшего quaternion.

use bevy::prelude::*;

use super::config::ModelForward;

/// Направления короче этого считаем нулевыми (актор стоит на цели)
pub const DIRECTION_EPSILON: f32 = 1e-4;

/// Допуск на |q| - 1 после интерполяции
const UNIT_QUAT_TOLERANCE: f32 = 1e-3;

/// Interpolation factor `rate * dt`, зажатый в [0, 1]
///
/// NaN (например 0 * inf) превращается в 0.
pub fn interpolation_factor(rate: f32, delta_seconds: f32) -> f32 {
    let factor = rate * delta_seconds;
    if factor.is_nan() {
        return 0.0;
    }
    factor.clamp(0.0, 1.0)
}

/// Rotation, разворачивающий модель лицом по `direction`
///
/// `None` если direction короче DIRECTION_EPSILON, не конечный,
/// или (анти)параллелен up оси, во всех этих случаях look rotation
/// не определён и caller оставляет предыдущую ориентацию.
pub fn facing_rotation(direction: Vec3, up: Vec3, forward: ModelForward) -> Option<Quat> {
    if !direction.is_finite() || direction.length() < DIRECTION_EPSILON {
        return None;
    }
    let direction = direction.normalize();
    let up = up.try_normalize()?;

    // Local ось модели, которая должна смотреть на цель
    let local_z = match forward {
        ModelForward::PositiveZ => direction,
        ModelForward::NegativeZ => -direction,
    };

    let right = up.cross(local_z);
    if right.length() < DIRECTION_EPSILON {
        return None;
    }
    let right = right.normalize();
    let local_up = local_z.cross(right);

    let rotation = Quat::from_mat3(&Mat3::from_cols(right, local_up, local_z)).normalize();
    rotation.is_finite().then_some(rotation)
}

/// Slerp `current → target` с factor, зажатым в [0, 1]
///
/// Factor 0 возвращает `current` бит-в-бит. Результат нормализуется;
/// если slerp всё же выдал NaN, остаёмся на `current`.
pub fn slerp_towards(current: Quat, target: Quat, factor: f32) -> Quat {
    let factor = if factor.is_nan() { 0.0 } else { factor.clamp(0.0, 1.0) };
    if factor <= 0.0 {
        return current;
    }

    let rotated = current.slerp(target, factor);
    if !rotated.is_finite() || rotated.length_squared() < f32::EPSILON {
        return current;
    }
    rotated.normalize()
}

/// |q| в пределах UNIT_QUAT_TOLERANCE от 1 и все компоненты конечные
pub(crate) fn is_unit_quat(rotation: Quat) -> bool {
    rotation.is_finite() && (rotation.length() - 1.0).abs() <= UNIT_QUAT_TOLERANCE
}
