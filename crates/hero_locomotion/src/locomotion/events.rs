//! Locomotion events

use bevy::prelude::*;

use crate::components::LocomotionState;

/// Event: пользователь кликнул по pickable поверхности
///
/// Генерируется:
/// - input glue (pointer pick движка): имя меша + точка попадания
///
/// Обрабатывается:
/// - apply_pick_events: буферизуется Bevy Events и применяется ДО advance,
///   так что внутри одного frame цель стабильна
#[derive(Event, Debug, Clone, PartialEq)]
pub struct PickEvent {
    /// Имя (identity) кликнутой поверхности
    pub surface_id: String,
    /// Точка попадания в world space (None если pick без точки)
    pub world_point: Option<Vec3>,
}

impl PickEvent {
    pub fn new(surface_id: impl Into<String>, world_point: Option<Vec3>) -> Self {
        Self {
            surface_id: surface_id.into(),
            world_point,
        }
    }

    /// Клик с точкой попадания
    pub fn at(surface_id: impl Into<String>, point: Vec3) -> Self {
        Self::new(surface_id, Some(point))
    }
}

/// Event: смена состояния локомоции (Idle ↔ Moving)
///
/// Отправляется только на ПЕРЕХОДЕ, не каждый frame,
/// glue подписывается без спама (звук шагов, UI, маркер цели).
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct LocomotionStateChanged {
    pub entity: Entity,
    pub from: LocomotionState,
    pub to: LocomotionState,
}
