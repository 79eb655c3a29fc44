//! Состояние передвижения

use bevy::prelude::*;

/// Состояние локомоции героя
///
/// Не задаётся снаружи напрямую, выводится каждый frame из distance-to-target
/// vs arrival threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
pub enum LocomotionState {
    /// Стоим на цели, играет idle клип
    #[default]
    Idle,
    /// Бежим к цели, играет run клип
    Moving,
}

impl LocomotionState {
    pub fn is_moving(&self) -> bool {
        matches!(self, LocomotionState::Moving)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LocomotionState::Idle => "Idle",
            LocomotionState::Moving => "Moving",
        }
    }
}
