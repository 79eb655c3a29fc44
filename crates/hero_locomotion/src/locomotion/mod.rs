//! Locomotion domain, click-to-move героя
//!
//! Содержит:
//! - LocomotionConfig (скорости, threshold, ground filter, клипы)
//! - LocomotionController (поза, цель, Idle/Moving)
//! - AnimationSink / TransformSink (+ ClipPlayer, Transform реализации)
//! - PickEvent / LocomotionStateChanged
//! - LocomotionPlugin (Bevy wiring)

use bevy::prelude::*;

pub mod config;
pub mod controller;
pub mod events;
pub mod orientation;
pub mod sinks;
pub mod spawn;
pub mod systems;


// Re-export основных типов
pub use config::{ApproachMode, ConfigError, LocomotionConfig, ModelForward};
pub use controller::LocomotionController;
pub use events::{LocomotionStateChanged, PickEvent};
pub use sinks::{play_exclusive, AnimationSink, ClipPlayer, ClipTrack, TransformSink};
pub use spawn::{hero_bundle, spawn_hero};

/// SystemSet локомоции (для ordering из glue: input → LocomotionSet → render sync)
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocomotionSet;

/// Locomotion Plugin
///
/// Регистрирует events и системы в Update (render tick, не FixedUpdate:
/// контроллер живёт на frame delta). Порядок выполнения:
/// 1. apply_pick_events: клики за прошлый frame → цель
/// 2. advance_locomotion: поворот, состояние, клипы, позиция
///
/// LocomotionConfig вставляется дефолтный, если glue не положил свой.
pub struct LocomotionPlugin;

impl Plugin for LocomotionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LocomotionConfig>()
            .add_event::<PickEvent>()
            .add_event::<LocomotionStateChanged>()
            .add_systems(
                Update,
                (systems::apply_pick_events, systems::advance_locomotion)
                    .chain() // Клики строго до advance
                    .in_set(LocomotionSet),
            );
    }
}
