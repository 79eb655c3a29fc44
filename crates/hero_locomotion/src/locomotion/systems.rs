//! Locomotion systems (Update schedule, один прогон на render tick)
//!
//! Порядок (chain):
//! 1. apply_pick_events: буфер кликов → цель контроллера
//! 2. advance_locomotion: on_frame для каждого героя
//!
//! Клики применяются на границе frame, так что math внутри on_frame
//! всегда видит стабильную цель.

use bevy::prelude::*;

use super::controller::LocomotionController;
use super::events::{LocomotionStateChanged, PickEvent};
use super::sinks::ClipPlayer;

/// Система: применить накопленные клики
///
/// Несколько кликов до frame, в силе остаётся последний принятый.
pub fn apply_pick_events(
    mut picks: EventReader<PickEvent>,
    mut controllers: Query<&mut LocomotionController>,
) {
    for pick in picks.read() {
        for mut controller in controllers.iter_mut() {
            controller.on_target_picked(&pick.surface_id, pick.world_point);
        }
    }
}

/// Система: продвинуть героев на один frame
///
/// Transform служит transform sink, ClipPlayer служит animation sink.
/// LocomotionStateChanged отправляем только на переходе.
pub fn advance_locomotion(
    time: Res<Time>,
    mut heroes: Query<(Entity, &mut LocomotionController, &mut ClipPlayer, &mut Transform)>,
    mut state_events: EventWriter<LocomotionStateChanged>,
) {
    let delta = time.delta_secs();

    for (entity, mut controller, mut clips, mut transform) in heroes.iter_mut() {
        let from = controller.state();
        let to = controller.on_frame(delta, &mut *clips, &mut *transform);

        if from != to {
            state_events.write(LocomotionStateChanged { entity, from, to });
        }
    }
}
