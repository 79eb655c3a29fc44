//! Spawn героя с контроллером и sinks

use bevy::prelude::*;

use super::config::{ConfigError, LocomotionConfig};
use super::controller::LocomotionController;
use super::sinks::ClipPlayer;
use crate::components::{ActorPose, Hero};

/// Полный набор компонентов героя
///
/// ClipPlayer сразу знает idle/run клипы, Transform стоит в spawn точке
/// контроллера.
pub fn hero_bundle(
    spawn_position: Vec3,
    config: &LocomotionConfig,
) -> Result<(Hero, LocomotionController, ClipPlayer, Transform), ConfigError> {
    let controller =
        LocomotionController::try_new(ActorPose::from_position(spawn_position), config.clone())?;
    let clips = ClipPlayer::with_clips([config.idle_clip.clone(), config.run_clip.clone()]);
    // Позиция уже очищена контроллером (NaN → origin)
    let transform = Transform::from_translation(controller.position());

    Ok((Hero, controller, clips, transform))
}

/// Spawn героя через Commands
pub fn spawn_hero(
    commands: &mut Commands,
    spawn_position: Vec3,
    config: &LocomotionConfig,
) -> Result<Entity, ConfigError> {
    let bundle = hero_bundle(spawn_position, config)?;
    let entity = commands.spawn(bundle).id();
    crate::log_info(&format!("Hero spawned at {:?} ({:?})", spawn_position, entity));
    Ok(entity)
}
