//! Hero marker component
//!
//! Отмечает entity, которым игрок управляет кликами по земле.

use bevy::prelude::*;

use crate::locomotion::ClipPlayer;

/// Marker component для click-to-move героя
///
/// Автоматически добавляет Transform (transform sink) и ClipPlayer
/// (animation sink) через Required Components. LocomotionController
/// вешается отдельно, ему нужны spawn позиция и конфиг.
///
/// # Single-player
/// Multi-actor координации нет: pick применяется ко всем контроллерам,
/// на практике он один.
#[derive(Component, Debug, Clone, Copy, Default)]
#[require(Transform, ClipPlayer)]
pub struct Hero;
