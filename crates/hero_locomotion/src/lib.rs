//! Hero Locomotion Core
//!
//! Click-to-move контроллер героя, вынесенный из демо-сцены отдельно от движка.
//! Клик по земле → цель, каждый frame → доворот (slerp), Idle/Run клипы,
//! приближение к цели.
//!
//! Слои:
//! - locomotion::LocomotionController: чистая логика, без ECS и рендера
//! - LocomotionPlugin: Bevy wiring (PickEvent → контроллер → Transform/ClipPlayer)
//! - glue движка (сцена, камера, загрузка модели): вне этого crate

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Duration;

// Публичные модули
pub mod components;
pub mod locomotion;
pub mod logger;

// Re-export базовых типов для удобства
pub use components::*;
pub use locomotion::{
    hero_bundle, spawn_hero, AnimationSink, ApproachMode, ClipPlayer, ConfigError,
    LocomotionConfig, LocomotionController, LocomotionPlugin, LocomotionSet,
    LocomotionStateChanged, ModelForward, PickEvent, TransformSink,
};
pub use logger::{init_logger, log, log_error, log_info, log_warning};

/// Шаг времени headless frame (60 FPS)
pub const HEADLESS_FRAME_SECONDS: f32 = 1.0 / 60.0;

/// Главный plugin симуляции (объединяет все подсистемы)
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(LocomotionPlugin);
    }
}

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Создаёт minimal Bevy App для headless симуляции
///
/// Рендер-цикла нет, поэтому frame delta фиксированная (HEADLESS_FRAME_SECONDS)
/// вместо wall clock, прогоны воспроизводимы. Первый update, как и в Bevy,
/// идёт с нулевой delta.
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed))
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f32(
            HEADLESS_FRAME_SECONDS,
        )));

    app
}

/// Snapshot мира для сравнения детерминизма
///
/// Компоненты сериализуются через Debug в порядке Entity index.
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    // Сортируем по Entity ID для детерминизма
    entities.sort_by_key(|(entity, _)| entity.index());

    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}
