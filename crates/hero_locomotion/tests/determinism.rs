//! Тесты детерминизма
//!
//! Одинаковый seed → одинаковые клики → идентичные позы героя

use bevy::prelude::*;
use rand::Rng;
use hero_locomotion::{
    create_headless_app, hero_bundle, world_snapshot, DeterministicRng, LocomotionConfig,
    LocomotionController, PickEvent, SimulationPlugin,
};

#[test]
fn test_determinism_same_seed() {
    const SEED: u64 = 12345;
    const TICK_COUNT: usize = 1000;

    // Первый прогон
    let snapshot1 = run_simulation(SEED, TICK_COUNT);

    // Второй прогон с тем же seed
    let snapshot2 = run_simulation(SEED, TICK_COUNT);

    // Снепшоты должны быть идентичны
    assert_eq!(
        snapshot1, snapshot2,
        "Симуляция с одинаковым seed ({}) дала разные результаты!",
        SEED
    );
}

#[test]
fn test_determinism_multiple_runs() {
    const SEED: u64 = 42;
    const TICK_COUNT: usize = 600;

    // Запускаем 5 раз, все должны быть идентичны
    let snapshots: Vec<_> = (0..5)
        .map(|_| run_simulation(SEED, TICK_COUNT))
        .collect();

    for (i, snapshot) in snapshots.iter().enumerate().skip(1) {
        assert_eq!(
            snapshots[0], *snapshot,
            "Прогон {} дал результат отличный от прогона 0",
            i
        );
    }
}

#[test]
fn test_different_seeds_diverge() {
    let snapshot1 = run_simulation(1, 300);
    let snapshot2 = run_simulation(2, 300);

    assert_ne!(snapshot1, snapshot2);
}

/// Запускает симуляцию со случайными кликами и возвращает snapshot контроллеров
fn run_simulation(seed: u64, tick_count: usize) -> Vec<u8> {
    let mut app = create_headless_app(seed);
    app.add_plugins(SimulationPlugin);

    let config = app.world().resource::<LocomotionConfig>().clone();
    let bundle = hero_bundle(Vec3::ZERO, &config).unwrap();
    app.world_mut().spawn(bundle);

    for tick in 0..tick_count {
        // Клик каждые 50 frames, каждый пятый мимо земли
        if tick % 50 == 0 {
            let mut rng = app.world_mut().resource_mut::<DeterministicRng>();
            let point = Vec3::new(rng.rng.gen_range(-20.0..20.0), 0.0, rng.rng.gen_range(-20.0..20.0));
            let surface = if rng.rng.gen_range(0..5) == 0 { "tree" } else { "ground" };
            app.world_mut().send_event(PickEvent::at(surface, point));
        }

        app.update();
    }

    world_snapshot::<LocomotionController>(app.world_mut())
}
