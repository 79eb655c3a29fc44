//! Headless демо героя
//!
//! Спавнит героя, раз в пару секунд "кликает" в случайную точку карты
//! (иногда мимо земли, по рынку) и гоняет 1000 frames без рендера.

use bevy::prelude::*;
use rand::Rng;

use hero_locomotion::{
    create_headless_app, hero_bundle, log_error, log_info, DeterministicRng, LocomotionConfig,
    LocomotionController, PickEvent, SimulationPlugin,
};

/// Радиус кликов вокруг центра карты (успевает добежать за PICK_INTERVAL)
const PICK_RADIUS: f32 = 8.0;
/// Как часто кликаем (frames)
const PICK_INTERVAL: usize = 150;

fn main() {
    let seed = 42;
    let mut app = create_headless_app(seed);
    log_info(&format!("Starting hero locomotion headless demo (seed: {})", seed));
    app.add_plugins(SimulationPlugin);

    let config = app.world().resource::<LocomotionConfig>().clone();
    let bundle = match hero_bundle(Vec3::ZERO, &config) {
        Ok(bundle) => bundle,
        Err(error) => {
            log_error(&format!("Invalid locomotion config: {}", error));
            return;
        }
    };
    let hero = app.world_mut().spawn(bundle).id();

    for tick in 0..1000 {
        if tick % PICK_INTERVAL == 0 {
            let pick = random_pick(&mut app, &config.ground_id);
            app.world_mut().send_event(pick);
        }

        app.update();

        if tick % 100 == 0 {
            if let Some(controller) = app.world().get::<LocomotionController>(hero) {
                log_info(&format!(
                    "Tick {}: {} at {:?}, distance {:.2}",
                    tick,
                    controller.state().as_str(),
                    controller.position(),
                    controller.distance_to_target()
                ));
            }
        }
    }

    log_info("Demo complete!");
}

/// Клик по земле рядом с центром; примерно каждый четвёртый по рынку (игнорируется)
fn random_pick(app: &mut App, ground_id: &str) -> PickEvent {
    let mut rng = app.world_mut().resource_mut::<DeterministicRng>();
    let point = Vec3::new(
        rng.rng.gen_range(-PICK_RADIUS..PICK_RADIUS),
        0.0,
        rng.rng.gen_range(-PICK_RADIUS..PICK_RADIUS),
    );

    if rng.rng.gen_bool(0.25) {
        PickEvent::at("market", point)
    } else {
        PickEvent::at(ground_id, point)
    }
}
