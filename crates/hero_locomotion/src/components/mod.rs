//! ECS данные героя
//!
//! Организация:
//! - pose: позиция + ориентация актора (ActorPose)
//! - state: состояние передвижения (LocomotionState)
//! - hero: marker для click-to-move героя (Hero)

pub mod pose;
pub mod state;
pub mod hero;

// Re-exports для удобного импорта
pub use pose::*;
pub use state::*;
pub use hero::*;
