pub mod simulator;
pub use simulator::Simulator;
// Renderer engine
pub mod renderer_engine;
pub use renderer_engine::{Canvas, Surface};
// Physic engine
pub mod physic_engine;
pub use physic_engine::Registry;
// Spawn scheduler (timers, clic)
pub mod spawn_scheduler;
pub use spawn_scheduler::{SpawnCommand, SpawnScheduler};
// Window engine
pub mod window_engine;

// Profiler
pub mod profiler;
// Utilities
pub mod utils;
