pub mod command;
pub use self::command::{SpawnCommand, SpawnQueue, SpawnSender};

pub mod interval;
pub use self::interval::IntervalTimer;

pub mod scheduler;
pub use self::scheduler::SpawnScheduler;
