pub mod r#trait;
pub use r#trait::{HostEvent, WindowEngine};

pub mod glfw_window_engine;
pub use self::glfw_window_engine::GlfwWindowEngine;

#[cfg(any(test, feature = "test_helpers"))]
pub mod headless;
#[cfg(any(test, feature = "test_helpers"))]
pub use self::headless::HeadlessWindowEngine;
