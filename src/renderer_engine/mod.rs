pub mod r#trait;
pub use r#trait::Surface;

pub mod color;
pub use self::color::{Color, Hsl};

pub mod canvas;
pub use self::canvas::Canvas;

pub mod config;
pub use self::config::RendererConfig;

pub mod presenter;
pub use self::presenter::CanvasPresenter;

pub mod shader;

pub mod tools;
pub use self::tools::show_opengl_context_info;

#[cfg(any(test, feature = "test_helpers"))]
pub mod recording;
