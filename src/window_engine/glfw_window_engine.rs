use super::r#trait::{HostEvent, WindowEngine};
use anyhow::{anyhow, Result};
use glfw::{Action, Context, Key, MouseButton};
use log::{error, info};

use crate::renderer_engine::tools::{setup_opengl_debug, show_opengl_context_info};
use crate::renderer_engine::{Canvas, CanvasPresenter};

pub type WindowEvents = glfw::GlfwReceiver<(f64, glfw::WindowEvent)>;

pub struct GlfwWindowEngine {
    glfw: glfw::Glfw,
    window: glfw::PWindow,
    events: WindowEvents,
    presenter: CanvasPresenter,
}

impl WindowEngine for GlfwWindowEngine {
    fn init(width: u32, height: u32, title: &str) -> Result<Self> {
        let mut glfw = glfw::init(glfw::fail_on_errors)
            .map_err(|_| anyhow!("Impossible d'initialiser GLFW"))?;

        glfw.window_hint(glfw::WindowHint::ContextVersionMajor(3));
        glfw.window_hint(glfw::WindowHint::ContextVersionMinor(3));
        glfw.window_hint(glfw::WindowHint::OpenGlProfile(
            glfw::OpenGlProfileHint::Core,
        ));
        glfw.window_hint(glfw::WindowHint::OpenGlForwardCompat(true));

        let (mut window, events) = glfw
            .create_window(width, height, title, glfw::WindowMode::Windowed)
            .ok_or_else(|| anyhow!("Erreur création fenêtre GLFW"))?;

        window.make_current();
        window.set_key_polling(true);
        window.set_size_polling(true);
        window.set_mouse_button_polling(true);
        window.set_close_polling(true);

        // une itération de la boucle par rafraîchissement de l'écran
        glfw.set_swap_interval(glfw::SwapInterval::Sync(1));

        info!("✅ OpenGL context ready for '{}'", title);

        // load OpenGL function pointers
        gl::load_with(|s| window.get_proc_address(s) as *const _);

        let presenter = unsafe {
            show_opengl_context_info();
            setup_opengl_debug();
            CanvasPresenter::new()?
        };

        Ok(Self {
            glfw,
            window,
            events,
            presenter,
        })
    }

    fn poll_events(&mut self) -> Vec<HostEvent> {
        self.glfw.poll_events();

        glfw::flush_messages(&self.events)
            .filter_map(|(_, event)| match event {
                glfw::WindowEvent::Size(w, h) => {
                    Some(HostEvent::Resized(w.max(0) as u32, h.max(0) as u32))
                }
                glfw::WindowEvent::MouseButton(MouseButton::Button1, Action::Press, _) => {
                    let (x, y) = self.window.get_cursor_pos();
                    Some(HostEvent::PointerDown(x, y))
                }
                glfw::WindowEvent::Key(Key::Escape, _, Action::Press, _)
                | glfw::WindowEvent::Close => Some(HostEvent::CloseRequested),
                _ => None,
            })
            .collect()
    }

    fn present(&mut self, canvas: &Canvas) {
        let viewport = self.window.get_framebuffer_size();
        unsafe {
            self.presenter.present(canvas, viewport);
        }
        self.window.swap_buffers();
    }

    fn should_close(&self) -> bool {
        self.window.should_close()
    }

    fn set_should_close(&mut self, value: bool) {
        self.window.set_should_close(value);
    }

    fn get_size(&self) -> (u32, u32) {
        let (w, h) = self.window.get_size();
        (w.max(0) as u32, h.max(0) as u32)
    }

    fn close(&mut self) {
        self.window.make_current();
        unsafe {
            self.presenter.close();
        }
        let err = unsafe { gl::GetError() };
        if err != gl::NO_ERROR {
            error!("OpenGL error on close: 0x{:X}", err);
        }
        info!("🪟 Window engine closed.");
    }
}
