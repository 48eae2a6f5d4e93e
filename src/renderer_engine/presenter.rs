use anyhow::Result;
use log::{debug, info};

use crate::cstr;
use crate::renderer_engine::{canvas::Canvas, shader::compile_program, Surface};

/// Affiche le `Canvas` CPU dans la fenêtre : upload dans une texture RGBA8
/// puis triangle plein écran (pas de VBO, sommets générés depuis `gl_VertexID`).
pub struct CanvasPresenter {
    program: u32,
    vao: u32,
    texture: u32,
    texture_size: (u32, u32),
    staging: Vec<[u8; 4]>,
}

impl CanvasPresenter {
    /// # Safety
    /// Un contexte OpenGL 3.3 core doit être courant.
    pub unsafe fn new() -> Result<Self> {
        let (vertex_src, fragment_src) = Self::src_shaders();
        let program = compile_program(vertex_src, fragment_src)?;

        let mut vao = 0;
        gl::GenVertexArrays(1, &mut vao);

        let mut texture = 0;
        gl::GenTextures(1, &mut texture);
        gl::BindTexture(gl::TEXTURE_2D, texture);
        gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_WRAP_S, gl::CLAMP_TO_EDGE as i32);
        gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_WRAP_T, gl::CLAMP_TO_EDGE as i32);
        gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_MIN_FILTER, gl::LINEAR as i32);
        gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_MAG_FILTER, gl::LINEAR as i32);
        gl::BindTexture(gl::TEXTURE_2D, 0);

        gl::UseProgram(program);
        gl::Uniform1i(gl::GetUniformLocation(program, cstr!("uCanvas")), 0);
        gl::UseProgram(0);

        info!("✅ Canvas presenter ready (program {}, texture {})", program, texture);

        Ok(Self {
            program,
            vao,
            texture,
            texture_size: (0, 0),
            staging: Vec::new(),
        })
    }

    fn src_shaders() -> (&'static str, &'static str) {
        let vertex_src = r#"
        #version 330 core
        out vec2 vUv;

        void main() {
            vec2 pos = vec2((gl_VertexID << 1) & 2, gl_VertexID & 2);
            // ligne 0 du canvas = haut de l'écran
            vUv = vec2(pos.x, 1.0 - pos.y);
            gl_Position = vec4(pos * 2.0 - 1.0, 0.0, 1.0);
        }
        "#;

        let fragment_src = r#"
        #version 330 core
        in vec2 vUv;
        out vec4 FragColor;

        uniform sampler2D uCanvas;

        void main() {
            FragColor = vec4(texture(uCanvas, vUv).rgb, 1.0);
        }
        "#;
        (vertex_src, fragment_src)
    }

    /// Upload du canvas et dessin sur tout le framebuffer `viewport`.
    ///
    /// # Safety
    /// Le contexte OpenGL utilisé à la création doit être courant.
    pub unsafe fn present(&mut self, canvas: &Canvas, viewport: (i32, i32)) {
        let (w, h) = (canvas.width(), canvas.height());
        if w == 0 || h == 0 {
            return;
        }
        canvas.write_rgba8(&mut self.staging);
        let bytes: &[u8] = bytemuck::cast_slice(&self.staging);

        gl::ActiveTexture(gl::TEXTURE0);
        gl::BindTexture(gl::TEXTURE_2D, self.texture);
        gl::PixelStorei(gl::UNPACK_ALIGNMENT, 4);
        if self.texture_size != (w, h) {
            debug!("Reallocating canvas texture: {}x{}", w, h);
            gl::TexImage2D(
                gl::TEXTURE_2D,
                0,
                gl::RGBA8 as i32,
                w as i32,
                h as i32,
                0,
                gl::RGBA,
                gl::UNSIGNED_BYTE,
                bytes.as_ptr() as *const _,
            );
            self.texture_size = (w, h);
        } else {
            gl::TexSubImage2D(
                gl::TEXTURE_2D,
                0,
                0,
                0,
                w as i32,
                h as i32,
                gl::RGBA,
                gl::UNSIGNED_BYTE,
                bytes.as_ptr() as *const _,
            );
        }

        gl::Viewport(0, 0, viewport.0, viewport.1);
        gl::ClearColor(0.0, 0.0, 0.0, 1.0);
        gl::Clear(gl::COLOR_BUFFER_BIT);

        gl::UseProgram(self.program);
        gl::BindVertexArray(self.vao);
        gl::DrawArrays(gl::TRIANGLES, 0, 3);
        gl::BindVertexArray(0);
        gl::BindTexture(gl::TEXTURE_2D, 0);
        gl::UseProgram(0);
    }

    /// # Safety
    /// Le contexte OpenGL utilisé à la création doit être courant.
    pub unsafe fn close(&mut self) {
        gl::DeleteTextures(1, &self.texture);
        gl::DeleteVertexArrays(1, &self.vao);
        gl::DeleteProgram(self.program);
        self.texture = 0;
        self.vao = 0;
        self.program = 0;
        debug!("Canvas presenter closed.");
    }
}
