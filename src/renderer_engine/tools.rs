use gl::types::*;
use log::{info, warn};
use std::collections::HashMap;
use std::ffi::CStr;
use std::os::raw::c_void;
use std::sync::Mutex;

lazy_static::lazy_static! {
    /// Nombre d'occurrences par id de message debug OpenGL
    static ref MESSAGE_COUNT: Mutex<HashMap<GLuint, u32>> = Mutex::new(HashMap::new());
}

#[macro_export]
macro_rules! cstr {
    ($s:expr) => {
        concat!($s, "\0").as_ptr() as *const gl::types::GLchar
    };
}

unsafe fn gl_string(name: GLenum) -> String {
    let ptr = gl::GetString(name);
    if ptr.is_null() {
        return "Unknown".into();
    }
    CStr::from_ptr(ptr as *const GLchar)
        .to_string_lossy()
        .into_owned()
}

/// Affiche les informations OpenGL / GPU du contexte actuel
///
/// # Safety
/// L'appelant doit s'assurer que le contexte OpenGL est valide et actif.
pub unsafe fn show_opengl_context_info() {
    info!("🖥 OpenGL context info:");
    info!("  Vendor   : {}", gl_string(gl::VENDOR));
    info!("  Renderer : {}", gl_string(gl::RENDERER));
    info!("  OpenGL   : {}", gl_string(gl::VERSION));
    info!("  GLSL     : {}", gl_string(gl::SHADING_LANGUAGE_VERSION));

    let err = gl::GetError();
    if err != gl::NO_ERROR {
        warn!("glerror consumed after getting context info: 0x{:X}", err);
    }
}

/// Callback debug OpenGL : les notifications sont ignorées, un même message
/// n'est loggé qu'à sa première occurrence puis toutes les 60.
extern "system" fn gl_debug_callback(
    _source: GLenum,
    type_: GLenum,
    id: GLuint,
    severity: GLenum,
    _length: GLsizei,
    message: *const GLchar,
    _user_param: *mut c_void,
) {
    if severity == gl::DEBUG_SEVERITY_NOTIFICATION || message.is_null() {
        return;
    }

    let count = {
        let Ok(mut counts) = MESSAGE_COUNT.lock() else {
            return;
        };
        let count = counts.entry(id).or_insert(0);
        *count += 1;
        *count
    };
    if count != 1 && count % 60 != 0 {
        return;
    }

    let msg = unsafe { CStr::from_ptr(message).to_string_lossy() };
    let type_str = match type_ {
        gl::DEBUG_TYPE_ERROR => "Error",
        gl::DEBUG_TYPE_DEPRECATED_BEHAVIOR => "Deprecated Behavior",
        gl::DEBUG_TYPE_UNDEFINED_BEHAVIOR => "Undefined Behavior",
        gl::DEBUG_TYPE_PORTABILITY => "Portability",
        gl::DEBUG_TYPE_PERFORMANCE => "Performance",
        _ => "Other",
    };
    warn!(
        "[OpenGL Debug] id: {:X}, type: {}, seen: {}, message: {}",
        id, type_str, count, msg
    );
}

/// Active la sortie debug OpenGL (si le driver la supporte).
///
/// # Safety
/// Le contexte OpenGL doit être actif ; le callback reste valide pendant toute
/// la durée du programme (fonction statique).
pub unsafe fn setup_opengl_debug() {
    if !gl::DebugMessageCallback::is_loaded() {
        info!("OpenGL debug output not available");
        return;
    }
    gl::Enable(gl::DEBUG_OUTPUT);
    gl::Enable(gl::DEBUG_OUTPUT_SYNCHRONOUS);
    gl::DebugMessageCallback(Some(gl_debug_callback), std::ptr::null());
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CString;

    #[test]
    fn test_cstr_macro() {
        let ptr = cstr!("uCanvas");
        let c_str = unsafe { CStr::from_ptr(ptr) };
        assert_eq!(c_str.to_str().unwrap(), "uCanvas");
    }

    #[test]
    fn test_gl_debug_callback_counts_messages() {
        let id = 0x0BAD_F00D;
        let msg = CString::new("Test debug message").unwrap();
        for _ in 0..3 {
            gl_debug_callback(
                gl::DEBUG_SOURCE_APPLICATION,
                gl::DEBUG_TYPE_ERROR,
                id,
                gl::DEBUG_SEVERITY_HIGH,
                0,
                msg.as_ptr(),
                std::ptr::null_mut(),
            );
        }
        assert_eq!(MESSAGE_COUNT.lock().unwrap().get(&id), Some(&3));
    }

    #[test]
    fn test_gl_debug_callback_ignores_notifications() {
        let id = 0x0000_1234;
        let msg = CString::new("just a notification").unwrap();
        gl_debug_callback(
            gl::DEBUG_SOURCE_API,
            gl::DEBUG_TYPE_OTHER,
            id,
            gl::DEBUG_SEVERITY_NOTIFICATION,
            0,
            msg.as_ptr(),
            std::ptr::null_mut(),
        );
        assert_eq!(MESSAGE_COUNT.lock().unwrap().get(&id), None);
    }
}
