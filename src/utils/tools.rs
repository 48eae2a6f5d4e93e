use log::info;

/// Versions des dépendances principales, injectées par `build.rs`.
pub fn core_dependencies() -> [(&'static str, &'static str); 4] {
    [
        ("GL", option_env!("GL_VERSION").unwrap_or("Unknown")),
        ("GLFW", option_env!("GLFW_VERSION").unwrap_or("Unknown")),
        ("GLAM", option_env!("GLAM_VERSION").unwrap_or("Unknown")),
        ("RAND", option_env!("RAND_VERSION").unwrap_or("Unknown")),
    ]
}

/// Affiche les informations Rust et les dépendances principales de la compilation.
pub fn show_rust_core_dependencies() {
    info!(
        "Rust compiler version: {}",
        rustc_version_runtime::version()
    );
    info!("  Platform    : {}", std::env::consts::OS);
    info!("  Arch        : {}", std::env::consts::ARCH);

    info!("Rust core dependancies");
    for (name, version) in core_dependencies() {
        info!("  {:<4} version: {}", name, version);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_rust_core_dependencies_no_panic() {
        show_rust_core_dependencies();
    }

    #[test]
    fn test_core_dependencies_are_named() {
        let deps = core_dependencies();
        assert!(deps.iter().all(|(_, version)| !version.is_empty()));
        assert_eq!(deps[1].0, "GLFW");
    }
}
