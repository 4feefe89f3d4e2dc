//! Program settings.

use std::{env, ffi, path};

/// Environment variable overriding the texture image path.
pub const IMAGE_ENV: &str = "GLQUAD_IMAGE";

/// Window and asset settings shared by the demo programs.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Window title.
    pub title: String,

    /// Initial window width in logical pixels.
    pub width: u32,

    /// Initial window height in logical pixels.
    pub height: u32,

    /// Number of multisampling samples; zero disables multisampling.
    pub samples: u16,

    /// Synchronize buffer swaps with the display refresh.
    pub vsync: bool,

    /// Image file uploaded as the texture.
    pub image: path::PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "OpenGL Example".to_owned(),
            width: 1280,
            height: 720,
            samples: 4,
            vsync: true,
            image: path::PathBuf::from("assets/test.jpg"),
        }
    }
}

impl Config {
    /// Default settings overridden by the process environment.
    pub fn from_env() -> Self {
        Self::default().with_lookup(|key| env::var_os(key))
    }

    /// Applies overrides from a variable lookup function.
    pub fn with_lookup<F>(mut self, lookup: F) -> Self
        where F: Fn(&str) -> Option<ffi::OsString>
    {
        if let Some(image) = lookup(IMAGE_ENV).filter(|value| !value.is_empty()) {
            self.image = path::PathBuf::from(image);
        }
        self
    }

    /// Replaces the window title.
    pub fn with_title<S: Into<String>>(mut self, title: S) -> Self {
        self.title = title.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_demo_window() {
        let config = Config::default();
        assert_eq!(config.title, "OpenGL Example");
        assert_eq!((config.width, config.height), (1280, 720));
        assert_eq!(config.samples, 4);
        assert!(config.vsync);
        assert_eq!(config.image, path::PathBuf::from("assets/test.jpg"));
    }

    #[test]
    fn lookup_overrides_image_path() {
        let config = Config::default().with_lookup(|key| {
            assert_eq!(key, IMAGE_ENV);
            Some(ffi::OsString::from("/tmp/wall.png"))
        });
        assert_eq!(config.image, path::PathBuf::from("/tmp/wall.png"));
    }

    #[test]
    fn empty_override_is_ignored() {
        let config = Config::default().with_lookup(|_| Some(ffi::OsString::new()));
        assert_eq!(config.image, Config::default().image);
        let config = Config::default().with_lookup(|_| None);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn with_title_replaces_title() {
        assert_eq!(Config::default().with_title("fps").title, "fps");
    }
}
