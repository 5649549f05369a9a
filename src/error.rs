//! Common error types.

use std::fmt::Display;
use std::path::Path;

/// A shortcut type equivalent to `Result<T, linkly_card::Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents an error that occurs within the crate.
#[derive(Debug)]
pub enum Error {
    SurfaceUnavailable(i32, i32, String),
    CairoError(String),
    PngEncodeError(String),
    PngDecodeError(String),
    IoError(String, String),
    ShareFailed(String),
    UnknownStyle(String),
    UnknownFont(String),
    ConfigOpen(String, String),
    ConfigDeser(String, String),
    WorkoutOpen(String, String),
    WorkoutDeser(String, String),
    NoEnvVariable(&'static str),
}

impl Error {
    pub fn surface(width: i32, height: i32, e: impl Display) -> Self {
        Self::SurfaceUnavailable(width, height, e.to_string())
    }

    pub fn cairo(e: impl Display) -> Self {
        Self::CairoError(e.to_string())
    }

    pub fn png_encode(e: impl Display) -> Self {
        Self::PngEncodeError(e.to_string())
    }

    pub fn png_decode(e: impl Display) -> Self {
        Self::PngDecodeError(e.to_string())
    }

    pub fn io(path: impl AsRef<Path>, e: impl Display) -> Self {
        Self::IoError(path.as_ref().display().to_string(), e.to_string())
    }

    pub fn share(e: impl Display) -> Self {
        Self::ShareFailed(e.to_string())
    }

    pub fn unknown_style(name: impl Into<String>) -> Self {
        Self::UnknownStyle(name.into())
    }

    pub fn unknown_font(name: impl Into<String>) -> Self {
        Self::UnknownFont(name.into())
    }

    pub fn config_open(path: impl AsRef<Path>, e: impl Display) -> Self {
        Self::ConfigOpen(path.as_ref().display().to_string(), e.to_string())
    }

    pub fn config_deser(path: impl AsRef<Path>, e: impl Display) -> Self {
        Self::ConfigDeser(path.as_ref().display().to_string(), e.to_string())
    }

    pub fn workout_open(path: impl AsRef<Path>, e: impl Display) -> Self {
        Self::WorkoutOpen(path.as_ref().display().to_string(), e.to_string())
    }

    pub fn workout_deser(path: impl AsRef<Path>, e: impl Display) -> Self {
        Self::WorkoutDeser(path.as_ref().display().to_string(), e.to_string())
    }

    pub fn no_env_variable(var: &'static str) -> Self {
        Self::NoEnvVariable(var)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SurfaceUnavailable(w, h, e) => {
                write!(f, "could not acquire a {w}x{h} drawing surface: {e}")
            }
            Self::CairoError(e) => write!(f, "cairo error: {e}"),
            Self::PngEncodeError(e) => write!(f, "failed to encode PNG: {e}"),
            Self::PngDecodeError(e) => write!(f, "failed to decode PNG: {e}"),
            Self::IoError(path, e) => write!(f, "failed to write {path}: {e}"),
            Self::ShareFailed(e) => write!(f, "share failed: {e}"),
            Self::UnknownStyle(name) => write!(f, "unknown style `{name}`"),
            Self::UnknownFont(name) => write!(f, "font family `{name}` is not installed"),
            Self::ConfigOpen(path, e) => write!(f, "failed to open config {path}: {e}"),
            Self::ConfigDeser(path, e) => write!(f, "invalid config {path}: {e}"),
            Self::WorkoutOpen(path, e) => write!(f, "failed to open workout {path}: {e}"),
            Self::WorkoutDeser(path, e) => write!(f, "invalid workout {path}: {e}"),
            Self::NoEnvVariable(var) => write!(f, "missing environment variable: {var}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<cairo::Error> for Error {
    fn from(e: cairo::Error) -> Self {
        Self::cairo(e)
    }
}
