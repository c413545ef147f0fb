//! Error type shared by the library and the command-line tool.
//!
//! Numeric degeneracies inside the physics (zero airspeed, unreachable
//! targets) are not errors; they produce sentinel values. Errors are reserved
//! for parameters rejected at the boundary, configuration that fails to load,
//! and runs that never reach the ground.

use std::error::Error;
use std::fmt;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, ProjectileError>;

/// Errors raised at the crate boundary
#[derive(Debug)]
pub enum ProjectileError {
    /// A launch parameter is outside its valid range.
    InvalidArgument {
        /// Parameter name as it appears in configuration files.
        name: &'static str,
        /// The rejected value.
        value: f64,
        /// Human-readable description of the valid range.
        reason: &'static str,
    },

    /// Configuration could not be parsed.
    Config(String),

    /// Configuration file could not be read.
    Io(std::io::Error),

    /// The run hit its step cap without landing.
    NoLanding {
        steps: usize,
    },
}

impl fmt::Display for ProjectileError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ProjectileError::InvalidArgument { name, value, reason } => {
                write!(f, "invalid {name} = {value}: {reason}")
            }
            ProjectileError::Config(msg) => write!(f, "configuration error: {msg}"),
            ProjectileError::Io(err) => write!(f, "i/o error: {err}"),
            ProjectileError::NoLanding { steps } => {
                write!(f, "projectile did not land within {steps} steps")
            }
        }
    }
}

impl Error for ProjectileError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ProjectileError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ProjectileError {
    fn from(err: std::io::Error) -> Self {
        ProjectileError::Io(err)
    }
}

impl From<toml::de::Error> for ProjectileError {
    fn from(err: toml::de::Error) -> Self {
        ProjectileError::Config(err.to_string())
    }
}

impl From<String> for ProjectileError {
    fn from(msg: String) -> Self {
        ProjectileError::Config(msg)
    }
}

impl From<&str> for ProjectileError {
    fn from(msg: &str) -> Self {
        ProjectileError::Config(msg.to_string())
    }
}
