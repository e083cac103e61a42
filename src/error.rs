// src/error.rs
//! Error handling for the crate boundary.
//!
//! The simulation core itself never fails: component absence is `None`, not
//! an error. Everything that *can* fail sits at the edges (world-map files,
//! config files) and surfaces through this enum before entities reach the
//! core.

use thiserror::Error;

/// Main error type: lightweight, Send + Sync + 'static.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// I/O errors (unreadable map or config file).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Config (de)serialization.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed world map input.
    #[error("world map error: {0}")]
    WorldMap(String),

    /// Simple custom message (allocation only when the error happens).
    #[error("{0}")]
    Custom(String),

    /// Context chaining around an inner error.
    #[error("{message}: {source}")]
    WithContext {
        message: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Create a custom error message.
    #[inline]
    pub fn custom<S: Into<String>>(msg: S) -> Self {
        Self::Custom(msg.into())
    }

    /// Add context to any error (chainable).
    #[inline]
    pub fn context<C: Into<String>>(self, context: C) -> Self {
        Self::WithContext {
            message: context.into(),
            source: Box::new(self),
        }
    }

    #[inline]
    pub fn is_io(&self) -> bool {
        matches!(self, Error::Io(_))
    }

    #[inline]
    pub fn is_world_map(&self) -> bool {
        matches!(self, Error::WorldMap(_))
    }
}

/// Convenient `Result` alias; use `crate::Result<T>` everywhere.
pub type Result<T> = std::result::Result<T, Error>;
