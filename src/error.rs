//! Error taxonomy for a scaffolding run.
//!
//! Only [`ScaffoldError::InvalidName`] ever crosses a component boundary as a
//! `Result`. Every other variant is rendered into the run's
//! [`GenerationResult`](crate::result::GenerationResult) as a message and the
//! run carries on.

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong while scaffolding a module
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// The raw module name contains no usable alphanumeric characters
    #[error("invalid module name {raw:?}: a module name needs at least one letter or digit")]
    InvalidName {
        /// The name exactly as supplied by the caller
        raw: String,
    },

    /// Creating a directory or writing a file failed
    #[error("failed to write {}: {source}", .path.display())]
    FileSystemWrite {
        /// Path that could not be created
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// The central registration list file does not exist
    #[error("registration file not found: {}", .path.display())]
    MissingRegistrationFile {
        /// Expected location of the registration list
        path: PathBuf,
    },

    /// The registration file exists but could not be read
    #[error("failed to read {}: {source}", .path.display())]
    FileSystemRead {
        /// Path that could not be read
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// The registration file has no closing list delimiter to insert before
    #[error("registration file {} has no closing `];` to insert before", .path.display())]
    MalformedRegistrationFile {
        /// Path of the registration list
        path: PathBuf,
    },

    /// The module's startup unit is already listed in the registration file
    #[error("{reference} is already registered")]
    AlreadyRegistered {
        /// Fully-qualified registration reference
        reference: String,
    },

    /// A template failed to render
    #[error("failed to render template {template}: {source}")]
    Render {
        /// Template file name
        template: &'static str,
        /// askama failure
        #[source]
        source: askama::Error,
    },
}

impl ScaffoldError {
    /// Convenience constructor for the write failure path
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ScaffoldError::FileSystemWrite {
            path: path.into(),
            source,
        }
    }
}

/// Result alias used by the naming layer
pub type Result<T> = std::result::Result<T, ScaffoldError>;
